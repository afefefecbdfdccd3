//! Type definitions and enums for the application state and navigation.

use crate::difficulty::Difficulty;

/// Enumeration of available application screens.
///
/// This enumeration holds information about the current screen of the game. This is used to
/// determine which screen to render and what actions to take based on user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Screen {
    /// Main menu screen of the game.
    ///
    /// This variant represents the main menu screen with the currently highlighted item.
    MainMenu(MainMenuItem),
    /// Difficulty selection screen.
    ///
    /// This variant represents the difficulty menu. It holds the preset under the cursor, which is
    /// not necessarily the one in use.
    DifficultyMenu(Difficulty),
    /// In-game maze screen.
    ///
    /// This variant represents the screen where the maze is displayed and played.
    InGame,
}

/// Main menu navigation options.
///
/// This enumeration holds the different items in the main menu. It is used to determine which items
/// can the user select in the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MainMenuItem {
    /// "Start Game" menu option.
    StartGame,
    /// "Difficulty" menu option.
    ChooseDifficulty,
    /// "Quit" menu option.
    Quit,
}

impl MainMenuItem {
    /// Returns the item below this one, staying on the last item.
    pub(crate) const fn next(self) -> Self {
        match self {
            Self::StartGame => Self::ChooseDifficulty,
            Self::ChooseDifficulty | Self::Quit => Self::Quit,
        }
    }

    /// Returns the item above this one, staying on the first item.
    pub(crate) const fn previous(self) -> Self {
        match self {
            Self::StartGame | Self::ChooseDifficulty => Self::StartGame,
            Self::Quit => Self::ChooseDifficulty,
        }
    }

    /// Returns the label shown for this item.
    pub(crate) const fn label(self) -> &'static str {
        match self {
            Self::StartGame => "Start Game",
            Self::ChooseDifficulty => "Difficulty",
            Self::Quit => "Quit",
        }
    }
}

/// Generic menu type configuration.
///
/// This enumeration holds the different specifics particular to each generic menu type in the
/// application's interface. Generic here means they share enough features to be considered worth
/// joining together part of their functionality.
pub(crate) enum MenuType {
    /// Main menu configuration.
    ///
    /// This variant represents the main menu in the game.
    MainMenu(u8),
    /// Difficulty menu configuration.
    ///
    /// This variant represents the difficulty selection menu in the game.
    DifficultyMenu(u8),
}

impl MenuType {
    /// Returns the string representation of the menu type.
    ///
    /// This function provides the display name for each menu variant, used as the title in the
    /// menu's border when rendering the interface.
    pub(crate) const fn repr(&self) -> &str {
        match self {
            Self::MainMenu(_) => "Main Menu",
            Self::DifficultyMenu(_) => "Difficulty",
        }
    }

    /// Returns the key hint shown at the bottom of the menu's border.
    pub(crate) const fn hint(&self) -> &str {
        match self {
            Self::MainMenu(_) => "(j/k) move (l) select",
            Self::DifficultyMenu(_) => "(j/k) move (l) pick (h) back",
        }
    }

    /// Returns the numeric value stored by the menu type variant.
    ///
    /// This function provides access to the number of menu items for layout calculations, allowing
    /// the UI to properly size the menu containers.
    pub(crate) const fn value(&self) -> u8 {
        match self {
            Self::MainMenu(value) | Self::DifficultyMenu(value) => *value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_menu_item_navigation() {
        assert_eq!(
            MainMenuItem::StartGame.next(),
            MainMenuItem::ChooseDifficulty,
            "start game leads to difficulty"
        );
        assert_eq!(MainMenuItem::ChooseDifficulty.next(), MainMenuItem::Quit, "then quit");
        assert_eq!(MainMenuItem::Quit.next(), MainMenuItem::Quit, "quit is the last item");

        assert_eq!(
            MainMenuItem::Quit.previous(),
            MainMenuItem::ChooseDifficulty,
            "quit goes back to difficulty"
        );
        assert_eq!(
            MainMenuItem::StartGame.previous(),
            MainMenuItem::StartGame,
            "start game is the first item"
        );
    }

    #[test]
    fn test_main_menu_item_labels() {
        assert_eq!(MainMenuItem::StartGame.label(), "Start Game", "label");
        assert_eq!(MainMenuItem::ChooseDifficulty.label(), "Difficulty", "label");
        assert_eq!(MainMenuItem::Quit.label(), "Quit", "label");
    }

    #[test]
    fn test_screen_variants() {
        let main_menu = Screen::MainMenu(MainMenuItem::StartGame);
        let difficulty_menu = Screen::DifficultyMenu(Difficulty::Hard);

        assert_ne!(main_menu, Screen::InGame, "screens should differ");
        assert_ne!(
            difficulty_menu,
            Screen::DifficultyMenu(Difficulty::Easy),
            "cursor is part of the screen"
        );
    }

    #[test]
    fn test_menu_type_repr() {
        let main_menu = MenuType::MainMenu(3);
        let difficulty_menu = MenuType::DifficultyMenu(4);

        assert_eq!(main_menu.repr(), "Main Menu", "main menu title");
        assert_eq!(difficulty_menu.repr(), "Difficulty", "difficulty menu title");
    }

    #[test]
    fn test_menu_type_value() {
        let main_menu = MenuType::MainMenu(3);
        let difficulty_menu = MenuType::DifficultyMenu(4);

        assert_eq!(main_menu.value(), 3, "main menu item count");
        assert_eq!(difficulty_menu.value(), 4, "difficulty menu item count");
    }
}
