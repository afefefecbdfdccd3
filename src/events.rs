//! Event handling functions for user input and application state updates.

use std::time::Duration;

use color_eyre::eyre::Result;
use log::debug;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::{
    grid::Direction,
    types::{MainMenuItem, Screen},
    App,
};

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard events and dispatches key presses to [`handle_key`]. It uses a
/// timeout to avoid blocking the UI.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(app, key.code)?;
            }
        }
    }

    Ok(())
}

/// Dispatches a single key press based on the current screen.
///
/// The 'q' key quits from every screen. In game, keys are routed to [`handle_game_events`];
/// everywhere else the menu keys 'j', 'k', 'l' and 'h' apply.
pub(crate) fn handle_key(app: &mut App, code: KeyCode) -> Result<()> {
    if code == KeyCode::Char('q') {
        app.exit = true;
        return Ok(());
    }

    if app.screen == Screen::InGame {
        return handle_game_events(app, code);
    }

    match code {
        KeyCode::Char('j') => handle_j_events(app),
        KeyCode::Char('k') => handle_k_events(app),
        KeyCode::Char('l') => handle_l_events(app)?,
        KeyCode::Char('h') => handle_h_events(app),
        _ => {}
    }

    Ok(())
}

/// Maps a key onto a logical movement direction.
///
/// Both the arrow keys and the WASD cluster are accepted.
pub(crate) const fn direction_for(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') => Some(Direction::Right),
        _ => None,
    }
}

/// Handles key presses on the in-game screen.
///
/// Movement keys are forwarded to the session only while it is still active. 'r' restarts the same
/// maze, 'n' generates a new one and 'h' or Escape abandons the game.
pub(crate) fn handle_game_events(app: &mut App, code: KeyCode) -> Result<()> {
    if let Some(direction) = direction_for(code) {
        if let Some(session) = app.session.as_mut().filter(|session| !session.is_completed()) {
            let outcome = session.attempt_move(direction);
            debug!("move {direction:?}: {outcome:?}");
        }
        return Ok(());
    }

    match code {
        KeyCode::Char('r') => {
            if let Some(session) = app.session.as_mut() {
                session.reset();
            }
        }
        KeyCode::Char('n') => app.start_session()?,
        KeyCode::Char('h') | KeyCode::Esc => app.end_session(),
        _ => {}
    }

    Ok(())
}

/// Handles 'j' key press events for downward navigation.
///
/// This function moves the cursor one item down in the main menu or one preset harder in the
/// difficulty menu.
pub(crate) const fn handle_j_events(app: &mut App) {
    match app.screen {
        Screen::MainMenu(item) => app.screen = Screen::MainMenu(item.next()),
        Screen::DifficultyMenu(cursor) => app.screen = Screen::DifficultyMenu(cursor.harder()),
        Screen::InGame => {}
    }
}

/// Handles 'k' key press events for upward navigation.
///
/// This function moves the cursor one item up in the main menu or one preset easier in the
/// difficulty menu.
pub(crate) const fn handle_k_events(app: &mut App) {
    match app.screen {
        Screen::MainMenu(item) => app.screen = Screen::MainMenu(item.previous()),
        Screen::DifficultyMenu(cursor) => app.screen = Screen::DifficultyMenu(cursor.easier()),
        Screen::InGame => {}
    }
}

/// Handles 'l' key press events for selection and forward navigation.
///
/// This function processes the 'l' key press which is used for selecting menu items. Starting a
/// game generates a new maze, and picking a difficulty applies it without leaving the menu.
pub(crate) fn handle_l_events(app: &mut App) -> Result<()> {
    match app.screen {
        Screen::MainMenu(MainMenuItem::StartGame) => app.start_session()?,
        Screen::MainMenu(MainMenuItem::ChooseDifficulty) => {
            app.screen = Screen::DifficultyMenu(app.difficulty);
        }
        Screen::MainMenu(MainMenuItem::Quit) => app.exit = true,
        Screen::DifficultyMenu(cursor) => app.select_difficulty(cursor),
        Screen::InGame => {}
    }

    Ok(())
}

/// Handles 'h' key press events for backward navigation.
///
/// This function returns from the difficulty menu to the main menu.
pub(crate) const fn handle_h_events(app: &mut App) {
    if let Screen::DifficultyMenu(_) = app.screen {
        app.screen = Screen::MainMenu(MainMenuItem::ChooseDifficulty);
    }
}
