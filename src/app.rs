//! Core application state and logic for the maze game.

use color_eyre::eyre::Result;
use log::info;
use rand::{rngs::StdRng, SeedableRng as _};
use ratatui::DefaultTerminal;

use crate::{
    difficulty::Difficulty,
    events,
    session::Session,
    types::{MainMenuItem, Screen},
    ui,
};

/// Application state container for the maze game.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the game and Crossterm events will help writing to.
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the user
    /// wants to quit the game but it starts off `false`.
    pub(crate) exit: bool,
    /// Current screen being displayed to the user.
    ///
    /// This field holds the current screen of the game. It is used to determine which screen to
    /// render and what actions to take based on user input.
    pub(crate) screen: Screen,
    /// Difficulty used for the next generated maze.
    pub(crate) difficulty: Difficulty,
    /// Game currently being played.
    ///
    /// This field is [`None`] while no maze is in play, which is the idle state before a game is
    /// started and after it is abandoned. Movement keys are only dispatched while it holds a
    /// session.
    pub(crate) session: Option<Session>,
    /// Seed the random source was created from, shown so a run can be replayed.
    pub(crate) seed: u64,
    /// Random source shared by every maze generated during this run.
    pub(crate) rng: StdRng,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Difficulty::default(), rand::random())
    }
}

impl App {
    /// Creates a new instance of the App structure on the main menu.
    ///
    /// No maze is generated yet; that happens when the player starts a game.
    pub fn new(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            exit: false,
            screen: Screen::MainMenu(MainMenuItem::StartGame),
            difficulty,
            session: None,
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns the game currently being played, if any.
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Returns the difficulty used for the next generated maze.
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Runs the main loop of the application.
    ///
    /// This function handles user input and updates the application state. The loop continues until
    /// the exit condition is `true`, after which the function returns to the call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        info!("starting on {} with seed {}", self.difficulty, self.seed);

        while !self.exit {
            let _ = terminal
                .try_draw(|frame| ui::draw(self, frame).map_err(std::io::Error::other))?;
            events::handle_events(self)?;
        }

        Ok(())
    }

    /// Replaces the current game with a freshly generated maze for the selected difficulty.
    ///
    /// # Errors
    ///
    /// This function may return errors from maze generation.
    pub(crate) fn start_session(&mut self) -> Result<()> {
        let config = self.difficulty.config();
        let session = Session::new(config.size, config.start, config.end, &mut self.rng)?;

        info!(
            "new {} maze of size {}, optimal route {:?}",
            self.difficulty,
            config.size,
            session.min_steps()
        );

        self.session = Some(session);
        self.screen = Screen::InGame;

        Ok(())
    }

    /// Discards the current game and returns to the main menu.
    pub(crate) fn end_session(&mut self) {
        self.session = None;
        self.screen = Screen::MainMenu(MainMenuItem::StartGame);
    }

    /// Switches the difficulty used for the next generated maze.
    ///
    /// Menus are only reachable once the current game has been dropped, so there is no session to
    /// carry over.
    pub(crate) fn select_difficulty(&mut self, difficulty: Difficulty) {
        if self.difficulty != difficulty {
            info!("difficulty changed from {} to {difficulty}", self.difficulty);
        }
        self.difficulty = difficulty;
    }
}
