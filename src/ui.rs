//! User interface rendering functions for all application screens.

use std::rc::Rc;

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    symbols::{Marker, DOT},
    text::Line,
    widgets::{
        canvas::{Canvas, Points},
        Block, BorderType, Borders, Clear, Paragraph,
    },
    Frame,
};

use crate::{
    difficulty::Difficulty,
    grid::{Cell, Coordinate},
    session::Session,
    types::{MainMenuItem, MenuType, Screen},
    App,
};

/// Width of the completion popup, borders included.
const MODAL_WIDTH: u16 = 46;

/// Canvas points drawn in a single colour.
type Layer = (Vec<(f64, f64)>, Color);

/// Updates the application UI based on the persistent state.
///
/// This function renders different screens based on the current state stored in the [`App`]
/// structure, dispatching to the appropriate rendering function for each screen type.
///
/// # Errors
///
/// This function may return errors from drawing operations or data conversion failures.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    match app.screen {
        Screen::MainMenu(item) => main_menu(frame, item),
        Screen::DifficultyMenu(cursor) => difficulty_menu(frame, cursor, app.difficulty),
        Screen::InGame => in_game(app, frame)?,
    }

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Renders the generic layout structure for the main and difficulty menus.
///
/// This function creates the common layout and block structure used by both menus. The generic part
/// includes the centered positioning and border styling, while the specific menu content is handled
/// by the caller using the [`MenuType`] parameter.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
pub(crate) fn init_menu(frame: &mut Frame, menu: &MenuType) -> Rc<[Rect]> {
    let space = Layout::horizontal([
        Constraint::Percentage(30),
        Constraint::Percentage(40),
        Constraint::Percentage(30),
    ])
    .split(frame.area())[1];

    let layout = Layout::vertical([Constraint::Length(u16::from(menu.value()) + 2)])
        .flex(Flex::Center)
        .split(space)[0];

    let block = Block::bordered()
        .title(menu.repr())
        .title_bottom(menu.hint())
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(layout);

    frame.render_widget(block, layout);

    Layout::vertical(vec![Constraint::Max(1); usize::from(menu.value())]).split(inner_space)
}

/// Renders the main menu screen with navigation options.
///
/// This function displays the main menu with options for "Start Game", "Difficulty", and "Quit".
/// It highlights the currently selected option.
pub(crate) fn main_menu(frame: &mut Frame, item: MainMenuItem) {
    clear(frame);

    let inner_layout = init_menu(frame, &MenuType::MainMenu(3));

    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    let entries = [
        MainMenuItem::StartGame,
        MainMenuItem::ChooseDifficulty,
        MainMenuItem::Quit,
    ];
    for (entry, area) in entries.into_iter().zip(inner_layout.iter()) {
        let style = if entry == item {
            active_content_style
        } else {
            content_style
        };
        frame.render_widget(Line::styled(entry.label(), style).centered(), *area);
    }
}

/// Renders the difficulty menu with one line per preset.
///
/// The preset under the cursor is highlighted and the preset currently in use is marked with a dot,
/// the same way the active entry of a list is marked elsewhere in the interface.
pub(crate) fn difficulty_menu(frame: &mut Frame, cursor: Difficulty, active: Difficulty) {
    clear(frame);

    let inner_layout = init_menu(frame, &MenuType::DifficultyMenu(4));

    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    for (difficulty, area) in Difficulty::ALL.into_iter().zip(inner_layout.iter()) {
        let style = if difficulty == cursor {
            active_content_style
        } else {
            content_style
        };
        let selector = if difficulty == active { DOT } else { " " };
        let size = difficulty.size();

        frame.render_widget(
            Line::styled(format!("{selector} {difficulty} ({size}x{size})"), style).centered(),
            *area,
        );
    }
}

/// Transforms maze coordinates to canvas coordinates for half-block rendering.
///
/// Each maze column maps onto one canvas column and each maze row onto one half-block pixel row.
/// The canvas counts its y axis upwards, so rows are flipped against the number of pixel rows
/// available, which is twice the terminal rows needed to hold `size` maze rows.
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations.
pub(crate) fn to_canvas_coords(cells: &[Coordinate], size: usize) -> Result<Vec<(f64, f64)>> {
    let pixel_rows = f64::from(u16::try_from(size.div_ceil(2))?) * 2.;

    cells
        .iter()
        .map(|cell| {
            let canvas_x = f64::from(u16::try_from(cell.col)?);
            let canvas_y = pixel_rows - 1. - f64::from(u16::try_from(cell.row)?);

            Ok((canvas_x, canvas_y))
        })
        .collect()
}

/// Collects the coloured point layers of a session, from bottom to top.
fn maze_layers(session: &Session) -> Result<Vec<Layer>> {
    let size = session.grid().size();
    let walls: Vec<Coordinate> = session
        .grid()
        .cells()
        .filter(|(_, cell)| *cell == Cell::Wall)
        .map(|(coordinate, _)| coordinate)
        .collect();

    Ok(vec![
        (to_canvas_coords(&walls, size)?, Color::Green),
        (to_canvas_coords(session.footprints(), size)?, Color::Yellow),
        (to_canvas_coords(&[session.start()], size)?, Color::Red),
        (to_canvas_coords(&[session.end()], size)?, Color::Cyan),
        (to_canvas_coords(&[session.player()], size)?, Color::LightBlue),
    ])
}

/// Renders the in-game screen with the maze, the player and the status bar.
///
/// This function draws the maze of the current session on a half-block [`Canvas`], so every maze
/// cell takes half a terminal cell vertically and keeps a roughly square shape. The status bar sits
/// at the bottom and the completion popup is layered on top once the end has been reached.
///
/// # Errors
///
/// This function may return errors if there is no session or from coordinate conversions.
pub(crate) fn in_game(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let session = app
        .session
        .as_ref()
        .ok_or_eyre("failed to retrieve the session to render")?;
    let size = session.grid().size();
    let canvas_width = u16::try_from(size)?;
    let canvas_height = u16::try_from(size.div_ceil(2))?;

    // Maze area on top, status bar at the bottom
    let overall_layout =
        Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).split(frame.area());

    let maze_content_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get maze content area from layout")?;
    let status_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get status area from layout")?;

    let maze_area = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(canvas_height),
        Constraint::Min(1),
    ])
    .split(maze_content_area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get maze area from layout")?;

    let space = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(canvas_width),
        Constraint::Min(1),
    ])
    .split(maze_area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get maze space from horizontal layout")?;

    // Pre-compute canvas coordinates to handle errors before closures
    let layers = maze_layers(session)?;

    let maze = Canvas::default()
        .x_bounds([0., f64::from(canvas_width) - 1.])
        .y_bounds([0., f64::from(canvas_height) * 2. - 1.])
        .marker(Marker::HalfBlock)
        .paint(|ctx| {
            for (coords, color) in &layers {
                ctx.draw(&Points {
                    coords,
                    color: *color,
                });
            }
        });

    frame.render_widget(maze, space);

    status_bar(app, session, frame, status_area);

    if session.is_completed() {
        completion_modal(session, frame);
    }

    Ok(())
}

/// Renders the status bar with the key bindings and the current score.
fn status_bar(app: &App, session: &Session, frame: &mut Frame, area: Rect) {
    let block = Block::bordered()
        .title("(arrows/wasd) move / (r) restart / (n) new maze / (h) menu")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);

    let best = session
        .min_steps()
        .map_or_else(|| "unavailable".to_owned(), |steps| steps.to_string());
    let status = Line::raw(format!(
        "{} | seed {} | moves {} | best {best}",
        app.difficulty,
        app.seed,
        session.moves()
    ))
    .centered();

    let inner_space = block.inner(area);

    frame.render_widget(block, area);
    frame.render_widget(status, inner_space);
}

/// Renders the popup shown once the player reaches the end of the maze.
fn completion_modal(session: &Session, frame: &mut Frame) {
    let optimal = session.min_steps().map_or_else(
        || "Optimal route: unavailable".to_owned(),
        |steps| format!("Optimal route: {steps} moves"),
    );
    let lines = vec![
        Line::raw(format!("You reached the exit in {} moves!", session.moves())),
        Line::raw(optimal),
        Line::raw("(r) play again / (n) new maze / (h) menu"),
    ];

    let [area] = Layout::vertical([Constraint::Length(5)])
        .flex(Flex::Center)
        .areas(frame.area());
    let [area] = Layout::horizontal([Constraint::Length(MODAL_WIDTH)])
        .flex(Flex::Center)
        .areas(area);

    let block = Block::bordered()
        .title("Maze complete")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow))
        .border_type(BorderType::Double);
    let modal = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(Clear, area);
    frame.render_widget(modal, area);
}
