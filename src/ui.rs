//! User interface rendering for the maze viewer.

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Points},
        Block, BorderType, Borders, Clear,
    },
    Frame,
};

use crate::{
    app::App,
    maze::Maze,
    types::{Cell, Position},
};

/// Key bindings shown above the status line.
const KEY_HINTS: &str = "(s) search / (f) finish / (r) reset / (q) quit";

/// Renders the maze, the replay of the last search and the status line.
///
/// Walls, visited cells, route cells and the two endpoints are drawn as separate [`Canvas`] layers
/// on top of each other, centered in the frame.
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations when the maze is too
/// large to be addressed by terminal cells.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let maze_rows = u16::try_from(app.maze.num_rows())?;
    let maze_columns = u16::try_from(app.maze.num_cols())?;

    // Create overall layout: maze area + tooltip at bottom
    let overall_layout = Layout::vertical([Constraint::Min(1), Constraint::Length(3)])
        .split(frame.area());

    let maze_content_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get maze content area from layout")?;
    let tooltip_full_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get tooltip area from layout")?;

    let space = centered(
        centered(maze_content_area, Direction::Vertical, maze_rows)?,
        Direction::Horizontal,
        maze_columns,
    )?;

    let (explored, path) = if app.animation_manager.steps.is_empty() {
        (
            app.maze.positions_of(Cell::Tried).collect(),
            app.maze.positions_of(Cell::Path).collect(),
        )
    } else {
        (
            app.animation_manager.explored.clone(),
            app.animation_manager.path.clone(),
        )
    };
    let endpoints: Vec<Position> = app.maze.start().into_iter().chain(app.maze.exit()).collect();
    let walls: Vec<Position> = app.maze.positions_of(Cell::Wall).collect();

    let layers = [
        (to_screen_coords(&walls, &app.maze)?, Color::Green),
        (to_screen_coords(&explored, &app.maze)?, Color::DarkGray),
        (to_screen_coords(&path, &app.maze)?, Color::Red),
        (to_screen_coords(&endpoints, &app.maze)?, Color::Yellow),
    ];

    for (coords, color) in &layers {
        let canvas = Canvas::default()
            .x_bounds([
                (-rounded_div::i32(space.width.into(), 2)).into(),
                (rounded_div::i32(space.width.into(), 2)).into(),
            ])
            .y_bounds([
                (-rounded_div::i32(space.height.into(), 2)).into(),
                (rounded_div::i32(space.height.into(), 2)).into(),
            ])
            .marker(Marker::Block)
            .paint(|ctx| {
                ctx.draw(&Points {
                    coords,
                    color: *color,
                });
            });

        frame.render_widget(canvas, space);
    }

    // Center the tooltip horizontally like the maze
    let tooltip_width = maze_columns.max(u16::try_from(KEY_HINTS.len())?);
    let tooltip_area = centered(tooltip_full_area, Direction::Horizontal, tooltip_width)?;

    let tooltip_block = Block::bordered()
        .title(KEY_HINTS)
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);
    let status_area = tooltip_block.inner(tooltip_area);

    frame.render_widget(tooltip_block, tooltip_area);
    frame.render_widget(Line::raw(app.status.describe()).centered(), status_area);

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

/// Returns the middle slice of `area`, `length` cells long along `direction`.
fn centered(area: Rect, direction: Direction, length: u16) -> Result<Rect> {
    Layout::new(
        direction,
        [
            Constraint::Min(1),
            Constraint::Length(length),
            Constraint::Min(1),
        ],
    )
    .split(area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get centered area from layout")
}

/// Transforms maze coordinates to screen coordinates for canvas rendering.
///
/// This function converts maze positions to canvas coordinates using the standard transformation
/// formulas: coordinate[i] = (n - 1) / 2 - i for rows (ascending order) and coordinate[i] = i -
/// (n - 1) / 2 for columns (descending order).
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations.
pub(crate) fn to_screen_coords(positions: &[Position], maze: &Maze) -> Result<Vec<(f64, f64)>> {
    let rows_n = f64::from(u16::try_from(maze.num_rows())?);
    let cols_n = f64::from(u16::try_from(maze.num_cols())?);

    positions
        .iter()
        .map(|pos| {
            // Row transformation: coordinate[i] = (n - 1) / 2 - i
            let screen_y = (rows_n - 1.) / 2. - f64::from(u16::try_from(pos.row)?);

            // Column transformation: coordinate[i] = i - (n - 1) / 2
            let screen_x = f64::from(u16::try_from(pos.col)?) - (cols_n - 1.) / 2.;

            Ok((screen_x, screen_y))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::Preset;
    use ratatui::{backend::TestBackend, Terminal};

    /// Creates a test terminal with known dimensions for UI testing.
    fn create_test_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(80, 24);
        Terminal::new(backend).expect("failed to create test terminal")
    }

    /// Creates a viewer over a preset maze.
    fn create_test_app(preset: Preset) -> App {
        App::new(preset.build().expect("preset should build"), None)
    }

    /// Collects the rendered buffer into one string.
    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_draw_idle() {
        let app = create_test_app(Preset::Labyrinth);
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "rendering an idle maze should succeed");
        let text = screen_text(&terminal);
        assert!(text.contains("press (s) to search"), "status line missing");
        assert!(text.contains("(q) quit"), "key hints missing");
    }

    #[test]
    fn test_draw_after_search() {
        let mut app = create_test_app(Preset::Corners);
        let mut terminal = create_test_terminal();

        app.solve().expect("corners preset is solvable");
        app.animation_manager.finish();

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "rendering a solved maze should succeed");
        assert!(
            screen_text(&terminal).contains("path found through 5 cells"),
            "status line missing"
        );
    }

    #[test]
    fn test_draw_out_of_budget_uses_maze_marks() {
        let maze = Preset::Labyrinth.build().expect("preset should build");
        let mut app = App::new(maze, Some(3));
        let mut terminal = create_test_terminal();

        app.solve().expect("running out of budget is reported in the status");

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "rendering an abandoned search should succeed");
        assert!(
            screen_text(&terminal).contains("gave up after 3 steps"),
            "status line missing"
        );
    }

    #[test]
    fn test_draw_too_wide_maze_error() {
        let maze = Maze::new(1, usize::from(u16::MAX) + 1).expect("maze dimensions are positive");
        let app = App::new(maze, None);
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            assert!(
                draw(&app, frame).is_err(),
                "drawing should fail for a maze wider than the terminal can address"
            );
        });

        assert!(
            result.is_ok(),
            "terminal drawing should succeed even if draw fails"
        );
    }

    #[test]
    fn test_clear_function() {
        let mut terminal = create_test_terminal();

        let result = terminal.draw(clear);

        assert!(result.is_ok(), "clearing the frame should succeed");
    }

    #[test]
    fn test_to_screen_coords() {
        let maze = Maze::new(3, 3).expect("maze dimensions are positive");
        let positions = [Position::new(0, 0), Position::new(1, 1), Position::new(2, 0)];

        let coords = to_screen_coords(&positions, &maze).expect("small maze converts");

        assert_eq!(coords, vec![(-1., 1.), (0., 0.), (-1., -1.)]);
    }

    #[test]
    fn test_centered_area() {
        let area = Rect::new(0, 0, 20, 10);

        let middle = centered(area, Direction::Horizontal, 4).expect("layout has three slices");

        assert_eq!(middle.width, 4);
        assert_eq!(middle.height, 10);
    }
}
