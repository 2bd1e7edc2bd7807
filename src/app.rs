//! Core application state and logic for the interactive maze viewer.

use color_eyre::eyre::Result;
use ratatui::DefaultTerminal;

use crate::{events, maze::Maze, pathfinding::AnimationManager, types::Status, ui};

/// Application state container for the maze viewer.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the maze and Crossterm events will help writing to.
pub(crate) struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the user
    /// wants to quit but it starts off `false`.
    pub(crate) exit: bool,
    /// Maze being searched.
    ///
    /// The viewer owns the maze for its whole lifetime, so searches and resets triggered from the
    /// keyboard never overlap.
    pub(crate) maze: Maze,
    /// Step budget handed to every search.
    pub(crate) budget: Option<usize>,
    /// Outcome of the last search, shown in the status line.
    pub(crate) status: Status,
    /// Animation manager for search visualization.
    ///
    /// This field manages the animation state including timing, current step tracking, and the
    /// cells being displayed during the animated replay of the last search.
    pub(crate) animation_manager: AnimationManager,
}

impl App {
    /// Creates a viewer for `maze` that has not searched yet.
    pub(crate) fn new(maze: Maze, budget: Option<usize>) -> Self {
        Self {
            exit: false,
            maze,
            budget,
            status: Status::Idle,
            animation_manager: AnimationManager::new(),
        }
    }

    /// Runs the main loop of the application.
    ///
    /// This function handles user input and updates the application state. The loop continues until
    /// the exit condition is `true`, after which the function returns to the call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub(crate) fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| {
                ui::draw(self, frame)
                    .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))
            })?;
            events::handle_events(self)?;
        }

        Ok(())
    }

    /// Clears the previous search and runs a new one, loading its replay into the animation.
    ///
    /// # Errors
    ///
    /// This function may return errors if the maze is missing its start or exit cell.
    pub(crate) fn solve(&mut self) -> Result<()> {
        self.maze.reset();

        let (status, solution) = Status::from_search(self.maze.solve(self.budget))?;
        self.status = status;
        self.animation_manager.load(&solution);

        Ok(())
    }

    /// Clears the search markings and the animation.
    pub(crate) fn reset(&mut self) {
        self.maze.reset();
        self.status = Status::Idle;
        self.animation_manager.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::Preset;

    fn create_test_app(preset: Preset, budget: Option<usize>) -> App {
        App::new(preset.build().expect("preset should build"), budget)
    }

    #[test]
    fn test_new_app_is_idle() {
        let app = create_test_app(Preset::Corners, None);

        assert!(!app.exit);
        assert_eq!(app.status, Status::Idle);
        assert!(app.animation_manager.steps.is_empty());
    }

    #[test]
    fn test_solve_loads_animation() {
        let mut app = create_test_app(Preset::Corners, None);

        app.solve().expect("corners preset has both endpoints");

        assert_eq!(app.status, Status::Found(5));
        assert_eq!(app.animation_manager.steps.len(), 10);
        assert_eq!(app.maze.draw(), "xxx\n *x\n  x\n");
    }

    #[test]
    fn test_solve_twice_gives_same_result() {
        let mut app = create_test_app(Preset::Labyrinth, None);

        app.solve().expect("labyrinth preset has both endpoints");
        let first = app.maze.draw();
        app.solve().expect("labyrinth preset has both endpoints");

        assert_eq!(app.maze.draw(), first);
    }

    #[test]
    fn test_solve_unreachable() {
        let mut app = create_test_app(Preset::Isolated, None);

        app.solve().expect("isolated preset has both endpoints");

        assert_eq!(app.status, Status::Unreachable);
        assert_eq!(app.animation_manager.steps.len(), 1);
    }

    #[test]
    fn test_solve_out_of_budget() {
        let mut app = create_test_app(Preset::Labyrinth, Some(4));

        app.solve().expect("running out of budget is reported in the status");

        assert_eq!(app.status, Status::Exhausted(4));
        assert!(app.animation_manager.steps.is_empty());
    }

    #[test]
    fn test_solve_without_start_fails() {
        let maze = Maze::new(2, 2).expect("test maze dimensions are positive");
        let mut app = App::new(maze, None);

        assert!(app.solve().is_err(), "a maze without start cannot be solved");
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let mut app = create_test_app(Preset::Corners, None);

        app.solve().expect("corners preset has both endpoints");
        app.reset();

        assert_eq!(app.status, Status::Idle);
        assert!(app.animation_manager.steps.is_empty());
        assert_eq!(app.maze.draw(), "   \n * \n   \n");
    }
}
