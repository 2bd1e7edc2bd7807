//! Grid maze solver built around an iterative depth-first search.
//!
//! A [`Maze`] is a rectangular grid of [`Cell`]s with a start and an exit cell. Solving it marks
//! every visited cell as tried and the route found as path, and [`Maze::draw`] renders the result
//! as text. The [`run`] entry point drives a maze from a [`Config`], either printing the result or
//! replaying the search in an interactive terminal view.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

use color_eyre::eyre::Result;

mod app;
mod config;
mod error;
mod events;
pub mod logging;
mod maze;
mod pathfinding;
mod preset;
mod types;
mod ui;

pub use crate::{
    config::Config,
    error::MazeError,
    maze::Maze,
    pathfinding::Solution,
    preset::Preset,
    types::{Cell, Position},
};
use crate::{app::App, types::Status};

/// Builds the configured maze and searches it.
///
/// Without `--tui` the maze is searched once, then its rendering and a one-line verdict are
/// printed. With `--tui` the terminal is handed to the interactive viewer until the user quits.
///
/// # Errors
///
/// This function may return errors if the configuration describes an invalid maze or if the
/// terminal cannot be drawn to.
pub fn run(config: &Config) -> Result<()> {
    let mut maze = config.build_maze()?;

    if config.tui {
        let mut terminal = ratatui::init();
        let result = App::new(maze, config.budget).run(&mut terminal);
        ratatui::restore();

        return result;
    }

    print!("{}", render(&mut maze, config.budget)?);

    Ok(())
}

/// Searches `maze` once and returns its drawing followed by the verdict line.
fn render(maze: &mut Maze, budget: Option<usize>) -> Result<String> {
    let (status, solution) = Status::from_search(maze.solve(budget))?;
    log::info!("{}", summary(status, &solution));

    Ok(format!("{}{}\n", maze.draw(), status.describe()))
}

/// Describes a finished search for the log.
///
/// An abandoned search carries no report, so only its budget is mentioned.
fn summary(status: Status, solution: &Solution) -> String {
    match status {
        Status::Exhausted(_) => status.describe(),
        Status::Idle | Status::Found(_) | Status::Unreachable => {
            format!("{} after visiting {} cells", status.describe(), solution.steps())
        }
    }
}
