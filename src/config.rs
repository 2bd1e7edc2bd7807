//! Command-line configuration.

use std::path::PathBuf;

use clap::{builder::RangedU64ValueParser, Parser};

use crate::{error::MazeError, maze::Maze, preset::Preset, types::Position};

/// Settings the binary is started with.
///
/// Cells are given as `ROW,COL` pairs counted from zero. Walls given with `--wall` are added on top
/// of the selected preset, and `--start`/`--exit` override the preset's endpoints.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Config {
    /// Number of rows of an empty maze.
    #[arg(long, default_value_t = 3)]
    pub rows: usize,
    /// Number of columns of an empty maze.
    #[arg(long, default_value_t = 3)]
    pub cols: usize,
    /// Cell the search starts from [default: 0,0].
    #[arg(long, value_name = "ROW,COL")]
    pub start: Option<Position>,
    /// Cell the search tries to reach [default: the bottom-right cell].
    #[arg(long, value_name = "ROW,COL")]
    pub exit: Option<Position>,
    /// Cell to turn into a wall. May be given several times.
    #[arg(short, long = "wall", value_name = "ROW,COL")]
    pub walls: Vec<Position>,
    /// Built-in maze to start from instead of an empty grid.
    #[arg(long, value_enum, conflicts_with_all = ["rows", "cols"])]
    pub preset: Option<Preset>,
    /// Maximum number of cells the search may visit. Must be at least 1.
    #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub budget: Option<usize>,
    /// Show the search in an interactive terminal view instead of printing the result.
    #[arg(long)]
    pub tui: bool,
    /// File that receives log output instead of standard error.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Builds the maze described by this configuration.
    ///
    /// # Errors
    ///
    /// This function may return errors if the grid has a zero dimension or if any given cell lies
    /// outside of it.
    pub fn build_maze(&self) -> Result<Maze, MazeError> {
        let mut maze = match self.preset {
            Some(preset) => preset.build()?,
            None => Maze::new(self.rows, self.cols)?,
        };

        for wall in &self.walls {
            maze.set_wall(wall.row, wall.col)?;
        }

        let start = self
            .start
            .or_else(|| maze.start())
            .unwrap_or(Position::new(0, 0));
        let exit = self.exit.or_else(|| maze.exit()).unwrap_or(Position::new(
            maze.num_rows().saturating_sub(1),
            maze.num_cols().saturating_sub(1),
        ));

        maze.set_start(start.row, start.col)?;
        maze.set_exit(exit.row, exit.col)?;

        Ok(maze)
    }
}
