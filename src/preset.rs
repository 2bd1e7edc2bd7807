//! Built-in mazes.
//!
//! This module contains the [`Preset`] enumeration offered on the command line. Each preset lays
//! its walls out through the regular [`Maze`] setters, so presets obey the same bounds checks as
//! mazes built by hand.

use clap::ValueEnum;

use crate::{error::MazeError, maze::Maze};

/// Named maze that can be loaded instead of starting from an empty grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// 3x3 grid with a wall in the center, solved from corner to corner.
    Corners,
    /// 2x2 grid whose exit is cut off by two walls.
    Isolated,
    /// 9x15 labyrinth with a few dead ends.
    Labyrinth,
}

impl Preset {
    /// Builds the preset maze with its walls, start and exit set.
    ///
    /// # Errors
    ///
    /// This function may return errors if a preset layout does not fit its own grid, which would be
    /// a bug in the layout table.
    pub fn build(self) -> Result<Maze, MazeError> {
        let (layout, start, exit) = match self {
            Self::Corners => (CORNERS, (0, 0), (2, 2)),
            Self::Isolated => (ISOLATED, (0, 0), (1, 1)),
            Self::Labyrinth => (LABYRINTH, (0, 0), (8, 14)),
        };

        let cols = layout.first().map_or(0, |row| row.len());
        let mut maze = Maze::new(layout.len(), cols)?;

        for (row, line) in layout.iter().enumerate() {
            for (col, byte) in line.bytes().enumerate() {
                if byte == WALL {
                    maze.set_wall(row, col)?;
                }
            }
        }

        maze.set_start(start.0, start.1)?;
        maze.set_exit(exit.0, exit.1)?;

        Ok(maze)
    }
}

/// Byte marking a wall in the layout tables below.
const WALL: u8 = b'*';

/// Layout of [`Preset::Corners`].
const CORNERS: &[&str] = &["   ", " * ", "   "];

/// Layout of [`Preset::Isolated`].
const ISOLATED: &[&str] = &[" *", "* "];

/// Layout of [`Preset::Labyrinth`].
const LABYRINTH: &[&str] = &[
    " *     *       ",
    " * *** * ***** ",
    " *   * *     * ",
    " *** * ***** * ",
    "     *     * * ",
    "**** * *** * * ",
    "     *   *     ",
    " ******** *  **",
    "          *    ",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Position;

    #[test]
    fn test_corners_preset() {
        let mut maze = Preset::Corners.build().expect("corners preset should build");

        assert_eq!(maze.draw(), "   \n * \n   \n");
        assert_eq!(maze.start(), Some(Position::new(0, 0)));
        assert_eq!(maze.exit(), Some(Position::new(2, 2)));
        assert_eq!(maze.find_path(), Ok(true));
        assert_eq!(maze.draw(), "xxx\n *x\n  x\n");
    }

    #[test]
    fn test_isolated_preset() {
        let mut maze = Preset::Isolated.build().expect("isolated preset should build");

        assert_eq!(maze.find_path(), Ok(false));
        assert_eq!(maze.draw(), "o*\n* \n");
    }

    #[test]
    fn test_labyrinth_preset() {
        let mut maze = Preset::Labyrinth.build().expect("labyrinth preset should build");

        assert_eq!(maze.num_rows(), 9);
        assert_eq!(maze.num_cols(), 15);
        assert_eq!(maze.find_path(), Ok(true));
        assert_eq!(
            maze.draw(),
            "\
x*xxxxx*ooooooo
x*x***x*o*****o
x*xxx*x*ooooo*o
x***x*x*****o*o
xxxxx*xxxxx*o*o
**** * ***x*o*o
     *   *xxxoo
 ******** *xx**
          *xxxx
"
        );
    }

    #[test]
    fn test_layouts_are_rectangular() {
        for layout in [CORNERS, ISOLATED, LABYRINTH] {
            let width = layout.first().map(|row| row.len());
            assert!(
                layout.iter().all(|row| Some(row.len()) == width),
                "layout {layout:?} has ragged rows"
            );
        }
    }
}
