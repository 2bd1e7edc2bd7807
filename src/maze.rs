//! Maze grid state and its text rendering.
//!
//! This module holds the [`Maze`] structure: a fixed-size grid of [`Cell`] markers together with
//! the start and exit designations. The search itself lives in [`crate::pathfinding`]; the methods
//! here that run it only check preconditions and forward to that module.

use std::fmt;

use crate::{
    error::MazeError,
    pathfinding::{self, Solution},
    types::{Cell, Position},
};

/// Rectangular maze with walls, a start cell and an exit cell.
///
/// The grid keeps its search markings between calls so the result of the last search can be drawn.
/// Call [`reset`](Maze::reset) before searching again if the previous markings should not block
/// the new search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    /// Number of rows in the grid.
    rows: usize,
    /// Number of columns in the grid.
    cols: usize,
    /// Cell markers stored row-major.
    cells: Vec<Cell>,
    /// Cell the search starts from, once set.
    start: Option<Position>,
    /// Cell the search tries to reach, once set.
    exit: Option<Position>,
}

impl Maze {
    /// Creates a maze with every cell empty and no start or exit.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::EmptyGrid`] if either dimension is zero and [`MazeError::TooLarge`] if
    /// the cell count overflows `usize`.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MazeError> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::EmptyGrid { rows, cols });
        }
        let len = rows
            .checked_mul(cols)
            .ok_or(MazeError::TooLarge { rows, cols })?;

        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Empty; len],
            start: None,
            exit: None,
        })
    }

    /// Returns the number of rows.
    pub const fn num_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub const fn num_cols(&self) -> usize {
        self.cols
    }

    /// Returns the start cell, if one has been set.
    pub const fn start(&self) -> Option<Position> {
        self.start
    }

    /// Returns the exit cell, if one has been set.
    pub const fn exit(&self) -> Option<Position> {
        self.exit
    }

    /// Returns the marker stored at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutOfRange`] if the coordinate lies outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, MazeError> {
        let pos = self.checked(row, col)?;

        self.index(pos)
            .and_then(|idx| self.cells.get(idx))
            .copied()
            .ok_or_else(|| self.out_of_range(row, col))
    }

    /// Turns the cell at `(row, col)` into a wall.
    ///
    /// A wall placed on the start or exit cell is accepted; the next search then reports that no
    /// path exists.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutOfRange`] if the coordinate lies outside the grid.
    pub fn set_wall(&mut self, row: usize, col: usize) -> Result<(), MazeError> {
        let pos = self.checked(row, col)?;
        self.mark(pos, Cell::Wall);

        Ok(())
    }

    /// Designates `(row, col)` as the start cell, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutOfRange`] if the coordinate lies outside the grid.
    pub fn set_start(&mut self, row: usize, col: usize) -> Result<(), MazeError> {
        self.start = Some(self.checked(row, col)?);

        Ok(())
    }

    /// Designates `(row, col)` as the exit cell, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutOfRange`] if the coordinate lies outside the grid.
    pub fn set_exit(&mut self, row: usize, col: usize) -> Result<(), MazeError> {
        self.exit = Some(self.checked(row, col)?);

        Ok(())
    }

    /// Clears every tried and path marker, leaving walls in place.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            if cell.is_search_mark() {
                *cell = Cell::Empty;
            }
        }
    }

    /// Renders the grid as text, one line per row and one character per column.
    ///
    /// Walls are drawn as `*`, path cells as `x`, tried cells as `o` and empty cells as a space.
    /// Every line, the last one included, ends with a newline.
    pub fn draw(&self) -> String {
        self.to_string()
    }

    /// Searches for a route from the start cell to the exit cell.
    ///
    /// On success every cell of the route is marked as path. Either way, every cell the search
    /// visited stays marked as tried.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::MissingStart`] or [`MazeError::MissingExit`] if the search endpoints
    /// have not been set.
    pub fn find_path(&mut self) -> Result<bool, MazeError> {
        Ok(self.solve(None)?.found())
    }

    /// Searches like [`find_path`](Maze::find_path) and returns the full search report.
    ///
    /// With a `budget`, the search gives up once it has visited that many cells without reaching
    /// the exit. The markings made up to that point are left on the grid. A budget of zero never
    /// succeeds, not even when the start is the exit.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::MissingStart`] or [`MazeError::MissingExit`] if the search endpoints
    /// have not been set, and [`MazeError::BudgetExhausted`] if the budget runs out.
    pub fn solve(&mut self, budget: Option<usize>) -> Result<Solution, MazeError> {
        let start = self.start.ok_or(MazeError::MissingStart)?;
        let exit = self.exit.ok_or(MazeError::MissingExit)?;

        pathfinding::depth_first(self, start, exit, budget)
    }

    /// Returns the marker at `pos`, or `None` outside the grid.
    pub(crate) fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).and_then(|idx| self.cells.get(idx)).copied()
    }

    /// Returns whether the search may step into `pos`.
    pub(crate) fn is_open(&self, pos: Position) -> bool {
        self.get(pos) == Some(Cell::Empty)
    }

    /// Overwrites the marker at `pos`. Positions outside the grid are ignored.
    pub(crate) fn mark(&mut self, pos: Position, cell: Cell) {
        if let Some(slot) = self.index(pos).and_then(|idx| self.cells.get_mut(idx)) {
            *slot = cell;
        }
    }

    /// Returns the positions of every cell holding `cell`, in row-major order.
    pub(crate) fn positions_of(&self, cell: Cell) -> impl Iterator<Item = Position> + '_ {
        let cols = self.cols;

        self.cells
            .iter()
            .enumerate()
            .filter(move |&(_, &stored)| stored == cell)
            .map(move |(idx, _)| Position::new(idx / cols, idx % cols))
    }

    /// Validates a coordinate pair against the grid bounds.
    fn checked(&self, row: usize, col: usize) -> Result<Position, MazeError> {
        if row < self.rows && col < self.cols {
            Ok(Position::new(row, col))
        } else {
            Err(self.out_of_range(row, col))
        }
    }

    /// Builds the error reported for a coordinate outside the grid.
    const fn out_of_range(&self, row: usize, col: usize) -> MazeError {
        MazeError::OutOfRange {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Maps a position to its slot in the row-major cell vector.
    const fn index(&self, pos: Position) -> Option<usize> {
        if pos.row < self.rows && pos.col < self.cols {
            Some(pos.row * self.cols + pos.col)
        } else {
            None
        }
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
