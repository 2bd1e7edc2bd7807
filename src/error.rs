//! Error type for maze construction, setup and search.

use thiserror::Error;

/// Failures raised by the maze and its search routine.
///
/// Every variant describes a caller mistake or an exhausted resource. A search that simply finds no
/// route is not an error and is reported through a `false`/`None` result instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// A coordinate fell outside the grid.
    #[error("cell ({row}, {col}) is out of range for a {rows}x{cols} maze")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Number of rows in the maze.
        rows: usize,
        /// Number of columns in the maze.
        cols: usize,
    },
    /// The maze was built with a zero dimension.
    #[error("a maze needs at least one row and one column, got {rows}x{cols}")]
    EmptyGrid {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        cols: usize,
    },
    /// The maze has more cells than can be addressed.
    #[error("a {rows}x{cols} maze has too many cells")]
    TooLarge {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        cols: usize,
    },
    /// A search was started before the start cell was set.
    #[error("the start cell has not been set")]
    MissingStart,
    /// A search was started before the exit cell was set.
    #[error("the exit cell has not been set")]
    MissingExit,
    /// The search popped its whole step budget without reaching the exit.
    #[error("search gave up after {budget} steps without reaching the exit")]
    BudgetExhausted {
        /// The budget that ran out.
        budget: usize,
    },
    /// Text that was expected to hold a `ROW,COL` pair.
    #[error("invalid cell position {0:?}, expected ROW,COL")]
    InvalidPosition(String),
}
