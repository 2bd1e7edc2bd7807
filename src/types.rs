//! Value types shared by the maze, the search and the viewer.

use std::{fmt, str::FromStr};

use crate::{error::MazeError, pathfinding::Solution};

/// Contents of a single maze cell.
///
/// A cell starts out [`Empty`](Cell::Empty). Walls are permanent, while the search moves cells from
/// empty to tried and from tried to path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Open cell that has not been visited by the current search.
    #[default]
    Empty,
    /// Permanent obstacle.
    Wall,
    /// Cell popped from the frontier by the current search.
    Tried,
    /// Cell lying on the route found by the current search.
    Path,
}

impl Cell {
    /// Returns the single character used for this cell in text renderings.
    pub const fn symbol(self) -> char {
        match self {
            Self::Empty => ' ',
            Self::Wall => '*',
            Self::Tried => 'o',
            Self::Path => 'x',
        }
    }

    /// Returns whether the search left a mark on this cell.
    pub(crate) const fn is_search_mark(self) -> bool {
        matches!(self, Self::Tried | Self::Path)
    }
}

/// Zero-indexed `(row, col)` coordinate of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
}

impl Position {
    /// Builds a position from its row and column.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the position one step away in `direction`.
    ///
    /// Only the lower bound is checked here, since the upper bound depends on the grid the position
    /// is used with.
    pub(crate) fn step(self, direction: Direction) -> Option<Self> {
        let (row_delta, col_delta) = direction.offset();

        Some(Self {
            row: self.row.checked_add_signed(row_delta)?,
            col: self.col.checked_add_signed(col_delta)?,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Position {
    type Err = MazeError;

    /// Parses the `ROW,COL` form accepted on the command line. Whitespace around either number is
    /// ignored.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = || MazeError::InvalidPosition(input.to_owned());

        let (row, col) = input.split_once(',').ok_or_else(invalid)?;
        let row = row.trim().parse().map_err(|_err| invalid())?;
        let col = col.trim().parse().map_err(|_err| invalid())?;

        Ok(Self { row, col })
    }
}

/// One of the four moves the search may take.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    /// Towards the next row.
    Down,
    /// Towards the previous row.
    Up,
    /// Towards the next column.
    Right,
    /// Towards the previous column.
    Left,
}

impl Direction {
    /// Order in which neighbors are pushed onto the frontier.
    ///
    /// The frontier is a stack, so the last direction listed here is the first one explored. The
    /// route a search reports depends on this order.
    pub(crate) const PUSH_ORDER: [Self; 4] = [Self::Down, Self::Up, Self::Right, Self::Left];

    /// Returns the `(row, col)` delta of this move.
    pub(crate) const fn offset(self) -> (isize, isize) {
        match self {
            Self::Down => (1, 0),
            Self::Up => (-1, 0),
            Self::Right => (0, 1),
            Self::Left => (0, -1),
        }
    }
}

/// Outcome of the last search shown by the interactive viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Status {
    /// No search has run since the last reset.
    Idle,
    /// A route of the given number of cells was found.
    Found(usize),
    /// The frontier emptied without reaching the exit.
    Unreachable,
    /// The step budget ran out.
    Exhausted(usize),
}

impl Status {
    /// Sorts the result of a search into a status and the solution to replay.
    ///
    /// Running out of budget is an expected outcome here and yields an empty solution; the cells
    /// visited before giving up stay marked on the maze itself.
    ///
    /// # Errors
    ///
    /// Passes on every search error other than [`MazeError::BudgetExhausted`].
    pub(crate) fn from_search(
        result: Result<Solution, MazeError>,
    ) -> Result<(Self, Solution), MazeError> {
        match result {
            Ok(solution) => {
                let status = solution
                    .path
                    .as_ref()
                    .map_or(Self::Unreachable, |path| Self::Found(path.len()));
                Ok((status, solution))
            }
            Err(MazeError::BudgetExhausted { budget }) => {
                Ok((Self::Exhausted(budget), Solution::default()))
            }
            Err(err) => Err(err),
        }
    }

    /// Returns the status line text for this outcome.
    pub(crate) fn describe(self) -> String {
        match self {
            Self::Idle => "press (s) to search".to_owned(),
            Self::Found(length) => format!("path found through {length} cells"),
            Self::Unreachable => "no path to the exit".to_owned(),
            Self::Exhausted(budget) => format!("gave up after {budget} steps"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_symbols() {
        assert_eq!(Cell::Empty.symbol(), ' ');
        assert_eq!(Cell::Wall.symbol(), '*');
        assert_eq!(Cell::Tried.symbol(), 'o');
        assert_eq!(Cell::Path.symbol(), 'x');
    }

    #[test]
    fn test_cell_default_is_empty() {
        assert_eq!(Cell::default(), Cell::Empty);
    }

    #[test]
    fn test_search_marks() {
        assert!(Cell::Tried.is_search_mark());
        assert!(Cell::Path.is_search_mark());
        assert!(!Cell::Wall.is_search_mark());
        assert!(!Cell::Empty.is_search_mark());
    }

    #[test]
    fn test_position_parse() {
        let pos: Position = "2,7".parse().expect("plain pair should parse");
        assert_eq!(pos, Position::new(2, 7));

        let pos: Position = " 0 , 11 ".parse().expect("padded pair should parse");
        assert_eq!(pos, Position::new(0, 11));
    }

    #[test]
    fn test_position_parse_rejects_garbage() {
        for input in ["", "3", "1,", ",1", "a,b", "-1,2", "1,2,3"] {
            assert_eq!(
                input.parse::<Position>(),
                Err(MazeError::InvalidPosition(input.to_owned())),
                "{input:?} should not parse"
            );
        }
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(4, 1).to_string(), "(4, 1)");
    }

    #[test]
    fn test_step_stops_at_lower_bound() {
        let corner = Position::new(0, 0);

        assert_eq!(corner.step(Direction::Up), None);
        assert_eq!(corner.step(Direction::Left), None);
        assert_eq!(corner.step(Direction::Down), Some(Position::new(1, 0)));
        assert_eq!(corner.step(Direction::Right), Some(Position::new(0, 1)));
    }

    #[test]
    fn test_push_order_explores_left_first() {
        assert_eq!(Direction::PUSH_ORDER.last(), Some(&Direction::Left));
        assert_eq!(Direction::PUSH_ORDER.first(), Some(&Direction::Down));
    }

    #[test]
    fn test_status_from_search() {
        let found = Solution {
            path: Some(vec![Position::new(0, 0), Position::new(0, 1)]),
            explored: vec![Position::new(0, 0), Position::new(0, 1)],
        };
        let (status, solution) =
            Status::from_search(Ok(found.clone())).expect("a solution is not an error");
        assert_eq!(status, Status::Found(2));
        assert_eq!(solution, found);

        let (status, _) =
            Status::from_search(Ok(Solution::default())).expect("no route is not an error");
        assert_eq!(status, Status::Unreachable);

        let (status, solution) = Status::from_search(Err(MazeError::BudgetExhausted { budget: 7 }))
            .expect("an exhausted budget is not an error");
        assert_eq!(status, Status::Exhausted(7));
        assert_eq!(solution, Solution::default());

        assert_eq!(
            Status::from_search(Err(MazeError::MissingStart)),
            Err(MazeError::MissingStart)
        );
    }

    #[test]
    fn test_status_describe() {
        assert_eq!(Status::Idle.describe(), "press (s) to search");
        assert_eq!(Status::Found(5).describe(), "path found through 5 cells");
        assert_eq!(Status::Unreachable.describe(), "no path to the exit");
        assert_eq!(Status::Exhausted(10).describe(), "gave up after 10 steps");
    }
}
