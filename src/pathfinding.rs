//! Pathfinding algorithm and animation module.
//!
//! This module contains the depth-first search that solves a [`Maze`], the [`Solution`] report it
//! produces, and the animation state the interactive viewer uses to replay a search step by step.

use std::time::{Duration, Instant};

use log::{debug, trace, warn};

use crate::{
    error::MazeError,
    maze::Maze,
    types::{Cell, Direction, Position},
};

/// Animation frame delay in milliseconds.
///
/// This constant controls the time between two replayed search steps in the interactive viewer.
pub(crate) const ANIMATION_FRAME_DELAY_MS: u64 = 60;

/// Report of a single search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Solution {
    /// Route from the start cell to the exit cell, both included, or `None` when the exit could not
    /// be reached.
    pub path: Option<Vec<Position>>,
    /// Cells in the order the search visited them.
    pub explored: Vec<Position>,
}

impl Solution {
    /// Returns whether the search reached the exit.
    pub const fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Returns the number of cells the search visited.
    pub fn steps(&self) -> usize {
        self.explored.len()
    }
}

/// Frontier node of the search.
///
/// Nodes live in an arena and point at the node they were reached from, so the route to any node
/// is recovered by following parent indices back to the start.
#[derive(Clone, Copy, Debug)]
struct Node {
    /// Cell this node stands for.
    pos: Position,
    /// Arena index of the node this one was pushed from, `None` for the start node.
    parent: Option<usize>,
}

/// Runs an iterative depth-first search from `start` to `exit`.
///
/// Each popped cell is marked [`Cell::Tried`]; when the exit is popped, the route leading to it is
/// marked [`Cell::Path`]. Neighbors are pushed in [`Direction::PUSH_ORDER`] and only when they are
/// inside the grid and still empty. A cell can be pushed several times before it is first popped;
/// entries for cells that were visited in the meantime are dropped when popped.
///
/// A wall on either endpoint means there is nothing to search, and the grid is left untouched.
///
/// # Errors
///
/// Returns [`MazeError::BudgetExhausted`] if `budget` cells have been visited without reaching the
/// exit. The budget is checked before a cell is visited, so a budget of zero always fails, even
/// when the start is the exit.
pub(crate) fn depth_first(
    maze: &mut Maze,
    start: Position,
    exit: Position,
    budget: Option<usize>,
) -> Result<Solution, MazeError> {
    if maze.get(start) == Some(Cell::Wall) || maze.get(exit) == Some(Cell::Wall) {
        warn!("start {start} or exit {exit} is walled in, skipping search");
        return Ok(Solution::default());
    }

    debug!("searching from {start} to {exit}");

    let mut explored = Vec::new();
    let mut nodes = vec![Node {
        pos: start,
        parent: None,
    }];
    let mut frontier = vec![0_usize];

    while let Some(current) = frontier.pop() {
        let Some(&Node { pos, .. }) = nodes.get(current) else {
            continue;
        };

        // Stale duplicate of a cell that another entry already visited
        if current != 0 && !maze.is_open(pos) {
            continue;
        }

        if let Some(budget) = budget {
            if explored.len() >= budget {
                debug!("step budget of {budget} exhausted");
                return Err(MazeError::BudgetExhausted { budget });
            }
        }

        maze.mark(pos, Cell::Tried);
        explored.push(pos);
        trace!("visiting {pos}");

        if pos == exit {
            let path = trace_back(&nodes, current);
            for &cell in &path {
                maze.mark(cell, Cell::Path);
            }

            debug!(
                "reached {exit} after {} steps, route is {} cells long",
                explored.len(),
                path.len()
            );
            return Ok(Solution {
                path: Some(path),
                explored,
            });
        }

        for direction in Direction::PUSH_ORDER {
            let Some(next) = pos.step(direction) else {
                continue;
            };

            if maze.is_open(next) {
                frontier.push(nodes.len());
                nodes.push(Node {
                    pos: next,
                    parent: Some(current),
                });
            }
        }
    }

    debug!("frontier exhausted after {} steps", explored.len());

    Ok(Solution {
        path: None,
        explored,
    })
}

/// Collects the route ending at arena index `from`, ordered from the start node onwards.
fn trace_back(nodes: &[Node], from: usize) -> Vec<Position> {
    let mut path = Vec::new();
    let mut cursor = Some(from);

    while let Some(idx) = cursor {
        let Some(node) = nodes.get(idx) else {
            break;
        };
        path.push(node.pos);
        cursor = node.parent;
    }

    path.reverse();
    path
}

/// Animation step types for search visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AnimationStep {
    /// Show a cell as visited by the search.
    Explore(Position),
    /// Show a cell as part of the found route.
    Trace(Position),
}

/// Animation state manager for search visualization.
///
/// This structure replays a [`Solution`] one step per frame: first every visited cell in visiting
/// order, then the cells of the route. Once every step has been shown the final picture stays on
/// screen until the animation is cleared or reloaded.
pub(crate) struct AnimationManager {
    /// Steps recorded from the last search.
    pub(crate) steps: Vec<AnimationStep>,
    /// Index of the next step to show.
    pub(crate) current_index: usize,
    /// Timestamp of the last animation frame update.
    pub(crate) last_update_time: Instant,
    /// Visited cells shown so far.
    pub(crate) explored: Vec<Position>,
    /// Route cells shown so far.
    pub(crate) path: Vec<Position>,
}

impl Default for AnimationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationManager {
    /// Creates an empty animation manager.
    pub(crate) fn new() -> Self {
        Self {
            steps: Vec::new(),
            current_index: 0,
            last_update_time: Instant::now(),
            explored: Vec::new(),
            path: Vec::new(),
        }
    }

    /// Rewinds the animation to its first step.
    pub(crate) fn reset(&mut self) {
        self.current_index = 0;
        self.explored.clear();
        self.path.clear();
        self.last_update_time = Instant::now();
    }

    /// Clears all animation data and resets state.
    pub(crate) fn clear(&mut self) {
        self.steps.clear();
        self.reset();
    }

    /// Replaces the animation with the replay of `solution`.
    pub(crate) fn load(&mut self, solution: &Solution) {
        self.clear();
        self.steps
            .extend(solution.explored.iter().copied().map(AnimationStep::Explore));
        if let Some(path) = &solution.path {
            self.steps
                .extend(path.iter().copied().map(AnimationStep::Trace));
        }
    }

    /// Returns whether every recorded step is on screen.
    pub(crate) fn is_finished(&self) -> bool {
        self.current_index >= self.steps.len()
    }

    /// Shows the next step, if any.
    pub(crate) fn advance(&mut self) {
        if let Some(&step) = self.steps.get(self.current_index) {
            match step {
                AnimationStep::Explore(pos) => self.explored.push(pos),
                AnimationStep::Trace(pos) => self.path.push(pos),
            }
            self.current_index += 1;
        }
    }

    /// Shows every remaining step at once.
    pub(crate) fn finish(&mut self) {
        while !self.is_finished() {
            self.advance();
        }
    }

    /// Advances the animation when a frame's worth of time has passed.
    pub(crate) fn update(&mut self) {
        if self.last_update_time.elapsed() >= Duration::from_millis(ANIMATION_FRAME_DELAY_MS) {
            self.last_update_time = Instant::now();
            self.advance();
        }
    }
}
