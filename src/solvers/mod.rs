mod bfs;
mod bidirectional_bfs;

pub use bfs::solve_bfs;
pub use bidirectional_bfs::BidirectionalBfs;

use crate::maze::{Coord, Direction, Maze};

/// Result of one solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// Cells from entry to exit, both inclusive.
    Found(Vec<Coord>),
    /// Entry and exit are not connected.
    NoPath,
    /// Entry or exit lies outside the board.
    InvalidEndpoints,
}

impl SolveOutcome {
    pub fn path(&self) -> Option<&[Coord]> {
        match self {
            SolveOutcome::Found(path) => Some(path),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SolveOutcome::Found(_))
    }
}

/// Moves taken along a path, one per consecutive pair of cells.
/// Stops at the first pair that is not adjacent.
pub fn path_directions(path: &[Coord]) -> Vec<Direction> {
    path.windows(2)
        .map_while(|pair| Direction::between(pair[0], pair[1]))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solver {
    BidirectionalBfs,
    Bfs,
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::BidirectionalBfs => write!(f, "Bidirectional Breadth-First Search"),
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
        }
    }
}

/// Starts a bidirectional search between `entry` and `exit`, returning the
/// lazy stream of steps. The board is only read.
pub fn solution_steps(maze: &Maze, entry: Coord, exit: Coord) -> BidirectionalBfs<'_> {
    BidirectionalBfs::new(maze, entry, exit)
}

/// Solves `maze` to completion with the chosen solver.
pub fn solve_maze(maze: &Maze, solver: Solver, entry: Coord, exit: Coord) -> SolveOutcome {
    let outcome = match solver {
        Solver::BidirectionalBfs => {
            let mut search = solution_steps(maze, entry, exit);
            search.by_ref().for_each(drop);
            search
                .outcome()
                .cloned()
                .unwrap_or(SolveOutcome::NoPath)
        }
        Solver::Bfs => {
            if !maze.is_in_bounds(entry) || !maze.is_in_bounds(exit) {
                SolveOutcome::InvalidEndpoints
            } else {
                solve_bfs(maze, entry, exit).map_or(SolveOutcome::NoPath, SolveOutcome::Found)
            }
        }
    };
    match &outcome {
        SolveOutcome::Found(path) => {
            tracing::info!("[solver] {} found a path of {} cells", solver, path.len())
        }
        SolveOutcome::NoPath => tracing::info!("[solver] {} found no path", solver),
        SolveOutcome::InvalidEndpoints => {
            tracing::warn!("[solver] invalid endpoints {:?} -> {:?}", entry, exit)
        }
    }
    outcome
}
