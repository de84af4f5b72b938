//! Step records streamed by the generator and the solver.
//!
//! Both algorithms run as iterators over [`Step`]s. Each call to `next`
//! advances the algorithm to its next observable mutation and reports which
//! cells changed, so a renderer can redraw only those. Dropping the iterator
//! early leaves the board in its partial state.

use std::fmt;

use crate::maze::Coord;

/// What happened in a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepAction {
    /// A wall was carved between the current cell and a new cell.
    BreakingWall,
    /// The carver returned to an earlier cell.
    Backtracking,
    /// A wall was opened to create a cycle in an imperfect maze.
    AddingExtraPath,
    /// The search from the entry reached new cells.
    VisitingFromStart,
    /// The search from the exit reached new cells.
    VisitingFromGoal,
    /// The searches met. Changed cells are the full path, entry to exit.
    SolutionFound,
    /// The searches are exhausted, or the endpoints are invalid.
    NoSolution,
    /// Every cell marked during the search is to be redrawn as unvisited.
    ClearVisited,
}

impl fmt::Display for StepAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StepAction::BreakingWall => "breaking_wall",
            StepAction::Backtracking => "backtracking",
            StepAction::AddingExtraPath => "adding_extra_path",
            StepAction::VisitingFromStart => "visiting_from_start",
            StepAction::VisitingFromGoal => "visiting_from_goal",
            StepAction::SolutionFound => "solution_found",
            StepAction::NoSolution => "no_solution",
            StepAction::ClearVisited => "clear_visited",
        };
        write!(f, "{}", name)
    }
}

/// One observable state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Cell being processed, `None` for a [`StepAction::NoSolution`] step.
    pub current: Option<Coord>,
    pub action: StepAction,
    /// Cells whose visible state changed.
    pub changed: Vec<Coord>,
}

impl Step {
    pub fn new(current: Coord, action: StepAction, changed: Vec<Coord>) -> Self {
        Step {
            current: Some(current),
            action,
            changed,
        }
    }

    pub fn no_solution() -> Self {
        Step {
            current: None,
            action: StepAction::NoSolution,
            changed: Vec::new(),
        }
    }
}
