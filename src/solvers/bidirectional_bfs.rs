use std::collections::{HashMap, VecDeque};

use crate::{
    maze::{Coord, Maze},
    solvers::SolveOutcome,
    step::{Step, StepAction},
};

/// One half of the bidirectional search.
struct Frontier {
    queue: VecDeque<Coord>,
    /// Parent of every cell reached from this side. Also serves as the visited set.
    parents: HashMap<Coord, Option<Coord>>,
    /// Step action reported for cells reached from this side
    action: StepAction,
}

impl Frontier {
    fn new(origin: Coord, action: StepAction) -> Self {
        Frontier {
            queue: VecDeque::from([origin]),
            parents: HashMap::from([(origin, None)]),
            action,
        }
    }

    fn has_visited(&self, coord: Coord) -> bool {
        self.parents.contains_key(&coord)
    }

    /// Pops the head of the queue and discovers its open, unvisited neighbors.
    /// Returns the expanded cell and the newly discovered ones.
    fn expand(&mut self, maze: &Maze) -> Option<(Coord, Vec<Coord>)> {
        let current = self.queue.pop_front()?;
        let mut discovered = Vec::new();
        for (_, neighbor) in maze.accessible_neighbors(current) {
            let coord = neighbor.coord();
            if self.has_visited(coord) {
                continue;
            }
            self.parents.insert(coord, Some(current));
            self.queue.push_back(coord);
            discovered.push(coord);
        }
        Some((current, discovered))
    }

    /// Cells from `from` back to this side's origin, both inclusive.
    fn chain(&self, from: Coord) -> Vec<Coord> {
        let mut chain = vec![from];
        let mut child = from;
        while let Some(&Some(parent)) = self.parents.get(&child) {
            chain.push(parent);
            child = parent;
        }
        chain
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Start,
    Goal,
}

impl Side {
    fn other(self) -> Side {
        match self {
            Side::Start => Side::Goal,
            Side::Goal => Side::Start,
        }
    }
}

/// Bidirectional breadth-first search between two cells, advanced one
/// expansion per `next`.
///
/// The two frontiers take turns one BFS layer at a time, so both sides have
/// always explored complete distance rings when they meet. That makes the
/// first meeting cell lie on a shortest path.
///
/// Step sequence: the two seeded origins, one visiting step per expansion that
/// discovered cells, then either [`StepAction::ClearVisited`] followed by
/// [`StepAction::SolutionFound`] (whose changed cells are the path), or a
/// single [`StepAction::NoSolution`].
pub struct BidirectionalBfs<'a> {
    maze: &'a Maze,
    start: Frontier,
    goal: Frontier,
    /// Side whose layer is being expanded
    side: Side,
    /// Expansions left in the current layer
    layer_remaining: usize,
    /// Steps ready to hand out before the search resumes
    pending: VecDeque<Step>,
    outcome: Option<SolveOutcome>,
}

impl<'a> BidirectionalBfs<'a> {
    pub fn new(maze: &'a Maze, entry: Coord, exit: Coord) -> Self {
        let mut search = BidirectionalBfs {
            maze,
            start: Frontier::new(entry, StepAction::VisitingFromStart),
            goal: Frontier::new(exit, StepAction::VisitingFromGoal),
            side: Side::Start,
            layer_remaining: 1,
            pending: VecDeque::new(),
            outcome: None,
        };

        if !maze.is_in_bounds(entry) || !maze.is_in_bounds(exit) {
            tracing::warn!(
                "[solver] invalid endpoints {:?} -> {:?} for a {}x{} maze",
                entry,
                exit,
                maze.width(),
                maze.height()
            );
            search.pending.push_back(Step::no_solution());
            search.outcome = Some(SolveOutcome::InvalidEndpoints);
            return search;
        }

        search.pending.extend([
            Step::new(entry, StepAction::VisitingFromStart, vec![entry]),
            Step::new(exit, StepAction::VisitingFromGoal, vec![exit]),
        ]);
        if entry == exit {
            search.finish_with_meeting(entry);
        }
        search
    }

    /// Final result, available once the search has finished.
    pub fn outcome(&self) -> Option<&SolveOutcome> {
        self.outcome.as_ref()
    }

    fn frontier_mut(&mut self, side: Side) -> &mut Frontier {
        match side {
            Side::Start => &mut self.start,
            Side::Goal => &mut self.goal,
        }
    }

    fn frontier(&self, side: Side) -> &Frontier {
        match side {
            Side::Start => &self.start,
            Side::Goal => &self.goal,
        }
    }

    /// Path from entry to exit through `meeting`.
    fn reconstruct_path(&self, meeting: Coord) -> Vec<Coord> {
        let mut path = self.start.chain(meeting);
        path.reverse();
        // The meeting cell is already in the start half
        path.extend(self.goal.chain(meeting).into_iter().skip(1));
        path
    }

    fn finish_with_meeting(&mut self, meeting: Coord) {
        let path = self.reconstruct_path(meeting);
        tracing::debug!(
            "[solver] frontiers met at {:?}, path of {} cells",
            meeting,
            path.len()
        );

        let mut visited = self
            .start
            .parents
            .keys()
            .chain(self.goal.parents.keys())
            .copied()
            .collect::<Vec<_>>();
        visited.sort_unstable();
        visited.dedup();

        self.pending.extend([
            Step::new(meeting, StepAction::ClearVisited, visited),
            Step::new(meeting, StepAction::SolutionFound, path.clone()),
        ]);
        self.outcome = Some(SolveOutcome::Found(path));
    }

    fn finish_without_path(&mut self) {
        tracing::debug!(
            "[solver] no path, {} cells reached from the entry and {} from the exit",
            self.start.parents.len(),
            self.goal.parents.len()
        );
        self.pending.push_back(Step::no_solution());
        self.outcome = Some(SolveOutcome::NoPath);
    }

    /// Runs the search until it produces a step or finishes.
    fn advance(&mut self) {
        while self.pending.is_empty() && self.outcome.is_none() {
            if self.layer_remaining == 0 {
                // Layer complete, hand over to the other side
                self.side = self.side.other();
                self.layer_remaining = self.frontier(self.side).queue.len();
                if self.layer_remaining == 0 {
                    // One side explored its whole region without meeting the other
                    self.finish_without_path();
                    return;
                }
            }

            let side = self.side;
            let maze = self.maze;
            let Some((current, discovered)) = self.frontier_mut(side).expand(maze) else {
                self.layer_remaining = 0;
                continue;
            };
            self.layer_remaining -= 1;

            let other = self.frontier(side.other());
            let meeting = discovered.iter().copied().find(|&c| other.has_visited(c));
            if !discovered.is_empty() {
                let action = self.frontier(side).action;
                self.pending
                    .push_back(Step::new(current, action, discovered));
            }
            if let Some(meeting) = meeting {
                self.finish_with_meeting(meeting);
            }
        }
    }
}

impl Iterator for BidirectionalBfs<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pending.is_empty() {
            self.advance();
        }
        self.pending.pop_front()
    }
}

impl std::iter::FusedIterator for BidirectionalBfs<'_> {}
