use rand::{Rng, rngs::StdRng, seq::IndexedRandom};

use crate::{
    generators::{GeneratorOptions, carve, extra_paths::ExtraPathPass, get_rng},
    maze::{Coord, Direction, Maze},
    step::{Step, StepAction},
};

enum Phase {
    /// Randomized depth-first carving
    Carving,
    /// Cycle injection for imperfect mazes
    ExtraPaths(ExtraPathPass),
    Done,
}

/// Randomized iterative depth-first carving, advanced one step per `next`.
///
/// Holds the carving stack and RNG as its own state. Every wall carved yields
/// a [`StepAction::BreakingWall`] step and every return to an earlier cell a
/// [`StepAction::Backtracking`] step. Imperfect mazes then get one
/// [`StepAction::AddingExtraPath`] step per extra wall opened.
pub struct GenerationSteps<'a> {
    maze: &'a mut Maze,
    rng: StdRng,
    /// Carving stack, holds only visited cells
    stack: Vec<Coord>,
    phase: Phase,
    options: GeneratorOptions,
}

impl<'a> GenerationSteps<'a> {
    /// Rewalls the board and picks the starting cell. No wall is carved until
    /// the first call to `next`.
    pub fn new(maze: &'a mut Maze, options: GeneratorOptions) -> Self {
        let mut rng = get_rng(options.seed);

        // Initialize the maze with walls
        maze.reset();

        // Start from a random free cell
        let free_cells = maze
            .cells()
            .filter(|cell| !cell.is_fixed)
            .map(|cell| cell.coord())
            .collect::<Vec<_>>();
        let (stack, phase) = if free_cells.is_empty() {
            tracing::warn!("[generator] every cell is fixed, nothing to carve");
            (Vec::new(), Phase::Done)
        } else {
            let start = free_cells[rng.random_range(0..free_cells.len())];
            maze[start].visited = true;
            tracing::debug!("[generator] carving from {:?}", start);
            (vec![start], Phase::Carving)
        };

        GenerationSteps {
            maze,
            rng,
            stack,
            phase,
            options,
        }
    }

    /// The board being carved, in its current partial state.
    pub fn maze(&self) -> &Maze {
        &*self.maze
    }

    /// One carving move: either break into a random unvisited neighbor of the
    /// top of the stack, or pop it. A backtracking step reports the popped cell
    /// then the new top. Returns `None` when popping emptied the stack.
    fn carve_step(&mut self) -> Option<Step> {
        let current = *self.stack.last()?;

        let unvisited = self
            .maze
            .all_neighbors(current)
            .filter(|(_, cell)| !cell.visited && !cell.is_fixed)
            .map(|(dir, _)| dir)
            .collect::<Vec<Direction>>();

        match unvisited.choose(&mut self.rng) {
            Some(&direction) => {
                let next = carve(self.maze, current, direction)?;
                self.maze[next].visited = true;
                self.stack.push(next);
                Some(Step::new(
                    current,
                    StepAction::BreakingWall,
                    vec![current, next],
                ))
            }
            None => {
                // No unvisited neighbors, backtrack
                self.stack.pop();
                let top = *self.stack.last()?;
                Some(Step::new(top, StepAction::Backtracking, vec![current, top]))
            }
        }
    }

    fn finish_carving(&mut self) {
        tracing::debug!(
            "[generator] carving done, {} passages",
            self.maze.passage_count()
        );
        self.phase = if self.options.perfect {
            Phase::Done
        } else {
            Phase::ExtraPaths(ExtraPathPass::new(
                self.maze,
                self.options.extra_paths,
                &mut self.rng,
            ))
        };
    }
}

impl Iterator for GenerationSteps<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match &mut self.phase {
                Phase::Carving => {
                    if self.stack.is_empty() {
                        self.finish_carving();
                        continue;
                    }
                    if let Some(step) = self.carve_step() {
                        return Some(step);
                    }
                }
                Phase::ExtraPaths(pass) => match pass.next_opening(self.maze) {
                    Some((from, to)) => {
                        return Some(Step::new(
                            from,
                            StepAction::AddingExtraPath,
                            vec![from, to],
                        ));
                    }
                    None => {
                        tracing::debug!("[generator] added {} extra paths", pass.added());
                        self.phase = Phase::Done;
                    }
                },
                Phase::Done => {
                    debug_assert_eq!(self.maze.validate(), Ok(()));
                    return None;
                }
            }
        }
    }
}

impl std::iter::FusedIterator for GenerationSteps<'_> {}
