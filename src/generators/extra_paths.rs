use std::collections::{HashSet, VecDeque};

use rand::{rngs::StdRng, seq::SliceRandom};

use crate::{
    config::ExtraPathParams,
    generators::carve,
    maze::{Coord, Direction, Maze},
};

/// Shortest in-maze distance from `from` to `to`, searching at most
/// `max_depth` steps. Returns `None` when `to` is farther than that or
/// unreachable.
pub fn bounded_distance(maze: &Maze, from: Coord, to: Coord, max_depth: usize) -> Option<usize> {
    if !maze.is_in_bounds(from) || !maze.is_in_bounds(to) {
        return None;
    }
    let mut queue = VecDeque::from([(from, 0)]);
    let mut visited = HashSet::from([from]);

    while let Some((current, dist)) = queue.pop_front() {
        if current == to {
            return Some(dist);
        }
        if dist == max_depth {
            continue;
        }
        for (_, neighbor) in maze.accessible_neighbors(current) {
            if visited.insert(neighbor.coord()) {
                queue.push_back((neighbor.coord(), dist + 1));
            }
        }
    }
    None
}

/// Cycle injection over a carved maze. Walls between free cells are tried in
/// random order and opened only when their two sides are far apart in the
/// maze, so no short loops appear.
pub(crate) struct ExtraPathPass {
    /// Remaining walls to try, as (west or north cell, direction to the other cell)
    candidates: std::vec::IntoIter<(Coord, Direction)>,
    params: ExtraPathParams,
    added: usize,
}

impl ExtraPathPass {
    pub(crate) fn new(maze: &Maze, params: ExtraPathParams, rng: &mut StdRng) -> Self {
        // Each edge is listed once, from its west or north side
        let mut candidates = maze
            .cells()
            .filter(|cell| !cell.is_fixed)
            .flat_map(|cell| {
                [Direction::East, Direction::South]
                    .into_iter()
                    .filter(move |&dir| cell.has_wall(dir))
                    .filter_map(move |dir| {
                        maze.neighbor(cell.coord(), dir)
                            .filter(|&other| !maze[other].is_fixed)
                            .map(|_| (cell.coord(), dir))
                    })
            })
            .collect::<Vec<_>>();
        candidates.shuffle(rng);
        tracing::debug!(
            "[extra paths] {} candidate walls, adding at most {}",
            candidates.len(),
            params.max_paths
        );

        ExtraPathPass {
            candidates: candidates.into_iter(),
            params,
            added: 0,
        }
    }

    /// Number of walls opened so far.
    pub(crate) fn added(&self) -> usize {
        self.added
    }

    /// Opens the next qualifying wall and returns the two cells it joined.
    /// Returns `None` once the budget is spent or the candidates run out.
    pub(crate) fn next_opening(&mut self, maze: &mut Maze) -> Option<(Coord, Coord)> {
        if self.added >= self.params.max_paths {
            return None;
        }
        for (from, direction) in self.candidates.by_ref() {
            let Some(to) = maze.neighbor(from, direction) else {
                continue;
            };
            if !maze.has_wall(from, direction) {
                continue;
            }
            let far_apart =
                match bounded_distance(maze, from, to, self.params.max_search_depth) {
                    Some(dist) => dist >= self.params.min_distance,
                    // Beyond the search depth counts as far apart
                    None => true,
                };
            if !far_apart {
                continue;
            }
            carve(maze, from, direction)?;
            self.added += 1;
            tracing::debug!(
                "[extra paths] opened wall between {:?} and {:?} ({}/{})",
                from,
                to,
                self.added,
                self.params.max_paths
            );
            return Some((from, to));
        }
        None
    }
}
