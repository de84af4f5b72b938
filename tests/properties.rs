use quickcheck::quickcheck;

use amazeing::{
    config::MazeConfig,
    generators::{GeneratorOptions, bounded_distance, generate_maze, generation_steps},
    maze::{Coord, Direction, Maze},
    solvers::{SolveOutcome, Solver, solve_bfs, solve_maze},
    step::StepAction,
};

/// Maps arbitrary bytes onto a small board so every property stays fast.
fn small_config(seed: u64, width: u8, height: u8, perfect: bool) -> MazeConfig {
    let width = u16::from(width % 14) + 1;
    let height = u16::from(height % 12) + 1;
    MazeConfig {
        perfect,
        seed: Some(seed),
        ..MazeConfig::with_size(width, height)
    }
}

fn generated(config: &MazeConfig) -> Maze {
    let mut maze = Maze::from_config(config).unwrap();
    generate_maze(&mut maze, GeneratorOptions::from(config));
    maze
}

fn free_cells(maze: &Maze) -> Vec<Coord> {
    maze.cells()
        .filter(|cell| !cell.is_fixed)
        .map(|cell| cell.coord())
        .collect()
}

#[test]
fn perfect_mazes_are_spanning_trees() {
    fn prop(seed: u64, width: u8, height: u8) -> bool {
        let maze = generated(&small_config(seed, width, height, true));
        let free = free_cells(&maze);
        let connected = free
            .iter()
            .all(|&coord| solve_bfs(&maze, free[0], coord).is_some());
        maze.validate().is_ok() && connected && maze.passage_count() == free.len() - 1
    }
    quickcheck(prop as fn(u64, u8, u8) -> bool)
}

#[test]
fn imperfect_mazes_add_a_bounded_number_of_passages() {
    fn prop(seed: u64, width: u8, height: u8) -> bool {
        let config = small_config(seed, width, height, false);
        let maze = generated(&config);
        let free = free_cells(&maze);
        let extra = maze.passage_count() + 1 - free.len();
        maze.validate().is_ok() && extra <= config.extra_paths.max_paths
    }
    quickcheck(prop as fn(u64, u8, u8) -> bool)
}

#[test]
fn extra_paths_only_join_distant_cells() {
    fn prop(seed: u64, width: u8, height: u8) -> bool {
        let config = small_config(seed, width, height, false);
        let min_distance = config.extra_paths.min_distance;
        let mut maze = Maze::from_config(&config).unwrap();
        let mut steps = generation_steps(&mut maze, GeneratorOptions::from(&config));
        while let Some(step) = steps.next() {
            if step.action != StepAction::AddingExtraPath {
                continue;
            }
            let (from, to) = (step.changed[0], step.changed[1]);
            let Some(direction) = Direction::between(from, to) else {
                return false;
            };
            // Put the wall back to measure the distance it had before opening
            let mut before = steps.maze().clone();
            before[from].add_wall(direction);
            before[to].add_wall(direction.opposite());
            if bounded_distance(&before, from, to, usize::MAX).is_some_and(|d| d < min_distance) {
                return false;
            }
        }
        true
    }
    quickcheck(prop as fn(u64, u8, u8) -> bool)
}

#[test]
fn bidirectional_paths_are_shortest() {
    fn prop(seed: u64, width: u8, height: u8, perfect: bool) -> bool {
        let config = small_config(seed, width, height, perfect);
        let maze = generated(&config);
        let reference = solve_bfs(&maze, config.entry, config.exit);
        match solve_maze(&maze, Solver::BidirectionalBfs, config.entry, config.exit) {
            SolveOutcome::Found(path) => {
                let steps_are_open = path.windows(2).all(|pair| {
                    maze.accessible_neighbors(pair[0])
                        .any(|(_, cell)| cell.coord() == pair[1])
                });
                path.first() == Some(&config.entry)
                    && path.last() == Some(&config.exit)
                    && steps_are_open
                    && reference.map(|r| r.len()) == Some(path.len())
            }
            _ => reference.is_none(),
        }
    }
    quickcheck(prop as fn(u64, u8, u8, bool) -> bool)
}

#[test]
fn same_seed_same_maze() {
    fn prop(seed: u64, width: u8, height: u8, perfect: bool) -> bool {
        let config = small_config(seed, width, height, perfect);
        generated(&config) == generated(&config)
    }
    quickcheck(prop as fn(u64, u8, u8, bool) -> bool)
}
