use rand::{SeedableRng, rngs::StdRng};

mod dfs;
mod extra_paths;

pub use dfs::GenerationSteps;
pub use extra_paths::bounded_distance;

use crate::{
    config::{ExtraPathParams, MazeConfig},
    maze::{Coord, Direction, Maze},
};

/// Get a random number generator, optionally seeded for reproducibility.
fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Knobs for one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub perfect: bool,
    pub seed: Option<u64>,
    pub extra_paths: ExtraPathParams,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            perfect: true,
            seed: None,
            extra_paths: ExtraPathParams::default(),
        }
    }
}

impl From<&MazeConfig> for GeneratorOptions {
    fn from(config: &MazeConfig) -> Self {
        Self {
            perfect: config.perfect,
            seed: config.seed,
            extra_paths: config.extra_paths,
        }
    }
}

/// Opens the passage between `from` and its neighbor in `direction`, clearing
/// the wall on both sides. Returns the neighbor's coordinate.
fn carve(maze: &mut Maze, from: Coord, direction: Direction) -> Option<Coord> {
    let to = maze.neighbor(from, direction)?;
    debug_assert!(
        !maze[from].is_fixed && !maze[to].is_fixed,
        "carving between {:?} and {:?} touches a fixed cell",
        from,
        to
    );
    maze[from].remove_wall(direction);
    maze[to].remove_wall(direction.opposite());
    Some(to)
}

/// Starts a generation run on `maze`, returning the lazy stream of steps.
/// The board is rewalled immediately; carving happens as the stream is pulled.
pub fn generation_steps(maze: &mut Maze, options: GeneratorOptions) -> GenerationSteps<'_> {
    GenerationSteps::new(maze, options)
}

/// Carves `maze` to completion.
pub fn generate_maze(maze: &mut Maze, options: GeneratorOptions) {
    let mut steps = generation_steps(maze, options);
    let num_steps = steps.by_ref().count();
    tracing::info!(
        "[generator] {}x{} maze generated in {} steps, {} passages",
        steps.maze().width(),
        steps.maze().height(),
        num_steps,
        steps.maze().passage_count()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carve_opens_both_sides() {
        let mut maze = Maze::new(3, 3).unwrap();
        assert_eq!(carve(&mut maze, (2, 2), Direction::South), Some((2, 3)));
        assert!(!maze[(2, 2)].has_wall(Direction::South));
        assert!(!maze[(2, 3)].has_wall(Direction::North));
        assert_eq!(maze.validate(), Ok(()));
    }

    #[test]
    fn test_carve_off_board_is_refused() {
        let mut maze = Maze::new(3, 3).unwrap();
        assert_eq!(carve(&mut maze, (3, 1), Direction::East), None);
        assert!(maze[(3, 1)].has_wall(Direction::East));
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let options = GeneratorOptions {
            seed: Some(42),
            ..GeneratorOptions::default()
        };
        let mut first = Maze::new(12, 9).unwrap();
        let mut second = Maze::new(12, 9).unwrap();
        generate_maze(&mut first, options);
        generate_maze(&mut second, options);
        assert_eq!(first, second);
    }

    #[test]
    fn test_regeneration_starts_from_a_walled_board() {
        let mut maze = Maze::new(6, 6).unwrap();
        let options = GeneratorOptions {
            seed: Some(1),
            ..GeneratorOptions::default()
        };
        generate_maze(&mut maze, options);
        generate_maze(&mut maze, options);
        // Still a spanning tree, not two trees layered on top of each other
        assert_eq!(maze.passage_count(), maze.len() - 1);
    }
}
