pub mod cell;
mod direction;
pub mod pattern;

pub use cell::{Cell, WallMask};
pub use direction::Direction;

use crate::{
    config::MazeConfig,
    error::{ConfigError, InvariantViolation},
};

/// Board coordinate `(x, y)`, 1-indexed. `x` runs west to east, `y` north to south.
pub type Coord = (u16, u16);

/// The board: one [`Cell`] per coordinate in `[1, width] x [1, height]`, stored
/// row-major in a flat arena and addressed by coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    cells: Box<[Cell]>,
    width: u16,
    height: u16,
}

impl Maze {
    /// Creates a fully walled maze with the given width and height.
    /// Fails if either dimension is zero.
    pub fn new(width: u16, height: u16) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidDimensions { width, height });
        }
        let cells = (1..=height)
            .flat_map(|y| (1..=width).map(move |x| Cell::new((x, y))))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Ok(Maze {
            cells,
            width,
            height,
        })
    }

    /// Creates the board described by `config`: validated dimensions and
    /// endpoints, the decorative pattern (when enabled and it fits), and the
    /// entry/exit markers.
    pub fn from_config(config: &MazeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut maze = Maze::new(config.width, config.height)?;
        if config.pattern {
            let logo = pattern::logo_cells(config.width, config.height);
            if logo.is_empty() {
                tracing::warn!(
                    "[maze] {}x{} board is too small for the pattern, skipping it",
                    config.width,
                    config.height
                );
            }
            maze.apply_pattern(&logo);
        }
        maze[config.entry].is_start = true;
        maze[config.exit].is_exit = true;
        Ok(maze)
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Returns the width of the maze in cells.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Total number of cells, fixed ones included.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a maze has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Checks if the given coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        (1..=self.width).contains(&coord.0) && (1..=self.height).contains(&coord.1)
    }

    fn ravel_index(&self, coord: Coord) -> usize {
        (coord.1 as usize - 1) * self.width as usize + (coord.0 as usize - 1)
    }

    pub fn get(&self, coord: Coord) -> Option<&Cell> {
        self.is_in_bounds(coord)
            .then(|| &self.cells[self.ravel_index(coord)])
    }

    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        if self.is_in_bounds(coord) {
            let idx = self.ravel_index(coord);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    /// All cells in row-major order (north row first, west to east).
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Coordinate of the neighbor in `direction`, if it is on the board.
    pub fn neighbor(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        direction.step(coord).filter(|&c| self.is_in_bounds(c))
    }

    /// Geometric neighbors of a cell, regardless of walls.
    pub fn all_neighbors(&self, coord: Coord) -> impl Iterator<Item = (Direction, &Cell)> {
        let in_bounds = self.is_in_bounds(coord);
        Direction::ALL
            .into_iter()
            .filter(move |_| in_bounds)
            .filter_map(move |dir| self.neighbor(coord, dir).map(|c| (dir, &self[c])))
    }

    /// Neighbors reachable from `coord` through a cleared wall.
    pub fn accessible_neighbors(&self, coord: Coord) -> impl Iterator<Item = (Direction, &Cell)> {
        let walls = self.get(coord).map(Cell::walls);
        self.all_neighbors(coord)
            .filter(move |&(dir, _)| walls.is_some_and(|w| !w.contains(dir)))
    }

    /// Whether the wall of `coord` facing `direction` is present.
    /// Out-of-bounds coordinates count as walled.
    pub fn has_wall(&self, coord: Coord, direction: Direction) -> bool {
        self.get(coord).is_none_or(|cell| cell.has_wall(direction))
    }

    /// Marks the given coordinates as fixed pattern cells. Out-of-bounds
    /// coordinates are ignored.
    pub fn apply_pattern(&mut self, coords: &[Coord]) {
        for &coord in coords {
            if let Some(cell) = self.get_mut(coord) {
                cell.is_fixed = true;
            }
        }
    }

    /// Rebuilds every wall and clears generation and path state, keeping the
    /// pattern and endpoint markers.
    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(Cell::reset);
    }

    /// Marks the cells of a solved path. Walls are not touched.
    pub fn annotate_path(&mut self, path: &[Coord]) {
        for &coord in path {
            if let Some(cell) = self.get_mut(coord) {
                cell.on_path = true;
            }
        }
    }

    pub fn clear_annotations(&mut self) {
        self.cells.iter_mut().for_each(|cell| cell.on_path = false);
    }

    /// Number of open passages between adjacent cells. Each passage is counted
    /// once, from its west or north side.
    pub fn passage_count(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| {
                [Direction::East, Direction::South]
                    .into_iter()
                    .filter(|&dir| {
                        !cell.has_wall(dir) && self.neighbor(cell.coord(), dir).is_some()
                    })
                    .count()
            })
            .sum()
    }

    /// Checks the board invariants: walls agree on both sides of every edge,
    /// the outer boundary is closed and fixed cells are fully walled.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        for cell in self.cells.iter() {
            let coord = cell.coord();
            if cell.is_fixed && cell.walls() != WallMask::ALL {
                return Err(InvariantViolation::CarvedFixedCell { coord });
            }
            for direction in Direction::ALL {
                if cell.has_wall(direction) {
                    continue;
                }
                match self.neighbor(coord, direction) {
                    None => {
                        return Err(InvariantViolation::OpenBoundary { coord, direction });
                    }
                    Some(other) if self[other].has_wall(direction.opposite()) => {
                        return Err(InvariantViolation::AsymmetricWall { coord, direction });
                    }
                    Some(_) => {}
                }
            }
        }
        Ok(())
    }
}

impl std::ops::Index<Coord> for Maze {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        assert!(
            self.is_in_bounds(index),
            "coordinate {:?} is out of bounds for a {}x{} maze",
            index,
            self.width,
            self.height
        );
        &self.cells[self.ravel_index(index)]
    }
}

impl std::ops::IndexMut<Coord> for Maze {
    fn index_mut(&mut self, index: Coord) -> &mut Self::Output {
        assert!(
            self.is_in_bounds(index),
            "coordinate {:?} is out of bounds for a {}x{} maze",
            index,
            self.width,
            self.height
        );
        let idx = self.ravel_index(index);
        &mut self.cells[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Opens the passage between `coord` and its neighbor on both sides.
    fn open(maze: &mut Maze, coord: Coord, direction: Direction) {
        let other = maze.neighbor(coord, direction).unwrap();
        maze[coord].remove_wall(direction);
        maze[other].remove_wall(direction.opposite());
    }

    #[test]
    fn test_maze_indexing() {
        let mut maze = Maze::new(5, 5).unwrap();
        maze[(2, 3)].is_start = true;
        assert!(maze[(2, 3)].is_start);
        assert_eq!(maze[(2, 3)].coord(), (2, 3));
        assert_eq!(maze.len(), 25);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Maze::new(0, 4),
            Err(ConfigError::InvalidDimensions {
                width: 0,
                height: 4
            })
        );
        assert!(Maze::new(3, 0).is_err());
        assert!(Maze::new(1, 1).is_ok());
    }

    #[test]
    fn test_out_of_bounds() {
        let maze = Maze::new(5, 5).unwrap();
        assert!(!maze.is_in_bounds((0, 1)));
        assert!(!maze.is_in_bounds((1, 0)));
        assert!(!maze.is_in_bounds((6, 5)));
        assert!(!maze.is_in_bounds((5, 6)));
        assert!(maze.is_in_bounds((1, 1)));
        assert!(maze.is_in_bounds((5, 5)));
        assert!(maze.get((6, 1)).is_none());
    }

    #[test]
    fn test_all_neighbors() {
        let maze = Maze::new(3, 3).unwrap();
        let center = maze
            .all_neighbors((2, 2))
            .map(|(dir, cell)| (dir, cell.coord()))
            .collect::<Vec<_>>();
        assert_eq!(
            center,
            vec![
                (Direction::North, (2, 1)),
                (Direction::East, (3, 2)),
                (Direction::South, (2, 3)),
                (Direction::West, (1, 2)),
            ]
        );
        let corner = maze
            .all_neighbors((1, 1))
            .map(|(_, cell)| cell.coord())
            .collect::<Vec<_>>();
        assert_eq!(corner, vec![(2, 1), (1, 2)]);
        assert_eq!(maze.all_neighbors((4, 4)).count(), 0);
    }

    #[test]
    fn test_accessible_neighbors_follow_walls() {
        let mut maze = Maze::new(3, 3).unwrap();
        assert_eq!(maze.accessible_neighbors((2, 2)).count(), 0);

        open(&mut maze, (2, 2), Direction::North);
        open(&mut maze, (2, 2), Direction::West);
        let open_dirs = maze
            .accessible_neighbors((2, 2))
            .map(|(dir, cell)| (dir, cell.coord()))
            .collect::<Vec<_>>();
        assert_eq!(
            open_dirs,
            vec![(Direction::North, (2, 1)), (Direction::West, (1, 2))]
        );
        // Seen from the other side
        assert_eq!(
            maze.accessible_neighbors((2, 1))
                .map(|(dir, _)| dir)
                .collect::<Vec<_>>(),
            vec![Direction::South]
        );
    }

    #[test]
    fn test_validate_detects_asymmetry() {
        let mut maze = Maze::new(2, 1).unwrap();
        assert_eq!(maze.validate(), Ok(()));

        maze[(1, 1)].remove_wall(Direction::East);
        assert_eq!(
            maze.validate(),
            Err(InvariantViolation::AsymmetricWall {
                coord: (1, 1),
                direction: Direction::East
            })
        );

        maze[(2, 1)].remove_wall(Direction::West);
        assert_eq!(maze.validate(), Ok(()));
        assert_eq!(maze.passage_count(), 1);
    }

    #[test]
    fn test_validate_detects_open_boundary_and_carved_fixed() {
        let mut maze = Maze::new(2, 2).unwrap();
        maze[(1, 1)].remove_wall(Direction::North);
        assert!(matches!(
            maze.validate(),
            Err(InvariantViolation::OpenBoundary { .. })
        ));

        let mut maze = Maze::new(2, 2).unwrap();
        maze.apply_pattern(&[(2, 2)]);
        open(&mut maze, (2, 2), Direction::North);
        assert_eq!(
            maze.validate(),
            Err(InvariantViolation::CarvedFixedCell { coord: (2, 2) })
        );
    }

    #[test]
    fn test_reset_keeps_markers() {
        let mut maze = Maze::new(3, 1).unwrap();
        maze.apply_pattern(&[(3, 1)]);
        maze[(1, 1)].is_start = true;
        open(&mut maze, (1, 1), Direction::East);
        maze[(1, 1)].visited = true;
        maze.annotate_path(&[(1, 1), (2, 1)]);

        maze.reset();
        assert_eq!(maze.passage_count(), 0);
        assert!(maze.cells().all(|c| !c.visited && !c.on_path));
        assert!(maze[(1, 1)].is_start);
        assert!(maze[(3, 1)].is_fixed);
    }

    #[test]
    fn test_clear_annotations_hides_previous_path() {
        let mut maze = Maze::new(3, 2).unwrap();
        open(&mut maze, (1, 1), Direction::East);
        maze.annotate_path(&[(1, 1), (2, 1)]);
        maze.clear_annotations();
        assert!(maze.cells().all(|c| !c.on_path));
        // Walls are untouched
        assert_eq!(maze.passage_count(), 1);

        maze.annotate_path(&[(1, 2)]);
        let marked = maze
            .cells()
            .filter(|c| c.on_path)
            .map(|c| c.coord())
            .collect::<Vec<_>>();
        assert_eq!(marked, vec![(1, 2)]);
    }

    #[test]
    fn test_from_config_applies_pattern_and_endpoints() {
        let config = MazeConfig {
            width: 9,
            height: 7,
            entry: (1, 1),
            exit: (9, 7),
            ..MazeConfig::default()
        };
        let maze = Maze::from_config(&config).unwrap();
        assert!(maze[(1, 1)].is_start);
        assert!(maze[(9, 7)].is_exit);
        assert_eq!(maze.cells().filter(|c| c.is_fixed).count(), 18);

        let plain = Maze::from_config(&MazeConfig {
            pattern: false,
            ..config
        })
        .unwrap();
        assert!(plain.cells().all(|c| !c.is_fixed));
    }
}
