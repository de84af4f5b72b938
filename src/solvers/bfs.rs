use std::collections::{HashMap, VecDeque};

use crate::maze::{Coord, Maze};

/// Plain breadth-first search from `entry` to `exit`.
/// Returns the path from entry to exit inclusive, or `None` if there is none.
pub fn solve_bfs(maze: &Maze, entry: Coord, exit: Coord) -> Option<Vec<Coord>> {
    if !maze.is_in_bounds(entry) || !maze.is_in_bounds(exit) {
        return None;
    }

    let mut queue = VecDeque::from([entry]);
    // Parent of every discovered cell. Also serves as the visited set.
    let mut parents: HashMap<Coord, Option<Coord>> = HashMap::from([(entry, None)]);

    while let Some(current) = queue.pop_front() {
        if current == exit {
            // Backtrack from the goal to rebuild the route
            let mut path = vec![current];
            let mut child = current;
            while let Some(&Some(parent)) = parents.get(&child) {
                path.push(parent);
                child = parent;
            }
            path.reverse();
            return Some(path);
        }
        for (_, neighbor) in maze.accessible_neighbors(current) {
            let coord = neighbor.coord();
            if !parents.contains_key(&coord) {
                parents.insert(coord, Some(current));
                queue.push_back(coord);
            }
        }
    }

    None // No path found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Direction;

    #[test]
    fn test_bfs_open_board() {
        let mut maze = Maze::new(3, 3).unwrap();
        for y in 1..=3 {
            for x in 1..=3 {
                for dir in [Direction::East, Direction::South] {
                    if let Some(other) = maze.neighbor((x, y), dir) {
                        maze[(x, y)].remove_wall(dir);
                        maze[other].remove_wall(dir.opposite());
                    }
                }
            }
        }
        let path = solve_bfs(&maze, (1, 1), (3, 3)).unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path.first(), Some(&(1, 1)));
        assert_eq!(path.last(), Some(&(3, 3)));
    }

    #[test]
    fn test_bfs_walled_board() {
        let maze = Maze::new(2, 2).unwrap();
        assert_eq!(solve_bfs(&maze, (1, 1), (2, 2)), None);
        assert_eq!(solve_bfs(&maze, (1, 1), (1, 1)), Some(vec![(1, 1)]));
        assert_eq!(solve_bfs(&maze, (1, 1), (3, 1)), None);
    }
}
