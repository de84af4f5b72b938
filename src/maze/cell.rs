use std::fmt;

use crate::maze::{Coord, Direction};

/// 4-bit wall mask, one bit per [`Direction`]. A set bit means the wall exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WallMask(u8);

impl WallMask {
    pub const ALL: WallMask = WallMask(0b1111);

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn contains(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    /// Number of walls still standing.
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }
}

impl Default for WallMask {
    fn default() -> Self {
        WallMask::ALL
    }
}

/// Uppercase hex digit, as written by the maze output file.
impl fmt::UpperHex for WallMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

/// A single board cell.
///
/// Cells do not reference their neighbors. Neighbor lookups go through the
/// owning [`Maze`](crate::maze::Maze) by coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    coord: Coord,
    walls: WallMask,
    /// Set by the generator once the cell has been carved into.
    pub visited: bool,
    /// Part of the decorative pattern. Never carved.
    pub is_fixed: bool,
    pub is_start: bool,
    pub is_exit: bool,
    /// Annotation left by a solved path.
    pub on_path: bool,
}

impl Cell {
    /// Creates a fully walled, unvisited cell.
    pub fn new(coord: Coord) -> Self {
        Cell {
            coord,
            walls: WallMask::ALL,
            visited: false,
            is_fixed: false,
            is_start: false,
            is_exit: false,
            on_path: false,
        }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn walls(&self) -> WallMask {
        self.walls
    }

    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls.contains(direction)
    }

    /// Clears one wall bit. The neighbor's opposite wall is left untouched.
    pub fn remove_wall(&mut self, direction: Direction) {
        self.walls.0 &= !direction.bit();
    }

    pub fn add_wall(&mut self, direction: Direction) {
        self.walls.0 |= direction.bit();
    }

    /// Restores all four walls and drops every generation/solve flag except
    /// the pattern, start and exit markers.
    pub fn reset(&mut self) {
        self.walls = WallMask::ALL;
        self.visited = false;
        self.on_path = false;
    }
}
