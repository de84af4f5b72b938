use std::fmt;

/// One of the four cardinal directions on the board.
///
/// The board uses screen coordinates: `x` grows to the east and `y` grows to
/// the south, so north is `(0, -1)`. Every adjacency query in the crate goes
/// through [`Direction::offset`], so this is the only place the convention lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions, in wall-mask bit order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Wall-mask bit for this direction.
    pub const fn bit(self) -> u8 {
        match self {
            Direction::North => 0b0001,
            Direction::East => 0b0010,
            Direction::South => 0b0100,
            Direction::West => 0b1000,
        }
    }

    /// Unit step `(dx, dy)` taken when moving in this direction.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Single-letter form used by the maze output file.
    pub const fn letter(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }

    /// Direction of the step from `from` to `to`, if the two coordinates are
    /// orthogonally adjacent.
    pub fn between(from: (u16, u16), to: (u16, u16)) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|dir| dir.step(from) == Some(to))
    }

    /// Coordinate one step away in this direction.
    /// Returns `None` when the step would leave the representable range; callers
    /// still need to check the result against the board bounds.
    pub fn step(self, coord: (u16, u16)) -> Option<(u16, u16)> {
        let (dx, dy) = self.offset();
        let x = coord.0.checked_add_signed(dx as i16)?;
        let y = coord.1.checked_add_signed(dy as i16)?;
        Some((x, y))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::North => write!(f, "north"),
            Direction::East => write!(f, "east"),
            Direction::South => write!(f, "south"),
            Direction::West => write!(f, "west"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposites_are_involutive() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            let (dx, dy) = dir.offset();
            let (ox, oy) = dir.opposite().offset();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn test_bits_are_distinct() {
        let mask = Direction::ALL.iter().fold(0u8, |acc, d| {
            assert_eq!(acc & d.bit(), 0);
            acc | d.bit()
        });
        assert_eq!(mask, 0b1111);
    }

    #[test]
    fn test_step_and_between() {
        assert_eq!(Direction::North.step((3, 3)), Some((3, 2)));
        assert_eq!(Direction::South.step((3, 3)), Some((3, 4)));
        assert_eq!(Direction::East.step((3, 3)), Some((4, 3)));
        assert_eq!(Direction::West.step((3, 3)), Some((2, 3)));
        // Underflow is reported rather than wrapped
        assert_eq!(Direction::North.step((3, 0)), None);

        assert_eq!(Direction::between((2, 2), (2, 1)), Some(Direction::North));
        assert_eq!(Direction::between((2, 2), (1, 2)), Some(Direction::West));
        assert_eq!(Direction::between((2, 2), (3, 3)), None);
    }
}
