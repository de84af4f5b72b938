use crate::maze::Coord;

/// Offsets from the board center of the decorative "42" drawn with fixed cells.
const LOGO_OFFSETS: [(i32, i32); 18] = [
    // 4
    (-3, -2),
    (-3, -1),
    (-3, 0),
    (-2, 0),
    (-1, 0),
    (-1, 1),
    (-1, 2),
    // 2
    (1, -2),
    (2, -2),
    (3, -2),
    (3, -1),
    (1, 0),
    (2, 0),
    (3, 0),
    (1, 1),
    (1, 2),
    (2, 2),
    (3, 2),
];

/// Smallest board that fits the pattern with a free one-cell margin on every
/// side. The margin keeps every free cell connected to the rest of the board.
pub const MIN_PATTERN_WIDTH: u16 = 9;
pub const MIN_PATTERN_HEIGHT: u16 = 7;

/// Center cell of a `width` x `height` board, 1-indexed.
pub fn center(width: u16, height: u16) -> Coord {
    (width.div_ceil(2), height.div_ceil(2))
}

/// Whether the pattern fits on a board of the given size.
pub fn fits(width: u16, height: u16) -> bool {
    width >= MIN_PATTERN_WIDTH && height >= MIN_PATTERN_HEIGHT
}

/// Coordinates covered by the pattern, or an empty list when the board is too small.
pub fn logo_cells(width: u16, height: u16) -> Vec<Coord> {
    if !fits(width, height) {
        return Vec::new();
    }
    let (cx, cy) = center(width, height);
    LOGO_OFFSETS
        .iter()
        .map(|&(dx, dy)| {
            // In range: fits() guarantees at least 4 columns and 3 rows around the center
            ((cx as i32 + dx) as u16, (cy as i32 + dy) as u16)
        })
        .collect()
}
