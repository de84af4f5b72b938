use thiserror::Error;

use crate::maze::{Coord, Direction};

/// Which endpoint of the maze a configuration error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Entry,
    Exit,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Entry => write!(f, "entry"),
            Endpoint::Exit => write!(f, "exit"),
        }
    }
}

/// Invalid input, reported before any algorithm touches the board.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("maze dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u16, height: u16 },

    #[error("{which} {coord:?} lies outside the {width}x{height} board")]
    EndpointOutOfBounds {
        which: Endpoint,
        coord: Coord,
        width: u16,
        height: u16,
    },

    #[error("{which} {coord:?} lies on a fixed pattern cell")]
    EndpointOnFixedCell { which: Endpoint, coord: Coord },

    #[error("extra path minimum distance must be at least 1")]
    InvalidExtraPathParams,
}

/// Broken board invariant. Only a generator bug can produce one of these.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("cell {coord:?} is open to the {direction} but its neighbor is walled")]
    AsymmetricWall { coord: Coord, direction: Direction },

    #[error("fixed cell {coord:?} has been carved")]
    CarvedFixedCell { coord: Coord },

    #[error("cell {coord:?} is open to the {direction} across the board edge")]
    OpenBoundary { coord: Coord, direction: Direction },
}
