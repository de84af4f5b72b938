use crate::{
    error::{ConfigError, Endpoint},
    maze::{Coord, pattern},
};

/// Tuning for the cycle-injection pass run on imperfect mazes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtraPathParams {
    /// A wall is only opened between cells at least this far apart in the maze.
    pub min_distance: usize,
    /// How deep the distance search goes before calling two cells far apart.
    pub max_search_depth: usize,
    /// Maximum number of walls opened by the pass.
    pub max_paths: usize,
}

impl Default for ExtraPathParams {
    fn default() -> Self {
        Self {
            min_distance: 6,
            max_search_depth: 5,
            max_paths: 10,
        }
    }
}

/// Everything needed to build, carve and solve one maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeConfig {
    pub width: u16,
    pub height: u16,
    pub entry: Coord,
    pub exit: Coord,
    /// Perfect mazes have exactly one path between any two cells.
    pub perfect: bool,
    /// Seed for reproducible generation. A fresh OS seed is used when absent.
    pub seed: Option<u64>,
    /// Draw the decorative fixed-cell pattern when the board is large enough.
    pub pattern: bool,
    pub extra_paths: ExtraPathParams,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 15,
            entry: (1, 1),
            exit: (20, 15),
            perfect: true,
            seed: None,
            pattern: true,
            extra_paths: ExtraPathParams::default(),
        }
    }
}

impl MazeConfig {
    /// Default configuration for a `width` x `height` board, with the entry in
    /// the north-west corner and the exit in the south-east corner.
    pub fn with_size(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            exit: (width, height),
            ..Self::default()
        }
    }

    /// Rejects configurations no algorithm should run on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = (self.width, self.height);
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidDimensions { width, height });
        }
        let fixed = if self.pattern {
            pattern::logo_cells(width, height)
        } else {
            Vec::new()
        };
        for (which, coord) in [(Endpoint::Entry, self.entry), (Endpoint::Exit, self.exit)] {
            let in_bounds = (1..=width).contains(&coord.0) && (1..=height).contains(&coord.1);
            if !in_bounds {
                return Err(ConfigError::EndpointOutOfBounds {
                    which,
                    coord,
                    width,
                    height,
                });
            }
            if fixed.contains(&coord) {
                return Err(ConfigError::EndpointOnFixedCell { which, coord });
            }
        }
        if self.extra_paths.min_distance == 0 {
            return Err(ConfigError::InvalidExtraPathParams);
        }
        Ok(())
    }
}
