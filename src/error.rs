use thiserror::Error;

use crate::grids::Direction;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("invalid maze dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: i64, height: i64 },

    #[error("wall {direction:?} of cell ({x}, {y}) is outside the grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        direction: Direction,
    },

    #[error("unknown generator `{0}`, expected `backtracker` or `kruskal`")]
    UnknownGenerator(String),
}
