//! Step-at-a-time perfect maze generation.
//!
//! A generator is polled with [`Generator::tick`], which does one unit of
//! work and hands back at most one carved wall. The caller decides the
//! cadence and does its own drawing; [`WallGrid`] is there for callers that
//! want to keep track of which walls are still standing.

pub mod error;
pub mod generators;
pub mod grids;

pub use error::MazeError;
pub use generators::backtracker::Backtracker;
pub use generators::kruskal::Kruskal;
pub use generators::{new_generator, Generator, GeneratorKind, GeneratorState};
pub use grids::wall_grid::WallGrid;
pub use grids::{Dimensions, Direction, Edge, Neighborhood};

/// The depth-first backtracker is the canonical incremental generator.
pub type IncrementalMazeGenerator<R = rand::rngs::StdRng> = Backtracker<R>;
