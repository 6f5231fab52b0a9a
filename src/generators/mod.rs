pub mod backtracker;
pub mod kruskal;

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::MazeError;
use crate::grids::{Dimensions, Edge};

use backtracker::Backtracker;
use kruskal::Kruskal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorState {
    Active,
    Terminal,
}

/// A maze generator driven one step at a time by its caller.
pub trait Generator {
    /// Does one unit of work. Returns the wall carved by this step, if any.
    /// Once the generator is terminal every call returns `None`.
    fn tick(&mut self) -> Option<Edge>;

    fn state(&self) -> GeneratorState;

    fn dims(&self) -> &Dimensions;

    fn is_done(&self) -> bool {
        self.state() == GeneratorState::Terminal
    }

    /// Runs to completion and returns every carved wall in order.
    fn generate_maze(&mut self) -> Vec<Edge> {
        let mut edges = Vec::with_capacity(self.dims().cell_count().saturating_sub(1));
        while !self.is_done() {
            if let Some(edge) = self.tick() {
                edges.push(edge);
            }
        }
        edges
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorKind {
    Backtracker,
    Kruskal,
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorKind::Backtracker => write!(f, "backtracker"),
            GeneratorKind::Kruskal => write!(f, "kruskal"),
        }
    }
}

impl FromStr for GeneratorKind {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "backtracker" | "dfs" => Ok(GeneratorKind::Backtracker),
            "kruskal" => Ok(GeneratorKind::Kruskal),
            _ => Err(MazeError::UnknownGenerator(s.to_string())),
        }
    }
}

/// Builds a generator of the given kind. A `seed` makes the run
/// reproducible; without one the generator is seeded from entropy.
pub fn new_generator(
    kind: GeneratorKind,
    width: i64,
    height: i64,
    seed: Option<u64>,
) -> Result<Box<dyn Generator>, MazeError> {
    let generator: Box<dyn Generator> = match (kind, seed) {
        (GeneratorKind::Backtracker, Some(seed)) => {
            Box::new(Backtracker::with_rng(width, height, ChaCha8Rng::seed_from_u64(seed))?)
        }
        (GeneratorKind::Backtracker, None) => {
            Box::new(Backtracker::with_rng(width, height, StdRng::from_entropy())?)
        }
        (GeneratorKind::Kruskal, Some(seed)) => {
            Box::new(Kruskal::with_rng(width, height, ChaCha8Rng::seed_from_u64(seed))?)
        }
        (GeneratorKind::Kruskal, None) => {
            Box::new(Kruskal::with_rng(width, height, StdRng::from_entropy())?)
        }
    };
    Ok(generator)
}
