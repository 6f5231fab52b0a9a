use log::{debug, trace};
use rand::prelude::*;
use rand::rngs::StdRng;
use rand_chacha::ChaCha8Rng;

use crate::error::MazeError;
use crate::generators::{Generator, GeneratorState};
use crate::grids::{Dimensions, Direction, Edge, Neighbor};

/// Randomized depth-first backtracker that carves one wall per tick.
///
/// The recursion of the usual algorithm is kept on an explicit stack
/// (`frontier`), so the walk can stop after any step and pick up where it
/// left off on the next [`Generator::tick`]. A tick either carves from the
/// cell on top of the stack into a random unvisited neighbour, or, at a dead
/// end, pops that cell and returns `None`.
pub struct Backtracker<R = StdRng> {
    dims: Dimensions,
    visited: Vec<bool>,
    visited_count: usize,
    frontier: Vec<(usize, usize)>,
    rng: R,
}

impl Backtracker<StdRng> {
    pub fn new(width: i64, height: i64) -> Result<Self, MazeError> {
        Self::with_rng(width, height, StdRng::from_entropy())
    }
}

impl Backtracker<ChaCha8Rng> {
    /// Reproducible generator: same seed and size, same maze.
    pub fn seeded(width: i64, height: i64, seed: u64) -> Result<Self, MazeError> {
        Self::with_rng(width, height, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Backtracker<R> {
    pub fn with_rng(width: i64, height: i64, rng: R) -> Result<Self, MazeError> {
        let dims = Dimensions::new(width, height)?;

        let start = (0, 0);
        let mut visited = vec![false; dims.cell_count()];
        visited[dims.index_of(start.0, start.1)] = true;

        let mut generator = Self {
            dims,
            visited,
            visited_count: 1,
            frontier: vec![start],
            rng,
        };
        generator.finish_if_complete();

        debug!(
            "backtracker: {}x{} grid, starting at {:?}",
            width, height, start
        );
        Ok(generator)
    }

    pub fn is_visited(&self, x: usize, y: usize) -> bool {
        self.dims.contains(x, y) && self.visited[self.dims.index_of(x, y)]
    }

    pub fn visited_count(&self) -> usize {
        self.visited_count
    }

    /// Current depth-first path, start cell first.
    pub fn frontier(&self) -> &[(usize, usize)] {
        &self.frontier
    }

    /// Cell the next tick carves from, `None` once terminal.
    pub fn current(&self) -> Option<(usize, usize)> {
        self.frontier.last().copied()
    }

    // Once every cell is visited the rest of the stack would only be popped
    // one dead end at a time, so it is dropped in one go.
    fn finish_if_complete(&mut self) {
        if self.visited_count == self.dims.cell_count() && !self.frontier.is_empty() {
            self.frontier.clear();
            debug!(
                "backtracker: all {} cells visited, maze complete",
                self.visited_count
            );
        }
    }
}

impl<R: Rng> Generator for Backtracker<R> {
    fn tick(&mut self) -> Option<Edge> {
        let (x, y) = self.current()?;

        let mut open: [(Neighbor, Direction); 4] = [((0, 0), Direction::North); 4];
        let mut len = 0;
        for (cell, direction) in self.dims.neighborhood(x, y) {
            if !self.is_visited(cell.0, cell.1) {
                open[len] = (cell, direction);
                len += 1;
            }
        }

        match open[..len].choose(&mut self.rng) {
            Some(&((nx, ny), direction)) => {
                let index = self.dims.index_of(nx, ny);
                self.visited[index] = true;
                self.visited_count += 1;
                self.frontier.push((nx, ny));
                trace!("carve ({}, {}) {:?} -> ({}, {})", x, y, direction, nx, ny);

                self.finish_if_complete();
                Some(Edge::new(x, y, direction))
            }
            None => {
                self.frontier.pop();
                trace!("dead end at ({}, {}), backtracking", x, y);
                None
            }
        }
    }

    fn state(&self) -> GeneratorState {
        if self.frontier.is_empty() {
            GeneratorState::Terminal
        } else {
            GeneratorState::Active
        }
    }

    fn dims(&self) -> &Dimensions {
        &self.dims
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_cell_starts_terminal() {
        let mut generator = Backtracker::seeded(1, 1, 0).unwrap();
        assert_eq!(generator.state(), GeneratorState::Terminal);
        assert_eq!(generator.tick(), None);
        assert!(generator.is_visited(0, 0));
    }

    #[test]
    fn two_by_one_carves_the_only_wall() {
        let mut generator = Backtracker::seeded(2, 1, 42).unwrap();
        assert_eq!(generator.frontier(), &[(0, 0)]);

        assert_eq!(generator.tick(), Some(Edge::new(0, 0, Direction::East)));
        assert!(generator.is_visited(1, 0));
        assert!(generator.is_done());

        for _ in 0..5 {
            assert_eq!(generator.tick(), None);
        }
        assert_eq!(generator.visited_count(), 2);
    }

    #[test]
    fn corridor_never_backtracks() {
        let mut generator = Backtracker::seeded(1, 3, 3).unwrap();
        assert_eq!(generator.tick(), Some(Edge::new(0, 0, Direction::South)));
        assert_eq!(generator.tick(), Some(Edge::new(0, 1, Direction::South)));
        assert!(generator.is_done());
    }

    #[test]
    fn dead_end_pops_exactly_one_cell() {
        let mut generator = Backtracker::seeded(4, 4, 9).unwrap();
        while !generator.is_done() {
            let before = generator.frontier().to_vec();
            match generator.tick() {
                Some(edge) => {
                    assert_eq!(Some(edge.source()), before.last().copied());
                    if !generator.is_done() {
                        assert_eq!(generator.frontier().len(), before.len() + 1);
                    }
                }
                None => {
                    assert_eq!(generator.frontier(), &before[..before.len() - 1]);
                }
            }
        }
        assert_eq!(generator.visited_count(), 16);
    }

    #[test]
    fn carved_edges_only_enter_unvisited_cells() {
        let mut generator = Backtracker::seeded(7, 5, 1234).unwrap();
        let mut ticks = 0;
        while !generator.is_done() {
            let before_count = generator.visited_count();
            if let Some(edge) = generator.tick() {
                let (tx, ty) = edge.target().unwrap();
                assert!(generator.is_visited(tx, ty));
                assert_eq!(generator.visited_count(), before_count + 1);
            }
            ticks += 1;
        }
        assert!(ticks <= 2 * 7 * 5);
        assert_eq!(generator.visited_count(), 35);
    }

    #[test]
    fn same_seed_same_maze() {
        let a = Backtracker::seeded(9, 6, 77).unwrap().generate_maze();
        let b = Backtracker::seeded(9, 6, 77).unwrap().generate_maze();
        assert_eq!(a, b);
        assert_eq!(a.len(), 53);
    }
}
