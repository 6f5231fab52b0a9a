use log::{debug, trace};
use rand::prelude::*;
use rand::rngs::StdRng;
use rand_chacha::ChaCha8Rng;

use crate::error::MazeError;
use crate::generators::{Generator, GeneratorState};
use crate::grids::{Dimensions, Direction, Edge};

/// Disjoint-set forest over cell indices, union by rank with path halving.
struct DisjointSets {
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
}

impl DisjointSets {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            sets: len,
        }
    }

    fn find(&mut self, mut index: usize) -> usize {
        while self.parent[index] != index {
            self.parent[index] = self.parent[self.parent[index]];
            index = self.parent[index];
        }
        index
    }

    /// Merges the sets holding `a` and `b`. Returns `false` if they were
    /// already the same set.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let a_root = self.find(a);
        let b_root = self.find(b);
        if a_root == b_root {
            return false;
        }

        if self.rank[a_root] > self.rank[b_root] {
            self.parent[b_root] = a_root;
        } else {
            self.parent[a_root] = b_root;
            if self.rank[a_root] == self.rank[b_root] {
                self.rank[b_root] += 1;
            }
        }
        self.sets -= 1;
        true
    }
}

/// Randomized Kruskal: each tick draws one of the remaining interior walls
/// and carves it if the cells on either side are not yet connected.
/// Draws that would close a loop discard the wall and yield `None`.
pub struct Kruskal<R = StdRng> {
    dims: Dimensions,
    walls: Vec<Edge>,
    sets: DisjointSets,
    rng: R,
}

impl Kruskal<StdRng> {
    pub fn new(width: i64, height: i64) -> Result<Self, MazeError> {
        Self::with_rng(width, height, StdRng::from_entropy())
    }
}

impl Kruskal<ChaCha8Rng> {
    pub fn seeded(width: i64, height: i64, seed: u64) -> Result<Self, MazeError> {
        Self::with_rng(width, height, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Kruskal<R> {
    pub fn with_rng(width: i64, height: i64, rng: R) -> Result<Self, MazeError> {
        let dims = Dimensions::new(width, height)?;

        let mut walls = Vec::with_capacity(2 * dims.cell_count());
        for y in 0..dims.height() {
            for x in 0..dims.width() {
                if x > 0 {
                    walls.push(Edge::new(x, y, Direction::West));
                }
                if y > 0 {
                    walls.push(Edge::new(x, y, Direction::North));
                }
            }
        }

        debug!("kruskal: {}x{} grid, {} walls", width, height, walls.len());
        Ok(Self {
            sets: DisjointSets::new(dims.cell_count()),
            dims,
            walls,
            rng,
        })
    }

    /// Interior walls not drawn yet.
    pub fn remaining_walls(&self) -> usize {
        self.walls.len()
    }

    /// Number of still-disconnected regions; 1 once the maze is complete.
    pub fn region_count(&self) -> usize {
        self.sets.sets
    }

    pub fn connected(&mut self, a: (usize, usize), b: (usize, usize)) -> bool {
        let a = self.dims.index_of(a.0, a.1);
        let b = self.dims.index_of(b.0, b.1);
        self.sets.find(a) == self.sets.find(b)
    }
}

impl<R: Rng> Generator for Kruskal<R> {
    fn tick(&mut self) -> Option<Edge> {
        if self.is_done() {
            return None;
        }

        let pick = self.rng.gen_range(0..self.walls.len());
        let wall = self.walls.swap_remove(pick);
        let (tx, ty) = wall.target()?;

        let one = self.dims.index_of(wall.x, wall.y);
        let two = self.dims.index_of(tx, ty);
        let carved = self.sets.union(one, two);

        if self.is_done() {
            self.walls.clear();
            debug!("kruskal: single region left, maze complete");
        }

        if carved {
            trace!("carve ({}, {}) {:?}", wall.x, wall.y, wall.direction);
            Some(wall)
        } else {
            trace!(
                "discard ({}, {}) {:?}, would close a loop",
                wall.x,
                wall.y,
                wall.direction
            );
            None
        }
    }

    fn state(&self) -> GeneratorState {
        if self.sets.sets <= 1 || self.walls.is_empty() {
            GeneratorState::Terminal
        } else {
            GeneratorState::Active
        }
    }

    fn dims(&self) -> &Dimensions {
        &self.dims
    }
}
