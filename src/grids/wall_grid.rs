use std::collections::VecDeque;
use std::fmt;

use crate::error::MazeError;
use crate::grids::{Dimensions, Direction, Edge};

/// Bitset of the walls still standing around a cell, one bit per
/// [`Direction`].
type WalledCell = u8;

const ALL_WALLS: WalledCell = 0b1111;

/// Tracks which walls of a grid are still standing. Starts fully walled;
/// carved edges are applied to both cells sharing the wall.
#[derive(Debug, Clone)]
pub struct WallGrid {
    pub dims: Dimensions,

    cells: Vec<WalledCell>,
    passages: usize,
}

impl WallGrid {
    pub fn new(dims: Dimensions) -> Self {
        Self {
            cells: vec![ALL_WALLS; dims.cell_count()],
            dims,
            passages: 0,
        }
    }

    /// Removes the wall described by `edge`. Returns `true` when the wall
    /// was standing, `false` when it had already been carved.
    pub fn carve(&mut self, edge: &Edge) -> Result<bool, MazeError> {
        let out_of_bounds = || MazeError::OutOfBounds {
            x: edge.x,
            y: edge.y,
            direction: edge.direction,
        };
        if !self.dims.contains(edge.x, edge.y) {
            return Err(out_of_bounds());
        }
        let (tx, ty) = self
            .dims
            .neighbor(edge.x, edge.y, edge.direction)
            .ok_or_else(out_of_bounds)?;

        let one = self.dims.index_of(edge.x, edge.y);
        let two = self.dims.index_of(tx, ty);
        let standing = self.cells[one] & edge.direction.bit() != 0;

        self.cells[one] &= !edge.direction.bit();
        self.cells[two] &= !(-edge.direction).bit();

        if standing {
            self.passages += 1;
        }
        Ok(standing)
    }

    /// Whether the `direction` wall of `(x, y)` stands. The outer border and
    /// anything outside the grid always count as walled.
    pub fn has_wall(&self, x: usize, y: usize, direction: Direction) -> bool {
        if !self.dims.contains(x, y) {
            return true;
        }
        self.cells[self.dims.index_of(x, y)] & direction.bit() != 0
    }

    /// Number of carved walls.
    pub fn passage_count(&self) -> usize {
        self.passages
    }

    /// Connected with exactly `cells - 1` passages, i.e. the passages form a
    /// spanning tree of the grid.
    pub fn is_perfect(&self) -> bool {
        let cell_count = self.dims.cell_count();
        if self.passages != cell_count - 1 {
            return false;
        }

        let mut seen = vec![false; cell_count];
        let mut queue = VecDeque::new();
        seen[0] = true;
        queue.push_back((0, 0));
        let mut reached = 1;

        while let Some((x, y)) = queue.pop_front() {
            for ((nx, ny), dir) in self.dims.neighborhood(x, y) {
                let index = self.dims.index_of(nx, ny);
                if !seen[index] && !self.has_wall(x, y, dir) {
                    seen[index] = true;
                    reached += 1;
                    queue.push_back((nx, ny));
                }
            }
        }

        reached == cell_count
    }
}

impl fmt::Display for WallGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.dims.width();

        write!(f, "+")?;
        for _ in 0..width {
            write!(f, "--+")?;
        }
        writeln!(f)?;

        for y in 0..self.dims.height() {
            write!(f, "|")?;
            for x in 0..width {
                let side = if self.has_wall(x, y, Direction::East) {
                    "|"
                } else {
                    " "
                };
                write!(f, "  {}", side)?;
            }
            writeln!(f)?;

            write!(f, "+")?;
            for x in 0..width {
                let floor = if self.has_wall(x, y, Direction::South) {
                    "--"
                } else {
                    "  "
                };
                write!(f, "{}+", floor)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
