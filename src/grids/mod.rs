pub mod wall_grid;

use serde::{Deserialize, Serialize};

use crate::error::MazeError;

/// Size of the lattice. Cells are addressed `(x, y)` with `x < width` and
/// `y < height`; `y` grows southwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    width: usize,
    height: usize,
}

impl Dimensions {
    pub fn new(width: i64, height: i64) -> Result<Self, MazeError> {
        let invalid = || MazeError::InvalidDimensions { width, height };
        if width <= 0 || height <= 0 {
            return Err(invalid());
        }

        let w = usize::try_from(width).map_err(|_| invalid())?;
        let h = usize::try_from(height).map_err(|_| invalid())?;
        w.checked_mul(h).ok_or_else(invalid)?;

        Ok(Self {
            width: w,
            height: h,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    #[inline]
    pub fn index_of(&self, x: usize, y: usize) -> usize {
        (self.width * y) + x
    }

    /// Inverse of [`Dimensions::index_of`].
    #[inline]
    pub fn coords_of(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }

    /// The cell one step from `(x, y)` towards `direction`, if it exists.
    pub fn neighbor(&self, x: usize, y: usize, direction: Direction) -> Option<(usize, usize)> {
        let (dx, dy) = direction.offset();
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;

        if self.contains(nx, ny) {
            Some((nx, ny))
        } else {
            None
        }
    }

    pub fn neighborhood(&self, x: usize, y: usize) -> Neighborhood {
        let mut neighborhood = Neighborhood::new();
        neighborhood.north = self.neighbor(x, y, Direction::North);
        neighborhood.south = self.neighbor(x, y, Direction::South);
        neighborhood.east = self.neighbor(x, y, Direction::East);
        neighborhood.west = self.neighbor(x, y, Direction::West);
        neighborhood
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North = 0,
    South = 1,
    East = 2,
    West = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Unit step in grid coordinates.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    #[inline]
    pub(crate) fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl std::ops::Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Self::Output {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

impl From<usize> for Direction {
    fn from(dir: usize) -> Self {
        match dir {
            0 => Direction::North,
            1 => Direction::South,
            2 => Direction::East,
            3 => Direction::West,
            _ => unreachable!(),
        }
    }
}

pub type Neighbor = (usize, usize);

/// The in-grid cells around one cell. Iterates `(cell, direction)` pairs in
/// [`Direction::ALL`] order, skipping the sides that fall off the grid.
#[derive(Debug, Clone, Copy)]
pub struct Neighborhood {
    pub north: Option<Neighbor>,
    pub south: Option<Neighbor>,
    pub east: Option<Neighbor>,
    pub west: Option<Neighbor>,

    counter: usize,
}

impl Neighborhood {
    pub fn new() -> Self {
        Self {
            north: None,
            south: None,
            east: None,
            west: None,
            counter: 0,
        }
    }

    pub fn get(&self, direction: Direction) -> Option<Neighbor> {
        match direction {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
        }
    }
}

impl Default for Neighborhood {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Neighborhood {
    type Item = (Neighbor, Direction);

    fn next(&mut self) -> Option<Self::Item> {
        while self.counter < Direction::ALL.len() {
            let direction = Direction::from(self.counter);
            self.counter += 1;
            if let Some(cell) = self.get(direction) {
                return Some((cell, direction));
            }
        }
        None
    }
}

/// One removed wall: the wall on the `direction` side of cell `(x, y)`.
///
/// Walls are shared, so `South of (x, y)` and `North of (x, y + 1)` name the
/// same wall. Compare [`Edge::normalized`] forms when that matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub x: usize,
    pub y: usize,
    pub direction: Direction,
}

impl Edge {
    pub fn new(x: usize, y: usize, direction: Direction) -> Self {
        Self { x, y, direction }
    }

    pub fn source(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// The cell on the other side of the wall. `None` only when the wall
    /// would lie north of row 0 or west of column 0.
    pub fn target(&self) -> Option<(usize, usize)> {
        let (dx, dy) = self.direction.offset();
        Some((
            self.x.checked_add_signed(dx)?,
            self.y.checked_add_signed(dy)?,
        ))
    }

    /// Same wall, always spelled as a North or West wall.
    pub fn normalized(&self) -> Edge {
        match self.direction {
            Direction::South => Edge::new(self.x, self.y + 1, Direction::North),
            Direction::East => Edge::new(self.x + 1, self.y, Direction::West),
            Direction::North | Direction::West => *self,
        }
    }
}
