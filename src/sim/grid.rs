//! Toroidal cell grid
//!
//! Cells are addressed in cell units. The board is `SCREEN_WIDTH` by
//! `SCREEN_HEIGHT` pixels cut into `CELL_SIZE` squares. Moving off one edge
//! re-enters on the opposite edge.

use rand::Rng;

use crate::consts::*;

/// A discrete grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Cell containing the given pixel coordinate (top-left origin)
    #[cfg(test)]
    pub(crate) fn from_pixels(px: i32, py: i32) -> Self {
        Self::new(px.div_euclid(CELL_SIZE), py.div_euclid(CELL_SIZE))
    }

    /// Neighbouring cell one step in `dir`, without wrapping
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit delta in cell space (y grows downwards)
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Uniformly random direction
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Board dimensions in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
}

impl Default for Grid {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl Grid {
    /// The 32x24 board
    pub const STANDARD: Grid = Grid {
        width: GRID_WIDTH,
        height: GRID_HEIGHT,
    };

    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn cell_count(&self) -> usize {
        (self.width * self.height) as usize
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    /// Reduce a cell into range, wrapping around every edge
    pub fn wrap(&self, cell: Cell) -> Cell {
        Cell::new(cell.x.rem_euclid(self.width), cell.y.rem_euclid(self.height))
    }

    /// Uniformly random in-range cell
    pub fn random_cell(&self, rng: &mut impl Rng) -> Cell {
        Cell::new(
            rng.random_range(0..self.width),
            rng.random_range(0..self.height),
        )
    }

    /// Start cell of a fresh snake
    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    /// Row-major index, used by the placement scan
    pub fn cell_at(&self, index: usize) -> Cell {
        let w = self.width as usize;
        Cell::new((index % w) as i32, (index / w) as i32)
    }
}
