//! The player's snake
//!
//! Segments are stored head first. Growth is lazy: `grow` only raises the
//! target length and the next `advance` keeps its tail instead of dropping
//! it.

use std::collections::VecDeque;

use rand::Rng;

use super::grid::{Cell, Direction, Grid};

#[derive(Debug, Clone)]
pub struct Snake {
    /// Occupied cells, head at index 0
    segments: VecDeque<Cell>,
    direction: Direction,
    pending_direction: Option<Direction>,
    /// Length the snake grows or shrinks toward (always >= 1)
    target_length: usize,
}

impl Snake {
    /// A single-segment snake at `head` heading in `direction`
    pub fn new(head: Cell, direction: Direction) -> Self {
        Self {
            segments: VecDeque::from([head]),
            direction,
            pending_direction: None,
            target_length: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Never true; a snake keeps at least its head
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn target_length(&self) -> usize {
        self.target_length
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    pub fn segments(&self) -> impl Iterator<Item = Cell> + '_ {
        self.segments.iter().copied()
    }

    pub fn head_cell(&self) -> Cell {
        self.segments[0]
    }

    /// Everything behind the head, used for self-collision
    pub fn body_without_head(&self) -> impl Iterator<Item = Cell> + '_ {
        self.segments.iter().skip(1).copied()
    }

    /// Queue a turn for the next tick. A direct reversal is ignored while
    /// there is a body segment to run into.
    pub fn set_pending_direction(&mut self, dir: Direction) {
        if self.segments.len() > 1 && dir.is_opposite(self.direction) {
            return;
        }
        self.pending_direction = Some(dir);
    }

    /// Adopt the queued turn, if any
    pub fn commit_direction(&mut self) {
        if let Some(dir) = self.pending_direction.take() {
            self.direction = dir;
        }
    }

    /// Move one cell forward. Returns the tail cell that was vacated, if the
    /// snake was already at its target length.
    pub fn advance(&mut self, grid: &Grid) -> Option<Cell> {
        let new_head = grid.wrap(self.head_cell().step(self.direction));
        self.segments.push_front(new_head);
        if self.segments.len() > self.target_length {
            self.segments.pop_back()
        } else {
            None
        }
    }

    pub fn grow(&mut self) {
        self.target_length += 1;
    }

    /// Drop the tail immediately. Returns false (and changes nothing) when
    /// only the head is left.
    pub fn shrink(&mut self) -> bool {
        if self.segments.len() <= 1 {
            return false;
        }
        self.segments.pop_back();
        self.target_length = self.target_length.saturating_sub(1).max(1);
        true
    }

    /// Back to a single segment at the current head, facing a random way
    pub fn reset(&mut self, rng: &mut impl Rng) {
        self.target_length = 1;
        self.segments.truncate(1);
        self.direction = Direction::random(rng);
        self.pending_direction = None;
    }

    /// Move a single-segment snake to `cell`
    pub fn respawn_at(&mut self, cell: Cell) {
        debug_assert_eq!(self.segments.len(), 1);
        self.segments.clear();
        self.segments.push_back(cell);
    }

    /// Build a snake from explicit segments (head first)
    #[cfg(test)]
    pub(crate) fn from_segments(segments: &[Cell], direction: Direction) -> Self {
        Self {
            segments: segments.iter().copied().collect(),
            direction,
            pending_direction: None,
            target_length: segments.len(),
        }
    }
}
