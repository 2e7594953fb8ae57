//! Single-cell board items
//!
//! Apples, inedible apples and stones share one placement routine; only the
//! kind differs, and the renderer picks colours by kind.

use std::collections::HashSet;

use rand::Rng;

use super::grid::{Cell, Grid};
use crate::consts::MAX_PLACEMENT_ATTEMPTS;
use crate::error::{Error, Result};

/// Item types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// Grows the snake and scores
    Apple,
    /// Shrinks the snake; ends the round if only the head is left
    InedibleApple,
    /// Ends the round on contact
    Stone,
}

impl ItemKind {
    pub const ALL: [ItemKind; 3] = [ItemKind::Apple, ItemKind::InedibleApple, ItemKind::Stone];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Apple => "apple",
            ItemKind::InedibleApple => "inedible apple",
            ItemKind::Stone => "stone",
        }
    }
}

/// An item sitting on one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnableItem {
    pub kind: ItemKind,
    pub position: Cell,
}

impl SpawnableItem {
    pub fn new(kind: ItemKind, position: Cell) -> Self {
        Self { kind, position }
    }

    /// Create an item on a random cell outside `occupied`
    pub fn spawn(
        kind: ItemKind,
        grid: &Grid,
        occupied: &HashSet<Cell>,
        rng: &mut impl Rng,
    ) -> Result<Self> {
        let position = free_cell(grid, occupied, rng)?;
        Ok(Self::new(kind, position))
    }

    /// Move to a random cell outside `occupied`. On error the position is
    /// left unchanged.
    pub fn randomize_position(
        &mut self,
        grid: &Grid,
        occupied: &HashSet<Cell>,
        rng: &mut impl Rng,
    ) -> Result<()> {
        self.position = free_cell(grid, occupied, rng)?;
        log::debug!(
            "{} placed at ({}, {})",
            self.kind.as_str(),
            self.position.x,
            self.position.y
        );
        Ok(())
    }
}

/// Rejection-sample a free cell, falling back to a scan from a random offset
/// once the sample budget is spent.
fn free_cell(grid: &Grid, occupied: &HashSet<Cell>, rng: &mut impl Rng) -> Result<Cell> {
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let cell = grid.random_cell(rng);
        if !occupied.contains(&cell) {
            return Ok(cell);
        }
    }

    let count = grid.cell_count();
    let start = rng.random_range(0..count);
    if let Some(cell) = (0..count)
        .map(|i| grid.cell_at((start + i) % count))
        .find(|cell| !occupied.contains(cell))
    {
        log::debug!("Placement fell back to grid scan ({} cells occupied)", occupied.len());
        return Ok(cell);
    }

    log::error!("Board is full, cannot place item ({} cells)", count);
    Err(Error::BoardFull { cells: count })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_nearly_full_board_finds_last_cell() {
        let grid = Grid::new(4, 4);
        let last = Cell::new(2, 3);
        let occupied: HashSet<Cell> = (0..grid.cell_count())
            .map(|i| grid.cell_at(i))
            .filter(|c| *c != last)
            .collect();

        let mut rng = Pcg32::seed_from_u64(1);
        let mut item = SpawnableItem::new(ItemKind::Stone, Cell::new(0, 0));
        item.randomize_position(&grid, &occupied, &mut rng).unwrap();
        assert_eq!(item.position, last);
    }

    #[test]
    fn test_full_board_fails_loudly() {
        let grid = Grid::new(3, 2);
        let occupied: HashSet<Cell> = (0..grid.cell_count()).map(|i| grid.cell_at(i)).collect();

        let mut rng = Pcg32::seed_from_u64(1);
        let mut item = SpawnableItem::new(ItemKind::Apple, Cell::new(1, 1));
        let err = item.randomize_position(&grid, &occupied, &mut rng);
        match err {
            Err(e @ Error::BoardFull { cells: 6 }) => {
                assert_eq!(e.to_string(), "no free cell left on the board (6 cells searched)");
            }
            other => panic!("expected BoardFull over 6 cells, got {:?}", other),
        }
        // Position untouched on failure
        assert_eq!(item.position, Cell::new(1, 1));
    }

    #[test]
    fn test_spawn_sets_kind() {
        let mut rng = Pcg32::seed_from_u64(3);
        let item =
            SpawnableItem::spawn(ItemKind::InedibleApple, &Grid::STANDARD, &HashSet::new(), &mut rng)
                .unwrap();
        assert_eq!(item.kind, ItemKind::InedibleApple);
        assert!(Grid::STANDARD.contains(item.position));
    }

    proptest! {
        #[test]
        fn prop_placement_avoids_occupied(
            seed in any::<u64>(),
            taken in proptest::collection::hash_set((0i32..32, 0i32..24), 0..400),
        ) {
            let grid = Grid::STANDARD;
            let occupied: HashSet<Cell> = taken.into_iter().map(|(x, y)| Cell::new(x, y)).collect();
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut item = SpawnableItem::new(ItemKind::Apple, Cell::default());
            item.randomize_position(&grid, &occupied, &mut rng).unwrap();
            prop_assert!(!occupied.contains(&item.position));
            prop_assert!(grid.contains(item.position));
        }
    }
}
