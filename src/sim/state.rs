//! Game state and core simulation types
//!
//! Everything a tick reads or mutates lives in `GameState`; the run loop
//! owns one instance for the whole session.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::grid::{Cell, Direction, Grid};
use super::item::{ItemKind, SpawnableItem};
use super::snake::Snake;
use crate::consts::*;
use crate::error::Result;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Ticks advance the snake
    Running,
    /// Ticks are ignored until unpaused
    Paused,
}

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOverCause {
    /// Head ran into the snake's own body
    SelfCollision,
    /// Head hit the stone
    Stone,
    /// Inedible apple eaten with nothing left to shrink
    StarvedByInedible,
}

impl RoundOverCause {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundOverCause::SelfCollision => "ran into itself",
            RoundOverCause::Stone => "hit a stone",
            RoundOverCause::StarvedByInedible => "ate an inedible apple with no tail left",
        }
    }
}

/// Things that happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    AppleEaten,
    Shrunk,
    RoundOver(RoundOverCause),
}

/// Complete game state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub grid: Grid,
    pub snake: Snake,
    pub apple: SpawnableItem,
    pub inedible_apple: SpawnableItem,
    pub stone: SpawnableItem,
    /// Score of the current round
    pub score: u32,
    /// Ticks per second, within [INITIAL_SPEED, MAX_SPEED]
    pub speed: u32,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Rounds finished so far
    pub total_rounds: u32,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new game on the standard board with the given seed
    pub fn new(seed: u64) -> Result<Self> {
        Self::with_grid(seed, Grid::STANDARD)
    }

    pub fn with_grid(seed: u64, grid: Grid) -> Result<Self> {
        let mut rng = Pcg32::seed_from_u64(seed);
        let snake = Snake::new(grid.center(), Direction::Right);

        let mut occupied: HashSet<Cell> = snake.segments().collect();
        let apple = SpawnableItem::spawn(ItemKind::Apple, &grid, &occupied, &mut rng)?;
        occupied.insert(apple.position);
        let inedible_apple =
            SpawnableItem::spawn(ItemKind::InedibleApple, &grid, &occupied, &mut rng)?;
        occupied.insert(inedible_apple.position);
        let stone = SpawnableItem::spawn(ItemKind::Stone, &grid, &occupied, &mut rng)?;

        Ok(Self {
            seed,
            grid,
            snake,
            apple,
            inedible_apple,
            stone,
            score: 0,
            speed: INITIAL_SPEED,
            phase: GamePhase::Running,
            time_ticks: 0,
            total_rounds: 0,
            rng,
        })
    }

    /// Queue a direction change for the next tick
    pub fn steer(&mut self, dir: Direction) {
        self.snake.set_pending_direction(dir);
    }

    pub fn items(&self) -> [&SpawnableItem; 3] {
        [&self.apple, &self.inedible_apple, &self.stone]
    }

    /// Cells claimed by the snake and every item
    pub fn occupied(&self) -> HashSet<Cell> {
        let mut occupied: HashSet<Cell> = self.snake.segments().collect();
        occupied.extend(self.items().iter().map(|item| item.position));
        occupied
    }

    /// Start a fresh round: single-segment snake back at the centre, items
    /// re-placed one after another, score and speed restored.
    pub(crate) fn start_new_round(&mut self) -> Result<()> {
        self.snake.reset(&mut self.rng);
        self.snake.respawn_at(self.grid.center());

        let mut occupied: HashSet<Cell> = self.snake.segments().collect();
        for item in [&mut self.apple, &mut self.stone, &mut self.inedible_apple] {
            item.randomize_position(&self.grid, &occupied, &mut self.rng)?;
            occupied.insert(item.position);
        }

        self.score = 0;
        self.speed = INITIAL_SPEED;
        self.total_rounds += 1;
        Ok(())
    }
}
