//! Fixed-step simulation tick
//!
//! One call advances the round by exactly one cell of snake movement and
//! resolves every collision before returning.

use super::grid::{Cell, Direction};
use super::state::{GameEvent, GamePhase, GameState, RoundOverCause};
use crate::consts::*;
use crate::error::Result;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Turn requested since the previous tick
    pub steer: Option<Direction>,
    /// Pause toggle
    pub toggle_pause: bool,
}

/// Final score of a round that just ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    pub score: u32,
    pub cause: RoundOverCause,
}

/// What a tick changed, for the renderer and the score log
#[derive(Debug, Clone, Default)]
pub struct TickReport {
    /// Tail cell left behind by the move
    pub vacated: Option<Cell>,
    pub events: Vec<GameEvent>,
    /// Set when the round ended; the state has already been reset
    pub round_over: Option<RoundSummary>,
}

impl TickReport {
    /// True when anything besides the snake moved
    pub fn needs_full_redraw(&self) -> bool {
        !self.events.is_empty()
    }
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) -> Result<TickReport> {
    let mut report = TickReport::default();

    if input.toggle_pause {
        state.phase = match state.phase {
            GamePhase::Running => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Running,
        };
        log::debug!("Phase now {:?}", state.phase);
    }
    if state.phase == GamePhase::Paused {
        return Ok(report);
    }

    if let Some(dir) = input.steer {
        state.steer(dir);
    }

    state.time_ticks += 1;
    state.snake.commit_direction();
    report.vacated = state.snake.advance(&state.grid);

    let occupied = state.occupied();
    let head = state.snake.head_cell();
    let mut cause = None;

    if head == state.apple.position {
        state.snake.grow();
        state.score += APPLE_SCORE;
        state.speed = (state.speed + SPEED_STEP).min(MAX_SPEED);
        state
            .apple
            .randomize_position(&state.grid, &occupied, &mut state.rng)?;
        report.events.push(GameEvent::AppleEaten);
        log::debug!("Apple eaten, score {} speed {}", state.score, state.speed);
    } else if head == state.inedible_apple.position {
        if state.snake.shrink() {
            state
                .inedible_apple
                .randomize_position(&state.grid, &occupied, &mut state.rng)?;
            report.events.push(GameEvent::Shrunk);
            log::debug!("Inedible apple eaten, length now {}", state.snake.len());
        } else {
            cause = Some(RoundOverCause::StarvedByInedible);
        }
    }

    if cause.is_none() {
        if state.snake.body_without_head().any(|cell| cell == head) {
            cause = Some(RoundOverCause::SelfCollision);
        } else if head == state.stone.position {
            cause = Some(RoundOverCause::Stone);
        }
    }

    if let Some(cause) = cause {
        let summary = RoundSummary {
            score: state.score,
            cause,
        };
        log::info!(
            "Round over after {} ticks: snake {}, score {}",
            state.time_ticks,
            cause.as_str(),
            summary.score
        );
        report.events.push(GameEvent::RoundOver(cause));
        report.round_over = Some(summary);
        state.start_new_round()?;
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::grid::Grid;
    use crate::sim::snake::Snake;
    use proptest::prelude::*;

    /// A game with the snake head at pixel (100, 100) heading right and the
    /// items parked out of the way.
    fn scenario_state() -> GameState {
        let mut state = GameState::new(2024).unwrap();
        state.snake = Snake::new(Cell::from_pixels(100, 100), Direction::Right);
        state.apple.position = Cell::new(20, 20);
        state.inedible_apple.position = Cell::new(22, 20);
        state.stone.position = Cell::new(24, 20);
        state
    }

    fn steer(dir: Direction) -> TickInput {
        TickInput {
            steer: Some(dir),
            ..Default::default()
        }
    }

    #[test]
    fn test_apple_eaten() {
        let mut state = scenario_state();
        state.apple.position = Cell::from_pixels(120, 100);

        let report = tick(&mut state, &TickInput::default()).unwrap();
        assert_eq!(report.events, vec![GameEvent::AppleEaten]);
        assert!(report.round_over.is_none());
        assert_eq!(state.snake.target_length(), 2);
        assert_eq!(state.score, 2);
        assert_eq!(state.speed, INITIAL_SPEED + 2);
        assert_ne!(state.apple.position, Cell::new(6, 5));
        assert_eq!(state.occupied().len(), 4);

        // Growth shows up on the next move
        let report = tick(&mut state, &TickInput::default()).unwrap();
        assert_eq!(report.vacated, None);
        assert_eq!(state.snake.len(), 2);
    }

    #[test]
    fn test_speed_is_capped() {
        let mut state = scenario_state();
        state.speed = MAX_SPEED - 1;
        state.apple.position = Cell::new(6, 5);
        tick(&mut state, &TickInput::default()).unwrap();
        assert_eq!(state.speed, MAX_SPEED);

        state.apple.position = state.snake.head_cell().step(Direction::Right);
        tick(&mut state, &TickInput::default()).unwrap();
        assert_eq!(state.speed, MAX_SPEED);
        assert_eq!(state.score, 4);
    }

    #[test]
    fn test_stone_collision_resets_round() {
        let mut state = scenario_state();
        state.score = 10;
        state.speed = 15;
        state.stone.position = Cell::new(6, 5);
        // A stone hit draws nothing before the reset picks a direction
        let expected_direction = Direction::random(&mut state.rng.clone());

        let report = tick(&mut state, &TickInput::default()).unwrap();
        assert_eq!(
            report.round_over,
            Some(RoundSummary {
                score: 10,
                cause: RoundOverCause::Stone
            })
        );
        assert_eq!(state.score, 0);
        assert_eq!(state.speed, INITIAL_SPEED);
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.target_length(), 1);
        assert_eq!(state.snake.head_cell(), state.grid.center());
        assert_eq!(state.snake.pending_direction(), None);
        assert_eq!(state.snake.direction(), expected_direction);
        assert_eq!(state.occupied().len(), 4);
        assert_eq!(state.total_rounds, 1);
    }

    #[test]
    fn test_inedible_apple_at_length_one_resets_round() {
        let mut state = scenario_state();
        state.score = 6;
        state.inedible_apple.position = Cell::new(6, 5);

        let report = tick(&mut state, &TickInput::default()).unwrap();
        assert_eq!(
            report.round_over,
            Some(RoundSummary {
                score: 6,
                cause: RoundOverCause::StarvedByInedible
            })
        );
        assert_eq!(state.score, 0);
        assert_eq!(state.speed, INITIAL_SPEED);
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.occupied().len(), 4);
    }

    #[test]
    fn test_inedible_apple_shrinks_longer_snake() {
        let mut state = scenario_state();
        state.snake = Snake::from_segments(
            &[Cell::new(5, 5), Cell::new(4, 5), Cell::new(3, 5)],
            Direction::Right,
        );
        state.inedible_apple.position = Cell::new(6, 5);

        let report = tick(&mut state, &TickInput::default()).unwrap();
        assert_eq!(report.events, vec![GameEvent::Shrunk]);
        assert!(report.round_over.is_none());
        assert_eq!(state.snake.len(), 2);
        assert_eq!(state.snake.target_length(), 2);
        assert_ne!(state.inedible_apple.position, Cell::new(6, 5));
        assert_eq!(state.occupied().len(), 5);
    }

    #[test]
    fn test_self_collision_resets_round() {
        let mut state = scenario_state();
        // Curled up and heading up; turning right runs into (6, 5)
        state.snake = Snake::from_segments(
            &[
                Cell::new(5, 5),
                Cell::new(5, 6),
                Cell::new(6, 6),
                Cell::new(6, 5),
                Cell::new(6, 4),
            ],
            Direction::Up,
        );
        state.score = 8;

        let report = tick(&mut state, &steer(Direction::Right)).unwrap();
        assert_eq!(
            report.round_over,
            Some(RoundSummary {
                score: 8,
                cause: RoundOverCause::SelfCollision
            })
        );
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_following_own_tail_is_safe() {
        let mut state = scenario_state();
        state.snake = Snake::from_segments(
            &[Cell::new(5, 5), Cell::new(5, 6), Cell::new(6, 6), Cell::new(6, 5)],
            Direction::Up,
        );

        let report = tick(&mut state, &steer(Direction::Right)).unwrap();
        assert!(report.round_over.is_none());
        assert_eq!(report.vacated, Some(Cell::new(6, 5)));
        assert_eq!(state.snake.head_cell(), Cell::new(6, 5));
        assert_eq!(state.snake.len(), 4);
    }

    #[test]
    fn test_reversal_ignored_for_long_snake() {
        let mut state = scenario_state();
        state.snake = Snake::from_segments(&[Cell::new(5, 5), Cell::new(4, 5)], Direction::Right);

        let report = tick(&mut state, &steer(Direction::Left)).unwrap();
        assert!(report.round_over.is_none());
        assert_eq!(state.snake.direction(), Direction::Right);
        assert_eq!(state.snake.head_cell(), Cell::new(6, 5));
    }

    #[test]
    fn test_wraps_off_right_edge() {
        let mut state = scenario_state();
        state.snake = Snake::new(Cell::new(31, 10), Direction::Right);
        tick(&mut state, &TickInput::default()).unwrap();
        assert_eq!(state.snake.head_cell(), Cell::new(0, 10));
    }

    #[test]
    fn test_pause() {
        let mut state = scenario_state();
        let pause = TickInput {
            toggle_pause: true,
            ..Default::default()
        };

        tick(&mut state, &pause).unwrap();
        assert_eq!(state.phase, GamePhase::Paused);
        let head = state.snake.head_cell();

        // Paused ticks do nothing
        let report = tick(&mut state, &TickInput::default()).unwrap();
        assert!(report.vacated.is_none() && report.events.is_empty());
        assert_eq!(state.snake.head_cell(), head);
        assert_eq!(state.time_ticks, 0);

        // Unpause moves again in the same tick
        tick(&mut state, &pause).unwrap();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.snake.head_cell(), head.step(Direction::Right));
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(99999).unwrap();
        let mut state2 = GameState::new(99999).unwrap();
        let inputs = [
            steer(Direction::Up),
            TickInput::default(),
            steer(Direction::Left),
            steer(Direction::Down),
            TickInput::default(),
        ];

        for _ in 0..40 {
            for input in &inputs {
                tick(&mut state1, input).unwrap();
                tick(&mut state2, input).unwrap();
            }
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.snake.head_cell(), state2.snake.head_cell());
        assert_eq!(state1.apple, state2.apple);
        assert_eq!(state1.stone, state2.stone);
        assert_eq!(state1.inedible_apple, state2.inedible_apple);
        assert_eq!(state1.total_rounds, state2.total_rounds);
    }

    proptest! {
        #[test]
        fn prop_board_never_overlaps(
            seed in any::<u64>(),
            turns in proptest::collection::vec(proptest::option::of(0usize..4), 1..300),
        ) {
            let mut state = GameState::new(seed).unwrap();
            for turn in turns {
                let input = TickInput {
                    steer: turn.map(|i| Direction::ALL[i]),
                    ..Default::default()
                };
                let report = tick(&mut state, &input).unwrap();

                // Snake cells are distinct and no item shares a cell
                prop_assert_eq!(state.occupied().len(), state.snake.len() + 3);
                prop_assert!(state.speed >= INITIAL_SPEED && state.speed <= MAX_SPEED);
                let grew = report.events.contains(&GameEvent::AppleEaten);
                let expected = state.snake.len() + usize::from(grew);
                prop_assert_eq!(state.snake.target_length(), expected);
                if report.round_over.is_some() {
                    prop_assert_eq!(state.score, 0);
                    prop_assert_eq!(state.snake.len(), 1);
                }
            }
        }
    }

    #[test]
    fn test_grid_center_matches_pixels() {
        assert_eq!(Cell::from_pixels(320, 240), Grid::STANDARD.center());
    }
}
