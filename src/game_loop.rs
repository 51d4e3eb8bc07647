use log::{debug, info, trace};
use rand::Rng;
use rand::rngs::StdRng;

use crate::game::{GameState, SnakeStart};
use crate::input::Direction;

/// What happened during one tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// The snake moved and nothing else changed.
    Moved,
    /// The head reached the apple; the snake grew and a new apple was placed.
    AteApple,
    /// The head ran into the body; the board was reset.
    Collided,
    /// The apple was reached with no cell left to grow into; the board was reset.
    BoardFilled,
}

/// Drives a [`GameState`] one tick at a time.
///
/// Direction requests that arrive between ticks collapse into a single slot,
/// so only the most recent one reaches the next tick.
#[derive(Debug, Clone)]
pub struct GameLoop<R = StdRng> {
    state: GameState<R>,
    start: SnakeStart,
    requested_direction: Option<Direction>,
    tick_count: u64,
    apples_eaten: u32,
    round: u32,
}

impl<R: Rng> GameLoop<R> {
    /// Wraps `state`; every reset puts the snake back at `start`.
    #[must_use]
    pub fn new(state: GameState<R>, start: SnakeStart) -> Self {
        Self {
            state,
            start,
            requested_direction: None,
            tick_count: 0,
            apples_eaten: 0,
            round: 1,
        }
    }

    /// Records an external direction request for the next tick.
    pub fn request_direction(&mut self, direction: Direction) {
        self.requested_direction = Some(direction);
    }

    /// Runs one complete tick: steer, move, then grow or reset.
    ///
    /// Eating is checked before self-collision, so at most one of the two
    /// takes effect.
    pub fn step(&mut self) -> TickOutcome {
        if let Some(direction) = self.requested_direction.take() {
            self.state.queue_direction(direction);
        }

        self.state.advance();
        self.tick_count += 1;
        trace!(
            "tick {}: head at ({}, {}) heading {:?}",
            self.tick_count,
            self.state.head().x,
            self.state.head().y,
            self.state.current_direction()
        );

        if self.state.check_apple_eaten() {
            if self.state.is_full() {
                info!(
                    "board filled at length {} after {} ticks; starting over",
                    self.state.len(),
                    self.tick_count
                );
                self.restart();
                return TickOutcome::BoardFilled;
            }

            self.state.grow_and_respawn_apple();
            self.apples_eaten += 1;
            debug!(
                "apple eaten, length {}, next apple at ({}, {})",
                self.state.len(),
                self.state.apple().x,
                self.state.apple().y
            );
            return TickOutcome::AteApple;
        }

        if self.state.check_self_collision() {
            info!(
                "self-collision at length {} in round {}; resetting",
                self.state.len(),
                self.round
            );
            self.restart();
            return TickOutcome::Collided;
        }

        TickOutcome::Moved
    }

    fn restart(&mut self) {
        self.state
            .reset(self.start.head.x, self.start.head.y, self.start.length);
        self.requested_direction = None;
        self.apples_eaten = 0;
        self.round += 1;
    }

    /// Read-only view of the board for rendering.
    #[must_use]
    pub fn state(&self) -> &GameState<R> {
        &self.state
    }

    #[must_use]
    pub fn start(&self) -> SnakeStart {
        self.start
    }

    /// Ticks run since the loop was created, across resets.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Apples eaten in the current round.
    #[must_use]
    pub fn apples_eaten(&self) -> u32 {
        self.apples_eaten
    }

    /// One-based round number; increases on every reset.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }
}
