use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::apple::Apple;
use crate::config::GridSize;
use crate::input::Direction;
use crate::snake::{Position, Snake};

/// Where and how long the snake starts after every reset.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SnakeStart {
    pub head: Position,
    pub length: usize,
}

/// Complete mutable game state for one board.
///
/// The random source for apple placement is injected, so a seeded or
/// scripted generator makes a session fully reproducible.
#[derive(Debug, Clone)]
pub struct GameState<R = StdRng> {
    snake: Snake,
    apple: Apple,
    bounds: GridSize,
    rng: R,
}

impl GameState<StdRng> {
    /// Creates a state whose apples are placed from OS entropy.
    #[must_use]
    pub fn new(bounds: GridSize, start: SnakeStart) -> Self {
        Self::with_rng(bounds, start, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, start: SnakeStart, seed: u64) -> Self {
        Self::with_rng(bounds, start, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameState<R> {
    /// Creates a state with the snake at `start` and a random apple.
    ///
    /// # Panics
    ///
    /// Panics on an empty board or when `start.length` does not fit on it.
    #[must_use]
    pub fn with_rng(bounds: GridSize, start: SnakeStart, mut rng: R) -> Self {
        assert!(
            bounds.width > 0 && bounds.height > 0,
            "board must have at least one cell"
        );

        let snake = Snake::new(start.head, start.length, bounds.total_cells());
        let apple = Apple::spawn(&mut rng, bounds);

        Self {
            snake,
            apple,
            bounds,
            rng,
        }
    }

    /// Puts a fresh snake on the board and re-rolls the apple.
    ///
    /// Segment `i` lands on `(start_x - i, start_y)` and both directions
    /// become `Right`. Initial coordinates are not wrapped, so callers keep
    /// `start_x >= start_length - 1`.
    ///
    /// # Panics
    ///
    /// Panics when `start_length` is zero or exceeds the board's cell count.
    pub fn reset(&mut self, start_x: i32, start_y: i32, start_length: usize) {
        self.snake = Snake::new(
            Position::new(start_x, start_y),
            start_length,
            self.bounds.total_cells(),
        );
        self.apple = Apple::spawn(&mut self.rng, self.bounds);
    }

    /// Records `direction` for the next tick (last write wins).
    pub fn queue_direction(&mut self, direction: Direction) {
        self.snake.queue_direction(direction);
    }

    /// Runs one tick of movement.
    pub fn advance(&mut self) {
        self.snake.advance(self.bounds);
    }

    /// Returns true when the head sits on the apple.
    #[must_use]
    pub fn check_apple_eaten(&self) -> bool {
        self.snake.head() == self.apple.position
    }

    /// Returns true when the head overlaps the body beyond the neck.
    #[must_use]
    pub fn check_self_collision(&self) -> bool {
        self.snake.head_hits_body()
    }

    /// Lengthens the snake by one and places a new apple.
    ///
    /// # Panics
    ///
    /// Panics when the snake already covers every cell of the board.
    pub fn grow_and_respawn_apple(&mut self) {
        self.snake.grow();
        self.apple = Apple::spawn(&mut self.rng, self.bounds);
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Segments from head to tail.
    #[must_use]
    pub fn segments(&self) -> &[Position] {
        self.snake.segments()
    }

    #[must_use]
    pub fn head(&self) -> Position {
        self.snake.head()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snake.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    /// Maximum snake length, one segment per board cell.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.snake.capacity()
    }

    /// Returns true when growth is no longer possible.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.snake.is_full()
    }

    #[must_use]
    pub fn apple(&self) -> Position {
        self.apple.position
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    #[must_use]
    pub fn current_direction(&self) -> Direction {
        self.snake.direction()
    }

    #[must_use]
    pub fn pending_direction(&self) -> Direction {
        self.snake.pending_direction()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;

    use crate::apple::Apple;
    use crate::config::GridSize;
    use crate::input::Direction;
    use crate::snake::{Position, Snake};

    use super::{GameState, SnakeStart};

    const BOARD: GridSize = GridSize {
        width: 10,
        height: 10,
    };

    fn start(x: i32, y: i32, length: usize) -> SnakeStart {
        SnakeStart {
            head: Position::new(x, y),
            length,
        }
    }

    #[test]
    fn reset_lays_out_snake_heading_right() {
        let mut state = GameState::new_with_seed(BOARD, start(2, 2, 1), 1);

        state.queue_direction(Direction::Down);
        state.advance();
        state.reset(5, 5, 3);

        assert_eq!(
            state.segments(),
            [Position::new(5, 5), Position::new(4, 5), Position::new(3, 5)]
        );
        assert_eq!(state.current_direction(), Direction::Right);
        assert_eq!(state.pending_direction(), Direction::Right);
        assert!(state.apple().is_within_bounds(BOARD));
    }

    #[test]
    fn one_tick_moves_every_segment_forward() {
        let mut state = GameState::new_with_seed(BOARD, start(5, 5, 3), 2);

        state.advance();

        assert_eq!(
            state.segments(),
            [Position::new(6, 5), Position::new(5, 5), Position::new(4, 5)]
        );
    }

    #[test]
    fn reverse_request_keeps_heading() {
        let mut state = GameState::new_with_seed(BOARD, start(9, 5, 3), 3);

        state.queue_direction(Direction::Left);
        state.advance();

        assert_eq!(state.current_direction(), Direction::Right);
        assert_eq!(state.head(), Position::new(0, 5));
    }

    #[test]
    fn head_wraps_on_every_edge() {
        let mut state = GameState::new_with_seed(BOARD, start(9, 0, 3), 4);

        state.queue_direction(Direction::Up);
        state.advance();
        assert_eq!(state.head(), Position::new(9, 9));

        state.queue_direction(Direction::Right);
        state.advance();
        assert_eq!(state.head(), Position::new(0, 9));

        state.queue_direction(Direction::Down);
        state.advance();
        assert_eq!(state.head(), Position::new(0, 0));

        state.queue_direction(Direction::Left);
        state.advance();
        assert_eq!(state.head(), Position::new(9, 0));
    }

    #[test]
    fn apple_on_head_is_eaten_and_grows_snake() {
        let mut state = GameState::with_rng(BOARD, start(5, 5, 3), StepRng::new(0, 0));
        state.apple = Apple::new(Position::new(6, 5));

        state.advance();
        assert!(state.check_apple_eaten());

        state.grow_and_respawn_apple();
        assert_eq!(state.len(), 4);
        assert_eq!(state.apple(), Position::new(0, 0));
        assert!(!state.check_apple_eaten());
    }

    #[test]
    fn eating_check_has_no_side_effects() {
        let mut state = GameState::new_with_seed(BOARD, start(5, 5, 3), 5);
        state.apple = Apple::new(Position::new(5, 5));

        assert!(state.check_apple_eaten());
        assert!(state.check_apple_eaten());
        assert_eq!(state.len(), 3);
        assert_eq!(state.apple(), Position::new(5, 5));
    }

    #[test]
    fn three_segments_never_collide() {
        let mut state = GameState::new_with_seed(BOARD, start(5, 5, 3), 6);

        for direction in [
            Direction::Down,
            Direction::Left,
            Direction::Up,
            Direction::Right,
        ] {
            state.queue_direction(direction);
            state.advance();
            assert!(!state.check_self_collision());
        }
    }

    #[test]
    fn tight_loop_bites_body() {
        let mut state = GameState::new_with_seed(BOARD, start(5, 5, 3), 7);
        state.snake = Snake::from_segments(
            vec![
                Position::new(2, 2),
                Position::new(1, 2),
                Position::new(1, 3),
                Position::new(2, 3),
                Position::new(3, 3),
                Position::new(3, 2),
            ],
            Direction::Left,
            BOARD.total_cells(),
        );

        state.queue_direction(Direction::Down);
        state.advance();

        assert_eq!(state.head(), Position::new(2, 3));
        assert!(state.check_self_collision());
    }

    #[test]
    fn capacity_tracks_board_size() {
        let state = GameState::new_with_seed(
            GridSize {
                width: 7,
                height: 3,
            },
            start(3, 1, 3),
            8,
        );

        assert_eq!(state.capacity(), 21);
        assert!(!state.is_full());
    }

    #[test]
    #[should_panic(expected = "past board capacity")]
    fn growing_a_full_board_panics() {
        let tiny = GridSize {
            width: 3,
            height: 1,
        };
        let mut state = GameState::new_with_seed(tiny, start(2, 0, 3), 9);

        assert!(state.is_full());
        state.grow_and_respawn_apple();
    }
}
