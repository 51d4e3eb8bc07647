use rand::rngs::mock::StepRng;
use toroidal_snake::config::GridSize;
use toroidal_snake::game::{GameState, SnakeStart};
use toroidal_snake::game_loop::{GameLoop, TickOutcome};
use toroidal_snake::input::Direction;
use toroidal_snake::snake::Position;

const BOARD: GridSize = GridSize {
    width: 10,
    height: 10,
};

fn start() -> SnakeStart {
    SnakeStart {
        head: Position::new(5, 5),
        length: 3,
    }
}

#[test]
fn stepwise_growth_wrap_and_self_collision() {
    // A zero step source puts every apple on (0, 0).
    let mut game = GameLoop::new(GameState::with_rng(BOARD, start(), StepRng::new(0, 0)), start());
    assert_eq!(game.state().apple(), Position::new(0, 0));

    // Head up to row 0, then right through the wrap onto the apple.
    game.request_direction(Direction::Up);
    for _ in 0..5 {
        assert_eq!(game.step(), TickOutcome::Moved);
    }
    assert_eq!(game.state().head(), Position::new(5, 0));

    game.request_direction(Direction::Right);
    for _ in 0..4 {
        assert_eq!(game.step(), TickOutcome::Moved);
    }
    assert_eq!(game.state().head(), Position::new(9, 0));

    assert_eq!(game.step(), TickOutcome::AteApple);
    assert_eq!(game.state().head(), Position::new(0, 0));
    assert_eq!(game.state().len(), 4);

    // The new apple lands under the head again; it is eaten on the next visit,
    // not immediately, because eating is only checked after moving.
    assert_eq!(game.state().apple(), Position::new(0, 0));
    assert_eq!(game.step(), TickOutcome::Moved);
    assert_eq!(
        game.state().segments(),
        [
            Position::new(1, 0),
            Position::new(0, 0),
            Position::new(9, 0),
            Position::new(8, 0),
        ]
    );

    // Grow to five by looping back down through (0, 0) from above.
    game.request_direction(Direction::Up);
    assert_eq!(game.step(), TickOutcome::Moved);
    assert_eq!(game.state().head(), Position::new(1, 9));
    game.request_direction(Direction::Left);
    assert_eq!(game.step(), TickOutcome::Moved);
    game.request_direction(Direction::Down);
    assert_eq!(game.step(), TickOutcome::AteApple);
    assert_eq!(game.state().head(), Position::new(0, 0));
    assert_eq!(game.state().len(), 5);

    // Straighten out heading down, clear of the (0, 0) apple.
    for _ in 0..3 {
        assert_eq!(game.step(), TickOutcome::Moved);
    }
    assert_eq!(game.state().head(), Position::new(0, 3));

    // Tight box: right, up, left lands the head on the last segment.
    game.request_direction(Direction::Right);
    assert_eq!(game.step(), TickOutcome::Moved);
    game.request_direction(Direction::Up);
    assert_eq!(game.step(), TickOutcome::Moved);
    game.request_direction(Direction::Left);
    assert_eq!(game.step(), TickOutcome::Collided);

    assert_eq!(game.round(), 2);
    assert_eq!(game.state().len(), 3);
    assert_eq!(game.state().head(), Position::new(5, 5));
}

#[test]
fn every_tick_keeps_segments_on_the_board() {
    let mut game = GameLoop::new(GameState::new_with_seed(BOARD, start(), 42), start());
    let turns = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];
    let mut previous_len = game.state().len();

    for tick in 0..2_000 {
        if tick % 7 == 0 {
            game.request_direction(turns[(tick / 7) % turns.len()]);
        }

        let outcome = game.step();
        let state = game.state();

        assert!(
            state
                .segments()
                .iter()
                .all(|segment| segment.is_within_bounds(state.bounds()))
        );
        assert!(state.apple().is_within_bounds(state.bounds()));

        match outcome {
            TickOutcome::Collided | TickOutcome::BoardFilled => assert_eq!(state.len(), 3),
            _ => assert!(state.len() >= previous_len),
        }
        previous_len = state.len();
    }
}

#[test]
fn same_seed_gives_same_game() {
    let mut first = GameLoop::new(GameState::new_with_seed(BOARD, start(), 7), start());
    let mut second = GameLoop::new(GameState::new_with_seed(BOARD, start(), 7), start());

    for tick in 0..300_u32 {
        let direction = if tick % 11 < 5 {
            Direction::Down
        } else {
            Direction::Right
        };
        first.request_direction(direction);
        second.request_direction(direction);

        assert_eq!(first.step(), second.step());
        assert_eq!(first.state().segments(), second.state().segments());
        assert_eq!(first.state().apple(), second.state().apple());
    }
}
