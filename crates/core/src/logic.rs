//! Transition engine - the pure per-tick step function
//!
//! [`step`] maps one snapshot to the next. It never mutates its input and
//! never fails: a well-formed state in, a well-formed state out. The only
//! incidental effect is consuming randomness when eaten food must respawn.

use rand::Rng;

use tui_snake_types::{Point, FOOD_SCORE};

use crate::state::{place_food, GameState};

/// Advance the game by one tick.
///
/// - Paused or finished games are returned unchanged (idempotent no-op).
/// - The head moves one cell along the current heading, wrapping each axis
///   modulo the grid size: exiting one edge re-enters the opposite edge.
/// - Landing on any body cell except the vacating tail sets `game_over`.
/// - Landing on food grows the body by one segment, adds [`FOOD_SCORE`]
///   points, and respawns food against the *new* body.
///
/// Direction and pause pass through untouched; the driver edits those fields
/// out-of-band between ticks. The engine has no notion of an illegal
/// direction change, only of a collision on move: rejecting reversals into
/// the neck is the input collaborator's job.
pub fn step<R: Rng>(state: &GameState, rng: &mut R) -> GameState {
    if state.game_over || state.paused {
        return state.clone();
    }

    let grid_size = state.grid_size;
    let (dx, dy) = state.direction.delta();
    let head = state.head();
    let new_head = Point::new(
        (head.x + dx).rem_euclid(grid_size),
        (head.y + dy).rem_euclid(grid_size),
    );

    // The old head is excluded (the body behind it is what the new head can
    // fatally hit) and so is the tail, which vacates this tick. When the
    // head lands on food the tail stays put, but an eating head can never
    // overlap the body: food is never placed on a snake cell.
    let game_over = state.snake[1..]
        .split_last()
        .map_or(false, |(_, blocking)| blocking.contains(&new_head));
    let ate_food = new_head == state.food;

    let mut snake = Vec::with_capacity(state.snake.len() + 1);
    snake.push(new_head);
    if ate_food {
        snake.extend_from_slice(&state.snake);
    } else {
        snake.extend_from_slice(&state.snake[..state.snake.len() - 1]);
    }

    let food = if ate_food {
        place_food(&snake, grid_size, rng)
    } else {
        state.food
    };
    let score = if ate_food {
        state.score + FOOD_SCORE
    } else {
        state.score
    };

    let next = GameState {
        snake,
        food,
        direction: state.direction,
        grid_size,
        game_over,
        score,
        paused: state.paused,
    };
    debug_assert!(next.validate().is_ok());
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tui_snake_types::Direction;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    /// Build a state with full control over the body and food, keeping the
    /// constructor's validation in the loop.
    fn state_with(
        snake: Vec<Point>,
        food: Point,
        direction: Direction,
        grid_size: i32,
    ) -> GameState {
        GameState::new(snake, food, direction, grid_size).unwrap()
    }

    #[test]
    fn one_step_up_from_initial_moves_the_head() {
        let mut rng = rng();
        let state = GameState::initial_with_rng(10, &mut rng).unwrap();
        let next = step(&state, &mut rng);

        assert_eq!(next.head(), Point::new(5, 4));
        assert_eq!(next.snake().len(), 3);
        assert_eq!(next.score(), 0);
        assert!(!next.game_over());
    }

    #[test]
    fn step_is_a_no_op_while_paused() {
        let mut rng = rng();
        let state = GameState::initial_with_rng(10, &mut rng)
            .unwrap()
            .with_paused(true);

        assert_eq!(step(&state, &mut rng), state);
        // And repeatedly: no hidden tick backlog accumulates.
        assert_eq!(step(&step(&state, &mut rng), &mut rng), state);
    }

    #[test]
    fn step_is_a_no_op_after_game_over() {
        let mut rng = rng();
        // Heading down from (5,5) lands on the body segment at (5,6).
        let state = state_with(
            vec![Point::new(5, 5), Point::new(5, 6), Point::new(5, 7)],
            Point::new(0, 0),
            Direction::Down,
            10,
        );

        let dead = step(&state, &mut rng);
        assert!(dead.game_over());
        assert_eq!(step(&dead, &mut rng), dead);
    }

    #[test]
    fn self_collision_sets_game_over() {
        let mut rng = rng();
        let state = state_with(
            vec![Point::new(5, 5), Point::new(5, 6), Point::new(5, 7)],
            Point::new(0, 0),
            Direction::Down,
            10,
        );

        let next = step(&state, &mut rng);
        assert_eq!(next.head(), Point::new(5, 6));
        assert!(next.game_over());
    }

    #[test]
    fn moving_onto_the_vacating_tail_is_legal() {
        let mut rng = rng();
        // A 2x2 block: head (5,5), tail (5,6). Heading down re-enters the
        // tail cell exactly as the tail vacates it.
        let state = state_with(
            vec![
                Point::new(5, 5),
                Point::new(6, 5),
                Point::new(6, 6),
                Point::new(5, 6),
            ],
            Point::new(0, 0),
            Direction::Down,
            10,
        );

        let next = step(&state, &mut rng);
        assert_eq!(next.head(), Point::new(5, 6));
        assert!(!next.game_over());
        assert_eq!(next.snake().len(), 4);
    }

    #[test]
    fn two_segment_snake_may_turn_onto_its_tail() {
        let mut rng = rng();
        let state = state_with(
            vec![Point::new(5, 5), Point::new(5, 6)],
            Point::new(0, 0),
            Direction::Down,
            10,
        );

        let next = step(&state, &mut rng);
        assert_eq!(next.head(), Point::new(5, 6));
        assert!(!next.game_over());
        assert_eq!(next.snake(), &[Point::new(5, 6), Point::new(5, 5)]);
    }

    #[test]
    fn toroidal_wrap_on_all_four_edges() {
        let mut rng = rng();
        let n = 10;
        let cases = [
            (Point::new(0, 4), Direction::Left, Point::new(n - 1, 4)),
            (Point::new(n - 1, 4), Direction::Right, Point::new(0, 4)),
            (Point::new(4, 0), Direction::Up, Point::new(4, n - 1)),
            (Point::new(4, n - 1), Direction::Down, Point::new(4, 0)),
        ];

        for (start, direction, expected) in cases {
            let state = state_with(vec![start], Point::new(7, 7), direction, n);
            let next = step(&state, &mut rng);
            assert_eq!(next.head(), expected, "from {start} heading {direction:?}");
            assert!(!next.game_over());
        }
    }

    #[test]
    fn eating_grows_by_one_and_scores_ten() {
        let mut rng = rng();
        let state = state_with(
            vec![Point::new(5, 5), Point::new(5, 6), Point::new(5, 7)],
            Point::new(5, 4),
            Direction::Up,
            10,
        );

        let next = step(&state, &mut rng);
        assert_eq!(next.snake().len(), state.snake().len() + 1);
        assert_eq!(next.score(), state.score() + 10);
        assert_eq!(next.head(), Point::new(5, 4));
        // The whole previous body is retained behind the new head.
        assert_eq!(&next.snake()[1..], state.snake());
        // Respawned food avoids the grown body.
        assert!(!next.snake().contains(&next.food()));
    }

    #[test]
    fn missing_the_food_keeps_length_and_score() {
        let mut rng = rng();
        let state = state_with(
            vec![Point::new(5, 5), Point::new(5, 6), Point::new(5, 7)],
            Point::new(0, 0),
            Direction::Up,
            10,
        );

        let next = step(&state, &mut rng);
        assert_eq!(next.snake().len(), state.snake().len());
        assert_eq!(next.score(), state.score());
        assert_eq!(next.food(), state.food());
    }

    #[test]
    fn direction_and_paused_pass_through() {
        let mut rng = rng();
        let state = state_with(
            vec![Point::new(5, 5)],
            Point::new(0, 0),
            Direction::Left,
            10,
        );

        let next = step(&state, &mut rng);
        assert_eq!(next.direction(), Direction::Left);
        assert!(!next.paused());
    }

    #[test]
    fn single_segment_snake_cannot_collide_with_itself() {
        let mut rng = rng();
        let mut state = state_with(vec![Point::new(3, 3)], Point::new(0, 1), Direction::Right, 6);

        for _ in 0..40 {
            state = step(&state, &mut rng);
            assert!(!state.game_over() || state.snake().len() > 1);
        }
    }

    #[test]
    fn every_reachable_snapshot_satisfies_the_invariants() {
        let mut rng = rng();
        let mut state = GameState::initial_with_rng(8, &mut rng).unwrap();
        let turns = [
            Direction::Left,
            Direction::Up,
            Direction::Right,
            Direction::Down,
        ];

        for i in 0..500 {
            // Steer in a rotating pattern, skipping illegal reversals the
            // way the driver would.
            let requested = turns[i % turns.len()];
            if requested != state.direction().opposite() {
                state = state.with_direction(requested);
            }

            state = step(&state, &mut rng);
            assert_eq!(state.validate(), Ok(()), "tick {i}: {state:?}");
            assert!(!state.snake().contains(&state.food()) || state.game_over());

            if state.game_over() {
                state = GameState::initial_with_rng(8, &mut rng).unwrap();
            }
        }
    }
}
