use std::time::Duration;

use gridsnake::config::GameConfig;
use gridsnake::game::{GameState, GameStatus};
use gridsnake::grid::Cell;
use gridsnake::input::Direction;
use gridsnake::snake::Snake;

fn small_board() -> GameConfig {
    GameConfig::new(8, Duration::from_millis(200)).expect("valid config")
}

#[test]
fn stepwise_food_collection_turn_and_wall_collision() {
    let mut state = GameState::new_with_seed(small_board(), 42);
    state.snake = Snake::new(Cell::new(1, 1));
    state.food = Cell::new(2, 1);

    state.tick();
    assert_eq!(state.status, GameStatus::Playing);
    assert_eq!(state.score, 1);
    assert_eq!(state.snake.len(), 2);
    assert_eq!(state.snake.head(), Cell::new(2, 1));

    state.set_direction_intent(Direction::Up);
    state.tick();
    assert_eq!(state.status, GameStatus::Playing);
    assert_eq!(state.snake.head(), Cell::new(2, 0));

    // Still heading Up: the next cell is above the board.
    state.tick();
    assert_eq!(state.status, GameStatus::GameOver);
    assert_eq!(state.snake.head(), Cell::new(2, 0));

    state.reset();
    assert_eq!(state.status, GameStatus::Playing);
    assert_eq!(state.score, 0);
    assert_eq!(state.snake.head(), Cell::new(4, 4));
    assert_eq!(state.food, Cell::new(3, 5));
}

#[test]
fn held_reverse_key_never_kills_a_two_cell_snake() {
    let mut state = GameState::new_with_seed(small_board(), 7);
    state.snake = Snake::from_segments(vec![Cell::new(3, 3), Cell::new(2, 3)]);
    state.food = Cell::new(7, 7);

    // Simulate a player holding the opposite arrow across several ticks.
    for expected_x in 4..7 {
        state.set_direction_intent(Direction::Left);
        state.tick();
        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.snake.head(), Cell::new(expected_x, 3));
    }
}
