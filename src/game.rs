use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{GameConfig, INITIAL_FOOD_CELL};
use crate::food;
use crate::grid::{Cell, Grid};
use crate::input::{Direction, DirectionLatch};
use crate::snake::Snake;

/// Current high-level gameplay state.
///
/// `GameOver` is terminal; only `reset` leaves it.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Read-only view of one simulation instant, handed to the renderer.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snapshot {
    pub body: Vec<Cell>,
    pub food: Cell,
    pub score: u32,
    pub status: GameStatus,
}

/// Complete mutable simulation state for one game session.
///
/// Exclusively owns the snake, food, score, and status. The main loop only
/// touches it through `set_direction_intent`, `tick`, `snapshot`, and
/// `reset`.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Cell,
    pub score: u32,
    pub status: GameStatus,
    config: GameConfig,
    grid: Grid,
    latch: DirectionLatch,
    last_direction: Direction,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh game with an entropy-seeded food sequence.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::new_with_seed(config, rand::random())
    }

    /// Creates a deterministic game for tests and reproducible runs.
    ///
    /// Start layout: one-cell snake at the grid center, moving Right, food
    /// at the fixed initial cell, score 0.
    #[must_use]
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Self {
        let grid = Grid::new(config.grid_size);

        Self {
            snake: Snake::new(grid.center()),
            food: INITIAL_FOOD_CELL,
            score: 0,
            status: GameStatus::Playing,
            config,
            grid,
            latch: DirectionLatch::new(Direction::Right),
            last_direction: Direction::Right,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Records the player's intended direction for the next tick.
    ///
    /// Last write wins; legality against the previous tick's effective
    /// direction is decided inside `tick`.
    pub fn set_direction_intent(&mut self, direction: Direction) {
        self.latch.set_intent(direction);
    }

    /// Advances the simulation by one tick. No-op once the game is over.
    pub fn tick(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }

        let direction = self.latch.consume(self.last_direction);
        let (dx, dy) = direction.offset();
        let head = self.snake.head();
        let next_head = Cell::new(head.x + dx, head.y + dy);

        // Collision is checked against the pre-move body: the cell the tail
        // is about to vacate still counts as occupied this tick.
        if !self.grid.in_bounds(next_head) || self.snake.occupies(next_head) {
            self.status = GameStatus::GameOver;
            return;
        }

        let ate = next_head == self.food;
        self.snake.advance(next_head, ate);

        if ate {
            self.score += 1;
            match food::spawn_cell(&mut self.rng, self.grid, &self.snake) {
                Some(cell) => self.food = cell,
                // The snake covers the whole board; nothing left to play.
                None => self.status = GameStatus::GameOver,
            }
        }

        self.last_direction = direction;
    }

    /// Restarts the game from the initial layout.
    ///
    /// Every entity is rebuilt from its start value in one assignment, so a
    /// caller can never observe a half-reset state. The food sequence
    /// continues from the current rng so seeded runs stay reproducible
    /// across restarts.
    pub fn reset(&mut self) {
        let seed = self.rng.gen_range(0..=u64::MAX);
        *self = Self::new_with_seed(self.config, seed);
    }

    /// Returns a read-only view for rendering. Never mutates.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            body: self.snake.segments().copied().collect(),
            food: self.food,
            score: self.score,
            status: self.status,
        }
    }

    /// Returns the board this game is played on.
    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }
}
