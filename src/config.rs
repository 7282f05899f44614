use std::time::Duration;

use ratatui::style::Color;
use thiserror::Error;

use crate::grid::Cell;

/// Default board side length in cells.
pub const DEFAULT_GRID_SIZE: u16 = 15;

/// Smallest board the fixed start layout fits on.
pub const MIN_GRID_SIZE: u16 = 8;

/// Default tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 200;

/// Fixed initial food cell of the classic start layout.
pub const INITIAL_FOOD_CELL: Cell = Cell::new(3, 5);

/// Construction-time configuration rejected before a game instance exists.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum ConfigError {
    #[error("grid size {size} is below the minimum of {MIN_GRID_SIZE}")]
    GridTooSmall { size: u16 },
    #[error("tick interval must be greater than zero")]
    ZeroTickInterval,
}

/// Immutable per-game configuration.
///
/// Fixed for the lifetime of a game instance; there is no runtime resize.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameConfig {
    pub grid_size: u16,
    pub tick_interval: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            tick_interval: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
        }
    }
}

impl GameConfig {
    /// Creates a validated configuration.
    pub fn new(grid_size: u16, tick_interval: Duration) -> Result<Self, ConfigError> {
        if grid_size < MIN_GRID_SIZE {
            return Err(ConfigError::GridTooSmall { size: grid_size });
        }
        if tick_interval.is_zero() {
            return Err(ConfigError::ZeroTickInterval);
        }

        Ok(Self {
            grid_size,
            tick_interval,
        })
    }
}

/// A color theme applied to all visual elements of the terminal front end.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub hud_score: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Classic green snake on dark theme.
pub const THEME_CLASSIC: Theme = Theme {
    name: "Classic",
    snake_head: Color::White,
    snake_body: Color::Green,
    food: Color::Red,
    play_bg: Color::Black,
    border_fg: Color::DarkGray,
    hud_score: Color::White,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};
