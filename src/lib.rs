//! Fixed-tick grid snake simulation with a terminal front end.
//!
//! The simulation core (`grid`, `snake`, `food`, `game`, `scheduler`) is
//! free of terminal dependencies. `input` holds the direction latch next to
//! its crossterm key mapping; `renderer`, `ui`, and the binary bind the core
//! to a crossterm/ratatui front end that redraws purely from
//! [`game::GameState::snapshot`].

pub mod config;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod renderer;
pub mod scheduler;
pub mod score;
pub mod snake;
pub mod ui;
