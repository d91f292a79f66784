//! Deterministic grid snake simulation with a terminal frontend.
//!
//! The simulation core lives in [`grid`], [`snake`], [`collision`],
//! [`food`], [`clock`], and [`game`]: plain state-machine code driven by
//! [`game::GameController::tick`] with wall-clock millisecond deltas, so
//! any driver (terminal loop, test harness, headless runner) can advance
//! it at its own cadence. The remaining modules are the ratatui/crossterm
//! frontend and the high-score store.

pub mod clock;
pub mod collision;
pub mod config;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod renderer;
pub mod score;
pub mod snake;
pub mod terminal_runtime;
