//! Snake on a wrap-around grid
//!
//! This library provides:
//! - Core game logic: grid, snake, apple and the per-tick engine (game module)
//! - Keyboard mapping (input module)
//! - TUI rendering (render module)
//! - The interactive terminal loop (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
