//! Core game logic module for Snake
//!
//! This module contains all the game logic without any terminal or rendering dependencies.

pub mod apple;
pub mod config;
pub mod direction;
pub mod drawable;
pub mod engine;
pub mod grid;
pub mod state;

// Re-export commonly used types
pub use apple::{Apple, PlacementError};
pub use config::{GameConfig, Palette, Rgb};
pub use direction::Direction;
pub use drawable::{Drawable, Paint};
pub use engine::{EngineError, GameEngine, TickOutcome};
pub use grid::{Grid, GridError, wrap};
pub use state::{Cell, Snake, SnakeError};
