//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Each tick returns the draw/erase commands it produced, so any surface can
//! mirror the game and tests can step it deterministically.

pub mod action;
pub mod config;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::{GameConfig, SnakeColor, SnakeSize, TickRate};
pub use engine::{GameEngine, GameEvent, StepInfo, StepResult};
pub use state::{
    CanvasBounds, CollisionType, FoodItem, GameState, Position, Segment, SegmentId, Trail,
};
