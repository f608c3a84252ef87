//! Canvas Snake - the classic Snake game on a continuous canvas
//!
//! This library provides:
//! - Core game logic (game module), stepped tick by tick without any I/O
//! - A retained display list and TUI rendering (render module)
//! - Keyboard mapping (input module)
//! - Play time and counters (metrics module)
//! - The interactive terminal mode (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
