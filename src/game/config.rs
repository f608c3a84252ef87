use anyhow::{Context, Result, ensure};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::state::{CanvasBounds, Position};

/// How often the game advances by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TickRate {
    Fast,
    #[default]
    Moderate,
    Slow,
    DamnSlow,
}

impl TickRate {
    pub fn interval(self) -> Duration {
        match self {
            TickRate::Fast => Duration::from_millis(5),
            TickRate::Moderate => Duration::from_millis(15),
            TickRate::Slow => Duration::from_millis(30),
            TickRate::DamnSlow => Duration::from_millis(60),
        }
    }
}

/// Thickness of the snake, which is also its collision reach
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SnakeSize {
    Thin,
    Normal,
    #[default]
    Thick,
}

impl SnakeSize {
    /// Head size in canvas units
    pub fn units(self) -> i32 {
        match self {
            SnakeSize::Thin => 4,
            SnakeSize::Normal => 6,
            SnakeSize::Thick => 8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SnakeColor {
    #[default]
    Green,
    Cyan,
    Blue,
    Yellow,
    Magenta,
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Playable area; the head leaving it ends the game
    pub bounds: CanvasBounds,
    /// Where the head starts
    pub start: Position,
    pub snake_size: SnakeSize,
    pub snake_color: SnakeColor,
    /// Food size in canvas units, defaults to the head size
    pub food_size: Option<i32>,
    /// Trail length bound at game start
    pub initial_length: usize,
    /// Trail length gained per food item
    pub growth_per_food: usize,
    /// Score gained per food item
    pub score_per_food: u32,
    /// Number of food items kept on the canvas
    pub food_count: usize,
    pub tick_rate: TickRate,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            bounds: CanvasBounds::new(5, 5, 620, 380),
            start: Position::new(100, 100),
            snake_size: SnakeSize::default(),
            snake_color: SnakeColor::default(),
            food_size: None,
            initial_length: 100,
            growth_per_food: 10,
            score_per_food: 10,
            food_count: 10,
            tick_rate: TickRate::default(),
        }
    }
}

impl GameConfig {
    /// Load a configuration from a JSON file.
    ///
    /// Fields missing from the file keep their default values.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn head_size(&self) -> i32 {
        self.snake_size.units()
    }

    pub fn food_size(&self) -> i32 {
        self.food_size.unwrap_or_else(|| self.head_size())
    }

    /// Reject configurations the engine cannot play
    pub fn validate(&self) -> Result<()> {
        let b = &self.bounds;
        ensure!(
            b.min_x < b.max_x && b.min_y < b.max_y,
            "Canvas bounds are empty: {:?}",
            b
        );
        ensure!(self.food_size() > 0, "Food size must be positive");
        ensure!(
            b.max_x - self.food_size() >= b.min_x && b.max_y - self.food_size() >= b.min_y,
            "Food size {} does not fit inside the canvas",
            self.food_size()
        );
        ensure!(
            b.contains(self.start),
            "Start position ({}, {}) lies outside the canvas",
            self.start.x,
            self.start.y
        );
        ensure!(self.initial_length > 0, "Initial length must be at least 1");
        ensure!(self.food_count > 0, "At least one food item is required");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.bounds, CanvasBounds::new(5, 5, 620, 380));
        assert_eq!(config.start, Position::new(100, 100));
        assert_eq!(config.head_size(), 8);
        assert_eq!(config.food_size(), 8);
        assert_eq!(config.food_count, 10);
        assert_eq!(config.tick_rate, TickRate::Moderate);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_food_size_follows_snake_size() {
        let config = GameConfig {
            snake_size: SnakeSize::Thin,
            ..Default::default()
        };
        assert_eq!(config.food_size(), 4);

        let config = GameConfig {
            food_size: Some(12),
            ..Default::default()
        };
        assert_eq!(config.food_size(), 12);
    }

    #[test]
    fn test_tick_rate_presets_are_ordered() {
        assert!(TickRate::Fast.interval() < TickRate::Moderate.interval());
        assert!(TickRate::Moderate.interval() < TickRate::Slow.interval());
        assert!(TickRate::Slow.interval() < TickRate::DamnSlow.interval());
    }

    #[test]
    fn test_validate_rejects_start_outside_canvas() {
        let config = GameConfig {
            start: Position::new(700, 100),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_oversized_food() {
        let config = GameConfig {
            bounds: CanvasBounds::new(0, 0, 10, 10),
            start: Position::new(5, 5),
            food_size: Some(20),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_partial_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "tick_rate": "damn-slow", "snake_size": "normal", "food_count": 3 }}"#
        )
        .unwrap();

        let config = GameConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.tick_rate, TickRate::DamnSlow);
        assert_eq!(config.snake_size, SnakeSize::Normal);
        assert_eq!(config.food_count, 3);
        assert_eq!(config.initial_length, 100);
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(GameConfig::from_json_file(file.path()).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(GameConfig::from_json_file(&missing).is_err());
    }
}
