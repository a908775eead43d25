use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::{
    drawable::Paint,
    grid::{Grid, GridError},
};

/// Fastest tick rate honoured; anything above runs at this speed
pub const MAX_SPEED: u32 = 1000;

/// An RGB colour, serialized as `[r, g, b]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Colours used to draw the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Rgb,
    pub border: Rgb,
    pub snake: Rgb,
    pub snake_head: Rgb,
    pub apple: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb(0, 0, 0),
            border: Rgb(93, 216, 228),
            snake: Rgb(0, 255, 0),
            snake_head: Rgb(0, 100, 0),
            apple: Rgb(255, 0, 0),
        }
    }
}

impl Palette {
    pub fn color(&self, paint: Paint) -> Rgb {
        match paint {
            Paint::SnakeHead => self.snake_head,
            Paint::SnakeBody => self.snake,
            Paint::Apple => self.apple,
        }
    }
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the playing field in pixels
    pub screen_width: u32,
    /// Height of the playing field in pixels
    pub screen_height: u32,
    /// Side of one square cell in pixels
    pub cell_size: u32,
    /// Ticks per second
    pub speed: u32,
    pub palette: Palette,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 640,
            screen_height: 480,
            cell_size: 20,
            speed: 10,
            palette: Palette::default(),
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom playing field
    pub fn new(screen_width: u32, screen_height: u32, cell_size: u32) -> Self {
        Self {
            screen_width,
            screen_height,
            cell_size,
            ..Default::default()
        }
    }

    /// Read a JSON config; missing keys fall back to defaults
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: GameConfig = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config {:?}", path))?;

        config
            .grid()
            .with_context(|| format!("Invalid board in config {:?}", path))?;

        Ok(config)
    }

    pub fn grid(&self) -> Result<Grid, GridError> {
        Grid::from_screen(self.screen_width, self.screen_height, self.cell_size)
    }

    /// Time between ticks; speed is clamped to `1..=MAX_SPEED` ticks per second
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.speed.clamp(1, MAX_SPEED)
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
        assert_eq!(config.screen_width, 640);
        assert_eq!(config.screen_height, 480);
        assert_eq!(config.cell_size, 20);
        assert_eq!(config.speed, 10);

        let grid = config.grid().unwrap();
        assert_eq!((grid.width(), grid.height()), (32, 24));
        assert_eq!(config.tick_interval(), Duration::from_millis(100));
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(200, 100, 10);
        let grid = config.grid().unwrap();
        assert_eq!((grid.width(), grid.height()), (20, 10));
        assert_eq!(config.palette, Palette::default());
    }

    #[test]
    fn test_zero_speed_does_not_divide_by_zero() {
        let config = GameConfig {
            speed: 0,
            ..Default::default()
        };
        assert_eq!(config.tick_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_huge_speed_keeps_a_nonzero_interval() {
        let config = GameConfig {
            speed: 2_000_000_000,
            ..Default::default()
        };
        assert_eq!(config.tick_interval(), Duration::from_millis(1));
        assert!(!config.tick_interval().is_zero());
    }

    #[test]
    fn test_palette_lookup() {
        let palette = Palette::default();
        assert_eq!(palette.color(Paint::Apple), Rgb(255, 0, 0));
        assert_eq!(palette.color(Paint::SnakeBody), Rgb(0, 255, 0));
        assert_eq!(palette.color(Paint::SnakeHead), Rgb(0, 100, 0));
    }

    #[test]
    fn test_load_partial_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"speed": 15, "palette": {{"apple": [200, 10, 10]}}}}"#).unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.speed, 15);
        assert_eq!(config.screen_width, 640);
        assert_eq!(config.palette.apple, Rgb(200, 10, 10));
        assert_eq!(config.palette.snake, Rgb(0, 255, 0));
    }

    #[test]
    fn test_load_rejects_uneven_board() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"screen_width": 630}}"#).unwrap();

        assert!(GameConfig::load(file.path()).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(GameConfig::load(Path::new("/definitely/not/here.json")).is_err());
    }
}
