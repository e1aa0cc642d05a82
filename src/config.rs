use crate::consts;
use crate::game::Grid;
use serde::Deserialize;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration, optionally read from a configuration file
#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Config {
    /// Logical size of the playing surface
    pub(crate) display: DisplayConfig,

    /// Number of ticks per second
    pub(crate) speed: NonZeroU32,

    /// Where to find the optional asset files
    pub(crate) assets: AssetPaths,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            display: DisplayConfig::default(),
            speed: NonZeroU32::new(consts::DEFAULT_SPEED).unwrap_or(NonZeroU32::MIN),
            assets: AssetPaths::default(),
        }
    }
}

impl Config {
    /// Read configuration from a TOML file on disk.  Relative asset paths in
    /// the file are taken relative to the directory containing the file.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path) -> Result<Config, ConfigError> {
        let content = fs_err::read_to_string(path)?;
        let mut config = toml::from_str::<Config>(&content)?;
        if let Some(dir) = path.parent() {
            config.assets.rebase(dir);
        }
        Ok(config)
    }

    /// The time between one tick and the next
    pub(crate) fn tick_period(&self) -> Duration {
        Duration::from_secs(1) / self.speed.get()
    }
}

/// The size of the playing surface in "pixels", from which the grid
/// dimensions are derived
#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct DisplayConfig {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) cell_size: NonZeroU32,
}

impl Default for DisplayConfig {
    fn default() -> DisplayConfig {
        DisplayConfig {
            width: consts::DEFAULT_DISPLAY_WIDTH,
            height: consts::DEFAULT_DISPLAY_HEIGHT,
            cell_size: NonZeroU32::new(consts::DEFAULT_CELL_SIZE).unwrap_or(NonZeroU32::MIN),
        }
    }
}

impl DisplayConfig {
    /// Compute the grid of whole cells that fits on the display
    pub(crate) fn grid(&self) -> Result<Grid, ConfigError> {
        let columns = self.width / self.cell_size;
        let rows = self.height / self.cell_size;
        if columns == 0 || rows == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.width,
                height: self.height,
                cell_size: self.cell_size,
            });
        }
        match (u16::try_from(columns), u16::try_from(rows)) {
            (Ok(width), Ok(height)) => Ok(Grid::new(width, height)),
            _ => Err(ConfigError::GridTooLarge { columns, rows }),
        }
    }
}

/// Paths to the optional asset files
#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct AssetPaths {
    /// Sprite drawn for the food
    pub(crate) food: PathBuf,

    /// Sound cue played when the snake eats
    pub(crate) eat_sound: PathBuf,

    /// Sound cue played when the snake runs into itself
    pub(crate) game_over_sound: PathBuf,
}

impl Default for AssetPaths {
    fn default() -> AssetPaths {
        AssetPaths {
            food: PathBuf::from(consts::DEFAULT_FOOD_SPRITE_PATH),
            eat_sound: PathBuf::from(consts::DEFAULT_EAT_SOUND_PATH),
            game_over_sound: PathBuf::from(consts::DEFAULT_GAME_OVER_SOUND_PATH),
        }
    }
}

impl AssetPaths {
    fn rebase(&mut self, dir: &Path) {
        for p in [
            &mut self.food,
            &mut self.eat_sound,
            &mut self.game_over_sound,
        ] {
            if p.is_relative() {
                *p = dir.join(&*p);
            }
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
    #[error("a {width}x{height} display has no room for {cell_size}-pixel cells")]
    EmptyGrid {
        width: u32,
        height: u32,
        cell_size: NonZeroU32,
    },
    #[error("a grid of {columns}x{rows} cells is too large")]
    GridTooLarge { columns: u32, rows: u32 },
}
