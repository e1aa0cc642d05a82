use crate::assets::Assets;
use crate::config::{Config, ConfigError};
use crate::game::Grid;
use ratatui::layout::{Rect, Size};
use std::time::Duration;

/// Everything decided once at startup and shared, read-only, by the game loop
/// and the renderer
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Globals {
    pub(crate) grid: Grid,
    pub(crate) tick_period: Duration,
    pub(crate) assets: Assets,
}

impl Globals {
    /// Derive the grid & tick rate from `config` and load the assets it
    /// names, falling back to built-in assets where necessary
    pub(crate) fn new(config: &Config) -> Result<Globals, ConfigError> {
        let grid = config.display.grid()?;
        let tick_period = config.tick_period();
        log::info!(
            "Starting a {}x{} game at {} ticks per second",
            grid.width,
            grid.height,
            config.speed
        );
        let assets = Assets::load(&config.assets);
        Ok(Globals {
            grid,
            tick_period,
            assets,
        })
    }
}

/// Return a rectangle of size `size` centered within `area`, shrunk to fit if
/// necessary
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let width = size.width.min(area.width);
    let height = size.height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Rect::new(0, 0, 80, 24), Size::new(34, 13), Rect::new(23, 5, 34, 13))]
    #[case(Rect::new(0, 1, 20, 8), Size::new(18, 6), Rect::new(1, 2, 18, 6))]
    #[case(Rect::new(5, 7, 20, 10), Size::new(19, 9), Rect::new(5, 7, 19, 9))]
    #[case(Rect::new(5, 7, 20, 10), Size::new(40, 40), Rect::new(5, 7, 20, 10))]
    #[case(Rect::new(5, 7, 20, 10), Size::new(0, 0), Rect::new(15, 12, 0, 0))]
    fn test_center_rect(#[case] area: Rect, #[case] size: Size, #[case] centered: Rect) {
        assert_eq!(center_rect(area, size), centered);
    }

    #[test]
    fn globals_from_default_config() {
        let mut config = Config::default();
        let tmpdir = tempfile::tempdir().unwrap();
        config.assets.food = tmpdir.path().join("food.toml");
        config.assets.eat_sound = tmpdir.path().join("eat.toml");
        config.assets.game_over_sound = tmpdir.path().join("game-over.toml");
        let globals = Globals::new(&config).unwrap();
        assert_eq!(globals.grid, Grid::new(16, 11));
        assert_eq!(globals.tick_period, config.tick_period());
        assert_eq!(globals.assets, Assets::default());
    }
}
