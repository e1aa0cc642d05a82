//! Optional on-disk assets and their built-in fallbacks
use crate::audio::Cue;
use crate::config::AssetPaths;
use crate::consts;
use enum_map::{enum_map, EnumMap};
use ratatui::style::Style;
use serde::{de::DeserializeOwned, Deserialize};
use std::num::NonZeroU8;
use std::path::Path;
use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Everything loaded from disk at startup
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Assets {
    pub(crate) food: Sprite,
    pub(crate) sounds: EnumMap<Cue, Sound>,
}

impl Default for Assets {
    fn default() -> Assets {
        Assets {
            food: Sprite::fallback_food(),
            sounds: enum_map! {
                Cue::Eat => Sound::fallback_eat(),
                Cue::GameOver => Sound::fallback_game_over(),
            },
        }
    }
}

impl Assets {
    /// Load each asset in `paths`, substituting the built-in default for any
    /// that cannot be loaded.  Failures are logged and otherwise ignored.
    pub(crate) fn load(paths: &AssetPaths) -> Assets {
        let defaults = Assets::default();
        Assets {
            food: load_logged("food sprite", &paths.food, defaults.food),
            sounds: enum_map! {
                Cue::Eat => load_logged("eat sound", &paths.eat_sound, defaults.sounds[Cue::Eat]),
                Cue::GameOver => load_logged(
                    "game over sound",
                    &paths.game_over_sound,
                    defaults.sounds[Cue::GameOver],
                ),
            },
        }
    }
}

/// A replacement asset used because the requested one could not be loaded
#[derive(Debug)]
pub(crate) struct Fallback<A> {
    pub(crate) asset: A,
    pub(crate) error: AssetError,
}

/// Load an asset from the TOML file at `path`.  If this fails, `default` is
/// returned inside `Err` along with the reason.
pub(crate) fn load_asset_or_default<A: DeserializeOwned>(
    path: &Path,
    default: A,
) -> Result<A, Fallback<A>> {
    load_asset(path).map_err(|error| Fallback {
        asset: default,
        error,
    })
}

fn load_asset<A: DeserializeOwned>(path: &Path) -> Result<A, AssetError> {
    let src = fs_err::read_to_string(path)?;
    toml::from_str(&src).map_err(Into::into)
}

fn load_logged<A: DeserializeOwned>(what: &str, path: &Path, default: A) -> A {
    match load_asset_or_default(path, default) {
        Ok(asset) => {
            log::info!("Loaded {what} from {}", path.display());
            asset
        }
        Err(Fallback { asset, error }) => {
            log::warn!(
                "Using built-in {what}: {:#}",
                anyhow::Error::new(error).context(format!("could not load {}", path.display()))
            );
            asset
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum AssetError {
    #[error("failed to read asset file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse asset file")]
    Parse(#[from] toml::de::Error),
}

/// The glyphs & style used to draw something in a single grid cell.
///
/// `symbol` always occupies exactly [`consts::CELL_WIDTH`] terminal columns.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(try_from = "RawSprite")]
pub(crate) struct Sprite {
    symbol: String,
    style: Style,
}

impl Sprite {
    /// Create a sprite from the leading grapheme clusters of `symbol` that fit
    /// in one cell, padded with spaces to the full cell width
    pub(crate) fn new(symbol: &str, style: Style) -> Result<Sprite, SpriteError> {
        if symbol.chars().any(char::is_control) {
            return Err(SpriteError::Control);
        }
        let cell_width = usize::from(consts::CELL_WIDTH);
        let mut glyphs = String::new();
        let mut width = 0;
        for g in symbol.graphemes(true) {
            let w = g.width();
            if width + w > cell_width {
                break;
            }
            glyphs.push_str(g);
            width += w;
        }
        if glyphs.trim().is_empty() {
            return Err(SpriteError::Blank);
        }
        glyphs.extend(std::iter::repeat_n(' ', cell_width - width));
        Ok(Sprite {
            symbol: glyphs,
            style,
        })
    }

    /// The sprite drawn for food when no custom sprite is available
    pub(crate) fn fallback_food() -> Sprite {
        Sprite {
            symbol: String::from(consts::FALLBACK_FOOD_SYMBOL),
            style: consts::FRUIT_STYLE,
        }
    }

    pub(crate) fn symbol(&self) -> &str {
        &self.symbol
    }

    pub(crate) fn style(&self) -> Style {
        self.style
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSprite {
    symbol: String,
    #[serde(default)]
    style: Option<parse_style::Style>,
}

impl TryFrom<RawSprite> for Sprite {
    type Error = SpriteError;

    fn try_from(value: RawSprite) -> Result<Sprite, SpriteError> {
        let style = value.style.map_or_else(Style::new, Style::from);
        Sprite::new(&value.symbol, style)
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum SpriteError {
    #[error("sprite symbol contains control characters")]
    Control,
    #[error("sprite symbol has nothing visible that fits in a cell")]
    Blank,
}

/// A sound cue, played by ringing the terminal bell some number of times
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub(crate) struct Sound {
    pub(crate) bells: NonZeroU8,
}

impl Sound {
    fn fallback_eat() -> Sound {
        Sound {
            bells: NonZeroU8::new(consts::FALLBACK_EAT_BELLS).unwrap_or(NonZeroU8::MIN),
        }
    }

    fn fallback_game_over() -> Sound {
        Sound {
            bells: NonZeroU8::new(consts::FALLBACK_GAME_OVER_BELLS).unwrap_or(NonZeroU8::MIN),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::{Color, Modifier};
    use rstest::rstest;

    #[rstest]
    #[case("@", "@ ")]
    #[case("██", "██")]
    #[case("abc", "ab")]
    #[case("🍎", "🍎")]
    #[case("🍎🍌", "🍎")]
    #[case("a🍎", "a ")]
    #[case(" *", " *")]
    fn test_sprite_new(#[case] symbol: &str, #[case] padded: &str) {
        let sprite = Sprite::new(symbol, Style::new()).unwrap();
        assert_eq!(sprite.symbol(), padded);
        assert_eq!(sprite.symbol().width(), usize::from(consts::CELL_WIDTH));
    }

    #[rstest]
    #[case("", SpriteError::Blank)]
    #[case("  ", SpriteError::Blank)]
    #[case("\x1b[31m", SpriteError::Control)]
    #[case("a\tb", SpriteError::Control)]
    fn test_sprite_new_err(#[case] symbol: &str, #[case] err: SpriteError) {
        assert_eq!(Sprite::new(symbol, Style::new()), Err(err));
    }

    #[test]
    fn fallback_food_fills_cell() {
        let sprite = Sprite::fallback_food();
        assert_eq!(sprite.symbol().width(), usize::from(consts::CELL_WIDTH));
        assert_eq!(sprite.style(), consts::FRUIT_STYLE);
    }

    #[test]
    fn load_sprite() {
        let tmpdir = tempfile::tempdir().unwrap();
        let path = tmpdir.path().join("food.toml");
        fs_err::write(&path, "symbol = \"o\"\nstyle = \"bold red\"\n").unwrap();
        let sprite = load_asset_or_default(&path, Sprite::fallback_food()).unwrap();
        assert_eq!(sprite.symbol(), "o ");
        // parse-style names the ANSI colors by their palette index
        assert_eq!(sprite.style().fg, Some(Color::Indexed(1)));
        assert!(sprite.style().add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn load_sprite_without_style() {
        let tmpdir = tempfile::tempdir().unwrap();
        let path = tmpdir.path().join("food.toml");
        fs_err::write(&path, "symbol = \"🍎\"\n").unwrap();
        let sprite = load_asset_or_default(&path, Sprite::fallback_food()).unwrap();
        assert_eq!(sprite, Sprite::new("🍎", Style::new()).unwrap());
    }

    #[test]
    fn load_missing_sprite() {
        let tmpdir = tempfile::tempdir().unwrap();
        let path = tmpdir.path().join("nonexistent.toml");
        let Err(fallback) = load_asset_or_default(&path, Sprite::fallback_food()) else {
            panic!("Loading nonexistent sprite did not fail");
        };
        assert_eq!(fallback.asset, Sprite::fallback_food());
        assert!(matches!(fallback.error, AssetError::Read(_)));
    }

    #[rstest]
    #[case("symbol = \"\"\n")]
    #[case("symbol = 42\n")]
    #[case("symbol = \"o\"\ncolour = \"red\"\n")]
    #[case("this is not TOML")]
    fn load_corrupt_sprite(#[case] src: &str) {
        let tmpdir = tempfile::tempdir().unwrap();
        let path = tmpdir.path().join("food.toml");
        fs_err::write(&path, src).unwrap();
        let Err(fallback) = load_asset_or_default(&path, Sprite::fallback_food()) else {
            panic!("Loading corrupt sprite did not fail");
        };
        assert_eq!(fallback.asset, Sprite::fallback_food());
        assert!(matches!(fallback.error, AssetError::Parse(_)));
    }

    #[test]
    fn load_sound() {
        let tmpdir = tempfile::tempdir().unwrap();
        let path = tmpdir.path().join("eat.toml");
        fs_err::write(&path, "bells = 3\n").unwrap();
        let sound = load_asset_or_default(&path, Sound::fallback_eat()).unwrap();
        assert_eq!(sound.bells.get(), 3);
    }

    #[rstest]
    #[case("bells = 0\n")]
    #[case("bells = 256\n")]
    #[case("")]
    fn load_corrupt_sound(#[case] src: &str) {
        let tmpdir = tempfile::tempdir().unwrap();
        let path = tmpdir.path().join("eat.toml");
        fs_err::write(&path, src).unwrap();
        let r = load_asset_or_default(&path, Sound::fallback_game_over());
        assert!(matches!(
            r,
            Err(Fallback {
                asset,
                error: AssetError::Parse(_),
            }) if asset == Sound::fallback_game_over()
        ));
    }

    #[test]
    fn load_all_missing() {
        let tmpdir = tempfile::tempdir().unwrap();
        let paths = AssetPaths {
            food: tmpdir.path().join("food.toml"),
            eat_sound: tmpdir.path().join("eat.toml"),
            game_over_sound: tmpdir.path().join("game-over.toml"),
        };
        let assets = Assets::load(&paths);
        assert_eq!(assets, Assets::default());
        assert_eq!(assets.sounds[Cue::Eat].bells.get(), 1);
        assert_eq!(assets.sounds[Cue::GameOver].bells.get(), 2);
    }

    #[test]
    fn load_some_present() {
        let tmpdir = tempfile::tempdir().unwrap();
        let paths = AssetPaths {
            food: tmpdir.path().join("food.toml"),
            eat_sound: tmpdir.path().join("eat.toml"),
            game_over_sound: tmpdir.path().join("game-over.toml"),
        };
        fs_err::write(&paths.game_over_sound, "bells = 5\n").unwrap();
        let assets = Assets::load(&paths);
        assert_eq!(assets.food, Sprite::fallback_food());
        assert_eq!(assets.sounds[Cue::Eat].bells.get(), 1);
        assert_eq!(assets.sounds[Cue::GameOver].bells.get(), 5);
    }
}
