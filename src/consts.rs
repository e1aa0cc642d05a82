//! Assorted constants & hard-coded configuration
use ratatui::style::{Color, Modifier, Style};

/// Default logical display width, in pixels
pub(crate) const DEFAULT_DISPLAY_WIDTH: u32 = 1080;

/// Default logical display height, in pixels
pub(crate) const DEFAULT_DISPLAY_HEIGHT: u32 = 720;

/// Default edge length of a square grid cell, in pixels
pub(crate) const DEFAULT_CELL_SIZE: u32 = 65;

/// Default number of ticks (snake movements) per second
pub(crate) const DEFAULT_SPEED: u32 = 6;

/// Default location of the food sprite file
pub(crate) const DEFAULT_FOOD_SPRITE_PATH: &str = "assets/food.toml";

/// Default location of the sound cue played when the snake eats
pub(crate) const DEFAULT_EAT_SOUND_PATH: &str = "assets/eat.toml";

/// Default location of the sound cue played when the snake dies
pub(crate) const DEFAULT_GAME_OVER_SOUND_PATH: &str = "assets/game-over.toml";

/// Number of terminal columns used to draw one grid cell
pub(crate) const CELL_WIDTH: u16 = 2;

/// Number of terminal rows used to draw one grid cell
pub(crate) const CELL_HEIGHT: u16 = 1;

/// Maximum snake length before any food has been eaten
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 1;

/// How many random draws to make when placing food before falling back to
/// choosing among the free cells directly
pub(crate) const FOOD_REROLL_LIMIT: usize = 1000;

/// Glyphs drawn in each empty grid cell
pub(crate) const GRID_SYMBOL: &str = "· ";

/// Glyphs for a segment of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: &str = "██";

/// Glyphs for the snake's head
pub(crate) const SNAKE_HEAD_SYMBOL: &str = "██";

/// Glyphs for the snake's head after it has run into itself
pub(crate) const COLLISION_SYMBOL: &str = "××";

/// Glyphs for the food when no custom sprite could be loaded
pub(crate) const FALLBACK_FOOD_SYMBOL: &str = "██";

/// Number of terminal bells rung when the snake eats, absent a custom cue
pub(crate) const FALLBACK_EAT_BELLS: u8 = 1;

/// Number of terminal bells rung when the snake dies, absent a custom cue
pub(crate) const FALLBACK_GAME_OVER_BELLS: u8 = 2;

/// Style for the snake's body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green);

/// Style for the snake's head
pub(crate) const SNAKE_HEAD_STYLE: Style = Style::new().fg(Color::LightGreen);

/// Style for the fallback food sprite
pub(crate) const FRUIT_STYLE: Style = Style::new().fg(Color::Red);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
