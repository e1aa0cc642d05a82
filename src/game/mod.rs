mod direction;
mod food;
mod grid;
mod over;
mod snake;
use self::direction::Direction;
use self::food::Food;
pub(crate) use self::grid::Grid;
use self::over::GameOver;
use self::snake::Snake;
use crate::assets::Sprite;
use crate::audio::{Audio, Cue};
use crate::command::Command;
use crate::consts;
use crate::util::center_rect;
use rand::{seq::IteratorRandom, Rng};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect, Size},
    style::Style,
    text::Line,
    widgets::{Block, Widget},
    Frame,
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    grid: Grid,
    snake: Snake,
    food: Food,
    state: GameState,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(grid: Grid) -> Self {
        Game::new_with_rng(grid, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(grid: Grid, mut rng: R) -> Game<R> {
        let snake = Snake::new(grid);
        let food = Food::new(&mut rng, grid);
        let mut game = Game {
            rng,
            grid,
            snake,
            food,
            state: GameState::Playing,
        };
        game.settle_food();
        game
    }

    /// Respond to a player command.  [`Command::Quit`] is not handled here.
    pub(crate) fn handle_command(&mut self, cmd: Command) {
        match (self.state, cmd) {
            (GameState::Playing, Command::Up) => self.snake.set_direction(Direction::North),
            (GameState::Playing, Command::Down) => self.snake.set_direction(Direction::South),
            (GameState::Playing, Command::Left) => self.snake.set_direction(Direction::West),
            (GameState::Playing, Command::Right) => self.snake.set_direction(Direction::East),
            (GameState::GameOver, Command::Restart) => self.restart(),
            _ => (),
        }
    }

    /// Run one tick of the simulation: move the snake, then either end the
    /// game or let the snake eat
    pub(crate) fn step<A: Audio>(&mut self, audio: &mut A) {
        if !self.playing() {
            return;
        }
        if !self.snake.advance(self.grid) {
            audio.play(Cue::GameOver);
            self.state = GameState::GameOver;
            log::info!("Game over with a score of {}", self.snake.score());
            return;
        }
        if self.snake.head() == self.food.position {
            self.snake.grow();
            audio.play(Cue::Eat);
            self.place_food();
        }
    }

    fn restart(&mut self) {
        log::debug!("Restarting game");
        self.snake.reset();
        self.place_food();
        self.state = GameState::Playing;
    }

    fn place_food(&mut self) {
        self.food.randomize(&mut self.rng, self.grid);
        self.settle_food();
    }

    /// Reroll the food until it is not on the snake.  After
    /// [`consts::FOOD_REROLL_LIMIT`] draws, pick directly from the free cells
    /// instead; if there are none, the food is left where it is.
    fn settle_food(&mut self) {
        if self.snake.body().len() >= self.grid.cell_count() {
            log::debug!("No free cells left for food");
            return;
        }
        let mut draws = 1;
        while self.snake.occupies(self.food.position) {
            if draws >= consts::FOOD_REROLL_LIMIT {
                let snake = &self.snake;
                let free = self
                    .grid
                    .positions()
                    .filter(|&p| !snake.occupies(p))
                    .choose(&mut self.rng);
                if let Some(pos) = free {
                    log::debug!("Placed food by scanning for free cells after {draws} draws");
                    self.food.position = pos;
                }
                return;
            }
            self.food.randomize(&mut self.rng, self.grid);
            draws += 1;
        }
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>, food_sprite: &Sprite) {
        frame.render_widget(
            GameView {
                game: self,
                food_sprite,
            },
            frame.area(),
        );
    }

    pub(crate) fn playing(&self) -> bool {
        self.state == GameState::Playing
    }

    /// After the game has ended, return the cell the snake ran into.  The
    /// snake itself stops short of this cell.
    fn collision(&self) -> Option<Position> {
        (self.state == GameState::GameOver).then(|| {
            self.snake
                .direction
                .advance(self.snake.head(), self.grid)
        })
    }
}

#[cfg(test)]
impl<R> Game<R> {
    pub(crate) fn head(&self) -> Position {
        self.snake.head()
    }

    pub(crate) fn end(&mut self) {
        self.state = GameState::GameOver;
    }
}

/// A [`Game`] together with the assets needed to draw it
#[derive(Debug)]
struct GameView<'a, R> {
    game: &'a Game<R>,
    food_sprite: &'a Sprite,
}

impl<R> Widget for GameView<'_, R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let GameView { game, food_sprite } = self;
        let [score_area, board_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);
        Line::styled(format!(" Score: {}", game.snake.score()), consts::SCORE_BAR_STYLE)
            .render(score_area, buf);

        let mut block_size = game.grid.screen_size();
        block_size.width = block_size.width.saturating_add(2);
        block_size.height = block_size.height.saturating_add(2);
        let block_area = center_rect(board_area, block_size);
        Block::bordered().render(block_area, buf);

        let level_area = block_area.inner(Margin::new(1, 1));
        let mut level = Canvas {
            area: level_area,
            grid: game.grid,
            buf,
        };
        for pos in game.grid.positions() {
            level.draw_cell(pos, consts::GRID_SYMBOL, Style::new());
        }
        for &p in game.snake.body().iter().skip(1) {
            level.draw_cell(p, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        level.draw_cell(
            game.food.position,
            food_sprite.symbol(),
            food_sprite.style(),
        );
        level.draw_cell(
            game.snake.head(),
            consts::SNAKE_HEAD_SYMBOL,
            consts::SNAKE_HEAD_STYLE,
        );
        if let Some(pos) = game.collision() {
            level.draw_cell(pos, consts::COLLISION_SYMBOL, consts::COLLISION_STYLE);
            let popup_area = center_rect(
                board_area,
                Size {
                    width: GameOver::WIDTH,
                    height: GameOver::HEIGHT,
                },
            );
            GameOver {
                score: game.snake.score(),
            }
            .render(popup_area, buf);
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    grid: Grid,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    /// Draw `symbol` in the grid cell at `pos`, clipped to the canvas area.
    /// Terminal cells hidden behind a wide grapheme are reset.
    fn draw_cell(&mut self, pos: Position, symbol: &str, style: Style) {
        if !self.grid.contains(pos) {
            return;
        }
        let origin = Position::new(self.area.x, self.area.y);
        let Some(cell_area) = self.grid.cell_area(origin, pos) else {
            return;
        };
        let cell_area = cell_area.intersection(self.area);
        let y = cell_area.y;
        let mut x = cell_area.x;
        for g in symbol.graphemes(true) {
            let width = u16::try_from(g.width()).unwrap_or(u16::MAX);
            if x.saturating_add(width) > cell_area.right() {
                break;
            }
            if let Some(cell) = self.buf.cell_mut((x, y)) {
                cell.set_symbol(g);
                cell.set_style(Style::reset().patch(style));
            }
            for hidden in x.saturating_add(1)..x.saturating_add(width) {
                if let Some(cell) = self.buf.cell_mut((hidden, y)) {
                    cell.reset();
                }
            }
            x = x.saturating_add(width);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameState {
    Playing,
    GameOver,
}
