use super::grid::Grid;
use rand::Rng;
use ratatui::layout::Position;

/// The piece of food the snake is chasing
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Food {
    pub(crate) position: Position,
}

impl Food {
    pub(crate) fn new<R: Rng>(rng: &mut R, grid: Grid) -> Food {
        let mut food = Food {
            position: Position::ORIGIN,
        };
        food.randomize(rng, grid);
        food
    }

    /// Move the food to a uniformly random cell of `grid`, without regard for
    /// what else occupies that cell
    pub(crate) fn randomize<R: Rng>(&mut self, rng: &mut R, grid: Grid) {
        self.position = Position::new(
            rng.random_range(0..grid.width.max(1)),
            rng.random_range(0..grid.height.max(1)),
        );
    }
}
