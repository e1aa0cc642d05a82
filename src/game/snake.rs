use super::direction::Direction;
use super::grid::Grid;
use crate::consts;
use ratatui::layout::Position;
use std::collections::VecDeque;

/// The snake.
///
/// All positions are relative to the top-left corner of the grid the snake is
/// on.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The positions of all of the cells occupied by the snake, with the head
    /// at the front and the tip of the tail at the back
    pub(super) body: VecDeque<Position>,

    /// The maximum length of the body
    pub(super) target_len: usize,

    /// The number of pieces of food eaten so far
    pub(super) score: u32,

    /// The direction in which the snake will move on the next tick
    pub(super) direction: Direction,

    /// Where the snake starts out and returns to on reset
    start: Position,
}

impl Snake {
    /// Create a new snake at the center of `grid`, facing east
    pub(crate) fn new(grid: Grid) -> Snake {
        let start = grid.center();
        Snake {
            body: VecDeque::from([start]),
            target_len: consts::INITIAL_SNAKE_LENGTH,
            score: 0,
            direction: Direction::East,
            start,
        }
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Position {
        self.body.front().copied().unwrap_or(self.start)
    }

    /// Return the positions of the cells the snake occupies, head first
    pub(crate) fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Change the snake's direction to `direction`, unless that would make it
    /// turn back on itself
    pub(crate) fn set_direction(&mut self, direction: Direction) {
        if direction != self.direction.reverse() {
            self.direction = direction;
        }
    }

    /// Move the snake forwards one cell in the current direction, wrapping
    /// around the edges of `grid`.  Returns `false` and leaves the snake
    /// untouched if the new head position would overlap any segment other
    /// than the current head.
    pub(crate) fn advance(&mut self, grid: Grid) -> bool {
        let pos = self.direction.advance(self.head(), grid);
        if self.body.iter().skip(1).any(|&p| p == pos) {
            return false;
        }
        self.body.push_front(pos);
        while self.body.len() > self.target_len {
            let _ = self.body.pop_back();
        }
        true
    }

    /// Extend the snake's maximum length and score in response to eating.
    /// The body only lengthens on subsequent advances.
    pub(crate) fn grow(&mut self) {
        self.target_len += 1;
        self.score += 1;
    }

    /// Put the snake back the way it was when it was created
    pub(crate) fn reset(&mut self) {
        self.body.clear();
        self.body.push_back(self.start);
        self.target_len = consts::INITIAL_SNAKE_LENGTH;
        self.score = 0;
        self.direction = Direction::East;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn snake_at(body: &[(u16, u16)], direction: Direction) -> Snake {
        let mut snake = Snake::new(Grid::new(16, 11));
        snake.body = body.iter().map(|&(x, y)| Position::new(x, y)).collect();
        snake.target_len = body.len();
        snake.direction = direction;
        snake
    }

    #[test]
    fn new_snake() {
        let snake = Snake::new(Grid::new(16, 11));
        assert_eq!(snake.body(), &VecDeque::from([Position::new(8, 5)]));
        assert_eq!(snake.head(), Position::new(8, 5));
        assert_eq!(snake.direction, Direction::East);
        assert_eq!(snake.target_len, 1);
        assert_eq!(snake.score(), 0);
    }

    #[rstest]
    #[case(Direction::North, Direction::North, Direction::North)]
    #[case(Direction::North, Direction::East, Direction::East)]
    #[case(Direction::North, Direction::South, Direction::North)]
    #[case(Direction::North, Direction::West, Direction::West)]
    #[case(Direction::East, Direction::North, Direction::North)]
    #[case(Direction::East, Direction::East, Direction::East)]
    #[case(Direction::East, Direction::South, Direction::South)]
    #[case(Direction::East, Direction::West, Direction::East)]
    #[case(Direction::South, Direction::North, Direction::South)]
    #[case(Direction::South, Direction::West, Direction::West)]
    #[case(Direction::West, Direction::East, Direction::West)]
    #[case(Direction::West, Direction::South, Direction::South)]
    fn test_set_direction(
        #[case] current: Direction,
        #[case] requested: Direction,
        #[case] result: Direction,
    ) {
        let mut snake = snake_at(&[(3, 3)], current);
        snake.set_direction(requested);
        assert_eq!(snake.direction, result);
    }

    #[test]
    fn advance_three_ticks() {
        let grid = Grid::new(16, 11);
        let mut snake = Snake::new(grid);
        for _ in 0..3 {
            assert!(snake.advance(grid));
        }
        assert_eq!(snake.head(), Position::new(11, 5));
        assert_eq!(snake.body().len(), 1);
        assert_eq!(snake.score(), 0);
    }

    #[test]
    fn advance_wraps_around_right_edge() {
        let grid = Grid::new(16, 11);
        let mut snake = snake_at(&[(15, 4)], Direction::East);
        assert!(snake.advance(grid));
        assert_eq!(snake.head(), Position::new(0, 4));
    }

    #[test]
    fn advance_wraps_around_top_edge() {
        let grid = Grid::new(16, 11);
        let mut snake = snake_at(&[(7, 0), (8, 0)], Direction::North);
        assert!(snake.advance(grid));
        assert_eq!(
            snake.body(),
            &VecDeque::from([Position::new(7, 10), Position::new(7, 0)])
        );
    }

    #[test]
    fn grow_lengthens_on_following_ticks() {
        let grid = Grid::new(16, 11);
        let mut snake = Snake::new(grid);
        snake.grow();
        assert_eq!(snake.target_len, 2);
        assert_eq!(snake.score(), 1);
        assert_eq!(snake.body().len(), 1);
        assert!(snake.advance(grid));
        assert_eq!(snake.body().len(), 2);
        assert!(snake.advance(grid));
        assert_eq!(snake.body().len(), 2);
    }

    #[test]
    fn length_tracks_target() {
        let grid = Grid::new(16, 11);
        let mut snake = Snake::new(grid);
        for _ in 0..3 {
            snake.grow();
        }
        for expected in [2, 3, 4, 4, 4] {
            let before = snake.body().len();
            assert!(snake.advance(grid));
            assert_eq!(snake.body().len(), expected);
            assert_eq!(snake.body().len(), snake.target_len.min(before + 1));
        }
    }

    #[test]
    fn advance_into_tail_collides() {
        let grid = Grid::new(16, 11);
        let mut snake = snake_at(&[(5, 5), (6, 5), (6, 4), (5, 4)], Direction::North);
        let before = snake.clone();
        assert!(!snake.advance(grid));
        assert_eq!(snake, before);
    }

    #[test]
    fn advance_into_third_segment_collides() {
        // On a grid three cells wide, moving west from the left edge lands on
        // the third segment.
        let grid = Grid::new(3, 5);
        let mut snake = snake_at(&[(0, 0), (1, 0), (2, 0), (2, 1)], Direction::West);
        assert_eq!(
            snake.direction.advance(snake.head(), grid),
            snake.body()[2]
        );
        let before = snake.clone();
        assert!(!snake.advance(grid));
        assert_eq!(snake, before);
    }

    #[test]
    fn advance_across_edge_into_body_collides() {
        let grid = Grid::new(4, 1);
        let mut snake = snake_at(&[(3, 0), (2, 0), (1, 0), (0, 0)], Direction::East);
        assert!(!snake.advance(grid));
    }

    #[test]
    fn reset_restores_initial_state() {
        let grid = Grid::new(16, 11);
        let mut snake = snake_at(&[(1, 1), (1, 2), (1, 3)], Direction::South);
        snake.score = 7;
        snake.reset();
        assert_eq!(snake, Snake::new(grid));
        snake.reset();
        assert_eq!(snake, Snake::new(grid));
    }
}
