use crate::consts;
use ratatui::layout::{Position, Positions, Rect, Size};

/// The playing field: a `width` × `height` torus of cells.
///
/// Cells are addressed by [`Position`], with `x` as the column and `y` as the
/// row, relative to the top-left corner of the grid.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    pub(crate) width: u16,
    pub(crate) height: u16,
}

impl Grid {
    pub(crate) fn new(width: u16, height: u16) -> Grid {
        Grid { width, height }
    }

    /// The cell at which a new snake starts
    pub(crate) fn center(self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    pub(crate) fn size(self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    pub(crate) fn cell_count(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    pub(crate) fn contains(self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Iterate over every cell in the grid in row-major order
    pub(crate) fn positions(self) -> Positions {
        Rect::from((Position::ORIGIN, self.size())).positions()
    }

    /// Return the size of the terminal area needed to draw the whole grid
    pub(crate) fn screen_size(self) -> Size {
        Size {
            width: self.width.saturating_mul(consts::CELL_WIDTH),
            height: self.height.saturating_mul(consts::CELL_HEIGHT),
        }
    }

    /// Map `cell` to the terminal rectangle it occupies when the grid's
    /// top-left corner is drawn at `origin`.  Returns `None` if the rectangle
    /// would not be addressable.
    pub(crate) fn cell_area(self, origin: Position, cell: Position) -> Option<Rect> {
        let x = cell
            .x
            .checked_mul(consts::CELL_WIDTH)
            .and_then(|x| x.checked_add(origin.x))?;
        let y = cell
            .y
            .checked_mul(consts::CELL_HEIGHT)
            .and_then(|y| y.checked_add(origin.y))?;
        Some(Rect {
            x,
            y,
            width: consts::CELL_WIDTH,
            height: consts::CELL_HEIGHT,
        })
    }
}
