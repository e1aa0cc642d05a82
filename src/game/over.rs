use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};

/// A widget for the pop-up shown over the board once the snake has died
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct GameOver {
    /// The final score
    pub(super) score: u32,
}

impl GameOver {
    /// The height that should be used for the `Rect` passed to
    /// `GameOver::render()`
    pub(super) const HEIGHT: u16 = 5;

    /// The width that should be used for the `Rect` passed to
    /// `GameOver::render()`
    pub(super) const WIDTH: u16 = 28;
}

impl Widget for GameOver {
    /*
     * ┌──────────────────────────┐
     * │ Game Over! Score: 3      │
     * │ Press r to restart       │
     * │ Press q to quit          │
     * └──────────────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = Block::bordered().padding(Padding::horizontal(1));
        let inner = block.inner(area);
        block.render(area, buf);
        let lines = [
            Line::from(format!("Game Over! Score: {}", self.score)),
            Line::from_iter([
                Span::raw("Press "),
                Span::styled("r", consts::KEY_STYLE),
                Span::raw(" to restart"),
            ]),
            Line::from_iter([
                Span::raw("Press "),
                Span::styled("q", consts::KEY_STYLE),
                Span::raw(" to quit"),
            ]),
        ];
        for (line, row) in lines.into_iter().zip(inner.rows()) {
            line.render(row, buf);
        }
    }
}
