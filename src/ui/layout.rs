//! Layout helpers — split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Nominal card size in cells (including its border).
pub const CARD_WIDTH: u16 = 38;
pub const CARD_HEIGHT: u16 = 12;

/// Primary screen layout: the stage the card floats on plus a bottom
/// status bar.
pub struct AppLayout {
    pub stage_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // stage (takes all remaining space)
                Constraint::Length(1), // status bar
            ])
            .split(area);

        Self {
            stage_area: chunks[0],
            status_area: chunks[1],
        }
    }

    /// The card's rest rect, centered on the stage.  The card keeps a
    /// one-cell margin on tiny terminals so tilt offsets never push it
    /// off-screen entirely.
    pub fn card_rect(&self) -> Rect {
        let stage = self.stage_area;
        let w = CARD_WIDTH.min(stage.width.saturating_sub(2)).max(1);
        let h = CARD_HEIGHT.min(stage.height.saturating_sub(2)).max(1);
        let x = stage.x + (stage.width.saturating_sub(w)) / 2;
        let y = stage.y + (stage.height.saturating_sub(h)) / 2;
        Rect::new(x, y, w, h)
    }
}
