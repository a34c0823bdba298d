//! The card widget — turns the derived visual into a leaning parallelogram.
//!
//! A terminal has no perspective transform, so the tilt is approximated:
//! `rotate_y` shears the card's rows into an italic lean and drifts the whole
//! card sideways, `rotate_x` lifts or drops it by a row, and the sheen band
//! restyles the cells under the gradient position.  The interaction core
//! neither knows nor cares how crude this projection is.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::Widget,
};

use crate::core::visual::{DerivedVisual, MAX_ANGLE};
use crate::ui::theme::Theme;

/// Maximum horizontal row shear at full tilt, in cells.
const SKEW_CELLS: f64 = 2.0;
/// Maximum whole-card drift at full tilt, in cells.
const DRIFT_CELLS: f64 = 2.0;

/// Renders the card at its rest rect, displaced by the current tilt.
pub struct CardWidget<'a> {
    title: &'a str,
    visual: DerivedVisual,
    /// The card's rest position from the layout pass.
    rest: Rect,
}

impl<'a> CardWidget<'a> {
    pub fn new(title: &'a str, visual: DerivedVisual, rest: Rect) -> Self {
        Self { title, visual, rest }
    }

    /// Horizontal displacement for one row.  `t` runs -1 (top) → 1 (bottom).
    fn row_dx(&self, t: f64) -> i32 {
        let drift = self.visual.rotate_y / MAX_ANGLE * DRIFT_CELLS;
        let shear = self.visual.rotate_y / MAX_ANGLE * SKEW_CELLS * t;
        (drift + shear).round() as i32
    }

    /// Vertical displacement of the whole card.  Positive `rotate_x` means
    /// the pointer is above center, so the card lifts toward it.
    fn dy(&self) -> i32 {
        (-self.visual.rotate_x / MAX_ANGLE * 1.5).round() as i32
    }
}

impl Widget for CardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rest = self.rest;
        if rest.width < 6 || rest.height < 4 || area.width == 0 || area.height == 0 {
            return;
        }

        let w = rest.width;
        let h = rest.height;
        let border = Theme::card_border_style(self.visual.tracking);
        let face = Theme::card_face_style();

        let dy = self.dy();
        let max_x = (area.right() as i32 - w as i32).max(area.x as i32);
        let max_y = (area.bottom() as i32 - h as i32).max(area.y as i32);
        let y0 = (rest.y as i32 + dy).clamp(area.y as i32, max_y) as u16;

        let interior = w.saturating_sub(2) as usize;
        let title_row = h / 2;

        for row in 0..h {
            let t = if h > 1 {
                row as f64 / (h - 1) as f64 * 2.0 - 1.0
            } else {
                0.0
            };
            let x = (rest.x as i32 + self.row_dx(t)).clamp(area.x as i32, max_x) as u16;
            let y = y0 + row;
            if y >= area.bottom() {
                break;
            }

            if row == 0 {
                buf.set_string(x, y, format!("╭{}╮", "─".repeat(interior)), border);
            } else if row == h - 1 {
                buf.set_string(x, y, format!("╰{}╯", "─".repeat(interior)), border);
            } else {
                buf.set_string(x, y, format!("│{}│", " ".repeat(interior)), border);
                // Face rows carry their own style so the sheen has something
                // to brighten.
                buf.set_string(x + 1, y, " ".repeat(interior), face);
                if row == title_row {
                    let title: String = self.title.chars().take(interior.saturating_sub(2)).collect();
                    let tx = x + 1 + ((interior.saturating_sub(title.chars().count())) / 2) as u16;
                    buf.set_string(tx, y, &title, Theme::card_title_style());
                }
                paint_sheen_row(buf, &self.visual, x, y, w);
            }
        }
    }
}

/// Overlay the sheen band on one interior row.
///
/// The gradient position is a percentage of the card's width: 0 puts the
/// band at the left edge, 100 at the right, and the [-100, 200] range lets
/// it slide in from off-card and out the other side.
fn paint_sheen_row(buf: &mut Buffer, visual: &DerivedVisual, row_x: u16, y: u16, w: u16) {
    let (position, opacity) = visual.sheen();
    if opacity <= 0.0 {
        return;
    }

    let center = row_x as i32 + (position / 100.0 * w as f64).round() as i32;
    let strong = opacity >= 0.05;
    for dx in -1..=1i32 {
        let x = center + dx;
        // Interior cells only — never restyle the border columns.
        if x <= row_x as i32 || x >= row_x as i32 + w as i32 - 1 {
            continue;
        }
        let style = Theme::sheen_style(strong && dx == 0);
        if let Some(cell) = buf.cell_mut((x as u16, y)) {
            cell.set_style(style);
        }
    }
}
