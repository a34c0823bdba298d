//! Tilt readout — the controller's four reactive outputs rendered in the
//! top-right corner of a given area.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::core::visual::DerivedVisual;
use crate::ui::theme::Theme;

/// A small diagnostic readout for the interaction state.
///
/// Render this on top of the stage.  It picks its own position (top-right
/// of `area`) and is invisible when `visible` is false.
pub struct Hud {
    /// Whether to show the readout at all.
    pub visible: bool,
    /// The derived outputs being displayed.
    pub visual: DerivedVisual,
}

impl Widget for Hud {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.visible || area.width < 32 || area.height < 3 {
            return;
        }

        let v = &self.visual;
        let (position, opacity) = v.sheen();
        let tracking = if v.tracking { "tracking ●" } else { "tracking ○" };

        let lines = [
            Line::from(vec![
                Span::styled("rotX ", Theme::hud_label_style()),
                Span::styled(format!("{:+6.2}°", v.rotate_x), Theme::hud_value_style()),
                Span::styled("  rotY ", Theme::hud_label_style()),
                Span::styled(format!("{:+6.2}°", v.rotate_y), Theme::hud_value_style()),
            ]),
            Line::from(vec![
                Span::styled("sheen ", Theme::hud_label_style()),
                Span::styled(
                    format!("{position:6.1} · α {opacity:.3}"),
                    Theme::hud_value_style(),
                ),
                Span::styled("  ", Theme::hud_label_style()),
                Span::styled(tracking.to_string(), Theme::hud_value_style()),
            ]),
            Line::from(Span::styled(
                truncated(&v.sheen_gradient(), area.width.saturating_sub(2) as usize),
                Theme::hud_label_style(),
            )),
        ];

        for (i, line) in lines.iter().enumerate() {
            let line_width = line.width() as u16;
            let x = area.x + area.width.saturating_sub(line_width + 1);
            let y = area.y + i as u16;
            buf.set_line(x, y, line, line_width);
        }
    }
}

fn truncated(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut t: String = s.chars().take(max.saturating_sub(1)).collect();
        t.push('…');
        t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::visual::DerivedVisual;

    #[test]
    fn hidden_hud_draws_nothing() {
        let area = Rect::new(0, 0, 60, 5);
        let mut buf = Buffer::empty(area);
        Hud {
            visible: false,
            visual: DerivedVisual::compute(100.0, 100.0, true),
        }
        .render(area, &mut buf);
        assert_eq!(buf, Buffer::empty(area));
    }

    #[test]
    fn readout_contains_rotations_and_tracking() {
        let area = Rect::new(0, 0, 70, 5);
        let mut buf = Buffer::empty(area);
        Hud {
            visible: true,
            visual: DerivedVisual::compute(600.0, -600.0, true),
        }
        .render(area, &mut buf);

        let row0: String = (0..70).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert!(row0.contains("+8.00°"), "row was {row0:?}");
        let row1: String = (0..70).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert!(row1.contains("tracking ●"), "row was {row1:?}");
    }

    #[test]
    fn gradient_line_is_truncated_to_the_area() {
        let long = "x".repeat(100);
        assert_eq!(truncated(&long, 10).chars().count(), 10);
        assert!(truncated(&long, 10).ends_with('…'));
        assert_eq!(truncated("short", 10), "short");
    }
}
