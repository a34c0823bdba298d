//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

/// Central theme — change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── card ───────────────────────────────────────────────────
    pub fn card_border_style(tracking: bool) -> Style {
        if tracking {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        }
    }

    pub fn card_face_style() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn card_title_style() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    /// Sheen band cells.  `strong` switches between the band's bright core
    /// and its dim fringe.
    pub fn sheen_style(strong: bool) -> Style {
        if strong {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::DIM)
        }
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn hud_label_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn hud_value_style() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }
}
