//! Input handling — maps key/mouse events to state mutations.
//!
//! The controller thinks in an abstract unit space, so mouse cell
//! coordinates are scaled up before they become pointer samples.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::config::Action;
use crate::core::geometry::{Point, PointerSample, RectF};

use super::state::AppState;

/// Terminal cells are roughly twice as tall as they are wide, so one row is
/// worth two columns of units.  At 12 units per column the default 400-unit
/// boundary spans ~33 columns / ~16 rows around the card center.
pub const UNITS_PER_COL: f64 = 12.0;
pub const UNITS_PER_ROW: f64 = 24.0;

/// Process a key event.
pub fn handle_key(state: &mut AppState, key: KeyEvent, now: Instant) {
    // Only act on presses (ignore Release/Repeat on supported terminals).
    if key.kind == KeyEventKind::Release {
        return;
    }

    // Ctrl+c always quits, regardless of bindings.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    let Some(action) = state.config.match_key(key) else {
        return;
    };

    match action {
        Action::Quit => {
            state.should_quit = true;
        }
        Action::ToggleHud => {
            state.show_hud = !state.show_hud;
        }
        Action::Reset => {
            state.controller.reset(now);
            state.status_message = Some("card reset".to_string());
        }
    }
}

/// Process a mouse event.  Every movement becomes a pointer sample; the
/// controller decides whether it qualifies.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent, now: Instant) {
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            let sample = pointer_sample(state, mouse.column, mouse.row);
            state.controller.pointer_moved(&sample, now);
        }
        _ => {}
    }
}

/// Build a pointer sample in unit space from a cell position.
fn pointer_sample(state: &AppState, column: u16, row: u16) -> PointerSample {
    let pointer = Point::new(column as f64 * UNITS_PER_COL, row as f64 * UNITS_PER_ROW);
    PointerSample::capture(pointer, state.card_area.map(card_rect_units))
}

/// The card's layout rect scaled into unit space.
fn card_rect_units(area: Rect) -> RectF {
    RectF::new(
        area.x as f64 * UNITS_PER_COL,
        area.y as f64 * UNITS_PER_ROW,
        area.width as f64 * UNITS_PER_COL,
        area.height as f64 * UNITS_PER_ROW,
    )
}
