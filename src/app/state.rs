//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use std::time::Instant;

use ratatui::layout::Rect;

use crate::config::AppConfig;
use crate::core::tilt::TiltController;

/// Top-level application state.
pub struct AppState {
    /// The interaction state machine driving the card.
    pub controller: TiltController,
    /// User configuration — tunables and keybindings.
    pub config: AppConfig,
    /// Text rendered on the card face.
    pub card_title: String,
    /// The card's cell rect from the most recent draw.  `None` until the
    /// first layout pass; the controller treats that as an inert card.
    pub card_area: Option<Rect>,
    /// Whether the HUD readout is visible.
    pub show_hud: bool,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig, card_title: String, now: Instant) -> Self {
        let controller = TiltController::new(config.tilt(), now);
        let show_hud = config.hud;
        Self {
            controller,
            config,
            card_title,
            card_area: None,
            show_hud,
            should_quit: false,
            status_message: None,
        }
    }
}
