//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer takes the *core* interaction state and turns it into pixels on
//! the terminal.  No event handling happens here.

pub mod card;
pub mod hud;
pub mod layout;
pub mod theme;
