//! A pointer-tracked 3D-tilt card for the terminal.
//!
//! Run the binary and move the mouse near the card: it leans after the
//! pointer while a sheen sweeps the face, then eases back to rest once the
//! pointer goes quiet.

mod app;
mod config;
mod core;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, widgets::Paragraph, Terminal};

use crate::app::{
    event::{spawn_event_reader, AppEvent, PointerCapture},
    handler,
    state::AppState,
};
use crate::ui::{card::CardWidget, hud::Hud, layout::AppLayout, theme::Theme};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Pointer-tracked 3D-tilt card for the terminal")]
struct Cli {
    /// Text shown on the card face.
    #[arg(default_value = "SIGNED")]
    title: String,

    /// Animation frame rate.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Override the tracking boundary (units; one terminal column ≈ 12).
    #[arg(long)]
    boundary: Option<f64>,

    /// Start with the HUD readout hidden.
    #[arg(long)]
    no_hud: bool,
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (only in debug builds / when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute the UI's stdout
        .init();

    let cli = Cli::parse();

    // ── configuration ─────────────────────────────────────────
    let mut config = config::AppConfig::load_or_init();
    if let Some(boundary) = cli.boundary {
        config.boundary = boundary.clamp(50.0, 5000.0);
    }
    if cli.no_hud {
        config.hud = false;
    }

    let mut state = AppState::new(config, cli.title, Instant::now());

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    let capture = PointerCapture::acquire()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let fps = cli.fps.clamp(5, 120);
    let frame_interval = Duration::from_millis(1000 / fps as u64);
    let mut events = spawn_event_reader(frame_interval);

    // ── event loop ────────────────────────────────────────────
    let mut needs_redraw = true;
    let mut was_animating = false;
    loop {
        // Advance the interaction clock before drawing so this frame shows
        // the revert the moment the idle deadline passes.
        let now = Instant::now();
        state.controller.tick(now);

        if needs_redraw {
            needs_redraw = false;
            let visual = state.controller.visual(now);

            terminal.draw(|frame| {
                let layout = AppLayout::from_area(frame.area());
                let card_rect = layout.card_rect();
                // The rect the next pointer samples will measure against.
                state.card_area = Some(card_rect);

                frame.render_widget(
                    CardWidget::new(&state.card_title, visual, card_rect),
                    layout.stage_area,
                );
                frame.render_widget(
                    Hud {
                        visible: state.show_hud,
                        visual,
                    },
                    layout.stage_area,
                );

                let hint = state.config.status_bar_hint();
                let status_text = state.status_message.as_deref().unwrap_or(&hint);
                let status = Paragraph::new(status_text).style(Theme::status_bar_style());
                frame.render_widget(status, layout.status_area);
            })?;
        }

        // Block on the next event, then drain everything already queued
        // before redrawing — a fast mouse emits far more moves per frame
        // than we want to paint.
        let Some(event) = events.recv().await else {
            break;
        };
        let mut saw_input = handle_event(&mut state, event);
        while let Ok(event) = events.try_recv() {
            saw_input |= handle_event(&mut state, event);
        }

        if state.should_quit {
            break;
        }

        // An idle card doesn't need repainting at frame rate.  Redraw on
        // input, while motion is in flight, and once more after the last
        // motion settles so the exact rest pose lands on screen.
        let animating = state.controller.is_animating(Instant::now());
        needs_redraw = saw_input || animating || was_animating;
        was_animating = animating;
    }

    // ── teardown ──────────────────────────────────────────────
    // Release the pointer subscription before the screen flips back, so a
    // slow exit never leaves the user's terminal eating mouse input.
    capture.release()?;
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Dispatch one event.  Returns `true` for real input (key, mouse, resize)
/// so the caller can tell user activity apart from frame ticks.
fn handle_event(state: &mut AppState, event: AppEvent) -> bool {
    let now = Instant::now();
    match event {
        AppEvent::Key(k) => {
            handler::handle_key(state, k, now);
            true
        }
        AppEvent::Mouse(m) => {
            handler::handle_mouse(state, m, now);
            true
        }
        AppEvent::Resize(_, _) => true,
        AppEvent::Tick => {
            state.controller.tick(now);
            false
        }
    }
}
