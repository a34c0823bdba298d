//! Terminal event abstraction.
//!
//! Wraps crossterm events into a simpler enum and runs a background task that
//! forwards them over a channel so the main loop stays non-blocking.  The
//! tick cadence doubles as the animation frame clock: when no input arrives
//! within one frame interval, a `Tick` is emitted so in-flight tweens and the
//! idle-revert deadline still advance.

use std::io;
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event as CtEvent, KeyEvent, MouseEvent,
};
use crossterm::execute;
use tokio::sync::mpsc;

/// High-level events consumed by the application.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
}

/// Spawns a background task that polls the terminal for events and sends them
/// through the returned channel.
pub fn spawn_event_reader(frame_interval: Duration) -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        loop {
            // Use crossterm's poll with the frame interval so we can send
            // Tick events even when the pointer is still.
            let has_event = event::poll(frame_interval).unwrap_or(false);
            if has_event {
                if let Ok(ev) = event::read() {
                    let app_event = match ev {
                        CtEvent::Key(k) => AppEvent::Key(k),
                        CtEvent::Mouse(m) => AppEvent::Mouse(m),
                        CtEvent::Resize(w, h) => AppEvent::Resize(w, h),
                        _ => continue,
                    };
                    if tx.send(app_event).is_err() {
                        break; // receiver dropped
                    }
                }
            } else {
                // No event within one frame — send a tick.
                if tx.send(AppEvent::Tick).is_err() {
                    break;
                }
            }
        }
    });

    rx
}

// ───────────────────────────────────────── pointer capture ───

/// Owned subscription to the terminal's pointer-move stream.
///
/// Mouse capture is global terminal state; holding it in a guard ties the
/// subscription's lifetime to the value.  Teardown calls [`release`]
/// explicitly so errors surface; `Drop` is the backstop if an early `?`
/// unwinds main before we get there.
///
/// [`release`]: PointerCapture::release
#[derive(Debug)]
pub struct PointerCapture {
    released: bool,
}

impl PointerCapture {
    /// Start forwarding pointer movement to the event stream.
    pub fn acquire() -> anyhow::Result<Self> {
        execute!(io::stdout(), EnableMouseCapture)?;
        tracing::debug!("pointer capture acquired");
        Ok(Self { released: false })
    }

    /// Stop pointer forwarding.  Must run before the process exits or the
    /// user's terminal keeps swallowing mouse input.
    pub fn release(mut self) -> anyhow::Result<()> {
        self.released = true;
        execute!(io::stdout(), DisableMouseCapture)?;
        tracing::debug!("pointer capture released");
        Ok(())
    }
}

impl Drop for PointerCapture {
    fn drop(&mut self) {
        if !self.released {
            let _ = execute!(io::stdout(), DisableMouseCapture);
        }
    }
}
