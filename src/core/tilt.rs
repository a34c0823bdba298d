//! The pointer-tilt interaction controller.
//!
//! Feeds on pointer samples and a monotonic clock, owns the two animated
//! offset scalars, and decides when the card follows the pointer and when it
//! drifts back to rest.  All mutation happens on the event-loop task — the
//! scalars are single-writer state and the clock is always injected, so the
//! whole state machine runs unmodified under test.

use std::time::{Duration, Instant};

use super::easing::Easing;
use super::geometry::PointerSample;
use super::tween::Tween;
use super::visual::DerivedVisual;

/// Interaction tunables.
#[derive(Debug, Clone, Copy)]
pub struct TiltConfig {
    /// Maximum pointer-to-center distance (units) that arms tracking.
    pub boundary: f64,
    /// Transition while chasing the pointer.
    pub follow: Duration,
    /// How long after the last qualifying move the card lets go.
    pub idle_timeout: Duration,
    /// Transition back to rest.
    pub revert: Duration,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            boundary: 400.0,
            follow: Duration::from_millis(125),
            idle_timeout: Duration::from_millis(1000),
            revert: Duration::from_millis(2000),
        }
    }
}

/// Snapshot of the animated scalars at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltState {
    pub card_x: f64,
    pub card_y: f64,
    pub tracking: bool,
}

// ───────────────────────────────────────── controller ────────

/// Owns the tilt scalars and the idle-revert deadline.
#[derive(Debug)]
pub struct TiltController {
    config: TiltConfig,
    x: Tween,
    y: Tween,
    tracking: bool,
    /// Pending revert deadline.  Every qualifying move clears and
    /// reschedules it — debounce with no explicit cancellation token.
    revert_at: Option<Instant>,
}

impl TiltController {
    pub fn new(config: TiltConfig, now: Instant) -> Self {
        Self {
            config,
            x: Tween::settled(0.0, now),
            y: Tween::settled(0.0, now),
            tracking: false,
            revert_at: None,
        }
    }

    pub fn tracking(&self) -> bool {
        self.tracking
    }

    /// Feed one pointer-move observation.
    ///
    /// Moves outside the boundary are ignored entirely: they neither steer
    /// the scalars nor push back the revert deadline.  The next in-range
    /// move re-arms tracking.
    pub fn pointer_moved(&mut self, sample: &PointerSample, now: Instant) {
        if sample.distance > self.config.boundary {
            return;
        }

        if !self.tracking {
            tracing::debug!(
                x = sample.x,
                y = sample.y,
                distance = sample.distance,
                "tracking armed"
            );
        }
        self.tracking = true;
        self.revert_at = Some(now + self.config.idle_timeout);

        // Re-issuing the same offset must not restart the in-flight tween —
        // retargeting resets the clock and would stretch the motion.
        if self.x.target() != sample.offset.x {
            self.x
                .retarget(sample.offset.x, self.config.follow, Easing::EaseOut, now);
        }
        if self.y.target() != sample.offset.y {
            self.y
                .retarget(sample.offset.y, self.config.follow, Easing::EaseOut, now);
        }
    }

    /// Advance the clock: fires the revert once the idle deadline passes.
    /// Call once per animation frame.
    pub fn tick(&mut self, now: Instant) {
        let Some(deadline) = self.revert_at else {
            return;
        };
        if now < deadline {
            return;
        }
        tracing::debug!("idle deadline hit, reverting to rest");
        self.revert_at = None;
        self.tracking = false;
        self.x
            .retarget(0.0, self.config.revert, Easing::EaseInOutBack, now);
        self.y
            .retarget(0.0, self.config.revert, Easing::EaseInOutBack, now);
    }

    /// Snap everything back to rest, dropping any pending deadline.
    pub fn reset(&mut self, now: Instant) {
        self.x = Tween::settled(0.0, now);
        self.y = Tween::settled(0.0, now);
        self.tracking = false;
        self.revert_at = None;
    }

    /// Current scalar snapshot.
    pub fn state(&self, now: Instant) -> TiltState {
        TiltState {
            card_x: self.x.sample(now),
            card_y: self.y.sample(now),
            tracking: self.tracking,
        }
    }

    /// Current derived outputs for the renderer.
    pub fn visual(&self, now: Instant) -> DerivedVisual {
        let state = self.state(now);
        DerivedVisual::compute(state.card_x, state.card_y, state.tracking)
    }

    /// True while a tween is in flight or a revert is still pending.
    /// Hosts with on-demand redraw can idle when this goes false.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.revert_at.is_some() || !self.x.is_settled(now) || !self.y.is_settled(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::Point;
    use pretty_assertions::assert_eq;

    const MS: Duration = Duration::from_millis(1);

    /// Pointer sample with no card rect: offset == pointer position.
    fn sample(x: f64, y: f64) -> PointerSample {
        PointerSample::capture(Point::new(x, y), None)
    }

    fn controller(now: Instant) -> TiltController {
        TiltController::new(TiltConfig::default(), now)
    }

    #[test]
    fn in_range_move_arms_tracking() {
        let t0 = Instant::now();
        let mut c = controller(t0);
        c.pointer_moved(&sample(120.0, -90.0), t0); // distance 150
        assert!(c.tracking());
        // Scalars head for the offset and land after the follow transition.
        let s = c.state(t0 + 125 * MS);
        assert_eq!(s.card_x, 120.0);
        assert_eq!(s.card_y, -90.0);
    }

    #[test]
    fn boundary_is_inclusive() {
        let t0 = Instant::now();
        let mut c = controller(t0);
        c.pointer_moved(&sample(400.0, 0.0), t0);
        assert!(c.tracking());
    }

    #[test]
    fn out_of_range_move_is_ignored_when_idle() {
        let t0 = Instant::now();
        let mut c = controller(t0);
        c.pointer_moved(&sample(300.0, 300.0), t0); // distance ≈ 424
        assert!(!c.tracking());
        assert_eq!(
            c.state(t0 + 1000 * MS),
            TiltState { card_x: 0.0, card_y: 0.0, tracking: false }
        );
    }

    #[test]
    fn out_of_range_move_keeps_last_value_while_tracking() {
        let t0 = Instant::now();
        let mut c = controller(t0);
        c.pointer_moved(&sample(100.0, 50.0), t0);
        let settled = t0 + 200 * MS;

        // A far-away move changes nothing: same targets, same deadline.
        c.pointer_moved(&sample(5000.0, 5000.0), settled);
        let s = c.state(settled);
        assert_eq!(s.card_x, 100.0);
        assert_eq!(s.card_y, 50.0);
        assert!(s.tracking);

        // The earlier deadline still fires at t0 + 1000ms.
        c.tick(t0 + 1000 * MS);
        assert!(!c.tracking());
    }

    #[test]
    fn idle_deadline_reverts_to_exact_rest() {
        let t0 = Instant::now();
        let mut c = controller(t0);
        c.pointer_moved(&sample(250.0, -100.0), t0);

        c.tick(t0 + 999 * MS);
        assert!(c.tracking(), "deadline must not fire early");

        c.tick(t0 + 1000 * MS);
        assert!(!c.tracking());
        assert!(c.is_animating(t0 + 1000 * MS));

        // 2000ms revert lands on exactly (0, 0).
        let rest = c.state(t0 + 3000 * MS);
        assert_eq!(rest, TiltState { card_x: 0.0, card_y: 0.0, tracking: false });
        assert!(!c.is_animating(t0 + 3000 * MS));
    }

    #[test]
    fn qualifying_move_reschedules_the_deadline() {
        let t0 = Instant::now();
        let mut c = controller(t0);
        c.pointer_moved(&sample(100.0, 0.0), t0);
        c.pointer_moved(&sample(110.0, 0.0), t0 + 800 * MS);

        // Old deadline (t0 + 1000ms) was superseded.
        c.tick(t0 + 1100 * MS);
        assert!(c.tracking());

        c.tick(t0 + 1800 * MS);
        assert!(!c.tracking());
    }

    #[test]
    fn entry_rearms_after_revert() {
        let t0 = Instant::now();
        let mut c = controller(t0);
        c.pointer_moved(&sample(100.0, 0.0), t0);
        c.tick(t0 + 1000 * MS);
        assert!(!c.tracking());

        // Out-of-range movement does not resurrect tracking…
        c.pointer_moved(&sample(600.0, 600.0), t0 + 1200 * MS);
        assert!(!c.tracking());

        // …but the next in-range move does.
        c.pointer_moved(&sample(50.0, 50.0), t0 + 1300 * MS);
        assert!(c.tracking());
    }

    #[test]
    fn repeated_offset_does_not_restart_the_tween() {
        let t0 = Instant::now();
        let mut c = controller(t0);
        c.pointer_moved(&sample(200.0, 0.0), t0);

        // Re-issue the identical offset mid-flight.
        c.pointer_moved(&sample(200.0, 0.0), t0 + 60 * MS);

        // Had the tween restarted at t0+60ms it would still be short of the
        // target at t0+125ms; the first motion completes on schedule.
        assert_eq!(c.state(t0 + 125 * MS).card_x, 200.0);
    }

    #[test]
    fn repeated_offset_still_extends_the_idle_window() {
        let t0 = Instant::now();
        let mut c = controller(t0);
        c.pointer_moved(&sample(200.0, 0.0), t0);
        c.pointer_moved(&sample(200.0, 0.0), t0 + 900 * MS);

        c.tick(t0 + 1100 * MS);
        assert!(c.tracking(), "identical offset is still movement");
        c.tick(t0 + 1900 * MS);
        assert!(!c.tracking());
    }

    #[test]
    fn reset_snaps_to_rest_and_drops_deadline() {
        let t0 = Instant::now();
        let mut c = controller(t0);
        c.pointer_moved(&sample(300.0, 200.0), t0);
        c.reset(t0 + 50 * MS);

        assert_eq!(
            c.state(t0 + 50 * MS),
            TiltState { card_x: 0.0, card_y: 0.0, tracking: false }
        );
        assert!(!c.is_animating(t0 + 50 * MS));
        // No deadline left to fire.
        c.tick(t0 + 5000 * MS);
        assert!(!c.tracking());
    }

    #[test]
    fn visual_reflects_scalar_snapshot() {
        let t0 = Instant::now();
        let mut c = controller(t0);
        c.pointer_moved(&sample(400.0, 0.0), t0);
        let v = c.visual(t0 + 125 * MS);
        // card_x = 400 → rotate_y = 400/600 · 8.
        assert!((v.rotate_y - 400.0 / 600.0 * 8.0).abs() < 1e-9);
        assert_eq!(v.rotate_x, 0.0);
        assert!(v.tracking);
    }
}
