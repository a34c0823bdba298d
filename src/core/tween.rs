//! Time-bounded scalar interpolation.
//!
//! A [`Tween`] drives one scalar from a captured start value to a target
//! under an easing curve.  There is at most one tween per scalar: retargeting
//! captures the current sampled value as the new start and supersedes the
//! in-flight motion.  Sampling is a pure function of the supplied instant,
//! which keeps the whole animation layer deterministic under test.

use std::time::{Duration, Instant};

use super::easing::Easing;

/// One animated scalar.
#[derive(Debug, Clone)]
pub struct Tween {
    from: f64,
    to: f64,
    started: Instant,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    /// A tween already at rest on `value`.
    pub fn settled(value: f64, now: Instant) -> Self {
        Self {
            from: value,
            to: value,
            started: now,
            duration: Duration::ZERO,
            easing: Easing::Linear,
        }
    }

    /// Start a new motion from an explicit value.
    pub fn new(from: f64, to: f64, duration: Duration, easing: Easing, now: Instant) -> Self {
        Self {
            from,
            to,
            started: now,
            duration,
            easing,
        }
    }

    /// Supersede the in-flight motion with a new target.
    ///
    /// The scalar's current sampled value becomes the new start, so the
    /// motion stays continuous — no jump back to the old origin.
    pub fn retarget(&mut self, to: f64, duration: Duration, easing: Easing, now: Instant) {
        let from = self.sample(now);
        *self = Self::new(from, to, duration, easing, now);
    }

    /// The value the tween is heading toward (or resting on).
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Current value at `now`.  Once the duration has elapsed this returns
    /// the target exactly — no floating-point residue.
    pub fn sample(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed >= self.duration {
            return self.to;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    /// True once the motion has run its full duration.
    pub fn is_settled(&self, now: Instant) -> bool {
        self.duration.is_zero() || now.saturating_duration_since(self.started) >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn settled_tween_holds_its_value() {
        let t0 = Instant::now();
        let tw = Tween::settled(7.5, t0);
        assert_eq!(tw.sample(t0), 7.5);
        assert_eq!(tw.sample(t0 + 500 * MS), 7.5);
        assert!(tw.is_settled(t0));
    }

    #[test]
    fn linear_midpoint() {
        let t0 = Instant::now();
        let tw = Tween::new(0.0, 100.0, 200 * MS, Easing::Linear, t0);
        assert_eq!(tw.sample(t0), 0.0);
        let mid = tw.sample(t0 + 100 * MS);
        assert!((mid - 50.0).abs() < 1e-9, "midpoint was {mid}");
        assert!(!tw.is_settled(t0 + 100 * MS));
    }

    #[test]
    fn completion_returns_target_exactly() {
        let t0 = Instant::now();
        let tw = Tween::new(3.0, 0.0, 125 * MS, Easing::EaseOut, t0);
        assert_eq!(tw.sample(t0 + 125 * MS), 0.0);
        assert_eq!(tw.sample(t0 + 10_000 * MS), 0.0);
        assert!(tw.is_settled(t0 + 125 * MS));
    }

    #[test]
    fn zero_duration_snaps() {
        let t0 = Instant::now();
        let tw = Tween::new(1.0, 9.0, Duration::ZERO, Easing::Linear, t0);
        assert_eq!(tw.sample(t0), 9.0);
        assert!(tw.is_settled(t0));
    }

    #[test]
    fn retarget_supersedes_and_stays_continuous() {
        let t0 = Instant::now();
        let mut tw = Tween::new(0.0, 100.0, 200 * MS, Easing::Linear, t0);

        // Halfway there, swing toward -100 instead.
        let t_half = t0 + 100 * MS;
        let at_half = tw.sample(t_half);
        tw.retarget(-100.0, 200 * MS, Easing::Linear, t_half);

        // No discontinuity at the handoff…
        assert_eq!(tw.sample(t_half), at_half);
        // …and the old target is gone.
        assert_eq!(tw.target(), -100.0);
        assert_eq!(tw.sample(t_half + 200 * MS), -100.0);
    }

    #[test]
    fn sample_before_start_is_from() {
        let t0 = Instant::now();
        let later = t0 + 50 * MS;
        let tw = Tween::new(2.0, 8.0, 100 * MS, Easing::Linear, later);
        // Clock readings from before the start saturate to zero elapsed.
        assert_eq!(tw.sample(t0), 2.0);
    }
}
