//! Loop clock
//!
//! Maps wall-clock instants onto the normalized animation time `t` in
//! `[0, 1)`. The origin is taken from the first sample after a reset.

use std::time::{Duration, Instant};

/// Default length of one animation loop
pub const DEFAULT_LOOP: Duration = Duration::from_secs(2);

/// Normalized position of `elapsed` inside a loop of length `loop_duration`
pub fn loop_phase(elapsed: Duration, loop_duration: Duration) -> f64 {
    let period = loop_duration.as_secs_f64();
    if period <= 0.0 {
        return 0.0;
    }
    let t = elapsed.as_secs_f64().rem_euclid(period) / period;
    // rounding can land exactly on the period
    if t >= 1.0 {
        0.0
    } else {
        t
    }
}

/// Looping time source with a lazily established origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopClock {
    origin: Option<Instant>,
    loop_duration: Duration,
}

impl Default for LoopClock {
    fn default() -> Self {
        Self::new(DEFAULT_LOOP)
    }
}

impl LoopClock {
    pub fn new(loop_duration: Duration) -> Self {
        Self {
            origin: None,
            loop_duration,
        }
    }

    /// Clock for a loop length in seconds; non-positive or non-finite
    /// lengths fall back to the default loop
    pub fn from_secs(seconds: f64) -> Self {
        match Duration::try_from_secs_f64(seconds) {
            Ok(d) if !d.is_zero() => Self::new(d),
            _ => Self::default(),
        }
    }

    pub fn loop_duration(&self) -> Duration {
        self.loop_duration
    }

    pub fn origin(&self) -> Option<Instant> {
        self.origin
    }

    /// Forget the origin; the next sample starts a new loop
    pub fn reset(&mut self) {
        self.origin = None;
    }

    /// Loop time at `now`. The first call after construction or
    /// [`reset`](Self::reset) fixes the origin and returns 0.
    pub fn sample(&mut self, now: Instant) -> f64 {
        let origin = *self.origin.get_or_insert(now);
        loop_phase(now.saturating_duration_since(origin), self.loop_duration)
    }

    /// Time since the origin, zero before the first sample
    pub fn elapsed(&self, now: Instant) -> Duration {
        self.origin
            .map(|origin| now.saturating_duration_since(origin))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sample_sets_origin() {
        let mut clock = LoopClock::default();
        assert!(clock.origin().is_none());

        let now = Instant::now();
        assert_eq!(clock.sample(now), 0.0);
        assert_eq!(clock.origin(), Some(now));
    }

    #[test]
    fn test_phase_advances() {
        let mut clock = LoopClock::default();
        let base = Instant::now();
        clock.sample(base);

        let t = clock.sample(base + Duration::from_millis(500));
        assert!((t - 0.25).abs() < 1e-9);
        assert_eq!(clock.elapsed(base + Duration::from_secs(1)), Duration::from_secs(1));
    }

    #[test]
    fn test_loop_wraps_to_zero() {
        let mut clock = LoopClock::default();
        let base = Instant::now();
        let eps = Duration::from_millis(1);
        clock.sample(base);

        let before = clock.sample(base + DEFAULT_LOOP - eps);
        let after = clock.sample(base + DEFAULT_LOOP + eps);
        assert!(before > 0.99 && before < 1.0);
        assert!(after >= 0.0 && after < 0.01);
        assert_eq!(clock.sample(base + DEFAULT_LOOP * 3), 0.0);
    }

    #[test]
    fn test_earlier_instant_is_zero() {
        let base = Instant::now() + Duration::from_secs(5);
        let mut clock = LoopClock::default();
        clock.sample(base);
        assert_eq!(clock.sample(base - Duration::from_secs(1)), 0.0);
    }

    #[test]
    fn test_reset_restarts_loop() {
        let mut clock = LoopClock::new(Duration::from_secs(1));
        let base = Instant::now();
        clock.sample(base);
        clock.reset();

        let later = base + Duration::from_millis(700);
        assert_eq!(clock.sample(later), 0.0);
        assert_eq!(clock.origin(), Some(later));
    }

    #[test]
    fn test_from_secs_rejects_bad_lengths() {
        assert_eq!(LoopClock::from_secs(0.0).loop_duration(), DEFAULT_LOOP);
        assert_eq!(LoopClock::from_secs(-1.0).loop_duration(), DEFAULT_LOOP);
        assert_eq!(LoopClock::from_secs(f64::NAN).loop_duration(), DEFAULT_LOOP);
        assert_eq!(LoopClock::from_secs(0.5).loop_duration(), Duration::from_millis(500));
    }

    #[test]
    fn test_zero_loop_phase() {
        assert_eq!(loop_phase(Duration::from_secs(3), Duration::ZERO), 0.0);
    }
}
