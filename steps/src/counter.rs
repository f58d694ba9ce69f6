use std::time::Duration;

use crate::steps::{Acceleration, StepDetector};

/// Daily goal used by step counter screens
pub const DEFAULT_STEP_GOAL: u64 = 3000;

/// Step counter session on top of any [`StepDetector`].
///
/// Counts steps only while tracking. Session steps survive [`StepCounter::stop`]
/// and are cleared by [`StepCounter::start`] or [`StepCounter::reset_session`].
#[derive(Debug, Clone, Default)]
pub struct StepCounter<D> {
    detector: D,
    session_steps: u64,
    is_tracking: bool,
}

impl<D: StepDetector> StepCounter<D> {
    pub const fn new(detector: D) -> Self {
        Self {
            detector,
            session_steps: 0,
            is_tracking: false,
        }
    }

    pub fn start(&mut self, timestamp: Duration) {
        self.detector.reset(timestamp);
        self.session_steps = 0;
        self.is_tracking = true;
    }

    pub fn stop(&mut self) {
        self.is_tracking = false;
    }

    pub fn reset_session(&mut self) {
        self.session_steps = 0;
    }

    /// Returns `true` if the reading counted a step.
    pub fn on_sample(&mut self, sample: Acceleration, timestamp: Duration) -> bool {
        if !self.is_tracking {
            return false;
        }

        if self.detector.on_sample(sample, timestamp) {
            self.session_steps += 1;
            return true;
        }

        false
    }

    pub const fn session_steps(&self) -> u64 {
        self.session_steps
    }

    pub const fn is_tracking(&self) -> bool {
        self.is_tracking
    }

    /// Steps made today, `daily_base` is what was counted before this session.
    pub const fn total_steps(&self, daily_base: u64) -> u64 {
        daily_base + self.session_steps
    }

    pub const fn detector(&self) -> &D {
        &self.detector
    }
}

/// Percent of `goal` reached, clamped to `0..=100` for display.
pub fn goal_progress(steps: u64, goal: u64) -> f64 {
    if goal == 0 {
        return 100.0;
    }

    (steps as f64 / goal as f64 * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::{MagnitudeDelta, PeakValley};

    fn z(value: f64) -> Acceleration {
        Acceleration::new(0.0, 0.0, value)
    }

    #[test]
    fn counts_only_while_tracking() {
        let mut counter = StepCounter::new(PeakValley::default());

        assert!(!counter.on_sample(z(1.5), Duration::from_millis(1000)));
        assert!(!counter.on_sample(z(0.9), Duration::from_millis(1100)));
        assert_eq!(counter.session_steps(), 0);

        counter.start(Duration::from_millis(2000));
        counter.on_sample(z(1.5), Duration::from_millis(2400));
        assert!(counter.on_sample(z(0.9), Duration::from_millis(2500)));
        assert_eq!(counter.session_steps(), 1);

        counter.stop();
        assert!(!counter.on_sample(z(1.5), Duration::from_millis(3000)));
        assert!(!counter.on_sample(z(0.9), Duration::from_millis(3100)));
        assert_eq!(counter.session_steps(), 1);
    }

    #[test]
    fn start_clears_session() {
        let mut counter = StepCounter::new(MagnitudeDelta::default());
        counter.start(Duration::ZERO);
        counter.on_sample(z(1.0), Duration::ZERO);
        counter.on_sample(z(2.0), Duration::ZERO);
        assert_eq!(counter.session_steps(), 1);

        counter.start(Duration::ZERO);

        assert_eq!(counter.session_steps(), 0);
        assert_eq!(counter.detector().step_count(), 0);
        // First reading after restart only primes the detector
        assert!(!counter.on_sample(z(2.0), Duration::ZERO));
    }

    #[test]
    fn reset_session_keeps_tracking() {
        let mut counter = StepCounter::new(MagnitudeDelta::default());
        counter.start(Duration::ZERO);
        counter.on_sample(z(1.0), Duration::ZERO);
        counter.on_sample(z(2.0), Duration::ZERO);

        counter.reset_session();

        assert!(counter.is_tracking());
        assert_eq!(counter.session_steps(), 0);
        assert_eq!(counter.total_steps(1350), 1350);
    }

    #[test]
    fn total_steps() {
        let mut counter = StepCounter::new(MagnitudeDelta::default());
        counter.start(Duration::ZERO);
        counter.on_sample(z(1.0), Duration::ZERO);
        counter.on_sample(z(2.0), Duration::ZERO);
        counter.on_sample(z(2.0), Duration::ZERO);

        assert_eq!(counter.total_steps(1350), 1352);
    }

    #[test]
    fn progress() {
        assert_eq!(goal_progress(1500, DEFAULT_STEP_GOAL), 50.0);
        assert_eq!(goal_progress(0, DEFAULT_STEP_GOAL), 0.0);
        assert_eq!(goal_progress(4500, DEFAULT_STEP_GOAL), 100.0);
        assert_eq!(goal_progress(10, 0), 100.0);
    }
}
