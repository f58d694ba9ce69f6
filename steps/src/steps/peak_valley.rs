use std::time::Duration;

use crate::steps::{Acceleration, StepDetector};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeakValleyOptions {
    /// Magnitude which separates peaks from valleys
    pub threshold: f64,
    /// Minimal time between two counted steps
    pub debounce: Duration,
    /// Estimated length of one step in meters
    pub step_length_meters: f64,
}

impl PeakValleyOptions {
    pub const fn new() -> Self {
        Self {
            threshold: 1.15,
            debounce: Duration::from_millis(300),
            step_length_meters: 0.7,
        }
    }

    pub const fn set_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub const fn set_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub const fn set_step_length_meters(mut self, step_length_meters: f64) -> Self {
        self.step_length_meters = step_length_meters;
        self
    }
}

impl Default for PeakValleyOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Peak followed by valley, debounced.
///
/// A peak is the highest magnitude above the threshold, a valley is any
/// magnitude below the threshold seen after a peak. Once both exist and more
/// than [`PeakValleyOptions::debounce`] passed since the last step, a step is
/// counted and both are cleared. Zero means "not seen".
#[derive(Debug, Clone, Default)]
pub struct PeakValley {
    options: PeakValleyOptions,
    peak: f64,
    valley: f64,
    last_step_at: Duration,
    step_count: u64,
}

impl PeakValley {
    pub const fn new(options: PeakValleyOptions) -> Self {
        Self {
            options,
            peak: 0.0,
            valley: 0.0,
            last_step_at: Duration::ZERO,
            step_count: 0,
        }
    }

    pub const fn options(&self) -> &PeakValleyOptions {
        &self.options
    }

    pub const fn peak(&self) -> f64 {
        self.peak
    }

    pub const fn valley(&self) -> f64 {
        self.valley
    }
}

impl StepDetector for PeakValley {
    fn on_sample(&mut self, sample: Acceleration, timestamp: Duration) -> bool {
        let magnitude = sample.magnitude();

        if magnitude > self.options.threshold && self.peak < magnitude {
            self.peak = magnitude;
        }

        if magnitude < self.options.threshold && self.peak > 0.0 {
            self.valley = magnitude;
        }

        if self.peak > 0.0
            && self.valley > 0.0
            && timestamp.saturating_sub(self.last_step_at) > self.options.debounce
        {
            self.step_count += 1;
            self.peak = 0.0;
            self.valley = 0.0;
            self.last_step_at = timestamp;

            log::debug!("Step detected! Total steps: {}", self.step_count);

            return true;
        }

        false
    }

    fn step_count(&self) -> u64 {
        self.step_count
    }

    fn step_distance_meters(&self) -> f64 {
        self.step_count as f64 * self.options.step_length_meters
    }

    fn reset(&mut self, timestamp: Duration) {
        self.peak = 0.0;
        self.valley = 0.0;
        self.last_step_at = timestamp;
        self.step_count = 0;
    }
}
