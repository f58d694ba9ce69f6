use std::time::Duration;

use crate::steps::{Acceleration, StepDetector};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MagnitudeDeltaOptions {
    /// Minimal change of magnitude between two readings which counts as a step
    pub delta: f64,
    /// Estimated length of one step in meters
    pub step_length_meters: f64,
}

impl MagnitudeDeltaOptions {
    pub const fn new() -> Self {
        Self {
            delta: 0.5,
            step_length_meters: 0.7,
        }
    }

    pub const fn set_delta(mut self, delta: f64) -> Self {
        self.delta = delta;
        self
    }

    pub const fn set_step_length_meters(mut self, step_length_meters: f64) -> Self {
        self.step_length_meters = step_length_meters;
        self
    }
}

impl Default for MagnitudeDeltaOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Counts a step whenever magnitude differs from the stored reading by more
/// than [`MagnitudeDeltaOptions::delta`].
///
/// The stored reading is only replaced by readings which did *not* produce a
/// step. So after a jump to a new steady level every following reading keeps
/// counting until the signal comes back. The zone tracker has always behaved
/// this way and its thresholds are tuned for it.
#[derive(Debug, Clone, Default)]
pub struct MagnitudeDelta {
    options: MagnitudeDeltaOptions,
    previous: Option<Acceleration>,
    step_count: u64,
    step_distance_meters: f64,
}

impl MagnitudeDelta {
    pub const fn new(options: MagnitudeDeltaOptions) -> Self {
        Self {
            options,
            previous: None,
            step_count: 0,
            step_distance_meters: 0.0,
        }
    }

    pub const fn options(&self) -> &MagnitudeDeltaOptions {
        &self.options
    }

    /// Reading the next one is compared against.
    pub const fn previous(&self) -> Option<&Acceleration> {
        self.previous.as_ref()
    }
}

impl StepDetector for MagnitudeDelta {
    fn on_sample(&mut self, sample: Acceleration, _timestamp: Duration) -> bool {
        let Some(previous) = self.previous else {
            self.previous = Some(sample);
            return false;
        };

        let change = (sample.magnitude() - previous.magnitude()).abs();

        if change > self.options.delta {
            self.step_count += 1;
            self.step_distance_meters = self.step_count as f64 * self.options.step_length_meters;

            log::debug!(
                "Step detected! Total steps: {}, estimated distance: {:.2} m",
                self.step_count,
                self.step_distance_meters
            );

            return true;
        }

        self.previous = Some(sample);
        false
    }

    fn step_count(&self) -> u64 {
        self.step_count
    }

    fn step_distance_meters(&self) -> f64 {
        self.step_distance_meters
    }

    fn reset(&mut self, _timestamp: Duration) {
        self.previous = None;
        self.step_count = 0;
        self.step_distance_meters = 0.0;
    }
}
