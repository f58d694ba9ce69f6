//! Step detection strategies.
//!
//! Two heuristics are used by different parts of the application and they are
//! deliberately kept apart. They react differently to the same signal:
//!
//! - [`MagnitudeDelta`] - a step is any jump of the acceleration magnitude
//!   between two readings that is bigger than a fixed delta. Used by the zone
//!   tracker, which also turns steps into distance.
//! - [`PeakValley`] - a step is a rise above a threshold followed by a fall
//!   below it, with a minimal time between two counted steps.

mod magnitude_delta;
mod peak_valley;

use std::time::Duration;

pub use magnitude_delta::*;
pub use peak_valley::*;

/// Raw accelerometer reading.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Acceleration {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Acceleration {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn magnitude(&self) -> f64 {
        (self.x.powi(2) + self.y.powi(2) + self.z.powi(2)).sqrt()
    }
}

/// Something which turns a stream of accelerometer readings into steps.
pub trait StepDetector {
    /// Feed one reading. Returns `true` if this reading completed a step.
    ///
    /// `timestamp` is the time the reading was delivered; strategies that
    /// don't care about time ignore it.
    fn on_sample(&mut self, sample: Acceleration, timestamp: Duration) -> bool;

    /// Number of steps since creation or last [`StepDetector::reset`].
    fn step_count(&self) -> u64;

    /// Distance covered by the counted steps.
    fn step_distance_meters(&self) -> f64;

    /// Forget everything, `timestamp` marks the start of a new run.
    fn reset(&mut self, timestamp: Duration);
}
