//! # Steps
//!
//! Online movement estimation from phone sensors:
//!
//! - [`steps`] - accelerometer step detection strategies
//! - [`gps`] - distance travelled from the first location fix
//! - [`StepCounter`] - step counter session for the step counter screens

mod counter;
pub mod gps;
pub mod steps;

pub use counter::*;
pub use gps::{Distance, Fix, GpsDistanceTracker, GpsOptions, Location};
pub use steps::{
    Acceleration, MagnitudeDelta, MagnitudeDeltaOptions, PeakValley, PeakValleyOptions,
    StepDetector,
};
