//! # Zone alert
//!
//! Alerts the user that they probably moved into another air quality zone.
//!
//! Distance travelled since tracking started is estimated twice:
//!
//! - from steps, see [`steps::MagnitudeDelta`]
//! - from GPS, as great-circle distance from the first fix, see [`steps::GpsDistanceTracker`]
//!
//! Larger of the two is compared against a threshold. Crossing it dispatches a
//! notification, no more often than once per cooldown.
//!
//! ```no_run
//! # use std::time::Duration;
//! # use zone_alert::{EventQueue, ZoneController, ZoneOptions, platform::Platform};
//! # fn run(platform: impl Platform, queue: &mut EventQueue) -> Result<(), zone_alert::StartError> {
//! let mut controller = ZoneController::new(platform, ZoneOptions::default());
//!
//! controller.start(Duration::ZERO)?;
//! // device streams post into `queue`
//! queue.drain_into(&mut controller);
//!
//! let snapshot = controller.snapshot();
//! println!("{} / {} m", snapshot.distance_travelled_meters, snapshot.distance_threshold_meters);
//!
//! controller.stop(Duration::from_secs(60));
//! # Ok(())
//! # }
//! ```

mod controller;
mod error;
pub mod event;
mod options;
pub mod platform;
mod session;

pub use controller::*;
pub use error::*;
pub use event::{Event, EventQueue};
pub use options::*;
pub use session::*;
