//! Services the controller needs from the device.
//!
//! Sensor and location streams don't call back into the controller. Once
//! subscribed they post into an [`EventQueue`](crate::EventQueue) owned by the
//! host, see [`crate::event`].

use std::time::Duration;

use steps::Fix;

use crate::error::PlatformError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
    Undetermined,
}

/// How hard the location provider should try.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AccuracyHint {
    Lowest,
    Low,
    #[default]
    Balanced,
    High,
    Highest,
}

/// Continuous location updates settings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WatchOptions {
    pub accuracy: AccuracyHint,
    /// Minimal time between two updates
    pub time_interval: Duration,
    /// Minimal movement between two updates
    pub distance_interval_meters: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    pub title: &'static str,
    pub body: &'static str,
}

pub const ZONE_ALERT: Notification = Notification {
    title: "⚠️ AQI Zone Alert!",
    body: "You are entering a yellow AQI zone.",
};

pub const PERMISSION_REQUIRED: Notification = Notification {
    title: "Location Permission Required",
    body: "Please enable location permissions to use this feature.",
};

pub trait PermissionProvider {
    fn request_foreground_location(&mut self) -> Result<PermissionStatus, PlatformError>;

    fn request_background_location(&mut self) -> Result<PermissionStatus, PlatformError>;
}

pub trait AccelerometerSource {
    fn set_update_interval(&mut self, interval: Duration);

    /// Start posting [`Event::Acceleration`](crate::Event::Acceleration).
    fn subscribe(&mut self) -> Result<(), PlatformError>;

    fn unsubscribe(&mut self);
}

pub trait LocationSource {
    /// One shot position.
    fn current_position(&mut self, accuracy: AccuracyHint) -> Result<Fix, PlatformError>;

    /// Start posting [`Event::Location`](crate::Event::Location).
    fn watch_position(&mut self, options: &WatchOptions) -> Result<(), PlatformError>;

    fn clear_watch(&mut self);
}

pub trait Notifier {
    /// Fire a local notification right away.
    fn schedule(&mut self, notification: &Notification) -> Result<(), PlatformError>;

    /// Blocking dialog, can't fail.
    fn alert(&mut self, notification: &Notification);
}

/// Everything the device gives to [`ZoneController`](crate::ZoneController).
pub trait Platform: PermissionProvider + AccelerometerSource + LocationSource + Notifier {}

impl<T> Platform for T where T: PermissionProvider + AccelerometerSource + LocationSource + Notifier {}
