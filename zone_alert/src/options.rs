use std::time::Duration;

use steps::{GpsOptions, MagnitudeDeltaOptions};

use crate::platform::{AccuracyHint, WatchOptions};

/// How long the zone alert flag stays raised after an alert
pub const ALERT_AUTO_CLEAR: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneOptions {
    /// Change of acceleration magnitude between two readings which counts as a step
    pub step_magnitude_delta: f64,
    /// Estimated meters per step
    pub step_length_meters: f64,
    /// Distance from session start after which user is alerted
    pub zone_distance_threshold_meters: f64,
    /// Minimal time between two dispatched alerts
    pub alert_cooldown: Duration,
    /// Worst accuracy of the first fix which still allows GPS distance
    pub gps_acceptable_accuracy_meters: f64,
    /// Worst accuracy of a fix used in GPS distance
    pub gps_distance_accuracy_meters: f64,
    pub accelerometer_interval: Duration,
    pub watch: WatchOptions,
}

impl ZoneOptions {
    pub const fn new() -> Self {
        Self {
            step_magnitude_delta: 0.5,
            step_length_meters: 0.7,
            zone_distance_threshold_meters: 20.0,
            alert_cooldown: Duration::from_secs(30),
            gps_acceptable_accuracy_meters: 50.0,
            gps_distance_accuracy_meters: 30.0,
            accelerometer_interval: Duration::from_millis(100),
            watch: WatchOptions {
                accuracy: AccuracyHint::Balanced,
                time_interval: Duration::from_millis(5000),
                distance_interval_meters: 5.0,
            },
        }
    }

    pub const fn set_step_magnitude_delta(mut self, step_magnitude_delta: f64) -> Self {
        self.step_magnitude_delta = step_magnitude_delta;
        self
    }

    pub const fn set_step_length_meters(mut self, step_length_meters: f64) -> Self {
        self.step_length_meters = step_length_meters;
        self
    }

    pub const fn set_zone_distance_threshold_meters(
        mut self,
        zone_distance_threshold_meters: f64,
    ) -> Self {
        self.zone_distance_threshold_meters = zone_distance_threshold_meters;
        self
    }

    pub const fn set_alert_cooldown(mut self, alert_cooldown: Duration) -> Self {
        self.alert_cooldown = alert_cooldown;
        self
    }

    pub const fn set_gps_acceptable_accuracy_meters(mut self, meters: f64) -> Self {
        self.gps_acceptable_accuracy_meters = meters;
        self
    }

    pub const fn set_gps_distance_accuracy_meters(mut self, meters: f64) -> Self {
        self.gps_distance_accuracy_meters = meters;
        self
    }

    pub const fn set_accelerometer_interval(mut self, accelerometer_interval: Duration) -> Self {
        self.accelerometer_interval = accelerometer_interval;
        self
    }

    pub const fn set_watch(mut self, watch: WatchOptions) -> Self {
        self.watch = watch;
        self
    }

    pub const fn magnitude_delta_options(&self) -> MagnitudeDeltaOptions {
        MagnitudeDeltaOptions::new()
            .set_delta(self.step_magnitude_delta)
            .set_step_length_meters(self.step_length_meters)
    }

    pub const fn gps_options(&self) -> GpsOptions {
        GpsOptions::new()
            .set_anchor_accuracy_meters(self.gps_acceptable_accuracy_meters)
            .set_distance_accuracy_meters(self.gps_distance_accuracy_meters)
    }
}

impl Default for ZoneOptions {
    fn default() -> Self {
        Self::new()
    }
}
