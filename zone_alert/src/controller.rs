use std::time::Duration;

use steps::{Acceleration, Fix, GpsDistanceTracker, MagnitudeDelta, StepDetector};

use crate::{
    error::{StartError, TrackingIssue},
    event::Event,
    options::{ALERT_AUTO_CLEAR, ZoneOptions},
    platform::{PERMISSION_REQUIRED, PermissionStatus, Platform, ZONE_ALERT},
    session::{Snapshot, TrackingSession},
};

/// Hybrid GPS and accelerometer zone change tracker.
///
/// Two states: idle and tracking. While tracking every step and every
/// accepted fix recalculates fused distance, and once it reaches
/// [`ZoneOptions::zone_distance_threshold_meters`] an alert is dispatched,
/// at most once per [`ZoneOptions::alert_cooldown`].
///
/// All time is passed in by the caller as a duration since any fixed epoch.
#[derive(Debug)]
pub struct ZoneController<P: Platform, D: StepDetector = MagnitudeDelta> {
    platform: P,
    options: ZoneOptions,
    session: TrackingSession<D>,
    sessions_started: u64,
    accelerometer_subscribed: bool,
    location_watched: bool,
}

impl<P: Platform> ZoneController<P> {
    pub fn new(platform: P, options: ZoneOptions) -> Self {
        let detector = MagnitudeDelta::new(options.magnitude_delta_options());
        Self::with_detector(platform, options, detector)
    }
}

impl<P: Platform, D: StepDetector> ZoneController<P, D> {
    /// Use another step detection strategy.
    pub fn with_detector(platform: P, options: ZoneOptions, detector: D) -> Self {
        Self {
            platform,
            session: TrackingSession::new(detector, GpsDistanceTracker::new(options.gps_options())),
            options,
            sessions_started: 0,
            accelerometer_subscribed: false,
            location_watched: false,
        }
    }

    /// Ask for permissions and start a new session.
    ///
    /// Only missing foreground location permission stops the session from
    /// starting. Sensor, location and background permission problems leave
    /// the session running on what is left, see [`TrackingSession::issues`].
    pub fn start(&mut self, now: Duration) -> Result<(), StartError> {
        if self.session.is_tracking() {
            log::warn!("Start requested while tracking session {}", self.session.id());
            return Err(StartError::AlreadyTracking);
        }

        let background_issue = self.request_permissions()?;

        self.sessions_started += 1;
        self.session.begin(self.sessions_started, now);

        log::info!(
            "Starting hybrid tracking (GPS + Accelerometer), session {}",
            self.session.id()
        );

        if let Some(issue) = background_issue {
            self.record(issue);
        }

        self.platform
            .set_update_interval(self.options.accelerometer_interval);

        match self.platform.subscribe() {
            Ok(()) => {
                self.accelerometer_subscribed = true;
                log::info!("Accelerometer tracking started");
            }
            Err(e) => self.record(TrackingIssue::SensorUnavailable(e)),
        }

        match self.platform.current_position(self.options.watch.accuracy) {
            Ok(fix) => {
                log::info!(
                    "GPS position obtained: {:.6}, {:.6}, accuracy {:?}",
                    fix.latitude,
                    fix.longitude,
                    fix.accuracy_meters
                );

                self.session.gps.on_fix(fix);

                match self.platform.watch_position(&self.options.watch) {
                    Ok(()) => {
                        self.location_watched = true;
                        log::info!("GPS tracking started");
                    }
                    Err(e) => self.record(TrackingIssue::LocationUnavailable(e)),
                }
            }
            Err(e) => self.record(TrackingIssue::LocationUnavailable(e)),
        }

        log::info!("Hybrid tracking started successfully");

        Ok(())
    }

    /// Unsubscribe from everything and forget the session. Safe to call any time.
    pub fn stop(&mut self, now: Duration) {
        if self.location_watched {
            self.platform.clear_watch();
            self.location_watched = false;
        }

        if self.accelerometer_subscribed {
            self.platform.unsubscribe();
            self.accelerometer_subscribed = false;
        }

        if self.session.is_tracking() {
            log::info!("Tracking stopped, session {}", self.session.id());
        }

        self.session.end(now);
    }

    pub fn handle(&mut self, event: Event) {
        match event {
            Event::Acceleration { sample, timestamp } => self.on_acceleration(sample, timestamp),
            Event::Location { fix, timestamp } => self.on_location(fix, timestamp),
            Event::Tick { timestamp } => self.tick(timestamp),
        }
    }

    /// Fire timers which are due.
    pub fn tick(&mut self, now: Duration) {
        if let Some(clears_at) = self.session.alert_clears_at
            && now >= clears_at
        {
            self.session.zone_alert_active = false;
            self.session.alert_clears_at = None;
            log::debug!("Zone alert cleared");
        }
    }

    pub fn on_acceleration(&mut self, sample: Acceleration, now: Duration) {
        self.tick(now);

        if !self.accelerometer_subscribed {
            log::debug!("Acceleration dropped, accelerometer is not subscribed");
            return;
        }

        if self.session.detector.on_sample(sample, now) {
            self.update_distance(now);
        }
    }

    pub fn on_location(&mut self, fix: Fix, now: Duration) {
        self.tick(now);

        if !self.location_watched {
            log::debug!("Fix dropped, location is not watched");
            return;
        }

        log::debug!(
            "GPS update: {:.6}, {:.6}, accuracy {:?}",
            fix.latitude,
            fix.longitude,
            fix.accuracy_meters
        );

        if self.session.gps.on_fix(fix) {
            self.update_distance(now);
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            is_tracking: self.session.is_tracking(),
            current_location: self.session.current_location().copied(),
            zone_alert_triggered: self.session.zone_alert_active(),
            distance_travelled_meters: self.session.fused_distance_meters(),
            distance_threshold_meters: self.options.zone_distance_threshold_meters,
        }
    }

    pub const fn session(&self) -> &TrackingSession<D> {
        &self.session
    }

    pub const fn is_tracking(&self) -> bool {
        self.session.is_tracking()
    }

    pub const fn options(&self) -> &ZoneOptions {
        &self.options
    }

    pub const fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    /// Returns issue for missing background permission, which doesn't stop tracking.
    fn request_permissions(&mut self) -> Result<Option<TrackingIssue>, StartError> {
        let foreground = match self.platform.request_foreground_location() {
            Ok(status) => status,
            Err(e) => {
                log::warn!("Permission request error: {e}");
                return Err(StartError::PermissionDenied);
            }
        };

        if foreground != PermissionStatus::Granted {
            log::warn!("Foreground location permission is {foreground:?}");
            self.platform.alert(&PERMISSION_REQUIRED);
            return Err(StartError::PermissionDenied);
        }

        match self.platform.request_background_location() {
            Ok(PermissionStatus::Granted) => Ok(None),
            Ok(_) => Ok(Some(TrackingIssue::BackgroundPermissionDenied)),
            Err(e) => {
                log::debug!("Background permission request error: {e}");
                Ok(Some(TrackingIssue::BackgroundPermissionDenied))
            }
        }
    }

    fn update_distance(&mut self, now: Duration) {
        let distance = self.session.refresh_fused_distance();

        if distance.as_meters() >= self.options.zone_distance_threshold_meters {
            log::info!(
                "Threshold reached at {:.2} m, triggering alert",
                distance.as_meters()
            );
            self.raise_alert(now);
        }
    }

    fn raise_alert(&mut self, now: Duration) {
        if let Some(last_alert_at) = self.session.last_alert_at
            && now.saturating_sub(last_alert_at) < self.options.alert_cooldown
        {
            log::debug!("Zone alert suppressed by cooldown");
            return;
        }

        self.session.last_alert_at = Some(now);
        self.session.zone_alert_active = true;
        self.session.alert_clears_at = Some(now + ALERT_AUTO_CLEAR);

        if let Err(e) = self.platform.schedule(&ZONE_ALERT) {
            self.platform.alert(&ZONE_ALERT);
            self.record(TrackingIssue::NotificationDispatchFailure(e));
        }
    }

    fn record(&mut self, issue: TrackingIssue) {
        log::warn!("{issue}");
        self.session.issues.push(issue);
    }
}

impl<P: Platform, D: StepDetector> Drop for ZoneController<P, D> {
    fn drop(&mut self) {
        if self.accelerometer_subscribed {
            self.platform.unsubscribe();
        }

        if self.location_watched {
            self.platform.clear_watch();
        }
    }
}
