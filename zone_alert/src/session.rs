use std::time::Duration;

use steps::{Distance, Fix, GpsDistanceTracker, Location, MagnitudeDelta, StepDetector};

use crate::error::TrackingIssue;

/// State of one tracking run. Owned by [`ZoneController`](crate::ZoneController),
/// everything is cleared when a run starts and when it stops.
#[derive(Debug, Clone)]
pub struct TrackingSession<D = MagnitudeDelta> {
    id: u64,
    is_tracking: bool,
    pub(crate) detector: D,
    pub(crate) gps: GpsDistanceTracker,
    fused_distance: Distance,
    pub(crate) zone_alert_active: bool,
    pub(crate) last_alert_at: Option<Duration>,
    /// Deadline of the zone alert flag. Lives and dies with the session
    pub(crate) alert_clears_at: Option<Duration>,
    pub(crate) issues: Vec<TrackingIssue>,
}

impl<D: StepDetector> TrackingSession<D> {
    pub(crate) fn new(detector: D, gps: GpsDistanceTracker) -> Self {
        let mut session = Self {
            id: 0,
            is_tracking: false,
            detector,
            gps,
            fused_distance: Distance::ZERO,
            zone_alert_active: false,
            last_alert_at: None,
            alert_clears_at: None,
            issues: Vec::new(),
        };
        session.clear(Duration::ZERO);
        session
    }

    pub(crate) fn begin(&mut self, id: u64, now: Duration) {
        self.clear(now);
        self.id = id;
        self.is_tracking = true;
    }

    pub(crate) fn end(&mut self, now: Duration) {
        self.clear(now);
        self.is_tracking = false;
    }

    fn clear(&mut self, now: Duration) {
        self.detector.reset(now);
        self.gps.reset();
        self.fused_distance = Distance::ZERO;
        self.zone_alert_active = false;
        self.last_alert_at = None;
        self.alert_clears_at = None;
        self.issues.clear();
    }

    /// Larger of step and GPS estimates.
    pub(crate) fn refresh_fused_distance(&mut self) -> Distance {
        self.fused_distance = Distance::from_meters(
            self.step_distance_meters().max(self.gps_distance_meters()),
        );
        self.fused_distance
    }

    pub const fn id(&self) -> u64 {
        self.id
    }

    pub const fn is_tracking(&self) -> bool {
        self.is_tracking
    }

    pub fn step_count(&self) -> u64 {
        self.detector.step_count()
    }

    pub fn step_distance_meters(&self) -> f64 {
        self.detector.step_distance_meters()
    }

    pub const fn gps_distance_meters(&self) -> f64 {
        self.gps.distance().as_meters()
    }

    pub const fn fused_distance_meters(&self) -> f64 {
        self.fused_distance.as_meters()
    }

    pub const fn anchor(&self) -> Option<&Location> {
        self.gps.anchor()
    }

    pub const fn current_location(&self) -> Option<&Fix> {
        self.gps.current_location()
    }

    pub const fn is_gps_distance_enabled(&self) -> bool {
        self.gps.is_enabled()
    }

    pub const fn zone_alert_active(&self) -> bool {
        self.zone_alert_active
    }

    pub const fn last_alert_at(&self) -> Option<Duration> {
        self.last_alert_at
    }

    /// Non fatal problems met during this session.
    pub fn issues(&self) -> &[TrackingIssue] {
        &self.issues
    }

    pub const fn detector(&self) -> &D {
        &self.detector
    }
}

/// What the UI shows.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub is_tracking: bool,
    pub current_location: Option<Fix>,
    pub zone_alert_triggered: bool,
    pub distance_travelled_meters: f64,
    pub distance_threshold_meters: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use steps::Acceleration;

    fn session() -> TrackingSession {
        TrackingSession::new(MagnitudeDelta::default(), GpsDistanceTracker::default())
    }

    #[test]
    fn fused_is_larger_estimate() {
        let mut session = session();
        session.begin(1, Duration::ZERO);

        session.detector.on_sample(Acceleration::new(0.0, 0.0, 1.0), Duration::ZERO);
        session.detector.on_sample(Acceleration::new(0.0, 0.0, 2.0), Duration::ZERO);
        assert_eq!(session.refresh_fused_distance().as_meters(), 0.7);

        session.gps.on_fix(Fix::new(0.0, 0.0));
        session.gps.on_fix(Fix::new(0.0, 0.001));
        let fused = session.refresh_fused_distance().as_meters();

        assert_eq!(fused, session.gps_distance_meters());
        assert_eq!(fused, session.fused_distance_meters());
        assert!(fused > 100.0);
    }

    #[test]
    fn nothing_survives_end() {
        let mut session = session();
        session.begin(7, Duration::ZERO);
        session.detector.on_sample(Acceleration::new(0.0, 0.0, 1.0), Duration::ZERO);
        session.detector.on_sample(Acceleration::new(0.0, 0.0, 2.0), Duration::ZERO);
        session.gps.on_fix(Fix::new(0.0, 0.0));
        session.refresh_fused_distance();
        session.zone_alert_active = true;
        session.last_alert_at = Some(Duration::from_secs(1));
        session.alert_clears_at = Some(Duration::from_secs(6));
        session.issues.push(TrackingIssue::BackgroundPermissionDenied);

        session.end(Duration::from_secs(2));

        assert!(!session.is_tracking());
        assert_eq!(session.step_count(), 0);
        assert_eq!(session.step_distance_meters(), 0.0);
        assert_eq!(session.gps_distance_meters(), 0.0);
        assert_eq!(session.fused_distance_meters(), 0.0);
        assert!(session.anchor().is_none());
        assert!(session.current_location().is_none());
        assert!(session.detector().previous().is_none());
        assert!(!session.zone_alert_active());
        assert!(session.last_alert_at().is_none());
        assert!(session.alert_clears_at.is_none());
        assert!(session.issues().is_empty());
    }
}
