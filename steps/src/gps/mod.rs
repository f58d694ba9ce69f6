//! Distance between coordinates.
//!
//! Distance between two coordinates is calculated with Haversine formula:
//!
//! ```norust
//! a = sin²(Δφ/2) + cos(φ1)⋅cos(φ2)⋅sin²(Δλ/2)
//! d = 2R⋅atan2(√a, √(1−a))
//! ```
//!
//! where:
//!
//! - R – Earth's radius (R = 6 371 000 m);
//! - λ1, φ1 – First point longitude and latitude coordinates in radians;
//! - λ2, φ2 – Second point longitude and latitude coordinates in radians;
//! - d – Distance between them along Earth's surface.

mod models;

pub use models::*;

/// Radius of Earth in meters
pub const R: f64 = 6_371_000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GpsOptions {
    /// Worst accuracy of the first fix which still allows distance tracking
    pub anchor_accuracy_meters: f64,
    /// Worst accuracy of later fixes which are used for distance
    pub distance_accuracy_meters: f64,
}

impl GpsOptions {
    pub const fn new() -> Self {
        Self {
            anchor_accuracy_meters: 50.0,
            distance_accuracy_meters: 30.0,
        }
    }

    pub const fn set_anchor_accuracy_meters(mut self, anchor_accuracy_meters: f64) -> Self {
        self.anchor_accuracy_meters = anchor_accuracy_meters;
        self
    }

    pub const fn set_distance_accuracy_meters(mut self, distance_accuracy_meters: f64) -> Self {
        self.distance_accuracy_meters = distance_accuracy_meters;
        self
    }
}

impl Default for GpsOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Tracks how far from the first fix of a session the user went.
///
/// The first fix always becomes the anchor, whatever its accuracy. If it was
/// worse than [`GpsOptions::anchor_accuracy_meters`] distance tracking stays
/// off until [`GpsDistanceTracker::reset`]. Current location is updated by
/// every fix so it can be displayed.
///
/// Distance is the furthest accepted displacement from the anchor, so it
/// never goes down within a session.
#[derive(Debug, Clone, Default)]
pub struct GpsDistanceTracker {
    options: GpsOptions,
    anchor: Option<Location>,
    current: Option<Fix>,
    distance: Distance,
    enabled: bool,
}

impl GpsDistanceTracker {
    pub const fn new(options: GpsOptions) -> Self {
        Self {
            options,
            anchor: None,
            current: None,
            distance: Distance::ZERO,
            enabled: false,
        }
    }

    /// Feed one fix. Returns `true` if distance was recalculated.
    pub fn on_fix(&mut self, fix: Fix) -> bool {
        self.current = Some(fix);

        let Some(anchor) = self.anchor else {
            self.anchor = Some(fix.location());
            self.enabled = fix.is_accurate_within(self.options.anchor_accuracy_meters);

            if self.enabled {
                log::info!(
                    "Anchor set at {:.6}, {:.6}, GPS distance tracking enabled",
                    fix.latitude,
                    fix.longitude
                );
            } else {
                log::info!(
                    "Anchor accuracy {:?} m too poor for distance calculation, using accelerometer only",
                    fix.accuracy_meters
                );
            }

            return false;
        };

        if !self.enabled {
            return false;
        }

        if !fix.is_accurate_within(self.options.distance_accuracy_meters) {
            log::debug!(
                "Fix accuracy {:?} m is worse than {} m, distance unchanged",
                fix.accuracy_meters,
                self.options.distance_accuracy_meters
            );
            return false;
        }

        let distance = haversine(&anchor, &fix.location());

        log::debug!("GPS distance from start: {:.2} m", distance.as_meters());

        if distance > self.distance {
            self.distance = distance;
        }

        true
    }

    pub const fn anchor(&self) -> Option<&Location> {
        self.anchor.as_ref()
    }

    /// Last fix, accurate or not.
    pub const fn current_location(&self) -> Option<&Fix> {
        self.current.as_ref()
    }

    pub const fn distance(&self) -> Distance {
        self.distance
    }

    /// `false` before the first fix and for a session with a poor anchor.
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.options);
    }
}

/// Calculates great-circle distance from point A to point B
pub fn haversine(from: &Location, to: &Location) -> Distance {
    let latitude_1 = from.latitude.to_radians();
    let latitude_2 = to.latitude.to_radians();
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + latitude_1.cos() * latitude_2.cos() * (d_lon / 2.0).sin().powi(2);

    Distance::from_meters(2.0 * R * a.sqrt().atan2((1.0 - a).sqrt()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_same_point() {
        let point = Location::new(49.235835445219784, 28.48586563389628);

        assert_eq!(haversine(&point, &point), Distance::ZERO);
    }

    #[test]
    fn test_haversine_symmetric() {
        let a = Location::new(51.5007, 0.1246);
        let b = Location::new(40.6892, 74.0445);

        assert_eq!(haversine(&a, &b), haversine(&b, &a));
    }

    #[test]
    fn test_haversine_flat_large() {
        let a = Location::new(51.5007, 0.1246);
        let b = Location::new(40.6892, 74.0445);

        let actual = haversine(&a, &b).as_kilometers();

        assert!((actual - 5574.84).abs() < 1.0, "{actual}");
    }

    #[test]
    fn test_haversine_flat_small() {
        let a = Location::new(49.235835445219784, 28.48586563389628);
        let b = Location::new(49.23297532196681, 28.493329182275833);

        let actual = haversine(&a, &b).as_meters();

        assert!((actual - 628.33).abs() < 0.5, "{actual}");
    }

    #[test]
    fn test_haversine_equator_millidegree() {
        let actual = haversine(&Location::new(0.0, 0.0), &Location::new(0.0, 0.001)).as_meters();

        assert!((actual - 111.19).abs() < 1.0, "{actual}");
    }

    #[test]
    fn first_fix_is_anchor() {
        let mut tracker = GpsDistanceTracker::default();

        assert!(!tracker.on_fix(Fix::new(10.0, 20.0).with_accuracy(45.0)));

        assert_eq!(tracker.anchor(), Some(&Location::new(10.0, 20.0)));
        assert_eq!(tracker.current_location().map(|this| this.accuracy_meters), Some(Some(45.0)));
        assert!(tracker.is_enabled());
        assert_eq!(tracker.distance(), Distance::ZERO);
    }

    #[test]
    fn unknown_accuracy_is_accepted() {
        let mut tracker = GpsDistanceTracker::default();

        tracker.on_fix(Fix::new(0.0, 0.0));
        assert!(tracker.on_fix(Fix::new(0.0, 0.001)));

        assert!((tracker.distance().as_meters() - 111.19).abs() < 1.0);
    }

    #[test]
    fn poor_anchor_disables_distance_for_session() {
        let mut tracker = GpsDistanceTracker::default();

        tracker.on_fix(Fix::new(0.0, 0.0).with_accuracy(80.0));
        assert!(!tracker.is_enabled());
        assert_eq!(tracker.anchor(), Some(&Location::new(0.0, 0.0)));

        assert!(!tracker.on_fix(Fix::new(0.0, 0.001).with_accuracy(5.0)));

        assert_eq!(tracker.distance(), Distance::ZERO);
        // Still shown to the user
        assert_eq!(tracker.current_location(), Some(&Fix::new(0.0, 0.001).with_accuracy(5.0)));
    }

    #[test]
    fn inaccurate_fix_keeps_distance() {
        let mut tracker = GpsDistanceTracker::default();

        tracker.on_fix(Fix::new(0.0, 0.0).with_accuracy(10.0));
        assert!(tracker.on_fix(Fix::new(0.0, 0.0005).with_accuracy(30.0)));
        let distance = tracker.distance();

        assert!(!tracker.on_fix(Fix::new(0.0, 0.01).with_accuracy(31.0)));

        assert_eq!(tracker.distance(), distance);
        assert_eq!(tracker.current_location().map(|this| this.longitude), Some(0.01));
    }

    #[test]
    fn distance_never_decreases() {
        let mut tracker = GpsDistanceTracker::default();

        tracker.on_fix(Fix::new(0.0, 0.0));
        tracker.on_fix(Fix::new(0.0, 0.002));
        let furthest = tracker.distance();

        // Walking back towards the anchor
        assert!(tracker.on_fix(Fix::new(0.0, 0.001)));

        assert_eq!(tracker.distance(), furthest);
    }

    #[test]
    fn reset_forgets_session() {
        let mut tracker = GpsDistanceTracker::new(GpsOptions::new().set_anchor_accuracy_meters(10.0));

        tracker.on_fix(Fix::new(0.0, 0.0).with_accuracy(20.0));
        assert!(!tracker.is_enabled());

        tracker.reset();

        assert!(tracker.anchor().is_none());
        assert!(tracker.current_location().is_none());
        tracker.on_fix(Fix::new(0.0, 0.0).with_accuracy(5.0));
        assert!(tracker.is_enabled());
    }
}
