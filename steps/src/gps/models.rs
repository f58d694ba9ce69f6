/// Point on the Earth surface in degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<&Fix> for Location {
    fn from(value: &Fix) -> Self {
        Self {
            latitude: value.latitude,
            longitude: value.longitude,
        }
    }
}

/// One reading reported by a location provider.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fix {
    pub latitude: f64,
    pub longitude: f64,
    /// Radius of uncertainty in meters. `None` when the provider doesn't know
    pub accuracy_meters: Option<f64>,
}

impl Fix {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            accuracy_meters: None,
        }
    }

    pub const fn with_accuracy(mut self, accuracy_meters: f64) -> Self {
        self.accuracy_meters = Some(accuracy_meters);
        self
    }

    pub fn location(&self) -> Location {
        Location::from(self)
    }

    /// Unknown accuracy passes any limit.
    pub fn is_accurate_within(&self, limit_meters: f64) -> bool {
        match self.accuracy_meters {
            Some(accuracy) => accuracy <= limit_meters,
            None => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Distance(f64);

impl Distance {
    pub const ZERO: Self = Self(0.0);

    pub const fn from_meters(meters: f64) -> Self {
        Self(meters)
    }

    pub const fn from_kilometers(km: f64) -> Self {
        Self(km * 1000.0)
    }

    pub const fn as_meters(self) -> f64 {
        self.0
    }

    pub const fn as_kilometers(self) -> f64 {
        self.0 / 1000.0
    }
}
