use thiserror::Error;

/// Failure reported by a platform collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct PlatformError(pub String);

impl PlatformError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Why tracking didn't start.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StartError {
    #[error("Location permission required. Please enable location permissions to use this feature.")]
    PermissionDenied,
    #[error("Tracking is already running")]
    AlreadyTracking,
}

/// Problem which degrades a running session but never stops it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackingIssue {
    #[error("Background location permission not granted, using foreground only")]
    BackgroundPermissionDenied,
    #[error("GPS error, using accelerometer only: {0}")]
    LocationUnavailable(#[source] PlatformError),
    #[error("Accelerometer error: {0}")]
    SensorUnavailable(#[source] PlatformError),
    #[error("Failed to dispatch notification, alert shown instead: {0}")]
    NotificationDispatchFailure(#[source] PlatformError),
}
