use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// Last anchor point recorded for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserLocationState {
    pub user_id: String,
    pub last_location: GeoPoint,
    pub timestamp: DateTime<Utc>,
}

impl UserLocationState {
    pub fn new(user_id: impl Into<String>, last_location: GeoPoint, timestamp: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.into(),
            last_location,
            timestamp,
        }
    }

    /// Fractional minutes between the stored timestamp and `now`.
    ///
    /// Negative when `now` precedes the stored timestamp.
    pub fn minutes_since(&self, now: DateTime<Utc>) -> f64 {
        (now - self.timestamp).num_milliseconds() as f64 / 60_000.0
    }
}

/// Result of feeding one location report to the tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum TrackOutcome {
    /// First report for this user; an anchor was stored.
    Initialized,
    /// The anchor moved to the reported location.
    Updated,
    /// The user dwelled near the anchor long enough. The anchor is left as is.
    Triggered { location: GeoPoint },
}

impl TrackOutcome {
    pub fn kind(&self) -> &'static str {
        match self {
            TrackOutcome::Initialized => "Initialized",
            TrackOutcome::Updated => "Updated",
            TrackOutcome::Triggered { .. } => "Triggered",
        }
    }

    pub fn is_triggered(&self) -> bool {
        matches!(self, TrackOutcome::Triggered { .. })
    }
}

/// Inbound location report as sent by clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationReport {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl LocationReport {
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}
