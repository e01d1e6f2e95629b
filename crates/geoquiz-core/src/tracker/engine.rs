//! Dwell-time trigger engine.
//!
//! Each user has one anchor point. A report close to the anchor, arriving long
//! enough after it was set, triggers; anything else moves the anchor.
//!
//! ## Decision table
//!
//! ```text
//! no anchor                              -> Initialized  (anchor := report)
//! distance >= proximity                  -> Updated      (anchor := report)
//! distance <  proximity, elapsed < dwell -> Updated      (anchor := report)
//! distance <  proximity, elapsed >= dwell-> Triggered    (anchor unchanged)
//! ```
//!
//! The anchor is deliberately not advanced on `Triggered`, so every later
//! report from the same spot keeps triggering until the user moves away.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::state::{LocationReport, TrackOutcome, UserLocationState};
use super::store::{InMemoryLocationStore, LocationStore};
use crate::config::TrackerConfig;
use crate::geo::{distance_meters, GeoPoint};

/// Pure decision for one report.
///
/// Returns the outcome and the state to store, `None` meaning "keep the
/// current state".
pub fn decide(
    previous: Option<&UserLocationState>,
    user_id: &str,
    location: GeoPoint,
    now: DateTime<Utc>,
    config: &TrackerConfig,
) -> (TrackOutcome, Option<UserLocationState>) {
    let Some(previous) = previous else {
        return (
            TrackOutcome::Initialized,
            Some(UserLocationState::new(user_id, location, now)),
        );
    };

    let distance = distance_meters(&previous.last_location, &location);
    if distance < config.proximity_meters {
        let elapsed = previous.minutes_since(now);
        if elapsed >= config.dwell_minutes {
            return (TrackOutcome::Triggered { location }, None);
        }
    }

    (
        TrackOutcome::Updated,
        Some(UserLocationState::new(user_id, location, now)),
    )
}

/// Tracks user anchors and decides when a dwell triggers.
pub struct LocationTracker<S = InMemoryLocationStore> {
    store: S,
    config: TrackerConfig,
}

impl LocationTracker<InMemoryLocationStore> {
    /// Tracker backed by a fresh in-memory store.
    pub fn in_memory(config: TrackerConfig) -> Self {
        Self::new(InMemoryLocationStore::new(), config)
    }
}

impl Default for LocationTracker<InMemoryLocationStore> {
    fn default() -> Self {
        Self::in_memory(TrackerConfig::default())
    }
}

impl<S: LocationStore> LocationTracker<S> {
    pub fn new(store: S, config: TrackerConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Number of users with a stored anchor.
    pub fn tracked_users(&self) -> usize {
        self.store.len()
    }

    /// Feed one report. The read-decide-write step is atomic per user.
    pub fn update(&self, user_id: &str, location: GeoPoint, now: DateTime<Utc>) -> TrackOutcome {
        let mut outcome = TrackOutcome::Initialized;
        self.store.modify(user_id, &mut |previous| {
            let (decided, next) = decide(previous, user_id, location, now, &self.config);
            outcome = decided;
            next
        });

        match &outcome {
            TrackOutcome::Triggered { location } => {
                info!(
                    user_id,
                    latitude = location.latitude,
                    longitude = location.longitude,
                    "dwell threshold reached"
                );
            }
            other => debug!(user_id, outcome = other.kind(), "location recorded"),
        }
        outcome
    }

    pub fn record(&self, report: &LocationReport, now: DateTime<Utc>) -> TrackOutcome {
        self.update(&report.user_id, report.location(), now)
    }

    /// Drop anchors older than `state_ttl_minutes`. Returns the number removed;
    /// always zero when no TTL is configured.
    pub fn evict_stale(&self, now: DateTime<Utc>) -> usize {
        let Some(ttl) = self.config.state_ttl_minutes else {
            return 0;
        };
        let ttl = ttl as f64;
        let removed = self.store.retain(&mut |state| state.minutes_since(now) <= ttl);
        if removed > 0 {
            debug!(removed, "evicted stale user anchors");
        }
        removed
    }
}
