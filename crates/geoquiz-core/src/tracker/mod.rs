//! Location tracking and dwell-time triggering.

mod engine;
mod state;
mod store;

pub use engine::{decide, LocationTracker};
pub use state::{LocationReport, TrackOutcome, UserLocationState};
pub use store::{InMemoryLocationStore, LocationStore};
