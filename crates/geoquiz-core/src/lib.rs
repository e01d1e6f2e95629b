//! # GeoQuiz Core Library
//!
//! This library provides the core logic of the GeoQuiz service: deciding when
//! a user has lingered at a place long enough to be offered a quiz, and turning
//! generated quiz text into structured questions. The CLI crate wraps it in an
//! HTTP server and a handful of offline commands.
//!
//! ## Architecture
//!
//! - **Tracker**: per-user anchor points and the dwell-time decision. Pure and
//!   synchronous; the caller supplies "now".
//! - **Quiz parser**: a line scanner over loosely formatted generated text
//! - **Generation**: client for an OpenAI-compatible chat-completion endpoint
//! - **Config**: TOML configuration with dot-path access
//!
//! ## Key Components
//!
//! - [`LocationTracker`]: dwell-time trigger engine
//! - [`parse_quiz`]: quiz text extraction
//! - [`QuizGenerator`]: text-generation client
//! - [`Config`]: application configuration management

pub mod config;
pub mod error;
pub mod generation;
pub mod geo;
pub mod quiz;
pub mod tracker;

pub use config::{Config, GenerationConfig, ServerConfig, TrackerConfig};
pub use error::{ConfigError, CoreError, GenerationError};
pub use generation::QuizGenerator;
pub use geo::{distance_meters, GeoPoint};
pub use quiz::{parse_quiz, GeneratedQuiz, OptionLabel, QuizOptions, QuizQuestion};
pub use tracker::{
    InMemoryLocationStore, LocationReport, LocationStore, LocationTracker, TrackOutcome,
    UserLocationState,
};
