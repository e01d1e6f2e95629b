use axum::{
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
};
use geoquiz_core::{GeoPoint, TrackOutcome};
use serde::{Deserialize, Serialize};

pub(crate) const TRACK_FAILED: &str = "Failed to track user location";
pub(crate) const GENERATE_FAILED: &str = "Quiz generation failed";

/// Body of `POST /generate-quiz`.
#[derive(Debug, Deserialize)]
pub(crate) struct GenerateQuizRequest {
    #[serde(rename = "locationKeyword")]
    pub location_keyword: String,
}

/// Body returned by `POST /track-user-location`.
#[derive(Debug, Serialize)]
pub(crate) struct TrackResponse {
    pub message: &'static str,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
}

impl From<TrackOutcome> for TrackResponse {
    fn from(outcome: TrackOutcome) -> Self {
        let kind = outcome.kind();
        match outcome {
            TrackOutcome::Initialized => Self {
                message: "User location initialized.",
                kind,
                location: None,
            },
            TrackOutcome::Updated => Self {
                message: "Location updated.",
                kind,
                location: None,
            },
            TrackOutcome::Triggered { location } => Self {
                message: "Trigger quiz",
                kind,
                location: Some(location),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ErrorEnvelope {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HealthReport {
    pub status: &'static str,
    pub tracked_users: usize,
}

pub(crate) fn build_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_vec(body) {
        Ok(bytes) => (status, [(CONTENT_TYPE, "application/json")], bytes).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

pub(crate) fn error_response(status: StatusCode, error: &str, details: impl Into<String>) -> Response {
    build_response(
        status,
        &ErrorEnvelope {
            error: error.to_string(),
            details: Some(details.into()),
        },
    )
}

pub(crate) fn not_found() -> Response {
    build_response(
        StatusCode::NOT_FOUND,
        &ErrorEnvelope {
            error: "Not Found".to_string(),
            details: None,
        },
    )
}

/// Reject coordinates the tracker would otherwise accept silently.
pub(crate) fn validate_report(user_id: &str, latitude: f64, longitude: f64) -> Result<(), String> {
    if user_id.trim().is_empty() {
        return Err("userId must not be empty".into());
    }
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(format!("latitude {latitude} is outside [-90, 90]"));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(format!("longitude {longitude} is outside [-180, 180]"));
    }
    Ok(())
}
