//! HTTP layer over the core library.
//!
//! Routes:
//! - `POST /track-user-location` feeds the dwell-time tracker
//! - `POST /generate-quiz` asks the generation service for a quiz
//! - `GET /health` liveness and tracked user count
//!
//! Every other method and path answers `404 {"error": "Not Found"}`.

mod http_api;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::Response,
    routing::{get, post},
    Router,
};
use chrono::Utc;
use geoquiz_core::{Config, GenerationError, LocationReport, LocationTracker, QuizGenerator};
use tracing::{info, warn};

use http_api::{GenerateQuizRequest, HealthReport, TrackResponse, GENERATE_FAILED, TRACK_FAILED};

/// Shared by all handlers.
pub struct AppState {
    pub tracker: LocationTracker,
    /// Kept as an error when no API key is available so tracking still works.
    pub generator: Result<QuizGenerator, GenerationError>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        let generator = QuizGenerator::from_env(config.generation.clone());
        match &generator {
            Ok(generator) => info!(model = %generator.config().model, "quiz generation enabled"),
            Err(err) => warn!("quiz generation disabled: {err}"),
        }
        Self {
            tracker: LocationTracker::in_memory(config.tracker.clone()),
            generator,
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/track-user-location", post(track_user_location).fallback(fallback))
        .route("/generate-quiz", post(generate_quiz).fallback(fallback))
        .route("/health", get(health).fallback(fallback))
        .fallback(fallback)
        .with_state(state)
}

/// Bind, serve until Ctrl-C, and sweep stale anchors when a TTL is set.
pub async fn serve(config: Config, bind: &str) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState::from_config(&config));

    if config.tracker.state_ttl_minutes.is_some() {
        let state = state.clone();
        let every = Duration::from_secs(config.server.eviction_interval_secs.max(1));
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            loop {
                interval.tick().await;
                state.tracker.evict_stale(Utc::now());
            }
        });
    }

    let listener = tokio::net::TcpListener::bind(bind).await?;
    let local_addr = listener.local_addr()?;
    let thresholds = state.tracker.config();
    info!(
        proximity_meters = thresholds.proximity_meters,
        dwell_minutes = thresholds.dwell_minutes,
        "serving on http://{local_addr}"
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for ctrl-c: {err}");
        std::future::pending::<()>().await;
    }
}

async fn track_user_location(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let report: LocationReport = match serde_json::from_slice(&body) {
        Ok(report) => report,
        Err(err) => {
            return http_api::error_response(
                StatusCode::BAD_REQUEST,
                TRACK_FAILED,
                format!("Invalid JSON payload: {err}"),
            )
        }
    };
    if let Err(details) = http_api::validate_report(&report.user_id, report.latitude, report.longitude) {
        return http_api::error_response(StatusCode::BAD_REQUEST, TRACK_FAILED, details);
    }

    let outcome = state.tracker.record(&report, Utc::now());
    http_api::build_response(StatusCode::OK, &TrackResponse::from(outcome))
}

async fn generate_quiz(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let request: GenerateQuizRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(err) => {
            return http_api::error_response(
                StatusCode::BAD_REQUEST,
                GENERATE_FAILED,
                format!("Invalid JSON payload: {err}"),
            )
        }
    };

    let generator = match &state.generator {
        Ok(generator) => generator,
        Err(err) => {
            return http_api::error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                GENERATE_FAILED,
                err.to_string(),
            )
        }
    };

    match generator.generate(&request.location_keyword).await {
        Ok(quiz) => http_api::build_response(StatusCode::OK, &quiz),
        Err(GenerationError::EmptyKeyword) => http_api::error_response(
            StatusCode::BAD_REQUEST,
            GENERATE_FAILED,
            GenerationError::EmptyKeyword.to_string(),
        ),
        Err(err) => {
            warn!("quiz generation failed: {err}");
            http_api::error_response(StatusCode::INTERNAL_SERVER_ERROR, GENERATE_FAILED, err.to_string())
        }
    }
}

async fn health(State(state): State<Arc<AppState>>) -> Response {
    http_api::build_response(
        StatusCode::OK,
        &HealthReport {
            status: "ok",
            tracked_users: state.tracker.tracked_users(),
        },
    )
}

async fn fallback() -> Response {
    http_api::not_found()
}
