//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tracing::{error, info};

use crate::domain::Port;
use crate::export::{write_schedule_csv, ExportError};
use crate::planner::SchedulePlanner;
use crate::sailings::SailingError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let exports_dir = state.exports_dir.as_ref().clone();

    Router::new()
        .route("/health", get(health))
        .route("/api/origins", get(origins))
        .route("/api/destinations", get(destinations))
        .route("/api/available-services", get(available_services))
        .route("/api/schedules", post(fetch_schedules))
        .nest_service("/exports", ServeDir::new(exports_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List every known origin port.
async fn origins(State(state): State<AppState>) -> Json<PortsResponse> {
    Json(PortsResponse {
        ports: state
            .catalog
            .origins()
            .iter()
            .map(|p| p.as_str().to_string())
            .collect(),
    })
}

/// List every known destination port.
async fn destinations(State(state): State<AppState>) -> Json<PortsResponse> {
    Json(PortsResponse {
        ports: state
            .catalog
            .destinations()
            .iter()
            .map(|p| p.as_str().to_string())
            .collect(),
    })
}

/// Which services a lane's picker should offer.
async fn available_services(
    State(state): State<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let origin = parse_port("origin", query.origin)?;
    let destination = parse_port("destination", query.destination)?;

    let planner = SchedulePlanner::new(&state.catalog);
    let availability = planner.describe_availability(&origin, &destination);

    Ok(Json(AvailabilityResponse::from(availability)))
}

/// Fetch schedules for a lane, resolving the service filter first.
async fn fetch_schedules(
    State(state): State<AppState>,
    Json(request): Json<ScheduleRequest>,
) -> Result<Json<ScheduleResponse>, AppError> {
    let origin = parse_port("origin", request.origin)?;
    let destination = parse_port("destination", request.destination)?;

    let planner = SchedulePlanner::new(&state.catalog);
    let decision = planner.plan(&origin, &destination, request.service.as_deref());

    info!(
        origin = %origin.as_str(),
        destination = %destination.as_str(),
        filter = decision.effective_service.as_ref().map(|s| s.as_str()).unwrap_or("-"),
        reason = %decision.reason,
        "fetching schedules"
    );

    let sailings = if wants_msc(&request.carriers) {
        state
            .sailings
            .fetch_sailings(&origin, &destination, decision.effective_service.as_ref())
            .await?
    } else {
        Vec::new()
    };

    let path = write_schedule_csv(&state.exports_dir, &origin, &destination, &sailings)?;
    let filename = path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(Json(ScheduleResponse {
        count: sailings.len(),
        file: format!("/exports/{filename}"),
        decision: DecisionView::from(decision),
        sailings,
    }))
}

fn parse_port(field: &str, value: String) -> Result<Port, AppError> {
    Port::new(value.clone()).map_err(|_| AppError::BadRequest {
        message: format!("Invalid {field} port: {value:?}"),
    })
}

/// Whether the request asks for MSC, the only carrier wired up.
/// No carrier list means "all carriers we have".
fn wants_msc(carriers: &Option<Vec<String>>) -> bool {
    match carriers {
        None => true,
        Some(list) => list.iter().any(|c| c.eq_ignore_ascii_case("MSC")),
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<SailingError> for AppError {
    fn from(e: SailingError) -> Self {
        match e {
            SailingError::LaneNotFound { .. } => AppError::NotFound {
                message: e.to_string(),
            },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<ExportError> for AppError {
    fn from(e: ExportError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        error!(status = %status, error = %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
