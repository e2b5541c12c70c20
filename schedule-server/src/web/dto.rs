//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::planner::{Availability, FilterDecision};
use crate::sailings::SailingRecord;

/// Query for the lane availability endpoint.
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    /// Port of loading
    pub origin: String,

    /// Port of discharge
    pub destination: String,
}

/// What a service picker should offer for a lane.
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    /// Services to offer, absent when the lane is unmapped
    pub services: Option<Vec<String>>,

    /// Whether the lane is in the catalog
    pub mapped: bool,

    /// Whether the origin is a connection port
    pub is_connection: bool,
}

impl From<Availability> for AvailabilityResponse {
    fn from(availability: Availability) -> Self {
        AvailabilityResponse {
            services: availability
                .services
                .map(|s| s.iter().map(|svc| svc.as_str().to_string()).collect()),
            mapped: availability.mapped,
            is_connection: availability.is_connection,
        }
    }
}

/// Request to fetch schedules for a lane.
#[derive(Debug, Deserialize)]
pub struct ScheduleRequest {
    /// Port of loading
    pub origin: String,

    /// Port of discharge
    pub destination: String,

    /// Carriers to query (defaults to MSC, the only one wired up)
    pub carriers: Option<Vec<String>>,

    /// Requested service, or "ALL" / absent for no preference
    pub service: Option<String>,
}

/// How the requested service was resolved.
#[derive(Debug, Serialize)]
pub struct DecisionView {
    /// Whether the fetch was narrowed to one service
    pub should_filter: bool,

    /// The service filtered by, in canonical casing
    pub effective_service: Option<String>,

    /// Services the catalog knows for this lane
    pub available_services: Option<Vec<String>>,

    /// Why, as a stable identifier (e.g. "connection-route")
    pub reason: String,
}

impl From<FilterDecision> for DecisionView {
    fn from(decision: FilterDecision) -> Self {
        DecisionView {
            should_filter: decision.should_filter,
            effective_service: decision
                .effective_service
                .map(|s| s.as_str().to_string()),
            available_services: decision
                .available_services
                .map(|s| s.iter().map(|svc| svc.as_str().to_string()).collect()),
            reason: decision.reason.as_str().to_string(),
        }
    }
}

/// Response for a schedule fetch.
#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    /// Number of sailings found
    pub count: usize,

    /// Download path of the export written for this fetch
    pub file: String,

    /// How the service filter was resolved
    pub decision: DecisionView,

    /// The sailings themselves
    pub sailings: Vec<SailingRecord>,
}

/// Response listing known ports.
#[derive(Debug, Serialize)]
pub struct PortsResponse {
    pub ports: Vec<String>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
