//! The outcome of resolving a schedule request against the catalog.

use std::collections::BTreeSet;
use std::fmt;

use crate::domain::ServiceId;

/// Why the planner did or did not settle on a service filter.
///
/// Exactly one reason accompanies every decision, so callers (and logs)
/// can always tell an intentional unfiltered fetch from a degraded one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterReason {
    /// The origin is a connection port; sailings there can run under any
    /// service, so filtering would hide valid departures.
    ConnectionRoute,
    /// The lane is not in the catalog; nothing is known about which
    /// services could serve it.
    UnmappedRoute,
    /// The requested service is offered on this lane.
    ServiceValidForLane,
    /// The requested service is not offered on this lane; the fetch
    /// proceeds unfiltered rather than returning nothing.
    ServiceNotOfferedOnLane,
    /// The caller did not request a specific service.
    NoServiceRequested,
}

impl FilterReason {
    /// Stable kebab-case identifier, used at the web boundary.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterReason::ConnectionRoute => "connection-route",
            FilterReason::UnmappedRoute => "unmapped-route",
            FilterReason::ServiceValidForLane => "service-valid-for-lane",
            FilterReason::ServiceNotOfferedOnLane => "service-not-offered-on-lane",
            FilterReason::NoServiceRequested => "no-service-requested",
        }
    }
}

impl fmt::Display for FilterReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved filter decision for one schedule request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterDecision {
    /// Whether the sailing fetch should be narrowed to one service.
    pub should_filter: bool,
    /// The service to filter by, in the catalog's canonical casing.
    /// Always `Some` when `should_filter` is true, `None` otherwise.
    pub effective_service: Option<ServiceId>,
    /// Services the catalog knows for this lane, when it knows any.
    /// `None` for unmapped lanes and for connection origins, where the
    /// table is not consulted.
    pub available_services: Option<BTreeSet<ServiceId>>,
    /// Why this decision was reached.
    pub reason: FilterReason,
}

impl FilterDecision {
    /// An unfiltered fetch, with the lane's known services if any.
    pub fn unfiltered(reason: FilterReason, available: Option<BTreeSet<ServiceId>>) -> Self {
        FilterDecision {
            should_filter: false,
            effective_service: None,
            available_services: available,
            reason,
        }
    }

    /// A fetch narrowed to `service`, which the lane is known to offer.
    pub fn filtered(service: ServiceId, available: BTreeSet<ServiceId>) -> Self {
        FilterDecision {
            should_filter: true,
            effective_service: Some(service),
            available_services: Some(available),
            reason: FilterReason::ServiceValidForLane,
        }
    }
}

/// What a lane's service picker should offer, ahead of any request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Availability {
    /// Services to offer. Connection origins get the full universe as a
    /// hint; unmapped lanes get `None`.
    pub services: Option<BTreeSet<ServiceId>>,
    /// Whether the lane itself is mapped. Always `false` for connection
    /// origins, whose mapping is never consulted.
    pub mapped: bool,
    /// Whether the origin is a connection port.
    pub is_connection: bool,
}
