//! Resolving a schedule request into a filter decision.

use tracing::debug;

use crate::catalog::RouteCatalog;
use crate::domain::{Port, ServiceId};

use super::decision::{Availability, FilterDecision, FilterReason};

/// Sentinel a caller sends to mean "no service filter". Compared
/// verbatim; any other casing is treated as a service name.
pub const ALL_SERVICES: &str = "ALL";

/// Resolves requests against a route catalog.
///
/// Borrows the catalog, so construction is free; build one per request.
/// Resolution is a pure lookup and cannot fail: whatever the caller
/// sends, the answer is a decision, never an error.
pub struct SchedulePlanner<'a> {
    catalog: &'a RouteCatalog,
}

impl<'a> SchedulePlanner<'a> {
    pub fn new(catalog: &'a RouteCatalog) -> Self {
        SchedulePlanner { catalog }
    }

    /// Decide whether (and how) to narrow a sailing fetch to one service.
    ///
    /// Rules, in order:
    /// 1. Connection origins are never filtered, whatever was requested.
    /// 2. Unmapped lanes are never filtered; nothing is known about them.
    /// 3. No request (or the literal [`ALL_SERVICES`]) means no filter.
    /// 4. A requested service the lane offers becomes the filter, under
    ///    the catalog's canonical casing. Matching ignores ASCII case.
    /// 5. A requested service the lane does not offer degrades to an
    ///    unfiltered fetch so the caller still sees what actually sails.
    pub fn plan(
        &self,
        origin: &Port,
        destination: &Port,
        requested: Option<&str>,
    ) -> FilterDecision {
        let decision = self.resolve(origin, destination, requested);
        debug!(
            origin = %origin.as_str(),
            destination = %destination.as_str(),
            requested = requested.unwrap_or("-"),
            filter = decision.should_filter,
            reason = %decision.reason,
            "resolved schedule request"
        );
        decision
    }

    fn resolve(
        &self,
        origin: &Port,
        destination: &Port,
        requested: Option<&str>,
    ) -> FilterDecision {
        if self.catalog.is_connection_port(origin) {
            return FilterDecision::unfiltered(FilterReason::ConnectionRoute, None);
        }

        let Some(services) = self.catalog.lookup_services(origin, destination) else {
            return FilterDecision::unfiltered(FilterReason::UnmappedRoute, None);
        };

        let requested = match requested {
            None | Some(ALL_SERVICES) => {
                return FilterDecision::unfiltered(
                    FilterReason::NoServiceRequested,
                    Some(services.clone()),
                );
            }
            Some(name) => name,
        };

        match canonical_match(services, requested) {
            Some(service) => FilterDecision::filtered(service.clone(), services.clone()),
            None => FilterDecision::unfiltered(
                FilterReason::ServiceNotOfferedOnLane,
                Some(services.clone()),
            ),
        }
    }

    /// What a service picker should offer for this lane, before any
    /// request is made.
    ///
    /// Connection origins get the full service universe as a hint, not a
    /// guarantee, and report `mapped = false` even when the lane happens
    /// to be in the table. Everything else mirrors the catalog lookup
    /// that [`SchedulePlanner::plan`] performs.
    pub fn describe_availability(&self, origin: &Port, destination: &Port) -> Availability {
        if self.catalog.is_connection_port(origin) {
            return Availability {
                services: Some(self.catalog.service_universe().clone()),
                mapped: false,
                is_connection: true,
            };
        }

        let lane = self.catalog.lookup_services(origin, destination);
        Availability {
            mapped: lane.is_some(),
            services: lane.cloned(),
            is_connection: false,
        }
    }
}

/// Find the lane's canonical entry for a request, ignoring ASCII case.
///
/// The catalog rejects two case-variants of one service at build time,
/// so at most one entry can match.
fn canonical_match<'s>(
    services: &'s std::collections::BTreeSet<ServiceId>,
    requested: &str,
) -> Option<&'s ServiceId> {
    services.iter().find(|s| s.matches_ignore_case(requested))
}
