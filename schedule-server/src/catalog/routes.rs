//! The lane→services routing table and connection-port set.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::domain::{Port, ServiceId};

use super::error::CatalogError;

/// Immutable lookup table answering two questions: which services are
/// known to serve a directed port pair, and whether an origin is a
/// connection-only access point.
///
/// Built once at startup (from the compiled-in network table or a catalog
/// file) and never mutated afterwards, so concurrent reads need no
/// locking. The table is keyed by the port pair itself, nested by origin
/// then destination, never by joined strings; port names containing
/// spaces cannot collide.
#[derive(Debug, Clone)]
pub struct RouteCatalog {
    /// origin → destination → services serving that lane.
    routes: HashMap<Port, HashMap<Port, BTreeSet<ServiceId>>>,

    /// Origins whose traffic moves via a transshipment hub; exempt from
    /// service filtering regardless of any lane mapping.
    connection_ports: HashSet<Port>,

    /// Union of every service named in the table, precomputed at build.
    universe: BTreeSet<ServiceId>,

    /// Sorted, deduped origin ports (lane origins plus connection ports).
    origins: Vec<Port>,

    /// Sorted, deduped destination ports.
    destinations: Vec<Port>,

    lane_count: usize,
}

impl RouteCatalog {
    /// Look up the services known to serve the `origin` → `destination`
    /// lane.
    ///
    /// Ports are compared verbatim, with no trimming or case-folding. Returns
    /// `None` when the lane is not in the table ("unmapped"), which is an
    /// ordinary outcome, not an error. A mapped lane always carries a
    /// non-empty set; the builder guarantees it.
    pub fn lookup_services(
        &self,
        origin: &Port,
        destination: &Port,
    ) -> Option<&BTreeSet<ServiceId>> {
        self.routes.get(origin)?.get(destination)
    }

    /// Whether `origin` is flagged as a connection/transshipment access
    /// point. A property of the origin alone, independent of destination.
    pub fn is_connection_port(&self, origin: &Port) -> bool {
        self.connection_ports.contains(origin)
    }

    /// Every service named anywhere in the table, in deterministic order.
    ///
    /// Used as the availability hint for connection origins, where the
    /// concrete service cannot be predicted from the table.
    pub fn service_universe(&self) -> &BTreeSet<ServiceId> {
        &self.universe
    }

    /// Sorted list of every known origin port (lane origins plus
    /// connection ports).
    pub fn origins(&self) -> &[Port] {
        &self.origins
    }

    /// Sorted list of every known destination port.
    pub fn destinations(&self) -> &[Port] {
        &self.destinations
    }

    /// Number of mapped lanes.
    pub fn lane_count(&self) -> usize {
        self.lane_count
    }

    /// Number of connection ports.
    pub fn connection_port_count(&self) -> usize {
        self.connection_ports.len()
    }

    /// Whether the catalog holds no lanes and no connection ports.
    pub fn is_empty(&self) -> bool {
        self.lane_count == 0 && self.connection_ports.is_empty()
    }
}

/// Validating builder for [`RouteCatalog`].
///
/// Collects raw string entries and performs all validation in
/// [`CatalogBuilder::build`], so authoring mistakes (duplicate lanes,
/// empty service sets) fail loudly instead of one entry silently winning.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    routes: Vec<(String, String, Vec<String>)>,
    connections: Vec<String>,
}

impl CatalogBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a lane and the services that serve it.
    pub fn route(mut self, origin: &str, destination: &str, services: &[&str]) -> Self {
        self.routes.push((
            origin.to_string(),
            destination.to_string(),
            services.iter().map(|s| s.to_string()).collect(),
        ));
        self
    }

    /// Add a lane from owned strings (the catalog-file loading path).
    pub fn route_owned(mut self, origin: String, destination: String, services: Vec<String>) -> Self {
        self.routes.push((origin, destination, services));
        self
    }

    /// Flag a port as a connection/transshipment access point.
    pub fn connection(mut self, port: &str) -> Self {
        self.connections.push(port.to_string());
        self
    }

    /// Flag a port from an owned string.
    pub fn connection_owned(mut self, port: String) -> Self {
        self.connections.push(port);
        self
    }

    /// Validate every entry and construct the catalog.
    pub fn build(self) -> Result<RouteCatalog, CatalogError> {
        let mut routes: HashMap<Port, HashMap<Port, BTreeSet<ServiceId>>> = HashMap::new();
        let mut universe = BTreeSet::new();
        let mut lane_count = 0usize;

        for (origin, destination, services) in self.routes {
            let key = format!("{origin}-{destination}");

            let origin = Port::new(origin)
                .map_err(|_| CatalogError::InvalidRoutePort { key: key.clone() })?;
            let destination = Port::new(destination)
                .map_err(|_| CatalogError::InvalidRoutePort { key: key.clone() })?;

            if services.is_empty() {
                return Err(CatalogError::EmptyServices { key });
            }

            let mut set = BTreeSet::new();
            let mut folded = HashSet::new();
            for service in services {
                if !folded.insert(service.to_ascii_lowercase()) {
                    return Err(CatalogError::DuplicateService { key, service });
                }
                let service = ServiceId::new(service)
                    .map_err(|_| CatalogError::InvalidService { key: key.clone() })?;
                universe.insert(service.clone());
                set.insert(service);
            }

            let by_destination = routes.entry(origin).or_default();
            if by_destination.insert(destination, set).is_some() {
                return Err(CatalogError::DuplicateLane { key });
            }
            lane_count += 1;
        }

        let mut connection_ports = HashSet::new();
        for port in self.connections {
            let port = Port::new(port).map_err(|_| CatalogError::InvalidConnectionPort)?;
            connection_ports.insert(port);
        }

        let mut origins: BTreeSet<Port> = routes.keys().cloned().collect();
        origins.extend(connection_ports.iter().cloned());
        let origins: Vec<Port> = origins.into_iter().collect();

        let destinations: BTreeSet<Port> = routes
            .values()
            .flat_map(|by_destination| by_destination.keys().cloned())
            .collect();
        let destinations: Vec<Port> = destinations.into_iter().collect();

        Ok(RouteCatalog {
            routes,
            connection_ports,
            universe,
            origins,
            destinations,
            lane_count,
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn port_name() -> impl Strategy<Value = String> {
        "[A-Za-z][A-Za-z ]{0,12}[A-Za-z]"
    }

    fn service_names() -> impl Strategy<Value = Vec<String>> {
        proptest::collection::btree_set("[A-Z][a-z]{2,8}", 1..4)
            .prop_map(|s| s.into_iter().collect())
    }

    proptest! {
        /// Round-trip: a lane inserted with set S looks up as exactly S.
        #[test]
        fn inserted_lane_roundtrips(
            origin in port_name(),
            dest in port_name(),
            services in service_names(),
        ) {
            let refs: Vec<&str> = services.iter().map(String::as_str).collect();
            let catalog = CatalogBuilder::new()
                .route(&origin, &dest, &refs)
                .build()
                .unwrap();

            let expected: BTreeSet<ServiceId> = services
                .iter()
                .map(|s| ServiceId::new(s.clone()).unwrap())
                .collect();

            let found = catalog.lookup_services(
                &Port::new(origin).unwrap(),
                &Port::new(dest).unwrap(),
            );
            prop_assert_eq!(found, Some(&expected));
        }

        /// Lookup of a lane never panics and is stable across calls.
        #[test]
        fn lookup_is_total_and_stable(
            origin in port_name(),
            dest in port_name(),
        ) {
            let catalog = CatalogBuilder::new()
                .route("Shanghai", "Santos", &["Carioca"])
                .build()
                .unwrap();

            let o = Port::new(origin).unwrap();
            let d = Port::new(dest).unwrap();
            let first = catalog.lookup_services(&o, &d).cloned();
            let second = catalog.lookup_services(&o, &d).cloned();
            prop_assert_eq!(first, second);
        }
    }
}
