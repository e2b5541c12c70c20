//! Loading a [`RouteCatalog`] from a JSON catalog file.
//!
//! The file format mirrors the authoring shape of the compiled-in table:
//!
//! ```json
//! {
//!   "routes": {
//!     "Shanghai-Santos": ["Ipanema", "Carioca"],
//!     "Qingdao-Manaus": ["Santana"]
//!   },
//!   "connection_ports": ["Jakarta", "Surabaya"]
//! }
//! ```
//!
//! Lane keys join origin and destination with a hyphen and are split at
//! the first hyphen, so hyphens in port names are not representable here.
//! The builder API has no such restriction.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::domain::Lane;

use super::error::CatalogError;
use super::routes::{CatalogBuilder, RouteCatalog};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(deserialize_with = "routes_preserving_duplicates")]
    routes: Vec<(String, Vec<String>)>,
    #[serde(default)]
    connection_ports: Vec<String>,
}

/// Deserialize the routes object into a Vec of entries rather than a map.
///
/// A JSON object with a repeated key is almost certainly an authoring
/// mistake, but serde_json's map types silently keep the last occurrence.
/// Collecting into a Vec preserves both occurrences so the builder's
/// duplicate-lane check can reject the file.
fn routes_preserving_duplicates<'de, D>(
    deserializer: D,
) -> Result<Vec<(String, Vec<String>)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct RoutesVisitor;

    impl<'de> Visitor<'de> for RoutesVisitor {
        type Value = Vec<(String, Vec<String>)>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map of lane keys to service arrays")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((key, services)) = access.next_entry::<String, Vec<String>>()? {
                entries.push((key, services));
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(RoutesVisitor)
}

impl RouteCatalog {
    /// Parse a catalog from JSON text.
    pub fn from_json_str(json: &str) -> Result<RouteCatalog, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;

        let mut builder = CatalogBuilder::new();
        for (key, services) in file.routes {
            let lane = Lane::parse_key(&key)?;
            let (origin, destination) = lane.into_ports();
            builder = builder.route_owned(origin.into_inner(), destination.into_inner(), services);
        }
        for port in file.connection_ports {
            builder = builder.connection_owned(port);
        }
        builder.build()
    }

    /// Load a catalog from a JSON file on disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<RouteCatalog, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        RouteCatalog::from_json_str(&json)
    }

    /// Render the catalog back to the file format, lanes sorted by key.
    ///
    /// Lanes whose origin contains a hyphen would not survive a reload
    /// (the key splits at the first hyphen), so they are refused.
    pub fn to_json_string(&self) -> Result<String, CatalogError> {
        let mut routes = BTreeMap::new();
        for origin in self.origins() {
            for destination in self.destinations() {
                if let Some(services) = self.lookup_services(origin, destination) {
                    if origin.as_str().contains('-') {
                        return Err(CatalogError::UnrepresentableLane {
                            key: format!("{origin}-{destination}"),
                        });
                    }
                    let names: Vec<&str> = services.iter().map(|s| s.as_str()).collect();
                    routes.insert(format!("{origin}-{destination}"), names);
                }
            }
        }

        let mut connection_ports: Vec<&str> = self
            .origins()
            .iter()
            .filter(|p| self.is_connection_port(p))
            .map(|p| p.as_str())
            .collect();
        connection_ports.sort_unstable();

        let file = serde_json::json!({
            "routes": routes,
            "connection_ports": connection_ports,
        });
        Ok(serde_json::to_string_pretty(&file)?)
    }
}
