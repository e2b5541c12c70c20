//! Fixture-backed sailing source for development and testing.
//!
//! Loads sailing lists from JSON files and serves them as if they were
//! live carrier responses, so the rest of the server can run without
//! scraping anything.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::{Lane, Port, ServiceId};

use super::error::SailingError;
use super::record::{Routing, SailingRecord};
use super::source::SailingSource;

/// One sailing as authored in a fixture file. Origin and destination
/// come from the filename, so the records do not repeat them.
#[derive(Debug, Clone, Deserialize)]
struct FixtureRecord {
    #[serde(default = "default_carrier")]
    carrier: String,
    /// Service label, when the fixture knows it. Unlabeled sailings are
    /// treated as belonging to whatever service a fetch filters by.
    #[serde(default)]
    service: Option<String>,
    vessel: String,
    departure: String,
    arrival: String,
    #[serde(default)]
    transit: Option<String>,
    #[serde(default)]
    routing: Option<Routing>,
}

fn default_carrier() -> String {
    "MSC".to_string()
}

/// Sailing source that serves pre-authored data from a directory.
///
/// Expects files named `{Origin}-{Destination}.json` (e.g.
/// `Shanghai-Santos.json`), each holding a JSON array of sailings. Files
/// are loaded eagerly; a missing lane at fetch time is an error naming
/// the lanes that do exist.
#[derive(Debug)]
pub struct FixtureSailingSource {
    sailings: HashMap<Lane, Vec<FixtureRecord>>,
}

impl FixtureSailingSource {
    /// Load every `*.json` file in the directory.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, SailingError> {
        let data_dir = data_dir.as_ref();
        let mut sailings = HashMap::new();

        for entry in std::fs::read_dir(data_dir)? {
            let path = entry?.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| {
                    SailingError::NotConfigured(format!("unreadable fixture filename: {path:?}"))
                })?;

            let lane = Lane::parse_key(stem).map_err(|e| {
                SailingError::NotConfigured(format!("fixture {path:?} is not named for a lane: {e}"))
            })?;

            let json = std::fs::read_to_string(&path)?;
            let records: Vec<FixtureRecord> = serde_json::from_str(&json)?;

            sailings.insert(lane, records);
        }

        if sailings.is_empty() {
            return Err(SailingError::NotConfigured(format!(
                "no fixture files found in {data_dir:?}"
            )));
        }

        Ok(Self { sailings })
    }

    fn available_lanes(&self) -> Vec<String> {
        let mut lanes: Vec<String> = self.sailings.keys().map(|l| l.key()).collect();
        lanes.sort_unstable();
        lanes
    }
}

#[async_trait]
impl SailingSource for FixtureSailingSource {
    async fn fetch_sailings(
        &self,
        origin: &Port,
        destination: &Port,
        filter: Option<&ServiceId>,
    ) -> Result<Vec<SailingRecord>, SailingError> {
        let lane = Lane::new(origin.clone(), destination.clone());

        let records = self.sailings.get(&lane).ok_or_else(|| {
            SailingError::LaneNotFound {
                origin: origin.as_str().to_string(),
                destination: destination.as_str().to_string(),
                available: self.available_lanes(),
            }
        })?;

        let sailings = records
            .iter()
            .filter(|r| match (filter, &r.service) {
                // Unlabeled sailings pass every filter; a live page shows
                // them under whatever service was selected
                (Some(wanted), Some(labeled)) => wanted.matches_ignore_case(labeled),
                _ => true,
            })
            .map(|r| SailingRecord {
                carrier: r.carrier.clone(),
                service: r
                    .service
                    .clone()
                    .or_else(|| filter.map(|s| s.as_str().to_string())),
                vessel: r.vessel.clone(),
                origin: origin.as_str().to_string(),
                destination: destination.as_str().to_string(),
                departure: r.departure.clone(),
                arrival: r.arrival.clone(),
                transit: r.transit.clone(),
                routing: r.routing,
                source: self.name().to_string(),
            })
            .collect();

        Ok(sailings)
    }

    fn name(&self) -> &str {
        "fixture"
    }
}
