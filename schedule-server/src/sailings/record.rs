//! The sailing record as it crosses process boundaries.

use serde::{Deserialize, Serialize};

/// How a sailing reaches its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Routing {
    /// Same vessel end to end.
    Direct,
    /// Cargo moves to another vessel at an intermediate hub.
    Transshipment,
}

/// One scheduled sailing, as fetched from a sailing source.
///
/// Fields mirror what carriers actually publish, so most of the optional
/// ones really are absent in live data. Dates stay as the source's
/// strings; this server reports schedules, it does not compute with
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SailingRecord {
    /// Carrier operating the sailing (e.g. "MSC").
    pub carrier: String,

    /// Service loop the sailing runs under, when the source labels it.
    pub service: Option<String>,

    /// Vessel name.
    pub vessel: String,

    /// Port of loading.
    pub origin: String,

    /// Port of discharge.
    pub destination: String,

    /// Estimated departure, as published.
    pub departure: String,

    /// Estimated arrival, as published.
    pub arrival: String,

    /// Transit time, as published (e.g. "32 days").
    pub transit: Option<String>,

    /// Direct or via transshipment, when the source says.
    pub routing: Option<Routing>,

    /// Where this record came from (e.g. "msc.com", "fixture").
    pub source: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routing_serializes_as_plain_strings() {
        assert_eq!(serde_json::to_string(&Routing::Direct).unwrap(), "\"Direct\"");
        assert_eq!(
            serde_json::to_string(&Routing::Transshipment).unwrap(),
            "\"Transshipment\""
        );
    }

    #[test]
    fn record_roundtrips_with_absent_optionals() {
        let json = r#"{
            "carrier": "MSC",
            "service": null,
            "vessel": "MSC AURORA",
            "origin": "Shanghai",
            "destination": "Santos",
            "departure": "Mon 12 Jan 2026",
            "arrival": "Fri 13 Feb 2026",
            "transit": null,
            "routing": null,
            "source": "fixture"
        }"#;

        let record: SailingRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.vessel, "MSC AURORA");
        assert_eq!(record.service, None);
        assert_eq!(record.routing, None);

        let back: SailingRecord =
            serde_json::from_str(&serde_json::to_string(&record).unwrap()).unwrap();
        assert_eq!(back, record);
    }
}
