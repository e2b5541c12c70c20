//! Spreadsheet export of fetched schedules.
//!
//! Every successful schedule fetch also lands on disk as a CSV, named so
//! a folder of exports reads as a history of lookups. The files open
//! directly in Excel, which is where these schedules end up anyway.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::domain::Port;
use crate::sailings::{Routing, SailingRecord};

const HEADERS: [&str; 7] = [
    "CARRIER", "SERVICE", "VESSEL", "ETD", "ETA", "TRANSIT", "ROUTING",
];

/// Errors from writing an export file.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Export directory could not be created or written.
    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failed.
    #[error("failed to serialize export: {0}")]
    Csv(#[from] csv::Error),
}

/// File name for a lane's export on a given day.
///
/// One file per lane per day; a later fetch the same day overwrites,
/// which is what users expect of "today's schedule".
pub fn export_filename(origin: &Port, destination: &Port, date: NaiveDate) -> String {
    format!(
        "Schedules_{}_{}_{}.csv",
        origin.as_str(),
        destination.as_str(),
        date.format("%Y-%m-%d")
    )
}

/// Write `sailings` as a CSV under `dir`, dated today.
///
/// Returns the path of the file written.
pub fn write_schedule_csv(
    dir: &Path,
    origin: &Port,
    destination: &Port,
    sailings: &[SailingRecord],
) -> Result<PathBuf, ExportError> {
    write_schedule_csv_dated(
        dir,
        origin,
        destination,
        chrono::Local::now().date_naive(),
        sailings,
    )
}

/// Write `sailings` as a CSV under `dir` with an explicit date stamp.
pub fn write_schedule_csv_dated(
    dir: &Path,
    origin: &Port,
    destination: &Port,
    date: NaiveDate,
    sailings: &[SailingRecord],
) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir)?;

    let path = dir.join(export_filename(origin, destination, date));
    let mut writer = csv::Writer::from_path(&path)?;

    writer.write_record(HEADERS)?;
    for sailing in sailings {
        writer.write_record([
            sailing.carrier.as_str(),
            sailing.service.as_deref().unwrap_or("-"),
            sailing.vessel.as_str(),
            sailing.departure.as_str(),
            sailing.arrival.as_str(),
            sailing.transit.as_deref().unwrap_or("-"),
            routing_label(sailing.routing),
        ])?;
    }
    writer.flush().map_err(csv::Error::from)?;

    Ok(path)
}

fn routing_label(routing: Option<Routing>) -> &'static str {
    match routing {
        Some(Routing::Direct) => "Direct",
        Some(Routing::Transshipment) => "Transshipment",
        None => "-",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn port(s: &str) -> Port {
        Port::new(s.to_string()).unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 12).unwrap()
    }

    fn sailing(vessel: &str, service: Option<&str>, routing: Option<Routing>) -> SailingRecord {
        SailingRecord {
            carrier: "MSC".into(),
            service: service.map(str::to_string),
            vessel: vessel.into(),
            origin: "Shanghai".into(),
            destination: "Santos".into(),
            departure: "Mon 12 Jan 2026".into(),
            arrival: "Fri 13 Feb 2026".into(),
            transit: Some("32 days".into()),
            routing,
            source: "fixture".into(),
        }
    }

    #[test]
    fn filename_carries_lane_and_date() {
        assert_eq!(
            export_filename(&port("Shanghai"), &port("Santos"), date()),
            "Schedules_Shanghai_Santos_2026-01-12.csv"
        );
        // Spaces in port names pass through untouched
        assert_eq!(
            export_filename(&port("Ho Chi Minh"), &port("Rio de Janeiro"), date()),
            "Schedules_Ho Chi Minh_Rio de Janeiro_2026-01-12.csv"
        );
    }

    #[test]
    fn writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let sailings = vec![
            sailing("MSC AURORA", Some("Ipanema"), Some(Routing::Direct)),
            sailing("MSC TERESA", Some("Carioca"), Some(Routing::Transshipment)),
        ];

        let path = write_schedule_csv_dated(
            dir.path(),
            &port("Shanghai"),
            &port("Santos"),
            date(),
            &sailings,
        )
        .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "CARRIER,SERVICE,VESSEL,ETD,ETA,TRANSIT,ROUTING");
        assert_eq!(
            lines[1],
            "MSC,Ipanema,MSC AURORA,Mon 12 Jan 2026,Fri 13 Feb 2026,32 days,Direct"
        );
        assert!(lines[2].ends_with("Transshipment"));
    }

    #[test]
    fn absent_fields_become_dashes() {
        let dir = tempfile::tempdir().unwrap();
        let mut record = sailing("MSC SHUBA B", None, None);
        record.transit = None;

        let path = write_schedule_csv_dated(
            dir.path(),
            &port("Shanghai"),
            &port("Santos"),
            date(),
            &[record],
        )
        .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.lines().nth(1).unwrap().contains("MSC,-,MSC SHUBA B"));
        assert!(content.lines().nth(1).unwrap().ends_with("-,-"));
    }

    #[test]
    fn empty_fetch_still_writes_the_header() {
        let dir = tempfile::tempdir().unwrap();

        let path =
            write_schedule_csv_dated(dir.path(), &port("Busan"), &port("Itajai"), date(), &[])
                .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
    }

    #[test]
    fn creates_missing_export_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("exports");

        let path =
            write_schedule_csv_dated(&nested, &port("Shanghai"), &port("Santos"), date(), &[])
                .unwrap();

        assert!(path.starts_with(&nested));
        assert!(path.exists());
    }

    #[test]
    fn same_day_fetch_overwrites() {
        let dir = tempfile::tempdir().unwrap();

        let first = write_schedule_csv_dated(
            dir.path(),
            &port("Shanghai"),
            &port("Santos"),
            date(),
            &[sailing("MSC AURORA", None, None)],
        )
        .unwrap();
        let second =
            write_schedule_csv_dated(dir.path(), &port("Shanghai"), &port("Santos"), date(), &[])
                .unwrap();

        assert_eq!(first, second);
        let content = std::fs::read_to_string(&second).unwrap();
        assert_eq!(content.lines().count(), 1);
    }
}
