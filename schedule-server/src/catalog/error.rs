//! Catalog configuration error types.

use crate::domain::InvalidLaneKey;

/// Errors raised while building or loading a route catalog.
///
/// Every variant is a configuration-authoring mistake (or an unreadable
/// source) and is fatal at load time: the catalog never silently picks a
/// winner between conflicting entries.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Catalog file could not be read.
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog file is not valid JSON (or not the expected shape).
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// A route key in the catalog file is not a valid `origin-destination`
    /// lane key.
    #[error(transparent)]
    InvalidLaneKey(#[from] InvalidLaneKey),

    /// The same lane appears more than once in the catalog source.
    /// Undefined which entry would win, so none does.
    #[error("duplicate lane {key:?} in catalog source")]
    DuplicateLane { key: String },

    /// A lane entry has an empty origin or destination.
    #[error("lane {key:?} has an empty origin or destination")]
    InvalidRoutePort { key: String },

    /// A lane is mapped to no services. Absence from the table is the
    /// only way to express "no data"; an empty set is a mistake.
    #[error("lane {key:?} has an empty service list")]
    EmptyServices { key: String },

    /// A lane lists the same service twice (compared case-insensitively,
    /// since two casings of one service would break canonical matching).
    #[error("lane {key:?} lists service {service:?} more than once")]
    DuplicateService { key: String, service: String },

    /// A lane contains an empty service name.
    #[error("lane {key:?} contains an empty service name")]
    InvalidService { key: String },

    /// The connection-port list contains an empty name.
    #[error("connection port list contains an empty name")]
    InvalidConnectionPort,

    /// A lane cannot be written to the file format because its origin
    /// contains a hyphen, which the `origin-destination` key cannot carry.
    #[error("lane {key:?} cannot be represented as a catalog file key")]
    UnrepresentableLane { key: String },
}
