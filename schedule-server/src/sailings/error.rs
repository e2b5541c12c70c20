//! Sailing source error types.

/// Errors from a sailing source.
#[derive(Debug, thiserror::Error)]
pub enum SailingError {
    /// Sailing data could not be read.
    #[error("failed to read sailing data: {0}")]
    Io(#[from] std::io::Error),

    /// Sailing data is not valid JSON (or not the expected shape).
    #[error("failed to parse sailing data: {0}")]
    Parse(#[from] serde_json::Error),

    /// No data exists for the requested lane. The message names the
    /// lanes the source does have, which is what you want when a fixture
    /// file is misnamed.
    #[error("no sailing data for {origin} -> {destination} (available: {available:?})")]
    LaneNotFound {
        origin: String,
        destination: String,
        available: Vec<String>,
    },

    /// The source is not usable as configured.
    #[error("sailing source not configured: {0}")]
    NotConfigured(String),
}
