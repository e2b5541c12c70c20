//! The sailing-source boundary.

use async_trait::async_trait;

use crate::domain::{Port, ServiceId};

use super::error::SailingError;
use super::record::SailingRecord;

/// Anything that can fetch sailings for a lane.
///
/// The filter, when given, has already been resolved by the planner: it
/// is a service the catalog knows the lane offers, in canonical casing.
/// Implementations narrow the fetch to it but are free to degrade to the
/// full list when they cannot (the record `service` labels say what came
/// back).
#[async_trait]
pub trait SailingSource: Send + Sync {
    async fn fetch_sailings(
        &self,
        origin: &Port,
        destination: &Port,
        filter: Option<&ServiceId>,
    ) -> Result<Vec<SailingRecord>, SailingError>;

    /// Short label for logs (e.g. "fixture", "msc.com").
    fn name(&self) -> &str;
}
