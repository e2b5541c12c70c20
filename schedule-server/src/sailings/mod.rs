//! Fetching sailing data.
//!
//! [`SailingSource`] is the seam between filter resolution and whatever
//! actually produces sailings. [`FixtureSailingSource`] is the shipped
//! implementation; a live carrier scraper would implement the same
//! trait.

mod error;
mod fixtures;
mod record;
mod source;

pub use error::SailingError;
pub use fixtures::FixtureSailingSource;
pub use record::{Routing, SailingRecord};
pub use source::SailingSource;
