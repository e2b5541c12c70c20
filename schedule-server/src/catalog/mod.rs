//! Which services serve which lanes, and which origins are
//! connection-only.
//!
//! The catalog is the static knowledge this server adds on top of raw
//! sailing data: a validated lane → services table plus the set of
//! connection ports. [`msc_network`] is the compiled-in default;
//! operators can override it with a JSON catalog file.

mod config;
mod error;
mod msc;
mod routes;

pub use error::CatalogError;
pub use msc::msc_network;
pub use routes::{CatalogBuilder, RouteCatalog};
