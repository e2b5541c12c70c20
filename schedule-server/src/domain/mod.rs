//! Domain types for the sailing-schedule server.
//!
//! This module contains the identifier types the routing core is built
//! on. Each validates its invariants at construction, so the rest of
//! the crate can treat any value it receives as already checked.

mod lane;
mod port;
mod service;

pub use lane::{InvalidLaneKey, Lane};
pub use port::{InvalidPort, Port};
pub use service::{InvalidServiceId, ServiceId};
