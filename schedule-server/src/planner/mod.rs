//! Filter resolution for schedule requests.
//!
//! This module answers the question at the heart of the server: "for
//! this origin, destination and requested service, should the sailing
//! fetch be narrowed, and to what?" The answer is always a decision with
//! an explicit reason, so an unfiltered fetch caused by a connection
//! origin is distinguishable from one the caller asked for.

mod decision;
mod plan;


pub use decision::{Availability, FilterDecision, FilterReason};
pub use plan::{SchedulePlanner, ALL_SERVICES};
