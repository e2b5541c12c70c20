//! Ocean freight sailing schedule server.
//!
//! Answers: "which sailings serve this origin and destination, and
//! should the fetch be narrowed to one carrier service?" A static route
//! catalog resolves the filter; a pluggable sailing source fetches the
//! schedules; every fetch is exported as a spreadsheet.

pub mod cache;
pub mod catalog;
pub mod domain;
pub mod export;
pub mod planner;
pub mod sailings;
pub mod web;
