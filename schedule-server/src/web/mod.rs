//! Web layer for the sailing schedule server.
//!
//! Provides HTTP endpoints for resolving lanes, fetching schedules and
//! downloading exports.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{create_router, AppError};
pub use state::AppState;
