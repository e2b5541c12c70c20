//! Application state for the web layer.

use std::path::PathBuf;
use std::sync::Arc;

use crate::catalog::RouteCatalog;
use crate::sailings::SailingSource;

/// Shared application state.
///
/// Cheap to clone; everything shared lives behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Route catalog (lane mappings and connection ports)
    pub catalog: Arc<RouteCatalog>,

    /// Where sailings come from
    pub sailings: Arc<dyn SailingSource>,

    /// Directory exports are written to and served from
    pub exports_dir: Arc<PathBuf>,
}

impl AppState {
    /// Create a new app state.
    pub fn new<S>(catalog: RouteCatalog, sailings: S, exports_dir: PathBuf) -> Self
    where
        S: SailingSource + 'static,
    {
        Self {
            catalog: Arc::new(catalog),
            sailings: Arc::new(sailings),
            exports_dir: Arc::new(exports_dir),
        }
    }
}
