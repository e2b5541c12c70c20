use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;

use schedule_server::cache::{CacheConfig, CachedSailingSource};
use schedule_server::catalog::{msc_network, RouteCatalog};
use schedule_server::sailings::FixtureSailingSource;
use schedule_server::web::{create_router, AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("schedule_server=info")),
        )
        .init();

    let port: u16 = std::env::var("PORT")
        .ok()
        .map(|p| p.parse().expect("PORT must be a number"))
        .unwrap_or(3000);
    let exports_dir =
        PathBuf::from(std::env::var("EXPORTS_DIR").unwrap_or_else(|_| "exports".to_string()));
    std::fs::create_dir_all(&exports_dir).expect("Failed to create exports directory");
    let sailing_data =
        PathBuf::from(std::env::var("SAILING_DATA").unwrap_or_else(|_| "data/sailings".to_string()));

    // Compiled-in network unless a catalog file overrides it
    let catalog = match std::env::var("CATALOG_FILE") {
        Ok(path) => {
            info!(%path, "loading catalog file");
            RouteCatalog::from_file(&path).expect("Failed to load catalog file")
        }
        Err(_) => msc_network().expect("Failed to build default catalog"),
    };
    info!(
        lanes = catalog.lane_count(),
        connection_ports = catalog.connection_port_count(),
        services = catalog.service_universe().len(),
        "catalog loaded"
    );

    let sailings =
        FixtureSailingSource::new(&sailing_data).expect("Failed to load sailing fixtures");
    let cached_sailings = CachedSailingSource::new(sailings, &CacheConfig::default());

    let state = AppState::new(catalog, cached_sailings, exports_dir);
    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    println!("Sailing schedule server listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health                  - Health check");
    println!("  GET  /api/origins             - Known origin ports");
    println!("  GET  /api/destinations        - Known destination ports");
    println!("  GET  /api/available-services  - Services offered on a lane");
    println!("  POST /api/schedules           - Fetch schedules for a lane");
    println!("  GET  /exports/...             - Download written exports");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");
    axum::serve(listener, app).await.expect("Server error");
}
