use subway_server::config::ServerConfig;
use subway_server::network::{SubwayMap, demo_map};
use subway_server::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let config = ServerConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let map = if config.load_demo {
        demo_map()
    } else {
        SubwayMap::new()
    };
    info!(
        stations = map.station_count(),
        connections = map.connection_count(),
        "map loaded"
    );

    // Build app state and router
    let state = AppState::new(map);
    let app = create_router(state);

    // Bind and serve
    let addr = config.addr;
    info!("Subway map listening on http://{addr}");
    info!("API Endpoints:");
    info!("  GET    /health                  - Health check");
    info!("  GET    /api/stations            - List stations");
    info!("  POST   /api/stations            - Add a station");
    info!("  GET    /api/stations/:name      - Station detail");
    info!("  DELETE /api/stations/:name      - Remove a station");
    info!("  GET    /api/lines/:colour       - Connections on a line");
    info!("  POST   /api/connections         - Add a connection");
    info!("  DELETE /api/connections         - Remove a connection");
    info!("  GET    /route?from=..&to=..     - Shortest route");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
