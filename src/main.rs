//! FrioTrack Server - Refrigeration Equipment Assignment Registry
//!
//! REST JSON API over an in-memory entity store, seeded with demo data
//! on startup.

use axum::{
    routing::{get, post, put},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use friotrack_server::{api, config::AppConfig, services::Services, store::Store, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("friotrack_server={},tower_http=debug", config.logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting FrioTrack Server v{}", env!("CARGO_PKG_VERSION"));

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Build the seeded in-memory store and the service layer
    let store = Store::seeded()?;
    tracing::info!("In-memory store seeded with demo data");

    let services = Services::new(store);

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(server_host.parse()?, server_port);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        // Health check
        .route("/ping", get(api::health::ping))
        // Clients
        .route("/clientes", get(api::clientes::list_clientes))
        .route("/clientes", post(api::clientes::create_cliente))
        .route("/clientes/buscar", get(api::clientes::buscar_clientes))
        .route("/clientes/:id/activo", put(api::clientes::set_cliente_activo))
        // Equipment
        .route("/equipos", get(api::equipos::list_equipos))
        .route("/equipos", post(api::equipos::create_equipo))
        .route("/equipos/buscar", get(api::equipos::buscar_equipos))
        .route("/marcas", get(api::equipos::list_marcas))
        .route("/modelos", get(api::equipos::list_modelos))
        .route("/logos", get(api::equipos::list_logos))
        // Users
        .route("/usuarios", get(api::usuarios::list_usuarios))
        .route("/usuarios", post(api::usuarios::create_usuario))
        .route("/usuarios/login", post(api::usuarios::login))
        .route("/usuarios/:id/clientes", get(api::usuarios::clientes_de_usuario))
        .route("/usuarios/:id/clientes", post(api::usuarios::vincular_cliente))
        // Assignments
        .route("/asignaciones", get(api::asignaciones::list_asignaciones))
        .route("/asignaciones", post(api::asignaciones::create_asignacion))
        .route(
            "/asignaciones/:id/retirar",
            post(api::asignaciones::retirar_asignacion),
        )
        // Status records
        .route("/estados", get(api::estados::list_estados))
        .route("/estados", post(api::estados::create_estado))
        // Dashboard
        .route("/dashboard", get(api::dashboard::dashboard))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .merge(routes)
        .merge(openapi)
        .fallback(api::fallback)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
