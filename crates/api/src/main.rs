use std::net::SocketAddr;
use std::sync::Arc;

use directory_core::schema::FieldSchema;
use directory_db::{seed, InMemoryUserStore, UserStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use directory_api::config::{LogFormat, ServerConfig};
use directory_api::router::build_app_router;
use directory_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Configuration ---
    let config = ServerConfig::from_env().expect("Invalid server configuration");

    // --- Tracing ---
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "directory_api=debug,directory_db=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    tracing::info!(
        host = %config.host,
        port = %config.port,
        validation_mode = ?config.validation_mode,
        "Loaded server configuration"
    );

    // --- Field schema ---
    let schema = match &config.field_schema_path {
        Some(path) => {
            let schema = FieldSchema::from_path(path).expect("Failed to load field schema");
            tracing::info!(path = %path.display(), fields = schema.len(), "Loaded field schema");
            schema
        }
        None => FieldSchema::user_default(),
    };

    // --- Store ---
    let store = if config.seed_demo_users {
        InMemoryUserStore::with_users(seed::demo_users(chrono::Utc::now()))
            .expect("Demo records must have unique ids")
    } else {
        InMemoryUserStore::new()
    };
    tracing::info!(users = store.len().await, "User store ready");

    // --- App state ---
    let state = AppState {
        store: Arc::new(store),
        schema: Arc::new(schema),
        config: Arc::new(config.clone()),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
