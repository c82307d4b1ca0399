//! Server setup - router assembly and process lifecycle
//!
//! Opens the database, runs the idempotent schema step, then serves until
//! Ctrl+C or SIGTERM.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::db::Database;
use crate::error::ServerError;
use crate::routes::{self, health::ServerState};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind_addr: SocketAddr,

    /// SQLite database file
    pub db_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            db_path: default_db_path(),
        }
    }
}

/// Default database location: ~/.ticklist/todos.db
pub fn default_db_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".ticklist")
        .join("todos.db")
}

/// Run the server with the given configuration
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    info!("Opening database at {}", config.db_path.display());
    let db = Database::open(&config.db_path)?;

    // Schema bootstrap happens here, once, before the listener binds
    db.init_schema()?;

    let state = Arc::new(RwLock::new(ServerState::new(db.clone())));
    let app = create_router(db, state);

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!("Serving ticklist on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Create the router with all routes
fn create_router(db: Database, state: Arc<RwLock<ServerState>>) -> Router {
    let middleware = ServiceBuilder::new().layer(TraceLayer::new_for_http());

    Router::new()
        // Todos
        .route("/", get(routes::home))
        .route("/add", post(routes::add_todo))
        .route("/update/{id}", get(routes::toggle_todo))
        .route("/delete/{id}", get(routes::delete_todo))
        // Health
        .route("/health", get(routes::health_check))
        // State
        .with_state(db)
        // Health needs full state for uptime
        .layer(axum::Extension(state))
        .layer(middleware)
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            warn!("Received SIGTERM, shutting down");
        }
    }
}
