use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kbase_api::analyzer::{ContentAnalyzer, OpenAiAnalyzer, StaticAnalyzer};
use kbase_api::auth::password::hash_password;
use kbase_api::config::ServerConfig;
use kbase_api::router::build_app_router;
use kbase_api::state::AppState;
use kbase_store::{seed, MemStore, SessionStore};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kbase_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Store + seed ---
    // The store is in-memory only: it starts empty on every boot and is
    // seeded here with the admin account and default topics.
    let store = Arc::new(MemStore::new());
    let admin_hash =
        hash_password(&config.admin_password).expect("Failed to hash admin password");
    seed::seed_defaults(&store, admin_hash).expect("Failed to seed store");
    if config.seed_samples {
        seed::seed_samples(&store).expect("Failed to seed sample data");
    }

    // --- Content analyzer ---
    let analyzer: Arc<dyn ContentAnalyzer> = match OpenAiAnalyzer::from_config(&config.analyzer) {
        Some(client) => {
            tracing::info!(model = %config.analyzer.model, "Content analyzer enabled");
            Arc::new(client)
        }
        None => {
            tracing::warn!(
                "OPENAI_API_KEY not set; issues will be created without key facts and \
                 solution matching will return no suggestions"
            );
            Arc::new(StaticAnalyzer)
        }
    };

    // --- App state ---
    let state = AppState {
        store,
        sessions: Arc::new(SessionStore::new()),
        config: Arc::new(config.clone()),
        analyzer,
    };

    // --- Router ---
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
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
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
