//! Server bootstrap shared by the catalog binaries

use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::db::{self, MongoRepository, SharedRepository};
use crate::graphql::{build_schema, Catalog};
use crate::routes::{self, GRAPHQL_PATH};
use crate::AppState;

/// Run the API server for catalog `C` until Ctrl+C or SIGTERM
pub async fn run<C: Catalog>() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_graphql=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    // Load configuration
    let config = Config::from_env(C::DEFAULT_PORT);
    let port = config.port;

    tracing::info!(
        "Starting {} GraphQL API v{}",
        C::ENTITY,
        env!("CARGO_PKG_VERSION")
    );
    tracing::info!("Environment: {}", config.app_env);

    // Connect to MongoDB
    let database = db::connect(&config)
        .await
        .context("invalid MongoDB connection string")?;
    let repo: SharedRepository<C::Document> = Arc::new(MongoRepository::new(&database));

    let schema = build_schema::<C>(repo);
    let graphiql = config.graphiql;
    let state = Arc::new(AppState::<C> { config, schema });
    let app = routes::router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("GraphQL {} API running on port {}", C::ENTITY, port);
    if graphiql {
        tracing::info!("GraphiQL: http://localhost:{}{}", port, GRAPHQL_PATH);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
