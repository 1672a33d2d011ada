//! Cushon API Server
//!
//! Bookkeeping service for direct users and their fund transactions.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{PostgresDirectUserRepository, PostgresTransactionRepository};
use app::{DirectUserService, TransactionService};
use config::Config;
use domain::ports::{DirectUserUseCases, TransactionUseCases};

/// Application state shared across all handlers
///
/// Handlers only see the inbound ports, never the repositories behind them.
#[derive(Clone)]
pub struct AppState {
    pub direct_user_service: Arc<dyn DirectUserUseCases>,
    pub transaction_service: Arc<dyn TransactionUseCases>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the API router
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Direct users
        .route("/direct-users", post(handlers::create_direct_user))
        .route(
            "/direct-users/:id",
            get(handlers::get_direct_user)
                .put(handlers::update_direct_user)
                .delete(handlers::delete_direct_user),
        )
        // Transactions
        .route("/transactions", post(handlers::create_transaction))
        .route(
            "/transactions/:id",
            get(handlers::get_transaction)
                .put(handlers::update_transaction)
                .delete(handlers::delete_transaction),
        )
        .route(
            "/transactions/user/:user_id",
            get(handlers::get_user_transactions),
        )
        // Funds
        .route("/fund-names", get(handlers::list_fund_names))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    let origin = if config.cors_allows_any() {
        AllowOrigin::any()
    } else {
        let origins = config
            .cors_allowed_origins
            .iter()
            .map(|o| {
                o.parse::<HeaderValue>()
                    .with_context(|| format!("Invalid CORS origin '{}'", o))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(12 * 60 * 60)))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cushon_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Cushon API...");

    // Load configuration
    let config = Config::from_env()?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    // Create adapters
    let direct_user_repo = Arc::new(PostgresDirectUserRepository::new(db.clone()));
    let transaction_repo = Arc::new(PostgresTransactionRepository::new(db));

    // Create application services
    let state = AppState {
        direct_user_service: Arc::new(DirectUserService::new(direct_user_repo)),
        transaction_service: Arc::new(TransactionService::new(transaction_repo)),
    };

    let app = router(state).layer(ServiceBuilder::new().layer(cors_layer(&config)?));

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use serde_json::Value;

    use crate::test_utils::test_server;

    #[tokio::test]
    async fn health_reports_ok() {
        let (server, _, _) = test_server();

        let response = server.get("/health").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn unknown_route_is_json_not_found() {
        let (server, _, _) = test_server();

        let response = server.get("/nope").await;

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body["error"], "Not found");
    }

    #[test]
    fn cors_layer_accepts_configured_origins() {
        let config = Config {
            database_url: "postgres://localhost/cushon".to_string(),
            port: 8080,
            cors_allowed_origins: vec!["http://localhost:3000".to_string()],
        };
        assert!(cors_layer(&config).is_ok());
    }

    #[test]
    fn cors_layer_rejects_invalid_origin() {
        let config = Config {
            database_url: "postgres://localhost/cushon".to_string(),
            port: 8080,
            cors_allowed_origins: vec!["bad\norigin".to_string()],
        };
        assert!(cors_layer(&config).is_err());
    }
}
