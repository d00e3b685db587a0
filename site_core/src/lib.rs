//! Core library for the shop website: configuration, the WhatsApp contact
//! relay, HTTP handlers and middleware.

pub mod config;
pub mod error;
pub mod form;
pub mod handlers;
pub mod middleware;
pub mod relay;

pub use config::{
    ApiCredentials, AppConfig, CorsConfig, ServerConfig, SiteConfig, WhatsAppConfig,
};
pub use error::{AppError, Result};
pub use form::{FormEffect, FormEvent, FormStatus};
pub use handlers::routes::create_routes;
pub use relay::{ContactRequest, RelayOutcome, WhatsAppClient};

use axum::Router;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::services::ServeDir;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub app_name: String,
    pub version: String,
    pub config: AppConfig,
    pub whatsapp: WhatsAppClient,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let whatsapp = WhatsAppClient::new(config.whatsapp.api_base.clone());

        Self {
            app_name: "Repuestera San Cayetano".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            config,
            whatsapp,
        }
    }
}

/// Builds the full router: JSON API plus the static landing page, served
/// from the configured assets directory for every unmatched path.
pub fn create_app(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.site.assets_dir);

    Router::new()
        .merge(create_routes())
        .fallback_service(assets)
        .layer(middleware::cors::cors_layer_from_config(&state.config.cors))
        .layer(middleware::logging::logging_layer())
        .with_state(state)
}

pub async fn run_server(app: Router, addr: SocketAddr) -> Result<()> {
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
