use dotenvy::dotenv;
use axum::{
    routing::{get, post},
    Router,
};
use anyhow::Context;
use tower_http::cors::{CorsLayer, Any};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use std::sync::Arc;

mod handlers {
    pub mod auth_handlers;
    pub mod auth_dtos;
    pub mod auth_middleware;
    pub mod admin_handlers;
    pub mod contact_handlers;
    pub mod chat_handlers;
}
mod api {
    pub mod openrouter;
}
mod config {
    pub mod app_config;
}
mod models {
    pub mod message_models;
}
mod repositories {
    pub mod message_store;
}
mod utils {
    pub mod persona_prompt;
}
#[cfg(test)]
mod router_tests;

use api::openrouter::ChatRelay;
use config::app_config::{AdminCredentials, AppConfig};
use repositories::message_store::{JsonFileStore, MessageStore};

use handlers::auth_handlers;
use handlers::admin_handlers;
use handlers::contact_handlers;
use handlers::chat_handlers;

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    admin: AdminCredentials,
    message_store: Arc<dyn MessageStore>,
    chat_relay: Arc<ChatRelay>,
}

pub fn api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/contact", post(contact_handlers::submit_contact))
        .route("/api/login", post(auth_handlers::login))
        .route("/api/messages", get(admin_handlers::list_messages))
        .route("/api/chat", post(chat_handlers::send_chat_message))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any) // the dev frontend runs on its own port
                .allow_headers([axum::http::header::CONTENT_TYPE, axum::http::header::AUTHORIZATION])
                .expose_headers([axum::http::header::CONTENT_TYPE])
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!("Starting in {:?} mode", config.environment);

    let message_store = JsonFileStore::open(&config.messages_file).with_context(|| {
        format!("Failed to open message store at {}", config.messages_file.display())
    })?;
    tracing::info!("Messages are stored in {}", message_store.path().display());

    let chat_relay = ChatRelay::new(
        config.openrouter_api_key.clone(),
        config.openrouter_model.clone(),
        config.openrouter_base_url.clone(),
    );
    if !chat_relay.is_online() {
        tracing::warn!("OPENROUTER_API_KEY is not set, chat will answer with the offline reply");
    }

    let state = Arc::new(AppState {
        admin: config.admin.clone(),
        message_store: Arc::new(message_store),
        chat_relay: Arc::new(chat_relay),
    });

    let mut app = api_router(state);
    if config.serves_static() {
        // single page app: unknown paths get index.html
        let index = config.static_dir.join("index.html");
        app = app.fallback_service(ServeDir::new(&config.static_dir).fallback(ServeFile::new(index)));
        tracing::info!("Serving frontend from {}", config.static_dir.display());
    }

    use tokio::net::TcpListener;

    let listener = TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("Failed to bind port {}", config.port))?;
    tracing::info!("Server running on http://localhost:{}", config.port);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
