mod api_doc;
mod auth;
mod bulk;
mod config;
mod error;
mod handlers;
mod key;
mod memory;
mod models;
mod routes;
mod scheduler;
mod state;
mod store;

use anyhow::Context;
use axum::routing::{any, delete, get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::config::Config;
use crate::memory::MemoryStore;
use crate::state::AppState;
use crate::store::SharedStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("kv-facade starting");

    let config = Config::from_env()?;
    config.log_startup();

    let store: SharedStore = Arc::new(MemoryStore::new());
    // The reset job holds its own clone of the store handle; it never shares
    // request-scoped state.
    scheduler::spawn_reset_task(&config, store.clone());

    let state = AppState {
        store,
        config: Arc::new(config),
    };

    let addr = format!(
        "{}:{}",
        state.config.service_host, state.config.service_port
    );
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route(routes::HEALTH, get(handlers::health_handler))
        .route(routes::KV_SET, post(handlers::set_handler))
        .route(routes::KV_GET, get(handlers::get_handler))
        .route(routes::KV_LIST_ALL, get(handlers::list_handler))
        .route(routes::KV_LIST, get(handlers::list_handler))
        .route(routes::KV_DELETE, delete(handlers::delete_handler))
        .route(routes::KV_DELETE_PREFIX, delete(handlers::delete_prefix_handler))
        .route(routes::KV_FULL_RESET, delete(handlers::reset_handler))
        .route(routes::DUMP, any(handlers::dump_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
