//! HTTP service for the universal table.
//!
//! Loads a table document once at startup, then serves rank and effect
//! lookups and roll resolution over a small read-only JSON API.

pub mod config;
pub mod error;
mod handlers;

pub use config::ServerConfig;
pub use error::ApiError;

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use axum::http::Method;
use axum::http::header::CONTENT_TYPE;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use ut_table::Catalog;

/// Shared, read-only state behind every request.
#[derive(Debug)]
pub struct AppState {
    /// The catalog loaded at startup.
    pub catalog: Catalog,
}

impl AppState {
    /// Wrap a catalog for sharing across handlers.
    pub fn new(catalog: Catalog) -> Arc<Self> {
        Arc::new(Self { catalog })
    }
}

/// Build the application router.
pub fn router(state: Arc<AppState>, config: &ServerConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([CONTENT_TYPE]);

    let mut app = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/ranks", get(handlers::list_ranks))
        .route("/ranks/{rank}", get(handlers::get_rank))
        .route("/ranks/{rank}/roll", get(handlers::roll))
        .route("/ranks/{rank}/roll/{roll}", get(handlers::roll_with_value))
        .route("/effects", get(handlers::list_effects))
        .route("/effects/{effect}", get(handlers::get_effect))
        .route("/effects/{effect}/{color}", get(handlers::get_effect_text))
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(cors);

    for (name, value) in &config.security_headers {
        app = app.layer(SetResponseHeaderLayer::overriding(
            name.clone(),
            value.clone(),
        ));
    }

    app.layer(TraceLayer::new_for_http())
}

/// Load the catalog named by `config`, then serve until the process stops.
///
/// A table that fails validation aborts startup before the port is bound.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!(
        table_file = %config.table_file.display(),
        table = %config.table_name,
        "configuration loaded"
    );

    let catalog = Catalog::load(&config.table_file, &config.table_name)
        .with_context(|| format!("failed to load {}", config.table_file.display()))?;
    tracing::info!(
        ranks = catalog.ranks().len(),
        effects = catalog.effects().len(),
        "table loaded"
    );

    let app = router(AppState::new(catalog), &config);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!("server listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
