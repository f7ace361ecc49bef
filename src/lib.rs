pub mod config;
pub mod db;
pub mod error;
pub mod migrate;
pub mod observability;
pub mod routes;

pub use config::Config;
pub use db::{create_pool, create_read_pool, create_write_pool};
pub use routes::AppState;

/// Application router with request tracing, without binding a listener.
pub fn create_app(state: pantry_shared::State) -> axum::Router {
    use tower_http::{compression::CompressionLayer, trace::TraceLayer};

    routes::router(AppState::new(state))
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http())
}
