pub mod api;
pub mod banner;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod openapi;
pub mod repositories;
pub mod services;
pub mod state;

use std::net::SocketAddr;

use tower_http::trace::TraceLayer;
use utoipa_scalar::{Scalar, Servable};

pub use api::create_router;
pub use banner::print_banner;
pub use config::{Config, Environment};
pub use db::create_pool;
pub use error::{AppError, AppResult};
pub use services::{StoreError, StoreService};
pub use state::AppState;

pub async fn run_server(
    addr: SocketAddr,
    env: Environment,
    data_path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::new(env, data_path);

    // Ensure the data directory exists
    std::fs::create_dir_all(&config.data_path)?;

    let pool = create_pool(&config.database_url, config.max_connections).await?;
    let state = AppState::new(pool, config);

    let (router, api) = create_router(state);

    let app = router
        .merge(Scalar::with_url("/docs", api))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
