pub mod app;
mod assets;
pub mod config;
pub mod observability;
pub mod roster;
pub mod state;
mod templates;
pub mod types;

pub use app::{app, app_with_roster};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServeError {
    #[error(transparent)]
    Seed(#[from] roster::SeedError),
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

pub async fn serve(config: config::AppConfig) -> Result<(), ServeError> {
    let addr = config.addr;
    let router = app(config)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening on http://{addr}");
    axum::serve(listener, router).await?;
    Ok(())
}
