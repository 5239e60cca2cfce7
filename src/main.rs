use std::net::SocketAddr;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use portfolio_stats::api::{AppState, create_router};
use portfolio_stats::config::{ContentLoader, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::from_env()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_directive())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio-stats v{}", env!("CARGO_PKG_VERSION"));

    let content = ContentLoader::load(&config.content_dir).with_context(|| {
        format!("loading content from {}", config.content_dir.display())
    })?;
    info!(
        content_dir = %config.content_dir.display(),
        projects = content.content().projects().len(),
        "Content loaded"
    );

    let app = create_router(AppState::new(content));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
