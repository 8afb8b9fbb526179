use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use neighborly::config::{Cli, Config};
use neighborly::routes;
use neighborly::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse CLI args and load config
    let cli = Cli::parse();
    let data_dir = Config::data_dir(&cli);
    std::fs::create_dir_all(&data_dir)?;
    tracing::info!("Data directory: {}", data_dir.display());

    let config = Config::load(&cli)?;
    tracing::info!(
        "Serving as {} ({}) with the {} theme",
        config.viewer.name,
        config.viewer.id,
        config.ui.theme.as_str()
    );

    let state = AppState::new(config.clone());
    let app = routes::app(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
