//! Shelfrank Web Server
//!
//! Run with: cargo run -p shelfrank-web

use shelfrank_common::{Settings, WeightsConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("shelfrank=debug,info")),
        )
        .init();

    info!("Starting Shelfrank Web Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let settings = Settings::load()?;
    let weights = WeightsConfig::load_or_default(settings.weights_path());
    let addr = settings.bind_address();

    let state = shelfrank_web::state::AppState::new(settings, weights);
    let app = shelfrank_web::router::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
