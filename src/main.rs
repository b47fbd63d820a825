use anyhow::Context;
use mt_proxy::{app, config::Settings, AppState};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("mt_proxy=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    info!(backend_url = %settings.backend_url, "Loaded configuration");

    let state = AppState::new(&settings);
    let router = app(state);

    let bind_addr = settings.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;
    info!("Translation proxy listening on {}", bind_addr);

    axum::serve(listener, router).await.context("Server error")?;

    Ok(())
}
