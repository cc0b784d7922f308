use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

mod app;
mod http;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chime_gateway=info,tower_http=debug".into()),
        )
        .init();

    // load config: explicit path via CHIME_CONFIG > ~/.chime/chime.toml
    // Missing store coordinates abort startup here rather than per cycle.
    let config_path = std::env::var("CHIME_CONFIG").ok();
    let config = chime_core::ChimeConfig::load(config_path.as_deref())?;

    let bind = config.gateway.bind.clone();
    let port = config.gateway.port;

    let state = Arc::new(app::AppState::new(config));
    let router = app::build_router(state);

    let addr: SocketAddr = format!("{}:{}", bind, port).parse()?;
    info!("Chime gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
