#![recursion_limit = "256"]

mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine; real environments set variables directly.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cookieflix=info,tower_http=info".into()),
        )
        .init();

    let config = config::ServerConfig::from_env()?;
    let port = config.port;
    tracing::info!(upstream = %config.api_upstream_url, timeout = ?config.proxy_timeout, "config loaded");

    let state = state::AppState::new(config)?;
    let app = routes::app(state)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "cookieflix listening");
    axum::serve(listener, app).await?;
    Ok(())
}
