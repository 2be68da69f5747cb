#![recursion_limit = "256"]

mod config;
mod routes;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; real deployments set the environment.
    let _ = dotenvy::dotenv();

    // Also captures `log` records emitted by the client crate during SSR.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let app = routes::app().expect("router init failed");

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await.expect("failed to bind");

    tracing::info!(%addr, "storerate listening");
    axum::serve(listener, app).await.expect("server failed");
}
