use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use wellness_hub_rs::error::Result;
use wellness_hub_rs::logging::LoggingConfig;
use wellness_hub_rs::relay::upstream::{DEFAULT_PAGE_SIZE, DEFAULT_UPSTREAM_URL};
use wellness_hub_rs::relay::{RelayConfig, UsdaUpstream, router};

#[derive(Parser, Debug)]
#[command(name = "relay")]
#[command(about = "Relay for the USDA FoodData Central API that keeps the API key server-side")]
struct Args {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 5000)]
    port: u16,

    /// USDA FoodData Central API key.
    #[arg(long, env = "USDA_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Upstream API base URL.
    #[arg(long, env = "USDA_BASE_URL", default_value = DEFAULT_UPSTREAM_URL)]
    upstream_url: String,

    /// Results per search.
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: u32,

    /// Upstream request timeout in seconds.
    #[arg(long, default_value_t = 15)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() {
    if let Err(e) = LoggingConfig::from_env("info").init() {
        eprintln!("Error: {}", e);
    }

    if let Err(e) = run().await {
        error!(error = %e, "relay stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args = Args::parse();

    let upstream = UsdaUpstream::new(RelayConfig {
        base_url: args.upstream_url,
        api_key: args.api_key,
        page_size: args.page_size,
        timeout: Duration::from_secs(args.timeout_secs),
    })?;

    if upstream.has_api_key() {
        info!("USDA API key present");
    } else {
        warn!("USDA_API_KEY not set; food requests will fail until it is configured");
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "relay listening");

    axum::serve(listener, router(Arc::new(upstream)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("relay shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
    }
}
