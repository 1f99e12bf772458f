use anyhow::Context;
use car_registry::{CarRegistryServer, RegistryConfig};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "car-registry")]
#[command(about = "In-memory car listing service with a JSON CRUD API")]
struct Args {
    /// Address to bind
    #[arg(long, env = "CAR_REGISTRY_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on (0 picks a free port)
    #[arg(short, long, env = "CAR_REGISTRY_PORT", default_value_t = 8080)]
    port: u16,

    /// Directory containing swagger.json and swagger-ui/
    #[arg(long, env = "CAR_REGISTRY_DOCS_DIR", default_value = "docs")]
    docs_dir: PathBuf,

    /// Start without the sample listings
    #[arg(long)]
    empty: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

fn init_logger(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("car_registry=info,tower_http=info"));

    let layer = tracing_subscriber::fmt::layer().with_target(false);
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(layer.json()).init();
    } else {
        registry.with(layer.compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger(args.json_logs);

    let config = if args.empty {
        RegistryConfig::empty()
    } else {
        RegistryConfig::sample()
    };
    let config = config
        .with_host(args.host)
        .with_port(args.port)
        .with_docs_dir(args.docs_dir);

    let server = CarRegistryServer::new(config)
        .await
        .context("failed to start car registry")?;
    tracing::info!("Serving cars at {}/cars", server.url());

    tokio::select! {
        result = server.wait() => result.context("car registry stopped")?,
        signal = tokio::signal::ctrl_c() => {
            signal.context("failed to listen for Ctrl+C")?;
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
