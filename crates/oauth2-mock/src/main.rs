//! Mock OAuth2 authorization server - entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use oauth2_mock::config::Config;
use oauth2_mock::server;

#[derive(Parser, Debug)]
#[command(name = "oauth2-mock")]
#[command(about = "Mock OAuth2 authorization server for client testing")]
#[command(version)]
struct Cli {
    /// TCP port to bind (0 picks an ephemeral port, logged at startup)
    #[arg(long, default_value = "0", env = "PORT")]
    port: u16,

    /// Shared secret used to HS512-sign issued tokens
    #[arg(long, env = "TOKEN_SIGNING_KEY", hide_env_values = true)]
    signing_secret: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        port = cli.port,
        "Starting mock OAuth2 authorization server"
    );

    let config = Config::new(cli.port, cli.signing_secret);
    server::run(config).await
}
