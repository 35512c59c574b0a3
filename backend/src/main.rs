//! Backend entry-point: parses the CLI, seeds the store, and runs the server.

use std::net::SocketAddr;

use actix_web::web;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::domain::Store;
use backend::server::{ServerConfig, create_server};

/// Taskboard backend server.
#[derive(Parser)]
#[command(name = "backend", about = "In-memory users and tasks API")]
struct Cli {
    /// Socket address to listen on.
    #[arg(long, default_value = "0.0.0.0:8000")]
    bind: SocketAddr,
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();
    let config = ServerConfig::new(cli.bind);
    let store = web::Data::new(Store::seeded());

    info!(bind = %config.bind_addr(), "starting server");
    create_server(&config, store)?.await
}
