mod config;
mod error;
mod filter;
mod model;
mod protocol;
mod render;
mod server;
mod store;

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use config::{Config, LogConfig};
use server::Server;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Kasir product and category catalog service
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
  /// Path to an INI configuration file
  #[arg(short, long)]
  config: Option<PathBuf>,

  /// Listening address, overrides the configuration file
  #[arg(short, long)]
  addr: Option<String>,
}

fn init_logging(log: &LogConfig) -> anyhow::Result<()> {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
  let builder = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_target(true)
    .with_thread_ids(true);

  match &log.file {
    Some(path) => {
      let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file '{}'", path))?;
      builder.with_ansi(false).with_writer(Mutex::new(file)).init();
    }
    None => builder.init(),
  }
  Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let args = Args::parse();

  let mut config = match &args.config {
    Some(path) => Config::from_file(path)?,
    None => Config::default(),
  };
  if let Some(addr) = args.addr {
    config.server_addr = addr;
  }

  init_logging(&config.log)?;

  info!("Starting Kasir catalog service");
  info!("Version: {}", env!("CARGO_PKG_VERSION"));

  let server = Server::start(config)
    .await
    .context("failed to bind HTTP listener")?;
  info!("Dashboard API available at http://{}", server.local_addr());

  server.run().await?;

  Ok(())
}
