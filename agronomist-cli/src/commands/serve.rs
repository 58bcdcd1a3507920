//! HTTP server command
//!
//! Runs the web UI with all page, API, and health routes.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use agronomist_server::{run_server, ServerConfig};

use crate::config::AgronomistConfig;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default from config, else 127.0.0.1:8501)
    #[arg(long, short = 'b', env = "AGRONOMIST_BIND")]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Request timeout in seconds (at least 1)
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,
}

impl ServeArgs {
    /// Merge flags over the config file.
    pub fn server_config(&self, config: &AgronomistConfig) -> ServerConfig {
        ServerConfig {
            bind_addr: self.bind.unwrap_or(config.server.bind),
            cors_permissive: self.cors_permissive || config.server.cors_permissive,
            request_timeout: Duration::from_secs(
                self.timeout.unwrap_or(config.server.request_timeout_secs),
            ),
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, config: &AgronomistConfig) -> Result<()> {
    let server_config = args.server_config(config);

    tracing::info!(
        bind = %server_config.bind_addr,
        timeout_secs = server_config.request_timeout.as_secs(),
        "Starting AIAgronomist server"
    );

    // Blocks until shutdown
    run_server(server_config).await.context("Server error")?;

    Ok(())
}
