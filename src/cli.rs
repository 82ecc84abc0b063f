//! CLI and process bootstrap
//!
//! Parses arguments, assembles the config, store, and log sink, and runs
//! the server on a tokio runtime. The store handle is created once here and
//! lives for the process lifetime; there is no explicit teardown.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use thiserror::Error;

use crate::api::ApiServer;
use crate::config::ServerConfig;
use crate::observe::LogSink;
use crate::store::MemoryStore;

/// cartrack - a paginated REST service over vehicle and accident records
#[derive(Parser, Debug)]
#[command(name = "cartrack")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind to
    #[arg(long, default_value_t = 8080)]
    pub port: u16,

    /// Public base URL used in page links (defaults to http://<host>:<port>)
    #[arg(long)]
    pub public_url: Option<String>,

    /// Append structured logs to this file instead of stdout
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Runtime construction or server I/O failure
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Parse arguments and run the server until the process exits.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse();

    let config = ServerConfig {
        public_url: cli
            .public_url
            .unwrap_or_else(|| format!("http://{}:{}", cli.host, cli.port)),
        host: cli.host,
        port: cli.port,
    };
    let log = match cli.log_file {
        Some(path) => LogSink::to_file(path),
        None => LogSink::stdout(),
    };

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(serve(config, log))
}

async fn serve(config: ServerConfig, log: LogSink) -> CliResult<()> {
    log.info("server.start", &[("addr", &config.socket_addr())]);

    let store = Arc::new(MemoryStore::new());
    let server = ApiServer::new(config, store, log.clone());
    if let Err(e) = server.start().await {
        log.error("server.failed", &[("error", &e.to_string())]);
        return Err(e.into());
    }
    Ok(())
}
