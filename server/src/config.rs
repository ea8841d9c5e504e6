//! Server configuration from the command line and environment
//!
//! Every flag falls back to a `CMS_*` environment variable; a `.env` file in
//! the working directory (or a parent) is loaded before parsing.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;
use shared::SharedError;

use crate::error::ServerResult;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Command line arguments for the server binary
#[derive(Parser, Debug, Clone)]
#[command(name = "cms-server")]
#[command(about = "Course management REST service")]
pub struct Args {
    /// Interface to bind the HTTP server to
    #[arg(long, env = "CMS_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port for the HTTP server
    #[arg(long, env = "CMS_PORT", default_value = "8080")]
    pub port: u16,

    /// SQLite database file, or `:memory:` for a throwaway database
    #[arg(long, env = "CMS_DATABASE", default_value = "./data/cms.db")]
    pub database: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "CMS_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Load `.env` if present, then parse the process arguments
    pub fn load() -> Self {
        // A missing .env file is fine
        let _ = dotenv::dotenv();
        Self::parse()
    }
}

/// Validated server settings
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_address: SocketAddr,
    pub database: PathBuf,
    pub log_level: String,
}

impl ServerConfig {
    pub fn from_args(args: Args) -> ServerResult<Self> {
        let host: IpAddr = args.host.parse().map_err(|_| SharedError::InvalidConfig {
            field: "host".into(),
            value: args.host.clone(),
        })?;

        let log_level = args.log_level.to_lowercase();
        if !LOG_LEVELS.contains(&log_level.as_str()) {
            return Err(SharedError::InvalidConfig {
                field: "log_level".into(),
                value: args.log_level,
            }
            .into());
        }

        Ok(Self {
            bind_address: SocketAddr::new(host, args.port),
            database: args.database,
            log_level,
        })
    }
}
