//! CLI configuration
//!
//! Command-line flags win; `PROCMATCH_PARALLEL_THRESHOLD` fills in the
//! parallel threshold when no flag is given, then the engine default applies.

use std::path::PathBuf;

use clap::Parser;
use procmatch_core::EngineConfig;
use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

/// Environment variable consulted for the parallel threshold
pub const PARALLEL_THRESHOLD_ENV: &str = "PROCMATCH_PARALLEL_THRESHOLD";

#[derive(Parser, Debug, Clone)]
#[command(name = "procmatch")]
#[command(about = "Match a process requirement against a catalog of procedure offerings")]
#[command(version)]
pub struct Args {
    /// Request document (JSON with `requirement` and `offerings`); stdin when omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Log filter: a level (trace, debug, info, warn, error, off) or directives
    /// such as `procmatch_core=debug`
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Catalog size at which offerings are evaluated in parallel
    #[arg(long)]
    pub parallel_threshold: Option<usize>,

    /// Include a per-offering evaluation in the output
    #[arg(long)]
    pub explain: bool,
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub input: Option<PathBuf>,
    pub log_level: String,
    pub parallel_threshold: usize,
    pub explain: bool,
}

impl Config {
    /// Resolve arguments against the process environment.
    pub fn from_args(args: Args) -> Result<Self> {
        Self::resolve(args, std::env::var(PARALLEL_THRESHOLD_ENV).ok())
    }

    /// Resolve arguments against an explicit threshold override.
    pub fn resolve(args: Args, env_threshold: Option<String>) -> Result<Self> {
        let log_level = args.log_level.trim().to_string();
        if let Err(e) = EnvFilter::try_new(&log_level) {
            return Err(Error::Config(format!("invalid log filter '{}': {}", args.log_level, e)));
        }

        let parallel_threshold = match (args.parallel_threshold, env_threshold) {
            (Some(threshold), _) => threshold,
            (None, Some(raw)) => raw.trim().parse::<usize>().map_err(|_| {
                Error::Config(format!(
                    "{} must be a non-negative integer, got '{}'",
                    PARALLEL_THRESHOLD_ENV, raw
                ))
            })?,
            (None, None) => EngineConfig::default().parallel_threshold,
        };

        Ok(Self {
            input: args.input,
            log_level,
            parallel_threshold,
            explain: args.explain,
        })
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            parallel_threshold: self.parallel_threshold,
        }
    }
}
