//! procmatch CLI
//!
//! Reads a request document and prints the offerings that satisfy its
//! requirement as JSON on stdout.
//!
//! ## Usage
//!
//! ```bash
//! procmatch --input request.json --explain
//! cat request.json | procmatch
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `PROCMATCH_PARALLEL_THRESHOLD`: catalog size for parallel evaluation (default: 512)
//! - `RUST_LOG`: Logging filter (default: the `--log-level` flag)

use clap::Parser;
use procmatch::{build_report, load_request, Args, Config};
use procmatch_core::MatchEngine;
use tracing::{debug, info};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_args(Args::parse())?;

    procmatch::tracing::init_with_filter(&config.log_level);
    debug!(
        parallel_threshold = config.parallel_threshold,
        explain = config.explain,
        "configuration resolved"
    );

    let request = load_request(config.input.as_deref())?;
    let engine = MatchEngine::with_config(config.engine_config());
    let report = build_report(&request, &engine, config.explain);

    info!("{}", report.summary());
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
