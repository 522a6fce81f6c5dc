//! # procmatch tooling
//!
//! Shared infrastructure around `procmatch-core` for the `procmatch` binary:
//! - **config**: command-line and environment configuration
//! - **request**: loading request documents (requirement + catalog)
//! - **report**: the JSON match report
//! - **error**: common error type
//! - **tracing**: logging setup
//!
//! ## Usage
//!
//! ```rust,ignore
//! use procmatch::{build_report, load_request, Config};
//! use procmatch_core::MatchEngine;
//! ```

pub mod config;
pub mod error;
pub mod report;
pub mod request;
pub mod tracing;

// Re-export commonly used items at crate root
pub use config::{Args, Config};
pub use error::{Error, Result};
pub use report::{build_report, MatchReport, OfferingReport};
pub use request::{load_request, parse_request, MatchRequest};
