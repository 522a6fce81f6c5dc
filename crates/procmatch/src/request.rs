//! Request documents: one requirement plus the catalog to filter.

use std::fs;
use std::io::Read;
use std::path::Path;

use procmatch_core::{AttributeSet, OfferingSet, RequirementSet};
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

/// A requirement and the candidate offerings it is matched against
#[derive(Debug, Clone, Deserialize)]
pub struct MatchRequest {
    pub requirement: RequirementSet,
    #[serde(default)]
    pub offerings: Vec<OfferingSet>,
}

/// Parse a request document.
///
/// Attribute validation happens during deserialization, so a document with
/// an invalid attribute is rejected as a whole.
pub fn parse_request(input: &str) -> Result<MatchRequest> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::Request("empty request document".to_string()));
    }

    let request: MatchRequest = serde_json::from_str(trimmed)?;
    if request.requirement.is_empty() {
        // Still a valid request; it will simply match nothing
        debug!("request carries an empty requirement");
    }

    Ok(request)
}

/// Load a request document from `path`, or from stdin when `path` is `None`.
pub fn load_request(path: Option<&Path>) -> Result<MatchRequest> {
    let input = match path {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| Error::Request(format!("unable to read {}: {}", path.display(), e)))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let request = parse_request(&input)?;
    debug!(
        requirements = request.requirement.len(),
        offerings = request.offerings.len(),
        "request loaded"
    );
    Ok(request)
}
