//! Match reports printed by the CLI

use procmatch_core::{evaluate, Evaluation, MatchEngine, OfferingSet};
use serde::Serialize;

use crate::request::MatchRequest;

/// Explanation for a single catalog entry
#[derive(Debug, Serialize)]
pub struct OfferingReport<'a> {
    pub position: usize,
    pub resource_locator: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<Evaluation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of matching one request
#[derive(Debug, Serialize)]
pub struct MatchReport<'a> {
    pub offerings: Vec<&'a OfferingSet>,
    pub matched: usize,
    pub total: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanations: Option<Vec<OfferingReport<'a>>>,
}

impl MatchReport<'_> {
    /// One-line summary for the log
    pub fn summary(&self) -> String {
        format!(
            "From {} offerings {} are possible",
            self.total, self.matched
        )
    }
}

/// Filter the request's catalog and, with `explain`, evaluate every entry.
pub fn build_report<'a>(
    request: &'a MatchRequest,
    engine: &MatchEngine,
    explain: bool,
) -> MatchReport<'a> {
    let outcome = engine.filter_catalog(&request.requirement, &request.offerings);
    let offerings = outcome.select(&request.offerings);

    let explanations = explain.then(|| {
        request
            .offerings
            .iter()
            .enumerate()
            .map(|(position, offering)| {
                let (evaluation, error) = match evaluate(&request.requirement, offering) {
                    Ok(evaluation) => (Some(evaluation), None),
                    Err(e) => (None, Some(e.to_string())),
                };
                OfferingReport {
                    position,
                    resource_locator: offering.resource_locator(),
                    evaluation,
                    error,
                }
            })
            .collect()
    });

    MatchReport {
        matched: offerings.len(),
        offerings,
        total: outcome.total,
        skipped: outcome.skipped,
        explanations,
    }
}
