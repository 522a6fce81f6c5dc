//! JSON entry points for callers outside Rust.
//!
//! Each function takes a JSON document, runs the matching engine and returns
//! a JSON document. Failures come back as `{"error": "..."}` rather than a
//! panic or a Rust error, so the functions can sit directly behind an FFI or
//! WASM boundary.

use serde::{Deserialize, Serialize};

use crate::capability::{OfferingSet, RequirementSet};
use crate::matching::{evaluate, MatchEngine, RequirementOutcome};

/// Input for `satisfies_json`.
#[derive(Debug, Deserialize)]
pub struct SatisfiesInput {
    pub requirement: RequirementSet,
    pub offering: OfferingSet,
}

/// Output of `satisfies_json`.
#[derive(Debug, Serialize)]
pub struct SatisfiesOutput {
    pub satisfied: bool,
    /// Required attributes the offering does not provide
    pub unmet: Vec<RequirementOutcome>,
}

/// Input for `find_satisfying_json`.
#[derive(Debug, Deserialize)]
pub struct FindInput {
    pub requirement: RequirementSet,
    pub offerings: Vec<OfferingSet>,
}

/// Output of `find_satisfying_json`.
#[derive(Debug, Serialize)]
pub struct FindOutput<'a> {
    pub offerings: Vec<&'a OfferingSet>,
    pub matched: usize,
    pub total: usize,
    /// Catalog positions excluded because their evaluation failed
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<usize>,
}

fn error_json(message: String) -> String {
    serde_json::json!({ "error": message }).to_string()
}

/// JSON entry point: deserialize a requirement and one offering, evaluate,
/// serialize the verdict with the unmet requirements.
pub fn satisfies_json(input: &str) -> String {
    let parsed: SatisfiesInput = match serde_json::from_str(input) {
        Ok(v) => v,
        Err(e) => return error_json(format!("invalid satisfies input: {}", e)),
    };

    let evaluation = match evaluate(&parsed.requirement, &parsed.offering) {
        Ok(evaluation) => evaluation,
        Err(e) => return error_json(e.to_string()),
    };

    let output = SatisfiesOutput {
        satisfied: evaluation.satisfied,
        unmet: evaluation.unmet().cloned().collect(),
    };

    match serde_json::to_string(&output) {
        Ok(json) => json,
        Err(e) => error_json(format!("serialization failed: {}", e)),
    }
}

/// JSON entry point: deserialize a requirement and a catalog, filter,
/// serialize the satisfying offerings in catalog order.
pub fn find_satisfying_json(input: &str) -> String {
    let parsed: FindInput = match serde_json::from_str(input) {
        Ok(v) => v,
        Err(e) => return error_json(format!("invalid find input: {}", e)),
    };

    let outcome = MatchEngine::new().filter_catalog(&parsed.requirement, &parsed.offerings);

    let offerings = outcome.select(&parsed.offerings);
    let output = FindOutput {
        matched: offerings.len(),
        offerings,
        total: outcome.total,
        skipped: outcome.skipped,
    };

    match serde_json::to_string(&output) {
        Ok(json) => json,
        Err(e) => error_json(format!("serialization failed: {}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn requirement() -> Value {
        json!({
            "attributes": [
                {
                    "semantics": ["Milling", "Milling Technology"],
                    "description": "Milling technology",
                    "value": {"text": "3 Axes"}
                },
                {
                    "semantics": ["Milling", "Dimensions"],
                    "kind": "Minimum",
                    "value": {"vector": [350.0, 50.0, 40.0]}
                }
            ]
        })
    }

    fn offering(resource: &str, technology: &str, dims: [f64; 3]) -> Value {
        json!({
            "resource_locator": resource,
            "attributes": [
                {"semantics": ["Milling", "Milling Technology"], "value": {"text": technology}},
                {"semantics": ["Milling", "Dimensions"], "kind": "minimum", "value": {"vector": dims}}
            ]
        })
    }

    #[test]
    fn satisfies_json_reports_unmet() {
        let input = json!({
            "requirement": requirement(),
            "offering": offering("urn:small", "3 Axes", [15.0, 10.0, 15.0]),
        });

        let result = satisfies_json(&input.to_string());
        let parsed: Value = serde_json::from_str(&result).unwrap();

        assert!(parsed["error"].is_null(), "unexpected error: {}", result);
        assert_eq!(parsed["satisfied"], false);
        assert_eq!(parsed["unmet"].as_array().unwrap().len(), 1);
        assert_eq!(
            parsed["unmet"][0]["semantics"],
            json!(["Milling", "Dimensions"])
        );
        assert_eq!(parsed["unmet"][0]["kind"], "minimum");
    }

    #[test]
    fn satisfies_json_match() {
        let input = json!({
            "requirement": requirement(),
            "offering": offering("urn:big", "3 Axes", [600.0, 600.0, 150.0]),
        });

        let parsed: Value = serde_json::from_str(&satisfies_json(&input.to_string())).unwrap();
        assert_eq!(parsed["satisfied"], true);
        assert!(parsed["unmet"].as_array().unwrap().is_empty());
    }

    #[test]
    fn find_satisfying_json_roundtrip() {
        let input = json!({
            "requirement": requirement(),
            "offerings": [
                offering("urn:1", "3 Axes", [600.0, 600.0, 150.0]),
                offering("urn:2", "2 Axes", [1200.0, 1200.0, 150.0]),
                offering("urn:3", "3 Axes", [15.0, 10.0, 15.0]),
            ]
        });

        let result = find_satisfying_json(&input.to_string());
        let parsed: Value = serde_json::from_str(&result).unwrap();

        assert!(parsed["error"].is_null(), "unexpected error: {}", result);
        assert_eq!(parsed["total"], 3);
        assert_eq!(parsed["matched"], 1);
        assert_eq!(parsed["offerings"][0]["resource_locator"], "urn:1");
        assert!(parsed.get("skipped").is_none());
    }

    #[test]
    fn find_satisfying_json_invalid_input() {
        let result = find_satisfying_json("not json");
        let parsed: Value = serde_json::from_str(&result).unwrap();
        assert!(parsed["error"]
            .as_str()
            .unwrap()
            .contains("invalid find input"));
    }

    #[test]
    fn construction_errors_surface_as_input_errors() {
        let input = json!({
            "requirement": {"attributes": [
                {"semantics": ["Milling"], "kind": "exact", "value": {"scalar": 1.0}}
            ]},
            "offering": offering("urn:1", "3 Axes", [1.0, 1.0, 1.0]),
        });

        let result = satisfies_json(&input.to_string());
        let parsed: Value = serde_json::from_str(&result).unwrap();
        let message = parsed["error"].as_str().unwrap();
        assert!(message.contains("invalid satisfies input"), "{}", message);
        assert!(message.contains("not supported for scalar"), "{}", message);
    }
}
