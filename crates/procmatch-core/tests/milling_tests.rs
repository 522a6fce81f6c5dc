//! Catalog matching tests over a milling process

use pretty_assertions::assert_eq;
use procmatch_core::{
    find_satisfying, satisfies, Attribute, AttributeSet, ComparisonKind, MatchEngine, OfferingSet,
    RequirementSet, SemanticPath,
};

const RESOURCE_1: &str = "http://aas.example/shells/ResourceID/aas/";
const RESOURCE_2: &str = "http://aas.example/shells/ResourceID2/aas/";
const RESOURCE_3: &str = "http://aas.example/shells/ResourceID3/aas/";

fn technology_path() -> SemanticPath {
    SemanticPath::new(["Milling", "Milling Technology"])
}

fn rotation_path() -> SemanticPath {
    SemanticPath::new(["Milling", "Rotation speed"])
}

fn dimension_path() -> SemanticPath {
    SemanticPath::new(["Milling", "Dimensions"])
}

/// Helper to create a milling technology attribute
fn technology(value: &str) -> Attribute {
    Attribute::text(technology_path(), "Milling technology", value)
}

/// Helper to create a minimum rotation speed attribute
fn rotation(rpm: f64) -> Attribute {
    Attribute::scalar(
        rotation_path(),
        "Milling rotation speed attribute in rpm",
        rpm,
        ComparisonKind::Minimum,
    )
    .unwrap()
}

/// Helper to create a minimum dimension attribute
fn dimensions(x: f64, y: f64, z: f64) -> Attribute {
    Attribute::vector(
        dimension_path(),
        "Milling dimensions [x, y, z] in mm",
        vec![x, y, z],
        ComparisonKind::Minimum,
    )
    .unwrap()
}

fn milling_process() -> RequirementSet {
    RequirementSet::new(vec![
        technology("3 Axes"),
        rotation(30.0),
        dimensions(350.0, 50.0, 40.0),
    ])
}

fn milling_catalog() -> Vec<OfferingSet> {
    vec![
        OfferingSet::new(
            vec![
                technology("3 Axes"),
                technology("5 Axes"),
                rotation(12000.0),
                dimensions(600.0, 600.0, 150.0),
            ],
            RESOURCE_1,
        ),
        OfferingSet::new(
            vec![
                technology("2 Axes"),
                rotation(19000.0),
                dimensions(1200.0, 1200.0, 150.0),
            ],
            RESOURCE_2,
        ),
        OfferingSet::new(
            vec![
                technology("3 Axes"),
                rotation(20000.0),
                dimensions(15.0, 10.0, 15.0),
            ],
            RESOURCE_3,
        ),
    ]
}

#[test]
fn test_single_procedure_is_valid() {
    let catalog = milling_catalog();
    assert!(satisfies(&milling_process(), &catalog[0]));
}

#[test]
fn test_one_of_three_possible() {
    let catalog = milling_catalog();
    let possible = find_satisfying(&milling_process(), &catalog);

    assert_eq!(possible.len(), 1);
    assert_eq!(possible[0].resource_locator(), RESOURCE_1);
    assert!(std::ptr::eq(possible[0], &catalog[0]));
}

#[test]
fn test_rejection_reasons() {
    let catalog = milling_catalog();
    let process = milling_process();

    // Wrong technology on resource 2, too small on resource 3
    assert!(!satisfies(&process, &catalog[1]));
    assert!(!satisfies(&process, &catalog[2]));

    let evaluation = procmatch_core::evaluate(&process, &catalog[2]).unwrap();
    let unmet: Vec<&SemanticPath> = evaluation.unmet().map(|o| &o.semantics).collect();
    assert_eq!(unmet, vec![&dimension_path()]);
}

#[test]
fn test_process_locator_survives_filtering() {
    let mut catalog = milling_catalog();
    catalog[0].assign_process("urn:process:milling-3-axes");

    let possible = find_satisfying(&milling_process(), &catalog);
    assert_eq!(
        possible[0].process_locator(),
        Some("urn:process:milling-3-axes")
    );
}

#[test]
fn test_filter_equals_one_by_one() {
    let catalog = milling_catalog();
    let process = milling_process();

    let expected: Vec<&str> = catalog
        .iter()
        .filter(|offering| satisfies(&process, *offering))
        .map(|offering| offering.resource_locator())
        .collect();
    let found: Vec<&str> = find_satisfying(&process, &catalog)
        .into_iter()
        .map(|offering| offering.resource_locator())
        .collect();

    assert_eq!(found, expected);
}

// Exercises rayon only with `--features parallel`; otherwise both engines run sequentially
#[test]
fn test_parallel_threshold_does_not_change_result() {
    let mut catalog = Vec::new();
    for _ in 0..20 {
        catalog.extend(milling_catalog());
    }
    let process = milling_process();

    let sequential = MatchEngine::new().filter_catalog(&process, &catalog);
    let eager = MatchEngine::with_config(procmatch_core::EngineConfig {
        parallel_threshold: 1,
    })
    .filter_catalog(&process, &catalog);

    assert_eq!(sequential, eager);
    assert_eq!(sequential.matches.len(), 20);
    assert!(sequential.matches.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_looser_semantics_still_match() {
    // Requirement only names the leaf tag; offering carries a longer path
    let requirement = RequirementSet::new(vec![Attribute::scalar(
        SemanticPath::new(["Rotation speed"]),
        "",
        30.0,
        ComparisonKind::Minimum,
    )
    .unwrap()]);

    let catalog = milling_catalog();
    assert_eq!(find_satisfying(&requirement, &catalog).len(), 3);
}

#[test]
fn test_empty_requirement_matches_nothing() {
    let catalog = milling_catalog();
    let empty = RequirementSet::default();

    assert!(empty.is_empty());
    assert!(find_satisfying(&empty, &catalog).is_empty());
}

#[test]
fn test_catalog_from_json() {
    let catalog = milling_catalog();
    let json = serde_json::to_string(&catalog).unwrap();
    let parsed: Vec<OfferingSet> = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, catalog);
    assert_eq!(find_satisfying(&milling_process(), &parsed).len(), 1);
}
