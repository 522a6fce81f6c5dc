//! procmatch Core Engine
//!
//! This crate matches manufacturing process requirements against the
//! capabilities offered by physical resources. It is a pure computational
//! kernel: no I/O, no global state, every operation is a total function over
//! borrowed inputs.
//!
//! # Features
//!
//! - `parallel` - Parallel catalog filtering via rayon for large catalogs
//!
//! # Example
//!
//! ```rust
//! use procmatch_core::attribute::{Attribute, ComparisonKind, SemanticPath};
//! use procmatch_core::capability::{OfferingSet, RequirementSet};
//! use procmatch_core::matching::satisfies;
//!
//! let milling = SemanticPath::new(["Milling"]);
//! let dimensions = milling.child("Dimensions");
//!
//! let requirement = RequirementSet::new(vec![
//!     Attribute::text(milling.child("Milling Technology"), "technology", "3 Axes"),
//!     Attribute::vector(dimensions.clone(), "[x, y, z] in mm", vec![350.0, 50.0, 40.0], ComparisonKind::Minimum).unwrap(),
//! ]);
//!
//! let offering = OfferingSet::new(
//!     vec![
//!         Attribute::text(milling.child("Milling Technology"), "technology", "3 Axes"),
//!         Attribute::vector(dimensions, "[x, y, z] in mm", vec![600.0, 600.0, 150.0], ComparisonKind::Minimum).unwrap(),
//!     ],
//!     "http://aas.example/shells/ResourceID/aas/",
//! );
//!
//! assert!(satisfies(&requirement, &offering));
//! ```

pub mod attribute;
pub mod capability;
pub mod error;
pub mod json;
pub mod matching;

// Re-export main types at crate root
pub use attribute::{Attribute, AttributeValue, ComparisonKind, SemanticPath};
pub use capability::{AttributeSet, OfferingSet, RequirementSet};
pub use error::{ConstructionError, MatchError, MatchResult};
pub use json::{find_satisfying_json, satisfies_json};
pub use matching::{
    attribute_matches, evaluate, find_satisfying, meets_maximum, meets_minimum, satisfies,
    semantics_compatible, try_satisfies, values_compatible, EngineConfig, Evaluation,
    FilterOutcome, MatchEngine, RequirementOutcome,
};
