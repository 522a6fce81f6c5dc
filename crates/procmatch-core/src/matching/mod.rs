//! Matching Engine
//!
//! Decides whether an offering provides everything a requirement needs and
//! filters a catalog of offerings down to the ones that do.
//!
//! # Rules
//!
//! A required attribute is met by an offered attribute when every tag of the
//! required semantic path appears in the offered path and the values compare
//! according to the required comparison kind:
//!
//! 1. Exact text - string equality
//! 2. Exact vector - every required component present in the offered vector
//! 3. Minimum scalar/vector - offered meets or exceeds required (per position)
//! 4. Maximum scalar/vector - offered does not exceed required (per position)
//!
//! An offering satisfies a requirement when every required attribute is met by
//! at least one offered attribute. An empty requirement is never satisfied.
//!
//! # Example
//!
//! ```rust
//! use procmatch_core::attribute::{Attribute, ComparisonKind, SemanticPath};
//! use procmatch_core::capability::{OfferingSet, RequirementSet};
//! use procmatch_core::matching::{find_satisfying, satisfies};
//!
//! let path = SemanticPath::new(["Milling", "Rotation speed"]);
//! let requirement = RequirementSet::new(vec![
//!     Attribute::scalar(path.clone(), "rpm", 30.0, ComparisonKind::Minimum).unwrap(),
//! ]);
//! let fast = OfferingSet::new(
//!     vec![Attribute::scalar(path.clone(), "rpm", 12000.0, ComparisonKind::Minimum).unwrap()],
//!     "urn:resource:fast",
//! );
//! let slow = OfferingSet::new(
//!     vec![Attribute::scalar(path, "rpm", 10.0, ComparisonKind::Minimum).unwrap()],
//!     "urn:resource:slow",
//! );
//!
//! assert!(satisfies(&requirement, &fast));
//! let catalog = vec![slow, fast];
//! let found = find_satisfying(&requirement, &catalog);
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].resource_locator(), "urn:resource:fast");
//! ```

mod engine;
pub mod primitives;

pub use engine::{
    attribute_matches, evaluate, find_satisfying, satisfies, try_satisfies, EngineConfig,
    Evaluation, FilterOutcome, MatchEngine, RequirementOutcome,
};
pub use primitives::{meets_maximum, meets_minimum, semantics_compatible, values_compatible};
