//! Capability attributes - the core data model of procmatch
//!
//! An attribute names a position in a capability ontology (its semantic path),
//! says how it is compared (exact, minimum, maximum) and carries exactly one
//! value: text, a scalar or a dimensional vector.
//!
//! # Example
//!
//! ```rust
//! use procmatch_core::attribute::{Attribute, ComparisonKind, SemanticPath};
//!
//! let technology = Attribute::text(
//!     SemanticPath::new(["Milling", "Milling Technology"]),
//!     "Milling technology",
//!     "3 Axes",
//! );
//! assert_eq!(technology.kind(), ComparisonKind::Exact);
//!
//! let speed = Attribute::scalar(
//!     SemanticPath::new(["Milling", "Rotation speed"]),
//!     "Rotation speed in rpm",
//!     30.0,
//!     ComparisonKind::Minimum,
//! )
//! .unwrap();
//! assert_eq!(speed.value().as_scalar(), Some(30.0));
//! ```

mod types;

pub use types::{Attribute, AttributeValue, ComparisonKind, SemanticPath};
