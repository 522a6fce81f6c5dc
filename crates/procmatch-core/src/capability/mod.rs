//! Attribute-bearing capability sets
//!
//! A [`RequirementSet`] lists what a process needs; an [`OfferingSet`] lists
//! what a concrete procedure on a physical resource provides, together with
//! the locator of that resource. Both expose their attributes through the
//! [`AttributeSet`] trait, which is what the matching engine works against.

mod sets;

pub use sets::{AttributeSet, OfferingSet, RequirementSet};
