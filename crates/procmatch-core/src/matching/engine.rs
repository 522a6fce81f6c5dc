//! MatchEngine - requirement containment and catalog filtering

use serde::Serialize;
use tracing::{debug, warn};

use super::primitives::{meets_maximum, meets_minimum, semantics_compatible, values_compatible};
use crate::attribute::{Attribute, AttributeValue, ComparisonKind, SemanticPath};
use crate::capability::{AttributeSet, OfferingSet, RequirementSet};
use crate::error::{MatchError, MatchResult};

#[cfg(all(not(target_arch = "wasm32"), feature = "parallel"))]
use rayon::prelude::*;

/// Compare one required attribute against one offered attribute.
///
/// The offered semantic path must contain every tag of the required path;
/// otherwise the pair does not match. An offered value of a different variant
/// than the required one never matches. Returns `InvariantViolation` for a
/// required kind/value pairing the constructors do not produce.
pub fn attribute_matches(required: &Attribute, offered: &Attribute) -> MatchResult<bool> {
    if !semantics_compatible(required.semantics().tags(), offered.semantics().tags()) {
        return Ok(false);
    }

    let candidate = offered.value();
    let matched = match (required.kind(), required.value()) {
        (ComparisonKind::Exact, AttributeValue::Text(r)) => {
            candidate.as_text().is_some_and(|o| o == r.as_str())
        }
        (ComparisonKind::Exact, AttributeValue::Vector(r)) => candidate
            .as_vector()
            .is_some_and(|o| values_compatible(r.as_slice(), o)),
        (ComparisonKind::Minimum, AttributeValue::Scalar(r)) => {
            candidate.as_scalar().is_some_and(|o| *r <= o)
        }
        (ComparisonKind::Minimum, AttributeValue::Vector(r)) => {
            candidate.as_vector().is_some_and(|o| meets_minimum(r, o))
        }
        (ComparisonKind::Maximum, AttributeValue::Scalar(r)) => {
            candidate.as_scalar().is_some_and(|o| *r >= o)
        }
        (ComparisonKind::Maximum, AttributeValue::Vector(r)) => {
            candidate.as_vector().is_some_and(|o| meets_maximum(r, o))
        }
        (kind, value) => {
            return Err(MatchError::InvariantViolation {
                kind,
                value: value.variant_name(),
            });
        }
    };

    Ok(matched)
}

/// Index of the first offered attribute that meets `required`, if any.
fn first_match(required: &Attribute, offered: &[Attribute]) -> MatchResult<Option<usize>> {
    for (idx, candidate) in offered.iter().enumerate() {
        if attribute_matches(required, candidate)? {
            return Ok(Some(idx));
        }
    }
    Ok(None)
}

/// Decide whether `offering` provides everything `requirement` needs.
///
/// Every required attribute must be met by at least one offered attribute.
/// Extra offered attributes are ignored. An empty requirement is never
/// satisfied.
///
/// All required attributes are examined before deciding, so an invariant
/// violation is reported whatever its position in the requirement.
pub fn try_satisfies<R, O>(requirement: &R, offering: &O) -> MatchResult<bool>
where
    R: AttributeSet + ?Sized,
    O: AttributeSet + ?Sized,
{
    if requirement.is_empty() {
        return Ok(false);
    }

    let mut satisfied = true;
    for required in requirement.attributes() {
        if first_match(required, offering.attributes())?.is_none() {
            satisfied = false;
        }
    }

    Ok(satisfied)
}

/// Like [`try_satisfies`], treating an evaluation error as "not satisfied".
pub fn satisfies<R, O>(requirement: &R, offering: &O) -> bool
where
    R: AttributeSet + ?Sized,
    O: AttributeSet + ?Sized,
{
    match try_satisfies(requirement, offering) {
        Ok(satisfied) => satisfied,
        Err(e) => {
            warn!(error = %e, "requirement evaluation failed, treating as unsatisfied");
            false
        }
    }
}

/// Outcome for a single required attribute
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequirementOutcome {
    pub semantics: SemanticPath,
    pub description: String,
    pub kind: ComparisonKind,
    /// Index of the first offered attribute meeting this requirement
    pub matched_by: Option<usize>,
}

impl RequirementOutcome {
    pub fn is_met(&self) -> bool {
        self.matched_by.is_some()
    }
}

/// Per-attribute explanation of a requirement/offering comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub satisfied: bool,
    pub outcomes: Vec<RequirementOutcome>,
}

impl Evaluation {
    /// Required attributes no offered attribute met
    pub fn unmet(&self) -> impl Iterator<Item = &RequirementOutcome> {
        self.outcomes.iter().filter(|o| !o.is_met())
    }
}

/// Evaluate every required attribute against the offering.
///
/// Unlike [`try_satisfies`] this does not stop at the first unmet attribute,
/// so the result lists everything the offering lacks.
pub fn evaluate<R, O>(requirement: &R, offering: &O) -> MatchResult<Evaluation>
where
    R: AttributeSet + ?Sized,
    O: AttributeSet + ?Sized,
{
    let outcomes = requirement
        .attributes()
        .iter()
        .map(|required| {
            Ok(RequirementOutcome {
                semantics: required.semantics().clone(),
                description: required.description().to_string(),
                kind: required.kind(),
                matched_by: first_match(required, offering.attributes())?,
            })
        })
        .collect::<MatchResult<Vec<_>>>()?;

    let satisfied = !outcomes.is_empty() && outcomes.iter().all(RequirementOutcome::is_met);

    Ok(Evaluation {
        satisfied,
        outcomes,
    })
}

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Catalog size at which filtering switches to parallel evaluation
    /// (only with the `parallel` feature)
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 512,
        }
    }
}

/// Result of filtering a catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterOutcome {
    /// Catalog positions of satisfying offerings, ascending
    pub matches: Vec<usize>,
    /// Catalog positions excluded because their evaluation failed
    pub skipped: Vec<usize>,
    /// Number of offerings examined
    pub total: usize,
}

impl FilterOutcome {
    /// Resolve the matched positions against the catalog they came from
    pub fn select<'a>(&self, offerings: &'a [OfferingSet]) -> Vec<&'a OfferingSet> {
        self.matches
            .iter()
            .filter_map(|&idx| offerings.get(idx))
            .collect()
    }
}

/// Catalog filter over offering sets
///
/// On native with the `parallel` feature, uses rayon for large catalogs.
/// Result order always follows catalog order.
#[derive(Debug, Clone, Default)]
pub struct MatchEngine {
    config: EngineConfig,
}

impl MatchEngine {
    /// Create a new MatchEngine with default configuration
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluate every offering, keeping satisfying and failed positions apart.
    ///
    /// A failing offering is skipped; the scan always covers the full catalog.
    pub fn filter_catalog(
        &self,
        requirement: &RequirementSet,
        offerings: &[OfferingSet],
    ) -> FilterOutcome {
        let decisions = self.decide_catalog(requirement, offerings);

        let mut outcome = FilterOutcome {
            total: offerings.len(),
            ..Default::default()
        };

        for (idx, decision) in decisions.into_iter().enumerate() {
            let resource = offerings[idx].resource_locator();
            match decision {
                Ok(true) => {
                    debug!(resource, "offering satisfies requirement");
                    outcome.matches.push(idx);
                }
                Ok(false) => debug!(resource, "offering rejected"),
                Err(e) => {
                    warn!(resource, error = %e, "skipping offering");
                    outcome.skipped.push(idx);
                }
            }
        }

        debug!(
            total = outcome.total,
            matched = outcome.matches.len(),
            skipped = outcome.skipped.len(),
            "catalog filtered"
        );

        outcome
    }

    /// Every offering satisfying `requirement`, in catalog order
    pub fn find_satisfying<'a>(
        &self,
        requirement: &RequirementSet,
        offerings: &'a [OfferingSet],
    ) -> Vec<&'a OfferingSet> {
        self.filter_catalog(requirement, offerings)
            .select(offerings)
    }

    /// Decide the catalog - parallel on native, sequential otherwise
    #[cfg(all(not(target_arch = "wasm32"), feature = "parallel"))]
    fn decide_catalog(
        &self,
        requirement: &RequirementSet,
        offerings: &[OfferingSet],
    ) -> Vec<MatchResult<bool>> {
        if offerings.len() >= self.config.parallel_threshold {
            // Indexed collect keeps catalog order
            offerings
                .par_iter()
                .map(|offering| try_satisfies(requirement, offering))
                .collect()
        } else {
            self.decide_sequential(requirement, offerings)
        }
    }

    /// Sequential decision (WASM or when parallel feature disabled)
    #[cfg(any(target_arch = "wasm32", not(feature = "parallel")))]
    fn decide_catalog(
        &self,
        requirement: &RequirementSet,
        offerings: &[OfferingSet],
    ) -> Vec<MatchResult<bool>> {
        self.decide_sequential(requirement, offerings)
    }

    fn decide_sequential(
        &self,
        requirement: &RequirementSet,
        offerings: &[OfferingSet],
    ) -> Vec<MatchResult<bool>> {
        offerings
            .iter()
            .map(|offering| try_satisfies(requirement, offering))
            .collect()
    }
}

/// Every offering satisfying `requirement`, in catalog order, using the
/// default engine configuration.
pub fn find_satisfying<'a>(
    requirement: &RequirementSet,
    offerings: &'a [OfferingSet],
) -> Vec<&'a OfferingSet> {
    MatchEngine::new().find_satisfying(requirement, offerings)
}
