//! Requirement and offering set definitions

use serde::{Deserialize, Serialize};

use crate::attribute::Attribute;

/// Anything that carries a collection of capability attributes.
///
/// The matching engine is written against this trait so requirement and
/// offering sets share the comparison code without a common base type.
pub trait AttributeSet {
    /// All attributes of the set, in construction order.
    fn attributes(&self) -> &[Attribute];

    /// Number of attributes in the set.
    fn len(&self) -> usize {
        self.attributes().len()
    }

    /// Returns true if the set carries no attributes.
    fn is_empty(&self) -> bool {
        self.attributes().is_empty()
    }
}

/// The attributes a process needs satisfied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequirementSet {
    attributes: Vec<Attribute>,
}

impl RequirementSet {
    pub fn new(attributes: Vec<Attribute>) -> Self {
        Self { attributes }
    }
}

impl AttributeSet for RequirementSet {
    fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }
}

impl FromIterator<Attribute> for RequirementSet {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// The attributes a procedure instance provides, plus the resource backing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferingSet {
    attributes: Vec<Attribute>,

    /// Opaque identifier/address of the physical resource
    resource_locator: String,

    /// Process definition this offering implements, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    process_locator: Option<String>,
}

impl OfferingSet {
    pub fn new(attributes: Vec<Attribute>, resource_locator: impl Into<String>) -> Self {
        Self {
            attributes,
            resource_locator: resource_locator.into(),
            process_locator: None,
        }
    }

    pub fn with_process(
        attributes: Vec<Attribute>,
        resource_locator: impl Into<String>,
        process_locator: impl Into<String>,
    ) -> Self {
        Self {
            attributes,
            resource_locator: resource_locator.into(),
            process_locator: Some(process_locator.into()),
        }
    }

    /// Record the process definition this offering implements.
    ///
    /// This is the only mutation an offering allows; a second call replaces
    /// the previous locator.
    pub fn assign_process(&mut self, process_locator: impl Into<String>) {
        self.process_locator = Some(process_locator.into());
    }

    pub fn resource_locator(&self) -> &str {
        &self.resource_locator
    }

    pub fn process_locator(&self) -> Option<&str> {
        self.process_locator.as_deref()
    }
}

impl AttributeSet for OfferingSet {
    fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::SemanticPath;

    const RESOURCE: &str = "http://aas.example/shells/ResourceID/aas/";

    fn technology(value: &str) -> Attribute {
        Attribute::text(
            SemanticPath::new(["Milling", "Milling Technology"]),
            "Milling technology",
            value,
        )
    }

    #[test]
    fn test_offering_process_assignment() {
        let mut offering = OfferingSet::new(vec![technology("3 Axes")], RESOURCE);
        assert_eq!(offering.resource_locator(), RESOURCE);
        assert_eq!(offering.process_locator(), None);

        offering.assign_process("urn:process:milling");
        assert_eq!(offering.process_locator(), Some("urn:process:milling"));

        offering.assign_process("urn:process:drilling");
        assert_eq!(offering.process_locator(), Some("urn:process:drilling"));
    }

    #[test]
    fn test_with_process() {
        let offering = OfferingSet::with_process(vec![], RESOURCE, "urn:process:milling");
        assert_eq!(offering.process_locator(), Some("urn:process:milling"));
        assert!(offering.is_empty());
    }

    #[test]
    fn test_requirement_from_iter() {
        let requirement: RequirementSet =
            ["3 Axes", "5 Axes"].into_iter().map(technology).collect();
        assert_eq!(requirement.len(), 2);
        assert_eq!(
            requirement.attributes()[1].value().as_text(),
            Some("5 Axes")
        );
    }

    #[test]
    fn test_offering_json_shape() {
        let offering = OfferingSet::new(vec![technology("3 Axes")], RESOURCE);
        let json = serde_json::to_value(&offering).unwrap();

        assert_eq!(json["resource_locator"], RESOURCE);
        assert!(json.get("process_locator").is_none());

        let back: OfferingSet = serde_json::from_value(json).unwrap();
        assert_eq!(back, offering);
    }
}
