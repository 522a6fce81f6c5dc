//! Attribute type definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConstructionError;

/// Position of an attribute in a capability ontology, most general tag first
/// (e.g. `["Milling", "Dimensions"]`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SemanticPath(Vec<String>);

impl SemanticPath {
    pub fn new(tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(tags.into_iter().map(|t| t.into()).collect())
    }

    /// Returns a new path with `tag` appended
    pub fn child(&self, tag: impl Into<String>) -> Self {
        let mut tags = self.0.clone();
        tags.push(tag.into());
        Self(tags)
    }

    pub fn tags(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<String>> for SemanticPath {
    fn from(tags: Vec<String>) -> Self {
        Self(tags)
    }
}

impl fmt::Display for SemanticPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" / "))
    }
}

/// How an offered value is compared against a required one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum ComparisonKind {
    /// Offered value must equal the required value
    Exact,
    /// Offered value must meet or exceed the required value
    Minimum,
    /// Offered value must not exceed the required value
    Maximum,
}

impl ComparisonKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Minimum => "minimum",
            Self::Maximum => "maximum",
        }
    }
}

impl fmt::Display for ComparisonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComparisonKind {
    type Err = ConstructionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exact" | "matching" => Ok(Self::Exact),
            "minimum" | "min" => Ok(Self::Minimum),
            "maximum" | "max" => Ok(Self::Maximum),
            _ => Err(ConstructionError::UnknownComparisonKind(s.to_string())),
        }
    }
}

impl TryFrom<String> for ComparisonKind {
    type Error = ConstructionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ComparisonKind> for &'static str {
    fn from(kind: ComparisonKind) -> Self {
        kind.as_str()
    }
}

/// The value carried by an attribute. Exactly one variant is populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeValue {
    Text(String),
    Scalar(f64),
    /// Dimensional value, e.g. `[x, y, z]` in millimeters
    Vector(Vec<f64>),
}

impl AttributeValue {
    /// Name of the populated variant, used in error messages
    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Scalar(_) => "scalar",
            Self::Vector(_) => "vector",
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<&[f64]> {
        match self {
            Self::Vector(values) => Some(values),
            _ => None,
        }
    }
}

/// A single capability attribute.
///
/// Fields are private: every `Attribute` is built through one of the
/// validating constructors (deserialization included), so text values are
/// always compared exactly and numeric values are always finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAttribute", into = "RawAttribute")]
pub struct Attribute {
    semantics: SemanticPath,
    description: String,
    kind: ComparisonKind,
    value: AttributeValue,
}

impl Attribute {
    /// Text attribute. Text is only ever compared exactly.
    pub fn text(
        semantics: SemanticPath,
        description: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            semantics,
            description: description.into(),
            kind: ComparisonKind::Exact,
            value: AttributeValue::Text(value.into()),
        }
    }

    /// Scalar attribute compared as a lower or upper bound.
    pub fn scalar(
        semantics: SemanticPath,
        description: impl Into<String>,
        value: f64,
        kind: ComparisonKind,
    ) -> Result<Self, ConstructionError> {
        if kind == ComparisonKind::Exact {
            return Err(ConstructionError::UnsupportedKind {
                kind,
                value: "scalar",
            });
        }
        check_finite(&[value])?;

        Ok(Self {
            semantics,
            description: description.into(),
            kind,
            value: AttributeValue::Scalar(value),
        })
    }

    /// Dimensional attribute. Thresholds compare position by position,
    /// `Exact` treats the components as a set.
    pub fn vector(
        semantics: SemanticPath,
        description: impl Into<String>,
        values: Vec<f64>,
        kind: ComparisonKind,
    ) -> Result<Self, ConstructionError> {
        if values.is_empty() {
            return Err(ConstructionError::EmptyVector);
        }
        check_finite(&values)?;

        Ok(Self {
            semantics,
            description: description.into(),
            kind,
            value: AttributeValue::Vector(values),
        })
    }

    /// Bypasses validation so engine tests can reach the invariant checks
    #[cfg(test)]
    pub(crate) fn unchecked(
        semantics: SemanticPath,
        kind: ComparisonKind,
        value: AttributeValue,
    ) -> Self {
        Self {
            semantics,
            description: String::new(),
            kind,
            value,
        }
    }

    pub fn semantics(&self) -> &SemanticPath {
        &self.semantics
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> ComparisonKind {
        self.kind
    }

    pub fn value(&self) -> &AttributeValue {
        &self.value
    }
}

fn check_finite(values: &[f64]) -> Result<(), ConstructionError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(position) => Err(ConstructionError::NonFinite {
            position,
            found: values[position],
        }),
        None => Ok(()),
    }
}

/// Wire shape of an attribute. `kind` may be omitted for text.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawAttribute {
    semantics: SemanticPath,
    #[serde(default)]
    description: String,
    #[serde(default)]
    kind: Option<ComparisonKind>,
    value: AttributeValue,
}

impl TryFrom<RawAttribute> for Attribute {
    type Error = ConstructionError;

    fn try_from(raw: RawAttribute) -> Result<Self, Self::Error> {
        match raw.value {
            AttributeValue::Text(text) => match raw.kind {
                None | Some(ComparisonKind::Exact) => {
                    Ok(Attribute::text(raw.semantics, raw.description, text))
                }
                Some(kind) => Err(ConstructionError::UnsupportedKind {
                    kind,
                    value: "text",
                }),
            },
            AttributeValue::Scalar(value) => {
                let kind = raw.kind.ok_or(ConstructionError::MissingKind("scalar"))?;
                Attribute::scalar(raw.semantics, raw.description, value, kind)
            }
            AttributeValue::Vector(values) => {
                let kind = raw.kind.ok_or(ConstructionError::MissingKind("vector"))?;
                Attribute::vector(raw.semantics, raw.description, values, kind)
            }
        }
    }
}

impl From<Attribute> for RawAttribute {
    fn from(attribute: Attribute) -> Self {
        Self {
            semantics: attribute.semantics,
            description: attribute.description,
            kind: Some(attribute.kind),
            value: attribute.value,
        }
    }
}
