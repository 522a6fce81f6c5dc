//! Comparison primitives over semantic paths and attribute values

/// True if every tag of `required` appears somewhere in `offered`.
///
/// Order and position are irrelevant: this is a subset test, not a prefix test.
pub fn semantics_compatible(required: &[String], offered: &[String]) -> bool {
    required.iter().all(|tag| offered.contains(tag))
}

/// True if every element of `required` is present somewhere in `offered`.
pub fn values_compatible<T: PartialEq>(required: &[T], offered: &[T]) -> bool {
    required.iter().all(|value| offered.contains(value))
}

/// True if `offered` meets or exceeds `required` at every position.
///
/// Vectors of different lengths can never satisfy each other.
pub fn meets_minimum(required: &[f64], offered: &[f64]) -> bool {
    required.len() == offered.len() && required.iter().zip(offered).all(|(r, o)| r <= o)
}

/// True if `offered` does not exceed `required` at any position.
///
/// Vectors of different lengths can never satisfy each other.
pub fn meets_maximum(required: &[f64], offered: &[f64]) -> bool {
    required.len() == offered.len() && required.iter().zip(offered).all(|(r, o)| o <= r)
}
