//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. In this
/// workspace every input row and every derived result is a value object: two
/// forecasts with the same dish and quantity are the same forecast.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Shortfall {
///     material: MaterialName,
///     quantity: f64,
/// }
///
/// impl ValueObject for Shortfall {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
