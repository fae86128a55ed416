//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity; two instances holding the same values are
/// equal. They are immutable: "changing" one means building a new one, which
/// is why constructors are where validation lives.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Amount(Decimal);
///
/// impl ValueObject for Amount {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
