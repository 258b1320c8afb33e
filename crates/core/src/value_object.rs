//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**: two instances with the same attribute
//! values are the same value. In this workspace the category of a food item,
//! its identifier and the low-stock policy are value objects; a food item is
//! not (it keeps its identity while its quantity changes).

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new value.
///
/// ```
/// use larder_core::ValueObject;
///
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Threshold(i64);
///
/// impl ValueObject for Threshold {}
///
/// assert_eq!(Threshold(5), Threshold(5));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
