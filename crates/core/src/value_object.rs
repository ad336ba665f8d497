//! Value object trait: equality by value, not identity.
//!
//! Order lines and stock lines carry no identifier of their own. Two lines
//! with the same name, quantity and price are the same line.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one with the changed values (see `Stock::withdraw`, which
/// returns a fresh snapshot instead of editing in place).
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Bottle {
///     name: String,
///     quantity: u64,
/// }
///
/// impl ValueObject for Bottle {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
