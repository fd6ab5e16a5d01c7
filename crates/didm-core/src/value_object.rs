//! # Value Objects
//!
//! The equality-by-value contract shared by validated records, the
//! validated-result alias their factories return, and the open metadata map
//! records carry.

use std::collections::BTreeMap;

use crate::error::ValidationError;

/// Open-ended string-keyed metadata. Ordered so that encodings are stable.
pub type Metadata = BTreeMap<String, serde_json::Value>;

/// Outcome of a validating factory: the value, or the first rule it broke.
pub type Validated<T> = Result<T, ValidationError>;

/// An entity whose identity is defined entirely by the data it holds.
///
/// Implementors keep their properties private and immutable; two instances
/// are the same value exactly when their properties compare equal.
pub trait ValueObject {
    /// The held record.
    type Props: PartialEq;

    /// Borrow the held record.
    fn props(&self) -> &Self::Props;

    /// Structural equality over the held record.
    fn same_value_as(&self, other: &Self) -> bool {
        self.props() == other.props()
    }
}
