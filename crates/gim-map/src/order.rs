//! Display ordering for attribute bindings.

use std::cmp::Ordering;

use crate::binding::AttributeBinding;

/// Order bindings alphabetically, except keys come first and labels
/// starting with `__` come last.
///
/// This is a strict weak ordering: bindings tied on key status, prefix and
/// name compare equal, and a stable sort then preserves their insertion
/// order.
pub fn display_order(a: &AttributeBinding, b: &AttributeBinding) -> Ordering {
    b.is_key().cmp(&a.is_key()).then_with(|| {
        let label = a.attribute().name();
        let other = b.attribute().name();
        let reserved = label.starts_with("__");
        let other_reserved = other.starts_with("__");
        reserved
            .cmp(&other_reserved)
            .then_with(|| label.cmp(other))
    })
}
