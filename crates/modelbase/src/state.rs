use derive_more::{Deref, Display, From, IntoIterator};
use serde::Serialize;
use std::fmt;

///
/// KeyValue
///
/// Scalar component of a persisted identity tuple.
///

#[derive(Clone, Debug, Display, Eq, From, PartialEq, Serialize)]
pub enum KeyValue {
    Int(i64),
    Uint(u64),
    Text(String),
}

impl From<&str> for KeyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

///
/// Identity
///
/// Ordered primary-key components of a persisted instance, in declared
/// key order.
///

#[derive(Clone, Debug, Default, Deref, Eq, From, IntoIterator, PartialEq, Serialize)]
pub struct Identity(pub Vec<KeyValue>);

impl Identity {
    #[must_use]
    pub fn new(components: Vec<KeyValue>) -> Self {
        Self(components)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        f.write_str(&joined)
    }
}

///
/// InstanceState
///
/// Three-state persistence status of a live entity instance.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InstanceState {
    /// Never registered with a persistence session.
    Transient { handle: usize },

    /// Registered with a session but not yet assigned a stored identity.
    Pending { handle: usize },

    /// Flushed; carries the stored identity tuple.
    Persisted { identity: Identity },
}

/// Diagnostic in-memory handle for an instance. Not stable across runs.
#[must_use]
pub fn instance_handle<T: ?Sized>(value: &T) -> usize {
    std::ptr::from_ref(value).cast::<()>() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_values_display_as_their_inner_value() {
        assert_eq!(KeyValue::Int(-3).to_string(), "-3");
        assert_eq!(KeyValue::Uint(42).to_string(), "42");
        assert_eq!(KeyValue::from("a").to_string(), "a");
    }

    #[test]
    fn identity_joins_components_in_declared_order() {
        let identity = Identity::new(vec![KeyValue::Int(1), KeyValue::from("a")]);
        assert_eq!(identity.to_string(), "1, a");

        let single = Identity::new(vec![KeyValue::Uint(7)]);
        assert_eq!(single.to_string(), "7");
    }

    #[test]
    fn handles_are_distinct_for_distinct_instances() {
        let a = 0u8;
        let b = 0u8;

        assert_ne!(instance_handle(&a), instance_handle(&b));
    }
}
