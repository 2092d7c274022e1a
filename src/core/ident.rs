//! Core Ident trait for state and event identifiers.
//!
//! The engine is generic over the identifier types supplied by the
//! caller: plain strings work out of the box, and enums can opt in via
//! the `ident_enum!` macro.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state and event identifiers.
///
/// Identifiers are immutable values used as keys in the configuration
/// maps. All methods are pure.
///
/// # Required Traits
///
/// - `Clone`: identifiers are copied into history slots
/// - `Eq` + `Hash`: identifiers are map keys
/// - `Debug`: identifiers must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: configurations are serializable
///
/// # Example
///
/// ```rust
/// use statemap::core::Ident;
///
/// let state = String::from("idle");
/// assert_eq!(state.name(), "idle");
/// ```
pub trait Ident:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the identifier's name for display and error messages.
    fn name(&self) -> &str;
}

impl Ident for String {
    fn name(&self) -> &str {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_ident_name_is_itself() {
        let id = String::from("running");
        assert_eq!(id.name(), "running");
    }

    #[test]
    fn ident_is_cloneable_and_comparable() {
        let a = String::from("idle");
        let b = a.clone();
        let c = String::from("paused");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn ident_serializes_correctly() {
        let id = String::from("idle");
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: String = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
