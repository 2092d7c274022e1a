//! Declarative machine configuration.
//!
//! A configuration is supplied once at construction and never mutated
//! by the engine. It names the initial state and, for each declared
//! state, the event-driven transitions leaving it.

use super::ident::Ident;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Definition of a single state: its outgoing transitions.
///
/// Maps event identifiers to destination state identifiers. Declared
/// order is preserved. A state with no transitions is valid; every
/// event is then unhandled while the machine occupies it.
///
/// Destination identifiers are not verified against the declared state
/// set at construction time.
///
/// # Example
///
/// ```rust
/// use statemap::core::StateDef;
/// use indexmap::IndexMap;
///
/// let mut transitions = IndexMap::new();
/// transitions.insert("start".to_string(), "running".to_string());
/// let def: StateDef<String, String> = StateDef { transitions };
/// assert_eq!(def.transitions["start"], "running");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateDef<S: Ident, E: Ident> {
    /// Event identifier -> destination state identifier
    #[serde(default)]
    pub transitions: IndexMap<E, S>,
}

impl<S: Ident, E: Ident> Default for StateDef<S, E> {
    fn default() -> Self {
        Self {
            transitions: IndexMap::new(),
        }
    }
}

/// Immutable machine configuration.
///
/// Holds the starting state identifier and the full state map. The
/// engine never mutates a configuration; one configuration value may
/// be cloned into any number of machines.
///
/// # Example
///
/// ```rust
/// use statemap::core::{MachineConfig, StateDef};
/// use indexmap::IndexMap;
///
/// let mut states: IndexMap<String, StateDef<String, String>> = IndexMap::new();
/// states.insert("idle".to_string(), StateDef::default());
///
/// let config = MachineConfig {
///     initial: "idle".to_string(),
///     states,
/// };
/// assert!(config.state_def(&"idle".to_string()).is_some());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct MachineConfig<S: Ident, E: Ident> {
    /// Identifier of the starting state; must be declared in `states`
    pub initial: S,
    /// State identifier -> state definition, in declared order
    pub states: IndexMap<S, StateDef<S, E>>,
}

impl<S: Ident, E: Ident> MachineConfig<S, E> {
    /// Look up the definition of a declared state.
    pub fn state_def(&self, state: &S) -> Option<&StateDef<S, E>> {
        self.states.get(state)
    }

    /// Check whether a state identifier is declared.
    pub fn declares(&self, state: &S) -> bool {
        self.states.contains_key(state)
    }
}
