//! Builder for constructing machine configurations.

use crate::builder::error::BuildError;
use crate::core::{Ident, MachineConfig, StateDef};
use indexmap::IndexMap;

/// Builder for constructing configurations with a fluent API.
///
/// States are declared first; transitions then refer to a declared
/// source state. Destination states are accepted as-is, matching the
/// configuration contract.
///
/// # Example
///
/// ```rust
/// use statemap::builder::ConfigBuilder;
///
/// let config = ConfigBuilder::<String, String>::new()
///     .initial("idle")
///     .state("idle")
///     .state("running")
///     .transition("idle", "start", "running")
///     .unwrap()
///     .transition("running", "stop", "idle")
///     .unwrap()
///     .build()
///     .unwrap();
///
/// assert_eq!(config.initial, "idle");
/// assert_eq!(config.states.len(), 2);
/// ```
pub struct ConfigBuilder<S: Ident, E: Ident> {
    initial: Option<S>,
    states: IndexMap<S, StateDef<S, E>>,
}

impl<S: Ident, E: Ident> ConfigBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: IndexMap::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<S>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state. Redeclaring an existing state keeps its
    /// transitions.
    pub fn state(mut self, state: impl Into<S>) -> Self {
        self.states.entry(state.into()).or_default();
        self
    }

    /// Add a transition leaving a declared state.
    /// Returns an error if the source state has not been declared.
    /// Adding a second transition for the same (state, event) pair
    /// replaces the first.
    pub fn transition(
        mut self,
        from: impl Into<S>,
        event: impl Into<E>,
        to: impl Into<S>,
    ) -> Result<Self, BuildError> {
        let from = from.into();
        let Some(def) = self.states.get_mut(&from) else {
            return Err(BuildError::UndeclaredState {
                state: from.name().to_string(),
            });
        };
        def.transitions.insert(event.into(), to.into());
        Ok(self)
    }

    /// Build the configuration.
    /// Returns an error if required pieces are missing or inconsistent.
    pub fn build(self) -> Result<MachineConfig<S, E>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        if !self.states.contains_key(&initial) {
            return Err(BuildError::UndeclaredInitialState {
                initial: initial.name().to_string(),
            });
        }

        Ok(MachineConfig {
            initial,
            states: self.states,
        })
    }
}

impl<S: Ident, E: Ident> Default for ConfigBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
