//! The state machine engine.
//!
//! A `Machine` owns an immutable configuration plus its mutable runtime
//! state: the current state, a single-level undo/redo history, and a
//! transition log. All operations are synchronous and constant-time in
//! the number of declared states and events.

use super::config::MachineConfig;
use super::error::MachineError;
use super::history::{TransitionLog, TransitionRecord};
use super::ident::Ident;
use chrono::Utc;

/// A finite state machine interpreting a declarative configuration.
///
/// States and transitions are data, not code: the configuration maps
/// each declared state to an event -> destination table, and the
/// machine tracks which state is active. Failed operations leave the
/// runtime state untouched.
///
/// # Example
///
/// ```rust
/// use statemap::builder::ConfigBuilder;
/// use statemap::core::Machine;
///
/// let config = ConfigBuilder::<String, String>::new()
///     .initial("idle")
///     .state("idle")
///     .state("running")
///     .transition("idle", "start", "running")
///     .unwrap()
///     .build()
///     .unwrap();
///
/// let mut machine = Machine::new(config).unwrap();
/// assert_eq!(machine.current_state(), "idle");
///
/// machine.trigger(&"start".to_string()).unwrap();
/// assert_eq!(machine.current_state(), "running");
///
/// assert!(machine.undo());
/// assert_eq!(machine.current_state(), "idle");
/// ```
pub struct Machine<S: Ident, E: Ident> {
    config: MachineConfig<S, E>,
    current: S,
    previous: Option<S>,
    undone: Option<S>,
    log: TransitionLog<S, E>,
}

impl<S: Ident, E: Ident> Machine<S, E> {
    /// Create a new machine in the configuration's initial state.
    ///
    /// Fails with [`MachineError::InvalidConfig`] if the initial state
    /// is not declared in the state map.
    pub fn new(config: MachineConfig<S, E>) -> Result<Self, MachineError> {
        if !config.declares(&config.initial) {
            return Err(MachineError::InvalidConfig {
                initial: config.initial.name().to_string(),
            });
        }

        let current = config.initial.clone();
        Ok(Self {
            config,
            current,
            previous: None,
            undone: None,
            log: TransitionLog::new(),
        })
    }

    /// Get the active state (pure).
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Get the state occupied before the last successful transition,
    /// if any (pure).
    pub fn previous_state(&self) -> Option<&S> {
        self.previous.as_ref()
    }

    /// Get the configuration (pure).
    pub fn config(&self) -> &MachineConfig<S, E> {
        &self.config
    }

    /// Get the transition log (pure).
    pub fn log(&self) -> &TransitionLog<S, E> {
        &self.log
    }

    /// Check whether `undo` would succeed (pure).
    pub fn can_undo(&self) -> bool {
        self.previous.is_some()
    }

    /// Check whether `redo` would succeed (pure).
    pub fn can_redo(&self) -> bool {
        self.undone.is_some()
    }

    /// Go directly to the specified state.
    ///
    /// The target must be declared in the configuration. On success the
    /// prior state becomes available for [`undo`](Self::undo); on
    /// failure nothing changes.
    pub fn change_state(&mut self, target: S) -> Result<(), MachineError> {
        if !self.config.declares(&target) {
            return Err(MachineError::UnknownState {
                state: target.name().to_string(),
            });
        }

        self.commit(target, None);
        Ok(())
    }

    /// Change state according to the current state's transition table.
    ///
    /// Fails with [`MachineError::UnhandledEvent`] if the current state
    /// declares no transition for `event`, including when it declares
    /// no transitions at all. No partial state change occurs on failure.
    pub fn trigger(&mut self, event: &E) -> Result<(), MachineError> {
        let def = self
            .config
            .state_def(&self.current)
            .ok_or_else(|| MachineError::UnknownState {
                state: self.current.name().to_string(),
            })?;

        let destination =
            def.transitions
                .get(event)
                .cloned()
                .ok_or_else(|| MachineError::UnhandledEvent {
                    state: self.current.name().to_string(),
                    event: event.name().to_string(),
                })?;

        self.commit(destination, Some(event.clone()));
        Ok(())
    }

    /// Reset the active state to the configuration's initial state.
    ///
    /// Only the current state is touched: the undo/redo slots and the
    /// transition log keep whatever they held. Never fails.
    pub fn reset(&mut self) {
        self.current = self.config.initial.clone();
    }

    /// Get every declared state identifier, in declared order.
    ///
    /// The result is fully materialized.
    pub fn states(&self) -> Vec<&S> {
        self.config.states.keys().collect()
    }

    /// Get the state identifiers whose transition table handles `event`,
    /// in declared order.
    ///
    /// Returns an empty vector if no state handles the event.
    pub fn states_handling(&self, event: &E) -> Vec<&S> {
        self.config
            .states
            .iter()
            .filter(|(_, def)| def.transitions.contains_key(event))
            .map(|(state, _)| state)
            .collect()
    }

    /// Go back to the previous state.
    ///
    /// Returns `false` and leaves state unchanged if no history is
    /// available. History is single-level: a successful undo empties
    /// the slot, so a second consecutive undo returns `false`. The
    /// undone state is retained for [`redo`](Self::redo).
    pub fn undo(&mut self) -> bool {
        match self.previous.take() {
            None => false,
            Some(prev) => {
                self.undone = Some(std::mem::replace(&mut self.current, prev));
                true
            }
        }
    }

    /// Restore the state undone by the most recent [`undo`](Self::undo).
    ///
    /// Returns `false` and leaves state unchanged if no undone state is
    /// available. A successful redo makes the state it left available
    /// for undo again, so undo and redo remain symmetric inverses.
    pub fn redo(&mut self) -> bool {
        match self.undone.take() {
            None => false,
            Some(next) => {
                self.previous = Some(std::mem::replace(&mut self.current, next));
                true
            }
        }
    }

    /// Clear all retained history: the undo slot, the redo slot, and
    /// the transition log. A subsequent `undo` or `redo` reports
    /// unavailability. Never fails.
    pub fn clear_history(&mut self) {
        self.previous = None;
        self.undone = None;
        self.log = TransitionLog::new();
    }

    /// Atomic state update shared by `change_state` and `trigger`:
    /// both runtime fields move together, the log records the step,
    /// and any pending redo is invalidated.
    fn commit(&mut self, destination: S, event: Option<E>) {
        let from = std::mem::replace(&mut self.current, destination.clone());
        self.log = self.log.record(TransitionRecord {
            from: from.clone(),
            to: destination,
            event,
            timestamp: Utc::now(),
        });
        self.previous = Some(from);
        self.undone = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::StateDef;
    use indexmap::IndexMap;

    fn def(transitions: &[(&str, &str)]) -> StateDef<String, String> {
        let mut table = IndexMap::new();
        for (event, dest) in transitions {
            table.insert(event.to_string(), dest.to_string());
        }
        StateDef { transitions: table }
    }

    /// idle --start--> running --pause--> paused --resume--> running,
    /// running --stop--> idle
    fn player_config() -> MachineConfig<String, String> {
        let mut states = IndexMap::new();
        states.insert("idle".to_string(), def(&[("start", "running")]));
        states.insert(
            "running".to_string(),
            def(&[("stop", "idle"), ("pause", "paused")]),
        );
        states.insert("paused".to_string(), def(&[("resume", "running")]));

        MachineConfig {
            initial: "idle".to_string(),
            states,
        }
    }

    fn player() -> Machine<String, String> {
        Machine::new(player_config()).unwrap()
    }

    #[test]
    fn starts_in_initial_state() {
        let machine = player();
        assert_eq!(machine.current_state(), "idle");
        assert!(machine.previous_state().is_none());
    }

    #[test]
    fn undeclared_initial_state_is_rejected() {
        let mut config = player_config();
        config.initial = "missing".to_string();

        let result = Machine::<String, String>::new(config);
        assert_eq!(
            result.err(),
            Some(MachineError::InvalidConfig {
                initial: "missing".to_string()
            })
        );
    }

    #[test]
    fn change_state_moves_and_records_previous() {
        let mut machine = player();
        machine.change_state("paused".to_string()).unwrap();

        assert_eq!(machine.current_state(), "paused");
        assert_eq!(machine.previous_state(), Some(&"idle".to_string()));
    }

    #[test]
    fn change_state_to_undeclared_fails_atomically() {
        let mut machine = player();
        machine.trigger(&"start".to_string()).unwrap();

        let result = machine.change_state("broken".to_string());
        assert_eq!(
            result.err(),
            Some(MachineError::UnknownState {
                state: "broken".to_string()
            })
        );
        assert_eq!(machine.current_state(), "running");
        assert_eq!(machine.previous_state(), Some(&"idle".to_string()));
    }

    #[test]
    fn trigger_follows_transition_table() {
        let mut machine = player();
        machine.trigger(&"start".to_string()).unwrap();

        assert_eq!(machine.current_state(), "running");
        assert_eq!(machine.previous_state(), Some(&"idle".to_string()));
    }

    #[test]
    fn trigger_with_unhandled_event_fails_atomically() {
        let mut machine = player();

        let result = machine.trigger(&"stop".to_string());
        assert_eq!(
            result.err(),
            Some(MachineError::UnhandledEvent {
                state: "idle".to_string(),
                event: "stop".to_string()
            })
        );
        assert_eq!(machine.current_state(), "idle");
        assert!(machine.previous_state().is_none());
    }

    #[test]
    fn trigger_fails_in_state_with_empty_table() {
        let mut states = IndexMap::new();
        states.insert("only".to_string(), def(&[]));
        let config = MachineConfig {
            initial: "only".to_string(),
            states,
        };

        let mut machine = Machine::new(config).unwrap();
        let result = machine.trigger(&"anything".to_string());
        assert!(matches!(
            result,
            Err(MachineError::UnhandledEvent { .. })
        ));
    }

    #[test]
    fn reset_returns_to_initial_without_touching_history() {
        let mut machine = player();
        machine.trigger(&"start".to_string()).unwrap();
        machine.trigger(&"pause".to_string()).unwrap();

        machine.reset();
        assert_eq!(machine.current_state(), "idle");
        // previous keeps what it held before the reset
        assert_eq!(machine.previous_state(), Some(&"running".to_string()));
        assert!(machine.can_undo());
    }

    #[test]
    fn states_lists_all_declared_in_order() {
        let machine = player();
        assert_eq!(machine.states(), vec!["idle", "running", "paused"]);
    }

    #[test]
    fn states_handling_filters_by_event() {
        let machine = player();

        assert_eq!(
            machine.states_handling(&"start".to_string()),
            vec!["idle"]
        );
        assert_eq!(
            machine.states_handling(&"pause".to_string()),
            vec!["running"]
        );
        assert!(machine
            .states_handling(&"launch".to_string())
            .is_empty());
    }

    #[test]
    fn undo_restores_previous_state_once() {
        let mut machine = player();
        machine.trigger(&"start".to_string()).unwrap();

        assert!(machine.undo());
        assert_eq!(machine.current_state(), "idle");

        // single-level history: nothing deeper to undo
        assert!(!machine.undo());
        assert_eq!(machine.current_state(), "idle");
    }

    #[test]
    fn undo_without_history_returns_false() {
        let mut machine = player();
        assert!(!machine.undo());
        assert_eq!(machine.current_state(), "idle");
    }

    #[test]
    fn redo_restores_undone_state() {
        let mut machine = player();
        machine.trigger(&"start".to_string()).unwrap();

        assert!(machine.undo());
        assert_eq!(machine.current_state(), "idle");

        assert!(machine.redo());
        assert_eq!(machine.current_state(), "running");
    }

    #[test]
    fn redo_without_undo_returns_false() {
        let mut machine = player();
        assert!(!machine.redo());

        machine.trigger(&"start".to_string()).unwrap();
        assert!(!machine.redo());
        assert_eq!(machine.current_state(), "running");
    }

    #[test]
    fn undo_redo_are_symmetric() {
        let mut machine = player();
        machine.trigger(&"start".to_string()).unwrap();

        assert!(machine.undo());
        assert!(machine.redo());
        assert!(machine.undo());
        assert_eq!(machine.current_state(), "idle");
        assert!(machine.redo());
        assert_eq!(machine.current_state(), "running");
    }

    #[test]
    fn new_transition_invalidates_redo() {
        let mut machine = player();
        machine.trigger(&"start".to_string()).unwrap();
        assert!(machine.undo());

        machine.trigger(&"start".to_string()).unwrap();
        assert!(!machine.redo());
        assert_eq!(machine.current_state(), "running");
    }

    #[test]
    fn clear_history_disables_undo_and_redo() {
        let mut machine = player();
        machine.trigger(&"start".to_string()).unwrap();
        assert!(machine.undo());

        machine.clear_history();
        assert!(!machine.can_undo());
        assert!(!machine.can_redo());
        assert!(!machine.undo());
        assert!(!machine.redo());
        assert!(machine.log().transitions().is_empty());
    }

    #[test]
    fn log_records_successful_transitions_only() {
        let mut machine = player();
        machine.trigger(&"start".to_string()).unwrap();
        let _ = machine.trigger(&"launch".to_string());
        machine.change_state("paused".to_string()).unwrap();

        let records = machine.log().transitions();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].event, Some("start".to_string()));
        assert_eq!(records[1].event, None);

        let path = machine.log().get_path();
        assert_eq!(path, vec!["idle", "running", "paused"]);
    }

    #[test]
    fn player_walkthrough() {
        let mut machine = player();

        machine.trigger(&"start".to_string()).unwrap();
        assert_eq!(machine.current_state(), "running");

        machine.trigger(&"pause".to_string()).unwrap();
        assert_eq!(machine.current_state(), "paused");
        assert_eq!(machine.previous_state(), Some(&"running".to_string()));

        assert!(machine.undo());
        assert_eq!(machine.current_state(), "running");

        // running declares stop, so this succeeds
        machine.trigger(&"stop".to_string()).unwrap();
        assert_eq!(machine.current_state(), "idle");
    }
}
