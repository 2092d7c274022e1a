//! Machine error types.

use thiserror::Error;

/// Errors raised by machine construction and transitions.
///
/// Every error aborts only the requested operation; the machine's
/// runtime state is left exactly as it was before the call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MachineError {
    /// Construction given a configuration whose initial state is undeclared
    #[error("Initial state '{initial}' is not declared in the configuration")]
    InvalidConfig { initial: String },

    /// Direct transition to a state identifier that is not declared
    #[error("State '{state}' is not declared in the configuration")]
    UnknownState { state: String },

    /// Event with no entry in the current state's transition table
    #[error("State '{state}' has no transition for event '{event}'")]
    UnhandledEvent { state: String, event: String },
}
