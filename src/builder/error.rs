//! Build errors for configuration builders.

use thiserror::Error;

/// Errors that can occur when building a machine configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No states declared. Add at least one state")]
    NoStates,

    #[error("Transition source state '{state}' is not declared. Call .state(..) first")]
    UndeclaredState { state: String },

    #[error("Initial state '{initial}' is not declared. Call .state(..) for it")]
    UndeclaredInitialState { initial: String },
}
