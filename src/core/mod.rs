//! Core state machine types and logic.
//!
//! This module contains the engine itself:
//! - Identifier abstraction via the `Ident` trait
//! - Declarative configuration types
//! - The `Machine` interpreter with undo/redo history
//! - Immutable transition logging
//!
//! All queries are pure; mutations are confined to the machine's own
//! runtime state and are atomic (an error leaves state unchanged).

mod config;
mod error;
mod history;
mod ident;
mod machine;

pub use config::{MachineConfig, StateDef};
pub use error::MachineError;
pub use history::{TransitionLog, TransitionRecord};
pub use ident::Ident;
pub use machine::Machine;
