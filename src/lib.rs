//! Statemap: a declarative finite state machine engine
//!
//! Statemap interprets a data-driven description of states and
//! event-driven transitions: the configuration is supplied once at
//! construction, and the machine tracks the active state, validates
//! transitions, dispatches events, and supports single-level undo/redo
//! navigation. All operations are synchronous, in-process calls.
//!
//! # Core Concepts
//!
//! - **Configuration**: an immutable map from states to their
//!   event -> destination transition tables
//! - **Machine**: the interpreter holding the active state and history
//! - **History**: the single most-recent prior state, retained for
//!   `undo`/`redo`, plus an immutable transition log
//!
//! # Example
//!
//! ```rust
//! use statemap::builder::table_config;
//! use statemap::core::Machine;
//!
//! let config = table_config(
//!     "idle",
//!     &[
//!         ("idle", &[("start", "running")]),
//!         ("running", &[("stop", "idle"), ("pause", "paused")]),
//!         ("paused", &[("resume", "running")]),
//!     ],
//! )
//! .unwrap();
//!
//! let mut machine = Machine::new(config).unwrap();
//!
//! machine.trigger(&"start".to_string()).unwrap();
//! machine.trigger(&"pause".to_string()).unwrap();
//! assert_eq!(machine.current_state(), "paused");
//!
//! assert!(machine.undo());
//! assert_eq!(machine.current_state(), "running");
//! assert!(machine.redo());
//! assert_eq!(machine.current_state(), "paused");
//! ```

pub mod builder;
pub mod core;

// Re-export commonly used types
pub use builder::{BuildError, ConfigBuilder};
pub use core::{Ident, Machine, MachineConfig, MachineError, StateDef, TransitionLog, TransitionRecord};
