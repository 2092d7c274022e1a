//! Builder API for ergonomic configuration construction.
//!
//! This module provides a fluent builder and macros for creating
//! machine configurations with minimal boilerplate while keeping the
//! configuration contract intact.

pub mod config;
pub mod error;
pub mod macros;

pub use config::ConfigBuilder;
pub use error::BuildError;

use crate::core::MachineConfig;

/// Build a string-keyed configuration from a transition table.
///
/// Each entry pairs a state identifier with its (event, destination)
/// rows.
///
/// # Example
///
/// ```
/// use statemap::builder::table_config;
///
/// let config = table_config(
///     "idle",
///     &[
///         ("idle", &[("start", "running")]),
///         ("running", &[("stop", "idle")]),
///     ],
/// )
/// .unwrap();
///
/// assert_eq!(config.states.len(), 2);
/// ```
pub fn table_config(
    initial: &str,
    table: &[(&str, &[(&str, &str)])],
) -> Result<MachineConfig<String, String>, BuildError> {
    let mut builder = ConfigBuilder::<String, String>::new().initial(initial);
    for (state, _) in table {
        builder = builder.state(*state);
    }
    for (state, rows) in table {
        for (event, dest) in *rows {
            builder = builder.transition(*state, *event, *dest)?;
        }
    }
    builder.build()
}
