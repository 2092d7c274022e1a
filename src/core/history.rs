//! Transition log tracking.
//!
//! Provides immutable tracking of successful machine transitions over
//! time, following functional programming principles. The log is an
//! audit trail; it is separate from the single-level undo/redo slots
//! kept by the machine itself.

use super::ident::Ident;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single successful transition.
///
/// Records are immutable values representing a move from one state to
/// another at a specific point in time.
///
/// # Example
///
/// ```rust
/// use statemap::core::TransitionRecord;
/// use chrono::Utc;
///
/// let record: TransitionRecord<String, String> = TransitionRecord {
///     from: "idle".to_string(),
///     to: "running".to_string(),
///     event: Some("start".to_string()),
///     timestamp: Utc::now(),
/// };
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRecord<S: Ident, E: Ident> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// The event that caused the transition, or `None` for a direct change
    pub event: Option<E>,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered log of successful transitions.
///
/// The log is immutable - `record` returns a new log with the entry
/// added, leaving the original unchanged.
///
/// # Example
///
/// ```rust
/// use statemap::core::{TransitionLog, TransitionRecord};
/// use chrono::Utc;
///
/// let log: TransitionLog<String, String> = TransitionLog::new();
///
/// let log = log.record(TransitionRecord {
///     from: "idle".to_string(),
///     to: "running".to_string(),
///     event: Some("start".to_string()),
///     timestamp: Utc::now(),
/// });
///
/// let path = log.get_path();
/// assert_eq!(path.len(), 2); // idle -> running
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionLog<S: Ident, E: Ident> {
    records: Vec<TransitionRecord<S, E>>,
}

impl<S: Ident, E: Ident> Default for TransitionLog<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Ident, E: Ident> TransitionLog<S, E> {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a transition, returning a new log.
    ///
    /// This is a pure function - it does not mutate the existing log
    /// but returns a new one with the record appended.
    pub fn record(&self, record: TransitionRecord<S, E>) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the `from` state of the
    /// first record, then the `to` state of each record.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statemap::core::{TransitionLog, TransitionRecord};
    /// use chrono::Utc;
    ///
    /// let log: TransitionLog<String, String> = TransitionLog::new();
    ///
    /// let log = log.record(TransitionRecord {
    ///     from: "idle".to_string(),
    ///     to: "running".to_string(),
    ///     event: Some("start".to_string()),
    ///     timestamp: Utc::now(),
    /// });
    ///
    /// let log = log.record(TransitionRecord {
    ///     from: "running".to_string(),
    ///     to: "paused".to_string(),
    ///     event: Some("pause".to_string()),
    ///     timestamp: Utc::now(),
    /// });
    ///
    /// let path = log.get_path();
    /// assert_eq!(path, vec!["idle", "running", "paused"]);
    /// ```
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Calculate total duration from first to last record.
    ///
    /// Returns `None` if the log is empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all records in order.
    pub fn transitions(&self) -> &[TransitionRecord<S, E>] {
        &self.records
    }
}
