//! Keystroke tape for calculator sessions.
//!
//! Provides immutable tracking of the keys fed through a session over
//! time, following functional programming principles. The tape is the
//! software analogue of a desk calculator's paper tape.

use crate::input::Key;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single keypress.
///
/// Entries are immutable values pairing the key with the display line it
/// produced at a specific point in time.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use fourbanger::input::Key;
/// use fourbanger::session::TapeEntry;
///
/// let entry = TapeEntry {
///     key: Key::Equals,
///     display: "5".to_string(),
///     timestamp: Utc::now(),
/// };
///
/// assert_eq!(entry.key.glyph(), '=');
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TapeEntry {
    /// The key that was pressed
    pub key: Key,
    /// The display line immediately after the press
    pub display: String,
    /// When the press was recorded
    pub timestamp: DateTime<Utc>,
}

/// Ordered log of keypresses.
///
/// The tape is immutable - the `record` method returns a new tape with
/// the entry added, following functional programming principles.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use fourbanger::input::Key;
/// use fourbanger::session::{Tape, TapeEntry};
///
/// let tape = Tape::new();
///
/// let tape = tape.record(TapeEntry {
///     key: Key::Equals,
///     display: "5".to_string(),
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(tape.len(), 1);
/// assert_eq!(tape.keys(), vec![Key::Equals]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tape {
    entries: Vec<TapeEntry>,
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

impl Tape {
    /// Create a new empty tape.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a keypress, returning a new tape.
    ///
    /// This is a pure function - it does not mutate the existing tape but
    /// returns a new one with the entry added.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chrono::Utc;
    /// use fourbanger::input::Key;
    /// use fourbanger::session::{Tape, TapeEntry};
    ///
    /// let tape = Tape::new();
    /// let new_tape = tape.record(TapeEntry {
    ///     key: Key::Clear,
    ///     display: "0".to_string(),
    ///     timestamp: Utc::now(),
    /// });
    ///
    /// assert_eq!(new_tape.len(), 1);
    /// assert_eq!(tape.len(), 0); // Original unchanged
    /// ```
    pub fn record(&self, entry: TapeEntry) -> Self {
        let mut entries = self.entries.clone();
        entries.push(entry);
        Self { entries }
    }

    /// Get all entries.
    ///
    /// Returns a slice of all recorded entries in press order.
    pub fn entries(&self) -> &[TapeEntry] {
        &self.entries
    }

    /// Get the pressed keys in order, without their display snapshots.
    pub fn keys(&self) -> Vec<Key> {
        self.entries.iter().map(|entry| entry.key).collect()
    }

    /// Number of recorded presses.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been pressed yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Calculate elapsed time from the first press to the last.
    ///
    /// Returns `None` if the tape is empty. A single press has a duration
    /// of zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fourbanger::session::Tape;
    ///
    /// let tape = Tape::new();
    /// assert!(tape.duration().is_none());
    /// ```
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.entries.first(), self.entries.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }
}
