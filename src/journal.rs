use std::fmt;
use thiserror::Error;

// =============================================================================
// Single Responsibility: the journal stores and numbers entries, nothing else
// =============================================================================

/// Errors from journal mutations
#[derive(Error, Debug, PartialEq)]
pub enum JournalError {
    #[error("entry position {position} is out of range (journal has {len} entries)")]
    OutOfRange { position: usize, len: usize },
}

/// In-memory log of numbered entries.
///
/// Owns no storage concern: saving and loading live in [`crate::persistence`].
/// Putting `save`/`load` methods here is exactly the responsibility creep this
/// example warns against.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Journal {
    entries: Vec<String>,
    count: usize,
}

impl Journal {
    /// Create an empty journal
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, prefixed with the next sequence number.
    /// Sequence numbers strictly increase; removals never reuse them.
    pub fn add_entry(&mut self, text: &str) {
        self.entries.push(format!("{}: {}", self.count, text));
        self.count += 1;
    }

    /// Remove and return the entry at `position`.
    /// Role: surviving entries keep their original sequence numbers.
    pub fn remove_entry(&mut self, position: usize) -> Result<String, JournalError> {
        if position >= self.entries.len() {
            return Err(JournalError::OutOfRange {
                position,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(position))
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rebuild a journal from already-numbered entries.
    /// `next_sequence` must be past every prefix in `entries`.
    pub(crate) fn from_parts(entries: Vec<String>, next_sequence: usize) -> Self {
        Self {
            entries,
            count: next_sequence,
        }
    }
}

impl fmt::Display for Journal {
    /// Render all entries newline-joined, no trailing newline
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.entries.join("\n"))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_carry_sequence_prefix() {
        let mut journal = Journal::new();
        for i in 0..5 {
            journal.add_entry("something happened");
            assert!(journal.entries()[i].starts_with(&format!("{}: ", i)));
        }
    }

    #[test]
    fn test_render_two_entries() {
        let mut journal = Journal::new();
        journal.add_entry("a");
        journal.add_entry("b");
        assert_eq!(journal.to_string(), "0: a\n1: b");
    }

    #[test]
    fn test_remove_keeps_numbering() {
        let mut journal = Journal::new();
        journal.add_entry("a");
        journal.add_entry("b");

        let removed = journal.remove_entry(0).unwrap();
        assert_eq!(removed, "0: a");
        assert_eq!(journal.entries(), ["1: b"]);
    }

    #[test]
    fn test_remove_out_of_range_leaves_journal_unmodified() {
        let mut journal = Journal::new();
        journal.add_entry("only");
        let before = journal.clone();

        let err = journal.remove_entry(5).unwrap_err();
        assert_eq!(err, JournalError::OutOfRange { position: 5, len: 1 });
        assert_eq!(journal, before);
    }

    #[test]
    fn test_remove_from_empty_journal() {
        let mut journal = Journal::new();
        assert!(matches!(
            journal.remove_entry(0),
            Err(JournalError::OutOfRange { position: 0, len: 0 })
        ));
    }

    #[test]
    fn test_sequence_continues_after_removal() {
        let mut journal = Journal::new();
        journal.add_entry("a");
        journal.add_entry("b");
        journal.remove_entry(0).unwrap();
        journal.add_entry("c");

        assert_eq!(journal.to_string(), "1: b\n2: c");
    }

    #[test]
    fn test_empty_journal_renders_empty() {
        let journal = Journal::new();
        assert_eq!(journal.to_string(), "");
        assert!(journal.is_empty());
        assert_eq!(journal.len(), 0);
    }
}
