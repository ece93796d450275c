use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use thiserror::Error;

use crate::journal::Journal;

// =============================================================================
// Persistence lives apart from the journal, so the storage mechanism can
// change without touching entry bookkeeping
// =============================================================================

/// Errors from saving or loading a journal
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("journal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("malformed entry on line {line}: {content:?}")]
    MalformedEntry { line: usize, content: String },
}

/// Write the journal's rendered form to `path`.
/// Role: one scoped open/write/close; the handle is released on every exit
/// path, including write failure. Plain text, newline-joined, no header.
pub fn save_to_file(journal: &Journal, path: &Path) -> Result<(), PersistenceError> {
    let mut file = File::create(path)?;
    file.write_all(journal.to_string().as_bytes())?;
    Ok(())
}

/// Read a journal back from `path`.
/// Role: reconstruct entries verbatim and resume numbering past the highest
/// saved sequence prefix, so later appends never collide with saved entries.
pub fn load_from_file(path: &Path) -> Result<Journal, PersistenceError> {
    let mut contents = String::new();
    File::open(path)?.read_to_string(&mut contents)?;

    if contents.is_empty() {
        return Ok(Journal::new());
    }

    let mut entries = Vec::new();
    let mut next_sequence = 0;

    for (idx, line) in contents.lines().enumerate() {
        let sequence = parse_sequence_prefix(line).ok_or(PersistenceError::MalformedEntry {
            line: idx + 1,
            content: line.to_string(),
        })?;
        next_sequence = next_sequence.max(sequence + 1);
        entries.push(line.to_string());
    }

    Ok(Journal::from_parts(entries, next_sequence))
}

/// Extract `n` from a `"{n}: ..."` entry line
fn parse_sequence_prefix(line: &str) -> Option<usize> {
    let (prefix, _) = line.split_once(": ")?;
    prefix.parse().ok()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::NamedTempFile;

    fn sample_journal() -> Journal {
        let mut journal = Journal::new();
        journal.add_entry("I cried today.");
        journal.add_entry("I ate a bug.");
        journal
    }

    #[test]
    fn test_save_writes_rendered_form() {
        let journal = sample_journal();
        let file = NamedTempFile::new().unwrap();

        save_to_file(&journal, file.path()).unwrap();

        let written = fs::read_to_string(file.path()).unwrap();
        assert_eq!(written, journal.to_string());
        assert_eq!(written, "0: I cried today.\n1: I ate a bug.");
    }

    #[test]
    fn test_save_to_unwritable_path_is_io_error() {
        let journal = sample_journal();
        let missing_dir = Path::new("/nonexistent-dir/journal.txt");

        let err = save_to_file(&journal, missing_dir).unwrap_err();
        assert!(matches!(err, PersistenceError::Io(_)));
    }

    #[test]
    fn test_load_round_trips() {
        let journal = sample_journal();
        let file = NamedTempFile::new().unwrap();
        save_to_file(&journal, file.path()).unwrap();

        let loaded = load_from_file(file.path()).unwrap();
        assert_eq!(loaded.to_string(), journal.to_string());
        assert_eq!(loaded.len(), 2);
    }

    #[test]
    fn test_appending_after_load_continues_sequence() {
        let file = NamedTempFile::new().unwrap();
        save_to_file(&sample_journal(), file.path()).unwrap();

        let mut loaded = load_from_file(file.path()).unwrap();
        loaded.add_entry("Back again.");

        assert_eq!(
            loaded.to_string(),
            "0: I cried today.\n1: I ate a bug.\n2: Back again."
        );
    }

    #[test]
    fn test_load_resumes_past_gaps() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "3: only survivor").unwrap();

        let mut loaded = load_from_file(file.path()).unwrap();
        loaded.add_entry("next");
        assert_eq!(loaded.entries()[1], "4: next");
    }

    #[test]
    fn test_load_empty_file_is_empty_journal() {
        let file = NamedTempFile::new().unwrap();
        let loaded = load_from_file(file.path()).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_load_rejects_malformed_line() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "0: fine\nnot an entry").unwrap();

        let err = load_from_file(file.path()).unwrap_err();
        assert!(matches!(
            err,
            PersistenceError::MalformedEntry { line: 2, .. }
        ));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_from_file(Path::new("/nonexistent-dir/journal.txt")).unwrap_err();
        assert!(matches!(err, PersistenceError::Io(_)));
    }
}
