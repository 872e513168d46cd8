//! Lexicon of known lemmas
//!
//! Loaded once at startup from a line-oriented source; consumed by the
//! upstream flag classifier to decide slot optionality.

use std::collections::HashSet;
use std::io::BufRead;

use clausal_domain::Word;
use tracing::debug;

use crate::error::ExtractError;

/// An immutable, case-sensitive set of lemma strings.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashSet<String>,
}

impl Lexicon {
    /// Create an empty lexicon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a lexicon from a line-oriented source.
    ///
    /// One entry per line; blank lines and lines not starting with a
    /// letter are treated as comments and skipped. Only I/O failures are
    /// errors.
    pub fn load<R: BufRead>(reader: R) -> Result<Self, ExtractError> {
        let mut entries = HashSet::new();
        for line in reader.lines() {
            let line = line?;
            let entry = line.trim();
            if entry.is_empty() {
                continue;
            }
            if !entry.starts_with(|c: char| c.is_alphabetic()) {
                continue;
            }
            entries.insert(entry.to_string());
        }
        debug!(entries = entries.len(), "loaded lexicon");
        Ok(Self { entries })
    }

    /// Whether an entry is present. Case-sensitive.
    pub fn contains(&self, entry: &str) -> bool {
        self.entries.contains(entry)
    }

    /// Whether a word's lemma is present.
    pub fn contains_word(&self, word: &Word) -> bool {
        self.entries.contains(word.lemma())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the lexicon has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
