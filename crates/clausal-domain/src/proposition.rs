//! Proposition module - the extracted output tuple

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::clause::ClauseType;
use crate::word::Word;

/// An extracted proposition.
///
/// Slot 0 holds the subject, slot 1 the relation (slot 0 when the clause
/// has no subject), slots from 2 the arguments in assembly order. Word
/// sets backing each semantic category are kept for downstream consumers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Proposition {
    /// Rendered constituents in slot order.
    pub slots: Vec<String>,
    /// Slot positions that are optional.
    pub optional: BTreeSet<usize>,
    /// Type of the clause this proposition came from.
    pub clause_type: Option<ClauseType>,
    /// Words backing the subject slot.
    pub subject_words: Option<BTreeSet<Word>>,
    /// Words backing the verb slot.
    pub verb_words: Option<BTreeSet<Word>>,
    /// Words backing each semantic category ("subject", "verb",
    /// "dobjects", ...). A later member of a category overwrites the
    /// earlier word set.
    pub items: BTreeMap<&'static str, BTreeSet<Word>>,
}

impl Proposition {
    /// Create an empty proposition.
    pub fn new() -> Self {
        Self::default()
    }

    /// The subject slot, if present.
    pub fn subject(&self) -> Option<&str> {
        self.slots.first().map(String::as_str)
    }

    /// The relation slot, if present.
    pub fn relation(&self) -> Option<&str> {
        self.slots.get(1).map(String::as_str)
    }

    /// The i-th argument (arguments start at slot 2).
    pub fn argument(&self, i: usize) -> Option<&str> {
        self.slots.get(i + 2).map(String::as_str)
    }

    /// Number of arguments.
    pub fn argument_count(&self) -> usize {
        self.slots.len().saturating_sub(2)
    }

    /// Whether the i-th argument is optional.
    pub fn is_optional_argument(&self, i: usize) -> bool {
        self.optional.contains(&(i + 2))
    }
}

impl fmt::Display for Proposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        let mut separator = "";
        for (i, slot) in self.slots.iter().enumerate() {
            write!(f, "{}\"{}\"", separator, slot)?;
            if self.optional.contains(&i) {
                write!(f, "?")?;
            }
            separator = ", ";
        }
        write!(f, ")")
    }
}
