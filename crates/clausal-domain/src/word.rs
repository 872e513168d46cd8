//! Word module - the atomic unit of a parsed sentence

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A word of a parsed sentence.
///
/// The sentence-position index is the sole identity key within one
/// sentence's graph: equality, ordering, and hashing all go through it.
/// Real sentence positions start at 1; index 0 is reserved for synthetic
/// words created outside the parse (see [`Word::synthetic`]).
#[derive(Debug, Clone)]
pub struct Word {
    index: usize,
    text: String,
    lemma: String,
    tag: String,
}

impl Word {
    /// Create a word at a given sentence position.
    pub fn new(
        index: usize,
        text: impl Into<String>,
        lemma: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        Self {
            index,
            text: text.into(),
            lemma: lemma.into(),
            tag: tag.into(),
        }
    }

    /// Create a synthetic word with no sentence position.
    ///
    /// Used for literal constituents that have no backing parse, e.g. the
    /// "is"/"has" fragments produced by clause splitting.
    pub fn synthetic(
        text: impl Into<String>,
        lemma: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        Self::new(0, text, lemma, tag)
    }

    /// Sentence position of this word.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Original surface form.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lemma (base form).
    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    /// Coarse part-of-speech tag (Penn Treebank style).
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Whether the part-of-speech tag marks a wh-word (WDT, WP, WP$, WRB).
    pub fn is_wh(&self) -> bool {
        self.tag.starts_with('W')
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for Word {}

impl PartialOrd for Word {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Word {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index.cmp(&other.index)
    }
}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.text, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_by_index() {
        let a = Word::new(1, "Bell", "Bell", "NNP");
        let b = Word::new(3, "makes", "make", "VBZ");

        assert!(a < b);
        assert!(b > a);
    }

    #[test]
    fn test_identity_is_index_only() {
        let a = Word::new(2, "makes", "make", "VBZ");
        let b = Word::new(2, "sells", "sell", "VBZ");

        assert_eq!(a, b);
    }

    #[test]
    fn test_wh_tags() {
        assert!(Word::new(1, "which", "which", "WDT").is_wh());
        assert!(Word::new(1, "who", "who", "WP").is_wh());
        assert!(!Word::new(1, "table", "table", "NN").is_wh());
    }

    #[test]
    fn test_synthetic_index_zero() {
        let w = Word::synthetic("is", "be", "VBZ");
        assert_eq!(w.index(), 0);
        assert_eq!(w.lemma(), "be");
    }
}
