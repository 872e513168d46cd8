//! Clause module - classified constituent roles for one clause
//!
//! Clauses are produced by the upstream clause detector, never here. A
//! clause names which position of its constituent list plays which
//! grammatical role; the assembler only reads it.

use crate::constituent::Constituent;

/// Clause type following the classic seven-pattern typology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClauseType {
    /// Subject + verb ("Albert sleeps")
    Sv,
    /// Subject + verb + complement ("Albert is smart")
    Svc,
    /// Subject + verb + adverbial ("Albert remained in Princeton")
    Sva,
    /// Subject + verb + object ("Bell makes products")
    Svo,
    /// Subject + verb + two objects ("Bell gave customers products")
    Svoo,
    /// Subject + verb + object + complement
    Svoc,
    /// Subject + verb + object + adverbial
    Svoa,
    /// Existential clause ("There is a ghost")
    Existential,
    /// Could not be classified
    Unknown,
}

impl ClauseType {
    /// Get the clause type name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClauseType::Sv => "SV",
            ClauseType::Svc => "SVC",
            ClauseType::Sva => "SVA",
            ClauseType::Svo => "SVO",
            ClauseType::Svoo => "SVOO",
            ClauseType::Svoc => "SVOC",
            ClauseType::Svoa => "SVOA",
            ClauseType::Existential => "EXISTENTIAL",
            ClauseType::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for ClauseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a constituent slot is semantically required in its clause.
///
/// Computed upstream from the clause type and the adverbial lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    /// The slot must appear in every proposition
    Required,
    /// The slot may be dropped without changing the core meaning
    Optional,
    /// The slot is left out of propositions entirely
    Ignore,
}

/// A classified clause: an ordered constituent list plus role indices.
///
/// All role fields hold positions into `constituents`. `subject` is
/// `None` for clauses without an independent subject, e.g. open clausal
/// complements; the verb slot always exists.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    /// Ordered constituent list; role indices point into it.
    pub constituents: Vec<Constituent>,
    /// Position of the subject slot, if the clause has one.
    pub subject: Option<usize>,
    /// Position of the verb slot.
    pub verb: usize,
    /// Positions of indirect objects.
    pub iobjects: Vec<usize>,
    /// Positions of direct objects.
    pub dobjects: Vec<usize>,
    /// Positions of open clausal complements.
    pub xcomps: Vec<usize>,
    /// Positions of closed clausal complements.
    pub ccomps: Vec<usize>,
    /// Positions of adjectival complements.
    pub acomps: Vec<usize>,
    /// Positions of adverbials.
    pub adverbials: Vec<usize>,
    /// Position of the complement slot, if any.
    pub complement: Option<usize>,
    /// Clause type assigned by the classifier.
    pub clause_type: ClauseType,
    /// Per-slot optionality flags, parallel to `constituents`.
    pub flags: Vec<Flag>,
}

impl Clause {
    /// Create a clause with a verb slot and no argument roles assigned.
    pub fn new(constituents: Vec<Constituent>, verb: usize, clause_type: ClauseType) -> Self {
        Self {
            constituents,
            subject: None,
            verb,
            iobjects: Vec::new(),
            dobjects: Vec::new(),
            xcomps: Vec::new(),
            ccomps: Vec::new(),
            acomps: Vec::new(),
            adverbials: Vec::new(),
            complement: None,
            clause_type,
            flags: Vec::new(),
        }
    }

    /// Constituent at a slot position.
    pub fn constituent(&self, index: usize) -> Option<&Constituent> {
        self.constituents.get(index)
    }

    /// Flag of a slot; slots without an assigned flag are required.
    pub fn flag(&self, index: usize) -> Flag {
        self.flags.get(index).copied().unwrap_or(Flag::Required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constituent::{IndexedConstituent, TextConstituent};

    #[test]
    fn test_flag_defaults_to_required() {
        let clause = Clause::new(
            vec![Constituent::Indexed(IndexedConstituent::new(1))],
            0,
            ClauseType::Sv,
        );
        assert_eq!(clause.flag(0), Flag::Required);
        assert_eq!(clause.flag(7), Flag::Required);
    }

    #[test]
    fn test_constituent_lookup() {
        let clause = Clause::new(
            vec![Constituent::Text(TextConstituent::new("is"))],
            0,
            ClauseType::Svc,
        );
        assert!(clause.constituent(0).is_some());
        assert!(clause.constituent(1).is_none());
    }

    #[test]
    fn test_clause_type_names() {
        assert_eq!(ClauseType::Svoo.as_str(), "SVOO");
        assert_eq!(ClauseType::Existential.to_string(), "EXISTENTIAL");
    }
}
