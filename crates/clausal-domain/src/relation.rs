//! Relation module - the closed taxonomy of grammatical relations
//!
//! Relations label the edges of a dependency graph and form a fixed
//! hierarchy (e.g. the coarse subject relation subsumes nominal, clausal
//! and passive subjects). The hierarchy never changes at runtime; every
//! classification predicate in the editor and renderer goes through
//! [`Relation::is_ancestor_of`].

/// A grammatical relation drawn from the closed hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Relation {
    /// Unclassified dependency ("dep") - the root of the hierarchy and the
    /// catch-all label for edges the parser could not classify further
    Dependent,
    /// Auxiliary ("aux")
    Aux,
    /// Passive auxiliary ("auxpass")
    AuxPassive,
    /// Copula ("cop")
    Copula,
    /// Argument ("arg")
    Argument,
    /// Agent of a passive verb ("agent")
    Agent,
    /// Complement ("comp")
    Complement,
    /// Subject ("subj")
    Subject,
    /// Nominal subject ("nsubj")
    NominalSubject,
    /// Passive nominal subject ("nsubjpass")
    NominalPassiveSubject,
    /// Clausal subject ("csubj")
    ClausalSubject,
    /// Passive clausal subject ("csubjpass")
    ClausalPassiveSubject,
    /// Object ("obj")
    Object,
    /// Direct object ("dobj")
    DirectObject,
    /// Indirect object ("iobj")
    IndirectObject,
    /// Prepositional object ("pobj")
    PrepositionalObject,
    /// Clausal complement with internal subject ("ccomp")
    ClausalComplement,
    /// Open clausal complement ("xcomp")
    OpenClausalComplement,
    /// Adjectival complement ("acomp")
    AdjectivalComplement,
    /// Prepositional complement ("pcomp")
    PrepositionalComplement,
    /// Modifier ("mod")
    Modifier,
    /// Adverbial clause modifier ("advcl")
    AdverbialClauseModifier,
    /// Relative clause modifier ("rcmod")
    RelativeClauseModifier,
    /// Adverbial modifier ("advmod")
    AdverbialModifier,
    /// Negation modifier ("neg")
    Negation,
    /// Noun phrase adverbial modifier ("npadvmod")
    NounPhraseAdverbialModifier,
    /// Temporal modifier ("tmod")
    TemporalModifier,
    /// Appositional modifier ("appos")
    AppositionalModifier,
    /// Prepositional modifier ("prep")
    PrepositionalModifier,
    /// Possession modifier ("poss")
    PossessionModifier,
    /// Possessive modifier ("possessive")
    PossessiveModifier,
    /// Determiner ("det")
    Determiner,
    /// Predeterminer ("predet")
    Predeterminer,
    /// Preconjunct ("preconj")
    Preconjunct,
    /// Multi-word expression ("mwe")
    MultiWordExpression,
    /// Phrasal verb particle ("prt")
    PhrasalVerbParticle,
    /// Marker of a subordinate clause ("mark")
    Marker,
    /// Conjunct ("conj")
    Conjunct,
    /// Coordinating conjunction ("cc")
    Coordination,
    /// Expletive ("expl")
    Expletive,
    /// Parataxis ("parataxis")
    Parataxis,
    /// Relative word of a relative clause ("rel")
    Relative,
    /// Semantic dependent ("sdep")
    SemanticDependent,
    /// External subject of an open clausal complement ("xsubj")
    ExternalSubject,
}

impl Relation {
    /// All members of the taxonomy.
    pub const ALL: [Relation; 44] = [
        Relation::Dependent,
        Relation::Aux,
        Relation::AuxPassive,
        Relation::Copula,
        Relation::Argument,
        Relation::Agent,
        Relation::Complement,
        Relation::Subject,
        Relation::NominalSubject,
        Relation::NominalPassiveSubject,
        Relation::ClausalSubject,
        Relation::ClausalPassiveSubject,
        Relation::Object,
        Relation::DirectObject,
        Relation::IndirectObject,
        Relation::PrepositionalObject,
        Relation::ClausalComplement,
        Relation::OpenClausalComplement,
        Relation::AdjectivalComplement,
        Relation::PrepositionalComplement,
        Relation::Modifier,
        Relation::AdverbialClauseModifier,
        Relation::RelativeClauseModifier,
        Relation::AdverbialModifier,
        Relation::Negation,
        Relation::NounPhraseAdverbialModifier,
        Relation::TemporalModifier,
        Relation::AppositionalModifier,
        Relation::PrepositionalModifier,
        Relation::PossessionModifier,
        Relation::PossessiveModifier,
        Relation::Determiner,
        Relation::Predeterminer,
        Relation::Preconjunct,
        Relation::MultiWordExpression,
        Relation::PhrasalVerbParticle,
        Relation::Marker,
        Relation::Conjunct,
        Relation::Coordination,
        Relation::Expletive,
        Relation::Parataxis,
        Relation::Relative,
        Relation::SemanticDependent,
        Relation::ExternalSubject,
    ];

    /// Short code of this relation as emitted by the parser.
    pub fn code(&self) -> &'static str {
        match self {
            Relation::Dependent => "dep",
            Relation::Aux => "aux",
            Relation::AuxPassive => "auxpass",
            Relation::Copula => "cop",
            Relation::Argument => "arg",
            Relation::Agent => "agent",
            Relation::Complement => "comp",
            Relation::Subject => "subj",
            Relation::NominalSubject => "nsubj",
            Relation::NominalPassiveSubject => "nsubjpass",
            Relation::ClausalSubject => "csubj",
            Relation::ClausalPassiveSubject => "csubjpass",
            Relation::Object => "obj",
            Relation::DirectObject => "dobj",
            Relation::IndirectObject => "iobj",
            Relation::PrepositionalObject => "pobj",
            Relation::ClausalComplement => "ccomp",
            Relation::OpenClausalComplement => "xcomp",
            Relation::AdjectivalComplement => "acomp",
            Relation::PrepositionalComplement => "pcomp",
            Relation::Modifier => "mod",
            Relation::AdverbialClauseModifier => "advcl",
            Relation::RelativeClauseModifier => "rcmod",
            Relation::AdverbialModifier => "advmod",
            Relation::Negation => "neg",
            Relation::NounPhraseAdverbialModifier => "npadvmod",
            Relation::TemporalModifier => "tmod",
            Relation::AppositionalModifier => "appos",
            Relation::PrepositionalModifier => "prep",
            Relation::PossessionModifier => "poss",
            Relation::PossessiveModifier => "possessive",
            Relation::Determiner => "det",
            Relation::Predeterminer => "predet",
            Relation::Preconjunct => "preconj",
            Relation::MultiWordExpression => "mwe",
            Relation::PhrasalVerbParticle => "prt",
            Relation::Marker => "mark",
            Relation::Conjunct => "conj",
            Relation::Coordination => "cc",
            Relation::Expletive => "expl",
            Relation::Parataxis => "parataxis",
            Relation::Relative => "rel",
            Relation::SemanticDependent => "sdep",
            Relation::ExternalSubject => "xsubj",
        }
    }

    /// Immediate parent in the hierarchy, or `None` for the root.
    pub fn parent(&self) -> Option<Relation> {
        match self {
            Relation::Dependent => None,
            Relation::Aux => Some(Relation::Dependent),
            Relation::AuxPassive => Some(Relation::Aux),
            Relation::Copula => Some(Relation::Aux),
            Relation::Argument => Some(Relation::Dependent),
            Relation::Agent => Some(Relation::Argument),
            Relation::Complement => Some(Relation::Argument),
            Relation::Subject => Some(Relation::Argument),
            Relation::NominalSubject => Some(Relation::Subject),
            Relation::NominalPassiveSubject => Some(Relation::NominalSubject),
            Relation::ClausalSubject => Some(Relation::Subject),
            Relation::ClausalPassiveSubject => Some(Relation::ClausalSubject),
            Relation::Object => Some(Relation::Complement),
            Relation::DirectObject => Some(Relation::Object),
            Relation::IndirectObject => Some(Relation::Object),
            Relation::PrepositionalObject => Some(Relation::Object),
            Relation::ClausalComplement => Some(Relation::Complement),
            Relation::OpenClausalComplement => Some(Relation::Complement),
            Relation::AdjectivalComplement => Some(Relation::Complement),
            Relation::PrepositionalComplement => Some(Relation::Complement),
            Relation::Modifier => Some(Relation::Dependent),
            Relation::AdverbialClauseModifier => Some(Relation::Modifier),
            Relation::RelativeClauseModifier => Some(Relation::Modifier),
            Relation::AdverbialModifier => Some(Relation::Modifier),
            Relation::Negation => Some(Relation::AdverbialModifier),
            Relation::NounPhraseAdverbialModifier => Some(Relation::Modifier),
            Relation::TemporalModifier => Some(Relation::NounPhraseAdverbialModifier),
            Relation::AppositionalModifier => Some(Relation::Modifier),
            Relation::PrepositionalModifier => Some(Relation::Modifier),
            Relation::PossessionModifier => Some(Relation::Modifier),
            Relation::PossessiveModifier => Some(Relation::Modifier),
            Relation::Determiner => Some(Relation::Modifier),
            Relation::Predeterminer => Some(Relation::Modifier),
            Relation::Preconjunct => Some(Relation::Modifier),
            Relation::MultiWordExpression => Some(Relation::Modifier),
            Relation::PhrasalVerbParticle => Some(Relation::Modifier),
            Relation::Marker => Some(Relation::Modifier),
            Relation::Conjunct => Some(Relation::Dependent),
            Relation::Coordination => Some(Relation::Dependent),
            Relation::Expletive => Some(Relation::Dependent),
            Relation::Parataxis => Some(Relation::Dependent),
            Relation::Relative => Some(Relation::Dependent),
            Relation::SemanticDependent => Some(Relation::Dependent),
            Relation::ExternalSubject => Some(Relation::SemanticDependent),
        }
    }

    /// Whether this relation is an ancestor of `other` in the hierarchy.
    ///
    /// Reflexive and transitive: every relation is its own ancestor.
    pub fn is_ancestor_of(&self, other: Relation) -> bool {
        let mut current = Some(other);
        while let Some(relation) = current {
            if relation == *self {
                return true;
            }
            current = relation.parent();
        }
        false
    }

    /// Parse a relation from its parser code.
    pub fn parse(code: &str) -> Option<Self> {
        Relation::ALL.iter().copied().find(|r| r.code() == code)
    }

    /// Whether this relation marks a subject of any kind.
    pub fn is_subject(&self) -> bool {
        Relation::Subject.is_ancestor_of(*self)
    }

    /// Whether this relation marks an object of any kind.
    pub fn is_object(&self) -> bool {
        Relation::Object.is_ancestor_of(*self)
    }

    /// Whether this relation marks a conjunct.
    pub fn is_conjunct(&self) -> bool {
        Relation::Conjunct.is_ancestor_of(*self)
    }

    /// Whether this relation marks a prepositional modifier of any kind.
    pub fn is_prepositional(&self) -> bool {
        Relation::PrepositionalModifier.is_ancestor_of(*self)
    }

    /// Whether this relation is a negation.
    pub fn is_negation(&self) -> bool {
        *self == Relation::Negation
    }

    /// Whether this relation is a copula.
    pub fn is_copula(&self) -> bool {
        *self == Relation::Copula
    }

    /// Whether this relation is an auxiliary of any kind.
    pub fn is_auxiliary(&self) -> bool {
        Relation::Aux.is_ancestor_of(*self)
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Relation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown relation: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_hierarchy() {
        assert!(Relation::Subject.is_ancestor_of(Relation::NominalSubject));
        assert!(Relation::Subject.is_ancestor_of(Relation::ClausalSubject));
        assert!(Relation::Subject.is_ancestor_of(Relation::NominalPassiveSubject));
        assert!(Relation::Subject.is_ancestor_of(Relation::ClausalPassiveSubject));
        assert!(!Relation::Subject.is_ancestor_of(Relation::DirectObject));
    }

    #[test]
    fn test_object_hierarchy() {
        assert!(Relation::Object.is_ancestor_of(Relation::DirectObject));
        assert!(Relation::Object.is_ancestor_of(Relation::IndirectObject));
        assert!(Relation::Object.is_ancestor_of(Relation::PrepositionalObject));
        assert!(!Relation::Object.is_ancestor_of(Relation::NominalSubject));
    }

    #[test]
    fn test_dependent_is_root() {
        for relation in Relation::ALL {
            assert!(
                Relation::Dependent.is_ancestor_of(relation),
                "dep should be an ancestor of {}",
                relation
            );
        }
    }

    #[test]
    fn test_ancestor_is_reflexive() {
        for relation in Relation::ALL {
            assert!(relation.is_ancestor_of(relation));
        }
    }

    #[test]
    fn test_codes_round_trip() {
        for relation in Relation::ALL {
            assert_eq!(Relation::parse(relation.code()), Some(relation));
        }
    }

    #[test]
    fn test_predicates() {
        assert!(Relation::NominalSubject.is_subject());
        assert!(Relation::DirectObject.is_object());
        assert!(Relation::Conjunct.is_conjunct());
        assert!(Relation::Negation.is_negation());
        assert!(Relation::AuxPassive.is_auxiliary());
        assert!(!Relation::AdverbialModifier.is_subject());
    }
}
