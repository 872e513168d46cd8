//! Constituent module - role-bearing fragments of a clause

use std::collections::BTreeSet;

use crate::graph::EdgeMask;

/// A clause constituent.
///
/// Either rooted in the dependency graph or a plain literal produced by
/// clause splitting (e.g. a synthetic "is" or "has").
#[derive(Debug, Clone, PartialEq)]
pub enum Constituent {
    /// Constituent rooted in the sentence's dependency graph.
    Indexed(IndexedConstituent),
    /// Synthetic constituent with no internal structure.
    Text(TextConstituent),
}

impl Constituent {
    /// Root position of a graph-rooted constituent.
    pub fn root(&self) -> Option<usize> {
        match self {
            Constituent::Indexed(c) => Some(c.root()),
            Constituent::Text(_) => None,
        }
    }
}

/// A constituent rooted in the dependency graph.
///
/// The constituent's `view` is the edge mask scoping the sentence graph
/// down to this constituent: edges hidden by it belong to other clauses
/// or other constituents. Renders start from a clone of this view, so the
/// graph itself is shared read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedConstituent {
    root: usize,
    additional_roots: BTreeSet<usize>,
    prepositional: bool,
    view: EdgeMask,
}

impl IndexedConstituent {
    /// Create a constituent rooted at a word position with an unrestricted
    /// view of the graph.
    pub fn new(root: usize) -> Self {
        Self {
            root,
            additional_roots: BTreeSet::new(),
            prepositional: false,
            view: EdgeMask::new(),
        }
    }

    /// Scope this constituent to the part of the graph visible under `view`.
    pub fn with_view(mut self, view: EdgeMask) -> Self {
        self.view = view;
        self
    }

    /// Mark this constituent as headed by a preposition.
    pub fn prepositional(mut self) -> Self {
        self.prepositional = true;
        self
    }

    /// Register an extra attachment point, e.g. a coordinated element
    /// absorbed into this constituent.
    pub fn add_root(&mut self, root: usize) {
        self.additional_roots.insert(root);
    }

    /// Root word position.
    pub fn root(&self) -> usize {
        self.root
    }

    /// Extra attachment points in sentence order.
    pub fn additional_roots(&self) -> &BTreeSet<usize> {
        &self.additional_roots
    }

    /// Whether this constituent is headed by a preposition.
    pub fn is_prepositional(&self) -> bool {
        self.prepositional
    }

    /// Edge mask scoping the graph to this constituent.
    pub fn view(&self) -> &EdgeMask {
        &self.view
    }
}

/// A constituent represented as plain text without internal structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextConstituent {
    text: String,
}

impl TextConstituent {
    /// Create a literal constituent.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The literal text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_accessor() {
        let indexed = Constituent::Indexed(IndexedConstituent::new(3));
        let text = Constituent::Text(TextConstituent::new("is"));

        assert_eq!(indexed.root(), Some(3));
        assert_eq!(text.root(), None);
    }

    #[test]
    fn test_additional_roots_ordered() {
        let mut c = IndexedConstituent::new(2);
        c.add_root(7);
        c.add_root(4);
        let roots: Vec<usize> = c.additional_roots().iter().copied().collect();
        assert_eq!(roots, vec![4, 7]);
    }

    #[test]
    fn test_prepositional_builder() {
        let c = IndexedConstituent::new(5).prepositional();
        assert!(c.is_prepositional());
    }
}
