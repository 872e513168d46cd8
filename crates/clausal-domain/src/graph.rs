//! Dependency graph module - words connected by relation-labeled edges
//!
//! One graph holds one sentence. Words live in an arena keyed by their
//! sentence position; edges live in an append-only list and are addressed
//! by [`EdgeId`]. Pruning never deletes anything: edit operations record
//! removed edge ids in an [`EdgeMask`], so several renders can walk the
//! same graph with independent masks.

use std::collections::{BTreeMap, BTreeSet};

use crate::relation::Relation;
use crate::word::Word;

/// Identifier of an edge within one graph's edge list.
///
/// Ids are only meaningful to the graph that issued them; looking one up
/// in a different graph is a logic error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(usize);

impl EdgeId {
    /// Position of the edge in the graph's edge list.
    pub fn value(&self) -> usize {
        self.0
    }
}

/// A directed, relation-labeled edge between two words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    governor: usize,
    dependent: usize,
    relation: Relation,
}

impl Edge {
    /// Sentence position of the governing word.
    pub fn governor(&self) -> usize {
        self.governor
    }

    /// Sentence position of the dependent word.
    pub fn dependent(&self) -> usize {
        self.dependent
    }

    /// Relation labeling this edge.
    pub fn relation(&self) -> Relation {
        self.relation
    }
}

/// A set of edges hidden from traversal.
///
/// Masks are cheap to clone and scoped to one render, which keeps pruning
/// repeatable: masking the same edge twice is the same as masking it once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeMask {
    removed: BTreeSet<EdgeId>,
}

impl EdgeMask {
    /// Create an empty mask (everything visible).
    pub fn new() -> Self {
        Self::default()
    }

    /// Hide an edge. Returns `false` if it was already hidden.
    pub fn remove(&mut self, id: EdgeId) -> bool {
        self.removed.insert(id)
    }

    /// Whether an edge is hidden.
    pub fn is_removed(&self, id: EdgeId) -> bool {
        self.removed.contains(&id)
    }

    /// Number of hidden edges.
    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }
}

/// A dependency graph for a single sentence.
#[derive(Debug, Clone, Default)]
pub struct DepGraph {
    words: BTreeMap<usize, Word>,
    edges: Vec<Edge>,
    // Out-edges per governor, kept sorted by dependent position.
    children: BTreeMap<usize, Vec<EdgeId>>,
}

impl DepGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word to the graph, replacing any word at the same position.
    pub fn add_word(&mut self, word: Word) {
        self.words.insert(word.index(), word);
    }

    /// Add an edge between two words already in the graph.
    pub fn add_edge(
        &mut self,
        governor: usize,
        dependent: usize,
        relation: Relation,
    ) -> Result<EdgeId, String> {
        if !self.words.contains_key(&governor) {
            return Err(format!("No word at governor position {}", governor));
        }
        if !self.words.contains_key(&dependent) {
            return Err(format!("No word at dependent position {}", dependent));
        }
        let id = EdgeId(self.edges.len());
        self.edges.push(Edge {
            governor,
            dependent,
            relation,
        });
        let siblings = self.children.entry(governor).or_default();
        let position = siblings
            .partition_point(|other| self.edges[other.value()].dependent <= dependent);
        siblings.insert(position, id);
        Ok(id)
    }

    /// Look up a word by sentence position.
    pub fn word(&self, index: usize) -> Option<&Word> {
        self.words.get(&index)
    }

    /// Look up an edge by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a different graph and falls outside
    /// this graph's edge list.
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.value()]
    }

    /// Number of words in the graph.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of edges in the graph, hidden ones included.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Words of the graph in sentence order.
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.words.values()
    }

    /// Outgoing edges of a word visible under `mask`, sorted by dependent
    /// position.
    pub fn out_edges(&self, governor: usize, mask: &EdgeMask) -> Vec<EdgeId> {
        self.children
            .get(&governor)
            .map(|ids| {
                ids.iter()
                    .copied()
                    .filter(|id| !mask.is_removed(*id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Positions of `root` and everything reachable from it over edges
    /// visible under `mask`.
    pub fn descendants(&self, root: usize, mask: &EdgeMask) -> BTreeSet<usize> {
        let mut reached = BTreeSet::new();
        self.collect_descendants(root, mask, &mut reached);
        reached
    }

    fn collect_descendants(&self, node: usize, mask: &EdgeMask, reached: &mut BTreeSet<usize>) {
        if !reached.insert(node) {
            return;
        }
        for id in self.out_edges(node, mask) {
            self.collect_descendants(self.edge(id).dependent(), mask, reached);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // "Bell makes products": makes governs Bell (nsubj) and products (dobj)
    fn sample_graph() -> (DepGraph, EdgeId, EdgeId) {
        let mut graph = DepGraph::new();
        graph.add_word(Word::new(1, "Bell", "Bell", "NNP"));
        graph.add_word(Word::new(2, "makes", "make", "VBZ"));
        graph.add_word(Word::new(3, "products", "product", "NNS"));
        let subj = graph.add_edge(2, 1, Relation::NominalSubject).unwrap();
        let obj = graph.add_edge(2, 3, Relation::DirectObject).unwrap();
        (graph, subj, obj)
    }

    #[test]
    fn test_add_edge_requires_words() {
        let mut graph = DepGraph::new();
        graph.add_word(Word::new(1, "Bell", "Bell", "NNP"));
        assert!(graph.add_edge(1, 9, Relation::DirectObject).is_err());
        assert!(graph.add_edge(9, 1, Relation::DirectObject).is_err());
    }

    #[test]
    fn test_out_edges_sorted_by_dependent() {
        let mut graph = DepGraph::new();
        graph.add_word(Word::new(1, "a", "a", "DT"));
        graph.add_word(Word::new(2, "saw", "see", "VBD"));
        graph.add_word(Word::new(3, "b", "b", "NN"));
        // insert out of sentence order
        let late = graph.add_edge(2, 3, Relation::DirectObject).unwrap();
        let early = graph.add_edge(2, 1, Relation::NominalSubject).unwrap();

        let mask = EdgeMask::new();
        assert_eq!(graph.out_edges(2, &mask), vec![early, late]);
    }

    #[test]
    #[should_panic]
    fn test_edge_id_from_another_graph_panics() {
        let (_, subj, _) = sample_graph();
        let empty = DepGraph::new();
        empty.edge(subj);
    }

    #[test]
    fn test_descendants_include_root() {
        let (graph, _, _) = sample_graph();
        let mask = EdgeMask::new();
        let reached = graph.descendants(2, &mask);
        assert_eq!(reached, BTreeSet::from([1, 2, 3]));
    }

    #[test]
    fn test_mask_hides_subtree() {
        let (graph, subj, _) = sample_graph();
        let mut mask = EdgeMask::new();
        mask.remove(subj);
        let reached = graph.descendants(2, &mask);
        assert_eq!(reached, BTreeSet::from([2, 3]));
    }

    #[test]
    fn test_mask_remove_is_idempotent() {
        let (_, subj, _) = sample_graph();
        let mut mask = EdgeMask::new();
        assert!(mask.remove(subj));
        assert!(!mask.remove(subj));
        assert_eq!(mask.removed_count(), 1);
    }

    #[test]
    fn test_masks_are_independent() {
        let (graph, subj, obj) = sample_graph();
        let mut first = EdgeMask::new();
        first.remove(subj);
        let mut second = EdgeMask::new();
        second.remove(obj);

        assert_eq!(graph.descendants(2, &first), BTreeSet::from([2, 3]));
        assert_eq!(graph.descendants(2, &second), BTreeSet::from([1, 2]));
        // the graph itself is untouched
        assert_eq!(graph.edge_count(), 2);
    }
}
