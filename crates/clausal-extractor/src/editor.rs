//! Query and edit operations over a dependency graph
//!
//! Edits are expressed through [`EdgeMask`]s rather than physical edge
//! deletion, so repeated renders over one sentence graph never interfere.
//! Every operation that removes edges first collects the full removal set
//! and only then applies it; removing while iterating would skip or
//! duplicate edges.

use std::collections::BTreeSet;

use clausal_domain::{DepGraph, EdgeId, EdgeMask, Relation};
use tracing::debug;

/// Find the first edge whose relation matches `relation`.
///
/// With `ancestor_inclusive`, descendants of `relation` in the taxonomy
/// match as well. Scans in input order.
pub fn first_edge_of_relation(
    graph: &DepGraph,
    edges: &[EdgeId],
    relation: Relation,
    ancestor_inclusive: bool,
) -> Option<EdgeId> {
    edges.iter().copied().find(|id| {
        let found = graph.edge(*id).relation();
        if ancestor_inclusive {
            relation.is_ancestor_of(found)
        } else {
            relation == found
        }
    })
}

/// All edges whose relation is `relation` or descends from it, in input
/// order.
pub fn edges_of_relation(graph: &DepGraph, edges: &[EdgeId], relation: Relation) -> Vec<EdgeId> {
    edges
        .iter()
        .copied()
        .filter(|id| relation.is_ancestor_of(graph.edge(*id).relation()))
        .collect()
}

/// Whether any edge carries exactly `relation`.
pub fn contains_relation(graph: &DepGraph, edges: &[EdgeId], relation: Relation) -> bool {
    first_edge_of_relation(graph, edges, relation, false).is_some()
}

/// Hide part of the subtree under `root` in `mask`.
///
/// Walks the graph depth-first from `root` over visible out-edges in
/// dependent order. An edge is hidden if its dependent appears in
/// `exclude_vertices`, its relation appears in `exclude_relations`, or
/// the edge leaves `root` itself and its relation appears in
/// `exclude_relations_top`. Hidden edges are not recursed into; the
/// top-only set applies at depth 1 only. A `root` that is itself excluded
/// makes the whole operation a no-op.
pub fn exclude_subgraph(
    graph: &DepGraph,
    mask: &mut EdgeMask,
    root: usize,
    exclude_vertices: &BTreeSet<usize>,
    exclude_relations: &[Relation],
    exclude_relations_top: &[Relation],
) {
    if exclude_vertices.contains(&root) {
        return;
    }
    let mut to_remove = Vec::new();
    collect_excluded(
        graph,
        mask,
        root,
        exclude_vertices,
        exclude_relations,
        exclude_relations_top,
        &mut to_remove,
    );
    debug!(root, removed = to_remove.len(), "excluding subgraph edges");
    for id in to_remove {
        mask.remove(id);
    }
}

fn collect_excluded(
    graph: &DepGraph,
    mask: &EdgeMask,
    node: usize,
    exclude_vertices: &BTreeSet<usize>,
    exclude_relations: &[Relation],
    exclude_relations_top: &[Relation],
    to_remove: &mut Vec<EdgeId>,
) {
    for id in graph.out_edges(node, mask) {
        let edge = graph.edge(id);
        let dependent = edge.dependent();
        if exclude_vertices.contains(&dependent)
            || exclude_relations.contains(&edge.relation())
            || exclude_relations_top.contains(&edge.relation())
        {
            to_remove.push(id);
        } else {
            // top-only exclusions stop applying below the original root
            collect_excluded(
                graph,
                mask,
                dependent,
                exclude_vertices,
                exclude_relations,
                &[],
                to_remove,
            );
        }
    }
}

/// Sever conjuncts of `root` that form independent coordinate clauses.
///
/// A conjunct with its own subject edge is a coordinate clause of its own
/// and is disconnected so the clause detector can process it separately.
/// A conjunct without a subject (a coordinated verb or object) stays
/// attached.
pub fn disconnect_coordinate_clauses(graph: &DepGraph, mask: &mut EdgeMask, root: usize) {
    let mut to_remove = Vec::new();
    for id in graph.out_edges(root, mask) {
        let edge = graph.edge(id);
        if !edge.relation().is_conjunct() {
            continue;
        }
        let conjunct_edges = graph.out_edges(edge.dependent(), mask);
        if first_edge_of_relation(graph, &conjunct_edges, Relation::Subject, true).is_some() {
            debug!(
                root,
                conjunct = edge.dependent(),
                "disconnecting coordinate clause"
            );
            to_remove.push(id);
        }
    }
    for id in to_remove {
        mask.remove(id);
    }
}

/// Dependents of `root` attached via any relation in `relations` or a
/// descendant of one, in sentence order.
///
/// Used to compute the vertices to hide when rendering a sibling
/// constituent, e.g. a relative clause hidden from its antecedent.
pub fn excluded_vertices_for(
    graph: &DepGraph,
    mask: &EdgeMask,
    relations: &[Relation],
    root: usize,
) -> BTreeSet<usize> {
    let mut excluded = BTreeSet::new();
    for id in graph.out_edges(root, mask) {
        let edge = graph.edge(id);
        if relations.iter().any(|r| r.is_ancestor_of(edge.relation())) {
            excluded.insert(edge.dependent());
        }
    }
    excluded
}

/// Search below `root` for an edge to a wh-word whose relation descends
/// from `relation`.
///
/// Only the first outgoing edge is inspected at each level; siblings are
/// not explored.
pub fn find_relative_pronoun_edge(
    graph: &DepGraph,
    mask: &EdgeMask,
    root: usize,
    relation: Relation,
) -> Option<EdgeId> {
    let id = *graph.out_edges(root, mask).first()?;
    let edge = graph.edge(id);
    let dependent = graph.word(edge.dependent())?;
    if dependent.is_wh() && relation.is_ancestor_of(edge.relation()) {
        Some(id)
    } else {
        find_relative_pronoun_edge(graph, mask, edge.dependent(), relation)
    }
}
