//! Rendering of clause constituents to text

use std::collections::BTreeSet;

use clausal_domain::{Clause, Constituent, DepGraph, IndexedConstituent, Relation, Word};
use tracing::debug;

use crate::config::ExtractorConfig;
use crate::editor;
use crate::error::ExtractError;

/// Relations excluded from rendered constituents.
///
/// Built once at startup and passed by reference into render calls.
#[derive(Debug, Clone)]
pub struct Exclusions {
    /// Excluded from every constituent: relative clauses, appositions and
    /// parentheticals belong to other propositions.
    pub general: Vec<Relation>,
    /// Excluded from the verb slot: additionally the catch-all "dep"
    /// relation, so stray adverbs and auxiliaries never leak into the
    /// relation text.
    pub verb: Vec<Relation>,
}

impl Default for Exclusions {
    fn default() -> Self {
        let general = vec![
            Relation::RelativeClauseModifier,
            Relation::AppositionalModifier,
            Relation::Parataxis,
        ];
        let mut verb = general.clone();
        verb.push(Relation::Dependent);
        Self { general, verb }
    }
}

/// A rendered constituent: its text plus the words backing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    /// Single-space-joined text in sentence order.
    pub text: String,
    /// The words the text was produced from, ordered by position.
    pub words: BTreeSet<Word>,
}

/// Renders one constituent of a clause into text and a word set.
pub struct ConstituentRenderer<'a> {
    graph: &'a DepGraph,
    config: &'a ExtractorConfig,
    exclusions: &'a Exclusions,
}

impl<'a> ConstituentRenderer<'a> {
    /// Create a renderer over one sentence's graph.
    pub fn new(
        graph: &'a DepGraph,
        config: &'a ExtractorConfig,
        exclusions: &'a Exclusions,
    ) -> Self {
        Self {
            graph,
            config,
            exclusions,
        }
    }

    /// Render a slot with the default exclusion set.
    ///
    /// The verb slot gets the verb exclusion set, every other slot the
    /// general one.
    pub fn render(&self, clause: &Clause, index: usize) -> Result<Rendered, ExtractError> {
        let exclude = if clause.verb == index {
            &self.exclusions.verb
        } else {
            &self.exclusions.general
        };
        self.render_with(clause, index, exclude, &[])
    }

    /// Render a slot with explicit exclusion sets.
    pub fn render_with(
        &self,
        clause: &Clause,
        index: usize,
        exclude_relations: &[Relation],
        exclude_relations_top: &[Relation],
    ) -> Result<Rendered, ExtractError> {
        let constituent = clause
            .constituent(index)
            .ok_or(ExtractError::InvalidConstituent(index))?;
        match constituent {
            Constituent::Text(literal) => Ok(render_literal(literal.text())),
            Constituent::Indexed(indexed) => {
                Ok(self.render_indexed(indexed, exclude_relations, exclude_relations_top))
            }
        }
    }

    fn render_indexed(
        &self,
        constituent: &IndexedConstituent,
        exclude_relations: &[Relation],
        exclude_relations_top: &[Relation],
    ) -> Rendered {
        let root = constituent.root();
        let mut mask = constituent.view().clone();
        editor::exclude_subgraph(
            self.graph,
            &mut mask,
            root,
            &BTreeSet::new(),
            exclude_relations,
            exclude_relations_top,
        );

        let mut positions = self.graph.descendants(root, &mask);
        for &additional in constituent.additional_roots() {
            positions.extend(self.graph.descendants(additional, &mask));
        }
        if constituent.is_prepositional() {
            positions.remove(&root);
        }

        let words: BTreeSet<Word> = positions
            .iter()
            .filter_map(|position| self.graph.word(*position).cloned())
            .collect();

        let mut parts: Vec<&str> = Vec::with_capacity(words.len() + 1);
        if constituent.is_prepositional() {
            if let Some(head) = self.graph.word(root) {
                parts.push(self.form(head));
            }
        }
        for word in &words {
            parts.push(self.form(word));
        }
        let text = parts.join(" ");
        debug!(root, text = %text, "rendered constituent");

        Rendered { text, words }
    }

    fn form<'w>(&self, word: &'w Word) -> &'w str {
        if self.config.lemmatize {
            word.lemma()
        } else {
            word.text()
        }
    }
}

/// Render a literal constituent.
///
/// The backing word is synthesized from a small override table; anything
/// not in it becomes its own lemma with a common-noun tag.
fn render_literal(text: &str) -> Rendered {
    let word = match text {
        "has" => Word::synthetic("has", "have", "VBZ"),
        "is" => Word::synthetic("is", "be", "VBZ"),
        other => Word::synthetic(other, other, "NN"),
    };
    Rendered {
        text: text.to_string(),
        words: BTreeSet::from([word]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clausal_domain::{ClauseType, TextConstituent};

    fn render_text(text: &str) -> Rendered {
        let graph = DepGraph::new();
        let config = ExtractorConfig::default();
        let exclusions = Exclusions::default();
        let renderer = ConstituentRenderer::new(&graph, &config, &exclusions);
        let clause = Clause::new(
            vec![Constituent::Text(TextConstituent::new(text))],
            0,
            ClauseType::Unknown,
        );
        renderer.render_with(&clause, 0, &[], &[]).unwrap()
    }

    #[test]
    fn test_literal_overrides() {
        let has = render_text("has");
        assert_eq!(has.text, "has");
        let word = has.words.iter().next().unwrap();
        assert_eq!(word.lemma(), "have");
        assert_eq!(word.tag(), "VBZ");

        let is = render_text("is");
        assert_eq!(is.text, "is");
        let word = is.words.iter().next().unwrap();
        assert_eq!(word.lemma(), "be");
        assert_eq!(word.tag(), "VBZ");
    }

    #[test]
    fn test_literal_fallback_is_common_noun() {
        let rendered = render_text("ghost");
        let word = rendered.words.iter().next().unwrap();
        assert_eq!(word.lemma(), "ghost");
        assert_eq!(word.tag(), "NN");
    }

    #[test]
    fn test_invalid_slot_index() {
        let graph = DepGraph::new();
        let config = ExtractorConfig::default();
        let exclusions = Exclusions::default();
        let renderer = ConstituentRenderer::new(&graph, &config, &exclusions);
        let clause = Clause::new(Vec::new(), 0, ClauseType::Unknown);

        let result = renderer.render_with(&clause, 3, &[], &[]);
        assert!(matches!(result, Err(ExtractError::InvalidConstituent(3))));
    }

    // "in the room": prepositional constituent headed by "in"
    fn prepositional_clause() -> (DepGraph, Clause) {
        let mut graph = DepGraph::new();
        graph.add_word(Word::new(1, "in", "in", "IN"));
        graph.add_word(Word::new(2, "the", "the", "DT"));
        graph.add_word(Word::new(3, "room", "room", "NN"));
        graph.add_edge(1, 3, Relation::PrepositionalObject).unwrap();
        graph.add_edge(3, 2, Relation::Determiner).unwrap();
        let clause = Clause::new(
            vec![Constituent::Indexed(
                IndexedConstituent::new(1).prepositional(),
            )],
            9,
            ClauseType::Sva,
        );
        (graph, clause)
    }

    #[test]
    fn test_prepositional_head_emitted_once() {
        let (graph, clause) = prepositional_clause();
        let config = ExtractorConfig::default();
        let exclusions = Exclusions::default();
        let renderer = ConstituentRenderer::new(&graph, &config, &exclusions);

        let rendered = renderer.render_with(&clause, 0, &[], &[]).unwrap();
        assert_eq!(rendered.text, "in the room");
        // the preposition head is not part of the word set
        let positions: Vec<usize> = rendered.words.iter().map(Word::index).collect();
        assert_eq!(positions, vec![2, 3]);
    }

    #[test]
    fn test_lemmatized_rendering() {
        let mut graph = DepGraph::new();
        graph.add_word(Word::new(1, "makes", "make", "VBZ"));
        graph.add_word(Word::new(2, "products", "product", "NNS"));
        graph.add_edge(1, 2, Relation::DirectObject).unwrap();
        let clause = Clause::new(
            vec![Constituent::Indexed(IndexedConstituent::new(1))],
            9,
            ClauseType::Svo,
        );
        let config = ExtractorConfig {
            lemmatize: true,
            ..ExtractorConfig::default()
        };
        let exclusions = Exclusions::default();
        let renderer = ConstituentRenderer::new(&graph, &config, &exclusions);

        let rendered = renderer.render_with(&clause, 0, &[], &[]).unwrap();
        assert_eq!(rendered.text, "make product");
    }

    #[test]
    fn test_default_exclusions_drop_relative_clause() {
        // "Bell, which sleeps" rendered as the antecedent only
        let mut graph = DepGraph::new();
        graph.add_word(Word::new(1, "Bell", "Bell", "NNP"));
        graph.add_word(Word::new(2, "which", "which", "WDT"));
        graph.add_word(Word::new(3, "sleeps", "sleep", "VBZ"));
        graph.add_edge(1, 3, Relation::RelativeClauseModifier).unwrap();
        graph.add_edge(3, 2, Relation::NominalSubject).unwrap();
        let clause = Clause::new(
            vec![Constituent::Indexed(IndexedConstituent::new(1))],
            9,
            ClauseType::Sv,
        );
        let config = ExtractorConfig::default();
        let exclusions = Exclusions::default();
        let renderer = ConstituentRenderer::new(&graph, &config, &exclusions);

        let rendered = renderer.render(&clause, 0).unwrap();
        assert_eq!(rendered.text, "Bell");
    }

    #[test]
    fn test_verb_exclusions_drop_catch_all_dependents() {
        // a stray auxiliary attached via "dep" must not leak into the verb
        let mut graph = DepGraph::new();
        graph.add_word(Word::new(1, "did", "do", "VBD"));
        graph.add_word(Word::new(2, "make", "make", "VB"));
        graph.add_edge(2, 1, Relation::Dependent).unwrap();
        let clause = Clause::new(
            vec![Constituent::Indexed(IndexedConstituent::new(2))],
            0,
            ClauseType::Svo,
        );
        let config = ExtractorConfig::default();
        let exclusions = Exclusions::default();
        let renderer = ConstituentRenderer::new(&graph, &config, &exclusions);

        let rendered = renderer.render(&clause, 0).unwrap();
        assert_eq!(rendered.text, "make");
    }

    #[test]
    fn test_additional_roots_absorbed() {
        // coordinated object absorbed into one constituent
        let mut graph = DepGraph::new();
        graph.add_word(Word::new(1, "products", "product", "NNS"));
        graph.add_word(Word::new(2, "services", "service", "NNS"));
        let clause = {
            let mut constituent = IndexedConstituent::new(1);
            constituent.add_root(2);
            Clause::new(vec![Constituent::Indexed(constituent)], 9, ClauseType::Svo)
        };
        let config = ExtractorConfig::default();
        let exclusions = Exclusions::default();
        let renderer = ConstituentRenderer::new(&graph, &config, &exclusions);

        let rendered = renderer.render_with(&clause, 0, &[], &[]).unwrap();
        assert_eq!(rendered.text, "products services");
    }

    #[test]
    fn test_render_respects_constituent_view() {
        // the constituent's view hides the subject subtree of the verb
        let mut graph = DepGraph::new();
        graph.add_word(Word::new(1, "Bell", "Bell", "NNP"));
        graph.add_word(Word::new(2, "makes", "make", "VBZ"));
        let subj = graph.add_edge(2, 1, Relation::NominalSubject).unwrap();
        let mut view = clausal_domain::EdgeMask::new();
        view.remove(subj);
        let clause = Clause::new(
            vec![Constituent::Indexed(
                IndexedConstituent::new(2).with_view(view),
            )],
            0,
            ClauseType::Sv,
        );
        let config = ExtractorConfig::default();
        let exclusions = Exclusions::default();
        let renderer = ConstituentRenderer::new(&graph, &config, &exclusions);

        let rendered = renderer.render(&clause, 0).unwrap();
        assert_eq!(rendered.text, "makes");
    }
}
