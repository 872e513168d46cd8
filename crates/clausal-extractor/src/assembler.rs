//! Assembly of propositions from classified clauses
//!
//! The assembler drives the renderer once per constituent slot and
//! packages the results into [`Proposition`]s: subject first, then the
//! verb, then the argument categories in a fixed priority order, then a
//! second pass for adverbials that precede the verb. The whole operation
//! is a pure function of (clause, inclusion mask, config).

use std::collections::BTreeSet;

use clausal_domain::{Clause, Constituent, DepGraph, Flag, Proposition};
use tracing::debug;

use crate::config::ExtractorConfig;
use crate::error::ExtractError;
use crate::renderer::{ConstituentRenderer, Exclusions};

/// Argument categories in assembly priority order.
const CATEGORY_ORDER: [&str; 6] = [
    "iobjects", "dobjects", "xcomps", "ccomps", "acomps", "adverbials",
];

/// Assembles propositions out of classified clauses.
pub struct PropositionAssembler<'a> {
    renderer: ConstituentRenderer<'a>,
    config: &'a ExtractorConfig,
}

impl<'a> PropositionAssembler<'a> {
    /// Create an assembler over one sentence's graph.
    pub fn new(
        graph: &'a DepGraph,
        config: &'a ExtractorConfig,
        exclusions: &'a Exclusions,
    ) -> Self {
        Self {
            renderer: ConstituentRenderer::new(graph, config, exclusions),
            config,
        }
    }

    /// Assemble the propositions of one clause.
    ///
    /// `include` is the inclusion mask over the clause's slots; slots past
    /// its end count as included. The verb slot must be included or the
    /// clause fails with [`ExtractError::MissingVerb`]. An excluded
    /// subject is silently dropped; an absent subject (open clausal
    /// complement) leaves the verb in slot 0.
    pub fn assemble(
        &self,
        clause: &Clause,
        include: &[bool],
    ) -> Result<Vec<Proposition>, ExtractError> {
        debug!(
            clause_type = %clause.clause_type,
            slots = clause.constituents.len(),
            "assembling clause"
        );
        let mut proposition = Proposition::new();

        match clause.subject {
            Some(subject) if included(include, subject) => {
                let rendered = self.renderer.render(clause, subject)?;
                proposition.slots.push(rendered.text);
                proposition.clause_type = Some(clause.clause_type);
                proposition.subject_words = Some(rendered.words.clone());
                proposition.items.insert("subject", rendered.words);
            }
            Some(subject) => {
                debug!(subject, "subject slot excluded by mask");
            }
            None => {}
        }

        if !included(include, clause.verb) {
            return Err(ExtractError::MissingVerb(clause.verb));
        }
        let rendered = self.renderer.render(clause, clause.verb)?;
        proposition.slots.push(rendered.text);
        proposition.verb_words = Some(rendered.words.clone());
        proposition.items.insert("verb", rendered.words);

        let mut propositions = vec![proposition];

        let adverbials: BTreeSet<usize> = clause.adverbials.iter().copied().collect();
        let verb_root = match clause.constituent(clause.verb) {
            Some(Constituent::Indexed(indexed)) => Some(indexed.root()),
            _ => None,
        };

        for (category, indexes) in self.sorted_categories(clause) {
            for index in indexes {
                if self.is_pre_verbal(clause, index, verb_root, &adverbials) {
                    continue;
                }
                if !included(include, index) {
                    continue;
                }
                for proposition in &mut propositions {
                    let rendered = self.renderer.render(clause, index)?;
                    proposition.slots.push(rendered.text);
                    proposition.items.insert(category, rendered.words);
                }
            }
        }

        self.append_pre_verbal_adverbials(
            clause,
            include,
            verb_root,
            &adverbials,
            &mut propositions,
        )?;

        if !self.config.nary {
            collapse_to_fixed_arity(&mut propositions);
        }

        Ok(propositions)
    }

    /// Argument slot indexes grouped by category, each group in ascending
    /// index order, categories in priority order.
    fn sorted_categories(&self, clause: &Clause) -> Vec<(&'static str, BTreeSet<usize>)> {
        let mut categories: Vec<(&'static str, BTreeSet<usize>)> = CATEGORY_ORDER
            .iter()
            .map(|&category| {
                let members = match category {
                    "iobjects" => &clause.iobjects,
                    "dobjects" => &clause.dobjects,
                    "xcomps" => &clause.xcomps,
                    "ccomps" => &clause.ccomps,
                    "acomps" => &clause.acomps,
                    _ => &clause.adverbials,
                };
                (category, members.iter().copied().collect())
            })
            .collect();
        if let Some(complement) = clause.complement {
            categories.push(("complement", BTreeSet::from([complement])));
        }
        categories
    }

    /// Whether a slot is an adverbial that precedes a graph-rooted verb.
    fn is_pre_verbal(
        &self,
        clause: &Clause,
        index: usize,
        verb_root: Option<usize>,
        adverbials: &BTreeSet<usize>,
    ) -> bool {
        let Some(verb_root) = verb_root else {
            return false;
        };
        if !adverbials.contains(&index) {
            return false;
        }
        match clause.constituent(index) {
            Some(Constituent::Indexed(indexed)) => indexed.root() < verb_root,
            _ => false,
        }
    }

    /// Second pass over the adverbials: consume the maximal prefix of
    /// genuinely pre-verbal ones, marking the appended slots optional when
    /// the clause's flag policy says so.
    fn append_pre_verbal_adverbials(
        &self,
        clause: &Clause,
        include: &[bool],
        verb_root: Option<usize>,
        adverbials: &BTreeSet<usize>,
        propositions: &mut [Proposition],
    ) -> Result<(), ExtractError> {
        for &index in adverbials {
            // a literal verb has no position to compare against
            let Some(verb_root) = verb_root else {
                break;
            };
            let Some(Constituent::Indexed(indexed)) = clause.constituent(index) else {
                break;
            };
            if indexed.root() > verb_root {
                break;
            }
            if !included(include, index) {
                continue;
            }
            for proposition in propositions.iter_mut() {
                let rendered = self.renderer.render(clause, index)?;
                proposition.slots.push(rendered.text);
                if clause.flag(index) == Flag::Optional {
                    proposition.optional.insert(proposition.slots.len() - 1);
                    proposition.items.insert("adverbials", rendered.words);
                }
            }
        }
        Ok(())
    }
}

/// Collapse every proposition to at most 3 slots.
///
/// Optionality markings are dropped; slots from position 2 onward are
/// concatenated left-to-right into a single argument.
fn collapse_to_fixed_arity(propositions: &mut [Proposition]) {
    for proposition in propositions.iter_mut() {
        proposition.optional.clear();
        if proposition.slots.len() > 3 {
            let argument = proposition.slots[2..].join(" ");
            proposition.slots.truncate(2);
            proposition.slots.push(argument);
        }
    }
}

fn included(include: &[bool], index: usize) -> bool {
    include.get(index).copied().unwrap_or(true)
}
