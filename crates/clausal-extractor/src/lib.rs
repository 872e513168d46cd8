//! Clausal Extractor
//!
//! Turns classified clauses over a dependency graph into ordered,
//! optionality-annotated propositions.
//!
//! # Overview
//!
//! The sentence has already been parsed into a [`clausal_domain::DepGraph`]
//! and classified into clauses upstream; this crate does the rendering and
//! assembly work. The editor selects and prunes graph edges through
//! non-destructive masks, the renderer turns one constituent into text
//! plus its backing word set, and the assembler packages a whole clause
//! into propositions.
//!
//! # Architecture
//!
//! ```text
//! Clause → Assembler → Renderer → Editor → DepGraph
//!             ↓
//!        Propositions
//! ```
//!
//! # Example Usage
//!
//! ```
//! use clausal_domain::{
//!     Clause, ClauseType, Constituent, DepGraph, EdgeMask,
//!     IndexedConstituent, Relation, Word,
//! };
//! use clausal_extractor::{Exclusions, ExtractorConfig, PropositionAssembler};
//!
//! // "Bell makes products"
//! let mut graph = DepGraph::new();
//! graph.add_word(Word::new(1, "Bell", "Bell", "NNP"));
//! graph.add_word(Word::new(2, "makes", "make", "VBZ"));
//! graph.add_word(Word::new(3, "products", "product", "NNS"));
//! let subj = graph.add_edge(2, 1, Relation::NominalSubject).unwrap();
//! let dobj = graph.add_edge(2, 3, Relation::DirectObject).unwrap();
//!
//! // the verb constituent is scoped away from its arguments
//! let mut verb_view = EdgeMask::new();
//! verb_view.remove(subj);
//! verb_view.remove(dobj);
//!
//! let mut clause = Clause::new(
//!     vec![
//!         Constituent::Indexed(IndexedConstituent::new(1)),
//!         Constituent::Indexed(IndexedConstituent::new(2).with_view(verb_view)),
//!         Constituent::Indexed(IndexedConstituent::new(3)),
//!     ],
//!     1,
//!     ClauseType::Svo,
//! );
//! clause.subject = Some(0);
//! clause.dobjects = vec![2];
//!
//! let config = ExtractorConfig::default();
//! let exclusions = Exclusions::default();
//! let assembler = PropositionAssembler::new(&graph, &config, &exclusions);
//!
//! let propositions = assembler.assemble(&clause, &[true, true, true]).unwrap();
//! assert_eq!(propositions.len(), 1);
//! assert_eq!(
//!     propositions[0].to_string(),
//!     r#"("Bell", "makes", "products")"#
//! );
//! ```

#![warn(missing_docs)]

mod assembler;
mod config;
pub mod editor;
mod error;
mod lexicon;
mod renderer;


pub use assembler::PropositionAssembler;
pub use config::ExtractorConfig;
pub use error::ExtractError;
pub use lexicon::Lexicon;
pub use renderer::{ConstituentRenderer, Exclusions, Rendered};
