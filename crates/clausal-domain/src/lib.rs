//! Clausal Domain Layer
//!
//! This crate contains the data model for clause-level proposition
//! extraction. It has ZERO external dependencies and defines the
//! fundamental concepts all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Word**: a token of the sentence, identified by its position
//! - **Relation**: a grammatical relation from a closed hierarchy
//! - **DepGraph**: per-sentence word nodes plus relation-labeled edges
//! - **EdgeMask**: a non-destructive view hiding pruned edges
//! - **Constituent**: a role-bearing fragment, graph-rooted or literal
//! - **Clause**: constituent roles classified upstream
//! - **Proposition**: the extracted (subject, relation, arguments) tuple
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture:
//! - No external crate dependencies
//! - Pure data and invariants only
//! - Graph editing, rendering and assembly live in clausal-extractor

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod clause;
pub mod constituent;
pub mod graph;
pub mod proposition;
pub mod relation;
pub mod word;

// Re-exports for convenience
pub use clause::{Clause, ClauseType, Flag};
pub use constituent::{Constituent, IndexedConstituent, TextConstituent};
pub use graph::{DepGraph, Edge, EdgeId, EdgeMask};
pub use proposition::Proposition;
pub use relation::Relation;
pub use word::Word;
