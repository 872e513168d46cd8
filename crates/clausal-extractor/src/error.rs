//! Error types for proposition extraction

use thiserror::Error;

/// Errors that can occur while rendering constituents or assembling
/// propositions.
///
/// All of these are contract violations local to one clause; callers are
/// expected to catch them per clause and continue with the rest of the
/// document.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Slot index outside the clause's constituent list
    #[error("invalid constituent: no slot at index {0}")]
    InvalidConstituent(usize),

    /// The inclusion mask excluded the verb slot
    #[error("verb slot {0} excluded by inclusion mask")]
    MissingVerb(usize),

    /// Lexicon source could not be read
    #[error("lexicon read error: {0}")]
    Lexicon(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}
