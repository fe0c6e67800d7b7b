//! Error handling and diagnostics for the rcc lexer
//!
//! This module provides the lexer's error type and diagnostic formatting.

use std::io;

use thiserror::Error;

use crate::lexer::Position;

pub mod diagnostic;

pub use diagnostic::Diagnostic;

/// Result type alias for lexer operations
pub type LexResult<T> = Result<T, LexError>;

/// Errors raised while scanning
///
/// Both variants are fatal for the scan that produced them; the lexer does
/// not resynchronize.
#[derive(Debug, Error)]
pub enum LexError {
    /// The underlying character source failed for a reason other than
    /// reaching the end of input
    #[error("failed to read source: {0}")]
    SourceRead(#[from] io::Error),

    /// A character outside every supported class was encountered
    #[error("unrecognized character {character:?}")]
    UnrecognizedCharacter { character: char, position: Position },
}

impl LexError {
    /// Create a new unrecognized-character error
    pub fn unrecognized(character: char, position: Position) -> Self {
        Self::UnrecognizedCharacter { character, position }
    }

    /// Get the error kind as a string
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SourceRead(_) => "Read Error",
            Self::UnrecognizedCharacter { .. } => "Lexer Error",
        }
    }

    /// Get the source position if available
    pub fn position(&self) -> Option<Position> {
        match self {
            Self::SourceRead(_) => None,
            Self::UnrecognizedCharacter { position, .. } => Some(*position),
        }
    }
}
