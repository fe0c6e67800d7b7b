//! Lexical analysis module
//!
//! This module handles tokenization of C subset source code.

pub mod scanner;
pub mod source;
pub mod token;

pub use scanner::Lexer;
pub use source::CharSource;
pub use token::{Position, Token, TokenKind};

use crate::error::LexResult;

/// Tokenize an in-memory source, including the trailing `EndOfInput`
pub fn tokenize_str(source: &str) -> LexResult<Vec<Token>> {
    Lexer::new(source.as_bytes()).tokenize()
}
