//! # rcc
//!
//! A lexical scanner for a small subset of C. It turns a stream of source
//! characters into positioned tokens for a parser to consume.
//!
//! ## Architecture
//!
//! - `lexer`: token types, the pushback character source and the scanner
//! - `error`: error type and diagnostic formatting
//!
//! ```
//! use rcc::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("int main ( ) { return 2 ; }".as_bytes());
//! let first = lexer.next_token().unwrap();
//! assert_eq!(first.kind, TokenKind::Identifier);
//! assert_eq!(first.text, "int");
//! ```

pub mod error;
pub mod lexer;

// Re-export commonly used types
pub use error::{Diagnostic, LexError, LexResult};
pub use lexer::{tokenize_str, Lexer, Position, Token, TokenKind};

/// Version of rcc
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
