//! Tests for the public lexer interface.

use std::io::{self, Read};

use pretty_assertions::assert_eq;
use rcc::{tokenize_str, LexError, Lexer, Position, Token, TokenKind};

/// Reader that yields `data` and then fails
struct FailingReader {
    data: &'static [u8],
    interrupted: bool,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if !self.interrupted {
            self.interrupted = true;
            return Err(io::Error::new(io::ErrorKind::Interrupted, "try again"));
        }
        if self.data.is_empty() {
            return Err(io::Error::new(io::ErrorKind::Other, "device unplugged"));
        }
        let n = self.data.len().min(buf.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

#[test]
fn punctuation_and_whitespace_only() {
    let tokens = tokenize_str(" ( \n)\t{ }\n\n ; ").unwrap();
    let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["(", ")", "{", "}", ";", ""]);
    assert!(tokens.last().unwrap().is_eof());
}

#[test]
fn one_token_per_maximal_run() {
    let tokens = tokenize_str("alpha 123 beta\n4567(gamma)").unwrap();
    let runs: Vec<(TokenKind, &str)> = tokens.iter().map(|t| (t.kind, t.text.as_str())).collect();
    assert_eq!(
        runs,
        vec![
            (TokenKind::Identifier, "alpha"),
            (TokenKind::IntegerLiteral, "123"),
            (TokenKind::Identifier, "beta"),
            (TokenKind::IntegerLiteral, "4567"),
            (TokenKind::LeftParen, "("),
            (TokenKind::Identifier, "gamma"),
            (TokenKind::RightParen, ")"),
            (TokenKind::EndOfInput, ""),
        ]
    );
}

#[test]
fn newline_resets_column() {
    let tokens = tokenize_str("a\nb").unwrap();
    assert_eq!(tokens[0], Token::new(TokenKind::Identifier, Position::new(1, 1), "a"));
    assert_eq!(tokens[1], Token::new(TokenKind::Identifier, Position::new(2, 1), "b"));
}

#[test]
fn unrecognized_character_position() {
    let err = tokenize_str("int main ( ) {\n  return @;\n}").unwrap_err();
    match err {
        LexError::UnrecognizedCharacter { character, position } => {
            assert_eq!(character, '@');
            assert_eq!(position, Position::new(2, 10));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn invalid_utf8_is_unrecognized() {
    let err = Lexer::new(&[b'x', b' ', 0xFF][..]).tokenize().unwrap_err();
    assert!(matches!(
        err,
        LexError::UnrecognizedCharacter { character: '\u{FFFD}', position } if position == Position::new(1, 3)
    ));
}

#[test]
fn read_failure_is_source_read_error() {
    let mut lexer = Lexer::new(FailingReader {
        data: b"main",
        interrupted: false,
    });

    let err = lexer.next_token().unwrap_err();
    match err {
        LexError::SourceRead(e) => assert_eq!(e.kind(), io::ErrorKind::Other),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn construction_reads_nothing() {
    let lexer = Lexer::new(FailingReader {
        data: b"",
        interrupted: true,
    });
    assert_eq!(lexer.position(), Position::start());
}
