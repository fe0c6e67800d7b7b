//! Lexer/Scanner implementation for the C subset
//!
//! This module implements lexical analysis, pulling one token at a time from
//! a character source.

use std::io::Read;

use tracing::{debug, trace};
use unicode_general_category::{get_general_category, GeneralCategory};

use super::source::CharSource;
use super::token::{Position, Token, TokenKind};
use crate::error::{LexError, LexResult};

/// Pull-based lexer over any readable source
pub struct Lexer<R> {
    source: CharSource<R>,
    position: Position,
    at_end: bool,
    halted: bool,
}

impl<R: Read> Lexer<R> {
    /// Create a new lexer. No input is consumed until the first token is
    /// requested.
    pub fn new(reader: R) -> Self {
        Self {
            source: CharSource::new(reader),
            position: Position::start(),
            at_end: false,
            halted: false,
        }
    }

    /// Current cursor position
    pub fn position(&self) -> Position {
        self.position
    }

    /// Scan the next token
    ///
    /// Once the end of input has been reached every further call returns the
    /// same `EndOfInput` token. After an error the lexer state is undefined
    /// and scanning should not continue.
    pub fn next_token(&mut self) -> LexResult<Token> {
        loop {
            let start = self.position;
            let c = match self.read_char()? {
                Some(c) => c,
                None => return Ok(Token::eof(self.position)),
            };

            match c {
                '\n' => self.next_line(),

                // Whitespace (skip)
                c if c.is_whitespace() => {}

                // Integer literals
                c if is_decimal_digit(c) => {
                    self.unread_char();
                    return self.scan_run(TokenKind::IntegerLiteral, is_decimal_digit);
                }

                // Identifiers
                c if is_letter(c) => {
                    self.unread_char();
                    return self.scan_run(TokenKind::Identifier, is_letter);
                }

                // Punctuation, or nothing we know
                c => {
                    return match TokenKind::from_punctuation(c) {
                        Some(kind) => Ok(self.make_token(kind, start, c.to_string())),
                        None => {
                            debug!(character = ?c, %start, "unrecognized character");
                            Err(LexError::unrecognized(c, start))
                        }
                    };
                }
            }
        }
    }

    /// Tokenize the remaining input, including the trailing `EndOfInput`
    pub fn tokenize(&mut self) -> LexResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.is_eof();
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    /// Scan a maximal run of characters accepted by `accept`
    ///
    /// The first character has been pushed back by the caller, so the run is
    /// never empty.
    fn scan_run(&mut self, kind: TokenKind, accept: fn(char) -> bool) -> LexResult<Token> {
        let start = self.position;
        let mut text = String::new();

        while let Some(c) = self.read_char()? {
            if accept(c) {
                text.push(c);
            } else {
                self.unread_char();
                break;
            }
        }

        Ok(self.make_token(kind, start, text))
    }

    fn make_token(&self, kind: TokenKind, start: Position, text: String) -> Token {
        trace!(%kind, %start, text = %text, "token");
        Token::new(kind, start, text)
    }

    /// Read the next character, advancing the column
    fn read_char(&mut self) -> LexResult<Option<char>> {
        if self.at_end {
            return Ok(None);
        }

        match self.source.read_char()? {
            Some(c) => {
                self.position.column += 1;
                Ok(Some(c))
            }
            None => {
                debug!(position = %self.position, "reached end of input");
                self.at_end = true;
                Ok(None)
            }
        }
    }

    /// Push the last character back, rewinding the column
    fn unread_char(&mut self) {
        if self.source.unread_char() {
            self.position.column -= 1;
        }
    }

    fn next_line(&mut self) {
        self.position.line += 1;
        self.position.column = 1;
    }
}

/// Decimal digit in any script (general category Nd)
fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit() || get_general_category(c) == GeneralCategory::DecimalNumber
}

/// Letter in any script (general category L)
fn is_letter(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphabetic();
    }
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

impl<R: Read> Iterator for Lexer<R> {
    type Item = LexResult<Token>;

    /// Yields every token before `EndOfInput`, then stops. An error is
    /// yielded once and ends the iteration.
    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }

        match self.next_token() {
            Ok(token) if token.is_eof() => {
                self.halted = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(e) => {
                self.halted = true;
                Some(Err(e))
            }
        }
    }
}
