//! Character source with single-character pushback
//!
//! Decodes UTF-8 from any reader one character at a time. The lexer needs to
//! look at most one character ahead, so a single pushback slot is kept.

use std::io::{self, BufRead, BufReader, Read};

/// Buffered UTF-8 character reader
pub struct CharSource<R> {
    reader: BufReader<R>,
    pushed_back: Option<char>,
    last: Option<char>,
}

impl<R: Read> CharSource<R> {
    /// Create a new character source. Nothing is read until the first call
    /// to [`CharSource::read_char`].
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            pushed_back: None,
            last: None,
        }
    }

    /// Read the next character, or `None` at end of input
    ///
    /// A pushed back character is returned before anything new is decoded.
    /// Malformed UTF-8 yields U+FFFD for each bad sequence.
    pub fn read_char(&mut self) -> io::Result<Option<char>> {
        let c = match self.pushed_back.take() {
            Some(c) => Some(c),
            None => self.decode()?,
        };
        self.last = c;
        Ok(c)
    }

    /// Push the most recently read character back onto the source
    ///
    /// Returns `false` when there was nothing to push back: either nothing
    /// has been read since the last pushback, or the last read hit the end
    /// of input.
    pub fn unread_char(&mut self) -> bool {
        match self.last.take() {
            Some(c) => {
                self.pushed_back = Some(c);
                true
            }
            None => false,
        }
    }

    fn decode(&mut self) -> io::Result<Option<char>> {
        let lead = match self.next_byte()? {
            Some(b) => b,
            None => return Ok(None),
        };

        let width = utf8_width(lead);
        if width == 0 {
            return Ok(Some(char::REPLACEMENT_CHARACTER));
        }

        let mut bytes = [lead, 0, 0, 0];
        for slot in bytes.iter_mut().take(width).skip(1) {
            match self.peek_byte()? {
                Some(b) if b & 0xC0 == 0x80 => {
                    *slot = b;
                    self.reader.consume(1);
                }
                // Leave the offending byte for the next read
                _ => return Ok(Some(char::REPLACEMENT_CHARACTER)),
            }
        }

        let c = std::str::from_utf8(&bytes[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        Ok(Some(c))
    }

    fn peek_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let b = self.peek_byte()?;
        if b.is_some() {
            self.reader.consume(1);
        }
        Ok(b)
    }
}

/// Length of the UTF-8 sequence introduced by `lead`, or 0 if `lead` cannot
/// start a sequence
fn utf8_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}
