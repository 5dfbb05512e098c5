//! Buffered, incrementally decoded character stream.
//!
//! Bytes are read from the underlying reader into a fixed-size buffer and
//! decoded one UTF-8 scalar at a time. When fewer bytes remain than the next
//! scalar needs, the unread tail is moved to the front and the buffer is
//! refilled, so a capacity of [`MIN_CAPACITY`] bytes is enough for any input.
//!
//! # End of input
//!
//! At end of input [`CharSource::current`] returns [`EOF`] (`'\0'`). A NUL in
//! the middle of the text also reads as `'\0'`; use [`CharSource::is_eof`] to
//! tell them apart.
//!
//! # Positions
//!
//! Lines start at 1. Reading a newline moves to the next line at column 0;
//! reading anything else advances the column by one. The position therefore
//! names the current character, with the first character of a line at
//! column 1. Reaching end of input leaves the position unchanged.

use std::io::{self, Read};

use blang_ir::Position;

/// Character reported at end of input.
pub const EOF: char = '\0';

/// Default byte capacity of the read buffer.
pub const DEFAULT_CAPACITY: usize = 1024;

/// Smallest usable capacity: one scalar of the widest UTF-8 encoding.
pub const MIN_CAPACITY: usize = 4;

/// Failure to produce the next character.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read source: {0}")]
    Io(#[from] io::Error),
    #[error("source is not valid UTF-8 (byte offset {offset})")]
    InvalidUtf8 { offset: u64 },
}

/// One decoded character of lookahead.
#[derive(Copy, Clone, Debug)]
enum Lookahead {
    Empty,
    Char(char),
    End,
}

/// Character stream over a [`Read`] implementation.
pub struct CharSource<R> {
    reader: R,
    buf: Box<[u8]>,
    /// Next unread byte in `buf`.
    start: usize,
    /// One past the last valid byte in `buf`.
    end: usize,
    reader_done: bool,
    /// Bytes decoded so far, for error offsets.
    offset: u64,
    lookahead: Lookahead,
    current: char,
    at_eof: bool,
    line: u32,
    column: u32,
}

impl<R: Read> CharSource<R> {
    /// Open `reader` with the default buffer capacity and read the first
    /// character.
    pub fn open(reader: R) -> Result<Self, SourceError> {
        Self::with_capacity(reader, DEFAULT_CAPACITY)
    }

    /// Like [`open`](Self::open), with an explicit buffer capacity. Values
    /// below [`MIN_CAPACITY`] are raised to it.
    pub fn with_capacity(reader: R, capacity: usize) -> Result<Self, SourceError> {
        let capacity = capacity.max(MIN_CAPACITY);
        let mut source = CharSource {
            reader,
            buf: vec![0; capacity].into_boxed_slice(),
            start: 0,
            end: 0,
            reader_done: false,
            offset: 0,
            lookahead: Lookahead::Empty,
            current: EOF,
            at_eof: false,
            line: Position::START.line,
            column: Position::START.column,
        };
        source.advance()?;
        Ok(source)
    }

    /// The current character, or [`EOF`] at end of input.
    #[inline]
    pub fn current(&self) -> char {
        self.current
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.at_eof
    }

    /// Position of the current character.
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Move to the next character. Returns `false` once end of input is
    /// reached; further calls keep returning `false`.
    pub fn advance(&mut self) -> Result<bool, SourceError> {
        if self.at_eof {
            return Ok(false);
        }

        let next = match std::mem::replace(&mut self.lookahead, Lookahead::Empty) {
            Lookahead::Char(c) => Some(c),
            Lookahead::End => None,
            Lookahead::Empty => self.decode_next()?,
        };

        match next {
            Some(c) => {
                self.current = c;
                if c == '\n' {
                    self.line += 1;
                    self.column = 0;
                } else {
                    self.column += 1;
                }
                Ok(true)
            }
            None => {
                self.current = EOF;
                self.at_eof = true;
                Ok(false)
            }
        }
    }

    /// The character after the current one, without consuming it.
    ///
    /// Returns [`EOF`] when there is none.
    pub fn peek(&mut self) -> Result<char, SourceError> {
        if self.at_eof {
            return Ok(EOF);
        }
        if let Lookahead::Empty = self.lookahead {
            self.lookahead = match self.decode_next()? {
                Some(c) => Lookahead::Char(c),
                None => Lookahead::End,
            };
        }
        Ok(match self.lookahead {
            Lookahead::Char(c) => c,
            Lookahead::Empty | Lookahead::End => EOF,
        })
    }

    /// Decode the next scalar from the buffer, refilling as needed.
    fn decode_next(&mut self) -> Result<Option<char>, SourceError> {
        self.fill(1)?;
        if self.start == self.end {
            return Ok(None);
        }

        let invalid = SourceError::InvalidUtf8 {
            offset: self.offset,
        };
        let Some(width) = utf8_width(self.buf[self.start]) else {
            return Err(invalid);
        };
        self.fill(width)?;
        if self.end - self.start < width {
            return Err(invalid);
        }

        let bytes = &self.buf[self.start..self.start + width];
        let Some(c) = std::str::from_utf8(bytes)
            .ok()
            .and_then(|s| s.chars().next())
        else {
            return Err(invalid);
        };

        self.start += width;
        self.offset += width as u64;
        Ok(Some(c))
    }

    /// Make at least `need` unread bytes available, unless the reader ends
    /// first.
    fn fill(&mut self, need: usize) -> Result<(), SourceError> {
        while self.end - self.start < need && !self.reader_done {
            if self.end == self.buf.len() {
                self.buf.copy_within(self.start..self.end, 0);
                self.end -= self.start;
                self.start = 0;
            }
            match self.reader.read(&mut self.buf[self.end..]) {
                Ok(0) => self.reader_done = true,
                Ok(n) => {
                    tracing::trace!(bytes = n, offset = self.offset, "refilled source buffer");
                    self.end += n;
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}

/// Encoded length implied by a UTF-8 lead byte.
fn utf8_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}
