//! Sequential token reader for module data files.
//!
//! Module files are whitespace-delimited streams of identifiers and numbers.
//! Records freely span lines, so the reader treats line breaks as ordinary
//! separators except for [`TokenReader::next_line`], which is used for
//! signature lines and line-oriented tables.
//!
//! The reader is forward-only. Dropping it releases the underlying file, so
//! every exit path (including a decode failure halfway through a file) closes
//! the handle.

use crate::error::{ReadError, TokenKind};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Forward-only typed reader over a buffered text source.
#[derive(Debug)]
pub struct TokenReader<R> {
    inner: R,
    /// Current physical line, without its terminator.
    buf: String,
    /// Byte offset of the unread remainder of `buf`.
    pos: usize,
    /// 1-based number of the line in `buf` (0 before the first read).
    line: usize,
}

impl TokenReader<BufReader<File>> {
    /// Open a data file for reading.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the file cannot be opened.
    pub fn open(path: &Path) -> io::Result<Self> {
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

impl<R: BufRead> TokenReader<R> {
    /// Wrap a buffered source.
    #[must_use]
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: String::new(),
            pos: 0,
            line: 0,
        }
    }

    /// Line number of the most recently read line (1-based).
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Read the next whitespace-delimited token verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::UnexpectedEndOfStream`] if no token remains.
    pub fn next_word(&mut self) -> Result<String, ReadError> {
        let (start, end) = self.next_token_span()?;
        Ok(self.buf[start..end].to_string())
    }

    /// Read the next token as a signed integer.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::MalformedToken`] if the token is not a decimal integer.
    pub fn next_i64(&mut self) -> Result<i64, ReadError> {
        self.parse_next(TokenKind::Int, |s| s.parse().ok())
    }

    /// Read the next token as an unsigned 32-bit word (decimal or `0x` hex).
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::MalformedToken`] if the token does not fit.
    pub fn next_u32(&mut self) -> Result<u32, ReadError> {
        self.parse_next(TokenKind::U32, |s| match strip_hex(s) {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => s.parse().ok(),
        })
    }

    /// Read the next token as an unsigned 64-bit word (decimal or `0x` hex).
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::MalformedToken`] if the token does not fit.
    pub fn next_u64(&mut self) -> Result<u64, ReadError> {
        self.parse_next(TokenKind::U64, |s| match strip_hex(s) {
            Some(hex) => u64::from_str_radix(hex, 16).ok(),
            None => s.parse().ok(),
        })
    }

    /// Read the next token as a floating-point value.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::MalformedToken`] if the token is not a number.
    pub fn next_f64(&mut self) -> Result<f64, ReadError> {
        self.parse_next(TokenKind::Float, |s| s.parse().ok())
    }

    /// Read a line.
    ///
    /// If tokens remain on the current line, their remainder is returned
    /// (trimmed). Otherwise the next physical line is returned without its
    /// terminator.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::UnexpectedEndOfStream`] at end of input.
    pub fn next_line(&mut self) -> Result<String, ReadError> {
        let rest = self.buf[self.pos..].trim();
        if !rest.is_empty() {
            let rest = rest.to_string();
            self.pos = self.buf.len();
            return Ok(rest);
        }
        if !self.fill_line()? {
            return Err(ReadError::UnexpectedEndOfStream { line: self.line });
        }
        self.pos = self.buf.len();
        Ok(self.buf.clone())
    }

    fn parse_next<T>(
        &mut self,
        expected: TokenKind,
        parse: impl FnOnce(&str) -> Option<T>,
    ) -> Result<T, ReadError> {
        let (start, end) = self.next_token_span()?;
        let token = &self.buf[start..end];
        parse(token).ok_or_else(|| ReadError::MalformedToken {
            line: self.line,
            token: token.to_string(),
            expected,
        })
    }

    /// Advance past the next token and return its byte range in `buf`.
    fn next_token_span(&mut self) -> Result<(usize, usize), ReadError> {
        loop {
            let rest = &self.buf[self.pos..];
            let trimmed = rest.trim_start();
            if !trimmed.is_empty() {
                let start = self.pos + (rest.len() - trimmed.len());
                let len = trimmed
                    .find(char::is_whitespace)
                    .unwrap_or(trimmed.len());
                self.pos = start + len;
                return Ok((start, start + len));
            }
            if !self.fill_line()? {
                return Err(ReadError::UnexpectedEndOfStream { line: self.line });
            }
        }
    }

    /// Replace `buf` with the next physical line. Returns `false` at end of input.
    fn fill_line(&mut self) -> Result<bool, ReadError> {
        self.buf.clear();
        self.pos = 0;
        if self.inner.read_line(&mut self.buf)? == 0 {
            return Ok(false);
        }
        self.line += 1;
        let trimmed_len = self.buf.trim_end_matches(['\r', '\n']).len();
        self.buf.truncate(trimmed_len);
        if self.line == 1 && self.buf.starts_with('\u{feff}') {
            self.buf.drain(..'\u{feff}'.len_utf8());
        }
        Ok(true)
    }
}

fn strip_hex(s: &str) -> Option<&str> {
    s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"))
}
