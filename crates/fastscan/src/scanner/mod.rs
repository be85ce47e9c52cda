//! The public scanning surface: tokens, numbers, lines, lookahead.

use std::{
    fmt,
    fs::File,
    io::{self, Cursor, Read, Stdin},
    path::Path,
    str::FromStr,
};

use crate::{
    decode,
    error::{NumberKind, ScanError},
    options::ScannerOptions,
    reader::BlockReader,
};

/// A buffered whitespace-token scanner over a byte source.
///
/// Reads raw bytes through a fixed-capacity block buffer, decodes them as
/// UTF-8 scalars, and extracts whitespace-delimited tokens, typed numbers,
/// and lines. Tokens may be arbitrarily longer than the buffer; refills are
/// invisible to callers.
///
/// The scanner is a single logical reader: it is not `Sync`-shareable
/// machinery, and every read mutates it.
///
/// # Examples
///
/// ```rust
/// use fastscan::Scanner;
///
/// let mut scanner = Scanner::from_string("42 words 3.5\ntrailing line");
/// assert_eq!(scanner.next_i32().unwrap(), 42);
/// assert_eq!(scanner.next_token().unwrap(), "words");
/// assert_eq!(scanner.next_f64().unwrap(), 3.5);
/// assert_eq!(scanner.next_line().unwrap(), "trailing line");
/// assert!(!scanner.has_next().unwrap());
/// ```
pub struct Scanner<R> {
    reader: BlockReader<R>,
}

impl Scanner<File> {
    /// Opens the file at `path` for scanning.
    ///
    /// # Errors
    ///
    /// Returns the underlying `io::Error` immediately if the file cannot be
    /// opened (for a missing path, `ErrorKind::NotFound`).
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self::new(File::open(path)?))
    }
}

impl Scanner<Cursor<String>> {
    /// Scans an in-memory string, encoded to bytes up front.
    #[must_use]
    pub fn from_string(text: impl Into<String>) -> Self {
        Self::new(Cursor::new(text.into()))
    }
}

impl Scanner<Stdin> {
    /// Scans the process's standard input.
    #[must_use]
    pub fn from_stdin() -> Self {
        Self::new(io::stdin())
    }
}

impl<R: Read> Scanner<R> {
    /// Creates a scanner over any open byte source, with default options.
    pub fn new(source: R) -> Self {
        Self::with_options(source, ScannerOptions::default())
    }

    /// Creates a scanner with explicit [`ScannerOptions`].
    pub fn with_options(source: R, options: ScannerOptions) -> Self {
        Self {
            reader: BlockReader::new(source, options.buffer_capacity, options.read_error_policy),
        }
    }

    /// Scans the next whitespace-delimited token.
    ///
    /// Skips leading Unicode whitespace, then accumulates scalars up to the
    /// next whitespace or end-of-input. The single whitespace scalar that
    /// terminates the token is consumed with it. At end-of-input (or on
    /// all-whitespace remaining input) the token is empty; check
    /// [`has_next`](Self::has_next) first to distinguish.
    ///
    /// # Errors
    ///
    /// [`ScanError::InvalidUtf8`] on a malformed sequence, and
    /// [`ScanError::Io`] under the propagating read-error policy.
    pub fn next_token(&mut self) -> Result<String, ScanError> {
        let mut token = String::new();
        let mut next = self.next_scalar()?;
        while let Some(ch) = next {
            if !ch.is_whitespace() {
                break;
            }
            next = self.next_scalar()?;
        }
        while let Some(ch) = next {
            if ch.is_whitespace() {
                break;
            }
            token.push(ch);
            next = self.next_scalar()?;
        }
        Ok(token)
    }

    /// Scans the next token as an `i32`.
    ///
    /// # Errors
    ///
    /// [`ScanError::InvalidNumber`] if the token (including an empty token
    /// at end-of-input) is not a valid decimal `i32`; otherwise as
    /// [`next_token`](Self::next_token).
    pub fn next_i32(&mut self) -> Result<i32, ScanError> {
        self.next_parsed(NumberKind::I32)
    }

    /// Scans the next token as an `i64`.
    ///
    /// # Errors
    ///
    /// [`ScanError::InvalidNumber`] if the token is not a valid decimal
    /// `i64`; otherwise as [`next_token`](Self::next_token).
    pub fn next_i64(&mut self) -> Result<i64, ScanError> {
        self.next_parsed(NumberKind::I64)
    }

    /// Scans the next token as an `f64`.
    ///
    /// # Errors
    ///
    /// [`ScanError::InvalidNumber`] if the token is not a valid `f64`;
    /// otherwise as [`next_token`](Self::next_token).
    pub fn next_f64(&mut self) -> Result<f64, ScanError> {
        self.next_parsed(NumberKind::F64)
    }

    /// Scans the remainder of the current line, separator excluded.
    ///
    /// Stops at `\n` or end-of-input; a `\r` immediately before the `\n` is
    /// stripped as part of the separator. A bare trailing `\r` at
    /// end-of-input is kept, matching `BufRead::lines`.
    ///
    /// # Errors
    ///
    /// As [`next_token`](Self::next_token).
    pub fn next_line(&mut self) -> Result<String, ScanError> {
        let mut line = String::new();
        loop {
            match self.next_scalar()? {
                None => return Ok(line),
                Some('\n') => break,
                Some(ch) => line.push(ch),
            }
        }
        if line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    /// Whether another token exists before end-of-input.
    ///
    /// Peeks across whitespace (refilling as needed), then pushes every
    /// peeked byte back: the logical read position does not move, and the
    /// call is idempotent.
    ///
    /// # Errors
    ///
    /// As [`next_token`](Self::next_token). The peeked bytes are pushed
    /// back even when a malformed sequence is found, so a failing call is
    /// idempotent too.
    pub fn has_next(&mut self) -> Result<bool, ScanError> {
        let mut scratch = [0u8; 4];
        let mut peeked = Vec::new();
        loop {
            match decode::next_scalar(&mut self.reader) {
                Ok(Some(ch)) => {
                    peeked.extend_from_slice(ch.encode_utf8(&mut scratch).as_bytes());
                    if !ch.is_whitespace() {
                        self.reader.unread(&peeked);
                        return Ok(true);
                    }
                }
                Ok(None) => {
                    self.reader.unread(&peeked);
                    return Ok(false);
                }
                Err(ScanError::InvalidUtf8 { bytes }) => {
                    peeked.extend_from_slice(&bytes);
                    self.reader.unread(&peeked);
                    return Err(ScanError::InvalidUtf8 { bytes });
                }
                Err(err) => {
                    self.reader.unread(&peeked);
                    return Err(err);
                }
            }
        }
    }

    /// Whether any input remains.
    ///
    /// Peeks a single byte and pushes it back; detects "at least one more
    /// unit of input", not "a complete further line". Idempotent.
    ///
    /// # Errors
    ///
    /// [`ScanError::Io`] under the propagating read-error policy.
    pub fn has_next_line(&mut self) -> Result<bool, ScanError> {
        let Some(byte) = self.reader.next_byte()? else {
            return Ok(false);
        };
        self.reader.unread(&[byte]);
        Ok(true)
    }

    /// Releases the underlying source. Idempotent; a no-op on a scanner
    /// that was already closed.
    ///
    /// Buffered input is discarded and subsequent reads report
    /// end-of-input. Dropping the scanner releases the source as well;
    /// `close` exists for explicit, early release.
    pub fn close(&mut self) {
        self.reader.close();
    }

    fn next_scalar(&mut self) -> Result<Option<char>, ScanError> {
        decode::next_scalar(&mut self.reader)
    }

    fn next_parsed<T: FromStr>(&mut self, kind: NumberKind) -> Result<T, ScanError> {
        let token = self.next_token()?;
        token
            .parse()
            .map_err(|_| ScanError::InvalidNumber { kind, token })
    }
}

impl<R> fmt::Debug for Scanner<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scanner")
            .field("reader", &self.reader)
            .finish()
    }
}
