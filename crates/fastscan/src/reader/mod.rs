//! Fixed-capacity block buffering over a byte source.
//!
//! [`BlockReader`] owns the block buffer, its cursor/valid-count
//! bookkeeping, the end-of-input latch, and a small pushback ring used by
//! the lookahead operations. Callers only ever see one byte at a time;
//! refills are invisible.
//!
//! Lookahead is implemented with the pushback ring rather than by
//! decrementing the cursor: a raw rewind breaks as soon as a peek crosses a
//! refill (the overwritten block no longer holds the peeked bytes), while
//! pushed-back bytes survive any number of refills.

use std::{
    collections::VecDeque,
    fmt,
    io::{self, Read},
};

use crate::options::ReadErrorPolicy;

/// Default capacity of the block buffer, in bytes.
pub(crate) const DEFAULT_BUFFER_CAPACITY: usize = 1 << 7;

/// A buffered byte reader over an optional source.
///
/// Invariants:
/// - `cursor <= valid <= block.len()`, and `valid` only changes on refill.
/// - Once `eof` is set, the source is never read again.
/// - `pending` holds pushed-back bytes in stream order and is drained before
///   the block buffer.
pub(crate) struct BlockReader<R> {
    source: Option<R>,
    policy: ReadErrorPolicy,
    block: Box<[u8]>,
    cursor: usize,
    valid: usize,
    eof: bool,
    pending: VecDeque<u8>,
}

impl<R: Read> BlockReader<R> {
    pub(crate) fn new(source: R, capacity: usize, policy: ReadErrorPolicy) -> Self {
        Self {
            source: Some(source),
            policy,
            block: vec![0u8; capacity.max(1)].into_boxed_slice(),
            cursor: 0,
            valid: 0,
            eof: false,
            pending: VecDeque::new(),
        }
    }

    /// Reads the next byte, draining pushed-back bytes first.
    ///
    /// Returns `Ok(None)` once the source is exhausted, and keeps returning
    /// it on every subsequent call. `Err` is only possible under
    /// [`ReadErrorPolicy::Propagate`].
    pub(crate) fn next_byte(&mut self) -> io::Result<Option<u8>> {
        if let Some(byte) = self.pending.pop_front() {
            return Ok(Some(byte));
        }
        if self.cursor == self.valid {
            self.refill()?;
            if self.cursor == self.valid {
                return Ok(None);
            }
        }
        let byte = self.block[self.cursor];
        self.cursor += 1;
        Ok(Some(byte))
    }

    /// Returns previously read bytes to the front of the stream.
    ///
    /// `bytes` must be in stream order; the next `next_byte` call yields
    /// `bytes[0]` again. Safe across refills, unlike a cursor rewind.
    pub(crate) fn unread(&mut self, bytes: &[u8]) {
        for &byte in bytes.iter().rev() {
            self.pending.push_front(byte);
        }
    }

    /// Drops the underlying source and discards buffered input. Idempotent.
    ///
    /// Subsequent reads deterministically report end-of-input.
    pub(crate) fn close(&mut self) {
        self.source = None;
        self.pending.clear();
        self.cursor = 0;
        self.valid = 0;
        self.eof = true;
    }

    /// Refills the block buffer from the source.
    ///
    /// Retries on `ErrorKind::Interrupted` (the "read nothing yet, not
    /// exhausted" case). `Ok(0)` is the `Read` end-of-input signal and
    /// latches `eof`. Other errors latch `eof` and are either logged and
    /// absorbed or propagated, per the configured policy. On return either
    /// `cursor < valid` or the reader is at end-of-input.
    fn refill(&mut self) -> io::Result<()> {
        if self.eof {
            return Ok(());
        }
        let Some(source) = self.source.as_mut() else {
            self.eof = true;
            return Ok(());
        };
        loop {
            match source.read(&mut self.block) {
                Ok(0) => {
                    self.eof = true;
                    return Ok(());
                }
                Ok(count) => {
                    self.cursor = 0;
                    self.valid = count;
                    return Ok(());
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => {
                    self.eof = true;
                    match self.policy {
                        ReadErrorPolicy::DegradeToEof => {
                            log::warn!("read failed, treating source as exhausted: {err}");
                            return Ok(());
                        }
                        ReadErrorPolicy::Propagate => return Err(err),
                    }
                }
            }
        }
    }
}

impl<R> fmt::Debug for BlockReader<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockReader")
            .field("capacity", &self.block.len())
            .field("cursor", &self.cursor)
            .field("valid", &self.valid)
            .field("eof", &self.eof)
            .field("pending", &self.pending.len())
            .finish_non_exhaustive()
    }
}
