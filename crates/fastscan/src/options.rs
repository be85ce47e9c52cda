use crate::reader::DEFAULT_BUFFER_CAPACITY;

/// How the scanner treats I/O errors raised while refilling its buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadErrorPolicy {
    /// Record the error at `warn` level and treat the source as exhausted.
    ///
    /// Subsequent reads report end-of-input without touching the source
    /// again. This matches batch-input usage where a torn stream should end
    /// the scan, not abort the program.
    #[default]
    DegradeToEof,

    /// Surface the error to the caller as [`ScanError::Io`].
    ///
    /// The source is still considered exhausted afterwards; the error is
    /// fatal to the scan, not retryable.
    ///
    /// [`ScanError::Io`]: crate::ScanError::Io
    Propagate,
}

/// Configuration options for a [`Scanner`](crate::Scanner).
///
/// # Examples
///
/// ```rust
/// use fastscan::{ReadErrorPolicy, Scanner, ScannerOptions};
///
/// let options = ScannerOptions {
///     read_error_policy: ReadErrorPolicy::Propagate,
///     ..Default::default()
/// };
/// let mut scanner = Scanner::with_options("1 2 3".as_bytes(), options);
/// assert_eq!(scanner.next_i32().unwrap(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannerOptions {
    /// Capacity in bytes of the internal block buffer.
    ///
    /// Fixed for the life of the scanner; refills never resize it. Values
    /// below 1 are clamped to 1. Tokens longer than the buffer are handled
    /// transparently by refilling mid-token.
    ///
    /// # Default
    ///
    /// `128`
    pub buffer_capacity: usize,

    /// Policy for I/O errors during buffer refills.
    ///
    /// # Default
    ///
    /// [`ReadErrorPolicy::DegradeToEof`]
    pub read_error_policy: ReadErrorPolicy,
}

impl Default for ScannerOptions {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            read_error_policy: ReadErrorPolicy::default(),
        }
    }
}
