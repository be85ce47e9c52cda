use std::io;

use thiserror::Error;

/// The numeric type a token was being parsed as when parsing failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    /// 32-bit signed integer (`next_i32`).
    I32,
    /// 64-bit signed integer (`next_i64`).
    I64,
    /// 64-bit float (`next_f64`).
    F64,
}

impl core::fmt::Display for NumberKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            NumberKind::I32 => "i32",
            NumberKind::I64 => "i64",
            NumberKind::F64 => "f64",
        };
        f.write_str(name)
    }
}

/// Errors surfaced by [`Scanner`](crate::Scanner) read operations.
#[derive(Debug, Error)]
pub enum ScanError {
    /// An I/O error from the underlying source.
    ///
    /// Only produced under [`ReadErrorPolicy::Propagate`]; the default
    /// policy absorbs read errors and reports end-of-input instead.
    ///
    /// [`ReadErrorPolicy::Propagate`]: crate::ReadErrorPolicy::Propagate
    #[error("read error: {0}")]
    Io(#[from] io::Error),

    /// A token did not match the numeric grammar of the requested type.
    #[error("invalid {kind} token {token:?}")]
    InvalidNumber {
        /// The type the token was being parsed as.
        kind: NumberKind,
        /// The offending token, as scanned.
        token: String,
    },

    /// A malformed multi-byte sequence in the input.
    ///
    /// Carries the bytes consumed for the sequence: the lead byte plus any
    /// continuation bytes read before the sequence was rejected.
    #[error("invalid UTF-8 sequence {bytes:02x?}")]
    InvalidUtf8 {
        /// The malformed sequence, as read from the source.
        bytes: Vec<u8>,
    },
}
