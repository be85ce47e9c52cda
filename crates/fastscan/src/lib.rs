//! A buffered whitespace-token scanner for streams, files, and in-memory
//! text.
//!
//! `fastscan` reads raw bytes through a small fixed-capacity buffer, decodes
//! them as UTF-8, and extracts whitespace-delimited tokens parsed as
//! strings, integers, or floats, plus line-oriented reads and non-consuming
//! lookahead. It is built for fast batch input processing: one pass, one
//! small buffer, no regex-based delimiter machinery.
//!
//! ```rust
//! use fastscan::Scanner;
//!
//! let mut scanner = Scanner::from_string("3 14 15\nnames follow");
//! let mut sum = 0;
//! while scanner.has_next().unwrap() {
//!     match scanner.next_i64() {
//!         Ok(n) => sum += n,
//!         Err(_) => break,
//!     }
//! }
//! assert_eq!(sum, 32);
//! ```
//!
//! I/O errors during scanning degrade to end-of-input by default (and are
//! logged through [`log`]); construct with
//! [`ReadErrorPolicy::Propagate`] to surface them as [`ScanError::Io`]
//! instead.

mod decode;
mod error;
mod options;
mod reader;
mod scanner;

#[cfg(test)]
mod tests;

pub use error::{NumberKind, ScanError};
pub use options::{ReadErrorPolicy, ScannerOptions};
pub use scanner::Scanner;
