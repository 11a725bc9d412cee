//! Error types for Kestrel cryptographic operations.

use core::fmt;

/// Result type alias using [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur during cryptographic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Mode word does not name a defined parameter set.
    InvalidMode {
        /// The offending mode value.
        value: u32,
    },

    /// Hash algorithm is not in the recognised 256-bit set.
    UnsupportedHash {
        /// The offending hash algorithm value.
        value: u32,
    },

    /// Address deserialisation received the wrong number of bytes.
    InvalidAddress {
        /// Expected length in bytes.
        expected: usize,
        /// Actual length provided.
        actual: usize,
    },

    /// An input buffer (message, seed, signature, ...) has the wrong size.
    InvalidInputLength {
        /// Which input was malformed.
        what: &'static str,
        /// Expected length in bytes.
        expected: usize,
        /// Actual length provided.
        actual: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidMode { value } => {
                write!(f, "invalid mode {value}, must be one of W4, W16, W256")
            }
            Error::UnsupportedHash { value } => {
                write!(f, "unsupported hash algorithm [{value}]")
            }
            Error::InvalidAddress { expected, actual } => {
                write!(f, "invalid address: expected {expected} bytes, got {actual}")
            }
            Error::InvalidInputLength {
                what,
                expected,
                actual,
            } => {
                write!(f, "invalid {what} length: expected {expected}, got {actual}")
            }
        }
    }
}

impl std::error::Error for Error {}
