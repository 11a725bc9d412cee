//! # Kestrel Core
//!
//! Shared foundation for the Kestrel hash-based signature crates.
//!
//! This crate provides:
//! - Common error types ([`Error`], [`Result`])
//! - Re-exports of `zeroize` and `subtle` so that all member crates agree
//!   on a single version of the secret-hygiene and constant-time
//!   comparison primitives

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;

pub use error::{Error, Result};

/// Re-export zeroize for convenience.
pub use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Re-export subtle for constant-time operations.
pub use subtle;
