//! W-OTS+ (RFC 8391) one-time signatures, multi-target hardened.
//!
//! This crate implements the WOTS-T variant of the Winternitz one-time
//! signature scheme: every hash call is randomised by a 32-byte
//! [`Address`], which defeats multi-target attacks on the underlying
//! hash function. It is a building block for hash-based schemes such as
//! XMSS and SPHINCS+; keys and signatures are raw byte strings with no
//! framing.
//!
//! # Parameter Sets
//!
//! | Mode | w   | Chains | Key/signature size |
//! |------|-----|--------|--------------------|
//! | W4   | 4   | 133    | 4,256 bytes        |
//! | W16  | 16  | 67     | 2,144 bytes        |
//! | W256 | 256 | 34     | 1,088 bytes        |
//!
//! W16 is the default and the RFC 8391 baseline. Smaller w trades
//! signature size for shorter hash chains and faster signing.
//!
//! # Performance
//!
//! Two mechanisms keep the hash throughput high:
//!
//! - The first input blocks of the PRF and chaining function are
//!   identical across all calls of a run; the engine absorbs them once
//!   and clones the midstate on every call.
//! - The l chains of a key are independent and can be evaluated on
//!   multiple worker threads, controlled by [`Opts::concurrency`].
//!
//! # Example
//!
//! ```rust
//! use kestrel_wots::{gen_public_key, pk_from_sig, sign, verify, Opts};
//!
//! // Seeds are caller-supplied; use a CSPRNG in production.
//! let seed = [0x2a; 32];
//! let pub_seed = [0x17; 32];
//! let msg = [0x05; 32];
//!
//! let opts = Opts::default();
//! let pk = gen_public_key(&seed, &pub_seed, &opts)?;
//! let sig = sign(&msg, &seed, &pub_seed, &opts)?;
//!
//! assert!(verify(&pk, &sig, &msg, &pub_seed, &opts)?);
//! assert_eq!(pk_from_sig(&sig, &msg, &pub_seed, &opts)?, pk);
//! # Ok::<(), kestrel_wots::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
// Clippy allowances for cryptographic code patterns
#![allow(
    clippy::many_single_char_names,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::cast_lossless,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::doc_markdown,
    clippy::needless_range_loop
)]

mod address;
mod chain;
mod hash;
mod opts;
mod params;
mod sign;
mod utils;

pub use address::Address;
pub use hash::HashAlg;
pub use opts::{Opts, AUTO_WORKER_CAP};
pub use params::{
    Mode, Params, ADDRESS_BYTES, N, PUB_SEED_BYTES, SEED_BYTES, W16_BYTES, W256_BYTES, W4_BYTES,
};
pub use sign::{gen_public_key, pk_from_sig, sign, verify};

// Re-export core types
pub use kestrel_core::{Error, Result};
