//! W-OTS+ parameter sets as defined in RFC 8391.
//!
//! A [`Mode`] names one of the three closed parameter sets (w = 4, 16,
//! 256); [`Mode::params`] resolves it to the numeric [`Params`] record
//! used by every other component. Parameters are derived by a pure
//! function so that concurrent callers on different modes can never
//! interfere.

use core::fmt;

use kestrel_core::Error;

/// Digest length in bytes. Every supported hash produces 256-bit output,
/// and messages, seeds and chain elements are all `N` bytes.
pub const N: usize = 32;

/// Size of the secret seed in bytes.
pub const SEED_BYTES: usize = 32;

/// Size of the public seed in bytes.
pub const PUB_SEED_BYTES: usize = 32;

/// Size of a serialised hash address in bytes.
pub const ADDRESS_BYTES: usize = 32;

/// W4 public key and signature size: 133 chains of 32 bytes.
pub const W4_BYTES: usize = 133 * N;

/// W16 public key and signature size: 67 chains of 32 bytes.
pub const W16_BYTES: usize = 67 * N;

/// W256 public key and signature size: 34 chains of 32 bytes.
pub const W256_BYTES: usize = 34 * N;

/// Mode constants select the internal parameters of a W-OTS+ run.
///
/// The available parameter sets use w = 4, w = 16 and w = 256. The
/// default, used when no explicit mode is chosen, is w = 16; the
/// discriminant order keeps `Mode::try_from(0)` equivalent to the
/// default.
///
/// See RFC 8391 for details on the parameter sets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// The parameter set with w = 16. This is the default mode.
    #[default]
    W16,
    /// The parameter set with w = 4: longest keys, shortest chains.
    W4,
    /// The parameter set with w = 256: shortest keys, longest chains.
    W256,
}

/// Numeric parameters derived from a [`Mode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Params {
    /// Winternitz parameter: the base of the digit representation.
    pub w: u32,
    /// log2(w): message bits consumed per chain.
    pub log_w: u32,
    /// Number of message chains.
    pub l1: usize,
    /// Number of checksum chains.
    pub l2: usize,
    /// Total number of chains: l1 + l2.
    pub l: usize,
}

impl Mode {
    /// Resolve this mode into its parameter record.
    #[must_use]
    pub const fn params(self) -> Params {
        match self {
            Mode::W4 => Params {
                w: 4,
                log_w: 2,
                l1: 128,
                l2: 5,
                l: 133,
            },
            Mode::W16 => Params {
                w: 16,
                log_w: 4,
                l1: 64,
                l2: 3,
                l: 67,
            },
            Mode::W256 => Params {
                w: 256,
                log_w: 8,
                l1: 32,
                l2: 2,
                l: 34,
            },
        }
    }

    /// Size in bytes of a public key or signature in this mode.
    #[must_use]
    pub const fn key_bytes(self) -> usize {
        self.params().l * N
    }
}

impl TryFrom<u32> for Mode {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Error> {
        match value {
            0 => Ok(Mode::W16),
            1 => Ok(Mode::W4),
            2 => Ok(Mode::W256),
            _ => Err(Error::InvalidMode { value }),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::W4 => f.write_str("W4"),
            Mode::W16 => f.write_str("W16"),
            Mode::W256 => f.write_str("W256"),
        }
    }
}
