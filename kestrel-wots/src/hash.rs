//! Keyed-hash engine with digest precomputation.
//!
//! Every primitive evaluates tens of thousands of hash calls, and the
//! first one or two input blocks are identical across calls: the PRF is
//! H(pad3 ‖ seed ‖ input) and the chaining function F is
//! H(pad0 ‖ key ‖ input), where pad3 is 30 zero bytes followed by the
//! 16-bit integer 3 and pad0 is 32 zero bytes. The engine absorbs each
//! fixed prefix into a hasher context once at construction and clones
//! that context on every call, so the prefix blocks are never
//! recompressed.
//!
//! The precomputed contexts are immutable after construction. A call
//! clones the relevant context onto its own stack before absorbing, so
//! concurrent chain workers never share mutable hash state and the hot
//! path performs no heap allocation.

use core::fmt;

use digest::consts::U32;
use digest::Digest;
use kestrel_core::{Error, Zeroizing};

use crate::address::Address;
use crate::params::{Params, N};

/// BLAKE2b with a 256-bit digest.
pub(crate) type Blake2b256 = blake2::Blake2b<U32>;

/// The recognised 256-bit hash algorithms.
///
/// RFC 8391 specifies SHA-256; the other members are drop-in
/// replacements with the same digest size. The default corresponds to
/// the RFC.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum HashAlg {
    /// SHA-256, the RFC 8391 default.
    #[default]
    Sha256,
    /// SHA-512/256.
    Sha512_256,
    /// BLAKE2b with 256-bit output.
    Blake2b256,
    /// BLAKE2s with 256-bit output.
    Blake2s256,
}

impl TryFrom<u32> for HashAlg {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Error> {
        match value {
            0 => Ok(HashAlg::Sha256),
            1 => Ok(HashAlg::Sha512_256),
            2 => Ok(HashAlg::Blake2b256),
            3 => Ok(HashAlg::Blake2s256),
            _ => Err(Error::UnsupportedHash { value }),
        }
    }
}

impl fmt::Display for HashAlg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashAlg::Sha256 => f.write_str("SHA-256"),
            HashAlg::Sha512_256 => f.write_str("SHA-512/256"),
            HashAlg::Blake2b256 => f.write_str("BLAKE2b-256"),
            HashAlg::Blake2s256 => f.write_str("BLAKE2s-256"),
        }
    }
}

/// Dispatch a block of code over the concrete digest type named by a
/// [`HashAlg`] value. The block sees the type under the given alias.
macro_rules! with_hash_alg {
    ($alg:expr, $D:ident => $body:expr) => {
        match $alg {
            $crate::hash::HashAlg::Sha256 => {
                type $D = ::sha2::Sha256;
                $body
            }
            $crate::hash::HashAlg::Sha512_256 => {
                type $D = ::sha2::Sha512_256;
                $body
            }
            $crate::hash::HashAlg::Blake2b256 => {
                type $D = $crate::hash::Blake2b256;
                $body
            }
            $crate::hash::HashAlg::Blake2s256 => {
                type $D = ::blake2::Blake2s256;
                $body
            }
        }
    };
}

pub(crate) use with_hash_alg;

/// The keyed-hash engine.
///
/// Holds one precomputed context per recurring prefix:
///
/// - `prf_pub`:  H(pad3 ‖ pub_seed ‖ ...) — PRF with the public seed
/// - `prf_priv`: H(pad3 ‖ priv_seed ‖ ...) — PRF with the private seed;
///   absent when deriving a public key from a signature
/// - `hash_f`:   H(pad0 ‖ ...) — the keyed chaining function
///
/// Constructed per primitive call and dropped when the call returns.
pub(crate) struct Hasher<D: Digest + Clone> {
    prf_pub: D,
    prf_priv: Option<D>,
    hash_f: D,
    pub(crate) params: Params,
}

impl<D: Digest + Clone> Hasher<D> {
    /// Build the engine, absorbing the fixed prefixes.
    pub(crate) fn new(priv_seed: Option<&[u8]>, pub_seed: &[u8], params: Params) -> Self {
        debug_assert_eq!(<D as Digest>::output_size(), N);

        // While padding is all zero, precompute the F prefix.
        let mut padding = [0u8; N];
        let hash_f = D::new_with_prefix(padding);

        // Switch the padding to the PRF tag.
        padding[N - 2..].copy_from_slice(&3u16.to_be_bytes());

        let mut prf_pub = D::new_with_prefix(padding);
        prf_pub.update(pub_seed);

        let prf_priv = priv_seed.map(|seed| {
            let mut ctx = D::new_with_prefix(padding);
            ctx.update(seed);
            ctx
        });

        Self {
            prf_pub,
            prf_priv,
            hash_f,
            params,
        }
    }

    /// PRF with the public seed: absorb the address, finalise into
    /// `out`. Writes exactly `N` bytes.
    pub(crate) fn prf_pub(&self, adrs: &Address, out: &mut [u8]) {
        let mut ctx = self.prf_pub.clone();
        ctx.update(adrs.as_bytes());
        out.copy_from_slice(&ctx.finalize()[..]);
    }

    /// PRF with the private seed: absorb the counter, finalise into
    /// `out`. Writes exactly `N` bytes.
    pub(crate) fn prf_priv(&self, ctr: &[u8; 32], out: &mut [u8]) {
        let prf = self
            .prf_priv
            .as_ref()
            .expect("hasher was built without a private seed");
        let mut ctx = prf.clone();
        ctx.update(ctr);
        out.copy_from_slice(&ctx.finalize()[..]);
    }

    /// Keyed chaining function F: absorb the key, then `inout`, and
    /// write the digest back into `inout`.
    pub(crate) fn hash_f(&self, key: &[u8], inout: &mut [u8]) {
        let mut ctx = self.hash_f.clone();
        ctx.update(key);
        ctx.update(&inout[..]);
        inout.copy_from_slice(&ctx.finalize()[..]);
    }

    /// Expand the private seed into an (l·N)-byte private key by
    /// driving the private PRF with a 32-byte counter whose last two
    /// bytes hold the chain index.
    pub(crate) fn expand_seed(&self) -> Zeroizing<Vec<u8>> {
        let mut priv_key = Zeroizing::new(vec![0u8; self.params.l * N]);
        let mut ctr = [0u8; 32];

        for (i, sk) in priv_key.chunks_mut(N).enumerate() {
            ctr[30..].copy_from_slice(&(i as u16).to_be_bytes());
            self.prf_priv(&ctr, sk);
        }

        priv_key
    }
}
