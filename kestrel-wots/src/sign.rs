//! The W-OTS+ primitives: key generation, signing, public-key recovery
//! and verification.
//!
//! Keys and signatures are raw byte strings of l·N bytes with no
//! framing, ready for embedding in XMSS or SPHINCS+ structures. All
//! seeds are caller-supplied; the scheme is one-time and reuse
//! detection is the caller's responsibility.

use kestrel_core::{Error, Result};
use subtle::ConstantTimeEq;

use crate::chain::compute_chains;
use crate::hash::{with_hash_alg, Hasher};
use crate::opts::Opts;
use crate::params::{N, PUB_SEED_BYTES, SEED_BYTES};
use crate::utils::chain_lengths;

fn check_len(what: &'static str, buf: &[u8], expected: usize) -> Result<()> {
    if buf.len() == expected {
        Ok(())
    } else {
        Err(Error::InvalidInputLength {
            what,
            expected,
            actual: buf.len(),
        })
    }
}

/// Compute the public key that corresponds to the expanded seed.
///
/// Expands `seed` into the private key and advances every chain to its
/// endpoint. The result is l·N bytes.
pub fn gen_public_key(seed: &[u8], pub_seed: &[u8], opts: &Opts) -> Result<Vec<u8>> {
    check_len("seed", seed, SEED_BYTES)?;
    check_len("pub_seed", pub_seed, PUB_SEED_BYTES)?;

    let params = opts.mode.params();
    let workers = opts.workers();

    with_hash_alg!(opts.hash, D => {
        let hasher = Hasher::<D>::new(Some(seed), pub_seed, params);
        let priv_key = hasher.expand_seed();
        let lengths = vec![(params.w - 1) as u8; params.l];

        let mut pk = vec![0u8; params.l * N];
        compute_chains(&hasher, &priv_key, &mut pk, &lengths, &opts.address, false, workers);
        Ok(pk)
    })
}

/// Generate the signature of `msg` under the private key derived from
/// `seed`.
///
/// `msg` must be exactly N bytes (enclosing schemes sign a digest, not
/// the raw message). The result is l·N bytes.
pub fn sign(msg: &[u8], seed: &[u8], pub_seed: &[u8], opts: &Opts) -> Result<Vec<u8>> {
    check_len("message", msg, N)?;
    check_len("seed", seed, SEED_BYTES)?;
    check_len("pub_seed", pub_seed, PUB_SEED_BYTES)?;

    let params = opts.mode.params();
    let workers = opts.workers();
    let lengths = chain_lengths(msg, &params);

    with_hash_alg!(opts.hash, D => {
        let hasher = Hasher::<D>::new(Some(seed), pub_seed, params);
        let priv_key = hasher.expand_seed();

        let mut sig = vec![0u8; params.l * N];
        compute_chains(&hasher, &priv_key, &mut sig, &lengths, &opts.address, false, workers);
        Ok(sig)
    })
}

/// Recover the public key from a signature over `msg`.
///
/// Each signature block is advanced through the remaining steps of its
/// chain; a signature produced by the matching private key lands on the
/// genuine public key.
pub fn pk_from_sig(sig: &[u8], msg: &[u8], pub_seed: &[u8], opts: &Opts) -> Result<Vec<u8>> {
    check_len("message", msg, N)?;
    check_len("pub_seed", pub_seed, PUB_SEED_BYTES)?;

    let params = opts.mode.params();
    check_len("signature", sig, params.l * N)?;

    let workers = opts.workers();
    let lengths = chain_lengths(msg, &params);

    with_hash_alg!(opts.hash, D => {
        let hasher = Hasher::<D>::new(None, pub_seed, params);

        let mut pk = vec![0u8; params.l * N];
        compute_chains(&hasher, sig, &mut pk, &lengths, &opts.address, true, workers);
        Ok(pk)
    })
}

/// Check whether `sig` is a valid signature on `msg` for `pk`.
///
/// Returns `Ok(false)` for an ordinary mismatch; errors are reserved
/// for structural problems (wrong input sizes, bad options). The final
/// comparison is constant-time, so the result's timing does not depend
/// on where the first differing byte lies.
pub fn verify(pk: &[u8], sig: &[u8], msg: &[u8], pub_seed: &[u8], opts: &Opts) -> Result<bool> {
    let expected = pk_from_sig(sig, msg, pub_seed, opts)?;
    Ok(pk.ct_eq(&expected).into())
}
