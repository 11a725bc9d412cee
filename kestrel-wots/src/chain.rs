//! Hash-chain kernel and the worker scheduler.
//!
//! The kernel advances one chain through a bounded number of keyed hash
//! steps. The scheduler partitions the l independent chains of a key
//! across workers; each worker owns a contiguous range of chains, a
//! private copy of the starting address, a 64-byte scratch buffer and
//! its own hash contexts, and writes to a disjoint slice of the output.
//! No locking is needed on the hot path, and the result is byte-for-byte
//! independent of the worker count.

use digest::Digest;

use crate::address::Address;
use crate::hash::Hasher;
use crate::params::N;

/// Advance one hash chain.
///
/// Copies `input` into `out` and performs `steps` iterations starting at
/// chain position `start`. Each iteration derives a key and a bitmask
/// from the address via the public-seed PRF (using `scratch` as
/// key ‖ mask), XORs the mask into the chain value and applies F with
/// the key. The address's hash-index and key/mask fields are mutated;
/// callers that reuse an address must pass a copy.
///
/// Requires `start + steps <= w`: the chain has exactly w - 1 usable
/// steps.
pub(crate) fn chain<D: Digest + Clone>(
    hasher: &Hasher<D>,
    scratch: &mut [u8; 2 * N],
    input: &[u8],
    out: &mut [u8],
    start: u32,
    steps: u32,
    adrs: &mut Address,
) {
    debug_assert!(start + steps <= hasher.params.w);

    out.copy_from_slice(input);
    let (key, mask) = scratch.split_at_mut(N);

    for i in start..start + steps {
        adrs.set_hash(i);

        adrs.set_key_and_mask(0);
        hasher.prf_pub(adrs, key);
        adrs.set_key_and_mask(1);
        hasher.prf_pub(adrs, mask);

        for (o, m) in out.iter_mut().zip(mask.iter()) {
            *o ^= m;
        }

        hasher.hash_f(key, out);
    }
}

/// Evaluate all l chains of `input` into `out`.
///
/// `lengths[j]` is the message digit for chain j. With `from_sig` unset
/// the chain runs from position 0 for `lengths[j]` steps (key
/// generation uses `lengths[j] = w - 1` throughout); with it set, the
/// chain resumes at `lengths[j]` and runs to the end, which recovers
/// public-key blocks from signature blocks.
///
/// `workers` chains are split into ceil(l / workers)-sized contiguous
/// ranges; the last range may be shorter, and surplus workers receive
/// no work. The call blocks until every worker has finished.
pub(crate) fn compute_chains<D: Digest + Clone + Send + Sync>(
    hasher: &Hasher<D>,
    input: &[u8],
    out: &mut [u8],
    lengths: &[u8],
    adrs: &Address,
    from_sig: bool,
    workers: usize,
) {
    let l = hasher.params.l;
    debug_assert_eq!(input.len(), l * N);
    debug_assert_eq!(out.len(), l * N);
    debug_assert_eq!(lengths.len(), l);

    if workers <= 1 {
        let mut adrs = *adrs;
        chain_range(hasher, input, out, lengths, &mut adrs, from_sig, 0);
        return;
    }

    let per_worker = l.div_ceil(workers);
    std::thread::scope(|scope| {
        let ranges = out
            .chunks_mut(per_worker * N)
            .zip(input.chunks(per_worker * N))
            .zip(lengths.chunks(per_worker));

        for (k, ((out_range, in_range), len_range)) in ranges.enumerate() {
            let mut adrs = *adrs;
            scope.spawn(move || {
                chain_range(
                    hasher,
                    in_range,
                    out_range,
                    len_range,
                    &mut adrs,
                    from_sig,
                    k * per_worker,
                );
            });
        }
    });
}

/// Evaluate one worker's contiguous range of chains. `base` is the
/// global index of the first chain in the range.
fn chain_range<D: Digest + Clone>(
    hasher: &Hasher<D>,
    input: &[u8],
    out: &mut [u8],
    lengths: &[u8],
    adrs: &mut Address,
    from_sig: bool,
    base: usize,
) {
    let w = hasher.params.w;
    let mut scratch = [0u8; 2 * N];

    let chains = input
        .chunks(N)
        .zip(out.chunks_mut(N))
        .zip(lengths.iter().copied());

    for (j, ((block_in, block_out), len)) in chains.enumerate() {
        adrs.set_chain((base + j) as u32);

        let (start, steps) = if from_sig {
            (u32::from(len), w - 1 - u32::from(len))
        } else {
            (0, u32::from(len))
        };

        chain(hasher, &mut scratch, block_in, block_out, start, steps, adrs);
    }
}
