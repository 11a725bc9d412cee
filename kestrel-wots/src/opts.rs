//! Options shared by all W-OTS+ operations.

use std::num::NonZeroUsize;
use std::thread;

use crate::address::Address;
use crate::hash::HashAlg;
use crate::params::Mode;

/// Upper bound on the worker count chosen by automatic concurrency
/// (`concurrency < 0`). Hardware with more logical CPUs than this sees
/// diminishing returns: a W16 key only has 67 chains to share out.
pub const AUTO_WORKER_CAP: usize = 8;

/// Opts groups the parameters of a W-OTS+ run.
///
/// The default value selects W16, SHA-256, a zero address and a single
/// worker, which matches the RFC 8391 baseline.
#[derive(Clone, Copy, Debug, Default)]
pub struct Opts {
    /// Parameter set to operate in.
    pub mode: Mode,

    /// Starting hash address. Layer, tree, type and OTS index are
    /// supplied by the enclosing scheme; chain, hash and key/mask must
    /// be zero on entry and are managed internally.
    pub address: Address,

    /// Number of workers to evaluate chains on:
    ///
    /// - `n > 0`: exactly n workers
    /// - `n == 0`: a single worker on the calling thread (default,
    ///   lowest overhead)
    /// - `n < 0`: min(available logical CPUs, [`AUTO_WORKER_CAP`])
    pub concurrency: i32,

    /// Hash algorithm backing the PRF and chaining function. All
    /// members of the recognised set produce 256-bit digests.
    pub hash: HashAlg,
}

impl Opts {
    /// Resolve the concurrency field into a concrete worker count.
    #[must_use]
    pub fn workers(&self) -> usize {
        match self.concurrency {
            0 => 1,
            n if n > 0 => n as usize,
            _ => {
                let cpus = thread::available_parallelism().map_or(1, NonZeroUsize::get);
                cpus.min(AUTO_WORKER_CAP)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_runs_single_worker() {
        assert_eq!(Opts::default().workers(), 1);
    }

    #[test]
    fn positive_concurrency_is_exact() {
        for n in [1, 2, 5, 64] {
            let opts = Opts {
                concurrency: n,
                ..Opts::default()
            };
            assert_eq!(opts.workers(), n as usize);
        }
    }

    #[test]
    fn negative_concurrency_autoscales_within_cap() {
        let opts = Opts {
            concurrency: -1,
            ..Opts::default()
        };
        let workers = opts.workers();
        assert!(workers >= 1);
        assert!(workers <= AUTO_WORKER_CAP);
    }
}
