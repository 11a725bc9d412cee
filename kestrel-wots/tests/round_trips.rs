//! Seeded random round-trips across all modes, and the concurrency
//! equivalence sweep.
//!
//! These complement the proptest suites with a fixed, high-volume
//! deterministic run: a thousand sign/verify cycles split across the
//! three parameter sets.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use kestrel_wots::{gen_public_key, pk_from_sig, sign, verify, HashAlg, Mode, Opts};

fn next_block(rng: &mut StdRng) -> [u8; 32] {
    let mut block = [0u8; 32];
    rng.fill_bytes(&mut block);
    block
}

#[test]
fn random_round_trips_all_modes() {
    let mut rng = StdRng::seed_from_u64(0x77f5_31c2);

    // 1,000 iterations total, weighted toward the cheaper modes.
    for (mode, iterations) in [(Mode::W16, 600), (Mode::W4, 300), (Mode::W256, 100)] {
        let opts = Opts {
            mode,
            ..Opts::default()
        };

        for i in 0..iterations {
            let seed = next_block(&mut rng);
            let pub_seed = next_block(&mut rng);
            let msg = next_block(&mut rng);

            let pk = gen_public_key(&seed, &pub_seed, &opts).unwrap();
            let sig = sign(&msg, &seed, &pub_seed, &opts).unwrap();

            assert!(
                verify(&pk, &sig, &msg, &pub_seed, &opts).unwrap(),
                "round-trip failed for {mode} iteration {i}"
            );
            assert_eq!(pk_from_sig(&sig, &msg, &pub_seed, &opts).unwrap(), pk);
        }
    }
}

#[test]
fn concurrency_sweep_is_equivalent() {
    let mut rng = StdRng::seed_from_u64(0x0ddb_a11);

    for mode in [Mode::W4, Mode::W16, Mode::W256] {
        let seed = next_block(&mut rng);
        let pub_seed = next_block(&mut rng);
        let msg = next_block(&mut rng);

        let baseline = Opts {
            mode,
            ..Opts::default()
        };
        let pk = gen_public_key(&seed, &pub_seed, &baseline).unwrap();
        let sig = sign(&msg, &seed, &pub_seed, &baseline).unwrap();

        for concurrency in [0, 1, 2, 4, 8, -1] {
            let opts = Opts {
                mode,
                concurrency,
                ..Opts::default()
            };
            assert_eq!(
                gen_public_key(&seed, &pub_seed, &opts).unwrap(),
                pk,
                "{mode} gen_public_key at concurrency {concurrency}"
            );
            assert_eq!(
                sign(&msg, &seed, &pub_seed, &opts).unwrap(),
                sig,
                "{mode} sign at concurrency {concurrency}"
            );
            assert_eq!(
                pk_from_sig(&sig, &msg, &pub_seed, &opts).unwrap(),
                pk,
                "{mode} pk_from_sig at concurrency {concurrency}"
            );
        }
    }
}

#[test]
fn hash_algorithms_round_trip() {
    let mut rng = StdRng::seed_from_u64(0xb1ac_e5);

    for hash in [
        HashAlg::Sha256,
        HashAlg::Sha512_256,
        HashAlg::Blake2b256,
        HashAlg::Blake2s256,
    ] {
        let seed = next_block(&mut rng);
        let pub_seed = next_block(&mut rng);
        let msg = next_block(&mut rng);

        let opts = Opts {
            hash,
            concurrency: 2,
            ..Opts::default()
        };

        let pk = gen_public_key(&seed, &pub_seed, &opts).unwrap();
        let sig = sign(&msg, &seed, &pub_seed, &opts).unwrap();
        assert!(verify(&pk, &sig, &msg, &pub_seed, &opts).unwrap(), "{hash}");

        // The same run under a different algorithm must not verify.
        let other = Opts {
            hash: if hash == HashAlg::Sha256 {
                HashAlg::Blake2s256
            } else {
                HashAlg::Sha256
            },
            ..opts
        };
        assert!(!verify(&pk, &sig, &msg, &pub_seed, &other).unwrap());
    }
}

#[test]
fn signature_does_not_verify_under_other_key() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let opts = Opts::default();

    let seed_a = next_block(&mut rng);
    let seed_b = next_block(&mut rng);
    let pub_seed = next_block(&mut rng);
    let msg = next_block(&mut rng);

    let pk_b = gen_public_key(&seed_b, &pub_seed, &opts).unwrap();
    let sig_a = sign(&msg, &seed_a, &pub_seed, &opts).unwrap();

    assert!(!verify(&pk_b, &sig_a, &msg, &pub_seed, &opts).unwrap());
}
