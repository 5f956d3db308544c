use crate::hash::{KeccakF1600, LANES};
use crate::{hash, hash_many, hash_xof, Digest, Permutation, Provider, Variant};

/// Known answers from FIPS 202 / the NIST example values.
const EMPTY_VECTORS: [(Variant, &str); 4] = [
    (
        Variant::Sha3_224,
        "6b4e03423667dbb73b6e15454f0eb1abd4597f9a1b078e3f5b5a6bc7",
    ),
    (
        Variant::Sha3_256,
        "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a",
    ),
    (
        Variant::Sha3_384,
        "0c63a75b845e4f7d01107d852e4c2485c51a50aaaa94fc61995e71bbee983a2ac3713831264adb47fb6bd1e058d5f004",
    ),
    (
        Variant::Sha3_512,
        "a69f73cca23a9ac5c8b567dc185a756e97c982164fe25859e0d1dcc1475c80a615b2123af1f5f94c11e3e9402c3ac558f500199d95b6d3e301758586281dcd26",
    ),
];

const ABC_VECTORS: [(Variant, &str); 4] = [
    (
        Variant::Sha3_224,
        "e642824c3f8cf24ad09234ee7d3c766fc9a3a5168d0c94ad73b46fdf",
    ),
    (
        Variant::Sha3_256,
        "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532",
    ),
    (
        Variant::Sha3_384,
        "ec01498288516fc926459f58e2c6ad8df9b473cb0fc08c2596da7cf0e49be4b298d88cea927ac7f539f1edf228376d25",
    ),
    (
        Variant::Sha3_512,
        "b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0",
    ),
];

const SHAKE128_EMPTY_32: &str = "7f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef26";
const SHAKE256_EMPTY_64: &str = "46b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762fd75dc4ddd8c0f200cb05019d67b592f6fc821c49479ab48640292eacb3b7c4be";

/// Every test below runs against each registered provider.
fn providers() -> impl Iterator<Item = &'static dyn Permutation> {
    Provider::ALL.into_iter().map(Provider::permutation)
}

#[test]
fn test_empty_message() {
    for provider in providers() {
        for (variant, expected) in EMPTY_VECTORS {
            assert_eq!(hash(b"", variant, Some(provider)).to_string(), expected);
        }
    }
}

#[test]
fn test_abc() {
    for provider in providers() {
        for (variant, expected) in ABC_VECTORS {
            assert_eq!(hash(b"abc", variant, Some(provider)).to_hex(), expected);
        }
    }
}

#[test]
fn test_shake_known_answers() {
    for provider in providers() {
        assert!(hash_xof(b"", Variant::Shake128, 0, Some(provider)).is_empty());
        assert_eq!(
            hash_xof(b"", Variant::Shake128, 32, Some(provider)).to_hex(),
            SHAKE128_EMPTY_32
        );
        assert_eq!(
            hash_xof(b"", Variant::Shake256, 64, Some(provider)).to_hex(),
            SHAKE256_EMPTY_64
        );
        // without an explicit length, SHAKE squeezes twice its security level
        assert_eq!(hash(b"", Variant::Shake128, Some(provider)).to_hex(), SHAKE128_EMPTY_32);
        assert_eq!(hash(b"", Variant::Shake256, Some(provider)).to_hex(), SHAKE256_EMPTY_64);
    }
}

/// 1600 bits of 0xA3, the NIST example message longer than one block.
#[test]
fn test_multi_block_message() {
    let message = [0xA3u8; 200];
    let provider = Provider::Reference.permutation();
    assert_eq!(
        hash(&message, Variant::Sha3_256, Some(provider)).to_hex(),
        "79f38adec5c20307a98ef76e8324afbfd46cfd81b22e3973c65fa1bd9de31787"
    );
}

#[test]
fn test_fixed_lengths() {
    let provider = Provider::Reference.permutation();
    for len in [0, 1, 71, 72, 73, 135, 136, 137, 143, 144, 145, 168, 1000] {
        let message = vec![0x5Au8; len];
        for (variant, expected_len) in Variant::FIXED.into_iter().zip([28, 32, 48, 64]) {
            let digest = hash(&message, variant, Some(provider));
            assert_eq!(digest.len(), expected_len);
            assert_eq!(digest.bits(), expected_len * 8);
            assert_eq!(digest.variant(), variant);
        }
    }
}

#[test]
fn test_deterministic() {
    let provider = Provider::Keccak.permutation();
    for variant in Variant::ALL {
        let first = hash(b"determinism", variant, Some(provider));
        let second = hash(b"determinism", variant, Some(provider));
        assert_eq!(first, second);
    }
}

#[test]
fn test_xof_prefix() {
    let provider = Provider::Reference.permutation();
    for variant in [Variant::Shake128, Variant::Shake256] {
        let long = hash_xof(b"squeeze me", variant, 3 * 168 + 5, Some(provider));
        for n in [0, 1, 31, 136, 168, 169, 300, 3 * 168 + 5] {
            let short = hash_xof(b"squeeze me", variant, n, Some(provider));
            assert_eq!(short.as_bytes(), &long.as_bytes()[..n], "{variant}, {n} bytes");
        }
    }
}

#[test]
fn test_xof_length_ignored_for_fixed_variants() {
    let provider = Provider::Reference.permutation();
    let digest = hash_xof(b"abc", Variant::Sha3_256, 7, Some(provider));
    assert_eq!(digest, hash(b"abc", Variant::Sha3_256, Some(provider)));
}

#[test]
fn test_no_provider_is_empty() {
    for variant in Variant::ALL {
        let digest = hash(b"abc", variant, None);
        assert!(digest.is_empty());
        assert_eq!(digest, Digest::empty(variant));
        assert_eq!(digest.to_string(), "");
    }
    assert!(hash_xof(b"abc", Variant::Shake256, 1024, None).is_empty());
}

/// A broken permutation still produces a digest, just the wrong one.
#[test]
fn test_broken_provider() {
    let noop = |_: &mut [u64; LANES]| {};
    let digest = hash(b"abc", Variant::Sha3_256, Some(&noop));
    assert_eq!(digest.len(), 32);
    assert_ne!(digest, hash(b"abc", Variant::Sha3_256, Some(&KeccakF1600)));
    // with no mixing at all, the padded block itself comes out
    let mut expected = vec![0u8; 32];
    expected[..3].copy_from_slice(b"abc");
    expected[3] = 0x06;
    assert_eq!(digest.as_bytes(), expected);
}

#[test]
fn test_closure_provider() {
    let crate_f1600 = |state: &mut [u64; LANES]| keccak::f1600(state);
    assert_eq!(
        hash(b"abc", Variant::Sha3_224, Some(&crate_f1600)),
        hash(b"abc", Variant::Sha3_224, Some(&KeccakF1600))
    );
}

#[test]
fn test_rendering() {
    let digest = hash(b"", Variant::Sha3_224, Some(&KeccakF1600));
    let rendered = digest.to_string();
    assert_eq!(rendered.len(), 56);
    assert!(rendered
        .chars()
        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    assert_eq!(hex::decode(&rendered).unwrap(), digest.as_bytes());
}

#[test]
fn test_hash_many() {
    let messages: Vec<Vec<u8>> = (0..64u8).map(|i| vec![i; i as usize * 7]).collect();
    let provider = Provider::Reference.permutation();
    let batch = hash_many(&messages, Variant::Sha3_512, Some(provider));
    assert_eq!(batch.len(), messages.len());
    for (message, digest) in messages.iter().zip(&batch) {
        assert_eq!(digest, &hash(message, Variant::Sha3_512, Some(provider)));
    }
    assert!(hash_many(&messages, Variant::Sha3_512, None)
        .iter()
        .all(Digest::is_empty));
}

/// Concurrent computations over one shared provider each get their own answer.
#[test]
fn test_concurrent_hashes() {
    let provider = Provider::Reference.permutation();
    let jobs = [
        (b"".as_slice(), EMPTY_VECTORS[1].1),
        (b"abc".as_slice(), ABC_VECTORS[1].1),
    ];
    std::thread::scope(|s| {
        let handles = jobs.map(|(message, expected)| {
            s.spawn(move || {
                for _ in 0..100 {
                    let digest = hash(message, Variant::Sha3_256, Some(provider));
                    assert_eq!(digest.to_hex(), expected);
                }
            })
        });
        for handle in handles {
            handle.join().unwrap();
        }
    });
}
