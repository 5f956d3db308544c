//!
//! SHA-3 and SHAKE digests over a pluggable Keccak-f\[1600\] permutation.
//!
//! The crate is split in three layers:
//!
//! - the permutation core ([`hash::keccak`]), a pure function over a 1600-bit state;
//! - the sponge engine ([`hash::sponge`]), which absorbs a whole message, pads it
//!   with a domain-separation suffix and squeezes as many bytes as requested;
//! - the digest façade ([`hash()`], [`hash_xof`], [`Digest`], [`Variant`]), which maps
//!   each of the six standard variants to its rate, suffix and output length.
//!
//! The permutation is never hard-wired into the sponge.
//! Every call receives a [`Permutation`] provider, so that a reference implementation,
//! an accelerated one, or a deliberately broken one used in tests can all be plugged in.
//!
//! ```
//! use keccak_sponge::{hash, Provider, Variant};
//!
//! let provider = Provider::Reference.permutation();
//! let digest = hash(b"abc", Variant::Sha3_256, Some(provider));
//! assert_eq!(
//!     digest.to_string(),
//!     "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"
//! );
//! ```
//!
//! Extendable-output variants squeeze any number of bytes,
//! and shorter outputs are always a prefix of longer ones:
//!
//! ```
//! use keccak_sponge::{hash_xof, Provider, Variant};
//!
//! let provider = Provider::Keccak.permutation();
//! let short = hash_xof(b"", Variant::Shake128, 16, Some(provider));
//! let long = hash_xof(b"", Variant::Shake128, 1000, Some(provider));
//! assert_eq!(short.as_bytes(), &long.as_bytes()[..16]);
//! ```
//!
//! Without a provider, the façade returns an empty digest instead of failing:
//!
//! ```
//! use keccak_sponge::{hash, Variant};
//!
//! let digest = hash(b"abc", Variant::Sha3_512, None);
//! assert!(digest.is_empty());
//! assert_eq!(digest.variant(), Variant::Sha3_512);
//! ```

#[cfg(target_endian = "big")]
compile_error!(
    r#"
This crate doesn't support big-endian targets.
"#
);

/// Command-line front end.
pub mod cli;
/// Digest values and the hashing façade.
mod digest;
/// Configuration and I/O errors.
mod errors;
/// Permutation providers and the sponge construction.
pub mod hash;
/// SHA-3 and SHAKE parameter sets.
mod variant;
/// Unit-tests.
#[cfg(test)]
mod tests;

pub use digest::{hash, hash_many, hash_xof, Digest};
pub use errors::{Error, Result};
pub use hash::{provider::Provider, KeccakState, Permutation};
pub use variant::{Variant, VariantParams, SHAKE_SUFFIX, SHA3_SUFFIX};
