use core::fmt;

use crate::hash::{sponge, Permutation};
use crate::variant::Variant;

/// The output of a hash computation, tagged with the variant that produced it.
///
/// Digests are compared byte by byte, and render as lowercase hexadecimal
/// with two digits per byte and no separators.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Digest {
    variant: Variant,
    bytes: Vec<u8>,
}

impl Digest {
    /// A digest with no bytes, as returned when no permutation is available.
    pub fn empty(variant: Variant) -> Self {
        Self {
            variant,
            bytes: Vec::new(),
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Length of the digest in bits.
    pub fn bits(&self) -> usize {
        self.bytes.len() * 8
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Hashes `message` with `variant`, using `provider` as the Keccak-f\[1600\] permutation.
///
/// Fixed-output variants produce their fixed length,
/// SHAKE variants produce [`Variant::default_output_len`] bytes.
/// Without a provider the result is an empty digest.
pub fn hash(message: &[u8], variant: Variant, provider: Option<&dyn Permutation>) -> Digest {
    squeeze_digest(message, variant, variant.default_output_len(), provider)
}

/// Hashes `message` with an extendable-output `variant`, squeezing `output_len` bytes.
///
/// Fixed-output variants ignore `output_len` and behave as [`hash`].
pub fn hash_xof(
    message: &[u8],
    variant: Variant,
    output_len: usize,
    provider: Option<&dyn Permutation>,
) -> Digest {
    match variant.output_len() {
        Some(fixed) => {
            if fixed != output_len {
                log::warn!(
                    "{variant} has a fixed output of {fixed} bytes, ignoring requested length {output_len}"
                );
            }
            squeeze_digest(message, variant, fixed, provider)
        }
        None => squeeze_digest(message, variant, output_len, provider),
    }
}

/// Hashes independent messages, each with its own sponge.
///
/// With the `parallel` feature the messages are spread over the rayon thread pool.
/// The result is in the same order as `messages`.
pub fn hash_many<M>(
    messages: &[M],
    variant: Variant,
    provider: Option<&dyn Permutation>,
) -> Vec<Digest>
where
    M: AsRef<[u8]> + Sync,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        messages
            .par_iter()
            .map(|m| hash(m.as_ref(), variant, provider))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        messages
            .iter()
            .map(|m| hash(m.as_ref(), variant, provider))
            .collect()
    }
}

fn squeeze_digest(
    message: &[u8],
    variant: Variant,
    output_len: usize,
    provider: Option<&dyn Permutation>,
) -> Digest {
    let Some(permutation) = provider else {
        log::debug!("no permutation provider, returning an empty {variant} digest");
        return Digest::empty(variant);
    };

    let params = variant.params();
    let mut bytes = vec![0u8; output_len];
    sponge::keccak(permutation, params.rate_bits, message, params.suffix, &mut bytes);
    Digest { variant, bytes }
}
