use core::fmt;
use core::str::FromStr;

use crate::errors::Error;
use crate::hash::WIDTH_BITS;

/// Domain-separation suffix of the SHA3-* functions: the bits `0, 1`, delimited.
pub const SHA3_SUFFIX: u8 = 0x06;
/// Domain-separation suffix of the SHAKE* functions: the bits `1, 1, 1, 1`, delimited.
pub const SHAKE_SUFFIX: u8 = 0x1F;

/// The six standard members of the Keccak family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
    Shake128,
    Shake256,
}

/// How a [`Variant`] drives the sponge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariantParams {
    /// Rate in bits. The capacity is the remainder of the 1600-bit state.
    pub rate_bits: usize,
    /// Delimited domain-separation suffix.
    pub suffix: u8,
    /// Output length in bytes, or `None` for extendable-output functions.
    pub output_len: Option<usize>,
}

impl Variant {
    /// All variants.
    pub const ALL: [Variant; 6] = [
        Variant::Sha3_224,
        Variant::Sha3_256,
        Variant::Sha3_384,
        Variant::Sha3_512,
        Variant::Shake128,
        Variant::Shake256,
    ];

    /// The fixed-output variants, shortest digest first.
    pub const FIXED: [Variant; 4] = [
        Variant::Sha3_224,
        Variant::Sha3_256,
        Variant::Sha3_384,
        Variant::Sha3_512,
    ];

    pub const fn params(self) -> VariantParams {
        match self {
            Variant::Sha3_224 => VariantParams::fixed(1152, 28),
            Variant::Sha3_256 => VariantParams::fixed(1088, 32),
            Variant::Sha3_384 => VariantParams::fixed(832, 48),
            Variant::Sha3_512 => VariantParams::fixed(576, 64),
            Variant::Shake128 => VariantParams::xof(1344),
            Variant::Shake256 => VariantParams::xof(1088),
        }
    }

    pub const fn rate_bits(self) -> usize {
        self.params().rate_bits
    }

    pub const fn capacity_bits(self) -> usize {
        WIDTH_BITS - self.rate_bits()
    }

    pub const fn suffix(self) -> u8 {
        self.params().suffix
    }

    /// Fixed output length in bytes; `None` for SHAKE.
    pub const fn output_len(self) -> Option<usize> {
        self.params().output_len
    }

    pub const fn is_xof(self) -> bool {
        self.output_len().is_none()
    }

    /// Output length used when no explicit length is requested.
    ///
    /// For SHAKE128 and SHAKE256 this is twice the security level, as in `sha3sum`:
    /// 32 and 64 bytes respectively.
    pub const fn default_output_len(self) -> usize {
        match self.output_len() {
            Some(len) => len,
            None => self.capacity_bits() / 8,
        }
    }

    /// Selects a fixed-output variant from its digest size in bits.
    pub fn from_bits(bits: usize) -> Result<Self, Error> {
        Self::FIXED
            .into_iter()
            .find(|v| v.output_len() == Some(bits / 8) && bits % 8 == 0)
            .ok_or(Error::UnsupportedDigestSize(bits))
    }

    pub const fn name(self) -> &'static str {
        match self {
            Variant::Sha3_224 => "SHA3-224",
            Variant::Sha3_256 => "SHA3-256",
            Variant::Sha3_384 => "SHA3-384",
            Variant::Sha3_512 => "SHA3-512",
            Variant::Shake128 => "SHAKE128",
            Variant::Shake256 => "SHAKE256",
        }
    }
}

impl VariantParams {
    const fn fixed(rate_bits: usize, output_len: usize) -> Self {
        Self {
            rate_bits,
            suffix: SHA3_SUFFIX,
            output_len: Some(output_len),
        }
    }

    const fn xof(rate_bits: usize) -> Self {
        Self {
            rate_bits,
            suffix: SHAKE_SUFFIX,
            output_len: None,
        }
    }

    pub const fn capacity_bits(&self) -> usize {
        WIDTH_BITS - self.rate_bits
    }
}

// rate + capacity = 1600, rates are whole bytes, and fixed digests fit in the capacity.
const _: () = {
    let mut i = 0;
    while i < Variant::ALL.len() {
        let params = Variant::ALL[i].params();
        assert!(params.rate_bits % 8 == 0);
        assert!(params.rate_bits > 0 && params.rate_bits < WIDTH_BITS);
        if let Some(len) = params.output_len {
            assert!(2 * len * 8 == params.capacity_bits());
        }
        i += 1;
    }
};

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = Error;

    /// Accepts the canonical names, case-insensitively,
    /// with `-`, `_` or nothing between the family and the size (`sha3-256`, `SHA3_256`, `shake128`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .map(|c| c.to_ascii_uppercase())
            .collect();
        Self::ALL
            .into_iter()
            .find(|v| v.name().replace('-', "") == normalized)
            .ok_or_else(|| Error::UnknownVariant(s.to_string()))
    }
}
