//! The Keccak sponge construction.
//!
//! A message is absorbed in full, padded with a delimited domain-separation suffix
//! and the final `0x80` bit of multi-rate padding, and then squeezed.
//! This is the construction of FIPS 202 restricted to byte-aligned messages.
use super::{KeccakState, Permutation, WIDTH_BITS};

/// A single-use sponge over a borrowed permutation.
///
/// The sponge owns its state, so two sponges sharing the same provider never see each other's data.
pub(crate) struct Sponge<'p, P: Permutation + ?Sized> {
    permutation: &'p P,
    state: KeccakState,
    /// The rate, in bytes.
    rate: usize,
    /// Offset of the first byte of the current block not yet absorbed.
    absorb_pos: usize,
}

impl<'p, P: Permutation + ?Sized> Sponge<'p, P> {
    /// Creates a sponge with a zeroed state and a rate of `rate_bits` bits.
    ///
    /// # Panics
    ///
    /// If `rate_bits` is zero, not a multiple of 8, or not below the 1600-bit width.
    pub(crate) fn new(permutation: &'p P, rate_bits: usize) -> Self {
        assert!(
            0 < rate_bits && rate_bits < WIDTH_BITS && rate_bits % 8 == 0,
            "rate must be a positive multiple of 8 below {WIDTH_BITS} bits, got {rate_bits}"
        );
        Self {
            permutation,
            state: KeccakState::default(),
            rate: rate_bits / 8,
            absorb_pos: 0,
        }
    }

    fn permute(&mut self) {
        self.state.permute(self.permutation);
    }

    /// XORs the message into the state, one rate-sized block at a time.
    ///
    /// Full blocks are followed by a permutation; the last block may be partial.
    pub(crate) fn absorb(&mut self, mut input: &[u8]) -> &mut Self {
        while !input.is_empty() {
            let chunk_len = usize::min(input.len(), self.rate - self.absorb_pos);
            let (chunk, rest) = input.split_at(chunk_len);

            self.state.as_mut()[self.absorb_pos..self.absorb_pos + chunk_len]
                .iter_mut()
                .zip(chunk)
                .for_each(|(s, b)| *s ^= b);
            self.absorb_pos += chunk_len;
            if self.absorb_pos == self.rate {
                self.permute();
                self.absorb_pos = 0;
            }
            input = rest;
        }
        self
    }

    /// Adds the delimited `suffix` and the final padding bit, then switches to squeezing.
    pub(crate) fn pad(&mut self, suffix: u8) -> &mut Self {
        self.state.as_mut()[self.absorb_pos] ^= suffix;
        // the suffix's delimiter bit already fills the last byte of the block:
        // the final padding bit needs a block of its own.
        if suffix & 0x80 != 0 && self.absorb_pos == self.rate - 1 {
            self.permute();
        }
        self.state.as_mut()[self.rate - 1] ^= 0x80;
        self.permute();
        self.absorb_pos = 0;
        self
    }

    /// Fills `output` with the leading rate bytes of the state,
    /// permuting between blocks as long as more output is needed.
    pub(crate) fn squeeze(&mut self, output: &mut [u8]) -> &mut Self {
        for (i, block) in output.chunks_mut(self.rate).enumerate() {
            if i > 0 {
                self.permute();
            }
            block.copy_from_slice(&self.state.as_ref()[..block.len()]);
        }
        self
    }
}

/// Computes the Keccak\[r, c\] sponge function over `input`,
/// with `r = rate_bits` and `c = 1600 - rate_bits`.
///
/// `suffix` holds the bits appended to the message before padding, as in domain separation:
/// up to 7 bits in the least significant positions, delimited by a 1 bit right after them.
/// Some examples:
/// - no bits appended: `0x01`;
/// - the 2-bit sequence `0, 1` (SHA3-*): `0x06`;
/// - the 4-bit sequence `1, 1, 1, 1` (SHAKE*): `0x1F`.
///
/// The suffix is not validated. `output` is filled completely.
///
/// # Panics
///
/// If `rate_bits` is not a whole number of bytes strictly between 0 and 1600.
pub fn keccak<P: Permutation + ?Sized>(
    permutation: &P,
    rate_bits: usize,
    input: &[u8],
    suffix: u8,
    output: &mut [u8],
) {
    Sponge::new(permutation, rate_bits)
        .absorb(input)
        .pad(suffix)
        .squeeze(output);
}
