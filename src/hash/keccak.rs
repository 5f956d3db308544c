//! The Keccak-f\[1600\] permutation, written after the Keccak team's readable reference code.
//!
//! This is the reference provider: it favours being easy to audit against FIPS 202
//! over speed. [`super::provider::KeccakCrate`] is the accelerated alternative.
use super::{Permutation, LANES};

/// Number of rounds of Keccak-f\[1600\].
pub const ROUNDS: usize = 24;

/// Round constants, XORed into lane 0 by ι.
pub const RC: [u64; ROUNDS] = [
    0x0000_0000_0000_0001,
    0x0000_0000_0000_8082,
    0x8000_0000_0000_808a,
    0x8000_0000_8000_8000,
    0x0000_0000_0000_808b,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8009,
    0x0000_0000_0000_008a,
    0x0000_0000_0000_0088,
    0x0000_0000_8000_8009,
    0x0000_0000_8000_000a,
    0x0000_0000_8000_808b,
    0x8000_0000_0000_008b,
    0x8000_0000_0000_8089,
    0x8000_0000_0000_8003,
    0x8000_0000_0000_8002,
    0x8000_0000_0000_0080,
    0x0000_0000_0000_800a,
    0x8000_0000_8000_000a,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8080,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8008,
];

/// ρ offsets, in the order lanes are visited by [`PI`].
pub const RHO: [u32; 24] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

/// π walk: starting from lane 1, each lane moves to the position listed here.
pub const PI: [usize; 24] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

/// The reference Keccak-f\[1600\] provider.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeccakF1600;

impl Permutation for KeccakF1600 {
    fn permute(&self, state: &mut [u64; LANES]) {
        keccak_f1600(state);
    }
}

/// Apply the 24 rounds of Keccak-f\[1600\] to `state`.
pub fn keccak_f1600(state: &mut [u64; LANES]) {
    let mut column = [0u64; 5];

    for rc in RC {
        // θ
        for (x, parity) in column.iter_mut().enumerate() {
            *parity = state[x] ^ state[x + 5] ^ state[x + 10] ^ state[x + 15] ^ state[x + 20];
        }
        for x in 0..5 {
            let d = column[(x + 4) % 5] ^ column[(x + 1) % 5].rotate_left(1);
            for y in (0..LANES).step_by(5) {
                state[x + y] ^= d;
            }
        }

        // ρ and π
        let mut carried = state[1];
        for (&target, &offset) in PI.iter().zip(RHO.iter()) {
            let displaced = state[target];
            state[target] = carried.rotate_left(offset);
            carried = displaced;
        }

        // χ
        for row in state.chunks_exact_mut(5) {
            column.copy_from_slice(row);
            for x in 0..5 {
                row[x] = column[x] ^ (!column[(x + 1) % 5] & column[(x + 2) % 5]);
            }
        }

        // ι
        state[0] ^= rc;
    }
}
