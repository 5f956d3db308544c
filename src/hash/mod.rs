/// The Keccak-f\[1600\] permutation.
pub mod keccak;
/// Named permutation providers.
pub mod provider;
pub mod sponge;

pub use keccak::KeccakF1600;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Width of the Keccak-f\[1600\] state, in bits.
pub const WIDTH_BITS: usize = 1600;
/// Width of the Keccak-f\[1600\] state, in bytes.
pub const WIDTH: usize = WIDTH_BITS / 8;
/// Number of 64-bit lanes in the state.
pub const LANES: usize = 25;

/// A Permutation is the capability the sponge needs from the outside world:
/// replace a 1600-bit state with its image under Keccak-f\[1600\].
///
/// Lanes are little-endian 64-bit words, lane `(x, y)` lives at index `x + 5 * y`.
/// Implementations must be stateless and touch nothing but the state they are given,
/// since the same provider is shared by concurrent, independent hash computations.
///
/// Any `Fn(&mut [u64; 25]) + Sync` is a permutation,
/// so [`keccak::f1600`](::keccak::f1600) can be plugged in directly.
///
/// **HAZARD**: a wrong permutation does not fail, it silently produces wrong digests.
/// Consider using the providers already in [`provider::Provider`].
pub trait Permutation: Sync {
    /// Permute the state in place.
    fn permute(&self, state: &mut [u64; LANES]);
}

impl<F> Permutation for F
where
    F: Fn(&mut [u64; LANES]) + Sync,
{
    fn permute(&self, state: &mut [u64; LANES]) {
        self(state)
    }
}

/// The 200-byte working state of the sponge.
///
/// Stored as 25 lanes so that handing it to a [`Permutation`] needs no copy and no alignment fix-up.
/// The byte view (for absorbing and squeezing) is the little-endian serialization of the lanes,
/// which on the little-endian targets we support is just the memory layout.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct KeccakState([u64; LANES]);

impl KeccakState {
    /// The state as 25 lanes.
    pub fn lanes(&self) -> &[u64; LANES] {
        &self.0
    }

    /// Apply a permutation to the state.
    pub fn permute<P: Permutation + ?Sized>(&mut self, permutation: &P) {
        permutation.permute(&mut self.0);
    }
}

impl From<[u64; LANES]> for KeccakState {
    fn from(lanes: [u64; LANES]) -> Self {
        Self(lanes)
    }
}

impl AsRef<[u8]> for KeccakState {
    fn as_ref(&self) -> &[u8] {
        bytemuck::cast_slice(&self.0)
    }
}

impl AsMut<[u8]> for KeccakState {
    fn as_mut(&mut self) -> &mut [u8] {
        bytemuck::cast_slice_mut(&mut self.0)
    }
}

impl core::fmt::Debug for KeccakState {
    // lanes are not printed
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeccakState").finish_non_exhaustive()
    }
}
