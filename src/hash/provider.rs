//! Named permutation providers.
//!
//! A provider is picked by name once, at configuration time,
//! and then handed to the sponge as a [`Permutation`] trait object.
use core::fmt;
use core::str::FromStr;

use super::{KeccakF1600, Permutation, LANES};
use crate::errors::Error;

/// A provider based on the permutation [`keccak::f1600`].
///
/// With the `asm` feature the `keccak` crate switches to its assembly/SIMD backends where available.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeccakCrate;

impl Permutation for KeccakCrate {
    fn permute(&self, state: &mut [u64; LANES]) {
        keccak::f1600(state);
    }
}

/// The registry of permutation providers shipped with this crate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Provider {
    /// The readable implementation in [`super::keccak`].
    #[default]
    Reference,
    /// The `keccak` crate.
    Keccak,
}

impl Provider {
    /// All providers, in registry order.
    pub const ALL: [Provider; 2] = [Provider::Reference, Provider::Keccak];

    /// The name under which the provider is registered.
    pub const fn name(self) -> &'static str {
        match self {
            Provider::Reference => "reference",
            Provider::Keccak => "keccak",
        }
    }

    /// The permutation implementing this provider.
    pub fn permutation(self) -> &'static dyn Permutation {
        match self {
            Provider::Reference => &KeccakF1600,
            Provider::Keccak => &KeccakCrate,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Provider {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        let provider = Provider::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownProvider(s.to_string()))?;
        log::debug!("resolved permutation provider {provider}");
        Ok(provider)
    }
}
