/// Hashing itself never fails: the permutation is total and the sponge has no failure states.
/// The errors of this crate are all *configuration* errors, detected before any hashing begins,
/// plus the I/O faults of the command-line front end:
///
/// - Unknown provider ([`Error::UnknownProvider`]):
///   the requested permutation provider is not in the [`crate::Provider`] registry.
///
/// - Unknown variant ([`Error::UnknownVariant`], [`Error::UnsupportedDigestSize`]):
///   an algorithm name, or a digest size in bits, that does not select one of the standard variants.
///
/// - Missing input ([`Error::MissingInput`]):
///   the command line names no file to hash.
///
/// - I/O ([`Error::Io`]):
///   an input that cannot be opened or read, or an output that cannot be created or written.
///
/// An absent provider is **not** an error: the façade returns an empty digest instead.
///
/// A [`core::result::Result`] wrapper called [`Result`] (having error fixed to [`Error`]) is also provided.
use std::{error, fmt::Display, io};

/// An error raised while configuring or running a hash job.
#[derive(Debug)]
pub enum Error {
    /// No permutation provider is registered under this name.
    UnknownProvider(String),
    /// No variant is known under this name.
    UnknownVariant(String),
    /// Digest sizes are restricted to 224, 256, 384 and 512 bits.
    UnsupportedDigestSize(usize),
    /// Nothing to hash: no input was given.
    MissingInput,
    /// An I/O operation failed.
    Io {
        /// What was being done, and on which path.
        context: String,
        /// The underlying failure.
        source: io::Error,
    },
}

/// The result type of configuration and I/O operations.
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Wraps an [`io::Error`] with a description of the failed operation.
    pub(crate) fn io(context: impl Into<String>) -> impl FnOnce(io::Error) -> Self {
        let context = context.into();
        move |source| Self::Io { context, source }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownProvider(name) => write!(
                f,
                "unknown permutation provider {name:?} (expected one of: reference, keccak)"
            ),
            Self::UnknownVariant(name) => write!(f, "unknown hash variant {name:?}"),
            Self::UnsupportedDigestSize(bits) => write!(
                f,
                "unsupported digest size {bits} (expected one of: 224, 256, 384, 512)"
            ),
            Self::MissingInput => write!(f, "input file not specified, use -i"),
            Self::Io { context, source } => write!(f, "{context}: {source}"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
