use thiserror::Error;

/// Common result type used across this crate.
pub type Result<T, E = MontError> = core::result::Result<T, E>;

/// Precondition violations of the Montgomery primitives.
///
/// Both kinds are detected at call entry, before any arithmetic runs; there
/// are no partial results.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum MontError {
    #[error("modulus must be odd")]
    InvalidModulus,
    #[error("working precision of {provided} bits cannot hold a {required}-bit operand")]
    InsufficientPrecision { required: u64, provided: u64 },
}

pub type Error = MontError;
