//! Typed errors surfaced by the key-exchange core.

use thiserror::Error;

/// Everything that can go wrong at the public boundary of this crate.
///
/// No variant here is reachable from a data-dependent branch on secret
/// material; all of these fire on shape mismatches or upstream I/O failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KexError {
    /// A serialized public or private key was not exactly 4096 bytes.
    #[error("invalid public/private key size: expected 4096 bytes, got {actual}")]
    InvalidPublicKeySize {
        /// The length actually supplied.
        actual: usize,
    },

    /// Serialized reconciliation data (or a shared secret) was not exactly 128 bytes.
    #[error("invalid reconciliation data size: expected 128 bytes, got {actual}")]
    InvalidRecDataSize {
        /// The length actually supplied.
        actual: usize,
    },

    /// The randomness reader returned fewer bytes than requested.
    #[error("randomness source returned {actual} of {requested} requested bytes")]
    RandomnessFailure {
        /// Bytes actually produced before the source gave up.
        actual: usize,
        /// Bytes that were requested.
        requested: usize,
    },
}
