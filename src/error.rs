//! Errors raised while building the candidate pool universe.

use thiserror::Error;

/// Failure modes of candidate pool generation.
///
/// Generation either completes for a network or fails with one of these;
/// nothing here is transient, so callers should not retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolGenError {
    /// The chain id has no base token set configured
    #[error("unsupported network: chain id {0}")]
    UnsupportedNetwork(u64),
    /// A token reference is empty, unparseable, or does not belong to the requested chain
    #[error("invalid token: {0}")]
    InvalidToken(String),
    /// Fee text does not name one of the supported fee tiers
    #[error("invalid fee tier: {0}")]
    InvalidFeeTier(String),
}
