//! # Candidate Pools
//!
//! Synthetic pool universe used when live pool data is unavailable. Pools are
//! named by their canonical CREATE2 address so synthesized and indexed pools
//! share one identity space.

/// Canonical pool identity
pub mod address;
/// Output pool records
pub mod descriptor;
/// Supported fee tiers
pub mod fee_tier;
/// Pair enumeration and de-duplication
pub mod generator;
/// Test fixtures
#[cfg(test)]
pub(crate) mod test_helpers;

pub use address::compute_pool_address;
pub use descriptor::PoolDescriptor;
pub use fee_tier::FeeTier;
pub use generator::CandidatePoolGenerator;
