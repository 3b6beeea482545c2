/*!
 * # Candidate Pools - Fallback Pool Universe for Swap Routing
 *
 * When live pool data (an indexer) is unavailable, the router still needs a set of
 * pools to search. This crate synthesizes one: every base token pair of a chain,
 * plus targeted coverage of the requested swap pair, across every fee tier, each
 * named by its canonical pool address.
 *
 * ## Module Structure
 *
 * - `models`: Chains and tokens
 * - `registry`: Per-chain base token table
 * - `pools`: Fee tiers, pool identity, descriptors and the generator
 * - `fees`: Transfer fee lookup boundary (on-chain detector, cache)
 * - `config`: Environment configuration
 * - `error`: Generation errors
 * - `utils`: Logging
 */

/// Environment configuration
pub mod config;
/// Generation errors
pub mod error;
/// Transfer fee lookup
pub mod fees;
/// Chains and tokens
pub mod models;
/// Synthetic candidate pools
pub mod pools;
/// Per-chain base tokens
pub mod registry;
/// Utility functions and helpers
pub mod utils;
