//! Canonical pool identity.
//!
//! A pool is named by the address its factory deploys it to with CREATE2, so the
//! identity of a synthesized pool is exactly the address of the real pool with the
//! same tokens and fee, if one exists.

use alloy::primitives::{b256, keccak256, Address, B256};

use super::fee_tier::FeeTier;
use crate::models::ChainId;

/// keccak256 of the pool contract creation code
pub const POOL_INIT_CODE_HASH: B256 =
    b256!("0xe34f199b19b2b4f47f68442619d555527d244f78a3297ea89325f843f87b8b54");

/// Orders two token addresses as (token0, token1)
#[must_use]
pub fn sort_tokens(token_a: Address, token_b: Address) -> (Address, Address) {
    if token_a < token_b {
        (token_a, token_b)
    } else {
        (token_b, token_a)
    }
}

/// Computes the address of the pool for an unordered token pair and fee tier.
///
/// Pure: the same inputs always yield the same address, independent of the
/// order `token_a` and `token_b` are given in.
#[must_use]
pub fn compute_pool_address(
    chain: ChainId,
    token_a: Address,
    token_b: Address,
    fee: FeeTier,
) -> Address {
    let (token0, token1) = sort_tokens(token_a, token_b);

    // abi.encode(address, address, uint24): three left-padded 32 byte words
    let mut encoded = [0u8; 96];
    encoded[12..32].copy_from_slice(token0.as_slice());
    encoded[44..64].copy_from_slice(token1.as_slice());
    encoded[92..96].copy_from_slice(&fee.pips().to_be_bytes());

    let salt = keccak256(encoded);
    chain.pool_factory().create2(salt.0, POOL_INIT_CODE_HASH.0)
}
