use alloy::primitives::Address;
use serde::{Serialize, Serializer};

use super::address::compute_pool_address;
use super::fee_tier::FeeTier;
use crate::models::{ChainId, Token};

/// Liquidity reported for synthesized pools. Not real data.
pub const PLACEHOLDER_LIQUIDITY: &str = "100";
/// TVL (in ETH and in USD) reported for synthesized pools. Not real data.
pub const PLACEHOLDER_TVL: f64 = 100.0;

/// Serializes an address in EIP-55 checksummed form
fn checksummed<S: Serializer>(address: &Address, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&address.to_checksum(None))
}

/// Token reference inside a pool descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PoolToken {
    /// Token address
    #[serde(serialize_with = "checksummed")]
    pub id: Address,
}

/// A pool as handed to the router.
///
/// Serializes to the same shape as an indexed pool:
/// `{ id, feeTier, liquidity, token0: { id }, token1: { id }, tvlETH, tvlUSD }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoolDescriptor {
    /// Canonical pool identity
    #[serde(serialize_with = "checksummed")]
    pub id: Address,
    /// Fee tier, serialized as its canonical text
    #[serde(rename = "feeTier")]
    pub fee_tier: FeeTier,
    /// Pool liquidity
    pub liquidity: String,
    /// The token that sorts first
    pub token0: PoolToken,
    /// The token that sorts second
    pub token1: PoolToken,
    /// Total value locked, in ETH
    #[serde(rename = "tvlETH")]
    pub tvl_eth: f64,
    /// Total value locked, in USD
    #[serde(rename = "tvlUSD")]
    pub tvl_usd: f64,
}

impl PoolDescriptor {
    /// Builds the descriptor of a synthesized pool for two tokens in either order.
    ///
    /// Liquidity and TVL carry the placeholder sentinels.
    #[must_use]
    pub fn synthetic(chain: ChainId, token_a: &Token, token_b: &Token, fee_tier: FeeTier) -> Self {
        let (token0, token1) = if token_a.sorts_before(token_b) {
            (token_a, token_b)
        } else {
            (token_b, token_a)
        };

        Self {
            id: compute_pool_address(chain, token0.address, token1.address, fee_tier),
            fee_tier,
            liquidity: PLACEHOLDER_LIQUIDITY.to_string(),
            token0: PoolToken { id: token0.address },
            token1: PoolToken { id: token1.address },
            tvl_eth: PLACEHOLDER_TVL,
            tvl_usd: PLACEHOLDER_TVL,
        }
    }

    /// Whether this descriptor carries placeholder liquidity rather than indexed data
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_synthetic(&self) -> bool {
        self.liquidity == PLACEHOLDER_LIQUIDITY
            && self.tvl_eth == PLACEHOLDER_TVL
            && self.tvl_usd == PLACEHOLDER_TVL
    }
}
