//! # Token Fee Lookup
//!
//! Classifies tokens that charge a fee on transfer so the router can exclude or
//! special-case them. I/O bound and independent of candidate pool generation.

/// In-memory cache in front of another fetcher
pub mod cache;
/// Fee detection through an on-chain detector contract
pub mod on_chain;

use std::collections::HashMap;

use alloy::primitives::Address;
use async_trait::async_trait;
use eyre::Result;
use serde::Serialize;

pub use cache::CachingTokenFeeFetcher;
pub use on_chain::OnChainTokenFeeFetcher;

/// Transfer fees a token charges when bought from and sold into a pool
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TokenFee {
    /// Fee on buys, in basis points
    #[serde(rename = "buyFeeBps")]
    pub buy_fee_bps: u64,
    /// Fee on sells, in basis points
    #[serde(rename = "sellFeeBps")]
    pub sell_fee_bps: u64,
}

impl TokenFee {
    /// Whether the token takes any fee on transfer
    #[must_use]
    pub const fn has_fee(&self) -> bool {
        self.buy_fee_bps > 0 || self.sell_fee_bps > 0
    }
}

/// Batch fee lookup.
///
/// Implementations may omit tokens they cannot classify. The chain's wrapped
/// native asset is never reported with a fee.
#[async_trait]
pub trait TokenFeeFetcher: Send + Sync {
    /// Fetches fees for `tokens`
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup cannot run at all; per-token failures are omitted instead.
    async fn fetch_fees(&self, tokens: &[Address]) -> Result<HashMap<Address, TokenFee>>;
}
