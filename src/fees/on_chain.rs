use std::collections::HashMap;

use alloy::primitives::{address, Address, U256};
use alloy::providers::Provider;
use alloy::sol;
use async_trait::async_trait;
use eyre::Result;
use futures::future::join_all;
use itertools::Itertools;
use log::{debug, warn};

use super::{TokenFee, TokenFeeFetcher};
use crate::models::ChainId;

/// Fee detector deployed on mainnet
pub const DEFAULT_FEE_DETECTOR: Address = address!("0x19C97dc2a25845C7f9d1d519c8C2d4809c58b43f");
/// Amount of the token the detector flash-borrows to measure fees
pub const DEFAULT_AMOUNT_TO_BORROW: u64 = 100_000;
/// Detector calls issued concurrently
pub const DEFAULT_BATCH_SIZE: usize = 20;

// Detector that borrows a token from its pool against the base token and
// measures what arrives on buy and on sell.
sol! {
    #[sol(rpc)]
    contract TokenFeeDetector {
        struct TokenFees {
            uint256 buyFeeBps;
            uint256 sellFeeBps;
        }

        function validate(address token, address baseToken, uint256 amountToBorrow)
            external
            returns (TokenFees memory fees);
    }
}

impl From<TokenFeeDetector::TokenFees> for TokenFee {
    fn from(fees: TokenFeeDetector::TokenFees) -> Self {
        Self {
            buy_fee_bps: u64::try_from(fees.buyFeeBps).unwrap_or(u64::MAX),
            sell_fee_bps: u64::try_from(fees.sellFeeBps).unwrap_or(u64::MAX),
        }
    }
}

/// Looks up token fees by calling the fee detector contract
pub struct OnChainTokenFeeFetcher<P> {
    /// Chain the tokens live on
    chain: ChainId,
    /// RPC provider for `chain`
    provider: P,
    /// Detector contract address
    detector: Address,
    /// Amount borrowed per validation
    amount_to_borrow: U256,
    /// Concurrent calls per batch
    batch_size: usize,
}

impl<P: Provider + Clone> OnChainTokenFeeFetcher<P> {
    /// Creates a fetcher with the default detector, borrow amount and batch size
    #[must_use]
    pub fn new(chain: ChainId, provider: P) -> Self {
        Self {
            chain,
            provider,
            detector: DEFAULT_FEE_DETECTOR,
            amount_to_borrow: U256::from(DEFAULT_AMOUNT_TO_BORROW),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Uses a different detector contract
    #[must_use]
    pub const fn with_detector(mut self, detector: Address) -> Self {
        self.detector = detector;
        self
    }

    /// Borrows `amount` of each token during validation
    #[must_use]
    pub fn with_amount_to_borrow(mut self, amount: u64) -> Self {
        self.amount_to_borrow = U256::from(amount);
        self
    }

    /// Issues at most `batch_size` detector calls at once
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }
}

/// Tokens worth asking the detector about: de-duplicated, without the wrapped native asset
fn lookup_candidates(chain: ChainId, tokens: &[Address]) -> Vec<Address> {
    let base = chain.wrapped_native();
    tokens
        .iter()
        .copied()
        .filter(|token| *token != base)
        .unique()
        .collect()
}

#[async_trait]
impl<P: Provider + Clone> TokenFeeFetcher for OnChainTokenFeeFetcher<P> {
    async fn fetch_fees(&self, tokens: &[Address]) -> Result<HashMap<Address, TokenFee>> {
        let base = self.chain.wrapped_native();
        let candidates = lookup_candidates(self.chain, tokens);
        let detector = TokenFeeDetector::new(self.detector, self.provider.clone());

        let mut fees = HashMap::with_capacity(candidates.len());

        for batch in candidates.chunks(self.batch_size) {
            let calls = batch.iter().map(|token| {
                let detector = &detector;
                async move {
                    let result = detector
                        .validate(*token, base, self.amount_to_borrow)
                        .call()
                        .await;
                    (*token, result)
                }
            });

            for (token, result) in join_all(calls).await {
                match result {
                    Ok(validated) => {
                        fees.insert(token, TokenFee::from(validated.fees));
                    }
                    Err(e) => {
                        warn!("fees::fetch_fees: Could not classify {token} on {}: {e}", self.chain);
                    }
                }
            }
        }

        debug!(
            "fees::fetch_fees: Classified {} of {} tokens on {}",
            fees.len(),
            candidates.len(),
            self.chain
        );

        Ok(fees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::tokens::USDC_MAINNET;

    #[test]
    fn test_lookup_candidates_skips_wrapped_native() {
        let weth = ChainId::Mainnet.wrapped_native();
        let bitboy = address!("0x4a500ed6add5994569e66426588168705fcc9767");
        assert_eq!(
            lookup_candidates(ChainId::Mainnet, &[weth, bitboy, USDC_MAINNET, bitboy]),
            vec![bitboy, USDC_MAINNET]
        );
    }

    #[test]
    fn test_token_fee_from_detector() {
        let fee = TokenFee::from(TokenFeeDetector::TokenFees {
            buyFeeBps: U256::from(213),
            sellFeeBps: U256::from(800),
        });
        assert_eq!(fee, TokenFee { buy_fee_bps: 213, sell_fee_bps: 800 });
        assert!(fee.has_fee());
        assert!(!TokenFee::default().has_fee());
    }
}
