use std::collections::HashMap;

use alloy::primitives::Address;
use async_trait::async_trait;
use eyre::Result;
use itertools::Itertools;
use log::debug;
use tokio::sync::RwLock;

use super::{TokenFee, TokenFeeFetcher};

/// Remembers classified tokens and only forwards misses to the wrapped fetcher.
///
/// Tokens the inner fetcher could not classify are not cached and are asked for again.
pub struct CachingTokenFeeFetcher<F> {
    /// Fetcher consulted on cache misses
    inner: F,
    /// Fees seen so far
    cache: RwLock<HashMap<Address, TokenFee>>,
}

impl<F: TokenFeeFetcher> CachingTokenFeeFetcher<F> {
    /// Wraps `inner` with an empty cache
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            cache: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl<F: TokenFeeFetcher> TokenFeeFetcher for CachingTokenFeeFetcher<F> {
    async fn fetch_fees(&self, tokens: &[Address]) -> Result<HashMap<Address, TokenFee>> {
        let mut fees = HashMap::with_capacity(tokens.len());
        let mut misses = Vec::new();

        {
            let cache = self.cache.read().await;
            for token in tokens.iter().unique() {
                match cache.get(token) {
                    Some(fee) => {
                        fees.insert(*token, *fee);
                    }
                    None => misses.push(*token),
                }
            }
        }

        debug!(
            "fees::cache: {} hits, {} misses",
            fees.len(),
            misses.len()
        );

        if !misses.is_empty() {
            let fetched = self.inner.fetch_fees(&misses).await?;
            self.cache.write().await.extend(fetched.iter().map(|(k, v)| (*k, *v)));
            fees.extend(fetched);
        }

        Ok(fees)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Mutex;

    use alloy::primitives::address;
    use eyre::bail;

    use super::*;

    const TAXED: Address = address!("0x00000000000000000000000000000000000000aa");
    const PLAIN: Address = address!("0x00000000000000000000000000000000000000bb");
    const UNKNOWN: Address = address!("0x00000000000000000000000000000000000000cc");

    /// Classifies `TAXED` and `PLAIN`, records every request
    #[derive(Default)]
    struct MockFetcher {
        requests: Mutex<Vec<Vec<Address>>>,
        fail: bool,
    }

    #[async_trait]
    impl TokenFeeFetcher for MockFetcher {
        async fn fetch_fees(&self, tokens: &[Address]) -> Result<HashMap<Address, TokenFee>> {
            self.requests.lock().unwrap().push(tokens.to_vec());
            if self.fail {
                bail!("rpc unavailable");
            }
            Ok(tokens
                .iter()
                .filter_map(|token| {
                    if *token == TAXED {
                        Some((*token, TokenFee { buy_fee_bps: 300, sell_fee_bps: 300 }))
                    } else if *token == PLAIN {
                        Some((*token, TokenFee::default()))
                    } else {
                        None
                    }
                })
                .collect())
        }
    }

    #[tokio::test]
    async fn test_second_lookup_hits_cache() {
        let fetcher = CachingTokenFeeFetcher::new(MockFetcher::default());

        let first = fetcher.fetch_fees(&[TAXED, PLAIN]).await.unwrap();
        let second = fetcher.fetch_fees(&[PLAIN, TAXED]).await.unwrap();

        assert_eq!(first, second);
        assert!(second[&TAXED].has_fee());
        assert_eq!(fetcher.inner.requests.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_only_misses_are_forwarded() {
        let fetcher = CachingTokenFeeFetcher::new(MockFetcher::default());

        fetcher.fetch_fees(&[TAXED]).await.unwrap();
        let fees = fetcher.fetch_fees(&[TAXED, PLAIN, PLAIN]).await.unwrap();

        assert_eq!(fees.len(), 2);
        assert_eq!(
            *fetcher.inner.requests.lock().unwrap(),
            vec![vec![TAXED], vec![PLAIN]]
        );
    }

    #[tokio::test]
    async fn test_unclassified_tokens_are_retried() {
        let fetcher = CachingTokenFeeFetcher::new(MockFetcher::default());

        assert!(fetcher.fetch_fees(&[UNKNOWN]).await.unwrap().is_empty());
        assert!(fetcher.fetch_fees(&[UNKNOWN]).await.unwrap().is_empty());
        assert_eq!(fetcher.inner.requests.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_inner_error_propagates() {
        let fetcher = CachingTokenFeeFetcher::new(MockFetcher {
            fail: true,
            ..MockFetcher::default()
        });

        let result = fetcher.fetch_fees(&[TAXED]).await;
        assert_eq!(result.err().unwrap().to_string(), "rpc unavailable");
    }
}
