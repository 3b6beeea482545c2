//! # Base Token Registry
//!
//! Read-only table from a chain to the ordered list of base tokens that candidate
//! pools are built around. Loaded once and shared; never mutated afterwards.

/// Built-in per-chain base token table
pub mod tokens;

use std::collections::HashMap;

use crate::error::PoolGenError;
use crate::models::{ChainId, Token};

/// Per-chain base token sets
#[derive(Debug, Clone)]
pub struct BaseTokenRegistry {
    /// Ordered base tokens keyed by chain
    bases: HashMap<ChainId, Vec<Token>>,
}

impl BaseTokenRegistry {
    /// Creates a registry from an explicit table
    ///
    /// # Arguments
    ///
    /// * `entries` - (chain, ordered base tokens) pairs; a later entry for the same chain replaces an earlier one
    pub fn new(entries: impl IntoIterator<Item = (ChainId, Vec<Token>)>) -> Self {
        Self {
            bases: entries.into_iter().collect(),
        }
    }

    /// Returns the base tokens of `chain` in table order.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedNetwork` if the chain has no entry.
    pub fn bases(&self, chain: ChainId) -> Result<&[Token], PoolGenError> {
        self.bases
            .get(&chain)
            .map(Vec::as_slice)
            .ok_or(PoolGenError::UnsupportedNetwork(chain.id()))
    }

    /// Whether `token` is one of the base tokens of its chain
    #[must_use]
    pub fn is_base(&self, token: &Token) -> bool {
        self.bases
            .get(&token.chain)
            .is_some_and(|bases| bases.contains(token))
    }

    /// Chains with a base set, sorted by chain id
    #[must_use]
    pub fn chains(&self) -> Vec<ChainId> {
        let mut chains: Vec<ChainId> = self.bases.keys().copied().collect();
        chains.sort_by_key(|chain| chain.id());
        chains
    }
}

impl Default for BaseTokenRegistry {
    /// The built-in table covering every [`ChainId`]
    fn default() -> Self {
        Self::new(
            ChainId::ALL
                .into_iter()
                .map(|chain| (chain, tokens::default_bases(chain))),
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::pools::test_helpers::token;

    #[test]
    fn test_default_covers_every_chain() {
        let registry = BaseTokenRegistry::default();
        assert_eq!(registry.chains(), ChainId::ALL.to_vec());
        for chain in ChainId::ALL {
            let bases = registry.bases(chain).unwrap();
            assert!(bases.len() >= 4, "{chain} has {} bases", bases.len());
            assert_eq!(bases[0].address, chain.wrapped_native());
            assert!(bases.iter().all(|base| base.chain == chain));
        }
    }

    #[test]
    fn test_mainnet_order() {
        let registry = BaseTokenRegistry::default();
        let symbols: Vec<&str> = registry
            .bases(ChainId::Mainnet)
            .unwrap()
            .iter()
            .filter_map(|t| t.symbol.as_deref())
            .collect();
        assert_eq!(symbols, ["WETH", "DAI", "USDC", "USDT", "WBTC"]);
    }

    #[test]
    fn test_unsupported_network() {
        let registry = BaseTokenRegistry::new([(ChainId::Mainnet, vec![token(ChainId::Mainnet, 1)])]);
        assert_eq!(
            registry.bases(ChainId::Optimism).err().unwrap(),
            PoolGenError::UnsupportedNetwork(10)
        );
    }

    #[test]
    fn test_is_base() {
        let registry = BaseTokenRegistry::default();
        let weth = &registry.bases(ChainId::Mainnet).unwrap()[0];
        assert!(registry.is_base(weth));
        assert!(!registry.is_base(&token(ChainId::Mainnet, 7)));
    }
}
