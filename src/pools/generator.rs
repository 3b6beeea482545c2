//! Candidate pool generation.
//!
//! Synthesizes the pool universe for a chain from its base tokens, plus targeted
//! coverage for a requested (in, out) pair, so routing can run without an indexer.

use std::sync::Arc;

use alloy::primitives::Address;
use itertools::{iproduct, Itertools};
use log::{debug, info, warn};

use super::descriptor::PoolDescriptor;
use super::fee_tier::FeeTier;
use crate::error::PoolGenError;
use crate::models::{ChainId, Token};
use crate::registry::BaseTokenRegistry;

/// Builds de-duplicated candidate pools from a base token registry
#[derive(Debug, Clone)]
pub struct CandidatePoolGenerator {
    /// Read-only base token table shared with other generators
    registry: Arc<BaseTokenRegistry>,
}

impl CandidatePoolGenerator {
    /// Creates a generator over `registry`
    #[must_use]
    pub const fn new(registry: Arc<BaseTokenRegistry>) -> Self {
        Self { registry }
    }

    /// The registry this generator reads base tokens from
    #[must_use]
    pub fn registry(&self) -> &BaseTokenRegistry {
        &self.registry
    }

    /// Generates candidate pools for `chain`.
    ///
    /// Pairs are visited as the full `bases × bases` product first, then, when
    /// `requested` is given, `(in, out)`, every `(in, base)` and every
    /// `(out, base)`. Self-pairs are dropped, each surviving pair is expanded
    /// across [`FeeTier::ALL`], and the first row to produce a pool id wins.
    ///
    /// # Arguments
    ///
    /// * `chain` - The chain to generate pools for
    /// * `requested` - The (input, output) tokens of the swap being routed, if any
    ///
    /// # Returns
    ///
    /// Pool descriptors in a deterministic order for a given input
    ///
    /// # Errors
    ///
    /// * `UnsupportedNetwork` if the registry has no base set for `chain`
    /// * `InvalidToken` if a requested token has the zero address or lives on another chain
    pub fn generate(
        &self,
        chain: ChainId,
        requested: Option<(&Token, &Token)>,
    ) -> Result<Vec<PoolDescriptor>, PoolGenError> {
        info!("pools::generate: Generating static candidate pools on {chain}");

        let bases = self.registry.bases(chain)?;

        let mut pairs: Vec<(&Token, &Token)> = iproduct!(bases, bases).collect();

        if let Some((token_in, token_out)) = requested {
            validate_token(chain, token_in)?;
            validate_token(chain, token_out)?;

            if self.registry.is_base(token_in) && self.registry.is_base(token_out) {
                debug!("pools::generate: Requested pair {token_in}/{token_out} is covered by bases");
            }

            pairs.push((token_in, token_out));
            pairs.extend(bases.iter().map(|base| (token_in, base)));
            pairs.extend(bases.iter().map(|base| (token_out, base)));
        }

        let pools: Vec<PoolDescriptor> = pairs
            .into_iter()
            .filter(|(token_a, token_b)| !is_self_pair(token_a, token_b))
            .flat_map(|(token_a, token_b)| {
                FeeTier::ALL
                    .into_iter()
                    .map(move |fee| PoolDescriptor::synthetic(chain, token_a, token_b, fee))
            })
            .unique_by(|pool| pool.id)
            .collect();

        debug!(
            "pools::generate: {} candidate pools from {} bases on {chain}",
            pools.len(),
            bases.len()
        );

        Ok(pools)
    }
}

/// Rejects tokens that cannot name a pool on `chain`
fn validate_token(chain: ChainId, token: &Token) -> Result<(), PoolGenError> {
    if token.address == Address::ZERO {
        return Err(PoolGenError::InvalidToken(format!(
            "zero address given for {chain}"
        )));
    }

    if token.chain != chain {
        return Err(PoolGenError::InvalidToken(format!(
            "{token} is on {}, not {chain}",
            token.chain
        )));
    }

    Ok(())
}

/// Whether both sides of a pair are the same token.
///
/// Checks the bare address and token equality separately; a pair matching either
/// is a self-pair. Disagreement between the two is logged as a data quality issue.
fn is_self_pair(token_a: &Token, token_b: &Token) -> bool {
    let same_address = token_a.address == token_b.address;
    let same_token = token_a == token_b;

    if same_address != same_token {
        warn!(
            "pools::is_self_pair: Address and token equality disagree for {token_a} ({}) and {token_b} ({})",
            token_a.chain, token_b.chain
        );
    }

    same_address || same_token
}
