use alloy::primitives::{address, Address};
use derive_more::Display;

use crate::error::PoolGenError;

/// Factory that deploys concentrated-liquidity pools. Same address on every supported chain.
const POOL_FACTORY: Address = address!("0x1F98431c8aD98523631AE4a59f267346ea31F984");

/// A network the router can operate against
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChainId {
    /// Ethereum mainnet
    #[display("mainnet")]
    Mainnet,
    /// Ropsten testnet
    #[display("ropsten")]
    Ropsten,
    /// Rinkeby testnet
    #[display("rinkeby")]
    Rinkeby,
    /// Görli testnet
    #[display("goerli")]
    Goerli,
    /// Kovan testnet
    #[display("kovan")]
    Kovan,
    /// Optimism
    #[display("optimism")]
    Optimism,
    /// Optimism on Kovan
    #[display("optimistic-kovan")]
    OptimisticKovan,
    /// Arbitrum One
    #[display("arbitrum-one")]
    ArbitrumOne,
    /// Arbitrum on Rinkeby
    #[display("arbitrum-rinkeby")]
    ArbitrumRinkeby,
}

impl ChainId {
    /// Every supported chain, in chain id order
    pub const ALL: [Self; 9] = [
        Self::Mainnet,
        Self::Ropsten,
        Self::Rinkeby,
        Self::Goerli,
        Self::Optimism,
        Self::Kovan,
        Self::OptimisticKovan,
        Self::ArbitrumOne,
        Self::ArbitrumRinkeby,
    ];

    /// Numeric EIP-155 chain id
    #[must_use]
    pub const fn id(self) -> u64 {
        match self {
            Self::Mainnet => 1,
            Self::Ropsten => 3,
            Self::Rinkeby => 4,
            Self::Goerli => 5,
            Self::Optimism => 10,
            Self::Kovan => 42,
            Self::OptimisticKovan => 69,
            Self::ArbitrumOne => 42_161,
            Self::ArbitrumRinkeby => 421_611,
        }
    }

    /// Wrapped native asset (WETH) on this chain.
    ///
    /// Never fee-bearing, so fee lookups skip it.
    #[must_use]
    pub const fn wrapped_native(self) -> Address {
        match self {
            Self::Mainnet => address!("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
            Self::Ropsten | Self::Rinkeby => {
                address!("0xc778417E063141139Fce010982780140Aa0cD5Ab")
            }
            Self::Goerli => address!("0xB4FBF271143F4FBf7B91A5ded31805e42b2208d6"),
            Self::Kovan => address!("0xd0A1E359811322d97991E03f863a0C30C2cF029C"),
            Self::Optimism | Self::OptimisticKovan => {
                address!("0x4200000000000000000000000000000000000006")
            }
            Self::ArbitrumOne => address!("0x82aF49447D8a07e3bd95BD0d56f35241523fBab1"),
            Self::ArbitrumRinkeby => address!("0xB47e6A5f8b33b3F17603C83a0535A9dcD7E32681"),
        }
    }

    /// Factory whose CREATE2 deployments define canonical pool addresses
    #[must_use]
    pub const fn pool_factory(self) -> Address {
        POOL_FACTORY
    }
}

impl TryFrom<u64> for ChainId {
    type Error = PoolGenError;

    fn try_from(id: u64) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|chain| chain.id() == id)
            .ok_or(PoolGenError::UnsupportedNetwork(id))
    }
}
