//! Built-in base token table.
//!
//! Wrapped native first, then the stablecoins and wrapped BTC that are assumed to
//! have deep liquidity against most tokens on each chain.
#![allow(missing_docs)]

use alloy::primitives::{address, Address};

use crate::models::{ChainId, Token};

pub const DAI_MAINNET: Address = address!("0x6B175474E89094C44Da98b954EedeAC495271d0F");
pub const USDC_MAINNET: Address = address!("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
pub const USDT_MAINNET: Address = address!("0xdAC17F958D2ee523a2206206994597C13D831ec7");
pub const WBTC_MAINNET: Address = address!("0x2260FAC5E5542a773Aa44fBCfeDf7C193bc2C599");

pub const DAI_ROPSTEN: Address = address!("0xaD6D458402F60fD3Bd25163575031ACDce07538D");
pub const USDT_ROPSTEN: Address = address!("0x516de3a7A567d81737e3a46ec4FF9cFD1fcb0136");
pub const USDC_ROPSTEN: Address = address!("0x07865c6E87B9F70255377e024ace6630C1Eaa37F");

pub const DAI_RINKEBY_1: Address = address!("0x5592EC0cfb4dbc12D3aB100b257153436a1f0FEa");
pub const DAI_RINKEBY_2: Address = address!("0xc7AD46e0b8a400Bb3C915120d284AafbA8fc4735");
pub const USDC_RINKEBY: Address = address!("0x4DBCdF9B62e891a7cec5A2568C3F4FAF9E8Abe2b");
pub const USDT_RINKEBY: Address = address!("0xa689352b7c1CAd82864beb1D90679356d3962F4d");

pub const USDT_GOERLI: Address = address!("0xe583769738b6dd4E7CAF8451050d1948BE717679");
pub const USDC_GOERLI: Address = address!("0x07865c6E87B9F70255377e024ace6630C1Eaa37F");
pub const WBTC_GOERLI: Address = address!("0xC04B0d3107736C32e19F1c62b2aF67BE61d63a05");
pub const DAI_GOERLI: Address = address!("0x11fE4B6AE13d2a6055C8D9cF65c55bac32B5d844");

pub const USDC_KOVAN: Address = address!("0x31eeb2d0f9b6fd8642914ab10f4dd473677d80df");
pub const USDT_KOVAN: Address = address!("0xa325f1b1ebb748715dfbbaf62e0c6677e137f45d");
pub const WBTC_KOVAN: Address = address!("0xe36bc5d8b689ad6d80e78c3e736670e80d4b329d");
pub const DAI_KOVAN: Address = address!("0x4F96Fe3b7A6Cf9725f59d353F723c1bDb64CA6Aa");

pub const USDC_OPTIMISM: Address = address!("0x7F5c764cBc14f9669B88837ca1490cCa17c31607");
pub const DAI_OPTIMISM: Address = address!("0xDA10009cBd5D07dd0CeCc66161FC93D7c9000da1");
pub const USDT_OPTIMISM: Address = address!("0x94b008aA00579c1307B0EF2c499aD98a8ce58e58");
pub const WBTC_OPTIMISM: Address = address!("0x68f180fcCe6836688e9084f035309E29Bf0A2095");

pub const DAI_OPTIMISTIC_KOVAN: Address = address!("0xDA10009cBd5D07dd0CeCc66161FC93D7c9000da1");
pub const WBTC_OPTIMISTIC_KOVAN: Address = address!("0x2382a8f65b9120E554d1836a504808aC864E169d");
pub const USDT_OPTIMISTIC_KOVAN: Address = address!("0x7F5c764cBc14f9669B88837ca1490cCa17c31607");
pub const USDC_OPTIMISTIC_KOVAN: Address = address!("0x3b8e53b3ab8e01fb57d0c9e893bc4d655aa67d84");

pub const WBTC_ARBITRUM: Address = address!("0x2f2a2543B76A4166549F7aaB2e75Bef0aefC5B0f");
pub const DAI_ARBITRUM: Address = address!("0xDA10009cBd5D07dd0CeCc66161FC93D7c9000da1");
pub const USDC_ARBITRUM: Address = address!("0xFF970A61A04b1cA14834A43f5dE4533eBDDB5CC8");
pub const USDT_ARBITRUM: Address = address!("0xFd086bC7CD5C481DCC9C85ebE478A1C0b69FCbb9");

pub const DAI_ARBITRUM_RINKEBY: Address = address!("0x2f3C1B6A51A469051A22986aA0dDF98466cc8D3c");
pub const UNI_ARBITRUM_RINKEBY: Address = address!("0x049251a7175071316e089d0616d8b6aacd2c93b9");
pub const USDT_ARBITRUM_RINKEBY: Address = address!("0x920b9301c2de92186299cd2abc7199e25b9728b3");

fn weth(chain: ChainId) -> Token {
    Token::new(chain, chain.wrapped_native(), 18, "WETH")
}

/// Base tokens for `chain`, in the order pair enumeration visits them
#[must_use]
pub fn default_bases(chain: ChainId) -> Vec<Token> {
    let t = |address: Address, decimals: u8, symbol: &str| Token::new(chain, address, decimals, symbol);

    match chain {
        ChainId::Mainnet => vec![
            weth(chain),
            t(DAI_MAINNET, 18, "DAI"),
            t(USDC_MAINNET, 6, "USDC"),
            t(USDT_MAINNET, 6, "USDT"),
            t(WBTC_MAINNET, 8, "WBTC"),
        ],
        ChainId::Ropsten => vec![
            weth(chain),
            t(DAI_ROPSTEN, 18, "DAI"),
            t(USDT_ROPSTEN, 6, "USDT"),
            t(USDC_ROPSTEN, 6, "USDC"),
        ],
        ChainId::Rinkeby => vec![
            weth(chain),
            t(DAI_RINKEBY_1, 18, "DAI"),
            t(DAI_RINKEBY_2, 18, "DAI"),
            t(USDC_RINKEBY, 6, "USDC"),
            t(USDT_RINKEBY, 6, "USDT"),
        ],
        ChainId::Goerli => vec![
            weth(chain),
            t(USDT_GOERLI, 6, "USDT"),
            t(USDC_GOERLI, 6, "USDC"),
            t(WBTC_GOERLI, 8, "WBTC"),
            t(DAI_GOERLI, 18, "DAI"),
        ],
        ChainId::Kovan => vec![
            weth(chain),
            t(USDC_KOVAN, 6, "USDC"),
            t(USDT_KOVAN, 6, "USDT"),
            t(WBTC_KOVAN, 8, "WBTC"),
            t(DAI_KOVAN, 18, "DAI"),
        ],
        ChainId::Optimism => vec![
            weth(chain),
            t(USDC_OPTIMISM, 6, "USDC"),
            t(DAI_OPTIMISM, 18, "DAI"),
            t(USDT_OPTIMISM, 6, "USDT"),
            t(WBTC_OPTIMISM, 8, "WBTC"),
        ],
        ChainId::OptimisticKovan => vec![
            weth(chain),
            t(DAI_OPTIMISTIC_KOVAN, 18, "DAI"),
            t(WBTC_OPTIMISTIC_KOVAN, 8, "WBTC"),
            t(USDT_OPTIMISTIC_KOVAN, 6, "USDT"),
            t(USDC_OPTIMISTIC_KOVAN, 6, "USDC"),
        ],
        ChainId::ArbitrumOne => vec![
            weth(chain),
            t(WBTC_ARBITRUM, 8, "WBTC"),
            t(DAI_ARBITRUM, 18, "DAI"),
            t(USDC_ARBITRUM, 6, "USDC"),
            t(USDT_ARBITRUM, 6, "USDT"),
        ],
        ChainId::ArbitrumRinkeby => vec![
            weth(chain),
            t(DAI_ARBITRUM_RINKEBY, 18, "DAI"),
            t(UNI_ARBITRUM_RINKEBY, 18, "UNI"),
            t(USDT_ARBITRUM_RINKEBY, 6, "USDT"),
        ],
    }
}
