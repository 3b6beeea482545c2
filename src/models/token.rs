use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use alloy::primitives::Address;

use super::chain::ChainId;
use crate::error::PoolGenError;

/// Decimals assumed for tokens given only by address. Not used by pool generation.
pub const DEFAULT_DECIMALS: u8 = 18;

/// A tradable asset on one chain.
///
/// Two tokens are equal when they share chain and address; decimals and symbol
/// are display metadata only.
#[derive(Clone, Debug)]
pub struct Token {
    /// The chain the token lives on
    pub chain: ChainId,
    /// The token contract address
    pub address: Address,
    /// ERC20 decimals
    pub decimals: u8,
    /// Ticker, when known
    pub symbol: Option<String>,
}

impl Token {
    /// Create a new token
    #[must_use]
    pub fn new(chain: ChainId, address: Address, decimals: u8, symbol: &str) -> Self {
        Self {
            chain,
            address,
            decimals,
            symbol: Some(symbol.to_string()),
        }
    }

    /// Create a token from a textual address with no metadata.
    ///
    /// Address text is parsed case-insensitively, so differently cased inputs
    /// resolve to the same token.
    ///
    /// # Errors
    ///
    /// Returns `InvalidToken` if the text is empty or not a 20-byte hex address.
    pub fn parse(chain: ChainId, address: &str) -> Result<Self, PoolGenError> {
        let trimmed = address.trim();
        if trimmed.is_empty() {
            return Err(PoolGenError::InvalidToken("empty address".to_string()));
        }

        let address = Address::from_str(trimmed)
            .map_err(|e| PoolGenError::InvalidToken(format!("{trimmed}: {e}")))?;

        Ok(Self {
            chain,
            address,
            decimals: DEFAULT_DECIMALS,
            symbol: None,
        })
    }

    /// Whether this token comes first in a pool's (token0, token1) ordering
    #[must_use]
    pub fn sorts_before(&self, other: &Self) -> bool {
        self.address < other.address
    }

    /// Checksummed address
    #[must_use]
    pub fn checksummed(&self) -> String {
        self.address.to_checksum(None)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.chain == other.chain && self.address == other.address
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain.hash(state);
        self.address.hash(state);
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.symbol {
            Some(symbol) => write!(f, "{symbol}({})", self.checksummed()),
            None => write!(f, "{}", self.checksummed()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    #[test]
    fn test_parse_is_case_insensitive() {
        let lower = Token::parse(ChainId::Mainnet, "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48").unwrap();
        let upper = Token::parse(ChainId::Mainnet, "0xA0B86991C6218B36C1D19D4A2E9EB0CE3606EB48").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(
            lower.checksummed(),
            "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"
        );
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(
            Token::parse(ChainId::Mainnet, "  ").err().unwrap(),
            PoolGenError::InvalidToken("empty address".to_string())
        );
    }

    #[test]
    fn test_parse_malformed() {
        assert!(matches!(
            Token::parse(ChainId::Mainnet, "0x1234"),
            Err(PoolGenError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_equality_ignores_metadata() {
        let usdc = address!("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
        let a = Token::new(ChainId::Mainnet, usdc, 6, "USDC");
        let b = Token::new(ChainId::Mainnet, usdc, 18, "USD Coin");
        let c = Token::new(ChainId::Optimism, usdc, 6, "USDC");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_sorts_before() {
        let a = Token::new(ChainId::Mainnet, address!("0x0000000000000000000000000000000000000001"), 18, "A");
        let b = Token::new(ChainId::Mainnet, address!("0x00000000000000000000000000000000000000ff"), 18, "B");
        assert!(a.sorts_before(&b));
        assert!(!b.sorts_before(&a));
        assert!(!a.sorts_before(&a));
    }
}
