use std::sync::Arc;

use alloy::primitives::Address;

use super::generator::CandidatePoolGenerator;
use crate::models::{ChainId, Token};
use crate::registry::tokens::USDC_MAINNET;
use crate::registry::BaseTokenRegistry;

#[allow(dead_code)]
pub fn token(chain: ChainId, n: u8) -> Token {
    Token::new(chain, Address::with_last_byte(n), 18, "TKN")
}

#[allow(dead_code)]
pub fn weth() -> Token {
    Token::new(ChainId::Mainnet, ChainId::Mainnet.wrapped_native(), 18, "WETH")
}

#[allow(dead_code)]
pub fn usdc() -> Token {
    Token::new(ChainId::Mainnet, USDC_MAINNET, 6, "USDC")
}

#[allow(dead_code)]
pub fn generator() -> CandidatePoolGenerator {
    CandidatePoolGenerator::new(Arc::new(BaseTokenRegistry::default()))
}
