/// Supported networks
pub mod chain;
/// Token values
pub mod token;

pub use chain::ChainId;
pub use token::Token;
