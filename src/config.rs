//! Runtime configuration read from the environment (and `.env`).

use std::env;
use std::str::FromStr;

use alloy::primitives::Address;
use eyre::{eyre, Result};
use url::Url;

use crate::fees::on_chain::{DEFAULT_AMOUNT_TO_BORROW, DEFAULT_BATCH_SIZE, DEFAULT_FEE_DETECTOR};

/// Settings for the pieces of the crate that touch the network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON-RPC endpoint, required only for fee lookups
    pub rpc_url: Option<Url>,
    /// Fee detector contract
    pub fee_detector: Address,
    /// Amount the detector borrows per token
    pub fee_amount_to_borrow: u64,
    /// Concurrent detector calls
    pub fee_batch_size: usize,
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    ///
    /// # Environment Variables
    /// * `RPC_URL` - JSON-RPC endpoint (optional)
    /// * `FEE_DETECTOR_ADDRESS` - detector contract override (optional)
    /// * `FEE_AMOUNT_TO_BORROW` - defaults to 100000
    /// * `FEE_BATCH_SIZE` - defaults to 20
    ///
    /// # Errors
    /// * If a variable is set but cannot be parsed
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let rpc_url = lookup("RPC_URL")
            .filter(|url| !url.trim().is_empty())
            .map(|url| Url::parse(url.trim()))
            .transpose()
            .map_err(|e| eyre!("RPC_URL is not a valid url: {e}"))?;

        Ok(Self {
            rpc_url,
            fee_detector: parse_or(&lookup, "FEE_DETECTOR_ADDRESS", DEFAULT_FEE_DETECTOR)?,
            fee_amount_to_borrow: parse_or(&lookup, "FEE_AMOUNT_TO_BORROW", DEFAULT_AMOUNT_TO_BORROW)?,
            fee_batch_size: parse_or(&lookup, "FEE_BATCH_SIZE", DEFAULT_BATCH_SIZE)?,
        })
    }

    /// The RPC url, or an error explaining it is needed
    ///
    /// # Errors
    /// * If `RPC_URL` was not set
    pub fn require_rpc_url(&self) -> Result<&Url> {
        self.rpc_url
            .as_ref()
            .ok_or_else(|| eyre!("RPC_URL must be set"))
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e| eyre!("{key} has invalid value {value:?}: {e}")),
        None => Ok(default),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.rpc_url, None);
        assert_eq!(config.fee_detector, DEFAULT_FEE_DETECTOR);
        assert_eq!(config.fee_amount_to_borrow, 100_000);
        assert_eq!(config.fee_batch_size, 20);
        assert_eq!(config.require_rpc_url().err().unwrap().to_string(), "RPC_URL must be set");
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("RPC_URL", "http://localhost:8545"),
            ("FEE_BATCH_SIZE", "5"),
            ("FEE_DETECTOR_ADDRESS", "0x00000000000000000000000000000000000000aa"),
        ])
        .unwrap();
        assert_eq!(config.require_rpc_url().unwrap().as_str(), "http://localhost:8545/");
        assert_eq!(config.fee_batch_size, 5);
        assert_eq!(config.fee_detector, Address::with_last_byte(0xaa));
    }

    #[test]
    fn test_malformed_value_is_an_error() {
        let err = config(&[("FEE_BATCH_SIZE", "many")]).err().unwrap();
        assert!(err.to_string().starts_with("FEE_BATCH_SIZE has invalid value"));
    }
}
