use alloy::network::Ethereum;
use alloy::providers::fillers::{
    BlobGasFiller, ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller,
};
use alloy::providers::{Identity, ProviderBuilder, RootProvider};
use eyre::Result;

use crate::config::Config;

/// HTTP provider with the default fillers
pub type HttpProvider = FillProvider<
    JoinFill<Identity, JoinFill<GasFiller, JoinFill<BlobGasFiller, JoinFill<NonceFiller, ChainIdFiller>>>>,
    RootProvider,
    Ethereum,
>;

/// Creates an HTTP provider for the configured RPC endpoint
///
/// # Errors
/// * If `RPC_URL` is not configured
pub fn create_http_provider(config: &Config) -> Result<HttpProvider> {
    let url = config.require_rpc_url()?.clone();
    Ok(ProviderBuilder::new().on_http(url))
}
