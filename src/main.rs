use std::collections::BTreeMap;
use std::sync::Arc;

use alloy::primitives::Address;
use candidate_pools::config::Config;
use candidate_pools::fees::{OnChainTokenFeeFetcher, TokenFeeFetcher};
use candidate_pools::models::{ChainId, Token};
use candidate_pools::pools::{compute_pool_address, CandidatePoolGenerator, FeeTier};
use candidate_pools::registry::BaseTokenRegistry;
use candidate_pools::utils::logger::setup_logger;
use candidate_pools::utils::providers::create_http_provider;
use clap::{Parser, Subcommand};
use eyre::Result;
use log::{info, LevelFilter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<LevelFilter>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the candidate pools for a chain as JSON
    Pools {
        /// Chain id
        #[arg(long, default_value_t = 1)]
        chain: u64,
        /// Input token of the swap being routed
        #[arg(long, requires = "token_out")]
        token_in: Option<String>,
        /// Output token of the swap being routed
        #[arg(long, requires = "token_in")]
        token_out: Option<String>,
    },
    /// Print the canonical address of a pool
    PoolAddress {
        /// Chain id
        #[arg(long, default_value_t = 1)]
        chain: u64,
        /// One token of the pool
        #[arg(long)]
        token_a: String,
        /// The other token of the pool
        #[arg(long)]
        token_b: String,
        /// Fee tier in hundredths of a bip (100, 500, 3000, 10000)
        #[arg(long)]
        fee: String,
    },
    /// List supported chains and their base tokens
    Networks,
    /// Look up transfer fees on-chain (needs RPC_URL)
    Fees {
        /// Chain id
        #[arg(long, default_value_t = 1)]
        chain: u64,
        /// Token addresses
        #[arg(required = true)]
        tokens: Vec<String>,
    },
}

fn print_pools(
    generator: &CandidatePoolGenerator,
    chain: ChainId,
    token_in: Option<String>,
    token_out: Option<String>,
) -> Result<()> {
    let requested = match (token_in, token_out) {
        (Some(token_in), Some(token_out)) => Some((
            Token::parse(chain, &token_in)?,
            Token::parse(chain, &token_out)?,
        )),
        _ => None,
    };

    let pools = generator.generate(
        chain,
        requested.as_ref().map(|(token_in, token_out)| (token_in, token_out)),
    )?;

    info!("Generated {} candidate pools on {chain}", pools.len());
    println!("{}", serde_json::to_string_pretty(&pools)?);
    Ok(())
}

fn print_pool_address(chain: ChainId, token_a: &str, token_b: &str, fee: &str) -> Result<()> {
    let token_a = Token::parse(chain, token_a)?;
    let token_b = Token::parse(chain, token_b)?;
    let fee: FeeTier = fee.parse()?;

    let address = compute_pool_address(chain, token_a.address, token_b.address, fee);
    println!("{}", address.to_checksum(None));
    Ok(())
}

fn print_networks(registry: &BaseTokenRegistry) -> Result<()> {
    for chain in registry.chains() {
        let symbols: Vec<String> = registry
            .bases(chain)?
            .iter()
            .map(ToString::to_string)
            .collect();
        println!("{:>7} {chain}: {}", chain.id(), symbols.join(", "));
    }
    Ok(())
}

async fn print_fees(chain: ChainId, tokens: &[String]) -> Result<()> {
    let config = Config::from_env()?;
    let provider = create_http_provider(&config)?;

    let fetcher = OnChainTokenFeeFetcher::new(chain, provider)
        .with_detector(config.fee_detector)
        .with_amount_to_borrow(config.fee_amount_to_borrow)
        .with_batch_size(config.fee_batch_size);

    let addresses: Vec<Address> = tokens
        .iter()
        .map(|token| Token::parse(chain, token).map(|token| token.address))
        .collect::<Result<_, _>>()?;

    let fees: BTreeMap<String, _> = fetcher
        .fetch_fees(&addresses)
        .await?
        .into_iter()
        .map(|(token, fee)| (token.to_checksum(None), fee))
        .collect();

    println!("{}", serde_json::to_string_pretty(&fees)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logger(cli.log_level)?;

    let registry = Arc::new(BaseTokenRegistry::default());

    match cli.command {
        Commands::Pools {
            chain,
            token_in,
            token_out,
        } => {
            let generator = CandidatePoolGenerator::new(registry);
            print_pools(&generator, ChainId::try_from(chain)?, token_in, token_out)?;
        }
        Commands::PoolAddress {
            chain,
            token_a,
            token_b,
            fee,
        } => {
            print_pool_address(ChainId::try_from(chain)?, &token_a, &token_b, &fee)?;
        }
        Commands::Networks => {
            print_networks(&registry)?;
        }
        Commands::Fees { chain, tokens } => {
            print_fees(ChainId::try_from(chain)?, &tokens).await?;
        }
    }

    Ok(())
}
