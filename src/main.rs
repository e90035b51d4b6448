use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use solana_net_worth::{
    AlchemyPriceProvider, AppConfig, ChainDataProvider, ConsoleEventHandler, HoldingsFetcher,
    JsonFileAddressStore, PriceProvider, RpcDataProvider, StaticPriceProvider, TrackedWallets,
    TransactionHistory, ValuationEventHandler, WalletValuer,
};

#[derive(Parser, Debug)]
#[command(name = "solana-net-worth", version, about = "Track the USD net worth of Solana wallets")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start tracking a wallet address
    Add { address: String },
    /// Stop tracking a wallet address
    Remove { address: String },
    /// List tracked wallet addresses
    List,
    /// Value one wallet, or every tracked wallet when no address is given
    Value {
        address: Option<String>,
        /// Print JSON instead of the console report
        #[arg(long)]
        json: bool,
    },
    /// Show recent SOL transfers of a wallet
    History {
        address: String,
        /// Maximum number of entries (defaults to HISTORY_LIMIT)
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_level(true)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_file(true)
        .with_line_number(true)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env().context("Invalid configuration")?;

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(cli.command, config))
}

async fn run(command: Command, config: AppConfig) -> anyhow::Result<()> {
    let wallets = TrackedWallets::new(Arc::new(JsonFileAddressStore::new(
        config.wallets_file.clone(),
    )));
    let handler = ConsoleEventHandler::new();

    match command {
        Command::Add { address } => {
            let added = wallets.add(&address).await?;
            println!("Added {}", added);
        }
        Command::Remove { address } => {
            if wallets.remove(&address).await? {
                println!("Removed {}", address.trim());
            } else {
                println!("{} is not tracked", address.trim());
            }
        }
        Command::List => {
            for address in wallets.list().await? {
                println!("{}", address);
            }
        }
        Command::Value { address, json } => {
            let valuer = build_valuer(&config)?;
            match address {
                Some(address) => match valuer.value_wallet(&address).await {
                    Ok(valuation) if json => {
                        println!("{}", serde_json::to_string_pretty(&valuation)?)
                    }
                    Ok(valuation) => handler.handle_valuation(&valuation).await,
                    Err(e) => {
                        handler.handle_error(&e).await;
                        return Err(e.into());
                    }
                },
                None => {
                    let addresses = wallets.list().await?;
                    if addresses.is_empty() {
                        warn!("No wallets tracked; add one with `add <address>`");
                    }
                    let summary = valuer.value_wallets(&addresses).await;
                    if json {
                        println!("{}", serde_json::to_string_pretty(&summary)?);
                    } else {
                        handler.handle_portfolio(&summary).await;
                    }
                }
            }
        }
        Command::History {
            address,
            limit,
            json,
        } => {
            let history = TransactionHistory::new(build_data_provider(&config))
                .with_negligible_delta(config.negligible_delta_sol);
            let transactions = history
                .recent_transactions(&address, limit.unwrap_or(config.history_limit))
                .await;
            if json {
                println!("{}", serde_json::to_string_pretty(&transactions)?);
            } else {
                handler.handle_transactions(address.trim(), &transactions).await;
            }
        }
    }

    Ok(())
}

fn build_data_provider(config: &AppConfig) -> Arc<dyn ChainDataProvider> {
    info!("RPC URL: {}", config.rpc_url);
    Arc::new(RpcDataProvider::new(
        config.rpc_url.clone(),
        config.rpc_timeout,
        config.commitment,
    ))
}

fn build_price_provider(config: &AppConfig) -> anyhow::Result<Arc<dyn PriceProvider>> {
    match &config.price_api_key {
        Some(api_key) => Ok(Arc::new(AlchemyPriceProvider::new(
            &config.price_api_url,
            api_key,
            config.price_network.clone(),
            config.price_timeout,
        )?)),
        None => {
            warn!("PRICE_API_KEY not set; only stablecoins will be priced");
            Ok(Arc::new(StaticPriceProvider::stablecoins()))
        }
    }
}

fn build_valuer(config: &AppConfig) -> anyhow::Result<WalletValuer> {
    let mut holdings = HoldingsFetcher::new(build_data_provider(config), config.symbol_table());
    if config.include_token_2022 {
        holdings = holdings.with_token_2022();
    }
    Ok(WalletValuer::new(holdings, build_price_provider(config)?))
}
