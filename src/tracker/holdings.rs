use std::sync::Arc;

use solana_sdk::pubkey::Pubkey;
use tracing::{debug, info};

use crate::error::FetchError;
use crate::models::{Holdings, SymbolTable, TokenHolding};
use crate::traits::data_provider::ChainDataProvider;
use crate::utils::parse_address;

/// SPL Token program
pub fn spl_token_program_id() -> Pubkey {
    Pubkey::new_from_array(spl_token::id().to_bytes())
}

/// SPL Token-2022 program
pub fn spl_token_2022_program_id() -> Pubkey {
    Pubkey::new_from_array(spl_token_2022::id().to_bytes())
}

/// Fetches native and token balances of an address
pub struct HoldingsFetcher {
    data_provider: Arc<dyn ChainDataProvider>,
    symbols: SymbolTable,
    token_programs: Vec<Pubkey>,
}

impl HoldingsFetcher {
    /// Fetcher over the standard SPL Token program
    pub fn new(data_provider: Arc<dyn ChainDataProvider>, symbols: SymbolTable) -> Self {
        Self {
            data_provider,
            symbols,
            token_programs: vec![spl_token_program_id()],
        }
    }

    /// Also enumerate Token-2022 accounts
    pub fn with_token_2022(mut self) -> Self {
        let program = spl_token_2022_program_id();
        if !self.token_programs.contains(&program) {
            self.token_programs.push(program);
        }
        self
    }

    /// Native balance plus every non-zero token balance, unpriced.
    ///
    /// Any provider failure aborts the fetch; no partial holdings are returned.
    pub async fn fetch_holdings(&self, address: &str) -> Result<Holdings, FetchError> {
        let wallet = parse_address(address)?;

        let native_balance = self.data_provider.fetch_native_balance(&wallet).await?;
        debug!("SOL balance of {}: {}", wallet, native_balance);

        let mut tokens = Vec::new();
        for program_id in &self.token_programs {
            let accounts = self
                .data_provider
                .fetch_token_accounts(&wallet, program_id)
                .await?;

            for account in accounts {
                let Some(amount) = account.parsed_amount().filter(|a| *a > 0.0) else {
                    continue;
                };
                let symbol = self.symbols.symbol_for(&account.mint);
                tokens.push(TokenHolding::new(account.mint, symbol, amount, account.decimals));
            }
        }

        info!("Found {} tokens with non-zero balance for {}", tokens.len(), wallet);

        Ok(Holdings {
            address: wallet.to_string(),
            native_balance,
            tokens,
        })
    }
}
