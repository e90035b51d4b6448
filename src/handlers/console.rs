use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

use crate::error::ValuationError;
use crate::models::{PortfolioSummary, Transaction, TransactionDirection, WalletValuation};
use crate::traits::event_handler::ValuationEventHandler;
use crate::utils::helper::{
    format_address, format_relative_time, format_signature, format_token_amount, format_usd,
};

/// Console logging event handler
pub struct ConsoleEventHandler;

impl ConsoleEventHandler {
    /// Create a new console event handler
    pub fn new() -> Self {
        Self
    }

    /// One line per holding, e.g. `USDC: 12.5000 ($12.50)`
    pub fn holding_lines(valuation: &WalletValuation) -> Vec<String> {
        valuation
            .tokens
            .iter()
            .map(|token| match token.price_usd {
                Some(_) => format!(
                    "{}: {} ({})",
                    token.symbol,
                    format_token_amount(token.amount),
                    format_usd(token.usd_value)
                ),
                None => format!(
                    "{}: {} (price not available)",
                    token.symbol,
                    format_token_amount(token.amount)
                ),
            })
            .collect()
    }

    /// e.g. `+1.2500 SOL  5j7s6N...W5Dia7  3h ago`
    pub fn transaction_line(transaction: &Transaction) -> String {
        let sign = match transaction.direction {
            TransactionDirection::Inbound => "+",
            TransactionDirection::Outbound => "-",
        };
        format!(
            "{}{} SOL  {}  {}",
            sign,
            format_token_amount(transaction.amount),
            format_signature(&transaction.signature),
            format_relative_time(transaction.timestamp, Utc::now())
        )
    }
}

impl Default for ConsoleEventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ValuationEventHandler for ConsoleEventHandler {
    async fn handle_valuation(&self, valuation: &WalletValuation) {
        info!("{}", "=".repeat(80));
        info!("Wallet: {}", format_address(&valuation.address));
        info!("Total Balance: {}", format_usd(valuation.total_usd_value));
        info!("{}", "-".repeat(80));
        info!(
            "SOL: {} ({})",
            format_token_amount(valuation.native_balance),
            format_usd(valuation.native_usd_value)
        );

        if valuation.tokens.is_empty() {
            info!("No token holdings found in wallet");
        } else {
            info!("Tokens ({}):", valuation.token_count());
            for line in Self::holding_lines(valuation) {
                info!("  {}", line);
            }
        }
    }

    async fn handle_portfolio(&self, summary: &PortfolioSummary) {
        for wallet in &summary.wallets {
            self.handle_valuation(wallet).await;
        }
        info!("{}", "=".repeat(80));
        info!(
            "Net worth across {} wallets: {}",
            summary.wallet_count(),
            format_usd(summary.total_value_usd)
        );
    }

    async fn handle_transactions(&self, address: &str, transactions: &[Transaction]) {
        info!("Recent transactions for {}:", format_address(address));
        if transactions.is_empty() {
            info!("  No recent transactions");
            return;
        }
        for transaction in transactions {
            info!("  {}", Self::transaction_line(transaction));
        }
    }

    async fn handle_error(&self, error: &ValuationError) {
        warn!("Wallet valuation error: {}", error);
    }
}
