//! Wallet valuation, history and the tracked-wallet list

pub mod history;
pub mod holdings;
pub mod tracked_wallets;
pub mod wallet_valuer;

pub use history::{TransactionHistory, DEFAULT_HISTORY_LIMIT, DEFAULT_NEGLIGIBLE_DELTA_SOL};
pub use holdings::{spl_token_2022_program_id, spl_token_program_id, HoldingsFetcher};
pub use tracked_wallets::TrackedWallets;
pub use wallet_valuer::WalletValuer;
