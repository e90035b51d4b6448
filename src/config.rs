//! Runtime configuration read from the environment (and `.env`)

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use solana_commitment_config::CommitmentConfig;

use crate::error::ConfigError;
use crate::models::SymbolTable;
use crate::providers::{AlchemyPriceProvider, DEFAULT_WALLETS_FILE};
use crate::tracker::{DEFAULT_HISTORY_LIMIT, DEFAULT_NEGLIGIBLE_DELTA_SOL};

pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";
pub const DEFAULT_RPC_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PRICE_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub rpc_url: String,
    pub commitment: CommitmentConfig,
    pub rpc_timeout: Duration,
    pub price_api_url: String,
    /// Without a key the static stablecoin table is used
    pub price_api_key: Option<String>,
    pub price_network: String,
    pub price_timeout: Duration,
    pub history_limit: usize,
    pub negligible_delta_sol: f64,
    pub wallets_file: PathBuf,
    pub include_token_2022: bool,
    /// Extra mint → symbol entries layered over the built-in table
    pub extra_symbols: Vec<(String, String)>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            commitment: CommitmentConfig::confirmed(),
            rpc_timeout: Duration::from_secs(DEFAULT_RPC_TIMEOUT_SECS),
            price_api_url: AlchemyPriceProvider::DEFAULT_BASE_URL.to_string(),
            price_api_key: None,
            price_network: AlchemyPriceProvider::DEFAULT_NETWORK.to_string(),
            price_timeout: Duration::from_secs(DEFAULT_PRICE_TIMEOUT_SECS),
            history_limit: DEFAULT_HISTORY_LIMIT,
            negligible_delta_sol: DEFAULT_NEGLIGIBLE_DELTA_SOL,
            wallets_file: PathBuf::from(DEFAULT_WALLETS_FILE),
            include_token_2022: false,
            extra_symbols: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Read configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`; unset or blank keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let mut config = Self::default();

        if let Some(url) = get("SOLANA_RPC_URL") {
            config.rpc_url = url;
        }
        if let Some(value) = get("RPC_COMMITMENT") {
            config.commitment = parse_commitment(&value)?;
        }
        if let Some(value) = get("RPC_TIMEOUT_SECS") {
            config.rpc_timeout = Duration::from_secs(parse_value("RPC_TIMEOUT_SECS", &value)?);
        }
        if let Some(url) = get("PRICE_API_URL") {
            config.price_api_url = url;
        }
        config.price_api_key = get("PRICE_API_KEY");
        if let Some(network) = get("PRICE_NETWORK") {
            config.price_network = network;
        }
        if let Some(value) = get("PRICE_TIMEOUT_SECS") {
            config.price_timeout = Duration::from_secs(parse_value("PRICE_TIMEOUT_SECS", &value)?);
        }
        if let Some(value) = get("HISTORY_LIMIT") {
            config.history_limit = parse_value("HISTORY_LIMIT", &value)?;
        }
        if let Some(value) = get("NEGLIGIBLE_DELTA_SOL") {
            let threshold: f64 = parse_value("NEGLIGIBLE_DELTA_SOL", &value)?;
            if !threshold.is_finite() || threshold < 0.0 {
                return Err(invalid("NEGLIGIBLE_DELTA_SOL", &value, "must be a non-negative number"));
            }
            config.negligible_delta_sol = threshold;
        }
        if let Some(path) = get("WALLETS_FILE") {
            config.wallets_file = PathBuf::from(path);
        }
        if let Some(value) = get("INCLUDE_TOKEN_2022") {
            config.include_token_2022 = parse_bool("INCLUDE_TOKEN_2022", &value)?;
        }
        if let Some(value) = get("TOKEN_SYMBOLS") {
            config.extra_symbols = parse_symbols(&value)?;
        }

        Ok(config)
    }

    /// Built-in symbols plus configured overrides
    pub fn symbol_table(&self) -> SymbolTable {
        let mut table = SymbolTable::default();
        table.extend(self.extra_symbols.iter().cloned());
        table
    }
}

fn invalid(key: &'static str, value: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason: reason.into(),
    }
}

fn parse_value<T>(key: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e: T::Err| invalid(key, value, e.to_string()))
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(key, value, "expected true or false")),
    }
}

fn parse_commitment(value: &str) -> Result<CommitmentConfig, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "processed" => Ok(CommitmentConfig::processed()),
        "confirmed" => Ok(CommitmentConfig::confirmed()),
        "finalized" => Ok(CommitmentConfig::finalized()),
        _ => Err(invalid(
            "RPC_COMMITMENT",
            value,
            "expected processed, confirmed or finalized",
        )),
    }
}

/// `mint=SYMBOL,mint=SYMBOL`
fn parse_symbols(value: &str) -> Result<Vec<(String, String)>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.split_once('=') {
            Some((mint, symbol)) if !mint.trim().is_empty() && !symbol.trim().is_empty() => {
                Ok((mint.trim().to_string(), symbol.trim().to_string()))
            }
            _ => Err(invalid("TOKEN_SYMBOLS", entry, "expected mint=SYMBOL")),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.rpc_url, DEFAULT_RPC_URL);
        assert_eq!(config.history_limit, 10);
        assert_eq!(config.negligible_delta_sol, 0.000001);
        assert_eq!(config.price_timeout, Duration::from_secs(10));
        assert_eq!(config.price_network, "solana-mainnet");
        assert!(config.price_api_key.is_none());
        assert!(!config.include_token_2022);
        assert_eq!(config.commitment, CommitmentConfig::confirmed());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("SOLANA_RPC_URL", "http://localhost:8899"),
            ("RPC_COMMITMENT", "Finalized"),
            ("PRICE_API_KEY", "  secret "),
            ("HISTORY_LIMIT", "25"),
            ("NEGLIGIBLE_DELTA_SOL", "0.001"),
            ("INCLUDE_TOKEN_2022", "yes"),
            ("TOKEN_SYMBOLS", "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263=BONK, mint2 = ABC"),
        ])
        .unwrap();

        assert_eq!(config.rpc_url, "http://localhost:8899");
        assert_eq!(config.commitment, CommitmentConfig::finalized());
        assert_eq!(config.price_api_key.as_deref(), Some("secret"));
        assert_eq!(config.history_limit, 25);
        assert_eq!(config.negligible_delta_sol, 0.001);
        assert!(config.include_token_2022);
        assert_eq!(
            config.symbol_table().symbol_for("DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263"),
            "BONK"
        );
        assert_eq!(config.symbol_table().symbol_for("mint2"), "ABC");
    }

    #[test]
    fn blank_values_keep_defaults() {
        let config = config_from(&[("PRICE_API_KEY", "   "), ("HISTORY_LIMIT", "")]).unwrap();
        assert!(config.price_api_key.is_none());
        assert_eq!(config.history_limit, DEFAULT_HISTORY_LIMIT);
    }

    #[test]
    fn rejects_malformed_values() {
        assert!(config_from(&[("HISTORY_LIMIT", "ten")]).is_err());
        assert!(config_from(&[("RPC_COMMITMENT", "eventually")]).is_err());
        assert!(config_from(&[("NEGLIGIBLE_DELTA_SOL", "-1")]).is_err());
        assert!(config_from(&[("INCLUDE_TOKEN_2022", "maybe")]).is_err());
        assert!(config_from(&[("TOKEN_SYMBOLS", "no-separator")]).is_err());
    }
}
