use thiserror::Error;

/// Failure of an upstream call (RPC node or price oracle)
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("RPC request failed: {0}")]
    Rpc(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl From<solana_client::client_error::ClientError> for ProviderError {
    fn from(err: solana_client::client_error::ClientError) -> Self {
        ProviderError::Rpc(err.to_string())
    }
}

/// The string is not a base58-encoded 32-byte Solana public key
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid address {address}: {reason}")]
pub struct InvalidAddress {
    pub address: String,
    pub reason: String,
}

/// Failure to fetch the holdings of a single address
#[derive(Error, Debug)]
pub enum FetchError {
    #[error(transparent)]
    InvalidAddress(#[from] InvalidAddress),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// A wallet could not be valued at all
#[derive(Error, Debug)]
#[error("Failed to value wallet {address}: {source}")]
pub struct ValuationError {
    pub address: String,
    #[source]
    pub source: FetchError,
}

impl ValuationError {
    pub fn new(address: impl Into<String>, source: FetchError) -> Self {
        Self { address: address.into(), source }
    }

    /// True when the caller passed a malformed address rather than hitting a provider failure
    pub fn is_invalid_address(&self) -> bool {
        matches!(self.source, FetchError::InvalidAddress(_))
    }
}

/// Tracked-address store failures
#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    InvalidAddress(#[from] InvalidAddress),

    #[error("Wallet {0} is already tracked")]
    DuplicateAddress(String),

    #[error("Store IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}
