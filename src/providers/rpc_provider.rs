use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use solana_account_decoder::UiAccountData;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_client::GetConfirmedSignaturesForAddress2Config;
use solana_client::rpc_config::RpcTransactionConfig;
use solana_client::rpc_request::{
    TokenAccountsFilter, MAX_GET_CONFIRMED_SIGNATURES_FOR_ADDRESS2_LIMIT,
};
use solana_commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_transaction_status::option_serializer::OptionSerializer;
use solana_transaction_status::{
    EncodedConfirmedTransactionWithStatusMeta, EncodedTransaction, UiMessage,
    UiTransactionEncoding,
};
use tracing::{debug, info};

use crate::error::ProviderError;
use crate::models::{BalanceChanges, SignatureInfo, TokenAccountBalance, TransactionRecord};
use crate::traits::data_provider::ChainDataProvider;
use crate::utils::lamports_to_sol;

/// `info` object of a jsonParsed SPL token account
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ParsedTokenInfo {
    mint: String,
    token_amount: ParsedTokenAmount,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ParsedTokenAmount {
    #[serde(default)]
    ui_amount: Option<f64>,
    #[serde(default)]
    ui_amount_string: Option<String>,
    decimals: u8,
}

/// JSON-RPC backed chain data provider
pub struct RpcDataProvider {
    rpc_client: Arc<RpcClient>,
    commitment: CommitmentConfig,
}

impl RpcDataProvider {
    /// Create a new RPC data provider
    pub fn new(rpc_url: String, timeout: Duration, commitment: CommitmentConfig) -> Self {
        let client = RpcClient::new_with_timeout_and_commitment(rpc_url, timeout, commitment);

        Self {
            rpc_client: Arc::new(client),
            commitment,
        }
    }

    /// Signature and transaction lookups reject `processed`
    fn history_commitment(&self) -> CommitmentConfig {
        if self.commitment.is_at_least_confirmed() {
            self.commitment
        } else {
            CommitmentConfig::confirmed()
        }
    }
}

#[async_trait]
impl ChainDataProvider for RpcDataProvider {
    async fn fetch_native_balance(&self, wallet: &Pubkey) -> Result<f64, ProviderError> {
        let lamports = self.rpc_client.get_balance(wallet).await?;
        Ok(lamports_to_sol(lamports))
    }

    async fn fetch_token_accounts(
        &self,
        wallet: &Pubkey,
        program_id: &Pubkey,
    ) -> Result<Vec<TokenAccountBalance>, ProviderError> {
        let accounts = self
            .rpc_client
            .get_token_accounts_by_owner(wallet, TokenAccountsFilter::ProgramId(*program_id))
            .await?;

        let mut balances = Vec::with_capacity(accounts.len());

        for keyed_account in accounts {
            let UiAccountData::Json(parsed_account) = keyed_account.account.data else {
                debug!("Skipping non-parsed token account {}", keyed_account.pubkey);
                continue;
            };

            let Some(info) = parsed_account.parsed.get("info") else {
                debug!("Token account {} has no info section", keyed_account.pubkey);
                continue;
            };

            match serde_json::from_value::<ParsedTokenInfo>(info.clone()) {
                Ok(token) => balances.push(TokenAccountBalance {
                    mint: token.mint,
                    ui_amount_string: token.token_amount.ui_amount_string,
                    ui_amount: token.token_amount.ui_amount,
                    decimals: token.token_amount.decimals,
                }),
                Err(e) => debug!("Unparseable token account {}: {}", keyed_account.pubkey, e),
            }
        }

        info!(
            "Found {} token accounts for {} under {}",
            balances.len(),
            wallet,
            program_id
        );
        Ok(balances)
    }

    async fn fetch_signatures(
        &self,
        wallet: &Pubkey,
        limit: usize,
    ) -> Result<Vec<SignatureInfo>, ProviderError> {
        // Nodes reject larger pages outright
        let limit = limit.min(MAX_GET_CONFIRMED_SIGNATURES_FOR_ADDRESS2_LIMIT);
        let statuses = self
            .rpc_client
            .get_signatures_for_address_with_config(
                wallet,
                GetConfirmedSignaturesForAddress2Config {
                    limit: Some(limit),
                    commitment: Some(self.history_commitment()),
                    ..Default::default()
                },
            )
            .await?;

        Ok(statuses
            .into_iter()
            .map(|status| SignatureInfo {
                signature: status.signature,
                block_time: status.block_time,
            })
            .collect())
    }

    async fn fetch_transaction(
        &self,
        signature: &str,
    ) -> Result<Option<TransactionRecord>, ProviderError> {
        let parsed_signature = Signature::from_str(signature)
            .map_err(|e| ProviderError::MalformedResponse(format!("Invalid signature {}: {}", signature, e)))?;

        let transaction = self
            .rpc_client
            .get_transaction_with_config(
                &parsed_signature,
                RpcTransactionConfig {
                    encoding: Some(UiTransactionEncoding::JsonParsed),
                    commitment: Some(self.history_commitment()),
                    max_supported_transaction_version: Some(0),
                },
            )
            .await?;

        Ok(Some(to_transaction_record(signature, transaction)))
    }
}

/// Flatten an RPC transaction into the provider-neutral record
fn to_transaction_record(
    signature: &str,
    transaction: EncodedConfirmedTransactionWithStatusMeta,
) -> TransactionRecord {
    let block_time = transaction.block_time;
    let meta = transaction.transaction.meta;

    let mut account_keys = match transaction.transaction.transaction {
        EncodedTransaction::Json(ui_transaction) => match ui_transaction.message {
            UiMessage::Parsed(message) => message
                .account_keys
                .into_iter()
                .map(|account| account.pubkey)
                .collect(),
            UiMessage::Raw(message) => message.account_keys,
        },
        EncodedTransaction::Accounts(list) => list
            .account_keys
            .into_iter()
            .map(|account| account.pubkey)
            .collect(),
        _ => Vec::new(),
    };

    let balances = meta.map(|meta| {
        // jsonParsed keys already include lookup-table addresses; raw keys do not
        if account_keys.len() < meta.pre_balances.len() {
            if let OptionSerializer::Some(loaded) = &meta.loaded_addresses {
                account_keys.extend(loaded.writable.iter().cloned());
                account_keys.extend(loaded.readonly.iter().cloned());
            }
        }
        BalanceChanges {
            pre_balances: meta.pre_balances,
            post_balances: meta.post_balances,
        }
    });

    TransactionRecord {
        signature: signature.to_string(),
        block_time,
        account_keys,
        balances,
    }
}
