//! # Token Endpoints
//!
//! Balance and metadata reads, plus the domain records the app works with.

use lib_utils::units::{format_units, parse_quantity};
use primitive_types::U256;
use serde_json::json;
use shared::{TokenBalanceDto, TokenBalancesResult, TokenMetadataDto, ERC20_TOKEN_TYPE};

use super::client::IndexerClient;
use crate::core::error::ProviderError;

/// Upper bound on balance pages followed for one address.
pub const MAX_BALANCE_PAGES: usize = 10;

/// Largest `decimals` an ERC-20 token can declare (`uint8`).
pub const MAX_TOKEN_DECIMALS: u32 = u8::MAX as u32;

/// One token balance as reported by the indexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceEntry {
    pub contract_address: String,
    /// Smallest-unit amount
    pub raw_balance: U256,
}

impl BalanceEntry {
    pub fn new(contract_address: impl Into<String>, raw_balance: impl Into<U256>) -> Self {
        Self {
            contract_address: contract_address.into(),
            raw_balance: raw_balance.into(),
        }
    }

    pub fn is_positive(&self) -> bool {
        !self.raw_balance.is_zero()
    }
}

/// Descriptive token metadata.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenMetadata {
    pub symbol: String,
    pub decimals: u32,
    pub logo_uri: Option<String>,
}

/// Balances for one address.
///
/// `truncated` is set when the indexer still had pages left after
/// [`MAX_BALANCE_PAGES`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenBalances {
    pub entries: Vec<BalanceEntry>,
    pub truncated: bool,
}

impl From<Vec<BalanceEntry>> for TokenBalances {
    fn from(entries: Vec<BalanceEntry>) -> Self {
        Self { entries, truncated: false }
    }
}

/// A non-zero balance joined with the metadata of the same contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenHolding {
    pub balance: BalanceEntry,
    pub metadata: TokenMetadata,
}

impl TokenHolding {
    /// Balance in whole-token units, e.g. `"5.00"`.
    pub fn formatted_balance(&self) -> String {
        format_units(self.balance.raw_balance, self.metadata.decimals)
    }

    /// Balance followed by the symbol, e.g. `"5.00 FOO"`.
    pub fn display_amount(&self) -> String {
        let amount = self.formatted_balance();
        if self.metadata.symbol.is_empty() {
            amount
        } else {
            format!("{} {}", amount, self.metadata.symbol)
        }
    }
}

/// Get ERC-20 balances for an address, following `pageKey` continuations.
pub async fn get_token_balances(
    client: &IndexerClient,
    address: &str,
) -> Result<TokenBalances, ProviderError> {
    let mut entries = Vec::new();
    let mut page_key: Option<String> = None;

    for page in 0..MAX_BALANCE_PAGES {
        let params = match &page_key {
            Some(key) => json!([address, ERC20_TOKEN_TYPE, { "pageKey": key }]),
            None => json!([address, ERC20_TOKEN_TYPE]),
        };

        let result: TokenBalancesResult = client.call("alchemy_getTokenBalances", params).await?;
        tracing::debug!(address, page, count = result.token_balances.len(), "Fetched balance page");

        entries.extend(balance_entries_from_dto(result.token_balances)?);

        match result.page_key {
            Some(key) if !key.is_empty() => page_key = Some(key),
            _ => return Ok(entries.into()),
        }
    }

    tracing::warn!(address, pages = MAX_BALANCE_PAGES, "Balance pagination truncated");
    Ok(TokenBalances { entries, truncated: true })
}

/// Get metadata for one token contract.
pub async fn get_token_metadata(
    client: &IndexerClient,
    contract_address: &str,
) -> Result<TokenMetadata, ProviderError> {
    let dto: TokenMetadataDto = client
        .call("alchemy_getTokenMetadata", json!([contract_address]))
        .await?;
    metadata_from_dto(contract_address, dto)
}

/// Convert wire entries; a missing balance or a per-entry error counts as zero.
pub(crate) fn balance_entries_from_dto(
    dtos: Vec<TokenBalanceDto>,
) -> Result<Vec<BalanceEntry>, ProviderError> {
    dtos.into_iter()
        .map(|dto| {
            let raw_balance = match (&dto.token_balance, &dto.error) {
                (Some(hex), None) => parse_quantity(hex).map_err(|e| {
                    ProviderError::Decode(format!("balance of {}: {}", dto.contract_address, e))
                })?,
                _ => U256::zero(),
            };
            Ok(BalanceEntry {
                contract_address: dto.contract_address,
                raw_balance,
            })
        })
        .collect()
}

/// Convert wire metadata. Decimals outside the `uint8` range are rejected.
pub(crate) fn metadata_from_dto(
    contract_address: &str,
    dto: TokenMetadataDto,
) -> Result<TokenMetadata, ProviderError> {
    let decimals = dto.decimals.unwrap_or(0);
    if decimals > MAX_TOKEN_DECIMALS {
        return Err(ProviderError::Decode(format!(
            "decimals of {}: {} exceeds {}",
            contract_address, decimals, MAX_TOKEN_DECIMALS
        )));
    }

    Ok(TokenMetadata {
        symbol: dto.symbol.unwrap_or_default(),
        decimals,
        logo_uri: dto.logo.filter(|uri| !uri.trim().is_empty()),
    })
}
