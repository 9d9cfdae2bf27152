use serde::{Deserialize, Serialize};

/// Token type filter accepted by `alchemy_getTokenBalances`
pub const ERC20_TOKEN_TYPE: &str = "erc20";

/// Result of `alchemy_getTokenBalances`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalancesResult {
    pub address: String,
    pub token_balances: Vec<TokenBalanceDto>,
    /// Pagination cursor, present when the holder has more tokens than one page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_key: Option<String>,
}

/// One entry of [`TokenBalancesResult::token_balances`]
///
/// `token_balance` is a hex quantity (`0x...`). The indexer nulls it and fills
/// `error` when it could not read the contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalanceDto {
    pub contract_address: String,
    #[serde(default)]
    pub token_balance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<serde_json::Value>,
}

/// Result of `alchemy_getTokenMetadata`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenMetadataDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub decimals: Option<u32>,
    #[serde(default)]
    pub logo: Option<String>,
}
