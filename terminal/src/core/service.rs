//! # Service Traits
//!
//! The two external collaborators of the client, expressed as injectable traits.
//! Production implementations live in [`crate::services`]; tests substitute
//! in-memory mocks.

use async_trait::async_trait;

use crate::core::error::ProviderError;
use crate::services::indexer::{TokenBalances, TokenMetadata};
use crate::services::wallet::WalletError;

/// Wallet connection provider.
///
/// Asks the wallet to authorize the app and returns the accounts it exposes,
/// most preferred first.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Request account access.
    ///
    /// Fails with [`WalletError::Unavailable`] when no wallet answers and with
    /// [`WalletError::Rejected`] when the user declines.
    async fn request_accounts(&self) -> Result<Vec<String>, WalletError>;
}

/// Token balance and metadata provider (a remote indexing API).
#[async_trait]
pub trait TokenDataProvider: Send + Sync {
    /// All fungible token balances held by `address`, in provider order.
    ///
    /// Entries may carry a zero balance; filtering is the caller's job.
    /// `truncated` reports that the provider's listing was cut short.
    async fn get_token_balances(&self, address: &str) -> Result<TokenBalances, ProviderError>;

    /// Descriptive metadata for one token contract.
    async fn get_token_metadata(&self, contract_address: &str) -> Result<TokenMetadata, ProviderError>;
}
