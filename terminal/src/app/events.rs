//! # Application Events
//!
//! Event types for async task communication between background tasks and the main thread.

use crate::core::error::ProviderError;
use crate::app::state::BalanceReport;
use crate::services::wallet::WalletError;

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Wallet answered the account request (first account, checksummed)
    WalletAccountResult(Result<String, WalletError>),
    /// Balance query finished
    BalanceQueryResult {
        /// Generation token handed out when the query started
        generation: u64,
        /// Address the query ran for
        address: String,
        result: Result<BalanceReport, ProviderError>,
    },
}
