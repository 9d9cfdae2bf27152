//! # Wallet Tasks
//!
//! Async wallet account request.

use crate::app::events::AppEvent;
use crate::core::service::WalletProvider;
use crate::services::wallet::WalletError;
use crate::utils::validation::to_checksum_address;
use async_channel::Sender;
use std::sync::Arc;
use tokio::spawn;

/// Ask the wallet for accounts and report the first one.
pub(crate) fn request_wallet_account(wallet: Arc<dyn WalletProvider>, event_tx: Sender<AppEvent>) {
    spawn(async move {
        let result = first_account(wallet.as_ref()).await;
        if event_tx.send(AppEvent::WalletAccountResult(result)).await.is_err() {
            tracing::warn!("Event channel closed before wallet result was delivered");
        }
    });
}

/// First account the wallet exposes, in checksummed form when it is a
/// well-formed address.
pub async fn first_account(wallet: &dyn WalletProvider) -> Result<String, WalletError> {
    let accounts = wallet.request_accounts().await?;
    let account = accounts
        .into_iter()
        .next()
        .ok_or_else(|| WalletError::Unavailable("Wallet returned no accounts".to_string()))?;

    Ok(to_checksum_address(&account).unwrap_or(account))
}
