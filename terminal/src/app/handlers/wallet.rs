//! # Wallet Handlers
//!
//! Handler for the connect wallet button.

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::app::tasks;
use crate::core::service::WalletProvider;
use crate::services::wallet::WalletStatus;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

/// Handle wallet connect button click
///
/// Internal handler function - use [`crate::app::App::handle_wallet_connect_click`] instead.
/// Returns whether a request task was spawned.
pub(crate) fn handle_wallet_connect_click(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    wallet: Arc<dyn WalletProvider>,
) -> bool {
    {
        let mut state = state.write();
        if state.wallet.is_connecting() {
            tracing::debug!("Wallet request already pending");
            return false;
        }
        state.wallet = WalletStatus::Connecting;
    }

    tracing::info!("Requesting wallet accounts");
    tasks::wallet::request_wallet_account(wallet, event_tx);
    true
}
