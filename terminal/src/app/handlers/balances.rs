//! # Balance Handlers
//!
//! The explicit "check balances" trigger and the hide action.

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::app::tasks;
use crate::core::service::TokenDataProvider;
use crate::utils::validation::validate_address;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

/// Run a balance query for the current address.
///
/// The guard is synchronous: an empty address resets to Idle and an
/// invalid one goes straight to Invalid, neither touches the network.
/// Otherwise the view enters Fetching before the task is spawned.
/// Returns whether a task was spawned.
pub(crate) fn handle_check_balances_click(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    provider: Arc<dyn TokenDataProvider>,
) -> bool {
    let (generation, address) = {
        let mut state = state.write();
        let address = state.address.clone();

        if address.is_empty() {
            state.view.reset();
            tracing::debug!("Balance query skipped: no address");
            return false;
        }

        let validation = validate_address(&address);
        if !validation.is_valid {
            state.view.mark_invalid();
            tracing::info!(
                reason = validation.error.as_deref().unwrap_or("invalid"),
                "Balance query rejected"
            );
            return false;
        }

        (state.view.begin_fetch(), address)
    };

    tracing::info!(
        address = %shared::truncate_address(&address),
        generation,
        "Balance query started"
    );
    tasks::balances::spawn_balance_query(provider, event_tx, generation, address);
    true
}

/// Hide the result panel; the address is kept.
pub(crate) fn handle_hide_results_click(state: Arc<RwLock<AppState>>) {
    state.write().view.reset();
}
