//! # Event Handler
//!
//! Applies async results from background tasks to the application state.
//!
//! This is the only place task results reach [`crate::app::AppState`]; it
//! runs on whichever control flow drains the event channel.

use crate::app::{App, AppEvent, BalanceReport};
use crate::core::error::ProviderError;
use crate::services::wallet::{WalletError, WalletStatus};

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    /// Handle async event results
    ///
    /// Acquires the write lock per event for minimal duration.
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::WalletAccountResult(result) => {
                self.handle_wallet_account_result(result);
            }
            AppEvent::BalanceQueryResult { generation, address, result } => {
                self.handle_balance_query_result(generation, address, result);
            }
        }
    }
}

impl App {
    fn handle_wallet_account_result(&mut self, result: Result<String, WalletError>) {
        let mut state = self.state.write();
        match result {
            Ok(address) => {
                let changed = state.replace_address(address.clone());
                tracing::info!(
                    address = %shared::truncate_address(&address),
                    address_changed = changed,
                    "Wallet connected"
                );
                state.wallet = WalletStatus::Connected(address);
            }
            Err(err) => {
                // Wallet failures never touch the balance view
                tracing::warn!(error = %err, "Wallet connection failed");
                state.wallet = WalletStatus::Error(err.to_string());
            }
        }
    }

    fn handle_balance_query_result(
        &mut self,
        generation: u64,
        address: String,
        result: Result<BalanceReport, ProviderError>,
    ) {
        let mut state = self.state.write();
        let current = state.view.generation();
        let outcome = match &result {
            Ok(report) if report.truncated => format!("{} holdings (truncated)", report.holdings.len()),
            Ok(report) => format!("{} holdings", report.holdings.len()),
            Err(err) => err.to_string(),
        };

        if state.view.apply_result(generation, result) {
            tracing::info!(
                address = %shared::truncate_address(&address),
                generation,
                status = state.view.status().title(),
                outcome = %outcome,
                "Balance query applied"
            );
        } else {
            tracing::debug!(
                address = %shared::truncate_address(&address),
                generation,
                current_generation = current,
                "Discarding stale balance query result"
            );
        }
    }
}
