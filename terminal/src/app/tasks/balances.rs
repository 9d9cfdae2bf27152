//! # Balance Query Tasks
//!
//! The two-stage balance query: one balance call, then one metadata call
//! per held token, all in flight at once.

use crate::app::events::AppEvent;
use crate::app::state::BalanceReport;
use crate::core::error::ProviderError;
use crate::core::service::TokenDataProvider;
use crate::services::indexer::{BalanceEntry, TokenHolding};
use async_channel::Sender;
use futures::future::try_join_all;
use std::sync::Arc;
use std::time::Instant;
use tokio::spawn;

/// Spawn a balance query and report it tagged with `generation`.
pub(crate) fn spawn_balance_query(
    provider: Arc<dyn TokenDataProvider>,
    event_tx: Sender<AppEvent>,
    generation: u64,
    address: String,
) {
    spawn(async move {
        let started = Instant::now();
        let result = run_balance_query(provider.as_ref(), &address).await;

        match &result {
            Ok(report) => tracing::debug!(
                generation,
                holdings = report.holdings.len(),
                truncated = report.truncated,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Balance query finished"
            ),
            Err(err) => tracing::warn!(
                generation,
                error = %err,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Balance query failed"
            ),
        }

        let event = AppEvent::BalanceQueryResult { generation, address, result };
        if event_tx.send(event).await.is_err() {
            tracing::warn!(generation, "Event channel closed before balance result was delivered");
        }
    });
}

/// Query balances for `address` and join them with token metadata.
///
/// Zero balances are dropped in provider order. An empty report means the
/// address holds nothing. A failing metadata lookup fails the whole query.
pub async fn run_balance_query(
    provider: &dyn TokenDataProvider,
    address: &str,
) -> Result<BalanceReport, ProviderError> {
    let balances = provider.get_token_balances(address).await?;
    let truncated = balances.truncated;
    let held = retain_positive(balances.entries);
    if held.is_empty() {
        return Ok(BalanceReport { holdings: Vec::new(), truncated });
    }

    let metadata = try_join_all(
        held.iter()
            .map(|entry| provider.get_token_metadata(&entry.contract_address)),
    )
    .await?;

    let holdings = held
        .into_iter()
        .zip(metadata)
        .map(|(balance, metadata)| TokenHolding { balance, metadata })
        .collect();
    Ok(BalanceReport { holdings, truncated })
}

fn retain_positive(entries: Vec<BalanceEntry>) -> Vec<BalanceEntry> {
    entries.into_iter().filter(BalanceEntry::is_positive).collect()
}
