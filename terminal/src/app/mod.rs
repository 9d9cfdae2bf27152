//! # Application Orchestrator
//!
//! The main [`App`] struct coordinates the UI rendering layer, async tasks
//! and application state.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                                  │   │
//! │  │  - on_tick() - drains async results every frame      │   │
//! │  │  - handle_*() - user action handlers                 │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │                                             │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                        │   │
//! │  │  - address, balance view, wallet status              │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Async Task Threads (Tokio)                     │
//! │  - request_wallet_account()  - eth_requestAccounts          │
//! │  - spawn_balance_query()     - balances + metadata fan-out  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Components
//!
//! - **[`App`]**: Main application orchestrator with event handling
//! - **[`AppState`]**: Address, [`BalanceView`] and wallet line (see [`state`] module)
//! - **[`AppEvent`]**: Event enum for async task results (see [`events`] module)
//!
//! ## State Ownership
//!
//! Handlers mutate state synchronously on the caller's thread. Tasks never
//! lock the state; they send an [`AppEvent`] and the event is applied when
//! the channel is drained by [`App::on_tick`] or [`App::next_event`]. A
//! balance result carries the generation token it was started with and is
//! dropped when a newer trigger or an address edit has happened since.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use tokenscope::app::App;
//! use tokenscope::core::config::AppConfig;
//!
//! let config = AppConfig::from_env()?;
//! let mut app = App::new(&config)?;
//!
//! app.handle_address_input("0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045".to_string());
//! app.handle_check_balances_click();
//!
//! // In the egui update loop:
//! app.on_tick();
//! # Ok::<(), tokenscope::core::error::AppError>(())
//! ```

mod app_trait;
mod event_handler;
mod events;
mod handlers;
mod state;
mod tasks;

pub use app_trait::AppLike;
pub use events::AppEvent;
pub use state::*;
pub use tasks::balances::run_balance_query;
pub use tasks::wallet::first_account;

use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;

use crate::app::event_handler::AppEventHandler;
use crate::core::config::{AppConfig, Network};
use crate::core::error::Result;
use crate::core::service::{TokenDataProvider, WalletProvider};
use crate::services::indexer::IndexerClient;
use crate::services::wallet::JsonRpcWallet;

/// Main application orchestrator.
///
/// Owns the shared state, the event channel and the two injected providers.
pub struct App {
    /// Thread-safe shared application state.
    ///
    /// Hold locks for minimal duration; the UI reads it every frame.
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for async task results.
    pub event_rx: Receiver<AppEvent>,

    /// Channel sender, cloned into each spawned task.
    event_tx: Sender<AppEvent>,

    wallet: Arc<dyn WalletProvider>,
    tokens: Arc<dyn TokenDataProvider>,

    /// Spawned tasks whose event has not been handled yet.
    in_flight: usize,
}

impl App {
    /// Create the application with JSON-RPC wallet and indexer clients.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let wallet: Arc<dyn WalletProvider> = Arc::new(JsonRpcWallet::new(config)?);
        let tokens: Arc<dyn TokenDataProvider> = Arc::new(IndexerClient::new(config)?);

        tracing::info!(
            network = %config.network,
            wallet_rpc_url = %config.wallet_rpc_url,
            "App initialized"
        );
        Ok(Self::with_services(config.network, wallet, tokens))
    }

    /// Create the application with explicit providers.
    pub fn with_services(
        network: Network,
        wallet: Arc<dyn WalletProvider>,
        tokens: Arc<dyn TokenDataProvider>,
    ) -> Self {
        let (event_tx, event_rx) = unbounded();

        Self {
            state: Arc::new(RwLock::new(AppState::new(network))),
            event_rx,
            event_tx,
            wallet,
            tokens,
            in_flight: 0,
        }
    }

    /// Called every frame: applies every pending async result without blocking.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Wait for the next async result and apply it.
    ///
    /// Headless hosts and tests use this instead of `on_tick`. Returns
    /// `false` without waiting when every spawned task has already reported,
    /// so `while app.next_event().await {}` ends once the work is done.
    pub async fn next_event(&mut self) -> bool {
        if self.in_flight == 0 && self.event_rx.is_empty() {
            return false;
        }

        match self.event_rx.recv().await {
            Ok(event) => {
                self.handle_event(event);
                true
            }
            Err(_) => false,
        }
    }

    /// Apply one event to the state.
    pub fn handle_event(&mut self, event: AppEvent) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.handle_event_impl(event);
    }

    /// Whether an async request is outstanding (the UI keeps repainting).
    pub fn has_pending_work(&self) -> bool {
        let state = self.state.read();
        state.view.status().is_fetching() || state.wallet.is_connecting()
    }

    /// Address input changed: store it verbatim and reset the view.
    pub fn handle_address_input(&mut self, raw: String) {
        handlers::address::handle_address_input(self.state.clone(), raw);
    }

    /// Ask the wallet for an account; the result replaces the address.
    pub fn handle_wallet_connect_click(&mut self) {
        if handlers::wallet::handle_wallet_connect_click(
            self.state.clone(),
            self.event_tx.clone(),
            self.wallet.clone(),
        ) {
            self.in_flight += 1;
        }
    }

    /// Explicit trigger for a balance query on the current address.
    pub fn handle_check_balances_click(&mut self) {
        if handlers::balances::handle_check_balances_click(
            self.state.clone(),
            self.event_tx.clone(),
            self.tokens.clone(),
        ) {
            self.in_flight += 1;
        }
    }

    /// Hide results and return to Idle.
    pub fn handle_hide_results_click(&mut self) {
        handlers::balances::handle_hide_results_click(self.state.clone());
    }
}

impl AppLike for App {
    fn state(&self) -> &Arc<RwLock<AppState>> {
        &self.state
    }

    fn handle_address_input(&mut self, raw: String) {
        App::handle_address_input(self, raw);
    }

    fn handle_wallet_connect_click(&mut self) {
        App::handle_wallet_connect_click(self);
    }

    fn handle_check_balances_click(&mut self) {
        App::handle_check_balances_click(self);
    }

    fn handle_hide_results_click(&mut self) {
        App::handle_hide_results_click(self);
    }
}
