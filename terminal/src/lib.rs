//! # tokenscope - Library Root
//!
//! A native desktop client that lists the ERC-20 tokens an address holds,
//! with balances formatted in whole-token units. This library crate contains
//! all modules used by the binary crate (`main.rs`).
//!
//! ## Features
//!
//! - **Address entry or wallet connect**: paste an address or ask a JSON-RPC
//!   wallet (`eth_requestAccounts`) for one
//! - **Address validation**: `0x` + 40 hex digits, EIP-55 checksum for mixed case
//! - **Two-stage query**: one balance call, then concurrent metadata lookups
//!   joined all-or-nothing
//! - **Last trigger wins**: stale results are discarded by generation token
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              tokenscope (this crate)                   │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe - Immediate-mode GUI                    │
//! │  Tokio         - Async runtime                         │
//! │  Reqwest       - HTTP client                           │
//! │  tracing       - Structured file logging               │
//! └────────────────────────────────────────────────────────┘
//!          │                              │
//!          │ HTTPS JSON-RPC               │ HTTP JSON-RPC
//!          ▼                              ▼
//! ┌─────────────────┐          ┌─────────────────────────┐
//! │  Token indexer  │          │   Local wallet          │
//! │  (Alchemy)      │          │   (Frame, port 1248)    │
//! └─────────────────┘          └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: State machine, event channel, handlers and async tasks
//! - **core**: Errors, provider traits, configuration
//! - **services**: Indexer and wallet JSON-RPC clients
//! - **ui**: egui screens, widgets and theme
//! - **debug**: Logging setup
//! - **utils**: Address validation, runtime construction
//!
//! ## Event-Driven Architecture
//!
//! ```text
//! User Action → Handler → tokio::spawn → Provider call
//!                                            │
//!                                            ▼
//! UI render ← State update ← on_tick() ← AppEvent
//! ```
//!
//! Handlers and `on_tick` run on the UI thread; tasks only send events.
//!
//! ## Headless Use
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tokenscope::app::App;
//! use tokenscope::core::config::{AppConfig, Network};
//! use tokenscope::services::indexer::IndexerClient;
//! use tokenscope::services::wallet::JsonRpcWallet;
//!
//! # async fn run() -> tokenscope::Result<()> {
//! let config = AppConfig::from_env()?;
//! let mut app = App::with_services(
//!     Network::EthMainnet,
//!     Arc::new(JsonRpcWallet::new(&config)?),
//!     Arc::new(IndexerClient::new(&config)?),
//! );
//! app.handle_address_input("0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045".to_string());
//! app.handle_check_balances_click();
//! app.next_event().await;
//! for holding in app.state.read().visible_holdings() {
//!     println!("{}", holding.display_amount());
//! }
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod core;
pub mod debug;
pub mod services;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use app::{App, AppEvent, AppState, BalanceReport, BalanceView, ViewStatus};
pub use crate::core::{AppConfig, AppError, Network, Result};
pub use services::indexer::{BalanceEntry, TokenBalances, TokenHolding, TokenMetadata};
