//! # Services Module
//!
//! External service integrations. Both clients speak JSON-RPC 2.0 over HTTP
//! and implement the provider traits from [`crate::core::service`].
//!
//! ## Module Overview
//!
//! ```text
//! services/
//! ├── indexer/     - Token indexer client
//! │                  (token balances, token metadata)
//! └── wallet.rs    - JSON-RPC wallet client
//!                    (account request, connection status)
//! ```
//!
//! ## Service Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                      tokenscope                         │
//! │                                                         │
//! │  ┌──────────────────┐       ┌──────────────────┐        │
//! │  │  IndexerClient   │       │  JsonRpcWallet   │        │
//! │  │  (indexer/)      │       │  (wallet.rs)     │        │
//! │  └────────┬─────────┘       └────────┬─────────┘        │
//! │           │                          │                  │
//! └───────────┼──────────────────────────┼──────────────────┘
//!             │ HTTPS JSON-RPC           │ HTTP JSON-RPC
//!             ▼                          ▼
//! ┌─────────────────────────┐  ┌─────────────────────────────┐
//! │  Token indexer          │  │  Local wallet               │
//! │  alchemy_getToken-      │  │  eth_requestAccounts        │
//! │    Balances / Metadata  │  │                             │
//! └─────────────────────────┘  └─────────────────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! - Indexer calls return [`crate::core::error::ProviderError`]
//!   (`Network`, `Http`, `Rpc`, `Decode`).
//! - Wallet calls return [`wallet::WalletError`] (`Unavailable`, `Rejected`).
//!
//! ## Thread Safety
//!
//! Both clients wrap a `reqwest::Client` (internally pooled and thread-safe)
//! and are shared across tasks behind `Arc<dyn Trait>`.

pub mod indexer;
pub mod wallet;
