//! # Token Indexer Client Module
//!
//! JSON-RPC client for the token indexing API (Alchemy Token API).
//! Provides the two reads the balance query needs.
//!
//! ## Module Structure
//!
//! ```text
//! indexer/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - IndexerClient struct and the JSON-RPC call helper
//! └── tokens.rs   - Token endpoints (balances, metadata) and domain records
//! ```

pub mod client;
pub mod tokens;

pub use client::IndexerClient;
pub use tokens::{BalanceEntry, TokenBalances, TokenHolding, TokenMetadata};
