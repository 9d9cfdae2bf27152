//! # Shared Data Transfer Objects Library
//!
//! Wire types and small display helpers shared by the workspace crates.
//! The terminal speaks JSON-RPC 2.0 to two external collaborators (the token
//! indexer and the wallet endpoint); the envelopes and payloads live here so
//! that decoding stays separate from the client's domain types.
//!
//! ## Structure
//!
//! - **[`dto`]**: JSON-RPC envelopes and indexer payloads
//!   - **[`dto::rpc`]**: request/response/error envelopes
//!   - **[`dto::tokens`]**: token balance and token metadata payloads
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format account addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//!
//! ## Wire Format
//!
//! The indexer uses camelCase field names, so payload structs carry
//! `#[serde(rename_all = "camelCase")]`. Every field the indexer documents as
//! nullable is an `Option` here; defaulting happens in the client, not in
//! the DTOs.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shared::dto::rpc::{JsonRpcRequest, JsonRpcResponse};
//! use shared::dto::tokens::TokenBalancesResult;
//! use shared::utils::truncate_address;
//!
//! let request = JsonRpcRequest::new(1, "alchemy_getTokenBalances", ("0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045", "erc20"));
//! let body = serde_json::to_string(&request).unwrap();
//!
//! let response: JsonRpcResponse<TokenBalancesResult> = serde_json::from_str(&body_from_server).unwrap();
//! let display = truncate_address(&response.result.unwrap().address);
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: shared is a DTO library and everything here is public API
pub use dto::*;
pub use utils::*;
