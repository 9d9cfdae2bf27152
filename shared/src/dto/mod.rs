//! # Data Transfer Objects (DTOs)
//!
//! Structures exchanged with the token indexer and the wallet endpoint.
//!
//! ## Module Organization
//!
//! - [`rpc`] - JSON-RPC 2.0 envelopes used by both collaborators
//! - [`tokens`] - Token balance and token metadata payloads
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /v2/<api-key>
//! Content-Type: application/json
//!
//! {"jsonrpc":"2.0","id":1,"method":"alchemy_getTokenBalances",
//!  "params":["0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045","erc20"]}
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "jsonrpc": "2.0",
//!   "id": 1,
//!   "result": {
//!     "address": "0xd8da6bf26964af9d7eed9e03e53415d37aa96045",
//!     "tokenBalances": [
//!       {"contractAddress": "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
//!        "tokenBalance": "0x00000000000000000000000000000000000000000000000000000000000f4240"}
//!     ]
//!   }
//! }
//! ```

pub mod rpc;
pub mod tokens;

pub use rpc::*;
pub use tokens::*;
