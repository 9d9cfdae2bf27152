//! # Common Error Types
//!
//! Consolidated error handling for the client.
//!
//! ## Error Categories
//!
//! - **[`ProviderError`]**: the token indexer failed (network, HTTP status, JSON-RPC
//!   error object, undecodable payload). Every variant is recoverable: a failed
//!   query ends in a re-triggerable status and nothing else is affected.
//! - **[`crate::services::wallet::WalletError`]**: the wallet endpoint is unreachable
//!   or the user declined the account request.
//! - **[`AppError`]**: everything that can fail while assembling the app
//!   (configuration, client construction) plus wrappers for the two above.
//!
//! Address validation failures are not errors here. They are a view status
//! (`ViewStatus::Invalid`) decided synchronously before any I/O.

use thiserror::Error;

use crate::services::wallet::WalletError;

/// Failure reported by the token data provider.
///
/// `Clone` because results travel through the app event channel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// Transport failure: connection refused, DNS, TLS, or client-side timeout.
    #[error("Network error: {0}")]
    Network(String),

    /// The indexer answered with a non-success HTTP status.
    #[error("Indexer returned HTTP {status}")]
    Http { status: u16 },

    /// The indexer answered with a JSON-RPC error object.
    #[error("Indexer error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// The response body did not match the expected shape.
    #[error("Failed to parse indexer response: {0}")]
    Decode(String),
}

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or malformed configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Wallet endpoint failure.
    #[error("Wallet error: {0}")]
    Wallet(#[from] WalletError),

    /// Token indexer failure.
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// HTTP client could not be built (TLS backend, proxy settings).
    #[error("HTTP client error: {0}")]
    Http(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<lib_utils::envs::Error> for AppError {
    fn from(err: lib_utils::envs::Error) -> Self {
        AppError::Config(err.to_string())
    }
}
