//! # Wallet Service
//!
//! Connects to an EIP-1193 style wallet that exposes its provider over
//! JSON-RPC (Frame listens on `http://127.0.0.1:1248` by default) and asks
//! it for the user's accounts.
//!
//! ## Features
//! - Account request (`eth_requestAccounts`)
//! - Mapping of transport failures and user rejection to [`WalletError`]
//! - Connection status for the wallet status line

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use reqwest::Client;
use shared::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
use thiserror::Error;

use crate::core::config::AppConfig;
use crate::core::error::AppError;
use crate::core::service::WalletProvider;

/// EIP-1193 "User Rejected Request"
pub const USER_REJECTED_CODE: i64 = 4001;

/// Wallet connection errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// No wallet answered, or it answered with something unusable
    #[error("Wallet unavailable: {0}")]
    Unavailable(String),
    /// The user declined the account request
    #[error("Wallet request rejected")]
    Rejected,
}

/// Wallet connection status
#[derive(Debug, Clone, PartialEq, Default)]
pub enum WalletStatus {
    /// Not connected
    #[default]
    Disconnected,
    /// Connected with wallet address
    Connected(String),
    /// Connecting in progress
    Connecting,
    /// Error state with message
    Error(String),
}

impl WalletStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletStatus::Connected(_))
    }

    pub fn is_connecting(&self) -> bool {
        matches!(self, WalletStatus::Connecting)
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            WalletStatus::Connected(addr) => Some(addr),
            _ => None,
        }
    }
}

/// Wallet reached over JSON-RPC.
pub struct JsonRpcWallet {
    client: Client,
    endpoint: String,
    next_id: AtomicU64,
}

impl JsonRpcWallet {
    /// Create a wallet client for the configured endpoint.
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        Self::with_endpoint(config.wallet_rpc_url.clone(), config.http_timeout)
    }

    pub fn with_endpoint(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Http(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            next_id: AtomicU64::new(1),
        })
    }
}

#[async_trait::async_trait]
impl WalletProvider for JsonRpcWallet {
    async fn request_accounts(&self) -> Result<Vec<String>, WalletError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = JsonRpcRequest::new(id, "eth_requestAccounts", Vec::<String>::new());

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| WalletError::Unavailable(format!("Network error: {}", e.without_url())))?;

        if !response.status().is_success() {
            return Err(WalletError::Unavailable(format!(
                "Wallet endpoint returned {}",
                response.status()
            )));
        }

        let envelope = response
            .json::<JsonRpcResponse<Vec<String>>>()
            .await
            .map_err(|e| WalletError::Unavailable(format!("Failed to parse response: {}", e.without_url())))?;

        match envelope.into_result() {
            Ok(accounts) => Ok(accounts.unwrap_or_default()),
            Err(error) => Err(map_rpc_error(error)),
        }
    }
}

fn map_rpc_error(error: JsonRpcError) -> WalletError {
    if error.code == USER_REJECTED_CODE {
        WalletError::Rejected
    } else {
        WalletError::Unavailable(error.message)
    }
}
