//! # Indexer Client
//!
//! HTTP client for the indexer's JSON-RPC endpoint.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{JsonRpcRequest, JsonRpcResponse};

use crate::core::config::AppConfig;
use crate::core::error::{AppError, ProviderError};
use crate::core::service::TokenDataProvider;
use crate::services::indexer::tokens::{self, TokenBalances, TokenMetadata};

/// JSON-RPC client for the token indexer.
///
/// Holds one pooled `reqwest::Client`; cheap to share behind an `Arc`.
/// The endpoint carries the API key, so transport errors are stripped of
/// their URL before they become a [`ProviderError`].
pub struct IndexerClient {
    pub(crate) client: Client,
    endpoint: String,
    next_id: AtomicU64,
}

impl IndexerClient {
    /// Create a client for the configured network and API key.
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        Self::with_endpoint(config.indexer_url(), config.http_timeout)
    }

    /// Create a client against an explicit endpoint URL.
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

    /// Issue one JSON-RPC call and decode its `result`.
    ///
    /// A missing `result` without an `error` is reported as a decode failure.
    pub(crate) async fn call<P, T>(&self, method: &str, params: P) -> Result<T, ProviderError>
    where
        P: Serialize + Send,
        T: DeserializeOwned + Send,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = JsonRpcRequest::new(id, method, params);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(method, status = status.as_u16(), "Indexer returned non-success status");
            return Err(ProviderError::Http { status: status.as_u16() });
        }

        let envelope = response
            .json::<JsonRpcResponse<T>>()
            .await
            .map_err(|e| ProviderError::Decode(e.without_url().to_string()))?;

        match envelope.into_result() {
            Ok(Some(result)) => Ok(result),
            Ok(None) => Err(ProviderError::Decode(format!("{} returned no result", method))),
            Err(rpc) => Err(ProviderError::Rpc { code: rpc.code, message: rpc.message }),
        }
    }
}

#[async_trait::async_trait]
impl TokenDataProvider for IndexerClient {
    async fn get_token_balances(&self, address: &str) -> Result<TokenBalances, ProviderError> {
        tokens::get_token_balances(self, address).await
    }

    async fn get_token_metadata(&self, contract_address: &str) -> Result<TokenMetadata, ProviderError> {
        tokens::get_token_metadata(self, contract_address).await
    }
}
