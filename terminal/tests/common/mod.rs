//! # Test Doubles
//!
//! In-memory providers that count calls and can hold individual metadata
//! lookups until the test releases them.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::Notify;

use tokenscope::core::error::ProviderError;
use tokenscope::core::service::{TokenDataProvider, WalletProvider};
use tokenscope::services::indexer::{BalanceEntry, TokenBalances, TokenMetadata};
use tokenscope::services::wallet::WalletError;
use tokenscope::{App, Network};

/// Checksummed address used as the query subject
pub const HOLDER: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
/// Another valid address
pub const OTHER_HOLDER: &str = "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359";

/// Holds a call until `open` is called
#[derive(Default)]
pub struct Gate {
    entered: Notify,
    release: Notify,
}

impl Gate {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Resolves once the gated call has started
    pub async fn wait_entered(&self) {
        self.entered.notified().await;
    }

    pub fn open(&self) {
        self.release.notify_one();
    }

    async fn pass(&self) {
        self.entered.notify_one();
        self.release.notified().await;
    }
}

/// Token data provider with scripted responses.
///
/// Balance responses are consumed in order; the last one repeats. Metadata
/// for an unscripted contract is derived from the contract address so that a
/// misaligned join is visible.
#[derive(Default)]
pub struct MockIndexer {
    balances: Mutex<VecDeque<Result<TokenBalances, ProviderError>>>,
    metadata: HashMap<String, Result<TokenMetadata, ProviderError>>,
    gates: HashMap<String, Arc<Gate>>,
    balance_calls: AtomicUsize,
    metadata_calls: AtomicUsize,
}

impl MockIndexer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_balances(self, entries: Vec<BalanceEntry>) -> Self {
        self.balances.lock().push_back(Ok(entries.into()));
        self
    }

    /// Balances whose listing the provider cut short
    pub fn with_truncated_balances(self, entries: Vec<BalanceEntry>) -> Self {
        self.balances.lock().push_back(Ok(TokenBalances { entries, truncated: true }));
        self
    }

    pub fn with_balance_error(self, error: ProviderError) -> Self {
        self.balances.lock().push_back(Err(error));
        self
    }

    pub fn with_metadata(mut self, contract: &str, symbol: &str, decimals: u32) -> Self {
        self.metadata.insert(
            contract.to_string(),
            Ok(TokenMetadata {
                symbol: symbol.to_string(),
                decimals,
                logo_uri: None,
            }),
        );
        self
    }

    pub fn with_metadata_error(mut self, contract: &str, error: ProviderError) -> Self {
        self.metadata.insert(contract.to_string(), Err(error));
        self
    }

    pub fn with_gate(mut self, contract: &str, gate: Arc<Gate>) -> Self {
        self.gates.insert(contract.to_string(), gate);
        self
    }

    pub fn balance_calls(&self) -> usize {
        self.balance_calls.load(Ordering::SeqCst)
    }

    pub fn metadata_calls(&self) -> usize {
        self.metadata_calls.load(Ordering::SeqCst)
    }

    pub fn network_calls(&self) -> usize {
        self.balance_calls() + self.metadata_calls()
    }
}

/// Metadata symbol an unscripted contract resolves to
pub fn derived_symbol(contract: &str) -> String {
    format!("SYM-{}", contract)
}

#[async_trait]
impl TokenDataProvider for MockIndexer {
    async fn get_token_balances(&self, _address: &str) -> Result<TokenBalances, ProviderError> {
        self.balance_calls.fetch_add(1, Ordering::SeqCst);
        let mut scripted = self.balances.lock();
        match scripted.len() {
            0 => Ok(TokenBalances::default()),
            1 => scripted[0].clone(),
            _ => scripted.pop_front().unwrap_or_else(|| Ok(TokenBalances::default())),
        }
    }

    async fn get_token_metadata(&self, contract_address: &str) -> Result<TokenMetadata, ProviderError> {
        self.metadata_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(gate) = self.gates.get(contract_address) {
            gate.pass().await;
        }

        match self.metadata.get(contract_address) {
            Some(result) => result.clone(),
            None => Ok(TokenMetadata {
                symbol: derived_symbol(contract_address),
                decimals: 0,
                logo_uri: None,
            }),
        }
    }
}

/// Wallet provider with a fixed answer
pub struct MockWallet {
    result: Result<Vec<String>, WalletError>,
    calls: AtomicUsize,
}

impl MockWallet {
    pub fn with_accounts(accounts: &[&str]) -> Self {
        Self {
            result: Ok(accounts.iter().map(|a| a.to_string()).collect()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: WalletError) -> Self {
        Self {
            result: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WalletProvider for MockWallet {
    async fn request_accounts(&self) -> Result<Vec<String>, WalletError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

/// Build an app around the given doubles
pub fn test_app(wallet: Arc<MockWallet>, indexer: Arc<MockIndexer>) -> App {
    App::with_services(Network::EthMainnet, wallet, indexer)
}

/// Build an app with a wallet that is never used
pub fn app_with_indexer(indexer: Arc<MockIndexer>) -> App {
    test_app(Arc::new(MockWallet::with_accounts(&[])), indexer)
}

pub fn entry(contract: &str, raw: u64) -> BalanceEntry {
    BalanceEntry::new(contract, raw)
}
