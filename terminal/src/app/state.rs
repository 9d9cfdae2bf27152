//! # Application State Types
//!
//! All state-related types for the application: the subject address, the
//! balance view state machine, and the wallet connection line.

use crate::core::config::Network;
use crate::core::error::ProviderError;
use crate::services::indexer::TokenHolding;
use crate::services::wallet::WalletStatus;

/// What the balance panel shows. Exactly one is active.
///
/// ```text
/// Idle ──trigger──▶ Fetching ──▶ Loaded | NotFound | Failed
///   ▲   └─invalid──▶ Invalid
///   └──────── address edit / hide ────────┘
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewStatus {
    /// Nothing requested for the current address
    #[default]
    Idle,
    /// Query in flight
    Fetching,
    /// Trigger rejected by the address guard
    Invalid,
    /// Address holds no token with a positive balance
    NotFound,
    /// Holdings published
    Loaded,
    /// A provider call failed
    Failed(String),
}

impl ViewStatus {
    pub fn title(&self) -> &'static str {
        match self {
            ViewStatus::Idle => "Idle",
            ViewStatus::Fetching => "Fetching",
            ViewStatus::Invalid => "Invalid address",
            ViewStatus::NotFound => "No tokens found",
            ViewStatus::Loaded => "Loaded",
            ViewStatus::Failed(_) => "Query failed",
        }
    }

    pub fn is_fetching(&self) -> bool {
        matches!(self, ViewStatus::Fetching)
    }
}

/// Outcome of one successful balance query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BalanceReport {
    /// Non-zero holdings in provider order
    pub holdings: Vec<TokenHolding>,
    /// The provider listing was cut short; more tokens may exist
    pub truncated: bool,
}

impl From<Vec<TokenHolding>> for BalanceReport {
    fn from(holdings: Vec<TokenHolding>) -> Self {
        Self { holdings, truncated: false }
    }
}

/// Balance view state machine.
///
/// Every trigger and every reset advances `generation`; a query result is
/// only applied when it carries the current generation and the view is still
/// fetching. Fields are private so transitions go through the methods below.
#[derive(Debug, Clone, Default)]
pub struct BalanceView {
    status: ViewStatus,
    holdings: Vec<TokenHolding>,
    truncated: bool,
    generation: u64,
}

impl BalanceView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &ViewStatus {
        &self.status
    }

    pub fn holdings(&self) -> &[TokenHolding] {
        &self.holdings
    }

    /// Whether the published result is a partial listing.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Back to Idle. Any in-flight query becomes stale.
    ///
    /// Holdings are kept; they are only shown while Loaded and the next
    /// query replaces them.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.status = ViewStatus::Idle;
    }

    /// Trigger rejected by the address guard.
    pub fn mark_invalid(&mut self) {
        self.generation += 1;
        self.status = ViewStatus::Invalid;
    }

    /// Start a query and return its generation token.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.status = ViewStatus::Fetching;
        self.generation
    }

    /// Apply a finished query.
    ///
    /// Returns `false` (and changes nothing) for a stale generation or when
    /// the view is no longer fetching.
    pub fn apply_result(
        &mut self,
        generation: u64,
        result: Result<BalanceReport, ProviderError>,
    ) -> bool {
        if generation != self.generation || !self.status.is_fetching() {
            return false;
        }

        match result {
            Ok(report) if report.holdings.is_empty() => {
                self.holdings.clear();
                self.truncated = report.truncated;
                self.status = ViewStatus::NotFound;
            }
            Ok(report) => {
                self.holdings = report.holdings;
                self.truncated = report.truncated;
                self.status = ViewStatus::Loaded;
            }
            Err(err) => {
                self.status = ViewStatus::Failed(err.to_string());
            }
        }
        true
    }
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Subject address, raw as typed or as returned by the wallet
    pub address: String,
    /// Balance panel state machine
    pub view: BalanceView,
    /// Wallet connection line, independent of the view
    pub wallet: WalletStatus,
    /// Network the indexer is queried on
    pub network: Network,
}

impl AppState {
    pub fn new(network: Network) -> Self {
        Self {
            network,
            ..Self::default()
        }
    }

    /// Replace the address. The view resets only when it actually changed.
    pub fn replace_address(&mut self, address: String) -> bool {
        if self.address == address {
            return false;
        }
        self.address = address;
        self.view.reset();
        true
    }

    /// Holdings to render; empty unless the view is Loaded.
    pub fn visible_holdings(&self) -> &[TokenHolding] {
        match self.view.status() {
            ViewStatus::Loaded => self.view.holdings(),
            _ => &[],
        }
    }
}
