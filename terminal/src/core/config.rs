//! # Application Configuration
//!
//! Configuration loaded from environment variables (a `.env` file is honored
//! by the binary through `dotenvy`). The core treats the values as opaque:
//! the API key and network only shape the indexer endpoint URL.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `ALCHEMY_API_KEY` | required | Indexer API credential |
//! | `TOKENSCOPE_NETWORK` | `eth-mainnet` | Target network |
//! | `WALLET_RPC_URL` | `http://127.0.0.1:1248` | JSON-RPC wallet endpoint |
//! | `TOKENSCOPE_HTTP_TIMEOUT_SECS` | `10` | Per-request HTTP timeout |

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use lib_utils::envs::{get_env, get_env_opt, get_env_parse_or};

use crate::core::error::{AppError, Result};

/// Default wallet endpoint (Frame exposes its provider here).
pub const DEFAULT_WALLET_RPC_URL: &str = "http://127.0.0.1:1248";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Networks served by the indexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Network {
    #[default]
    EthMainnet,
    EthSepolia,
    PolygonMainnet,
    ArbitrumMainnet,
    OptimismMainnet,
    BaseMainnet,
}

impl Network {
    pub fn all() -> &'static [Network] {
        &[
            Network::EthMainnet,
            Network::EthSepolia,
            Network::PolygonMainnet,
            Network::ArbitrumMainnet,
            Network::OptimismMainnet,
            Network::BaseMainnet,
        ]
    }

    /// Indexer host prefix, e.g. `eth-mainnet` in `eth-mainnet.g.alchemy.com`.
    pub fn slug(&self) -> &'static str {
        match self {
            Network::EthMainnet => "eth-mainnet",
            Network::EthSepolia => "eth-sepolia",
            Network::PolygonMainnet => "polygon-mainnet",
            Network::ArbitrumMainnet => "arb-mainnet",
            Network::OptimismMainnet => "opt-mainnet",
            Network::BaseMainnet => "base-mainnet",
        }
    }

    /// Human-readable name for the header.
    pub fn title(&self) -> &'static str {
        match self {
            Network::EthMainnet => "Ethereum",
            Network::EthSepolia => "Sepolia",
            Network::PolygonMainnet => "Polygon",
            Network::ArbitrumMainnet => "Arbitrum One",
            Network::OptimismMainnet => "OP Mainnet",
            Network::BaseMainnet => "Base",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for Network {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "eth-mainnet" | "mainnet" | "ethereum" | "eth" => Ok(Network::EthMainnet),
            "eth-sepolia" | "sepolia" => Ok(Network::EthSepolia),
            "polygon-mainnet" | "polygon" | "matic" => Ok(Network::PolygonMainnet),
            "arb-mainnet" | "arbitrum" => Ok(Network::ArbitrumMainnet),
            "opt-mainnet" | "optimism" => Ok(Network::OptimismMainnet),
            "base-mainnet" | "base" => Ok(Network::BaseMainnet),
            other => Err(AppError::Config(format!("Unsupported network: {}", other))),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Clone)]
pub struct AppConfig {
    /// Indexer API credential
    pub api_key: String,
    /// Target network
    pub network: Network,
    /// JSON-RPC wallet endpoint
    pub wallet_rpc_url: String,
    /// Per-request HTTP timeout for both clients
    pub http_timeout: Duration,
}

// The API key must never reach the log files.
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"<redacted>")
            .field("network", &self.network)
            .field("wallet_rpc_url", &self.wallet_rpc_url)
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from environment variables and validate it.
    pub fn from_env() -> Result<Self> {
        let api_key = get_env("ALCHEMY_API_KEY")?;

        let network = match get_env_opt("TOKENSCOPE_NETWORK") {
            Some(value) => value.parse()?,
            None => Network::default(),
        };

        let wallet_rpc_url =
            get_env_opt("WALLET_RPC_URL").unwrap_or_else(|| DEFAULT_WALLET_RPC_URL.to_string());

        let timeout_secs: u64 =
            get_env_parse_or("TOKENSCOPE_HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)?;

        let config = Self {
            api_key: api_key.trim().to_string(),
            network,
            wallet_rpc_url,
            http_timeout: Duration::from_secs(timeout_secs),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(AppError::Config("ALCHEMY_API_KEY must not be empty".to_string()));
        }

        if self.http_timeout.is_zero() {
            return Err(AppError::Config(
                "TOKENSCOPE_HTTP_TIMEOUT_SECS must be at least 1".to_string(),
            ));
        }

        if !self.wallet_rpc_url.starts_with("http://") && !self.wallet_rpc_url.starts_with("https://") {
            return Err(AppError::Config(format!(
                "WALLET_RPC_URL must be an http(s) URL, got {}",
                self.wallet_rpc_url
            )));
        }

        Ok(())
    }

    /// Indexer JSON-RPC endpoint for the configured network.
    pub fn indexer_url(&self) -> String {
        format!("https://{}.g.alchemy.com/v2/{}", self.network.slug(), self.api_key)
    }
}
