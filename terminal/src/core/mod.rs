//! # Core Abstractions
//!
//! Core traits, error types and configuration shared by the app and service layers.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error types (`AppError`, `ProviderError`, `Result<T>`)
//! - **[`service`]**: Provider traits for dependency injection (`WalletProvider`, `TokenDataProvider`)
//! - **[`config`]**: Environment configuration (`AppConfig`, `Network`)
//!
//! ## Dependency Injection
//!
//! The app never reaches for a process-wide wallet or indexer handle. Both are
//! passed in as trait objects when the [`crate::app::App`] is built:
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tokenscope::app::App;
//! use tokenscope::core::config::Network;
//! use tokenscope::core::service::{TokenDataProvider, WalletProvider};
//!
//! // In production: JSON-RPC clients
//! let config = tokenscope::core::config::AppConfig::from_env()?;
//! let app = App::new(&config)?;
//!
//! // In tests: mock implementations
//! let wallet: Arc<dyn WalletProvider> = Arc::new(MockWallet::default());
//! let tokens: Arc<dyn TokenDataProvider> = Arc::new(MockIndexer::default());
//! let app = App::with_services(Network::EthMainnet, wallet, tokens);
//! ```

pub mod config;
pub mod error;
pub mod service;

pub use config::{AppConfig, Network};
pub use error::{AppError, ProviderError, Result};
pub use service::{TokenDataProvider, WalletProvider};
