//! # Utility Functions
//!
//! Shared utility functions used across the client.
//!
//! ## Modules
//!
//! - **[`validation`]**: Address validation (format and EIP-55 checksum)
//! - **[`runtime`]**: Tokio runtime construction for the GUI binary
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Cross-crate utilities (address shortening)
//! - [`lib_utils::units`]: Raw amount formatting

pub mod runtime;
pub mod validation;
