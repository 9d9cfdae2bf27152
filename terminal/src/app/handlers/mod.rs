//! # Event Handlers
//!
//! User action handlers organized by domain.

pub mod address;
pub mod balances;
pub mod wallet;
