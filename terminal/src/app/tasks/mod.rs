//! # Async Tasks
//!
//! Background work for wallet requests and balance queries. Tasks never
//! touch [`crate::app::AppState`]; they report through the event channel.

pub mod balances;
pub mod wallet;
