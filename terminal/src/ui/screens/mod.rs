//! # Screens
//!
//! Full-window views. The client has a single screen.

pub mod balances;
