//! # App Trait
//!
//! Trait the screen renderers are written against, so they can be driven by
//! the real [`crate::app::App`] or by a recording double in tests.

use std::sync::Arc;
use parking_lot::RwLock;
use crate::app::AppState;

/// Trait for application-like types that screen renderers can use.
pub trait AppLike {
    /// Get access to the application state.
    fn state(&self) -> &Arc<RwLock<AppState>>;

    // Address methods
    fn handle_address_input(&mut self, raw: String);

    // Wallet methods
    fn handle_wallet_connect_click(&mut self);

    // Balance methods
    fn handle_check_balances_click(&mut self);
    fn handle_hide_results_click(&mut self);
}
