//! # Address Handlers
//!
//! Keystroke input for the subject address.

use crate::app::state::AppState;
use parking_lot::RwLock;
use std::sync::Arc;

/// Store raw input verbatim and reset the view.
///
/// No validation happens here; any in-flight query becomes stale.
pub(crate) fn handle_address_input(state: Arc<RwLock<AppState>>, raw: String) {
    let mut state = state.write();
    state.address = raw;
    state.view.reset();
}
