//! # UI Widgets
//!
//! Reusable components shared by the screens.

pub mod forms;
pub mod layouts;
pub mod status_bar;
pub mod token_card;
