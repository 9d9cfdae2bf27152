//! # Status Bar Widget
//!
//! Bottom status bar: network, wallet connection line, view status.

use egui;
use crate::app::AppState;
use crate::services::wallet::WalletStatus;
use crate::ui::theme::Theme;

/// Render status bar at bottom
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    let theme = Theme::default();

    ui.horizontal(|ui| {
        ui.label(format!("Network: {}", state.network.title()));
        ui.separator();

        ui.colored_label(theme.wallet_status_color(&state.wallet), wallet_line(&state.wallet));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let status = state.view.status();
            ui.colored_label(theme.view_status_color(status), status.title());
            if let Some(count) = holdings_label(state) {
                ui.separator();
                ui.label(count);
            }
        });
    });
}

/// Token count for the status bar; `+` marks a truncated listing
pub fn holdings_label(state: &AppState) -> Option<String> {
    let holdings = state.visible_holdings();
    if holdings.is_empty() {
        return None;
    }
    let more = if state.view.is_truncated() { "+" } else { "" };
    Some(format!("{}{} tokens", holdings.len(), more))
}

/// Text of the wallet status line
pub fn wallet_line(status: &WalletStatus) -> String {
    match status {
        WalletStatus::Disconnected => "Wallet: not connected".to_string(),
        WalletStatus::Connecting => "Wallet: waiting for approval...".to_string(),
        WalletStatus::Connected(address) => format!("Wallet: {}", shared::truncate_address(address)),
        WalletStatus::Error(reason) => format!("Wallet: {}", reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::BalanceReport;
    use crate::services::indexer::{BalanceEntry, TokenHolding, TokenMetadata};

    #[test]
    fn test_wallet_line() {
        assert_eq!(wallet_line(&WalletStatus::Disconnected), "Wallet: not connected");
        assert_eq!(
            wallet_line(&WalletStatus::Connected(
                "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045".to_string()
            )),
            "Wallet: 0xd8dA...6045"
        );
        assert_eq!(
            wallet_line(&WalletStatus::Error("Wallet request rejected".to_string())),
            "Wallet: Wallet request rejected"
        );
    }

    #[test]
    fn test_holdings_label_marks_truncation() {
        let holding = TokenHolding {
            balance: BalanceEntry::new("0x1", 5u64),
            metadata: TokenMetadata::default(),
        };
        let mut state = AppState::default();
        assert_eq!(holdings_label(&state), None);

        let generation = state.view.begin_fetch();
        state.view.apply_result(generation, Ok(vec![holding.clone()].into()));
        assert_eq!(holdings_label(&state).as_deref(), Some("1 tokens"));

        let generation = state.view.begin_fetch();
        let report = BalanceReport { holdings: vec![holding], truncated: true };
        state.view.apply_result(generation, Ok(report));
        assert_eq!(holdings_label(&state).as_deref(), Some("1+ tokens"));
    }
}
