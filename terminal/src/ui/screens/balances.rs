//! # Balances Screen
//!
//! Address input, the primary action, and the result panel driven by
//! [`ViewStatus`].

use egui;
use crate::app::{AppLike, AppState, ViewStatus};
use crate::ui::theme::Theme;
use crate::ui::widgets::{forms, layouts, token_card};

/// Button offered under the address input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryAction {
    ConnectWallet,
    CheckBalances,
}

impl PrimaryAction {
    pub fn label(&self) -> &'static str {
        match self {
            PrimaryAction::ConnectWallet => "Connect wallet",
            PrimaryAction::CheckBalances => "Check ERC-20 token balances",
        }
    }
}

/// Empty address: offer the wallet; otherwise offer the query.
pub fn primary_action(address: &str) -> PrimaryAction {
    if address.is_empty() {
        PrimaryAction::ConnectWallet
    } else {
        PrimaryAction::CheckBalances
    }
}

/// Render balances screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
    let theme = Theme::default();

    layouts::render_centered(ui, 24.0, |ui| {
        forms::render_form_heading(ui, "ERC-20 Token Indexer", &theme);
        forms::render_hint(
            ui,
            "Connect your wallet or paste an address to list every token it holds.",
            &theme,
        );
        ui.add_space(16.0);

        let mut input = state.address.clone();
        let input_width = ui.available_width().min(560.0);
        let response = forms::render_text_input(ui, "Address", &mut input, "0x...", [input_width, 28.0]);
        if response.changed() {
            app.handle_address_input(input);
        }
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        ui.add_space(10.0);

        let action = primary_action(&state.address);
        let busy = match action {
            PrimaryAction::ConnectWallet => state.wallet.is_connecting(),
            PrimaryAction::CheckBalances => state.view.status().is_fetching(),
        };
        let clicked = forms::render_button(
            ui,
            action.label(),
            !busy,
            Some(theme.colors.inactive),
            Some(egui::vec2(260.0, 34.0)),
        )
        .clicked();

        if clicked || (submitted && action == PrimaryAction::CheckBalances) {
            match action {
                PrimaryAction::ConnectWallet => app.handle_wallet_connect_click(),
                PrimaryAction::CheckBalances => app.handle_check_balances_click(),
            }
        }
    });

    ui.add_space(20.0);
    ui.separator();
    ui.add_space(10.0);

    render_results(ui, state, app, &theme);
}

fn render_results(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike, theme: &Theme) {
    match state.view.status() {
        ViewStatus::Idle => {
            forms::render_hint(ui, "Enter an address and run the query.", theme);
        }
        ViewStatus::Fetching => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading balances...");
            });
        }
        ViewStatus::Invalid => {
            forms::render_error(ui, "Please enter a valid address.", theme);
        }
        ViewStatus::NotFound => {
            ui.colored_label(theme.warning, "No ERC-20 tokens with a positive balance found.");
            render_truncation_note(ui, state, theme);
        }
        ViewStatus::Failed(reason) => {
            forms::render_error(ui, &format!("Could not load balances: {}", reason), theme);
            if ui.button("Retry").clicked() {
                app.handle_check_balances_click();
            }
        }
        ViewStatus::Loaded => {
            let holdings = state.visible_holdings();
            ui.horizontal(|ui| {
                ui.heading(format!("ERC-20 token balances ({})", holdings.len()));
                if ui.button("Hide").clicked() {
                    app.handle_hide_results_click();
                }
            });
            render_truncation_note(ui, state, theme);
            ui.add_space(8.0);

            layouts::render_panel(ui, None, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        for holding in holdings {
                            token_card::render_token_card(ui, holding, theme);
                        }
                    });
                });
            });
        }
    }
}

fn render_truncation_note(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    if state.view.is_truncated() {
        forms::render_hint(ui, TRUNCATION_NOTE, theme);
    }
}

/// Shown when the indexer listing was cut at the page limit
const TRUNCATION_NOTE: &str = "Showing the first pages of tokens only; this address holds more.";
