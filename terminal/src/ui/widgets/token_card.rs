//! # Token Card Widget
//!
//! One card per held token: logo, symbol, formatted balance, contract.

use egui;
use crate::services::indexer::TokenHolding;
use crate::ui::theme::Theme;

const LOGO_SIZE: f32 = 32.0;
pub const CARD_WIDTH: f32 = 200.0;

/// Render a token card
pub fn render_token_card(ui: &mut egui::Ui, holding: &TokenHolding, theme: &Theme) {
    ui.group(|ui| {
        ui.set_width(CARD_WIDTH);
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                match &holding.metadata.logo_uri {
                    Some(uri) => {
                        ui.add(
                            egui::Image::new(uri.as_str())
                                .fit_to_exact_size(egui::vec2(LOGO_SIZE, LOGO_SIZE)),
                        );
                    }
                    None => {
                        let (rect, _) = ui.allocate_exact_size(
                            egui::vec2(LOGO_SIZE, LOGO_SIZE),
                            egui::Sense::hover(),
                        );
                        ui.painter().circle_filled(rect.center(), LOGO_SIZE / 2.0, theme.colors.inactive);
                    }
                }

                let symbol = if holding.metadata.symbol.is_empty() {
                    "?"
                } else {
                    holding.metadata.symbol.as_str()
                };
                ui.label(egui::RichText::new(symbol).size(18.0).strong().color(theme.selected));
            });

            ui.add_space(4.0);
            ui.label(egui::RichText::new(holding.formatted_balance()).monospace().size(15.0));
            ui.label(
                egui::RichText::new(shared::truncate_address(&holding.balance.contract_address))
                    .small()
                    .color(theme.dim),
            )
            .on_hover_text(holding.balance.contract_address.as_str());
        });
    });
}
