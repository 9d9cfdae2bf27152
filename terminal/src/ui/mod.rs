//! # GUI Rendering Framework
//!
//! egui front end. [`TokenscopeApp`] is the `eframe::App`; every frame it
//! drains async results into the state, then renders from a snapshot.

pub mod screens;
pub mod theme;
pub mod widgets;

use std::time::Duration;

use egui;
use crate::app::App;

/// Repaint interval while a request is outstanding
const PENDING_REPAINT: Duration = Duration::from_millis(100);

/// Main render function - called every frame
pub fn render(ctx: &egui::Context, app: &mut App) {
    // Render from a snapshot so no lock is held while widgets call back into the app
    let state = app.state.read().clone();

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.add_space(4.0);
        widgets::status_bar::render_status_bar(ui, &state);
        ui.add_space(4.0);
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        screens::balances::render(ui, &state, app);
    });
}

/// eframe entry point wrapping the [`App`]
pub struct TokenscopeApp {
    app: App,
}

impl TokenscopeApp {
    pub fn new(cc: &eframe::CreationContext<'_>, app: App) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        theme::Theme::apply(&cc.egui_ctx);
        Self { app }
    }
}

impl eframe::App for TokenscopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();
        render(ctx, &mut self.app);

        // Task results arrive on the channel without waking egui
        if self.app.has_pending_work() {
            ctx.request_repaint_after(PENDING_REPAINT);
        }
    }
}
