//! # GUI Theme
//!
//! Dark terminal-style theme for egui: black panels, white text, red accent.

use egui::Theme as EguiTheme;
use egui::{Color32, Context, Stroke, Visuals};

use crate::app::ViewStatus;
use crate::services::wallet::WalletStatus;

/// Color palette
#[derive(Debug, Clone)]
pub struct Palette {
    /// Pure black background
    pub background: Color32,
    /// Bright white text
    pub text: Color32,
    /// Red accent
    pub accent: Color32,
    /// Dark gray borders
    pub border: Color32,
    pub success: Color32,
    pub error: Color32,
    pub warning: Color32,
    pub info: Color32,
    /// Dark gray for inactive elements
    pub inactive: Color32,
    /// Medium gray for secondary text
    pub secondary: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            background: Color32::from_rgb(0, 0, 0),       // #000000
            text: Color32::from_rgb(255, 255, 255),       // #FFFFFF
            accent: Color32::from_rgb(204, 0, 0),         // #CC0000
            border: Color32::from_rgb(51, 51, 51),        // #333333
            success: Color32::from_rgb(0, 255, 0),        // #00FF00
            error: Color32::from_rgb(255, 0, 0),          // #FF0000
            warning: Color32::from_rgb(255, 170, 0),      // #FFAA00
            info: Color32::from_rgb(100, 150, 255),       // #6496FF
            inactive: Color32::from_rgb(26, 26, 26),      // #1A1A1A
            secondary: Color32::from_rgb(150, 150, 150),  // #969696
        }
    }
}

/// Application theme
pub struct Theme {
    pub colors: Palette,
    /// Normal text color
    pub normal: Color32,
    /// Selected/highlighted items
    pub selected: Color32,
    pub border: Color32,
    /// Dimmed/secondary text
    pub dim: Color32,
    pub success: Color32,
    pub error: Color32,
    pub warning: Color32,
    pub info: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        let colors = Palette::default();
        Theme {
            normal: colors.text,
            selected: colors.accent,
            border: colors.border,
            dim: colors.secondary,
            success: colors.success,
            error: colors.error,
            warning: colors.warning,
            info: colors.info,
            colors,
        }
    }
}

impl Theme {
    /// Color of the status line for a view status
    pub fn view_status_color(&self, status: &ViewStatus) -> Color32 {
        match status {
            ViewStatus::Idle => self.dim,
            ViewStatus::Fetching => self.info,
            ViewStatus::Loaded => self.success,
            ViewStatus::NotFound => self.warning,
            ViewStatus::Invalid | ViewStatus::Failed(_) => self.error,
        }
    }

    /// Color of the wallet status line
    pub fn wallet_status_color(&self, status: &WalletStatus) -> Color32 {
        match status {
            WalletStatus::Disconnected => self.dim,
            WalletStatus::Connecting => self.info,
            WalletStatus::Connected(_) => self.success,
            WalletStatus::Error(_) => self.error,
        }
    }

    /// egui visuals for the palette
    pub fn visuals(&self) -> Visuals {
        let colors = &self.colors;
        let mut visuals = Visuals::dark();

        visuals.override_text_color = Some(colors.text);

        visuals.faint_bg_color = colors.background;
        visuals.extreme_bg_color = colors.background;
        visuals.panel_fill = colors.background;
        visuals.window_fill = colors.background;
        visuals.window_stroke = Stroke::new(1.0, colors.border);

        visuals.widgets.noninteractive.bg_fill = colors.inactive;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors.border);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors.text);

        visuals.widgets.inactive.bg_fill = colors.inactive;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, colors.border);
        visuals.widgets.inactive.weak_bg_fill = Color32::from_rgb(30, 30, 30);

        visuals.widgets.hovered.bg_fill = Color32::from_rgb(51, 0, 0);
        visuals.widgets.hovered.bg_stroke = Stroke::new(2.0, colors.accent);
        visuals.widgets.hovered.weak_bg_fill = Color32::from_rgb(40, 0, 0);

        visuals.widgets.active.bg_fill = Color32::from_rgb(102, 0, 0);
        visuals.widgets.active.bg_stroke = Stroke::new(2.0, colors.accent);
        visuals.widgets.active.weak_bg_fill = Color32::from_rgb(76, 0, 0);

        visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(204, 0, 0, 76); // 30% opacity
        visuals.selection.stroke = Stroke::new(2.0, colors.accent);

        visuals.hyperlink_color = colors.info;
        visuals
    }

    /// Apply the theme to both egui light and dark styles
    ///
    /// Uses `style_mut_of`; `set_visuals` would only touch the active theme.
    pub fn apply(ctx: &Context) {
        let visuals = Self::default().visuals();

        for target in [EguiTheme::Dark, EguiTheme::Light] {
            ctx.style_mut_of(target, |style| {
                style.visuals = visuals.clone();
                style.spacing.item_spacing = egui::Vec2::new(6.0, 4.0);
                style.spacing.window_margin = egui::Margin::same(4);
                style.spacing.button_padding = egui::Vec2::new(10.0, 5.0);
                style.spacing.interact_size = egui::Vec2::new(32.0, 28.0);
            });
        }

        tracing::debug!("Applied theme visuals");
    }
}
