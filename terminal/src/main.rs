//! tokenscope - ERC-20 balance viewer
//!
//! Native egui window. Configuration comes from the environment (or `.env`).

use std::error::Error;

use tokenscope::app::App;
use tokenscope::core::config::AppConfig;
use tokenscope::ui::TokenscopeApp;
use tokenscope::utils::runtime::build_runtime;

fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();
    let _log_guard = tokenscope::debug::init();

    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        e
    })?;
    tracing::info!(config = ?config, "Configuration loaded");

    // Handlers call tokio::spawn from the UI thread
    let runtime = build_runtime()?;
    let _rt_guard = runtime.enter();

    let app = App::new(&config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("tokenscope")
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([560.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "tokenscope",
        options,
        Box::new(move |cc| Ok(Box::new(TokenscopeApp::new(cc, app)))),
    )?;

    tracing::info!("Window closed, shutting down");
    Ok(())
}
