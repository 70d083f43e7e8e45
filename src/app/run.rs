//! Top-level entry point for running the viewer as a native window.

use eframe::egui;
use log::info;

use crate::config::ViewerConfig;

use super::ScopeViewApp;

/// Launch the viewer in a native window.
///
/// The call blocks until the window is closed. Only failing to create the
/// window is an error; everything the user does inside it is recoverable.
pub fn run_scopeview(mut cfg: ViewerConfig) -> eframe::Result<()> {
    let app = ScopeViewApp::new(&cfg);

    let title = cfg.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    // Set a bigger default window size if one is not provided by config.
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(1200.0, 900.0));
    }

    info!("Starting {title}");
    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            // Install Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}
