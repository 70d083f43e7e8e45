//! Standalone viewer application that implements [`eframe::App`].

use eframe::egui;

use crate::config::ViewerConfig;
use crate::panels::controls_ui::{open_file, ControlsPanel};
use crate::panels::PlotPanel;
use crate::viewer::ViewerState;

/// Top-level container when the viewer runs in its own native window.
///
/// All session state lives in [`ViewerState`]; the app only owns the panels
/// that draw it and the one-shot startup dialog flag.
pub struct ScopeViewApp {
    pub state: ViewerState,
    controls: ControlsPanel,
    plot: PlotPanel,
    /// Show the open-file dialog on the next frame.
    open_dialog_pending: bool,
}

impl ScopeViewApp {
    pub fn new(cfg: &ViewerConfig) -> Self {
        Self {
            state: ViewerState::new(),
            controls: ControlsPanel::new(cfg.slider_resolution),
            plot: PlotPanel::new(cfg.looks.clone()),
            open_dialog_pending: cfg.open_dialog_on_start,
        }
    }
}

impl eframe::App for ScopeViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if std::mem::take(&mut self.open_dialog_pending) {
            open_file(&mut self.state);
        }

        egui::TopBottomPanel::bottom("controls")
            .resizable(false)
            .show(ctx, |ui| {
                self.controls.render(ui, &mut self.state);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.plot.render(ui, &mut self.state);
        });
    }
}
