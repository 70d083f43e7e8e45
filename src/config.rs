//! Configuration for the viewer window.

use crate::data::look::SeriesLooks;

/// Top-level configuration consumed by [`run_scopeview`](crate::run_scopeview).
#[derive(Clone)]
pub struct ViewerConfig {
    /// Native window title.
    pub title: String,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
    /// Show the open-file dialog as soon as the window appears.
    pub open_dialog_on_start: bool,
    /// Step of the start/end sliders, in seconds.
    pub slider_resolution: f64,
    /// Styling of the four plotted series.
    pub looks: SeriesLooks,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "Oscilloscope Data Viewer".to_string(),
            native_options: None,
            open_dialog_on_start: true,
            slider_resolution: 1e-9,
            looks: SeriesLooks::default(),
        }
    }
}
