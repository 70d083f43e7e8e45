//! Session state and the handlers behind every control in the window.
//!
//! [`ViewerState`] owns the loaded trace, the current window, the values shown
//! in the text entries and sliders, the last rendering and the span selector.
//! Each user action maps to exactly one handler. A handler either completes and
//! leaves every control showing the same window, or fails, reports through the
//! status line and keeps the previous window and plot.

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::data::render::{render, Rendering};
use crate::data::span::SpanSelector;
use crate::data::status::Status;
use crate::data::trace::{load_trace, Trace};
use crate::data::window::Window;
use crate::error::{LoadError, WindowError};

pub struct ViewerState {
    trace: Option<Trace>,
    loaded_path: Option<PathBuf>,
    window: Option<Window>,

    /// Text of the start entry, edited directly by the UI.
    pub start_text: String,
    /// Text of the end entry, edited directly by the UI.
    pub end_text: String,
    /// Value of the start slider, edited directly by the UI.
    pub slider_start: f64,
    /// Value of the end slider, edited directly by the UI.
    pub slider_end: f64,
    slider_range: RangeInclusive<f64>,

    rendering: Option<Rendering>,
    span: SpanSelector,
    status: Option<Status>,
    /// Set whenever a new rendering should be fitted to the plot area.
    reset_view: bool,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            trace: None,
            loaded_path: None,
            window: None,
            start_text: String::new(),
            end_text: String::new(),
            slider_start: 0.0,
            slider_end: 0.0,
            slider_range: 0.0..=0.0,
            rendering: None,
            span: SpanSelector::default(),
            status: None,
            reset_view: false,
        }
    }
}

impl ViewerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trace(&self) -> Option<&Trace> {
        self.trace.as_ref()
    }

    pub fn loaded_path(&self) -> Option<&Path> {
        self.loaded_path.as_deref()
    }

    pub fn window(&self) -> Option<Window> {
        self.window
    }

    pub fn slider_range(&self) -> RangeInclusive<f64> {
        self.slider_range.clone()
    }

    pub fn rendering(&self) -> Option<&Rendering> {
        self.rendering.as_ref()
    }

    pub fn span(&self) -> &SpanSelector {
        &self.span
    }

    pub fn span_mut(&mut self) -> &mut SpanSelector {
        &mut self.span
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    /// Returns `true` once after each successful redraw.
    pub fn take_reset_view(&mut self) -> bool {
        std::mem::take(&mut self.reset_view)
    }

    // ── Handlers ─────────────────────────────────────────────────────────────

    /// Load a CSV export and show its full time span.
    ///
    /// On failure nothing but the status line changes.
    pub fn load_path<P: AsRef<Path>>(&mut self, path: P) -> Result<(), LoadError> {
        let path = path.as_ref();
        match load_trace(path) {
            Ok(trace) => {
                info!(
                    "Loaded {} samples from {}",
                    trace.len(),
                    path.display()
                );
                self.loaded_path = Some(path.to_path_buf());
                self.install_trace(trace);
                Ok(())
            }
            Err(e) => {
                warn!("Failed to load {}: {e}", path.display());
                self.status = Some(Status::error(format!("Error loading file: {e}")));
                Err(e)
            }
        }
    }

    /// Replace the trace and reset every control to its full span.
    pub fn install_trace(&mut self, trace: Trace) {
        let (first, last) = trace.span();
        self.trace = Some(trace);
        self.slider_range = first..=last;
        self.slider_start = first;
        self.slider_end = last;
        self.start_text = first.to_string();
        self.end_text = last.to_string();
        let window = Window::new(first, last);
        if self.apply_window(window).is_ok() {
            self.status = Some(Status::info("File loaded successfully!"));
        } else {
            // Samples only at negative times: the trace is kept but nothing of
            // the previous file may stay on screen.
            self.window = Some(window);
            self.rendering = None;
        }
    }

    /// Apply the values typed into the start and end entries.
    pub fn commit_text(&mut self) -> Result<(), WindowError> {
        let window = Window::parse(&self.start_text, &self.end_text)
            .map_err(|e| self.report_window_error(e))?;
        self.apply_window(window)
    }

    /// Apply the slider values, copying them verbatim into the entries first.
    pub fn slider_moved(&mut self) -> Result<(), WindowError> {
        self.start_text = self.slider_start.to_string();
        self.end_text = self.slider_end.to_string();
        self.apply_window(Window::new(self.slider_start, self.slider_end))
    }

    /// Apply a span dragged out on the plot.
    ///
    /// The span is clamped into the trace span so the sliders can show it.
    pub fn span_selected(&mut self, xmin: f64, xmax: f64) -> Result<(), WindowError> {
        let Some(trace) = &self.trace else {
            return Err(self.report_window_error(WindowError::NoTrace));
        };
        let (first, last) = trace.span();
        let window = Window::new(xmin, xmax).clamped_ordered(first, last);
        debug!("Span selected: {xmin} s to {xmax} s");
        self.start_text = window.start.to_string();
        self.end_text = window.end.to_string();
        self.apply_window(window)
    }

    /// Re-create the span selector so the next drag on the plot selects.
    pub fn rearm_span_selector(&mut self) {
        self.span.arm();
    }

    // ── Internals ────────────────────────────────────────────────────────────

    fn apply_window(&mut self, window: Window) -> Result<(), WindowError> {
        let result = match &self.trace {
            Some(trace) => render(trace, window),
            None => Err(WindowError::NoTrace),
        };
        let rendering = result.map_err(|e| self.report_window_error(e))?;

        debug!("Window set to {} s .. {} s", window.start, window.end);
        self.window = Some(window);
        self.rendering = Some(rendering);
        self.sync_sliders(window);
        self.span.arm();
        self.reset_view = true;
        self.status = Some(Status::info(format!(
            "Showing {} s to {} s",
            window.start, window.end
        )));
        Ok(())
    }

    fn sync_sliders(&mut self, window: Window) {
        let (lo, hi) = (*self.slider_range.start(), *self.slider_range.end());
        let (lo, hi) = (lo.min(hi), lo.max(hi));
        self.slider_start = window.start.max(lo).min(hi);
        self.slider_end = window.end.max(lo).min(hi);
    }

    fn report_window_error(&mut self, e: WindowError) -> WindowError {
        warn!("Rejected time window: {e}");
        self.status = Some(Status::error(format!("Invalid time window: {e}")));
        e
    }
}
