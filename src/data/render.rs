//! Series computed for one redraw of the plot.
//!
//! The raw trace and the first baseline follow the selected window. The second
//! baseline and the background-subtracted curve always start at `t = 0` so the
//! pre-trigger region never leaks into them, whatever start time is chosen.

use crate::data::trace::Trace;
use crate::data::window::Window;
use crate::error::WindowError;

pub const RAW_LABEL: &str = "CH1";
pub const BASELINE_ALL_LABEL: &str = "Baseline: mean of all data";
pub const BASELINE_NON_NEGATIVE_LABEL: &str = "Baseline: mean, excluding negative times";
pub const BACKGROUND_SUBTRACTED_LABEL: &str = "Subtracting background";

pub const X_AXIS_LABEL: &str = "Time (s)";
pub const Y_AXIS_LABEL: &str = "Voltage (V)";

/// Everything needed to draw one frame of the plot.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendering {
    pub window: Window,
    pub title: String,
    /// `[t, -v]` for `t` in `start..=end`.
    pub raw: Vec<[f64; 2]>,
    /// `-mean(v)` over `start..=end`.
    pub baseline_all: f64,
    /// `-mean(v)` over `0..=end`.
    pub baseline_non_negative: f64,
    /// `[t, |v - mean|]` for `t` in `0..=end`, mean taken over the same range.
    pub background_subtracted: Vec<[f64; 2]>,
}

pub fn render(trace: &Trace, window: Window) -> Result<Rendering, WindowError> {
    let Window { start, end } = window;

    let selected: Vec<(f64, f64)> = trace.samples_between(start, end).collect();
    let mean_all =
        mean(selected.iter().map(|(_, v)| *v)).ok_or(WindowError::EmptySelection { start, end })?;

    let non_negative: Vec<(f64, f64)> = trace.samples_between(0.0, end).collect();
    let mean_non_negative = mean(non_negative.iter().map(|(_, v)| *v))
        .ok_or(WindowError::NoNonNegativeSamples { end })?;

    Ok(Rendering {
        window,
        title: plot_title(window),
        raw: selected.iter().map(|(t, v)| [*t, -v]).collect(),
        baseline_all: -mean_all,
        baseline_non_negative: -mean_non_negative,
        background_subtracted: non_negative
            .iter()
            .map(|(t, v)| [*t, (v - mean_non_negative).abs()])
            .collect(),
    })
}

pub fn plot_title(window: Window) -> String {
    format!(
        "Oscilloscope Data ({} s to {} s)",
        window.start, window.end
    )
}

/// Arithmetic mean, `None` for an empty sequence.
pub fn mean<I: IntoIterator<Item = f64>>(values: I) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (count > 0).then(|| sum / count as f64)
}

impl Rendering {
    /// Smallest and largest plotted voltage across all four series.
    pub fn y_bounds(&self) -> (f64, f64) {
        let ys = self
            .raw
            .iter()
            .chain(self.background_subtracted.iter())
            .map(|p| p[1])
            .chain([self.baseline_all, self.baseline_non_negative]);
        ys.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), y| {
            (lo.min(y), hi.max(y))
        })
    }

    /// Time extent of the plotted curves. Falls back to the window when both
    /// curves are empty.
    pub fn x_bounds(&self) -> (f64, f64) {
        let (lo, hi) = self
            .raw
            .iter()
            .chain(self.background_subtracted.iter())
            .map(|p| p[0])
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
                (lo.min(x), hi.max(x))
            });
        if lo <= hi {
            (lo, hi)
        } else {
            (self.window.start, self.window.end)
        }
    }
}
