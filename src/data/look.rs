//! Line styling for the four plotted series.

use eframe::egui;
use egui_plot::LineStyle;

#[derive(Debug, Clone)]
pub struct SeriesLook {
    pub color: egui::Color32,
    pub width: f32,
    pub style: LineStyle,
}

impl Default for SeriesLook {
    fn default() -> Self {
        Self {
            color: egui::Color32::from_rgb(31, 119, 180),
            width: 1.5,
            style: LineStyle::Solid,
        }
    }
}

impl SeriesLook {
    pub fn dashed(color: egui::Color32) -> Self {
        Self {
            color,
            style: LineStyle::Dashed { length: 6.0 },
            ..Default::default()
        }
    }
}

/// Looks for the raw trace, both baselines and the background-subtracted curve.
#[derive(Debug, Clone)]
pub struct SeriesLooks {
    pub raw: SeriesLook,
    pub baseline_all: SeriesLook,
    pub baseline_non_negative: SeriesLook,
    pub background_subtracted: SeriesLook,
}

impl Default for SeriesLooks {
    fn default() -> Self {
        Self {
            raw: SeriesLook::default(),
            baseline_all: SeriesLook::dashed(egui::Color32::from_rgb(0, 128, 0)),
            baseline_non_negative: SeriesLook::dashed(egui::Color32::from_rgb(191, 191, 0)),
            background_subtracted: SeriesLook::dashed(egui::Color32::from_rgb(0, 0, 255)),
        }
    }
}
