use egui::{Color32, Key, PointerButton, Stroke, Ui};
use egui_plot::{HLine, Legend, Line, Plot, PlotPoints, Polygon, VLine};

use crate::data::look::{SeriesLook, SeriesLooks};
use crate::data::render::{
    Rendering, BACKGROUND_SUBTRACTED_LABEL, BASELINE_ALL_LABEL, BASELINE_NON_NEGATIVE_LABEL,
    RAW_LABEL, X_AXIS_LABEL, Y_AXIS_LABEL,
};
use crate::viewer::ViewerState;

const SPAN_FILL: Color32 = Color32::from_rgba_premultiplied(60, 60, 120, 60);
const SPAN_EDGE: Color32 = Color32::from_rgb(120, 120, 220);

/// The plot canvas: draws the current rendering and turns primary drags into
/// span selections while the selector is armed.
pub struct PlotPanel {
    looks: SeriesLooks,
}

impl PlotPanel {
    pub fn new(looks: SeriesLooks) -> Self {
        Self { looks }
    }

    pub fn render(&mut self, ui: &mut Ui, state: &mut ViewerState) {
        let title = state
            .rendering()
            .map(|r| r.title.clone())
            .unwrap_or_else(|| "Oscilloscope Data".to_string());
        ui.vertical_centered(|ui| ui.heading(title));

        let armed = state.span().is_armed();
        let reset_view = state.take_reset_view();
        let highlighted = state.span().highlighted();

        let plot = Plot::new("scope_plot")
            .legend(Legend::default())
            .x_axis_label(X_AXIS_LABEL)
            .y_axis_label(Y_AXIS_LABEL)
            .show_grid(true)
            .allow_drag(!armed)
            .allow_boxed_zoom(true)
            .allow_double_click_reset(false);

        let looks = &self.looks;
        let rendering = state.rendering();
        let plot_resp = plot.show(ui, |plot_ui| {
            let Some(r) = rendering else {
                return;
            };
            if reset_view {
                let (x_min, x_max) = r.x_bounds();
                let x_space = padding(x_min, x_max);
                plot_ui.set_plot_bounds_x(x_min - x_space..=x_max + x_space);
                let (y_min, y_max) = r.y_bounds();
                let y_space = padding(y_min, y_max);
                plot_ui.set_plot_bounds_y(y_min - y_space..=y_max + y_space);
            }

            draw_series(plot_ui, r, looks);

            if let Some((a, b)) = highlighted {
                let bounds = plot_ui.plot_bounds();
                let (y_lo, y_hi) = (bounds.min()[1], bounds.max()[1]);
                plot_ui.polygon(
                    Polygon::new("", vec![[a, y_lo], [b, y_lo], [b, y_hi], [a, y_hi]])
                        .fill_color(SPAN_FILL)
                        .stroke(Stroke::NONE),
                );
                plot_ui.vline(VLine::new("", a).color(SPAN_EDGE));
                plot_ui.vline(VLine::new("", b).color(SPAN_EDGE));
            }
        });

        // Selection works in plot coordinates, also when the pointer has left
        // the canvas while dragging.
        let pointer_x = ui
            .input(|i| i.pointer.interact_pos())
            .map(|pos| plot_resp.transform.value_from_position(pos).x);
        let resp = &plot_resp.response;

        if armed && state.rendering().is_some() {
            if resp.drag_started_by(PointerButton::Primary) {
                if let Some(x) = pointer_x {
                    state.span_mut().begin(x);
                }
            } else if resp.dragged_by(PointerButton::Primary) {
                if let Some(x) = pointer_x {
                    state.span_mut().update(x);
                }
            }
            if resp.drag_stopped_by(PointerButton::Primary) {
                if let Some(x) = pointer_x {
                    state.span_mut().update(x);
                }
                if let Some((xmin, xmax)) = state.span_mut().finish() {
                    // Rejected spans are reported in the status line.
                    let _ = state.span_selected(xmin, xmax);
                }
            }
        }

        // Esc is handled only while the plot is hovered or a drag is running.
        let plot_has_esc = resp.hovered() || state.span().is_dragging();
        if plot_has_esc && ui.input(|i| i.key_pressed(Key::Escape)) {
            if state.span().is_dragging() {
                state.span_mut().cancel();
            } else {
                state.span_mut().disarm();
            }
        }
    }
}

fn draw_series(plot_ui: &mut egui_plot::PlotUi, r: &Rendering, looks: &SeriesLooks) {
    plot_ui.line(styled_line(
        Line::new(RAW_LABEL, PlotPoints::from(r.raw.clone())),
        &looks.raw,
    ));
    plot_ui.hline(styled_hline(
        HLine::new(BASELINE_ALL_LABEL, r.baseline_all),
        &looks.baseline_all,
    ));
    plot_ui.hline(styled_hline(
        HLine::new(BASELINE_NON_NEGATIVE_LABEL, r.baseline_non_negative),
        &looks.baseline_non_negative,
    ));
    plot_ui.line(styled_line(
        Line::new(
            BACKGROUND_SUBTRACTED_LABEL,
            PlotPoints::from(r.background_subtracted.clone()),
        ),
        &looks.background_subtracted,
    ));
}

fn styled_line(line: Line<'static>, look: &SeriesLook) -> Line<'static> {
    line.color(look.color).width(look.width).style(look.style)
}

fn styled_hline(line: HLine, look: &SeriesLook) -> HLine {
    line.color(look.color).width(look.width).style(look.style)
}

/// 5 % of the range on each side, with a floor for flat or single-point data.
fn padding(lo: f64, hi: f64) -> f64 {
    let span = hi - lo;
    if span > 0.0 {
        span * 0.05
    } else {
        lo.abs().max(1e-12) * 0.05
    }
}
