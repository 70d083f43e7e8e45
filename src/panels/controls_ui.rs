use std::path::PathBuf;

use egui::{Color32, Id, RichText, Ui};
use egui_phosphor::regular::{ARROWS_HORIZONTAL, FOLDER_OPEN};

use crate::viewer::ViewerState;

/// File button, start/end entries, start/end sliders, selector button and
/// status line.
pub struct ControlsPanel {
    slider_resolution: f64,
    /// The entries were edited since the last commit.
    text_dirty: bool,
}

impl ControlsPanel {
    pub fn new(slider_resolution: f64) -> Self {
        Self {
            slider_resolution,
            text_dirty: false,
        }
    }

    pub fn render(&mut self, ui: &mut Ui, state: &mut ViewerState) {
        ui.add_space(6.0);
        ui.vertical_centered(|ui| {
            if ui
                .button(format!("{FOLDER_OPEN} Select CSV File"))
                .clicked()
            {
                open_file(state);
            }
            if let Some(path) = state.loaded_path() {
                ui.weak(path.display().to_string());
            }
        });
        ui.add_space(6.0);

        self.render_entries(ui, state);
        ui.separator();
        self.render_sliders(ui, state);
        ui.separator();

        ui.vertical_centered(|ui| {
            let armed = state.span().is_armed();
            let resp = ui
                .add_enabled(
                    state.rendering().is_some(),
                    egui::Button::new(format!("{ARROWS_HORIZONTAL} Select Time Range on Plot"))
                        .selected(armed),
                )
                .on_hover_text("Drag on the plot to choose a time range. Esc stops selecting.");
            if resp.clicked() {
                state.rearm_span_selector();
            }

            if let Some(status) = state.status() {
                let text = RichText::new(status.display_text());
                if status.is_error() {
                    ui.label(text.color(Color32::from_rgb(220, 60, 60)));
                } else {
                    ui.label(text);
                }
            }
        });
        ui.add_space(6.0);
    }

    fn render_entries(&mut self, ui: &mut Ui, state: &mut ViewerState) {
        let start_id = Id::new("start_time_entry");
        let end_id = Id::new("end_time_entry");
        let mut commit = false;

        egui::Grid::new("time_entries")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                for (label, id, text) in [
                    ("Start Time (Input Box):", start_id, &mut state.start_text),
                    ("End Time (Input Box):", end_id, &mut state.end_text),
                ] {
                    ui.label(label);
                    let r = ui.add(
                        egui::TextEdit::singleline(text)
                            .id(id)
                            .desired_width(220.0),
                    );
                    if r.changed() {
                        self.text_dirty = true;
                    }
                    let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if (enter && r.has_focus()) || r.lost_focus() {
                        commit = true;
                    }
                    ui.end_row();
                }
            });

        if commit && self.text_dirty {
            self.text_dirty = false;
            // Parse failures are reported in the status line.
            let _ = state.commit_text();
        }
    }

    fn render_sliders(&mut self, ui: &mut Ui, state: &mut ViewerState) {
        let range = state.slider_range();
        let enabled = state.trace().is_some();
        // The widgets edit copies. Only a user interaction writes them back.
        let mut values = [state.slider_start, state.slider_end];
        let mut moved = false;

        egui::Grid::new("time_sliders")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                let [start_value, end_value] = &mut values;
                for (label, value) in [
                    ("Start Time (Slider):", start_value),
                    ("End Time (Slider):", end_value),
                ] {
                    ui.label(label);
                    let slider = egui::Slider::new(value, range.clone())
                        .step_by(self.slider_resolution)
                        .clamping(egui::SliderClamping::Edits)
                        .max_decimals(12);
                    let resp = ui.add_enabled(enabled, slider);
                    let interacted = resp.dragged()
                        || resp.drag_stopped()
                        || resp.clicked()
                        || resp.has_focus()
                        || resp.is_pointer_button_down_on();
                    if resp.changed() && interacted {
                        moved = true;
                    }
                    ui.end_row();
                }
            });

        if moved {
            self.text_dirty = false;
            state.slider_start = values[0];
            state.slider_end = values[1];
            // Rejected windows are reported in the status line.
            let _ = state.slider_moved();
        }
    }
}

/// Ask for a CSV file and load it. Cancelling the dialog changes nothing.
pub fn open_file(state: &mut ViewerState) {
    if let Some(path) = pick_csv_file() {
        // Load failures are reported in the status line.
        let _ = state.load_path(path);
    }
}

fn pick_csv_file() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("CSV files", &["csv"])
        .add_filter("All files", &["*"])
        .pick_file()
}
