pub mod controls_ui;
pub mod plot_ui;

pub use controls_ui::ControlsPanel;
pub use plot_ui::PlotPanel;
