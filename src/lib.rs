//! scopeview crate root: re-exports and module wiring.
//!
//! An interactive viewer for oscilloscope CSV exports built on egui/eframe:
//! - `data`: trace loading, window parsing, series computation, span selection
//! - `viewer`: session state and one handler per user action
//! - `panels`: egui rendering of the controls and the plot canvas
//! - `app`: eframe application and the `run_scopeview` entry point
//! - `config`: window and styling configuration
//! - `error`: load and window errors

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod panels;
pub mod viewer;

// Public re-exports for a compact external API
pub use app::{run_scopeview, ScopeViewApp};
pub use config::ViewerConfig;
pub use data::render::{render, Rendering};
pub use data::trace::{load_trace, parse_trace, Trace};
pub use data::window::Window;
pub use error::{LoadError, WindowError};
pub use viewer::ViewerState;
