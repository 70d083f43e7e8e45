//! eframe application wrapper.
//!
//! | Sub-module       | Responsibility |
//! | ---------------- | -------------- |
//! | [`scopeview_app`] | [`ScopeViewApp`]: owns the session state and lays out the panels |
//! | [`run`]          | [`run_scopeview()`] entry point |

mod run;
mod scopeview_app;

pub use run::run_scopeview;
pub use scopeview_app::ScopeViewApp;
