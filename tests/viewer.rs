use std::io::Write;

use scopeview::data::status::StatusKind;
use scopeview::{LoadError, Trace, ViewerState, Window, WindowError};

fn write_csv(rows: &[(f64, f64)]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "Model,MDO3024").unwrap();
    writeln!(file, "TIME,CH1").unwrap();
    for (t, v) in rows {
        writeln!(file, "{t},{v}").unwrap();
    }
    file.flush().unwrap();
    file
}

fn loaded(time: &[f64], voltage: &[f64]) -> ViewerState {
    let mut state = ViewerState::new();
    state.install_trace(Trace::new(time.to_vec(), voltage.to_vec()).unwrap());
    state
}

#[test]
fn load_sets_window_sliders_and_entries() {
    let file = write_csv(&[(0.0, 1.0), (1.0, 2.0), (2.0, 3.0)]);
    let mut state = ViewerState::new();
    state.load_path(file.path()).unwrap();

    assert_eq!(state.window(), Some(Window::new(0.0, 2.0)));
    assert_eq!(state.slider_range(), 0.0..=2.0);
    assert_eq!(state.slider_start, 0.0);
    assert_eq!(state.slider_end, 2.0);
    assert_eq!(state.start_text, "0");
    assert_eq!(state.end_text, "2");
    assert_eq!(state.loaded_path(), Some(file.path()));

    let status = state.status().unwrap();
    assert_eq!(status.kind, StatusKind::Info);
    assert_eq!(status.text, "File loaded successfully!");
    assert_eq!(state.rendering().unwrap().baseline_all, -2.0);
    assert!(state.span().is_armed());
}

#[test]
fn failed_load_keeps_previous_trace() {
    let good = write_csv(&[(0.0, 1.0), (1.0, 2.0), (2.0, 3.0)]);
    let mut bad = tempfile::NamedTempFile::new().unwrap();
    writeln!(bad, "TIME,CH1\n0,1\n1,oops").unwrap();
    bad.flush().unwrap();

    let mut state = ViewerState::new();
    state.load_path(good.path()).unwrap();
    let before = state.rendering().cloned();

    let err = state.load_path(bad.path()).unwrap_err();
    assert!(matches!(err, LoadError::InvalidNumber { line: 3, .. }));
    assert_eq!(state.trace().unwrap().len(), 3);
    assert_eq!(state.window(), Some(Window::new(0.0, 2.0)));
    assert_eq!(state.rendering().cloned(), before);
    assert_eq!(state.loaded_path(), Some(good.path()));

    let status = state.status().unwrap();
    assert!(status.is_error());
    assert!(status.text.starts_with("Error loading file:"));
}

#[test]
fn text_commit_restricts_series() {
    let mut state = loaded(
        &[-1.0, -0.5, 0.0, 0.5, 1.0, 1.5, 2.0],
        &[9.0, 9.0, 1.0, 2.0, 3.0, 4.0, 5.0],
    );
    state.start_text = "0.5".to_string();
    state.end_text = "1.5".to_string();
    state.commit_text().unwrap();

    assert_eq!(state.window(), Some(Window::new(0.5, 1.5)));
    let r = state.rendering().unwrap();
    assert!(r.raw.iter().all(|p| (0.5..=1.5).contains(&p[0])));
    assert_eq!(r.raw.len(), 3);
    assert!(r
        .background_subtracted
        .iter()
        .all(|p| (0.0..=1.5).contains(&p[0])));
    assert_eq!(r.background_subtracted.len(), 4);
    // mean of [2, 3, 4] and of [1, 2, 3, 4]
    assert_eq!(r.baseline_all, -3.0);
    assert_eq!(r.baseline_non_negative, -2.5);

    // Committed values show up in the sliders.
    assert_eq!(state.slider_start, 0.5);
    assert_eq!(state.slider_end, 1.5);
}

#[test]
fn unparsable_entry_keeps_previous_window() {
    let mut state = loaded(&[0.0, 1.0, 2.0], &[1.0, 2.0, 3.0]);
    state.start_text = "abc".to_string();
    let err = state.commit_text().unwrap_err();
    assert!(matches!(err, WindowError::NotANumber { .. }));
    assert_eq!(state.window(), Some(Window::new(0.0, 2.0)));
    assert!(state.status().unwrap().is_error());
    // The rejected text stays for the user to fix.
    assert_eq!(state.start_text, "abc");
}

#[test]
fn empty_selection_is_reported_not_applied() {
    let mut state = loaded(&[0.0, 1.0, 2.0], &[1.0, 2.0, 3.0]);
    let before = state.rendering().cloned();

    state.start_text = "1.5".to_string();
    state.end_text = "0.5".to_string();
    assert!(state.commit_text().is_err());
    assert_eq!(state.window(), Some(Window::new(0.0, 2.0)));
    assert_eq!(state.rendering().cloned(), before);

    state.start_text = "0".to_string();
    state.end_text = "-1".to_string();
    let err = state.commit_text().unwrap_err();
    assert_eq!(err, WindowError::EmptySelection { start: 0.0, end: -1.0 });
    assert!(state.status().unwrap().is_error());
}

#[test]
fn slider_values_round_trip_into_entries() {
    let mut state = loaded(&[0.0, 0.25, 0.5, 0.75, 1.0], &[1.0, 2.0, 3.0, 4.0, 5.0]);
    state.slider_start = 0.25;
    state.slider_end = 0.7500000001;
    state.slider_moved().unwrap();

    assert_eq!(state.start_text, 0.25f64.to_string());
    assert_eq!(state.end_text, 0.7500000001f64.to_string());
    assert_eq!(state.window(), Some(Window::new(0.25, 0.7500000001)));
    assert_eq!(state.slider_start, 0.25);
    assert_eq!(state.slider_end, 0.7500000001);
}

#[test]
fn span_selection_updates_every_control() {
    let mut state = loaded(&[0.0, 1.0, 2.0, 3.0], &[1.0, 2.0, 3.0, 4.0]);
    state.span_mut().begin(0.5);
    state.span_mut().update(2.5);
    assert_eq!(state.span_mut().finish(), Some((0.5, 2.5)));
    assert!(state.span().highlighted().is_some());

    state.span_selected(0.5, 2.5).unwrap();
    assert_eq!(state.window(), Some(Window::new(0.5, 2.5)));
    assert_eq!(state.start_text, "0.5");
    assert_eq!(state.end_text, "2.5");
    assert_eq!(state.slider_start, 0.5);
    assert_eq!(state.slider_end, 2.5);
    // A fresh selector after every redraw.
    assert!(state.span().is_armed());
    assert_eq!(state.span().highlighted(), None);
}

#[test]
fn span_selection_is_clamped_to_trace() {
    let mut state = loaded(&[0.0, 1.0, 2.0], &[1.0, 2.0, 3.0]);
    state.span_selected(-0.4, 5.0).unwrap();
    assert_eq!(state.window(), Some(Window::new(0.0, 2.0)));
    assert_eq!(state.start_text, "0");
    assert_eq!(state.end_text, "2");
}

#[test]
fn handlers_without_a_trace_report_errors() {
    let mut state = ViewerState::new();
    state.start_text = "0".to_string();
    state.end_text = "1".to_string();
    assert_eq!(state.commit_text().unwrap_err(), WindowError::NoTrace);
    assert_eq!(state.span_selected(0.0, 1.0).unwrap_err(), WindowError::NoTrace);
    assert!(state.window().is_none());
    assert!(state.status().unwrap().is_error());
}

#[test]
fn trace_with_only_negative_times_loads_but_reports() {
    let state = loaded(&[-2.0, -1.0], &[1.0, 2.0]);
    assert_eq!(state.window(), Some(Window::new(-2.0, -1.0)));
    assert!(state.rendering().is_none());
    assert!(state.status().unwrap().is_error());
}

#[test]
fn reset_view_is_taken_once_per_redraw() {
    let mut state = loaded(&[0.0, 1.0, 2.0], &[1.0, 2.0, 3.0]);
    assert!(state.take_reset_view());
    assert!(!state.take_reset_view());
    state.span_selected(0.0, 1.0).unwrap();
    assert!(state.take_reset_view());
}
