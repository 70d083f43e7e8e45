use scopeview::data::span::SpanSelector;
use scopeview::data::window::Window;
use scopeview::WindowError;

#[test]
fn disarmed_selector_ignores_drags() {
    let mut span = SpanSelector::default();
    assert!(!span.is_armed());
    span.begin(1.0);
    span.update(2.0);
    assert_eq!(span.finish(), None);
}

#[test]
fn drag_yields_ordered_span() {
    let mut span = SpanSelector::default();
    span.arm();
    span.begin(3.0);
    span.update(1.0);
    assert!(span.is_dragging());
    assert_eq!(span.highlighted(), Some((1.0, 3.0)));
    assert_eq!(span.finish(), Some((1.0, 3.0)));
    assert!(span.is_armed());
    assert!(!span.is_dragging());
    assert_eq!(span.highlighted(), Some((1.0, 3.0)));
}

#[test]
fn zero_width_drag_selects_nothing() {
    let mut span = SpanSelector::default();
    span.arm();
    span.begin(2.0);
    assert_eq!(span.finish(), None);
    assert_eq!(span.highlighted(), None);
}

#[test]
fn rearming_drops_drag_and_shown_span() {
    let mut span = SpanSelector::default();
    span.arm();
    span.begin(0.0);
    span.update(1.0);
    span.finish();
    assert_eq!(span.highlighted(), Some((0.0, 1.0)));
    span.begin(5.0);
    span.arm();
    assert!(!span.is_dragging());
    assert_eq!(span.highlighted(), None);
}

#[test]
fn cancel_and_disarm() {
    let mut span = SpanSelector::default();
    span.arm();
    span.begin(0.0);
    span.cancel();
    assert!(span.is_armed());
    assert_eq!(span.finish(), None);
    span.disarm();
    assert!(!span.is_armed());
}

#[test]
fn window_parse_trims_and_names_bound() {
    assert_eq!(Window::parse(" 0.5 ", "1.5").unwrap(), Window::new(0.5, 1.5));
    match Window::parse("0", "x").unwrap_err() {
        WindowError::NotANumber { bound, text } => {
            assert_eq!(bound.to_string(), "end");
            assert_eq!(text, "x");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn clamped_ordered_swaps_and_clamps() {
    let w = Window::new(5.0, -1.0).clamped_ordered(0.0, 2.0);
    assert_eq!(w, Window::new(0.0, 2.0));
    let w = Window::new(0.5, 1.0).clamped_ordered(2.0, 0.0);
    assert_eq!(w, Window::new(0.5, 1.0));
}
