//! Horizontal span selection on the plot.
//!
//! The selector is re-armed after every successful redraw, which throws away
//! any half-finished drag and the previously shown span.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum SpanState {
    #[default]
    Disarmed,
    Armed,
    Dragging { anchor: f64, current: f64 },
}

#[derive(Debug, Clone, Default)]
pub struct SpanSelector {
    state: SpanState,
    /// Last completed selection, kept on screen until the next redraw.
    shown: Option<(f64, f64)>,
}

impl SpanSelector {
    /// Replace the selector with a fresh, armed one.
    pub fn arm(&mut self) {
        self.state = SpanState::Armed;
        self.shown = None;
    }

    pub fn disarm(&mut self) {
        self.state = SpanState::Disarmed;
    }

    /// `true` while primary drags on the plot select a span instead of panning.
    pub fn is_armed(&self) -> bool {
        !matches!(self.state, SpanState::Disarmed)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, SpanState::Dragging { .. })
    }

    /// Start a drag at `x`. Ignored unless armed.
    pub fn begin(&mut self, x: f64) {
        if self.state == SpanState::Armed {
            self.state = SpanState::Dragging {
                anchor: x,
                current: x,
            };
        }
    }

    pub fn update(&mut self, x: f64) {
        if let SpanState::Dragging { current, .. } = &mut self.state {
            *current = x;
        }
    }

    /// Finish the drag. Returns the ordered `(xmin, xmax)` unless the drag had
    /// zero width; the selector stays armed either way.
    pub fn finish(&mut self) -> Option<(f64, f64)> {
        let SpanState::Dragging { anchor, current } = self.state else {
            return None;
        };
        self.state = SpanState::Armed;
        let (xmin, xmax) = (anchor.min(current), anchor.max(current));
        if !(xmax > xmin) {
            return None;
        }
        self.shown = Some((xmin, xmax));
        Some((xmin, xmax))
    }

    /// Abort a drag in progress without selecting anything.
    pub fn cancel(&mut self) {
        if self.is_dragging() {
            self.state = SpanState::Armed;
        }
    }

    /// The span to highlight: the drag in progress, else the last selection.
    pub fn highlighted(&self) -> Option<(f64, f64)> {
        match self.state {
            SpanState::Dragging { anchor, current } => {
                Some((anchor.min(current), anchor.max(current)))
            }
            _ => self.shown,
        }
    }
}
