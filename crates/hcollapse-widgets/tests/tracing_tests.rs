//! Tracing integration tests.
//!
//! Spans enabled:
//!   cargo test -p hcollapse-widgets --features tracing --test tracing_tests
//!
//! Zero-overhead verification (no feature):
//!   cargo test -p hcollapse-widgets --test tracing_tests -- zero_overhead

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use hcollapse_core::geometry::Rect;
use hcollapse_render::buffer::Buffer;
use hcollapse_widgets::{CollapseState, HorizontalCollapse, StatefulWidget};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

// ============================================================================
// Test Infrastructure
// ============================================================================

/// A captured span with its fields and parent.
#[derive(Debug, Clone)]
#[allow(dead_code)]
struct CapturedSpan {
    name: String,
    fields: HashMap<String, String>,
    parent_name: Option<String>,
}

/// A tracing Layer that records every new span.
struct SpanCapture {
    spans: Arc<Mutex<Vec<CapturedSpan>>>,
}

/// Visitor that extracts span fields.
struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

impl<S> tracing_subscriber::Layer<S> for SpanCapture
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor(Vec::new());
        attrs.record(&mut visitor);

        let parent_name = ctx
            .current_span()
            .id()
            .and_then(|id| ctx.span(id))
            .map(|span_ref| span_ref.name().to_string());

        self.spans.lock().unwrap().push(CapturedSpan {
            name: attrs.metadata().name().to_string(),
            fields: visitor.0.into_iter().collect(),
            parent_name,
        });
    }
}

/// Run `f` under a capturing subscriber and return the spans it created.
fn with_captured_spans<F: FnOnce()>(f: F) -> Vec<CapturedSpan> {
    let spans = Arc::new(Mutex::new(Vec::new()));
    let layer = SpanCapture {
        spans: spans.clone(),
    };
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, f);
    spans.lock().unwrap().clone()
}

fn render_story(width: u16, state: &mut CollapseState) {
    let items: Vec<String> = (1..=10).map(|i| format!("Child{i}")).collect();
    let widget = HorizontalCollapse::new(&items).placeholder(&"...");
    let mut buf = Buffer::new(width, 1);
    widget.render(Rect::from_size(width, 1), &mut buf, state);
}

// ============================================================================
// Span emission
// ============================================================================

#[test]
#[cfg(feature = "tracing")]
fn render_emits_widget_span() {
    let spans = with_captured_spans(|| render_story(25, &mut CollapseState::new()));

    let render = spans
        .iter()
        .find(|s| s.name == "widget_render")
        .expect("widget_render span");
    assert_eq!(
        render.fields.get("widget").map(String::as_str),
        Some("HorizontalCollapse")
    );
    assert_eq!(render.fields.get("items").map(String::as_str), Some("10"));
}

#[test]
#[cfg(feature = "tracing")]
fn solve_span_nests_under_handle() {
    let spans = with_captured_spans(|| render_story(25, &mut CollapseState::new()));

    let handles: Vec<_> = spans.iter().filter(|s| s.name == "collapse_handle").collect();
    assert!(!handles.is_empty(), "expected collapse_handle spans");
    assert!(
        handles
            .iter()
            .all(|s| s.parent_name.as_deref() == Some("widget_render"))
    );

    let solves: Vec<_> = spans.iter().filter(|s| s.name == "collapse_solve").collect();
    assert_eq!(solves.len(), 1, "a first render solves exactly once");
    assert_eq!(solves[0].parent_name.as_deref(), Some("collapse_handle"));
    assert_eq!(solves[0].fields.get("items").map(String::as_str), Some("10"));
}

#[test]
#[cfg(feature = "tracing")]
fn steady_state_render_does_not_solve() {
    let mut state = CollapseState::new();
    render_story(25, &mut state);

    let spans = with_captured_spans(|| render_story(25, &mut state));
    assert!(spans.iter().all(|s| s.name != "collapse_solve"));
}

// ============================================================================
// Zero overhead
// ============================================================================

#[test]
#[cfg(not(feature = "tracing"))]
fn zero_overhead_no_spans_without_feature() {
    let spans = with_captured_spans(|| render_story(25, &mut CollapseState::new()));
    assert!(spans.is_empty(), "got {spans:?}");
}
