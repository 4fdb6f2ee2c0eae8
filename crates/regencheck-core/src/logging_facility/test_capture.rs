//! In-memory event capture for logging assertions
//!
//! Tests install [`init_test_capture`] once per process and then query
//! the recorded boundary events of the validation pipeline: which ops
//! started and ended, which error codes were logged, and the raw field
//! values (`path`, `verdict`, `target_count`, ...) rendered as strings.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};
use tracing::field::{Field, Visit};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use crate::schema::{FIELD_COMPONENT, FIELD_ERR_CODE, FIELD_EVENT, FIELD_OP};

/// One recorded event, every field rendered to a string
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub component: Option<String>,
    pub op: Option<String>,
    pub event: Option<String>,
    pub fields: HashMap<String, String>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Whether this is the `event` boundary of `op`
    pub fn is(&self, op: &str, event: &str) -> bool {
        self.op.as_deref() == Some(op) && self.event.as_deref() == Some(event)
    }
}

/// Renders every field value; `%x` and `?x` both arrive via `record_debug`
#[derive(Default)]
struct StringFields(HashMap<String, String>);

impl Visit for StringFields {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.0.insert(field.name().to_string(), value.to_string());
    }
}

/// Subscriber layer feeding a [`TestCapture`]
pub struct TestCaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCaptureLayer {
    pub fn new() -> (Self, TestCapture) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let capture = TestCapture {
            events: Arc::clone(&events),
        };
        (Self { events }, capture)
    }
}

impl<S> Layer<S> for TestCaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = StringFields::default();
        event.record(&mut fields);
        let fields = fields.0;

        let captured = CapturedEvent {
            level: *event.metadata().level(),
            component: fields.get(FIELD_COMPONENT).cloned(),
            op: fields.get(FIELD_OP).cloned(),
            event: fields.get(FIELD_EVENT).cloned(),
            fields,
        };

        if let Ok(mut events) = self.events.lock() {
            events.push(captured);
        }
    }
}

/// Shared handle on everything recorded so far
#[derive(Clone)]
pub struct TestCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCapture {
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Every `event` boundary logged for `op`, in emission order
    pub fn boundaries(&self, op: &str, event: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.is(op, event))
            .collect()
    }

    /// Stable error codes logged by `op`
    pub fn error_codes(&self, op: &str) -> Vec<String> {
        self.boundaries(op, crate::schema::EVENT_END_ERROR)
            .iter()
            .filter_map(|e| e.field(FIELD_ERR_CODE).map(str::to_string))
            .collect()
    }

    /// # Panics
    ///
    /// Panics when no `event` boundary was logged for `op`.
    pub fn assert_event_exists(&self, op: &str, event: &str) {
        let events = self.events();
        assert!(
            events.iter().any(|e| e.is(op, event)),
            "no {event} event for op {op} among {} captured events",
            events.len()
        );
    }

    pub fn count_events<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.events().iter().filter(|e| predicate(e)).count()
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture layer as the global subscriber (first call only)
///
/// All tests in a process share one buffer, so assertions should key on
/// values unique to the test, such as a scratch target path.
///
/// ```
/// use regencheck_core::logging_facility::test_capture::init_test_capture;
/// use regencheck_core::log_op_start;
///
/// let capture = init_test_capture();
/// log_op_start!("read_originals", target_count = 0usize);
/// capture.assert_event_exists("read_originals", "start");
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let (layer, capture) = TestCaptureLayer::new();
            tracing_subscriber::registry().with(layer).init();
            capture
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn captured(op: &str, event: &str, fields: &[(&str, &str)]) -> CapturedEvent {
        CapturedEvent {
            level: Level::INFO,
            component: Some("regencheck_core::validate".to_string()),
            op: Some(op.to_string()),
            event: Some(event.to_string()),
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn test_boundary_match_needs_op_and_event() {
        let event = captured("run_command", "end", &[("status", "exit status: 0")]);

        assert!(event.is("run_command", "end"));
        assert!(!event.is("run_command", "start"));
        assert!(!event.is("validate", "end"));
        assert_eq!(event.field("status"), Some("exit status: 0"));
        assert_eq!(event.field("verdict"), None);
    }

    #[test]
    fn test_error_codes_only_from_error_boundaries() {
        let (_layer, capture) = TestCaptureLayer::new();
        if let Ok(mut events) = capture.events.lock() {
            events.push(captured("run_command", "start", &[]));
            events.push(captured(
                "run_command",
                "end_error",
                &[("err.code", "ERR_COMMAND_SPAWN")],
            ));
        }

        assert_eq!(capture.error_codes("run_command"), vec!["ERR_COMMAND_SPAWN"]);
        assert!(capture.error_codes("read_originals").is_empty());
    }
}
