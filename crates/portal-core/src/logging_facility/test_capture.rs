//! In-memory log capture for tests
//!
//! Installs a layer that records every event the op macros emit, so tests
//! can assert on the structured fields (op, event, err_code) instead of
//! scraping formatted output. The capture is process-wide: the first test
//! to call [`init_test_capture`] installs it and every later call gets the
//! same handle, so assertions must be scoped by op name.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, OnceLock};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// One recorded log event, fields flattened to strings
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub fields: BTreeMap<String, String>,
}

impl CapturedEvent {
    /// Field value by name, if the event carried it
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// The `op` field the op macros always set
    pub fn op(&self) -> Option<&str> {
        self.field("op")
    }

    /// The `event` field ("start", "end", "end_error")
    pub fn event(&self) -> Option<&str> {
        self.field("event")
    }
}

#[derive(Default)]
struct Flattener {
    fields: BTreeMap<String, String>,
}

impl Visit for Flattener {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields.insert(field.name().to_string(), value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.fields.insert(field.name().to_string(), value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields.insert(field.name().to_string(), value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.fields.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.fields
            .insert(field.name().to_string(), format!("{:?}", value));
    }
}

/// Layer half of the capture; reads go through [`TestCapture`]
pub struct TestCaptureLayer {
    log: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S> Layer<S> for TestCaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut flat = Flattener::default();
        event.record(&mut flat);

        let captured = CapturedEvent {
            level: *event.metadata().level(),
            fields: flat.fields,
        };

        if let Ok(mut log) = self.log.lock() {
            log.push(captured);
        }
    }
}

/// Reader handle shared by every test in the process
#[derive(Clone)]
pub struct TestCapture {
    log: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCapture {
    /// Snapshot of everything captured so far
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.log.lock().map(|log| log.clone()).unwrap_or_default()
    }

    /// Events a given op emitted, in emission order
    pub fn events_for_op(&self, op: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.op() == Some(op))
            .collect()
    }

    /// The first captured event matching op and event type
    ///
    /// # Panics
    /// Panics when no such event was captured
    pub fn require(&self, op: &str, event: &str) -> CapturedEvent {
        self.events_for_op(op)
            .into_iter()
            .find(|e| e.event() == Some(event))
            .unwrap_or_else(|| panic!("no captured event op={} event={}", op, event))
    }

    /// How many events a given op emitted with the given event type
    pub fn count(&self, op: &str, event: &str) -> usize {
        self.events_for_op(op)
            .iter()
            .filter(|e| e.event() == Some(event))
            .count()
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install (once) and return the process-wide capture
///
/// # Example
///
/// ```
/// use portal_core::logging_facility::init_test_capture;
/// use portal_core::log_op_start;
///
/// let capture = init_test_capture();
/// log_op_start!("mark_invoice_paid");
/// capture.require("mark_invoice_paid", "start");
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let log = Arc::new(Mutex::new(Vec::new()));
            let layer = TestCaptureLayer { log: log.clone() };
            tracing_subscriber::registry().with(layer).init();
            TestCapture { log }
        })
        .clone()
}
