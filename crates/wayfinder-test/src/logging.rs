//! Test logging utilities.
//!
//! [`init_test_logging`] installs a global `tracing` subscriber that writes
//! through the test harness. [`capture_logs`] records events emitted on the
//! current thread so tests can assert on them.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Once};

use parking_lot::Mutex;
use tracing::field::{Field, Visit};
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt as _};
use tracing_subscriber::util::SubscriberInitExt as _;
use tracing_subscriber::Layer;

static INIT: Once = Once::new();

/// Initialize logging for tests (call once)
///
/// # Examples
///
/// ```
/// use wayfinder_test::logging::init_test_logging;
///
/// init_test_logging();
/// init_test_logging();
/// ```
pub fn init_test_logging() {
	INIT.call_once(|| {
		let _ = tracing_subscriber::fmt()
			.with_test_writer()
			.with_max_level(Level::DEBUG)
			.try_init();
	});
}

/// One captured `tracing` event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedEvent {
	pub level: Level,
	pub target: String,
	pub message: String,
	pub fields: BTreeMap<String, String>,
}

impl CapturedEvent {
	pub fn field(&self, name: &str) -> Option<&str> {
		self.fields.get(name).map(String::as_str)
	}
}

#[derive(Default)]
struct EventVisitor {
	message: String,
	fields: BTreeMap<String, String>,
}

impl Visit for EventVisitor {
	fn record_str(&mut self, field: &Field, value: &str) {
		if field.name() == "message" {
			self.message = value.to_string();
		} else {
			self.fields.insert(field.name().to_string(), value.to_string());
		}
	}

	fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
		if field.name() == "message" {
			self.message = format!("{:?}", value);
		} else {
			self.fields
				.insert(field.name().to_string(), format!("{:?}", value));
		}
	}
}

struct CaptureLayer {
	events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
	fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
		let mut visitor = EventVisitor::default();
		event.record(&mut visitor);
		self.events.lock().push(CapturedEvent {
			level: *event.metadata().level(),
			target: event.metadata().target().to_string(),
			message: visitor.message,
			fields: visitor.fields,
		});
	}
}

/// Events recorded on the current thread while this value is alive.
pub struct CapturedLogs {
	events: Arc<Mutex<Vec<CapturedEvent>>>,
	_guard: DefaultGuard,
}

impl CapturedLogs {
	pub fn events(&self) -> Vec<CapturedEvent> {
		self.events.lock().clone()
	}

	/// Events at `level` whose target is `target`.
	pub fn matching(&self, level: Level, target: &str) -> Vec<CapturedEvent> {
		self.events
			.lock()
			.iter()
			.filter(|event| event.level == level && event.target == target)
			.cloned()
			.collect()
	}
}

/// Starts capturing `tracing` events emitted on the current thread.
///
/// # Examples
///
/// ```
/// use wayfinder_test::logging::capture_logs;
///
/// let logs = capture_logs();
/// tracing::warn!(target: "demo", answer = 42, "hello");
///
/// let events = logs.matching(tracing::Level::WARN, "demo");
/// assert_eq!(events[0].message, "hello");
/// assert_eq!(events[0].field("answer"), Some("42"));
/// ```
pub fn capture_logs() -> CapturedLogs {
	let events = Arc::new(Mutex::new(Vec::new()));
	let layer = CaptureLayer {
		events: Arc::clone(&events),
	};
	let guard = tracing_subscriber::registry().with(layer).set_default();
	CapturedLogs {
		events,
		_guard: guard,
	}
}
