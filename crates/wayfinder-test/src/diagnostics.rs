//! Recording diagnostic sink.

use parking_lot::Mutex;
use wayfinder_navigation::{Diagnostic, DiagnosticSink, NavigationErrorKind};

/// A [`DiagnosticSink`] that keeps every reported failure.
#[derive(Debug, Default)]
pub struct RecordingSink {
	diagnostics: Mutex<Vec<Diagnostic>>,
}

impl RecordingSink {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn diagnostics(&self) -> Vec<Diagnostic> {
		self.diagnostics.lock().clone()
	}

	pub fn len(&self) -> usize {
		self.diagnostics.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.diagnostics.lock().is_empty()
	}

	/// Kinds of every recorded failure, in order.
	pub fn kinds(&self) -> Vec<NavigationErrorKind> {
		self.diagnostics.lock().iter().map(Diagnostic::kind).collect()
	}

	/// Messages of every recorded failure, in order.
	pub fn messages(&self) -> Vec<String> {
		self.diagnostics
			.lock()
			.iter()
			.map(|diagnostic| diagnostic.error.message())
			.collect()
	}
}

impl DiagnosticSink for RecordingSink {
	fn record(&self, diagnostic: &Diagnostic) {
		self.diagnostics.lock().push(diagnostic.clone());
	}
}
