//! Failure diagnostics.
//!
//! Every failed navigation is reported to a [`DiagnosticSink`]. Reporting is
//! fire-and-forget: a sink that panics is ignored and never changes the
//! result returned to the caller.

use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::error::{NavigationError, NavigationErrorKind};

/// Log target used by [`TracingSink`].
pub const LOG_TARGET: &str = "wayfinder::navigation";

/// A recorded navigation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
	/// Entry point that handled the call (`manager`, `screen` or `context`).
	pub origin: &'static str,
	/// Operation name, e.g. `navigate` or `navigate_up`.
	pub action: &'static str,
	/// Destination or link the operation was called with.
	pub subject: Option<String>,
	pub error: NavigationError,
}

impl Diagnostic {
	pub fn new(origin: &'static str, action: &'static str, error: NavigationError) -> Self {
		Self {
			origin,
			action,
			subject: None,
			error,
		}
	}

	pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
		self.subject = Some(subject.into());
		self
	}

	pub fn kind(&self) -> NavigationErrorKind {
		self.error.kind()
	}
}

/// Receives navigation failures.
pub trait DiagnosticSink: Send + Sync {
	fn record(&self, diagnostic: &Diagnostic);
}

/// Emits each failure as a `tracing` warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
	fn record(&self, diagnostic: &Diagnostic) {
		tracing::warn!(
			target: LOG_TARGET,
			origin = diagnostic.origin,
			action = diagnostic.action,
			subject = diagnostic.subject.as_deref().unwrap_or(""),
			kind = ?diagnostic.kind(),
			error = %diagnostic.error,
			"navigation failed"
		);
	}
}

/// Discards every failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
	fn record(&self, _diagnostic: &Diagnostic) {}
}

pub(crate) fn report(sink: &dyn DiagnosticSink, diagnostic: &Diagnostic) {
	let _ = catch_unwind(AssertUnwindSafe(|| sink.record(diagnostic)));
}
