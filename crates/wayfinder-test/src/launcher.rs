//! Recording application launcher.

use parking_lot::Mutex;
use wayfinder_navigation::{AppLauncher, EngineError, LaunchIntent};

/// An [`AppLauncher`] that keeps every intent it is asked to start.
#[derive(Debug, Default)]
pub struct RecordingLauncher {
	intents: Mutex<Vec<LaunchIntent>>,
	failure: Mutex<Option<String>>,
}

impl RecordingLauncher {
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a launcher that records, then fails with `message`.
	pub fn failing(message: impl Into<String>) -> Self {
		let launcher = Self::new();
		launcher.fail_with(message);
		launcher
	}

	pub fn fail_with(&self, message: impl Into<String>) {
		*self.failure.lock() = Some(message.into());
	}

	pub fn intents(&self) -> Vec<LaunchIntent> {
		self.intents.lock().clone()
	}

	pub fn last_intent(&self) -> Option<LaunchIntent> {
		self.intents.lock().last().cloned()
	}
}

impl AppLauncher for RecordingLauncher {
	fn start(&self, intent: &LaunchIntent) -> Result<(), EngineError> {
		self.intents.lock().push(intent.clone());
		match self.failure.lock().as_ref() {
			Some(message) => Err(EngineError::new(message.clone())),
			None => Ok(()),
		}
	}
}
