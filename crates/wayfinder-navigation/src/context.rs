//! Navigation from callers without a navigation engine.
//!
//! An application context cannot push routes. It can only start a new
//! top-level screen for a link, passing any payload token as a launch extra
//! instead of a query parameter.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use url::Url;
use wayfinder_links::{LinkType, NavigationConfig};
use wayfinder_store::{Payload, TransientDataRegistry};

use crate::arguments::{ArgumentSource, DATA_KEY};
use crate::diagnostics::DiagnosticSink;
use crate::dispatch::{Dispatcher, guarded};
use crate::error::{EngineError, NavigationError, NavigationResult, Operation};

/// Action of every intent built by [`ContextNavigator`].
pub const ACTION_VIEW: &str = "android.intent.action.VIEW";

/// Kind of caller a [`ContextNavigator`] serves. Only affects messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaunchOrigin {
	Context,
	Activity,
}

impl LaunchOrigin {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Context => "context",
			Self::Activity => "activity",
		}
	}
}

impl fmt::Display for LaunchOrigin {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Request to start a new top-level screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchIntent {
	action: String,
	uri: Url,
	extras: BTreeMap<String, String>,
}

impl LaunchIntent {
	/// Creates a view intent for `uri`.
	pub fn view(uri: Url) -> Self {
		Self {
			action: ACTION_VIEW.to_string(),
			uri,
			extras: BTreeMap::new(),
		}
	}

	pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.extras.insert(key.into(), value.into());
		self
	}

	pub fn action(&self) -> &str {
		&self.action
	}

	pub fn uri(&self) -> &Url {
		&self.uri
	}

	pub fn extras(&self) -> &BTreeMap<String, String> {
		&self.extras
	}

	pub fn extra(&self, key: &str) -> Option<&str> {
		self.extras.get(key).map(String::as_str)
	}
}

impl ArgumentSource for LaunchIntent {
	fn argument(&self, key: &str) -> Option<&str> {
		self.extra(key)
	}
}

/// Starts screens on behalf of a [`ContextNavigator`].
pub trait AppLauncher: Send + Sync {
	fn start(&self, intent: &LaunchIntent) -> Result<(), EngineError>;
}

/// Navigation entry point for an application context or activity.
///
/// Deep links and app links are launched as they are, without normalization.
/// Routes are rejected, since only a navigation engine can push them.
pub struct ContextNavigator {
	launcher: Arc<dyn AppLauncher>,
	origin: LaunchOrigin,
	dispatcher: Dispatcher,
}

impl fmt::Debug for ContextNavigator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ContextNavigator")
			.field("origin", &self.origin)
			.field("config", self.dispatcher.config())
			.finish_non_exhaustive()
	}
}

impl ContextNavigator {
	/// Creates a navigator for an application context.
	pub fn new(launcher: Arc<dyn AppLauncher>) -> Self {
		Self::with_origin(launcher, LaunchOrigin::Context)
	}

	/// Creates a navigator for an activity.
	pub fn for_activity(launcher: Arc<dyn AppLauncher>) -> Self {
		Self::with_origin(launcher, LaunchOrigin::Activity)
	}

	fn with_origin(launcher: Arc<dyn AppLauncher>, origin: LaunchOrigin) -> Self {
		Self {
			launcher,
			origin,
			dispatcher: Dispatcher::new(origin.as_str()),
		}
	}

	pub fn with_config(mut self, config: Arc<NavigationConfig>) -> Self {
		self.dispatcher.set_config(config);
		self
	}

	pub fn with_registry(mut self, registry: Arc<TransientDataRegistry>) -> Self {
		self.dispatcher.set_registry(registry);
		self
	}

	pub fn with_diagnostics(mut self, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
		self.dispatcher.set_diagnostics(diagnostics);
		self
	}

	pub fn origin(&self) -> LaunchOrigin {
		self.origin
	}

	pub fn registry(&self) -> &Arc<TransientDataRegistry> {
		self.dispatcher.registry()
	}

	/// Launches a deep link or app link.
	pub fn navigate(&self, destination: &str) -> NavigationResult {
		self.launch(destination, None)
	}

	/// Launches a link with `data` attached as the `dataKey` extra.
	pub fn navigate_with_data<T: Any + Send + Sync>(&self, destination: &str, data: T) -> NavigationResult {
		self.launch(destination, Some(Arc::new(data)))
	}

	fn launch(&self, destination: &str, payload: Option<Payload>) -> NavigationResult {
		let intent = match self.resolve(destination) {
			Ok(intent) => intent,
			Err(error) => return self.dispatcher.fail("navigate", Some(destination), error),
		};

		let token = payload.map(|payload| self.dispatcher.mint(payload));
		let intent = match &token {
			Some(token) => intent.with_extra(DATA_KEY, token.as_str()),
			None => intent,
		};

		guarded(|| self.launcher.start(&intent)).or_else(|source| {
			if let Some(token) = &token {
				self.dispatcher.registry().remove(token);
			}
			self.dispatcher.fail(
				"navigate",
				Some(destination),
				NavigationError::engine(Operation::Launch(self.origin), source),
			)
		})
	}

	fn resolve(&self, destination: &str) -> Result<LaunchIntent, NavigationError> {
		if destination.trim().is_empty() {
			return Err(NavigationError::EmptyDestination);
		}

		match self.dispatcher.classifier().classify(destination) {
			LinkType::DeepLink | LinkType::AppLink => Url::parse(destination)
				.map(LaunchIntent::view)
				.map_err(|_| NavigationError::InvalidDeepLink(destination.to_string())),
			LinkType::Route => Err(NavigationError::RouteRequiresController(self.origin)),
			LinkType::Invalid => Err(NavigationError::InvalidLinkFormat(destination.to_string())),
		}
	}
}
