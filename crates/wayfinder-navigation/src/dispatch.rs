//! Resolution and dispatch shared by every entry point.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use wayfinder_links::{DeepLinkRequest, DeepLinkRequestBuilder, LinkClassifier, LinkType, NavigationConfig};
use wayfinder_store::{DataToken, Payload, TransientDataRegistry};

use crate::arguments::DATA_KEY;
use crate::controller::{NavController, NavOptions};
use crate::diagnostics::{Diagnostic, DiagnosticSink, LOG_TARGET, TracingSink, report};
use crate::error::{EngineError, NavigationError, NavigationResult, Operation};

/// What a destination resolves to before it reaches the engine.
#[derive(Debug)]
pub(crate) enum Plan {
	Link(DeepLinkRequest),
	Route {
		route: String,
		token: Option<DataToken>,
	},
}

/// Classification, token minting and engine calls for one entry point.
pub(crate) struct Dispatcher {
	origin: &'static str,
	classifier: LinkClassifier,
	requests: DeepLinkRequestBuilder,
	registry: Arc<TransientDataRegistry>,
	diagnostics: Arc<dyn DiagnosticSink>,
}

impl Dispatcher {
	pub(crate) fn new(origin: &'static str) -> Self {
		Self::with_parts(
			origin,
			NavigationConfig::shared(),
			TransientDataRegistry::global(),
			Arc::new(TracingSink),
		)
	}

	pub(crate) fn with_parts(
		origin: &'static str,
		config: Arc<NavigationConfig>,
		registry: Arc<TransientDataRegistry>,
		diagnostics: Arc<dyn DiagnosticSink>,
	) -> Self {
		Self {
			origin,
			classifier: LinkClassifier::new(Arc::clone(&config)),
			requests: DeepLinkRequestBuilder::new(config),
			registry,
			diagnostics,
		}
	}

	pub(crate) fn set_config(&mut self, config: Arc<NavigationConfig>) {
		self.classifier = LinkClassifier::new(Arc::clone(&config));
		self.requests = DeepLinkRequestBuilder::new(config);
	}

	pub(crate) fn set_registry(&mut self, registry: Arc<TransientDataRegistry>) {
		self.registry = registry;
	}

	pub(crate) fn set_diagnostics(&mut self, diagnostics: Arc<dyn DiagnosticSink>) {
		self.diagnostics = diagnostics;
	}

	pub(crate) fn config(&self) -> &Arc<NavigationConfig> {
		self.classifier.config()
	}

	pub(crate) fn classifier(&self) -> &LinkClassifier {
		&self.classifier
	}

	pub(crate) fn registry(&self) -> &Arc<TransientDataRegistry> {
		&self.registry
	}

	/// Stores a payload under a fresh token.
	pub(crate) fn mint(&self, payload: Payload) -> DataToken {
		let token = self.registry.generate_key();
		self.registry.put_payload(token.clone(), payload);
		token
	}

	/// Reports a failure and hands it back.
	pub(crate) fn reject(
		&self,
		action: &'static str,
		subject: Option<&str>,
		error: NavigationError,
	) -> NavigationError {
		let mut diagnostic = Diagnostic::new(self.origin, action, error.clone());
		if let Some(subject) = subject {
			diagnostic = diagnostic.with_subject(subject);
		}
		report(self.diagnostics.as_ref(), &diagnostic);
		error
	}

	pub(crate) fn fail(
		&self,
		action: &'static str,
		subject: Option<&str>,
		error: NavigationError,
	) -> NavigationResult {
		Err(self.reject(action, subject, error))
	}

	/// Resolves a non-blank destination, minting a token for route payloads.
	pub(crate) fn plan(&self, destination: &str, payload: Option<Payload>) -> Result<Plan, NavigationError> {
		if destination.trim().is_empty() {
			return Err(NavigationError::EmptyDestination);
		}

		match self.classifier.classify(destination) {
			LinkType::DeepLink | LinkType::AppLink => self
				.requests
				.build(destination)
				.map(Plan::Link)
				.ok_or_else(|| NavigationError::InvalidDeepLink(destination.to_string())),
			LinkType::Route => {
				let token = payload.map(|payload| self.mint(payload));
				let route = match &token {
					Some(token) => append_data_key(destination, token),
					None => destination.to_string(),
				};
				Ok(Plan::Route { route, token })
			}
			LinkType::Invalid => Err(NavigationError::InvalidLinkFormat(destination.to_string())),
		}
	}

	pub(crate) fn navigate(
		&self,
		handle: &dyn NavController,
		destination: &str,
		payload: Option<Payload>,
		options: Option<&NavOptions>,
	) -> NavigationResult {
		let plan = match self.plan(destination, payload) {
			Ok(plan) => plan,
			Err(error) => return self.fail("navigate", Some(destination), error),
		};

		let outcome = match &plan {
			Plan::Link(request) => guarded(|| handle.navigate_deep_link(request)),
			Plan::Route { route, .. } => {
				tracing::debug!(target: LOG_TARGET, route = %route, "dispatching route");
				guarded(|| handle.navigate(route, options))
			}
		};

		outcome.or_else(|source| {
			if let Plan::Route {
				token: Some(token), ..
			} = &plan
			{
				self.registry.remove(token);
			}
			self.fail(
				"navigate",
				Some(destination),
				NavigationError::engine(Operation::Navigate, source),
			)
		})
	}

	pub(crate) fn navigate_up(&self, handle: &dyn NavController) -> NavigationResult {
		match guarded(|| handle.navigate_up()) {
			Ok(true) => Ok(()),
			Ok(false) => self.fail("navigate_up", None, NavigationError::CannotNavigateUp),
			Err(source) => self.fail(
				"navigate_up",
				None,
				NavigationError::engine(Operation::NavigateUp, source),
			),
		}
	}

	pub(crate) fn navigate_to_root(&self, handle: &dyn NavController) -> NavigationResult {
		match guarded(|| handle.pop_back_stack_to_start(false)) {
			Ok(true) => Ok(()),
			Ok(false) => self.fail("navigate_to_root", None, NavigationError::CannotNavigateToRoot),
			Err(source) => self.fail(
				"navigate_to_root",
				None,
				NavigationError::engine(Operation::NavigateToRoot, source),
			),
		}
	}

	pub(crate) fn clear_back_stack(&self, handle: &dyn NavController) -> NavigationResult {
		// An already empty stack is not an error
		match guarded(|| handle.pop_back_stack_to_start(true)) {
			Ok(_) => Ok(()),
			Err(source) => self.fail(
				"clear_back_stack",
				None,
				NavigationError::engine(Operation::ClearBackStack, source),
			),
		}
	}

	pub(crate) fn handle_deep_link(&self, handle: &dyn NavController, link: &str) -> NavigationResult {
		let Some(request) = self.requests.build(link) else {
			return self.fail(
				"handle_deep_link",
				Some(link),
				NavigationError::InvalidDeepLink(link.to_string()),
			);
		};

		guarded(|| handle.navigate_deep_link(&request)).or_else(|source| {
			self.fail(
				"handle_deep_link",
				Some(link),
				NavigationError::engine(Operation::HandleDeepLink, source),
			)
		})
	}

	pub(crate) fn pop_back_stack_with_data(
		&self,
		handle: &dyn NavController,
		route: &str,
		payload: Option<Payload>,
	) -> NavigationResult {
		if route.trim().is_empty() {
			return self.fail(
				"pop_back_stack_with_data",
				Some(route),
				NavigationError::EmptyDestination,
			);
		}

		let token = payload.map(|payload| self.mint(payload));
		let outcome = guarded(|| {
			if let Some(token) = &token {
				handle.set_current_entry_argument(DATA_KEY, token)?;
			}
			// The engine's "nothing to pop" answer is not surfaced
			handle.pop_back_stack(route, false).map(|_| ())
		});

		outcome.or_else(|source| {
			if let Some(token) = &token {
				self.registry.remove(token);
			}
			self.fail(
				"pop_back_stack_with_data",
				Some(route),
				NavigationError::engine(Operation::PopBackStack, source),
			)
		})
	}
}

/// Runs an engine call, turning a panic into an [`EngineError`].
pub(crate) fn guarded<R>(call: impl FnOnce() -> Result<R, EngineError>) -> Result<R, EngineError> {
	match catch_unwind(AssertUnwindSafe(call)) {
		Ok(result) => result,
		Err(panic) => Err(EngineError::from_panic(panic)),
	}
}

/// Appends `dataKey=<token>` with `?`, or `&` when the route already has a query.
pub(crate) fn append_data_key(route: &str, token: &DataToken) -> String {
	let separator = if route.contains('?') { '&' } else { '?' };
	format!("{}{}{}={}", route, separator, DATA_KEY, token)
}
