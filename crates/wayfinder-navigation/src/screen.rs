//! Navigation from a screen that owns its engine.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use wayfinder_links::NavigationConfig;
use wayfinder_store::{Payload, TransientDataRegistry};

use crate::controller::{NavController, NavOptions};
use crate::diagnostics::DiagnosticSink;
use crate::dispatch::Dispatcher;
use crate::error::NavigationResult;

/// Entry point bound to one engine for its whole lifetime.
///
/// Same rules and messages as [`NavigationManager`](crate::NavigationManager),
/// without the attach/detach state.
pub struct ScreenNavigator {
	handle: Arc<dyn NavController>,
	dispatcher: Dispatcher,
}

impl fmt::Debug for ScreenNavigator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ScreenNavigator")
			.field("config", self.dispatcher.config())
			.finish_non_exhaustive()
	}
}

impl ScreenNavigator {
	pub fn new(handle: Arc<dyn NavController>) -> Self {
		Self {
			handle,
			dispatcher: Dispatcher::new("screen"),
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

	pub fn handle(&self) -> &Arc<dyn NavController> {
		&self.handle
	}

	pub fn registry(&self) -> &Arc<TransientDataRegistry> {
		self.dispatcher.registry()
	}

	pub fn navigate(&self, destination: &str) -> NavigationResult {
		self.navigate_with_options(destination, None)
	}

	pub fn navigate_with_options(&self, destination: &str, options: Option<&NavOptions>) -> NavigationResult {
		self.dispatcher
			.navigate(self.handle.as_ref(), destination, None, options)
	}

	pub fn navigate_with_data<T: Any + Send + Sync>(
		&self,
		destination: &str,
		data: T,
		options: Option<&NavOptions>,
	) -> NavigationResult {
		self.dispatcher
			.navigate(self.handle.as_ref(), destination, Some(Arc::new(data)), options)
	}

	pub fn navigate_up(&self) -> NavigationResult {
		self.dispatcher.navigate_up(self.handle.as_ref())
	}

	pub fn navigate_to_root(&self) -> NavigationResult {
		self.dispatcher.navigate_to_root(self.handle.as_ref())
	}

	pub fn clear_back_stack(&self) -> NavigationResult {
		self.dispatcher.clear_back_stack(self.handle.as_ref())
	}

	pub fn handle_deep_link(&self, link: &str) -> NavigationResult {
		self.dispatcher.handle_deep_link(self.handle.as_ref(), link)
	}

	pub fn pop_back_stack_with_data<T: Any + Send + Sync>(&self, route: &str, data: Option<T>) -> NavigationResult {
		self.dispatcher.pop_back_stack_with_data(
			self.handle.as_ref(),
			route,
			data.map(|data| Arc::new(data) as Payload),
		)
	}

	pub fn clear_navigation_data(&self) {
		self.dispatcher.registry().clear();
	}
}
