//! Lifecycle-scoped navigation orchestrator.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use wayfinder_links::NavigationConfig;
use wayfinder_store::{Payload, TransientDataRegistry};

use crate::controller::{HandleState, NavController, NavOptions};
use crate::diagnostics::{DiagnosticSink, LOG_TARGET};
use crate::dispatch::Dispatcher;
use crate::error::{NavigationError, NavigationResult};

/// Drives whichever navigation engine is currently attached.
///
/// A screen attaches its engine with [`set_nav_controller`] when it comes up
/// and detaches it with [`clear_nav_controller`] when it goes away. While
/// detached, every operation fails with [`NavigationError::NotAttached`].
///
/// [`set_nav_controller`]: NavigationManager::set_nav_controller
/// [`clear_nav_controller`]: NavigationManager::clear_nav_controller
///
/// # Examples
///
/// ```
/// use wayfinder_navigation::{NavigationError, NavigationManager};
///
/// let manager = NavigationManager::new();
/// assert_eq!(manager.navigate("home"), Err(NavigationError::NotAttached));
/// ```
pub struct NavigationManager {
	state: RwLock<HandleState>,
	dispatcher: Dispatcher,
}

impl fmt::Debug for NavigationManager {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("NavigationManager")
			.field("state", &*self.state.read())
			.field("config", self.dispatcher.config())
			.finish()
	}
}

impl Default for NavigationManager {
	fn default() -> Self {
		Self::new()
	}
}

impl NavigationManager {
	/// Creates a detached manager using the process-wide config and registry.
	pub fn new() -> Self {
		Self {
			state: RwLock::new(HandleState::Detached),
			dispatcher: Dispatcher::new("manager"),
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

	/// Returns the registry payloads are stored in.
	pub fn registry(&self) -> &Arc<TransientDataRegistry> {
		self.dispatcher.registry()
	}

	pub fn config(&self) -> &Arc<NavigationConfig> {
		self.dispatcher.config()
	}

	/// Attaches an engine, replacing any previous one.
	pub fn set_nav_controller(&self, controller: Arc<dyn NavController>) {
		*self.state.write() = HandleState::Attached(controller);
		tracing::debug!(target: LOG_TARGET, "NavController set");
	}

	/// Detaches the engine. Does nothing when already detached.
	pub fn clear_nav_controller(&self) {
		let mut state = self.state.write();
		if state.is_attached() {
			*state = HandleState::Detached;
			tracing::debug!(target: LOG_TARGET, "NavController cleared");
		}
	}

	pub fn is_attached(&self) -> bool {
		self.state.read().is_attached()
	}

	/// Navigates to a route, deep link or app link.
	pub fn navigate(&self, destination: &str) -> NavigationResult {
		self.navigate_with_options(destination, None)
	}

	/// Navigates, applying `options` when the destination is a route.
	pub fn navigate_with_options(&self, destination: &str, options: Option<&NavOptions>) -> NavigationResult {
		let handle = self.handle("navigate", Some(destination))?;
		self.dispatcher
			.navigate(handle.as_ref(), destination, None, options)
	}

	/// Navigates to a route and hands `data` to the destination.
	///
	/// The payload is stored in the registry and its token appended to the
	/// route as `dataKey`. Link destinations are dispatched without it.
	pub fn navigate_with_data<T: Any + Send + Sync>(
		&self,
		destination: &str,
		data: T,
		options: Option<&NavOptions>,
	) -> NavigationResult {
		let handle = self.handle("navigate", Some(destination))?;
		self.dispatcher
			.navigate(handle.as_ref(), destination, Some(Arc::new(data)), options)
	}

	/// Pops one level.
	pub fn navigate_up(&self) -> NavigationResult {
		let handle = self.handle("navigate_up", None)?;
		self.dispatcher.navigate_up(handle.as_ref())
	}

	/// Pops to the start destination, keeping it.
	pub fn navigate_to_root(&self) -> NavigationResult {
		let handle = self.handle("navigate_to_root", None)?;
		self.dispatcher.navigate_to_root(handle.as_ref())
	}

	/// Pops to the start destination and removes it too.
	pub fn clear_back_stack(&self) -> NavigationResult {
		let handle = self.handle("clear_back_stack", None)?;
		self.dispatcher.clear_back_stack(handle.as_ref())
	}

	/// Dispatches a deep link or app link directly, bypassing payload handling.
	pub fn handle_deep_link(&self, link: &str) -> NavigationResult {
		let handle = self.handle("handle_deep_link", Some(link))?;
		self.dispatcher.handle_deep_link(handle.as_ref(), link)
	}

	/// Pops back to `route`, leaving `data` for it under the current entry's
	/// `dataKey` argument.
	pub fn pop_back_stack_with_data<T: Any + Send + Sync>(&self, route: &str, data: Option<T>) -> NavigationResult {
		let handle = self.handle("pop_back_stack_with_data", Some(route))?;
		self.dispatcher.pop_back_stack_with_data(
			handle.as_ref(),
			route,
			data.map(|data| Arc::new(data) as Payload),
		)
	}

	/// Drops every stored payload.
	pub fn clear_navigation_data(&self) {
		self.dispatcher.registry().clear();
	}

	// The lock is released before the engine is called
	fn handle(&self, action: &'static str, subject: Option<&str>) -> Result<Arc<dyn NavController>, NavigationError> {
		let handle = self.state.read().handle();
		handle.ok_or_else(|| {
			self.dispatcher
				.reject(action, subject, NavigationError::NotAttached)
		})
	}
}
