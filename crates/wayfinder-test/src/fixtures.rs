//! `rstest` fixtures.
//!
//! Every fixture uses its own [`TransientDataRegistry`], so tests never see
//! each other's payloads and do not need to be serialized.
//!
//! ```rust,ignore
//! use rstest::rstest;
//! use wayfinder_test::fixtures::{NavigationHarness, harness};
//!
//! #[rstest]
//! fn test_navigate(harness: NavigationHarness) {
//!     harness.manager.navigate("cart").unwrap();
//!     assert_eq!(harness.controller.last_route().as_deref(), Some("cart"));
//! }
//! ```

use std::sync::Arc;

use rstest::fixture;
use wayfinder_navigation::{
	AppLauncher, ContextNavigator, DiagnosticSink, NavController, NavigationManager, ScreenNavigator,
};
use wayfinder_store::TransientDataRegistry;

use crate::controller::RecordingNavController;
use crate::diagnostics::RecordingSink;
use crate::launcher::RecordingLauncher;
use crate::logging::init_test_logging;

#[fixture]
pub fn registry() -> Arc<TransientDataRegistry> {
	Arc::new(TransientDataRegistry::new())
}

#[fixture]
pub fn controller() -> Arc<RecordingNavController> {
	Arc::new(RecordingNavController::new())
}

#[fixture]
pub fn sink() -> Arc<RecordingSink> {
	Arc::new(RecordingSink::new())
}

/// A manager with a recording engine attached.
pub struct NavigationHarness {
	pub manager: NavigationManager,
	pub controller: Arc<RecordingNavController>,
	pub registry: Arc<TransientDataRegistry>,
	pub sink: Arc<RecordingSink>,
}

impl NavigationHarness {
	pub fn new(controller: Arc<RecordingNavController>) -> Self {
		init_test_logging();
		let registry = registry();
		let sink = sink();
		let manager = NavigationManager::new()
			.with_registry(Arc::clone(&registry))
			.with_diagnostics(Arc::clone(&sink) as Arc<dyn DiagnosticSink>);
		manager.set_nav_controller(Arc::clone(&controller) as Arc<dyn NavController>);
		Self {
			manager,
			controller,
			registry,
			sink,
		}
	}

	/// A screen navigator over the same engine, registry and sink.
	pub fn screen(&self) -> ScreenNavigator {
		ScreenNavigator::new(Arc::clone(&self.controller) as Arc<dyn NavController>)
			.with_registry(Arc::clone(&self.registry))
			.with_diagnostics(Arc::clone(&self.sink) as Arc<dyn DiagnosticSink>)
	}
}

#[fixture]
pub fn harness() -> NavigationHarness {
	NavigationHarness::new(controller())
}

/// A context navigator with a recording launcher.
pub struct ContextHarness {
	pub navigator: ContextNavigator,
	pub launcher: Arc<RecordingLauncher>,
	pub registry: Arc<TransientDataRegistry>,
	pub sink: Arc<RecordingSink>,
}

#[fixture]
pub fn context_harness() -> ContextHarness {
	init_test_logging();
	let launcher = Arc::new(RecordingLauncher::new());
	let registry = registry();
	let sink = sink();
	let navigator = ContextNavigator::new(Arc::clone(&launcher) as Arc<dyn AppLauncher>)
		.with_registry(Arc::clone(&registry))
		.with_diagnostics(Arc::clone(&sink) as Arc<dyn DiagnosticSink>);
	ContextHarness {
		navigator,
		launcher,
		registry,
		sink,
	}
}
