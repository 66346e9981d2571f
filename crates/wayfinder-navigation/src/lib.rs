//! # Wayfinder Navigation
//!
//! Navigation orchestration on top of a pluggable navigation engine.
//!
//! Callers hand over a destination string. It is classified as a route, a
//! deep link or an app link, turned into the matching engine call, and any
//! payload travels out of band through the
//! [`TransientDataRegistry`](wayfinder_store::TransientDataRegistry).
//!
//! ## Entry points
//!
//! - [`NavigationManager`]: lifecycle-scoped; engines attach and detach
//! - [`ScreenNavigator`]: bound to one engine
//! - [`ContextNavigator`]: no engine; launches links through an [`AppLauncher`]
//!
//! All of them return [`NavigationResult`] and never panic on engine
//! failure.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use wayfinder_links::DeepLinkRequest;
//! use wayfinder_navigation::{
//!     ArgumentSource, EngineError, NavArguments, NavController, NavOptions, NavigationManager,
//!     navigation_data,
//! };
//! use wayfinder_store::TransientDataRegistry;
//!
//! #[derive(Default)]
//! struct Engine(parking_lot::Mutex<Vec<String>>);
//!
//! impl NavController for Engine {
//!     fn navigate(&self, route: &str, _: Option<&NavOptions>) -> Result<(), EngineError> {
//!         self.0.lock().push(route.to_string());
//!         Ok(())
//!     }
//!     fn navigate_deep_link(&self, request: &DeepLinkRequest) -> Result<(), EngineError> {
//!         self.0.lock().push(request.to_string());
//!         Ok(())
//!     }
//!     fn navigate_up(&self) -> Result<bool, EngineError> { Ok(true) }
//!     fn pop_back_stack_to_start(&self, _: bool) -> Result<bool, EngineError> { Ok(true) }
//!     fn pop_back_stack(&self, _: &str, _: bool) -> Result<bool, EngineError> { Ok(true) }
//!     fn set_current_entry_argument(&self, _: &str, _: &str) -> Result<(), EngineError> { Ok(()) }
//! }
//!
//! let registry = Arc::new(TransientDataRegistry::new());
//! let engine = Arc::new(Engine::default());
//! let manager = NavigationManager::new().with_registry(Arc::clone(&registry));
//! manager.set_nav_controller(engine.clone());
//!
//! manager.navigate_with_data("cart", 3u32, None).unwrap();
//!
//! // On the destination side
//! let route = engine.0.lock()[0].clone();
//! let args = NavArguments::from_route(&route);
//! assert!(args.data_key().is_some());
//! assert_eq!(*navigation_data::<u32, _>(&args, &registry).unwrap(), 3);
//! ```

pub mod arguments;
pub mod context;
pub mod controller;
pub mod diagnostics;
mod dispatch;
pub mod error;
pub mod graph;
pub mod manager;
pub mod screen;


pub use arguments::{
	ArgumentSource, DATA_KEY, NavArguments, NavigationData, navigation_data, take_navigation_data,
};
pub use context::{ACTION_VIEW, AppLauncher, ContextNavigator, LaunchIntent, LaunchOrigin};
pub use controller::{HandleState, NavController, NavOptions, PopUpTo};
pub use diagnostics::{Diagnostic, DiagnosticSink, LOG_TARGET, NullSink, TracingSink};
pub use error::{EngineError, NavigationError, NavigationErrorKind, NavigationResult, Operation};
pub use graph::{
	FeatureRouteProvider, RouteDefinition, RouteError, RouteMatch, RoutePattern, RouteRegistry,
	StaticRouteProvider,
};
pub use manager::NavigationManager;
pub use screen::ScreenNavigator;
