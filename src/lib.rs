//! # Wayfinder
//!
//! Destination resolution, deep-link handling and cross-screen data handoff
//! for navigation engines that address screens by string routes.
//!
//! Callers hand Wayfinder a destination string. It decides whether that is a
//! plain route, a custom-scheme deep link, an HTTPS app link, or garbage, and
//! dispatches it to the engine the application supplies. Arbitrary in-memory
//! values travel alongside a navigation through a process-wide registry keyed
//! by short tokens, so routes stay plain strings.
//!
//! ## Feature Flags
//!
//! - `links` - Classification, normalization, parameter extraction, request building
//! - `store` - Transient data registry and data tokens
//! - `navigation` - Navigation manager, screen and context entry points, route graph
//! - `full` (default) - All of the above
//! - `test-utils` - Recording engine, launcher, diagnostics sink and fixtures
//!
//! ## Quick Example
//!
//! ```rust
//! # #[cfg(feature = "full")]
//! # {
//! use wayfinder::prelude::*;
//!
//! let classifier = LinkClassifier::default();
//! assert_eq!(classifier.classify("cart"), LinkType::Route);
//! assert_eq!(classifier.classify("yfy://product/42"), LinkType::DeepLink);
//!
//! // Without an engine every call fails with a typed error
//! let manager = NavigationManager::new().with_diagnostics(std::sync::Arc::new(NullSink));
//! let error = manager.navigate("cart").unwrap_err();
//! assert_eq!(error, NavigationError::NotAttached);
//! # }
//! ```

#[cfg(feature = "links")]
pub mod links;
#[cfg(feature = "navigation")]
pub mod navigation;
#[cfg(feature = "store")]
pub mod store;

// Re-export link resolution
#[cfg(feature = "links")]
pub use wayfinder_links::{
	DeepLinkRequest, DeepLinkRequestBuilder, LinkClassifier, LinkNormalizer, LinkType,
	NavigationConfig, ParameterExtractor,
};

// Re-export the data registry
#[cfg(feature = "store")]
pub use wayfinder_store::{DataToken, RegistryConfig, TransientDataRegistry};

// Re-export navigation entry points
#[cfg(feature = "navigation")]
pub use wayfinder_navigation::{
	ContextNavigator, NavController, NavOptions, NavigationError, NavigationManager,
	NavigationResult, RouteRegistry, ScreenNavigator,
};

pub mod prelude {
	#[cfg(feature = "links")]
	pub use crate::{
		DeepLinkRequest, DeepLinkRequestBuilder, LinkClassifier, LinkNormalizer, LinkType,
		NavigationConfig, ParameterExtractor,
	};

	#[cfg(feature = "store")]
	pub use crate::{DataToken, TransientDataRegistry};

	#[cfg(feature = "navigation")]
	pub use crate::{
		ContextNavigator, NavController, NavOptions, NavigationError, NavigationManager,
		NavigationResult, RouteRegistry, ScreenNavigator,
	};

	#[cfg(feature = "navigation")]
	pub use wayfinder_navigation::{
		AppLauncher, DATA_KEY, DiagnosticSink, EngineError, FeatureRouteProvider, LaunchIntent,
		NavArguments, NullSink, RouteDefinition, TracingSink, navigation_data,
		take_navigation_data,
	};
}
