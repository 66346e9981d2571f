//! Feature route registry.
//!
//! Each feature contributes the route patterns it serves through a
//! [`FeatureRouteProvider`]. The [`RouteRegistry`] aggregates them and
//! resolves concrete route strings, such as those produced by the manager,
//! back to a definition plus the arguments the destination receives.
//!
//! Patterns use `{name}` placeholders for whole path segments:
//!
//! ```
//! use wayfinder_navigation::{ArgumentSource, RouteDefinition, RouteRegistry, StaticRouteProvider};
//!
//! let mut registry = RouteRegistry::new();
//! registry
//!     .register(StaticRouteProvider::new(
//!         "product",
//!         vec![RouteDefinition::new("product/{productId}")],
//!     ))
//!     .unwrap();
//!
//! let matched = registry.resolve("product/42?dataKey=nav_data_0_ab").unwrap();
//! assert_eq!(matched.feature, "product");
//! assert_eq!(matched.arguments.get("productId"), Some("42"));
//! assert_eq!(matched.arguments.data_key(), Some("nav_data_0_ab"));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::arguments::NavArguments;

/// Errors raised while registering or reversing routes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
	#[error("Route already registered: {0}")]
	DuplicatePattern(String),

	#[error("Missing parameter: {0}")]
	MissingParameter(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
	Literal(String),
	Param(String),
}

/// A route pattern such as `product/{productId}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
	raw: String,
	segments: Vec<Segment>,
}

impl RoutePattern {
	pub fn new(pattern: &str) -> Self {
		let segments = pattern
			.split('/')
			.filter(|segment| !segment.is_empty())
			.map(|segment| {
				match segment
					.strip_prefix('{')
					.and_then(|rest| rest.strip_suffix('}'))
				{
					Some(name) => Segment::Param(name.to_string()),
					None => Segment::Literal(segment.to_string()),
				}
			})
			.collect();
		Self {
			raw: pattern.to_string(),
			segments,
		}
	}

	pub fn as_str(&self) -> &str {
		&self.raw
	}

	/// Names of the placeholders, in order.
	pub fn param_names(&self) -> impl Iterator<Item = &str> {
		self.segments.iter().filter_map(|segment| match segment {
			Segment::Param(name) => Some(name.as_str()),
			Segment::Literal(_) => None,
		})
	}

	/// Matches the path part of `route`, returning the placeholder values.
	pub fn matches(&self, route: &str) -> Option<HashMap<String, String>> {
		let path = route.split_once('?').map_or(route, |(path, _)| path);
		let parts: Vec<&str> = path.split('/').filter(|part| !part.is_empty()).collect();
		if parts.len() != self.segments.len() {
			return None;
		}

		let mut params = HashMap::new();
		for (segment, part) in self.segments.iter().zip(parts) {
			match segment {
				Segment::Literal(literal) if literal == part => {}
				Segment::Literal(_) => return None,
				Segment::Param(name) => {
					params.insert(name.clone(), part.to_string());
				}
			}
		}
		Some(params)
	}

	/// Fills the placeholders from `params`.
	///
	/// # Errors
	///
	/// Returns [`RouteError::MissingParameter`] for the first placeholder
	/// without a value.
	pub fn reverse(&self, params: &[(&str, &str)]) -> Result<String, RouteError> {
		let lookup: HashMap<&str, &str> = params.iter().copied().collect();
		let mut parts = Vec::with_capacity(self.segments.len());
		for segment in &self.segments {
			match segment {
				Segment::Literal(literal) => parts.push(literal.as_str()),
				Segment::Param(name) => parts.push(
					lookup
						.get(name.as_str())
						.copied()
						.ok_or_else(|| RouteError::MissingParameter(name.clone()))?,
				),
			}
		}
		Ok(parts.join("/"))
	}
}

impl fmt::Display for RoutePattern {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.raw)
	}
}

type RouteBuilder = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// A route a feature serves, with a builder for concrete routes.
#[derive(Clone)]
pub struct RouteDefinition {
	pattern: RoutePattern,
	builder: RouteBuilder,
}

impl fmt::Debug for RouteDefinition {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RouteDefinition")
			.field("pattern", &self.pattern)
			.finish_non_exhaustive()
	}
}

impl RouteDefinition {
	/// Creates a definition whose builder returns its argument unchanged.
	pub fn new(pattern: &str) -> Self {
		Self {
			pattern: RoutePattern::new(pattern),
			builder: Arc::new(str::to_string),
		}
	}

	pub fn with_builder<F>(mut self, builder: F) -> Self
	where
		F: Fn(&str) -> String + Send + Sync + 'static,
	{
		self.builder = Arc::new(builder);
		self
	}

	pub fn pattern(&self) -> &RoutePattern {
		&self.pattern
	}

	/// Builds a concrete route from a single argument.
	pub fn build(&self, argument: &str) -> String {
		(self.builder)(argument)
	}
}

/// Routes contributed by one feature.
pub trait FeatureRouteProvider: Send + Sync {
	fn feature_prefix(&self) -> &str;

	fn routes(&self) -> Vec<RouteDefinition>;
}

/// A provider over a fixed list of definitions.
#[derive(Debug, Clone)]
pub struct StaticRouteProvider {
	prefix: String,
	routes: Vec<RouteDefinition>,
}

impl StaticRouteProvider {
	pub fn new(prefix: impl Into<String>, routes: Vec<RouteDefinition>) -> Self {
		Self {
			prefix: prefix.into(),
			routes,
		}
	}
}

impl FeatureRouteProvider for StaticRouteProvider {
	fn feature_prefix(&self) -> &str {
		&self.prefix
	}

	fn routes(&self) -> Vec<RouteDefinition> {
		self.routes.clone()
	}
}

/// A resolved route.
#[derive(Debug, Clone)]
pub struct RouteMatch {
	/// Prefix of the feature that owns the route.
	pub feature: String,
	pub definition: RouteDefinition,
	/// Path placeholders merged with query arguments; path wins on conflict.
	pub arguments: NavArguments,
}

#[derive(Debug, Clone)]
struct RegisteredRoute {
	feature: String,
	definition: RouteDefinition,
}

/// All routes of the application, in registration order.
#[derive(Debug, Clone, Default)]
pub struct RouteRegistry {
	routes: Vec<RegisteredRoute>,
	features: Vec<String>,
}

impl RouteRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds every route of a feature.
	///
	/// # Errors
	///
	/// Returns [`RouteError::DuplicatePattern`] if a pattern is already
	/// registered; nothing from the provider is added in that case.
	pub fn register(&mut self, provider: impl FeatureRouteProvider) -> Result<&mut Self, RouteError> {
		let routes = provider.routes();
		for (index, definition) in routes.iter().enumerate() {
			let pattern = definition.pattern().as_str();
			let seen_before = self
				.routes
				.iter()
				.any(|route| route.definition.pattern().as_str() == pattern)
				|| routes[..index]
					.iter()
					.any(|other| other.pattern().as_str() == pattern);
			if seen_before {
				return Err(RouteError::DuplicatePattern(pattern.to_string()));
			}
		}

		let feature = provider.feature_prefix().to_string();
		tracing::debug!(feature = %feature, routes = routes.len(), "registered feature routes");
		self.routes
			.extend(routes.into_iter().map(|definition| RegisteredRoute {
				feature: feature.clone(),
				definition,
			}));
		if !self.features.contains(&feature) {
			self.features.push(feature);
		}
		Ok(self)
	}

	/// Resolves a concrete route string; the first matching pattern wins.
	pub fn resolve(&self, route: &str) -> Option<RouteMatch> {
		self.routes.iter().find_map(|registered| {
			let params = registered.definition.pattern().matches(route)?;
			let mut arguments = NavArguments::from_route(route);
			arguments.merge(params.into_iter().collect());
			Some(RouteMatch {
				feature: registered.feature.clone(),
				definition: registered.definition.clone(),
				arguments,
			})
		})
	}

	pub fn features(&self) -> &[String] {
		&self.features
	}

	pub fn has_feature(&self, prefix: &str) -> bool {
		self.features.iter().any(|feature| feature == prefix)
	}

	pub fn route_count(&self) -> usize {
		self.routes.len()
	}

	pub fn patterns(&self) -> impl Iterator<Item = &RoutePattern> {
		self.routes.iter().map(|route| route.definition.pattern())
	}
}
