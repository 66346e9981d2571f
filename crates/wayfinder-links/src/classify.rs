//! Destination classification.

use std::fmt;
use std::sync::Arc;

use crate::config::NavigationConfig;

/// Separator that marks a string as carrying a URI scheme.
pub const SCHEME_SEPARATOR: &str = "://";

/// The kind of destination a navigation string denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkType {
	/// Custom-scheme link, e.g. `yfy://product/42`.
	DeepLink,
	/// HTTPS link on the app-link domain, e.g. `https://example.com/product/42`.
	AppLink,
	/// In-app route without a scheme, e.g. `product/42`.
	Route,
	/// Anything else, including the empty string and foreign schemes.
	Invalid,
}

impl LinkType {
	/// Returns true for [`LinkType::DeepLink`] and [`LinkType::AppLink`].
	pub fn is_link(self) -> bool {
		matches!(self, Self::DeepLink | Self::AppLink)
	}
}

impl fmt::Display for LinkType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::DeepLink => "deep link",
			Self::AppLink => "app link",
			Self::Route => "route",
			Self::Invalid => "invalid",
		};
		f.write_str(name)
	}
}

/// Classifies destination strings against a [`NavigationConfig`].
///
/// Classification is a pure function of the input; checks run in priority
/// order and the first match wins:
///
/// 1. starts with the deep-link prefix
/// 2. starts with the app-link prefix
/// 3. non-empty and free of `"://"`
///
/// Everything else is [`LinkType::Invalid`].
#[derive(Debug, Clone)]
pub struct LinkClassifier {
	config: Arc<NavigationConfig>,
}

impl Default for LinkClassifier {
	fn default() -> Self {
		Self::new(NavigationConfig::shared())
	}
}

impl LinkClassifier {
	/// Creates a classifier for the given configuration.
	pub fn new(config: Arc<NavigationConfig>) -> Self {
		Self { config }
	}

	/// Returns the configuration this classifier uses.
	pub fn config(&self) -> &Arc<NavigationConfig> {
		&self.config
	}

	/// Classifies a destination string.
	pub fn classify(&self, destination: &str) -> LinkType {
		if destination.starts_with(self.config.deep_link_prefix()) {
			LinkType::DeepLink
		} else if destination.starts_with(self.config.app_link_prefix()) {
			LinkType::AppLink
		} else if !destination.is_empty() && !destination.contains(SCHEME_SEPARATOR) {
			LinkType::Route
		} else {
			LinkType::Invalid
		}
	}

	/// Returns true unless the destination classifies as [`LinkType::Invalid`].
	pub fn is_valid_link(&self, destination: &str) -> bool {
		self.classify(destination) != LinkType::Invalid
	}
}
