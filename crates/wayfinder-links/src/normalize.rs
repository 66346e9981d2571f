//! Conversion between app links and deep links.
//!
//! Both directions are literal prefix substitutions; the remainder of the
//! string is carried over untouched.

use std::sync::Arc;

use crate::classify::{LinkClassifier, LinkType};
use crate::config::NavigationConfig;

/// Rewrites links between their app-link and deep-link forms.
#[derive(Debug, Clone, Default)]
pub struct LinkNormalizer {
	classifier: LinkClassifier,
}

impl LinkNormalizer {
	/// Creates a normalizer for the given configuration.
	pub fn new(config: Arc<NavigationConfig>) -> Self {
		Self {
			classifier: LinkClassifier::new(config),
		}
	}

	/// Returns the classifier backing this normalizer.
	pub fn classifier(&self) -> &LinkClassifier {
		&self.classifier
	}

	fn config(&self) -> &NavigationConfig {
		self.classifier.config()
	}

	/// Returns the destination in deep-link form.
	///
	/// Deep links are returned unchanged, app links are rewritten, and every
	/// other destination (blank, route, invalid) yields `None`.
	pub fn to_deep_link(&self, link: &str) -> Option<String> {
		if link.trim().is_empty() {
			return None;
		}
		match self.classifier.classify(link) {
			LinkType::DeepLink => Some(link.to_string()),
			LinkType::AppLink => Some(self.app_link_to_deep_link(link)),
			LinkType::Route | LinkType::Invalid => None,
		}
	}

	/// Replaces the app-link prefix with the deep-link prefix.
	///
	/// Input without the app-link prefix is returned unchanged.
	pub fn app_link_to_deep_link(&self, app_link: &str) -> String {
		let config = self.config();
		swap_prefix(app_link, config.app_link_prefix(), config.deep_link_prefix())
	}

	/// Replaces the deep-link prefix with the app-link prefix.
	///
	/// Input without the deep-link prefix is returned unchanged.
	pub fn deep_link_to_app_link(&self, deep_link: &str) -> String {
		let config = self.config();
		swap_prefix(deep_link, config.deep_link_prefix(), config.app_link_prefix())
	}
}

fn swap_prefix(input: &str, from: &str, to: &str) -> String {
	match input.strip_prefix(from) {
		Some(rest) => format!("{}{}", to, rest),
		None => input.to_string(),
	}
}
