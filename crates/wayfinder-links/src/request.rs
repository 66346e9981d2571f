//! Deep-link requests handed to the navigation engine.

use std::fmt;
use std::sync::Arc;

use url::Url;

use crate::config::NavigationConfig;
use crate::error::LinkError;
use crate::normalize::LinkNormalizer;

/// A transport-ready deep-link request.
///
/// The URI is always in deep-link form; app links are normalized before a
/// request is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLinkRequest {
	uri: Url,
	action: Option<String>,
	mime_type: Option<String>,
}

impl DeepLinkRequest {
	/// Creates a request for the given URI.
	pub fn from_uri(uri: Url) -> Self {
		Self {
			uri,
			action: None,
			mime_type: None,
		}
	}

	/// Sets the action the destination must handle.
	pub fn with_action(mut self, action: impl Into<String>) -> Self {
		self.action = Some(action.into());
		self
	}

	/// Sets the MIME type the destination must accept.
	pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
		self.mime_type = Some(mime_type.into());
		self
	}

	/// Returns the parsed URI.
	pub fn uri(&self) -> &Url {
		&self.uri
	}

	/// Returns the URI as a string.
	pub fn as_str(&self) -> &str {
		self.uri.as_str()
	}

	/// Returns the action, if any.
	pub fn action(&self) -> Option<&str> {
		self.action.as_deref()
	}

	/// Returns the MIME type, if any.
	pub fn mime_type(&self) -> Option<&str> {
		self.mime_type.as_deref()
	}
}

impl fmt::Display for DeepLinkRequest {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.uri.as_str())
	}
}

/// Builds [`DeepLinkRequest`]s from deep links and app links.
#[derive(Debug, Clone, Default)]
pub struct DeepLinkRequestBuilder {
	normalizer: LinkNormalizer,
}

impl DeepLinkRequestBuilder {
	/// Creates a builder for the given configuration.
	pub fn new(config: Arc<NavigationConfig>) -> Self {
		Self {
			normalizer: LinkNormalizer::new(config),
		}
	}

	/// Returns the normalizer backing this builder.
	pub fn normalizer(&self) -> &LinkNormalizer {
		&self.normalizer
	}

	/// Builds a request, or returns `None` if the link is not a deep link or
	/// app link, or does not parse as a URI.
	pub fn build(&self, link: &str) -> Option<DeepLinkRequest> {
		match self.try_build(link) {
			Ok(request) => Some(request),
			Err(LinkError::NotALink(_)) => None,
			Err(e) => {
				tracing::debug!(
					target: crate::LOG_TARGET,
					link = %link,
					error = %e,
					"failed to build deep link request"
				);
				None
			}
		}
	}

	/// Builds a request, reporting why it could not be built.
	///
	/// # Errors
	///
	/// Returns [`LinkError::NotALink`] for routes and invalid destinations,
	/// and [`LinkError::Parse`] when the normalized link is not a valid URI.
	pub fn try_build(&self, link: &str) -> Result<DeepLinkRequest, LinkError> {
		let deep_link = self
			.normalizer
			.to_deep_link(link)
			.ok_or_else(|| LinkError::NotALink(link.to_string()))?;

		Url::parse(&deep_link)
			.map(DeepLinkRequest::from_uri)
			.map_err(|source| LinkError::Parse {
				link: deep_link,
				source,
			})
	}
}
