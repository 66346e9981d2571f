//! Best-effort parameter extraction from deep links.
//!
//! Query parameters are exposed verbatim (percent-decoded). Any path segment
//! made only of ASCII digits is additionally exposed under [`ID_PARAM`]. When
//! several numeric segments are present the last one wins, so
//! `yfy://users/7/orders/99` yields `id = "99"`.

use std::collections::HashMap;

use url::Url;

/// Reserved key for numeric path segments.
pub const ID_PARAM: &str = "id";

/// Extracts key/value parameters from URI-shaped strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParameterExtractor;

impl ParameterExtractor {
	/// Creates an extractor.
	pub fn new() -> Self {
		Self
	}

	/// Extracts query parameters and the numeric `id` path segment.
	///
	/// Never fails: input that does not parse as a URI yields an empty map.
	///
	/// ```rust
	/// use wayfinder_links::ParameterExtractor;
	///
	/// let params = ParameterExtractor::new().extract("yfy://product?id=42&ref=home");
	/// assert_eq!(params.get("id").map(String::as_str), Some("42"));
	/// assert_eq!(params.get("ref").map(String::as_str), Some("home"));
	///
	/// let params = ParameterExtractor::new().extract("yfy://product/42");
	/// assert_eq!(params.get("id").map(String::as_str), Some("42"));
	/// ```
	pub fn extract(&self, deep_link: &str) -> HashMap<String, String> {
		let uri = match Url::parse(deep_link) {
			Ok(uri) => uri,
			Err(e) => {
				tracing::debug!(
					target: crate::LOG_TARGET,
					link = %deep_link,
					error = %e,
					"failed to extract parameters"
				);
				return HashMap::new();
			}
		};

		// Later duplicates overwrite earlier ones
		let mut params: HashMap<String, String> = uri
			.query_pairs()
			.map(|(name, value)| (name.into_owned(), value.into_owned()))
			.collect();

		if let Some(segments) = uri.path_segments() {
			for segment in segments.filter(|s| is_numeric_segment(s)) {
				params.insert(ID_PARAM.to_string(), segment.to_string());
			}
		}

		params
	}
}

fn is_numeric_segment(segment: &str) -> bool {
	!segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}
