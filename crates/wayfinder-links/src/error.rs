//! Error types for link configuration and resolution.

use thiserror::Error;

/// Errors that can occur while resolving a link.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
	/// The destination is neither a deep link nor an app link.
	#[error("not a deep link or app link: {0}")]
	NotALink(String),

	/// The normalized link is not a parseable URI.
	#[error("failed to parse deep link {link}: {source}")]
	Parse {
		/// The normalized link that failed to parse.
		link: String,
		/// Underlying parser error.
		#[source]
		source: url::ParseError,
	},
}

/// Errors that can occur while loading a [`NavigationConfig`](crate::NavigationConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Invalid deep-link scheme.
	///
	/// Schemes must start with an ASCII letter followed by letters, digits,
	/// `+`, `-` or `.`.
	#[error("invalid deep-link scheme: {0:?}. Expected an RFC 3986 scheme such as \"myapp\"")]
	InvalidScheme(String),

	/// Invalid app-link domain.
	#[error("invalid app-link domain: {0:?}. Expected a host name such as \"example.com\"")]
	InvalidDomain(String),

	/// TOML parsing failed.
	#[error("failed to parse navigation settings: {0}")]
	Toml(#[from] toml::de::Error),
}

/// Validates a deep-link scheme.
///
/// # Errors
///
/// Returns `ConfigError::InvalidScheme` if the scheme is empty, does not start
/// with an ASCII letter, or contains characters outside `[A-Za-z0-9+.-]`.
pub fn validate_scheme(scheme: &str) -> Result<(), ConfigError> {
	let mut chars = scheme.chars();
	let valid_start = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
	let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));

	if valid_start && valid_rest {
		Ok(())
	} else {
		Err(ConfigError::InvalidScheme(scheme.to_string()))
	}
}

/// Validates an app-link domain.
///
/// The domain must be a bare host: `https://<domain>/` has to parse and
/// round-trip to the same host.
///
/// # Errors
///
/// Returns `ConfigError::InvalidDomain` if the domain is empty, contains a
/// path, port, credentials or whitespace, or is not a valid host.
pub fn validate_domain(domain: &str) -> Result<(), ConfigError> {
	if domain.is_empty()
		|| domain
			.chars()
			.any(|c| c.is_whitespace() || matches!(c, '/' | '@' | ':' | '?' | '#'))
	{
		return Err(ConfigError::InvalidDomain(domain.to_string()));
	}

	match url::Url::parse(&format!("https://{}/", domain)) {
		Ok(parsed) if parsed.host_str() == Some(domain) => Ok(()),
		_ => Err(ConfigError::InvalidDomain(domain.to_string())),
	}
}
