//! Process-wide link configuration.
//!
//! A [`NavigationConfig`] fixes the custom deep-link scheme and the HTTPS
//! app-link domain, and derives the two prefixes every classifier and
//! normalizer works from. It is immutable once built.
//!
//! Settings can be loaded from TOML:
//!
//! ```rust
//! use wayfinder_links::NavigationConfig;
//!
//! let config = NavigationConfig::from_toml_str(r#"
//! deep_link_scheme = "shop"
//! app_link_domain = "shop.example.org"
//! "#).unwrap();
//!
//! assert_eq!(config.deep_link_prefix(), "shop://");
//! assert_eq!(config.app_link_prefix(), "https://shop.example.org/");
//! ```

use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, validate_domain, validate_scheme};

/// Default custom scheme for deep links.
pub const DEFAULT_DEEP_LINK_SCHEME: &str = "yfy";

/// Default domain for HTTPS app links.
pub const DEFAULT_APP_LINK_DOMAIN: &str = "example.com";

/// Deep-link prefix derived from [`DEFAULT_DEEP_LINK_SCHEME`].
pub const DEEP_LINK_PREFIX: &str = "yfy://";

/// App-link prefix derived from [`DEFAULT_APP_LINK_DOMAIN`].
pub const APP_LINK_PREFIX: &str = "https://example.com/";

/// Environment variable overriding the deep-link scheme.
pub const SCHEME_ENV_VAR: &str = "WAYFINDER_DEEP_LINK_SCHEME";

/// Environment variable overriding the app-link domain.
pub const DOMAIN_ENV_VAR: &str = "WAYFINDER_APP_LINK_DOMAIN";

static DEFAULT_CONFIG: Lazy<Arc<NavigationConfig>> =
	Lazy::new(|| Arc::new(NavigationConfig::default()));

/// Raw, unvalidated link settings as they appear in configuration files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationSettings {
	/// Custom URI scheme used by deep links (without `://`).
	pub deep_link_scheme: String,
	/// Host name used by HTTPS app links.
	pub app_link_domain: String,
}

impl Default for NavigationSettings {
	fn default() -> Self {
		Self {
			deep_link_scheme: DEFAULT_DEEP_LINK_SCHEME.to_string(),
			app_link_domain: DEFAULT_APP_LINK_DOMAIN.to_string(),
		}
	}
}

/// Validated, immutable link configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationConfig {
	scheme: String,
	domain: String,
	deep_link_prefix: String,
	app_link_prefix: String,
}

impl Default for NavigationConfig {
	fn default() -> Self {
		Self {
			scheme: DEFAULT_DEEP_LINK_SCHEME.to_string(),
			domain: DEFAULT_APP_LINK_DOMAIN.to_string(),
			deep_link_prefix: DEEP_LINK_PREFIX.to_string(),
			app_link_prefix: APP_LINK_PREFIX.to_string(),
		}
	}
}

impl NavigationConfig {
	/// Creates a configuration for the given scheme and domain.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::InvalidScheme`] or [`ConfigError::InvalidDomain`]
	/// if either value is malformed.
	pub fn new(scheme: impl Into<String>, domain: impl Into<String>) -> Result<Self, ConfigError> {
		let scheme = scheme.into();
		let domain = domain.into();
		validate_scheme(&scheme)?;
		validate_domain(&domain)?;

		Ok(Self {
			deep_link_prefix: format!("{}://", scheme),
			app_link_prefix: format!("https://{}/", domain),
			scheme,
			domain,
		})
	}

	/// Builds a configuration from raw settings.
	pub fn from_settings(settings: NavigationSettings) -> Result<Self, ConfigError> {
		Self::new(settings.deep_link_scheme, settings.app_link_domain)
	}

	/// Parses settings from a TOML document. Missing keys fall back to the defaults.
	pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
		let settings: NavigationSettings = toml::from_str(source)?;
		Self::from_settings(settings)
	}

	/// Loads settings from `WAYFINDER_DEEP_LINK_SCHEME` and
	/// `WAYFINDER_APP_LINK_DOMAIN`, defaulting any variable that is unset.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Loads settings through an arbitrary variable lookup.
	///
	/// ```rust
	/// use wayfinder_links::NavigationConfig;
	///
	/// let config = NavigationConfig::from_lookup(|key| match key {
	///     "WAYFINDER_DEEP_LINK_SCHEME" => Some("shop".to_string()),
	///     _ => None,
	/// }).unwrap();
	/// assert_eq!(config.deep_link_prefix(), "shop://");
	/// assert_eq!(config.app_link_prefix(), "https://example.com/");
	/// ```
	pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let defaults = NavigationSettings::default();
		Self::from_settings(NavigationSettings {
			deep_link_scheme: lookup(SCHEME_ENV_VAR).unwrap_or(defaults.deep_link_scheme),
			app_link_domain: lookup(DOMAIN_ENV_VAR).unwrap_or(defaults.app_link_domain),
		})
	}

	/// Returns the shared default configuration.
	pub fn shared() -> Arc<Self> {
		Arc::clone(&DEFAULT_CONFIG)
	}

	/// Returns the deep-link scheme.
	pub fn scheme(&self) -> &str {
		&self.scheme
	}

	/// Returns the app-link domain.
	pub fn domain(&self) -> &str {
		&self.domain
	}

	/// Returns `"<scheme>://"`.
	pub fn deep_link_prefix(&self) -> &str {
		&self.deep_link_prefix
	}

	/// Returns `"https://<domain>/"`.
	pub fn app_link_prefix(&self) -> &str {
		&self.app_link_prefix
	}

	/// Returns the raw settings this configuration was built from.
	pub fn settings(&self) -> NavigationSettings {
		NavigationSettings {
			deep_link_scheme: self.scheme.clone(),
			app_link_domain: self.domain.clone(),
		}
	}
}
