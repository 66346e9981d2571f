//! Registry eviction settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default upper bound on live entries.
pub const DEFAULT_MAX_ENTRIES: usize = 256;

/// Longest accepted entry lifetime, in seconds (about one hundred years).
pub const MAX_TTL_SECS: u64 = 100 * 365 * 24 * 60 * 60;

/// Errors raised while loading a [`RegistryConfig`].
#[derive(Debug, Error)]
pub enum RegistryConfigError {
	/// `max_entries` must allow at least one entry.
	#[error("max_entries must be greater than zero")]
	ZeroCapacity,

	/// `ttl_secs` must be a positive number of seconds.
	#[error("ttl_secs must be greater than zero")]
	ZeroTtl,

	/// `ttl_secs` is above [`MAX_TTL_SECS`].
	#[error("ttl_secs must not exceed {}, got {}", MAX_TTL_SECS, .0)]
	TtlTooLong(u64),

	/// TOML parsing failed.
	#[error("failed to parse registry settings: {0}")]
	Toml(#[from] toml::de::Error),
}

/// Eviction policy for a [`TransientDataRegistry`](crate::TransientDataRegistry).
///
/// ```rust
/// use std::time::Duration;
/// use wayfinder_store::RegistryConfig;
///
/// let config = RegistryConfig::from_toml_str("max_entries = 32\nttl_secs = 120").unwrap();
/// assert_eq!(config.max_entries(), Some(32));
/// assert_eq!(config.ttl(), Some(Duration::from_secs(120)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
	/// Maximum number of live entries; `None` means unbounded.
	max_entries: Option<usize>,
	/// Age after which an entry is treated as absent; `None` disables expiry.
	ttl_secs: Option<u64>,
}

impl Default for RegistryConfig {
	fn default() -> Self {
		Self {
			max_entries: Some(DEFAULT_MAX_ENTRIES),
			ttl_secs: None,
		}
	}
}

impl RegistryConfig {
	/// Returns a configuration that never evicts.
	pub fn unbounded() -> Self {
		Self {
			max_entries: None,
			ttl_secs: None,
		}
	}

	/// Parses settings from TOML; missing keys keep their defaults.
	pub fn from_toml_str(source: &str) -> Result<Self, RegistryConfigError> {
		let config: Self = toml::from_str(source)?;
		config.validate()?;
		Ok(config)
	}

	/// Bounds the registry to `max_entries` live entries (at least one).
	pub fn with_max_entries(mut self, max_entries: usize) -> Self {
		self.max_entries = Some(max_entries.max(1));
		self
	}

	/// Expires entries older than `ttl`, rounded up to whole seconds and
	/// clamped to `1..=MAX_TTL_SECS`.
	pub fn with_ttl(mut self, ttl: Duration) -> Self {
		let secs = ttl
			.as_secs()
			.saturating_add(u64::from(ttl.subsec_nanos() > 0));
		self.ttl_secs = Some(secs.clamp(1, MAX_TTL_SECS));
		self
	}

	/// Returns the entry bound, if any.
	pub fn max_entries(&self) -> Option<usize> {
		self.max_entries
	}

	/// Returns the entry lifetime, if any.
	pub fn ttl(&self) -> Option<Duration> {
		self.ttl_secs.map(Duration::from_secs)
	}

	fn validate(&self) -> Result<(), RegistryConfigError> {
		if self.max_entries == Some(0) {
			return Err(RegistryConfigError::ZeroCapacity);
		}
		if self.ttl_secs == Some(0) {
			return Err(RegistryConfigError::ZeroTtl);
		}
		if let Some(secs) = self.ttl_secs.filter(|secs| *secs > MAX_TTL_SECS) {
			return Err(RegistryConfigError::TtlTooLong(secs));
		}
		Ok(())
	}
}
