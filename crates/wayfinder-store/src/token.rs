//! Opaque payload tokens.

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Prefix shared by every generated token.
pub const TOKEN_PREFIX: &str = "nav_data_";

// Process-wide, so tokens from independent registries never collide either
static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Opaque key correlating a navigation call with its stored payload.
///
/// Generated tokens look like `nav_data_<sequence>_<uuid>`. The sequence makes
/// them unique within the process; the UUID keeps them unguessable across
/// restarts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataToken(String);

impl DataToken {
	/// Mints a new, process-unique token.
	pub fn generate() -> Self {
		let sequence = SEQUENCE.fetch_add(1, Ordering::Relaxed);
		Self(format!(
			"{}{}_{}",
			TOKEN_PREFIX,
			sequence,
			Uuid::new_v4().simple()
		))
	}

	/// Wraps an existing key.
	pub fn new(key: impl Into<String>) -> Self {
		Self(key.into())
	}

	/// Returns the token as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Consumes the token, returning the inner string.
	pub fn into_inner(self) -> String {
		self.0
	}
}

impl fmt::Display for DataToken {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl Deref for DataToken {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl AsRef<str> for DataToken {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl Borrow<str> for DataToken {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl From<String> for DataToken {
	fn from(key: String) -> Self {
		Self(key)
	}
}

impl From<&str> for DataToken {
	fn from(key: &str) -> Self {
		Self(key.to_string())
	}
}

impl From<&DataToken> for DataToken {
	fn from(token: &DataToken) -> Self {
		token.clone()
	}
}
