//! Internal registry entry structure

use std::any::Any;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Stored payload with insertion order and optional expiration
#[derive(Clone)]
pub(crate) struct RegistryEntry {
	pub(crate) payload: Arc<dyn Any + Send + Sync>,
	pub(crate) inserted: u64,
	pub(crate) expires_at: Option<Instant>,
}

impl RegistryEntry {
	pub(crate) fn new(payload: Arc<dyn Any + Send + Sync>, inserted: u64, ttl: Option<Duration>) -> Self {
		// A lifetime past the clock's range never expires
		let expires_at = ttl.and_then(|d| Instant::now().checked_add(d));
		Self {
			payload,
			inserted,
			expires_at,
		}
	}

	pub(crate) fn is_expired(&self) -> bool {
		self.is_expired_at(Instant::now())
	}

	pub(crate) fn is_expired_at(&self, now: Instant) -> bool {
		match self.expires_at {
			Some(expires_at) => now >= expires_at,
			None => false,
		}
	}

	/// Returns true if the payload is a `T`.
	pub(crate) fn holds<T: Any + Send + Sync>(&self) -> bool {
		self.payload.is::<T>()
	}

	/// Returns the payload as `Arc<T>`, or `None` on a shape mismatch.
	pub(crate) fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
		Arc::clone(&self.payload).downcast::<T>().ok()
	}
}

impl std::fmt::Debug for RegistryEntry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RegistryEntry")
			.field("inserted", &self.inserted)
			.field("expires_at", &self.expires_at)
			.finish_non_exhaustive()
	}
}
