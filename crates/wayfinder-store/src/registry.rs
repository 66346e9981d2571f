//! Transient payload registry

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::config::RegistryConfig;
use crate::entry::RegistryEntry;
use crate::statistics::RegistryStatistics;
use crate::token::DataToken;

/// Type-erased payload as stored by the registry.
pub type Payload = Arc<dyn Any + Send + Sync>;

static GLOBAL_REGISTRY: Lazy<Arc<TransientDataRegistry>> =
	Lazy::new(|| Arc::new(TransientDataRegistry::new()));

/// Thread-safe token → payload store.
///
/// The registry does not know what it stores. Producer and consumer agree on
/// the payload type out of band; typed getters return `None` on a mismatch
/// instead of panicking.
///
/// All methods take `&self` and lock internally, so a shared
/// `Arc<TransientDataRegistry>` can be used from any thread.
pub struct TransientDataRegistry {
	entries: RwLock<HashMap<String, RegistryEntry>>,
	config: RegistryConfig,
	insertions: AtomicU64,
	hits: AtomicU64,
	misses: AtomicU64,
	evictions: AtomicU64,
}

impl std::fmt::Debug for TransientDataRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TransientDataRegistry")
			.field("entries", &self.len())
			.field("config", &self.config)
			.finish()
	}
}

impl Default for TransientDataRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl TransientDataRegistry {
	/// Creates a registry with the default eviction policy.
	///
	/// # Examples
	///
	/// ```
	/// use wayfinder_store::TransientDataRegistry;
	///
	/// let registry = TransientDataRegistry::new();
	/// assert!(registry.is_empty());
	/// ```
	pub fn new() -> Self {
		Self::with_config(RegistryConfig::default())
	}

	/// Creates a registry with a custom eviction policy.
	///
	/// # Examples
	///
	/// ```
	/// use wayfinder_store::{RegistryConfig, TransientDataRegistry};
	///
	/// let registry = TransientDataRegistry::with_config(RegistryConfig::default().with_max_entries(1));
	/// registry.put("first", 1u32);
	/// registry.put("second", 2u32);
	///
	/// // The oldest entry made room for the newest
	/// assert!(registry.get::<u32>("first").is_none());
	/// assert_eq!(*registry.get::<u32>("second").unwrap(), 2);
	/// ```
	pub fn with_config(config: RegistryConfig) -> Self {
		Self {
			entries: RwLock::new(HashMap::new()),
			config,
			insertions: AtomicU64::new(0),
			hits: AtomicU64::new(0),
			misses: AtomicU64::new(0),
			evictions: AtomicU64::new(0),
		}
	}

	/// Returns the process-wide registry.
	pub fn global() -> Arc<Self> {
		Arc::clone(&GLOBAL_REGISTRY)
	}

	/// Returns the eviction policy.
	pub fn config(&self) -> &RegistryConfig {
		&self.config
	}

	/// Mints a token that is unique for the lifetime of the process.
	pub fn generate_key(&self) -> DataToken {
		DataToken::generate()
	}

	/// Stores a payload, replacing any entry under the same key.
	///
	/// # Examples
	///
	/// ```
	/// use wayfinder_store::TransientDataRegistry;
	///
	/// let registry = TransientDataRegistry::new();
	/// registry.put("key", vec![1, 2, 3]);
	/// assert_eq!(*registry.get::<Vec<i32>>("key").unwrap(), vec![1, 2, 3]);
	/// ```
	pub fn put<T: Any + Send + Sync>(&self, key: impl Into<DataToken>, payload: T) {
		self.put_payload(key, Arc::new(payload));
	}

	/// Stores an already type-erased payload.
	///
	/// A payload built as `Arc::new(value)` is read back as `T`, exactly as if
	/// it had been stored with [`put`](Self::put).
	pub fn put_payload(&self, key: impl Into<DataToken>, payload: Payload) {
		let key = key.into().into_inner();
		let inserted = self.insertions.fetch_add(1, Ordering::Relaxed);
		let entry = RegistryEntry::new(payload, inserted, self.config.ttl());

		let mut entries = self.entries.write();
		self.drop_expired(&mut entries, Instant::now());

		if let Some(max_entries) = self.config.max_entries()
			&& !entries.contains_key(&key)
		{
			while entries.len() >= max_entries {
				let Some(oldest) = oldest_key(&entries) else {
					break;
				};
				entries.remove(&oldest);
				self.evictions.fetch_add(1, Ordering::Relaxed);
				tracing::debug!(
					target: crate::LOG_TARGET,
					key = %oldest,
					"evicted unread navigation payload"
				);
			}
		}

		entries.insert(key, entry);
	}

	/// Returns the payload under `key` without removing it.
	///
	/// Returns `None` when nothing is stored, the entry expired, or the
	/// payload is not a `T`.
	///
	/// # Examples
	///
	/// ```
	/// use wayfinder_store::TransientDataRegistry;
	///
	/// let registry = TransientDataRegistry::new();
	/// registry.put("key", 42u64);
	///
	/// assert_eq!(*registry.get::<u64>("key").unwrap(), 42);
	/// assert!(registry.get::<String>("key").is_none());
	/// assert!(registry.get::<u64>("missing").is_none());
	/// ```
	pub fn get<T: Any + Send + Sync>(&self, key: impl AsRef<str>) -> Option<Arc<T>> {
		let value = {
			let entries = self.entries.read();
			entries
				.get(key.as_ref())
				.filter(|entry| !entry.is_expired())
				.and_then(RegistryEntry::downcast::<T>)
		};
		self.record_read(value.is_some());
		value
	}

	/// Removes and returns the payload under `key`.
	///
	/// An entry holding a different type is left in place.
	///
	/// # Examples
	///
	/// ```
	/// use wayfinder_store::TransientDataRegistry;
	///
	/// let registry = TransientDataRegistry::new();
	/// registry.put("key", "hello".to_string());
	///
	/// assert!(registry.take::<u32>("key").is_none());
	/// assert_eq!(registry.take::<String>("key").unwrap().as_str(), "hello");
	/// assert!(!registry.contains("key"));
	/// ```
	pub fn take<T: Any + Send + Sync>(&self, key: impl AsRef<str>) -> Option<Arc<T>> {
		let key = key.as_ref();
		let value = {
			let mut entries = self.entries.write();
			match entries.get(key) {
				Some(entry) if entry.is_expired() => {
					entries.remove(key);
					self.evictions.fetch_add(1, Ordering::Relaxed);
					None
				}
				Some(entry) if entry.holds::<T>() => {
					entries.remove(key).and_then(|entry| entry.downcast::<T>())
				}
				_ => None,
			}
		};
		self.record_read(value.is_some());
		value
	}

	/// Removes the entry under `key`, returning whether one existed.
	pub fn remove(&self, key: impl AsRef<str>) -> bool {
		self.entries.write().remove(key.as_ref()).is_some()
	}

	/// Returns true if a live entry exists under `key`.
	pub fn contains(&self, key: impl AsRef<str>) -> bool {
		self.entries
			.read()
			.get(key.as_ref())
			.is_some_and(|entry| !entry.is_expired())
	}

	/// Removes every entry.
	pub fn clear(&self) {
		self.entries.write().clear();
	}

	/// Drops expired entries, returning how many were removed.
	pub fn purge_expired(&self) -> usize {
		let mut entries = self.entries.write();
		self.drop_expired(&mut entries, Instant::now())
	}

	/// Number of stored entries, including expired ones not yet purged.
	pub fn len(&self) -> usize {
		self.entries.read().len()
	}

	/// Returns true if nothing is stored.
	pub fn is_empty(&self) -> bool {
		self.entries.read().is_empty()
	}

	/// Returns a snapshot of registry activity.
	pub fn statistics(&self) -> RegistryStatistics {
		RegistryStatistics {
			hits: self.hits.load(Ordering::Relaxed),
			misses: self.misses.load(Ordering::Relaxed),
			entry_count: self.len() as u64,
			evictions: self.evictions.load(Ordering::Relaxed),
		}
	}

	fn drop_expired(&self, entries: &mut HashMap<String, RegistryEntry>, now: Instant) -> usize {
		if self.config.ttl().is_none() {
			return 0;
		}
		let before = entries.len();
		entries.retain(|_, entry| !entry.is_expired_at(now));
		let removed = before - entries.len();
		self.evictions.fetch_add(removed as u64, Ordering::Relaxed);
		removed
	}

	fn record_read(&self, hit: bool) {
		let counter = if hit { &self.hits } else { &self.misses };
		counter.fetch_add(1, Ordering::Relaxed);
	}
}

fn oldest_key(entries: &HashMap<String, RegistryEntry>) -> Option<String> {
	entries
		.iter()
		.min_by_key(|(_, entry)| entry.inserted)
		.map(|(key, _)| key.clone())
}
