//! Destination-side argument access and payload recovery.
//!
//! A destination receives only strings: route arguments when it was pushed,
//! or launch extras when it was started from a context. Either way a
//! `dataKey` argument, when present, names a payload in the
//! [`TransientDataRegistry`].

use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use url::form_urlencoded;
use wayfinder_store::TransientDataRegistry;

/// Argument / extra name carrying the payload token.
pub const DATA_KEY: &str = "dataKey";

/// Anything a destination can read string arguments from.
pub trait ArgumentSource {
	fn argument(&self, key: &str) -> Option<&str>;

	/// Returns the payload token, if one was attached.
	fn data_key(&self) -> Option<&str> {
		self.argument(DATA_KEY)
	}
}

impl ArgumentSource for HashMap<String, String> {
	fn argument(&self, key: &str) -> Option<&str> {
		self.get(key).map(String::as_str)
	}
}

impl ArgumentSource for BTreeMap<String, String> {
	fn argument(&self, key: &str) -> Option<&str> {
		self.get(key).map(String::as_str)
	}
}

/// String arguments received by a destination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavArguments {
	values: HashMap<String, String>,
}

impl NavArguments {
	pub fn new() -> Self {
		Self::default()
	}

	/// Reads the query arguments of a dispatched route string.
	///
	/// # Examples
	///
	/// ```
	/// use wayfinder_navigation::{ArgumentSource, NavArguments};
	///
	/// let args = NavArguments::from_route("search?q=red%20shoes&dataKey=nav_data_1_ab");
	/// assert_eq!(args.get("q"), Some("red shoes"));
	/// assert_eq!(args.data_key(), Some("nav_data_1_ab"));
	/// ```
	pub fn from_route(route: &str) -> Self {
		let values = match route.split_once('?') {
			Some((_, query)) => form_urlencoded::parse(query.as_bytes())
				.into_owned()
				.collect(),
			None => HashMap::new(),
		};
		Self { values }
	}

	pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.insert(key, value);
		self
	}

	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.values.insert(key.into(), value.into());
	}

	/// Adds every argument from `other`, overwriting duplicates.
	pub fn merge(&mut self, other: NavArguments) {
		self.values.extend(other.values);
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.values.get(key).map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Returns the payload reference, with every other argument as an extra.
	pub fn navigation_data(&self) -> Option<NavigationData> {
		let data_key = self.data_key()?;
		let extras = self
			.values
			.iter()
			.filter(|(key, _)| key.as_str() != DATA_KEY)
			.map(|(key, value)| (key.clone(), value.clone()))
			.collect();
		Some(NavigationData {
			data_key: data_key.to_string(),
			extras,
		})
	}
}

impl ArgumentSource for NavArguments {
	fn argument(&self, key: &str) -> Option<&str> {
		self.get(key)
	}
}

impl FromIterator<(String, String)> for NavArguments {
	fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
		Self {
			values: iter.into_iter().collect(),
		}
	}
}

/// Serializable reference to a navigation payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationData {
	pub data_key: String,
	#[serde(default)]
	pub extras: BTreeMap<String, String>,
}

impl NavigationData {
	pub fn new(data_key: impl Into<String>) -> Self {
		Self {
			data_key: data_key.into(),
			extras: BTreeMap::new(),
		}
	}

	pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.extras.insert(key.into(), value.into());
		self
	}

	/// Looks the payload up without removing it.
	pub fn payload<T: Any + Send + Sync>(&self, registry: &TransientDataRegistry) -> Option<Arc<T>> {
		registry.get::<T>(&self.data_key)
	}
}

/// Returns the payload attached to a destination, leaving it in the registry.
///
/// `None` if no `dataKey` was passed, the entry is gone, or it is not a `T`.
pub fn navigation_data<T, S>(source: &S, registry: &TransientDataRegistry) -> Option<Arc<T>>
where
	T: Any + Send + Sync,
	S: ArgumentSource + ?Sized,
{
	registry.get::<T>(source.data_key()?)
}

/// Returns the payload attached to a destination and removes it.
pub fn take_navigation_data<T, S>(source: &S, registry: &TransientDataRegistry) -> Option<Arc<T>>
where
	T: Any + Send + Sync,
	S: ArgumentSource + ?Sized,
{
	registry.take::<T>(source.data_key()?)
}
