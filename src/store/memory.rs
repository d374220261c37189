use super::{EnvStore, validate_entry};
use crate::error::StoreError;
use std::collections::HashMap;
use std::sync::RwLock;

/// An isolated variable store backed by a `HashMap`.
///
/// Lets each test or application instance own its configuration instead of
/// sharing the process environment.
#[derive(Debug, Default)]
pub struct MemoryStore {
	vars: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Build a store from pairs. Pairs the OS would reject are skipped.
	pub fn from_pairs<I, K, V>(pairs: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		let store = Self::new();
		for (key, value) in pairs {
			let (key, value) = (key.into(), value.into());
			if let Err(e) = store.set(&key, &value) {
				tracing::debug!(error = %e, "Skipping invalid seed entry");
			}
		}
		store
	}

	pub fn len(&self) -> usize {
		self.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.read().is_empty()
	}

	/// All entries, sorted by key.
	pub fn snapshot(&self) -> Vec<(String, String)> {
		let mut entries: Vec<_> = self
			.read()
			.iter()
			.map(|(k, v)| (k.clone(), v.clone()))
			.collect();
		entries.sort();
		entries
	}

	fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, String>> {
		// A poisoned lock still holds a consistent map: writers only insert.
		self.vars.read().unwrap_or_else(|e| e.into_inner())
	}
}

impl EnvStore for MemoryStore {
	fn get(&self, key: &str) -> Option<String> {
		self.read().get(key).cloned()
	}

	fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
		validate_entry(key, value)?;
		self.vars
			.write()
			.unwrap_or_else(|e| e.into_inner())
			.insert(key.to_string(), value.to_string());
		Ok(())
	}
}
