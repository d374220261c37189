//! Environment stores that the loader writes to and the accessors read from.
//!
//! This module handles:
//! - The `EnvStore` seam shared by the loader and the typed accessors
//! - The real process environment (`ProcessEnv`)
//! - An isolated in-memory store (`MemoryStore`) for tests and embedding

pub mod memory;
pub mod process;

pub use memory::MemoryStore;
pub use process::ProcessEnv;

use crate::error::StoreError;

/// A string-to-string variable store.
///
/// Implementations must apply the same key rules as the process environment
/// so code tested against one store behaves the same against the other.
pub trait EnvStore {
	/// Look up a variable. Absent, invalid, and non-UTF-8 entries are `None`.
	fn get(&self, key: &str) -> Option<String>;

	/// Insert or overwrite a variable.
	fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: EnvStore + ?Sized> EnvStore for &S {
	fn get(&self, key: &str) -> Option<String> {
		(**self).get(key)
	}

	fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
		(**self).set(key, value)
	}
}

/// Check a key/value pair against the rules the OS environment enforces.
pub fn validate_entry(key: &str, value: &str) -> Result<(), StoreError> {
	validate_key(key)?;
	if value.contains('\0') {
		return Err(StoreError::ValueContainsNul {
			key: key.to_string(),
		});
	}
	Ok(())
}

pub(crate) fn validate_key(key: &str) -> Result<(), StoreError> {
	if key.is_empty() {
		return Err(StoreError::EmptyKey);
	}
	if key.contains('=') {
		return Err(StoreError::KeyContainsEquals {
			key: key.to_string(),
		});
	}
	if key.contains('\0') {
		return Err(StoreError::KeyContainsNul);
	}
	Ok(())
}
