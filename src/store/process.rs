use super::{EnvStore, validate_entry, validate_key};
use crate::error::StoreError;
use std::sync::RwLock;

/// Serializes this crate's reads and writes of the process environment.
static ENV_LOCK: RwLock<()> = RwLock::new(());

/// The real process environment.
///
/// Writes performed through this type never race with reads or writes made
/// through it from other threads. Code that calls `std::env::set_var` directly
/// is outside that guarantee.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvStore for ProcessEnv {
	fn get(&self, key: &str) -> Option<String> {
		if validate_key(key).is_err() {
			return None;
		}
		let _guard = ENV_LOCK.read().unwrap_or_else(|e| e.into_inner());
		std::env::var(key).ok()
	}

	fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
		validate_entry(key, value)?;
		let _guard = ENV_LOCK.write().unwrap_or_else(|e| e.into_inner());
		// SAFETY: the key and value were validated above, and every access made
		// through `ProcessEnv` holds ENV_LOCK.
		unsafe {
			std::env::set_var(key, value);
		}
		Ok(())
	}
}
