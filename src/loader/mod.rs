//! Definition file discovery and loading for envwalk.
//!
//! This module handles:
//! - Walking up from a directory to the nearest `.env` file
//! - Parsing `key=value` lines
//! - Writing parsed pairs into an `EnvStore`

pub mod locate;
pub mod parser;
pub mod types;

pub use locate::{ENV_FILE_NAME, locate_env_file};
pub use parser::{parse_env_file, parse_env_str};
pub use types::{EnvEntry, EnvFile};

use crate::error::{EnvError, Result};
use crate::store::{EnvStore, ProcessEnv};
use std::path::{Path, PathBuf};

/// Load one definition file into `store`.
///
/// The whole file is parsed before anything is written, so a malformed line
/// leaves the store untouched. Returns the number of pairs written.
pub fn load_env_file<S: EnvStore>(path: &Path, store: &S) -> Result<usize> {
	let env_file = parse_env_file(path)?;
	apply_entries(&env_file.entries, store)?;

	tracing::debug!(
		path = %path.display(),
		count = env_file.entries.len(),
		"Loaded env file"
	);
	Ok(env_file.entries.len())
}

/// Write parsed entries into `store` in file order, so later duplicates win.
pub fn apply_entries<S: EnvStore>(entries: &[EnvEntry], store: &S) -> Result<()> {
	for entry in entries {
		store
			.set(&entry.key, &entry.value)
			.map_err(|source| EnvError::SetVar {
				key: entry.key.clone(),
				source,
			})?;
	}
	Ok(())
}

/// Locate the nearest definition file at or above `start_dir` and load it.
///
/// Returns the path that was loaded, or `None` if no file exists up to the
/// filesystem root. A missing file is not an error.
pub fn load_env_from<S: EnvStore>(start_dir: &Path, store: &S) -> Result<Option<PathBuf>> {
	let Some(path) = locate_env_file(start_dir) else {
		tracing::debug!(start = %start_dir.display(), "No env file found");
		return Ok(None);
	};

	load_env_file(&path, store)?;
	Ok(Some(path))
}

/// Locate and load the nearest definition file from the current directory
/// into the process environment.
pub fn load_env() -> Result<()> {
	let cwd = std::env::current_dir().map_err(|source| EnvError::CurrentDir { source })?;
	load_env_from(&cwd, &ProcessEnv)?;
	Ok(())
}
