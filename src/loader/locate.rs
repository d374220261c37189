use std::path::{Path, PathBuf};

/// Name of the definition file searched for in each directory.
pub const ENV_FILE_NAME: &str = ".env";

/// Find the nearest definition file at or above `start_dir`.
///
/// Checks `start_dir` first, then each parent in turn, and stops at the first
/// match or after checking the filesystem root. A relative `start_dir` is only
/// walked up to its first component.
pub fn locate_env_file(start_dir: &Path) -> Option<PathBuf> {
	let mut current_dir = start_dir.to_path_buf();

	loop {
		let candidate = current_dir.join(ENV_FILE_NAME);
		tracing::trace!(path = %candidate.display(), "Probing for env file");

		if candidate.exists() {
			return Some(candidate);
		}

		// Move to parent directory
		match current_dir.parent() {
			Some(parent) if parent != current_dir => current_dir = parent.to_path_buf(),
			_ => return None,
		}
	}
}
