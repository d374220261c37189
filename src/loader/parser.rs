use crate::error::{EnvError, Result};
use crate::loader::types::{EnvEntry, EnvFile};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parse a definition file from the given path.
pub fn parse_env_file(path: &Path) -> Result<EnvFile> {
	let file = File::open(path).map_err(|source| EnvError::FileOpen {
		path: path.to_path_buf(),
		source,
	})?;

	let mut entries = Vec::new();
	for (index, raw) in BufReader::new(file).split(b'\n').enumerate() {
		let raw = raw.map_err(|source| EnvError::FileRead {
			path: path.to_path_buf(),
			source,
		})?;

		// Comments and blank lines are skipped before decoding, so their
		// encoding never matters.
		let trimmed = raw.trim_ascii();
		if trimmed.is_empty() || trimmed.starts_with(b"#") {
			continue;
		}

		let line = String::from_utf8(raw).map_err(|_| EnvError::NonUtf8Line {
			path: path.to_path_buf(),
			line: index + 1,
		})?;
		if let Some(entry) = parse_line(&line, index + 1, path)? {
			entries.push(entry);
		}
	}

	Ok(EnvFile {
		path: path.to_path_buf(),
		entries,
	})
}

/// Parse definition file content from a string (useful for testing).
pub fn parse_env_str(content: &str, path: &Path) -> Result<Vec<EnvEntry>> {
	let mut entries = Vec::new();
	for (index, line) in content.lines().enumerate() {
		if let Some(entry) = parse_line(line, index + 1, path)? {
			entries.push(entry);
		}
	}
	Ok(entries)
}

/// Classify a single raw line. Blank lines and comments yield `None`.
fn parse_line(raw: &str, line: usize, path: &Path) -> Result<Option<EnvEntry>> {
	let trimmed = raw.trim();
	if trimmed.is_empty() || trimmed.starts_with('#') {
		return Ok(None);
	}

	let (key, value) = trimmed
		.split_once('=')
		.ok_or_else(|| EnvError::MalformedLine {
			path: path.to_path_buf(),
			line,
			content: trimmed.to_string(),
		})?;

	Ok(Some(EnvEntry {
		key: key.trim().to_string(),
		value: value.trim().to_string(),
		line,
	}))
}
