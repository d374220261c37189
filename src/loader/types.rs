use serde::Serialize;
use std::path::PathBuf;

/// One `key=value` pair from a definition file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvEntry {
	/// Variable name, trimmed.
	pub key: String,

	/// Variable value, trimmed. May be empty.
	pub value: String,

	/// 1-based line number the pair came from.
	pub line: usize,
}

/// A parsed definition file with its source path for display.
#[derive(Debug, Clone)]
pub struct EnvFile {
	/// The path this file was read from.
	pub path: PathBuf,

	/// Entries in file order. Duplicate keys are kept; the last one wins when applied.
	pub entries: Vec<EnvEntry>,
}
