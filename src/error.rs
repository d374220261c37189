use std::path::PathBuf;

/// Library-level structured errors for envwalk.
///
/// Only the loader produces these. Typed accessors never fail; they fall back
/// to the caller's default instead.
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
	#[error("Failed to determine current directory")]
	CurrentDir {
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to open env file: {path}")]
	FileOpen {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to read env file: {path}")]
	FileRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Invalid line {line} in {path}: {content}")]
	MalformedLine {
		path: PathBuf,
		line: usize,
		content: String,
	},

	#[error("Line {line} in {path} is not valid UTF-8")]
	NonUtf8Line { path: PathBuf, line: usize },

	#[error("Failed to set environment variable {key}")]
	SetVar {
		key: String,
		#[source]
		source: StoreError,
	},
}

/// Rejections from an [`EnvStore`](crate::store::EnvStore) write.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
	#[error("variable name is empty")]
	EmptyKey,

	#[error("variable name contains '=': {key}")]
	KeyContainsEquals { key: String },

	#[error("variable name contains a NUL byte")]
	KeyContainsNul,

	#[error("value for {key} contains a NUL byte")]
	ValueContainsNul { key: String },
}

/// Result type alias using EnvError.
pub type Result<T> = std::result::Result<T, EnvError>;
