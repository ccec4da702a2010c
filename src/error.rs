use std::path::PathBuf;

/// Library-level structured errors for regen.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum RegenError {
	#[error("Failed to read config file: {path}")]
	ConfigRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParse {
		path: PathBuf,
		#[source]
		source: serde_yaml::Error,
	},

	#[error("Entry {index} has an empty file path")]
	EmptyFileSpec { index: usize },

	#[error("Invalid regex pattern in rule: {pattern}")]
	InvalidRegex {
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("Invalid glob pattern: {pattern}")]
	InvalidGlob {
		pattern: String,
		#[source]
		source: globset::Error,
	},

	#[error("Failed to expand glob pattern: {pattern}")]
	Walk {
		pattern: String,
		#[source]
		source: walkdir::Error,
	},

	#[error("Failed to open target file: {path}")]
	TargetOpen {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to read target file: {path}")]
	TargetRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to truncate target file: {path}")]
	TargetTruncate {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write target file: {path}")]
	TargetWrite {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to launch formatter command: {command}")]
	FormatterLaunch {
		command: String,
		#[source]
		source: std::io::Error,
	},

	#[error("Formatter rejected content: {command} (exit code: {exit_code}): {stderr}")]
	FormatterRejected {
		command: String,
		exit_code: i32,
		stderr: String,
	},
}

/// Result type alias using RegenError.
pub type Result<T> = std::result::Result<T, RegenError>;
