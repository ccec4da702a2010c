use crate::error::{RegenError, Result};
use globset::{GlobBuilder, GlobSetBuilder};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// How an entry's file spec maps onto the filesystem.
///
/// Both modes resolve through the same interface, so the orchestrator never
/// needs to know which one is in play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetSpec {
	/// A glob pattern, expanded against the filesystem relative to a base
	/// directory. The base is kept separate so its name is matched
	/// literally even when it contains glob metacharacters.
	Glob { base: PathBuf, pattern: String },

	/// A single path, opened directly without expansion.
	Direct(PathBuf),
}

impl TargetSpec {
	/// Classify a file spec against the base directory.
	pub fn new(base_dir: &Path, file: &str) -> TargetSpec {
		if is_glob_pattern(file) {
			TargetSpec::Glob {
				base: base_dir.to_path_buf(),
				pattern: file.to_string(),
			}
		} else {
			TargetSpec::Direct(base_dir.join(file))
		}
	}

	/// Resolve this spec into an ordered list of target paths.
	///
	/// Direct specs pass the path through unchecked; whether it exists is
	/// decided at open time so missing targets can be skipped. Glob specs
	/// expand to the sorted list of matching files, which may be empty.
	pub fn resolve(&self) -> Result<Vec<PathBuf>> {
		match self {
			TargetSpec::Direct(path) => Ok(vec![path.clone()]),
			TargetSpec::Glob { base, pattern } => expand_glob(base, pattern),
		}
	}
}

/// Whether a file spec contains glob metacharacters.
fn is_glob_pattern(value: &str) -> bool {
	value.contains('*') || value.contains('?') || value.contains('[') || value.contains('{')
}

/// Expand a glob pattern into the sorted list of matching files.
fn expand_glob(base: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
	// Only the entry's file spec carries glob syntax; the base directory
	// is escaped so metacharacters in its name match literally.
	let pattern_str = if Path::new(pattern).is_absolute() {
		pattern.to_string()
	} else {
		let base_str = base.to_string_lossy();
		format!(
			"{}/{}",
			globset::escape(base_str.trim_end_matches('/')),
			pattern
		)
	};

	// literal_separator keeps `*` from crossing directory boundaries,
	// matching shell glob semantics; `**` still recurses.
	let glob = GlobBuilder::new(&pattern_str)
		.literal_separator(true)
		.build()
		.map_err(|source| RegenError::InvalidGlob {
			pattern: pattern_str.clone(),
			source,
		})?;

	let mut builder = GlobSetBuilder::new();
	builder.add(glob);
	let matcher = builder.build().map_err(|source| RegenError::InvalidGlob {
		pattern: pattern_str.clone(),
		source,
	})?;

	// Walk from the deepest literal ancestor so the scan stays narrow.
	let root = if Path::new(pattern).is_absolute() {
		literal_prefix(pattern)
	} else {
		base.join(literal_prefix(pattern))
	};
	if !root.exists() {
		return Ok(Vec::new());
	}

	let mut matches = Vec::new();

	for entry in WalkDir::new(&root).sort_by_file_name() {
		let entry = entry.map_err(|source| RegenError::Walk {
			pattern: pattern_str.clone(),
			source,
		})?;

		if entry.file_type().is_file() && matcher.is_match(entry.path()) {
			matches.push(entry.into_path());
		}
	}

	Ok(matches)
}

/// The longest leading run of pattern components with no glob metacharacters.
fn literal_prefix(pattern: &str) -> PathBuf {
	let mut root = PathBuf::new();

	for component in Path::new(pattern).components() {
		let text = component.as_os_str().to_string_lossy();
		if is_glob_pattern(&text) {
			break;
		}
		root.push(component);
	}

	root
}
