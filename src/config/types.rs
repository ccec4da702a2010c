use serde::Deserialize;

/// Top-level configuration from a `regen.yaml` file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
	/// Regeneration entries, processed in list order.
	#[serde(default)]
	pub regenerates: Vec<Entry>,
}

/// One regeneration entry: a target file (or glob) plus its replacements.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Entry {
	/// Path or glob pattern, relative to the base directory.
	pub file: String,

	/// Replacement rules applied to each resolved target.
	#[serde(default)]
	pub replace: Replace,
}

/// Replacement rules for one entry.
///
/// String rules always run before regexp rules; within each list the
/// application order is list order, each rule chaining on the output of
/// the previous one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Replace {
	/// Literal substitutions, applied first.
	#[serde(default)]
	pub strings: Vec<StringReplace>,

	/// Regular-expression substitutions, applied after all string rules.
	#[serde(default)]
	pub regexps: Vec<RegexpReplace>,
}

/// A literal string substitution.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StringReplace {
	/// Exact text to match.
	pub r#match: String,

	/// Literal replacement text.
	pub replacement: String,
}

/// A regular-expression substitution.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegexpReplace {
	/// Regex pattern to match (compiled by the rules layer).
	pub r#match: String,

	/// Replacement template; may reference capture groups as `$1`, `$name`.
	pub replacement: String,
}

impl Config {
	/// Validate the decoded config before any rule compilation.
	pub fn validate(&self) -> Result<(), crate::error::RegenError> {
		for (index, entry) in self.regenerates.iter().enumerate() {
			if entry.file.is_empty() {
				return Err(crate::error::RegenError::EmptyFileSpec { index });
			}
		}
		Ok(())
	}
}
