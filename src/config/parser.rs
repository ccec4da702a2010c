use crate::config::types::Config;
use crate::error::{RegenError, Result};
use std::path::Path;

/// Parse a config file from the given path.
pub fn parse_config_file(path: &Path) -> Result<Config> {
	let content = std::fs::read_to_string(path).map_err(|source| RegenError::ConfigRead {
		path: path.to_path_buf(),
		source,
	})?;

	parse_config_str(&content, path)
}

/// Parse a config from a string (useful for testing).
pub fn parse_config_str(content: &str, path: &Path) -> Result<Config> {
	// serde_yaml decodes an empty document as null, which cannot populate
	// a struct; an empty config file simply has no entries.
	if content.trim().is_empty() {
		return Ok(Config::default());
	}

	let config: Config =
		serde_yaml::from_str(content).map_err(|source| RegenError::ConfigParse {
			path: path.to_path_buf(),
			source,
		})?;

	// Validate the parsed config
	config.validate()?;

	Ok(config)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::path::PathBuf;

	#[test]
	fn test_parse_empty_config() {
		let content = "";
		let path = PathBuf::from("regen.yaml");
		let config = parse_config_str(content, &path).unwrap();

		assert!(config.regenerates.is_empty());
	}

	#[test]
	fn test_parse_basic_config() {
		let content = r#"
regenerates:
  - file: generated.rs
    replace:
      strings:
        - match: foo
          replacement: bar
"#;
		let path = PathBuf::from("regen.yaml");
		let config = parse_config_str(content, &path).unwrap();

		assert_eq!(config.regenerates.len(), 1);

		let entry = &config.regenerates[0];
		assert_eq!(entry.file, "generated.rs");
		assert_eq!(entry.replace.strings.len(), 1);
		assert_eq!(entry.replace.strings[0].r#match, "foo");
		assert_eq!(entry.replace.strings[0].replacement, "bar");
		assert!(entry.replace.regexps.is_empty());
	}

	#[test]
	fn test_parse_strings_and_regexps() {
		let content = r#"
regenerates:
  - file: "out/*.rs"
    replace:
      strings:
        - match: "old_crate"
          replacement: "new_crate"
        - match: "v1"
          replacement: "v2"
      regexps:
        - match: 'fn (\w+)_generated'
          replacement: "fn $1"
"#;
		let path = PathBuf::from("regen.yaml");
		let config = parse_config_str(content, &path).unwrap();

		let entry = &config.regenerates[0];
		assert_eq!(entry.file, "out/*.rs");
		assert_eq!(entry.replace.strings.len(), 2);
		assert_eq!(entry.replace.regexps.len(), 1);
		assert_eq!(entry.replace.regexps[0].r#match, r"fn (\w+)_generated");
		assert_eq!(entry.replace.regexps[0].replacement, "fn $1");
	}

	#[test]
	fn test_parse_entry_without_replace() {
		let content = r#"
regenerates:
  - file: generated.rs
"#;
		let path = PathBuf::from("regen.yaml");
		let config = parse_config_str(content, &path).unwrap();

		let entry = &config.regenerates[0];
		assert!(entry.replace.strings.is_empty());
		assert!(entry.replace.regexps.is_empty());
	}

	#[test]
	fn test_parse_invalid_yaml() {
		let content = "regenerates: [unterminated";
		let path = PathBuf::from("regen.yaml");
		let result = parse_config_str(content, &path);

		assert!(result.is_err());
		match result.unwrap_err() {
			RegenError::ConfigParse { path, .. } => {
				assert_eq!(path, PathBuf::from("regen.yaml"));
			}
			_ => panic!("Expected ConfigParse error"),
		}
	}

	#[test]
	fn test_empty_file_spec_rejected() {
		let content = r#"
regenerates:
  - file: generated.rs
  - file: ""
"#;
		let path = PathBuf::from("regen.yaml");
		let result = parse_config_str(content, &path);

		assert!(result.is_err());
		match result.unwrap_err() {
			RegenError::EmptyFileSpec { index } => assert_eq!(index, 1),
			_ => panic!("Expected EmptyFileSpec error"),
		}
	}

	#[test]
	fn test_parse_missing_config_file() {
		let result = parse_config_file(Path::new("/nonexistent/regen.yaml"));

		assert!(result.is_err());
		match result.unwrap_err() {
			RegenError::ConfigRead { .. } => {}
			_ => panic!("Expected ConfigRead error"),
		}
	}
}
