use crate::error::{RegenError, Result};
use crate::fmt::Formatter;
use crate::rules::RuleSet;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

/// Compute the final content for a target: substitute, then format.
///
/// Pure apart from the formatter invocation; nothing is written anywhere.
pub fn substitute(
	content: &[u8],
	rules: &RuleSet,
	formatter: Option<&dyn Formatter>,
) -> Result<Vec<u8>> {
	let buf = rules.apply(content);

	match formatter {
		Some(fmt) => fmt.format(&buf),
		None => Ok(buf),
	}
}

/// Rewrite an open file in place.
///
/// Reads the whole file to memory, applies the rule set, runs the optional
/// formatter, then truncates and writes the final buffer at offset zero.
/// The original content is only truncated once the full replacement exists
/// in memory, so a substitution or formatter failure leaves the file
/// untouched. There is no multi-step rollback: a write failure after the
/// truncate leaves the truncate applied.
pub fn rewrite(
	file: &mut File,
	path: &Path,
	rules: &RuleSet,
	formatter: Option<&dyn Formatter>,
) -> Result<()> {
	let mut content = Vec::new();
	file.read_to_end(&mut content)
		.map_err(|source| RegenError::TargetRead {
			path: path.to_path_buf(),
			source,
		})?;

	let buf = substitute(&content, rules, formatter)?;

	file.set_len(0).map_err(|source| RegenError::TargetTruncate {
		path: path.to_path_buf(),
		source,
	})?;

	write_at_start(file, &buf).map_err(|source| RegenError::TargetWrite {
		path: path.to_path_buf(),
		source,
	})?;

	Ok(())
}

/// Write the whole buffer starting at offset zero.
fn write_at_start(file: &mut File, buf: &[u8]) -> std::io::Result<()> {
	file.seek(SeekFrom::Start(0))?;
	file.write_all(buf)?;
	file.flush()
}
