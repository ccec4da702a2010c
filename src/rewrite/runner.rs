use crate::config::types::Config;
use crate::error::{RegenError, Result};
use crate::fmt::Formatter;
use crate::rewrite::engine;
use crate::rewrite::targets::TargetSpec;
use crate::rules::RuleSet;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Run every regeneration entry in configuration order.
///
/// All rule sets are compiled up front, before any file is touched: a broken
/// pattern anywhere in the config means no target is modified. After that,
/// each entry resolves its targets against `base_dir` and rewrites them in
/// place. A missing target is reported to `diagnostics` and skipped; any
/// other failure aborts the run, leaving earlier rewrites in place.
pub fn run(
	config: &Config,
	base_dir: &Path,
	formatter: Option<&dyn Formatter>,
	diagnostics: &mut dyn Write,
) -> Result<()> {
	let mut compiled = Vec::with_capacity(config.regenerates.len());

	for entry in &config.regenerates {
		let spec = TargetSpec::new(base_dir, &entry.file);
		let rules = RuleSet::compile(&entry.replace)?;
		compiled.push((spec, rules));
	}

	for (spec, rules) in &compiled {
		for path in spec.resolve()? {
			let mut file = match OpenOptions::new().read(true).write(true).open(&path) {
				Ok(file) => file,
				Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
					let _ = writeln!(diagnostics, "File {:?} does not exist, skipped.", path);
					continue;
				}
				Err(source) => {
					return Err(RegenError::TargetOpen { path, source });
				}
			};

			engine::rewrite(&mut file, &path, rules, formatter)?;
		}
	}

	Ok(())
}
