use crate::config::types::Replace;
use crate::error::{RegenError, Result};
use regex::bytes::Regex;

/// A literal substitution: every occurrence of `needle` becomes `replacement`.
#[derive(Debug)]
pub struct StringRule {
	/// Exact text to match.
	pub needle: String,

	/// Literal replacement text.
	pub replacement: String,
}

/// A compiled regular-expression substitution.
#[derive(Debug)]
pub struct PatternRule {
	/// Compiled pattern, matched against raw bytes.
	pub pattern: Regex,

	/// Replacement template; `$1`/`$name` reference capture groups.
	pub replacement: String,
}

/// An ordered set of substitutions for one regeneration entry.
///
/// String rules always run before pattern rules. Within each kind the
/// application order is configuration order, and each rule operates on the
/// output of the previous one, so later rules may match text produced by
/// earlier ones.
#[derive(Debug, Default)]
pub struct RuleSet {
	/// Literal rules, applied first.
	pub strings: Vec<StringRule>,

	/// Pattern rules, applied after all string rules.
	pub patterns: Vec<PatternRule>,
}

impl RuleSet {
	/// Compile a rule set from decoded replacement config.
	///
	/// Fails on the first invalid regex, before any file is touched.
	pub fn compile(replace: &Replace) -> Result<Self> {
		let strings = replace
			.strings
			.iter()
			.map(|rule| StringRule {
				needle: rule.r#match.clone(),
				replacement: rule.replacement.clone(),
			})
			.collect();

		let patterns = replace
			.regexps
			.iter()
			.map(|rule| {
				let pattern =
					Regex::new(&rule.r#match).map_err(|source| RegenError::InvalidRegex {
						pattern: rule.r#match.clone(),
						source,
					})?;

				Ok(PatternRule {
					pattern,
					replacement: rule.replacement.clone(),
				})
			})
			.collect::<Result<Vec<_>>>()?;

		Ok(RuleSet { strings, patterns })
	}

	/// Apply every rule to `input`, returning the substituted buffer.
	///
	/// Matching is pure: no side effects beyond the returned buffer.
	pub fn apply(&self, input: &[u8]) -> Vec<u8> {
		let mut buf = input.to_vec();

		for rule in &self.strings {
			buf = replace_all(&buf, rule.needle.as_bytes(), rule.replacement.as_bytes());
		}

		for rule in &self.patterns {
			buf = rule
				.pattern
				.replace_all(&buf, rule.replacement.as_bytes())
				.into_owned();
		}

		buf
	}

	/// Whether this rule set contains no rules at all.
	pub fn is_empty(&self) -> bool {
		self.strings.is_empty() && self.patterns.is_empty()
	}
}

/// Replace all non-overlapping occurrences of `needle` in `haystack`.
///
/// An empty needle is a no-op rather than an insert-everywhere.
fn replace_all(haystack: &[u8], needle: &[u8], replacement: &[u8]) -> Vec<u8> {
	if needle.is_empty() {
		return haystack.to_vec();
	}

	let mut out = Vec::with_capacity(haystack.len());
	let mut rest = haystack;

	while let Some(pos) = find(rest, needle) {
		out.extend_from_slice(&rest[..pos]);
		out.extend_from_slice(replacement);
		rest = &rest[pos + needle.len()..];
	}

	out.extend_from_slice(rest);
	out
}

/// Find the first occurrence of `needle` in `haystack`.
fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
	if needle.len() > haystack.len() {
		return None;
	}
	haystack.windows(needle.len()).position(|w| w == needle)
}
