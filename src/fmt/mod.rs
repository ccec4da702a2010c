//! Formatter integration for regen.
//!
//! This module handles:
//! - The injectable `Formatter` capability invoked after substitution
//! - Running an external formatter command over stdin/stdout

pub mod command;

pub use command::CommandFormatter;

use crate::error::Result;

/// An injectable formatting pass: bytes in, formatted bytes out.
///
/// The rewrite engine invokes it at most once per file, after all
/// substitutions. A failure is fatal for that file; the engine never
/// inspects the formatted output.
pub trait Formatter {
	fn format(&self, input: &[u8]) -> Result<Vec<u8>>;
}
