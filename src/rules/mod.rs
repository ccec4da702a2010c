//! Substitution rules for regen.
//!
//! This module handles:
//! - Compiling decoded replacement config into a rule set
//! - Applying literal and regexp substitutions to file content

pub mod ruleset;

pub use ruleset::{PatternRule, RuleSet, StringRule};
