//! Configuration loading and parsing for regen.
//!
//! This module handles:
//! - YAML config file parsing
//! - Shape validation of decoded entries

pub mod parser;
pub mod types;

pub use parser::{parse_config_file, parse_config_str};
pub use types::{Config, Entry, RegexpReplace, Replace, StringReplace};
