//! Regen - CLI tool for regenerating generated code with declarative replacements.
//!
//! This library provides the core functionality for regen, including:
//! - Configuration file parsing and validation
//! - Rule set compilation and substitution
//! - Glob and direct target resolution
//! - In-place rewriting with an optional formatter pass
//!
//! # Example
//!
//! ```no_run
//! use regen_cli::config::parse_config_file;
//! use regen_cli::fmt::{CommandFormatter, Formatter};
//! use regen_cli::rewrite::run;
//!
//! let cwd = std::env::current_dir().unwrap();
//! let config = parse_config_file(&cwd.join("regen.yaml")).unwrap();
//! let formatter = CommandFormatter::new("rustfmt").unwrap();
//!
//! let mut diagnostics = std::io::stderr();
//! run(&config, &cwd, Some(&formatter as &dyn Formatter), &mut diagnostics).unwrap();
//! ```

pub mod config;
pub mod error;
pub mod fmt;
pub mod rewrite;
pub mod rules;

pub use error::{RegenError, Result};
