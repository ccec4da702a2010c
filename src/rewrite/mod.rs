//! In-place rewriting for regen.
//!
//! This module handles:
//! - The rewrite engine (read, substitute, format, truncate, write)
//! - Target resolution for glob and direct file specs
//! - The per-entry regeneration run

pub mod engine;
pub mod runner;
pub mod targets;

pub use engine::{rewrite, substitute};
pub use runner::run;
pub use targets::TargetSpec;
