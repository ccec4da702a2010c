use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use regen_cli::config::parse_config_file;
use regen_cli::fmt::{CommandFormatter, Formatter};
use regen_cli::rewrite;
use regen_cli::rules::RuleSet;

#[derive(Parser)]
#[command(name = "regen")]
#[command(
	author,
	version,
	about = "CLI tool for regenerating generated code with string/regex replacements"
)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Config file path, resolved against the base directory
	#[arg(long, value_name = "FILE", default_value = "regen.yaml")]
	config: PathBuf,

	/// Base directory for resolving targets (default: current directory)
	#[arg(long, value_name = "DIR")]
	directory: Option<PathBuf>,

	/// Formatter command to pipe rewritten content through (e.g. "rustfmt")
	#[arg(long, value_name = "COMMAND")]
	fmt: Option<String>,

	/// Create a template regen.yaml in the current directory
	#[arg(long)]
	init: bool,

	/// Overwrite existing regen.yaml when using --init
	#[arg(long, requires = "init")]
	force: bool,
}

#[derive(Subcommand)]
enum Commands {
	/// Configuration management commands
	Config {
		#[command(subcommand)]
		action: ConfigAction,
	},
}

#[derive(Subcommand)]
enum ConfigAction {
	/// Display the parsed configuration with rule summaries
	Show,
	/// Check the config file for errors without touching any file
	Validate,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	// Handle --init
	if cli.init {
		return handle_init(cli.force);
	}

	// Handle subcommands
	if let Some(ref command) = cli.command {
		return match command {
			Commands::Config { action } => match action {
				ConfigAction::Show => handle_config_show(&cli),
				ConfigAction::Validate => handle_config_validate(&cli),
			},
		};
	}

	// Default action: run regeneration from the config
	handle_run(&cli)
}

fn handle_init(force: bool) -> Result<ExitCode> {
	let config_path = PathBuf::from("regen.yaml");

	if config_path.exists() && !force {
		anyhow::bail!("regen.yaml already exists. Use --force to overwrite.");
	}

	std::fs::write(&config_path, init_template())
		.with_context(|| format!("Failed to write {}", config_path.display()))?;

	println!("Created regen.yaml");
	Ok(ExitCode::SUCCESS)
}

fn init_template() -> &'static str {
	r#"# Regeneration entries are processed in order.
# `file` is a path or glob pattern relative to the base directory.
# String rules run first, then regexp rules; each chains on the previous.
regenerates:
  - file: "generated.rs"
    replace:
      strings:
        - match: "old_text"
          replacement: "new_text"
      regexps:
        - match: 'fn (\w+)_generated'
          replacement: "fn $1"
"#
}

fn handle_config_show(cli: &Cli) -> Result<ExitCode> {
	let (config, config_path) = load_config(cli)?;

	println!("# Source: {}", config_path.display());
	println!("# entries: {}", config.regenerates.len());
	println!();

	for (i, entry) in config.regenerates.iter().enumerate() {
		println!("  Entry {}:", i + 1);
		println!("    file: {}", entry.file);
		for rule in &entry.replace.strings {
			println!("    string: {:?} -> {:?}", rule.r#match, rule.replacement);
		}
		for rule in &entry.replace.regexps {
			println!("    regexp: {:?} -> {:?}", rule.r#match, rule.replacement);
		}
		println!();
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_config_validate(cli: &Cli) -> Result<ExitCode> {
	let base_dir = resolve_base_dir(cli)?;
	let config_path = base_dir.join(&cli.config);

	match parse_config_file(&config_path) {
		Ok(config) => {
			// Compile every rule set so broken patterns surface here
			// instead of mid-run.
			for entry in &config.regenerates {
				if let Err(e) = RuleSet::compile(&entry.replace) {
					eprintln!("Configuration error in entry {:?}: {}", entry.file, e);
					return Ok(ExitCode::FAILURE);
				}
			}

			println!(
				"{} is valid ({} entries)",
				config_path.display(),
				config.regenerates.len()
			);
			Ok(ExitCode::SUCCESS)
		}
		Err(e) => {
			eprintln!("Configuration error: {}", e);
			Ok(ExitCode::FAILURE)
		}
	}
}

fn handle_run(cli: &Cli) -> Result<ExitCode> {
	let base_dir = resolve_base_dir(cli)?;
	let (config, _) = load_config(cli)?;

	let formatter = match cli.fmt.as_deref() {
		Some(command_line) => Some(
			CommandFormatter::new(command_line)
				.ok_or_else(|| anyhow::anyhow!("Empty formatter command"))?,
		),
		None => None,
	};

	let mut diagnostics = std::io::stderr();
	rewrite::run(
		&config,
		&base_dir,
		formatter.as_ref().map(|f| f as &dyn Formatter),
		&mut diagnostics,
	)
	.context("Regeneration failed")?;

	Ok(ExitCode::SUCCESS)
}

fn load_config(cli: &Cli) -> Result<(regen_cli::config::Config, PathBuf)> {
	let base_dir = resolve_base_dir(cli)?;
	let config_path = base_dir.join(&cli.config);
	let config = parse_config_file(&config_path)
		.with_context(|| format!("Failed to load {}", config_path.display()))?;
	Ok((config, config_path))
}

fn resolve_base_dir(cli: &Cli) -> Result<PathBuf> {
	match cli.directory {
		Some(ref dir) => Ok(dir.clone()),
		None => std::env::current_dir().context("Failed to get current directory"),
	}
}
