use crate::error::{RegenError, Result};
use crate::fmt::Formatter;
use std::io::Write;
use std::process::{Command, Stdio};

/// A formatter backed by an external command.
///
/// The substituted buffer is written to the command's stdin and its stdout
/// becomes the formatted result. A non-zero exit status means the command
/// rejected the content.
#[derive(Debug)]
pub struct CommandFormatter {
	/// Program to run.
	program: String,

	/// Arguments passed to the program.
	args: Vec<String>,

	/// The original command line, kept for error reporting.
	command: String,
}

impl CommandFormatter {
	/// Build a formatter from a whitespace-separated command line.
	///
	/// Returns `None` for an empty command line.
	pub fn new(command_line: &str) -> Option<Self> {
		let mut parts = command_line.split_whitespace();
		let program = parts.next()?.to_string();
		let args = parts.map(|s| s.to_string()).collect();

		Some(CommandFormatter {
			program,
			args,
			command: command_line.to_string(),
		})
	}
}

impl Formatter for CommandFormatter {
	fn format(&self, input: &[u8]) -> Result<Vec<u8>> {
		let mut child = Command::new(&self.program)
			.args(&self.args)
			.stdin(Stdio::piped())
			.stdout(Stdio::piped())
			.stderr(Stdio::piped())
			.spawn()
			.map_err(|source| RegenError::FormatterLaunch {
				command: self.command.clone(),
				source,
			})?;

		// Feed stdin from a separate thread so stdout is drained
		// concurrently; writing it all up front deadlocks once the input
		// outgrows the pipe buffers of a streaming formatter.
		// Dropping stdin at the end of the thread closes the pipe so the
		// command sees EOF.
		let writer = child.stdin.take().map(|mut stdin| {
			let input = input.to_vec();
			std::thread::spawn(move || match stdin.write_all(&input) {
				// A formatter may exit without draining stdin; its exit
				// status decides the outcome, not the broken pipe.
				Err(err) if err.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
				result => result,
			})
		});

		let output = child
			.wait_with_output()
			.map_err(|source| RegenError::FormatterLaunch {
				command: self.command.clone(),
				source,
			})?;

		// The child has exited, so the writer cannot block.
		let writer_result = writer.map(|handle| handle.join());

		if !output.status.success() {
			return Err(RegenError::FormatterRejected {
				command: self.command.clone(),
				exit_code: output.status.code().unwrap_or(-1),
				stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
			});
		}

		if let Some(Ok(Err(source))) = writer_result {
			return Err(RegenError::FormatterLaunch {
				command: self.command.clone(),
				source,
			});
		}

		Ok(output.stdout)
	}
}
