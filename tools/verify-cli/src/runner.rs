use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// One external command invocation: a program and its argument vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandCall {
    pub program: String,
    pub args: Vec<String>,
    pub current_dir: Option<PathBuf>,
}

impl CommandCall {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            current_dir: None,
        }
    }

    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    /// Render the invocation for diagnostics, e.g. `npx prettier --check .`.
    pub fn display(&self) -> String {
        let mut parts = Vec::with_capacity(1 + self.args.len());
        parts.push(self.program.clone());
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}

/// Outcome of one invocation: exit status plus merged stdout/stderr text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub status: i32,
    pub output: String,
}

impl CommandResult {
    pub fn success(&self) -> bool {
        self.status == 0
    }
}

/// Seam between command orchestration and the actual process table.
pub trait CommandRunner {
    fn run(&self, call: &CommandCall) -> CommandResult;
}

#[derive(Default)]
pub struct RealCommandRunner;

impl CommandRunner for RealCommandRunner {
    fn run(&self, call: &CommandCall) -> CommandResult {
        let mut command = Command::new(&call.program);
        command.args(&call.args).stdin(Stdio::null());
        if let Some(dir) = call.current_dir.as_deref() {
            command.current_dir(dir);
        }

        match command.output() {
            Ok(output) => {
                let mut merged = String::from_utf8_lossy(&output.stdout).into_owned();
                merged.push_str(&String::from_utf8_lossy(&output.stderr));
                CommandResult {
                    status: output.status.code().unwrap_or(1),
                    output: merged,
                }
            }
            Err(error) if error.kind() == ErrorKind::NotFound => CommandResult {
                status: 1,
                output: format!("command not found: {}", call.program),
            },
            Err(error) => CommandResult {
                status: 1,
                output: format!("failed to run {}: {error}", call.display()),
            },
        }
    }
}
