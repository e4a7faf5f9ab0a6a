//! Synchronous shell command execution.
//!
//! Every interaction with colima and docker goes through [`CommandRunner`]:
//! one command line in, captured stdout out, success decided by exit code.
//! There is no timeout and no retry; a hung command blocks the caller.

use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::error::{CommandError, Result};

/// Runs a single shell command line and returns its stdout.
pub trait CommandRunner {
    fn run(&self, command: &str) -> Result<String>;
}

/// Runs commands through `<shell> -l -c <command>`.
///
/// A login shell picks up the user's PATH (Homebrew, etc.), which the
/// menu bar app does not inherit when started from Finder or launchd.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: String,
    login: bool,
}

impl ShellRunner {
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
            login: true,
        }
    }

    /// Run as a plain `-c` shell instead of a login shell.
    pub fn without_login(mut self) -> Self {
        self.login = false;
        self
    }

    fn command(&self, command_line: &str) -> Command {
        let mut cmd = Command::new(&self.shell);
        if self.login {
            cmd.arg("-l");
        }
        cmd.arg("-c")
            .arg(command_line)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> Result<String> {
        debug!(shell = %self.shell, command, "Running command");

        let output = self
            .command(command)
            .output()
            .map_err(|source| CommandError::Spawn {
                shell: self.shell.clone(),
                source,
            })?;

        if let Some(err) = CommandError::from_status(output.status) {
            warn!(
                command,
                error = %err,
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "Command failed"
            );
            return Err(err);
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::CommandRunner;
    use crate::error::{CommandError, Result};

    /// Scripted runner: replays canned stdout per command line and records
    /// every command it was asked to run. Unscripted commands succeed with
    /// empty output.
    #[derive(Default)]
    pub struct FakeRunner {
        responses: HashMap<String, std::result::Result<String, i32>>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeRunner {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_output(mut self, command: &str, stdout: &str) -> Self {
            self.responses
                .insert(command.to_string(), Ok(stdout.to_string()));
            self
        }

        pub fn with_failure(mut self, command: &str, code: i32) -> Self {
            self.responses.insert(command.to_string(), Err(code));
            self
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        pub fn clear_calls(&self) {
            self.calls.borrow_mut().clear();
        }
    }

    impl CommandRunner for FakeRunner {
        fn run(&self, command: &str) -> Result<String> {
            self.calls.borrow_mut().push(command.to_string());
            match self.responses.get(command) {
                Some(Ok(stdout)) => Ok(stdout.clone()),
                Some(Err(code)) => Err(CommandError::Failed { code: *code }),
                None => Ok(String::new()),
            }
        }
    }
}
