//! External command execution

use std::io;
use std::process::Command;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("failed to run {program}: {source}")]
    Spawn { program: String, source: io::Error },

    #[error("{program} failed ({status}): {stderr}")]
    Status {
        program: String,
        status: String,
        stderr: String,
    },
}

/// Runs one system command to completion and hands back its stdout
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<String, CommandError>;
}

pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<String, CommandError> {
        debug!("runner - Running {} {}", program, args.join(" "));

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| CommandError::Spawn {
                program: program.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(CommandError::Status {
                program: program.to_string(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Records every call and answers with canned stdout; optionally fails one program
#[cfg(test)]
pub struct RecordingRunner {
    pub calls: std::cell::RefCell<Vec<String>>,
    pub fail_on: Option<&'static str>,
    pub stdout: String,
}

#[cfg(test)]
impl RecordingRunner {
    pub fn new(fail_on: Option<&'static str>) -> Self {
        Self {
            calls: std::cell::RefCell::new(Vec::new()),
            fail_on,
            stdout: String::new(),
        }
    }

    pub fn with_stdout(stdout: &str) -> Self {
        Self {
            stdout: stdout.to_string(),
            ..Self::new(None)
        }
    }
}

#[cfg(test)]
impl CommandRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<String, CommandError> {
        self.calls
            .borrow_mut()
            .push(format!("{} {}", program, args.join(" ")));
        if self.fail_on == Some(program) {
            return Err(CommandError::Status {
                program: program.to_string(),
                status: "exit status: 1".to_string(),
                stderr: String::new(),
            });
        }
        Ok(self.stdout.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_zero_exit_is_an_error() {
        assert!(SystemRunner.run("true", &[]).is_ok());
        assert!(matches!(
            SystemRunner.run("false", &[]),
            Err(CommandError::Status { .. })
        ));
        assert!(matches!(
            SystemRunner.run("decktune-no-such-program", &[]),
            Err(CommandError::Spawn { .. })
        ));
    }

    #[test]
    fn stdout_is_returned() {
        let out = SystemRunner.run("echo", &["hello".to_string()]).unwrap();
        assert_eq!(out.trim(), "hello");
    }
}
