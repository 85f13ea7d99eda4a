// Copyright 2025 bakri (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Applying generated bind commands to a running tmux server
//!
//! # Modes
//!
//! - **DryRun**: Records every command as applied, never spawns a process
//! - **Live**: Runs every command through `/bin/sh -c`
//!
//! Commands are applied one by one. A failing command is recorded in the
//! report and the remaining commands are still attempted.
//!
//! # Example
//! ```
//! use tmux_keys::core::{generate, Binding, Table};
//! use tmux_keys::tmux::{ExecMode, TmuxExecutor};
//!
//! let tables = vec![Table::new("prefix", vec![Binding::new("f d", "new-window")])];
//! let commands = generate(&tables).unwrap();
//!
//! // Safe: DryRun never spawns tmux
//! let report = TmuxExecutor::new(ExecMode::DryRun).apply(&commands);
//! assert_eq!(report.applied, 2);
//! assert!(report.is_success());
//! ```

use log::debug;
use std::{
    io,
    path::PathBuf,
    process::{Command, ExitStatus, Stdio},
};
use thiserror::Error;

use crate::core::BindCommand;

/// Shell used to run generated commands
pub const DEFAULT_SHELL: &str = "/bin/sh";

/// Executor operation mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecMode {
    /// Never spawns anything
    DryRun,

    /// Runs each command against the live tmux server
    Live,
}

/// Why a single command failed
#[derive(Debug, Error)]
pub enum ExecError {
    /// The shell itself could not be started
    #[error("failed to spawn {}: {source}", shell.display())]
    Spawn {
        shell: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The command ran and exited unsuccessfully
    #[error("{0}")]
    Status(ExitStatus),
}

/// A command that could not be applied
#[derive(Debug)]
pub struct CommandFailure {
    /// The rendered command line
    pub command: String,

    /// Spawn error or exit status
    pub error: ExecError,
}

/// Outcome of applying a batch of commands
#[derive(Debug, Default)]
pub struct ApplyReport {
    /// Commands that ran successfully (or would have, in DryRun)
    pub applied: usize,

    /// Commands that failed, in the order they were attempted
    pub failures: Vec<CommandFailure>,
}

impl ApplyReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Total commands attempted
    pub fn attempted(&self) -> usize {
        self.applied + self.failures.len()
    }
}

/// Runs bind commands through a shell
pub struct TmuxExecutor {
    mode: ExecMode,
    shell: PathBuf,
}

impl TmuxExecutor {
    /// Creates an executor using `/bin/sh`
    pub fn new(mode: ExecMode) -> Self {
        Self::with_shell(mode, DEFAULT_SHELL)
    }

    /// Creates an executor using a specific shell binary
    ///
    /// The shell is invoked as `<shell> -c <command>`.
    pub fn with_shell(mode: ExecMode, shell: impl Into<PathBuf>) -> Self {
        Self {
            mode,
            shell: shell.into(),
        }
    }

    /// Applies every command, continuing past failures
    ///
    /// Failures are collected in the report and only logged at debug
    /// level; reporting them is left to the caller.
    ///
    /// Command lines are handed to the shell as-is. Only bare `'` and `"`
    /// keys are quoted by the tokenizer, so keys that are shell
    /// metacharacters (`;`, `#`, `&`, `|`) split or truncate the command;
    /// bind those through a tmux config file instead.
    pub fn apply(&self, commands: &[BindCommand]) -> ApplyReport {
        let mut report = ApplyReport::default();

        for command in commands {
            let line = command.to_string();

            match self.run(&line) {
                Ok(()) => report.applied += 1,
                Err(error) => {
                    debug!("failed: {}: {}", line, error);
                    report.failures.push(CommandFailure { command: line, error });
                }
            }
        }

        report
    }

    /// Runs one command line
    fn run(&self, line: &str) -> Result<(), ExecError> {
        match self.mode {
            ExecMode::DryRun => {
                debug!("dry run: {}", line);
                Ok(())
            }
            ExecMode::Live => {
                debug!("running: {}", line);

                let status = Command::new(&self.shell)
                    .arg("-c")
                    .arg(line)
                    .stdin(Stdio::null())
                    .stdout(Stdio::null())
                    .status()
                    .map_err(|source| ExecError::Spawn {
                        shell: self.shell.clone(),
                        source,
                    })?;

                if status.success() {
                    Ok(())
                } else {
                    Err(ExecError::Status(status))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;
