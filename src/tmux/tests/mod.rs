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

//! Executor tests
//!
//! Live-mode tests swap the shell for `true`/`false` so they never touch a
//! real tmux server.

use crate::{
    core::{generate, BindCommand, Binding, Table},
    tmux::{ExecError, ExecMode, TmuxExecutor},
};

/// Helper: commands for a two-key and a one-key binding
fn sample_commands() -> Vec<BindCommand> {
    let tables = vec![Table::new(
        "prefix",
        vec![
            Binding::new("f d", "new-window"),
            Binding::new("x", "kill-pane"),
        ],
    )];
    generate(&tables).unwrap()
}

#[test]
fn test_dryrun_applies_everything() {
    let executor = TmuxExecutor::new(ExecMode::DryRun);
    let report = executor.apply(&sample_commands());

    assert_eq!(report.applied, 3);
    assert!(report.is_success());
    assert_eq!(report.attempted(), 3);
}

#[test]
fn test_dryrun_ignores_shell() {
    let executor = TmuxExecutor::with_shell(ExecMode::DryRun, "/nonexistent/shell");
    assert!(executor.apply(&sample_commands()).is_success());
}

#[test]
fn test_empty_batch() {
    let report = TmuxExecutor::new(ExecMode::DryRun).apply(&[]);
    assert_eq!(report.attempted(), 0);
    assert!(report.is_success());
}

#[cfg(unix)]
#[test]
fn test_live_success() {
    let executor = TmuxExecutor::with_shell(ExecMode::Live, "true");
    let report = executor.apply(&sample_commands());

    assert_eq!(report.applied, 3);
    assert!(report.is_success());
}

#[cfg(unix)]
#[test]
fn test_live_failures_do_not_stop_batch() {
    let executor = TmuxExecutor::with_shell(ExecMode::Live, "false");
    let commands = sample_commands();
    let report = executor.apply(&commands);

    assert_eq!(report.applied, 0);
    assert_eq!(report.failures.len(), commands.len());
    assert_eq!(
        report.failures[0].command,
        "tmux bind-key -Tprefix f switch-client -Tprefix_f"
    );
    assert_eq!(report.failures[2].command, "tmux bind-key -Tprefix x kill-pane");
    assert!(matches!(report.failures[0].error, ExecError::Status(status) if !status.success()));
}

#[test]
fn test_live_spawn_failure_is_reported() {
    let executor = TmuxExecutor::with_shell(ExecMode::Live, "/nonexistent/shell");
    let report = executor.apply(&sample_commands());

    assert_eq!(report.failures.len(), 3);
    assert!(matches!(report.failures[0].error, ExecError::Spawn { .. }));
    assert!(report.failures[0]
        .error
        .to_string()
        .starts_with("failed to spawn /nonexistent/shell"));
}

#[cfg(unix)]
#[test]
fn test_live_reports_exit_status() {
    let executor = TmuxExecutor::with_shell(ExecMode::Live, "false");
    let report = executor.apply(&sample_commands()[..1]);

    assert_eq!(report.failures[0].error.to_string(), "exit status: 1");
}
