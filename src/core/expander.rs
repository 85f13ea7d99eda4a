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

//! Key sequence expansion
//!
//! tmux only binds one key at a time, so a sequence like `prefix f d` is
//! expressed as a chain of key tables:
//!
//! ```text
//! tmux bind-key -Tprefix f switch-client -Tprefix_f
//! tmux bind-key -Tprefix_f d new-window
//! ```
//!
//! Every key but the last switches into a sub-table named after the keys
//! pressed so far; the last key runs the command.

use crate::core::types::{BindAction, BindCommand, KeyToken};

/// Expand one binding's tokens into its chain of bind commands
///
/// Produces exactly one command per token. An empty token slice produces no
/// commands.
pub fn expand_binding(table_name: &str, tokens: &[KeyToken], command: &str) -> Vec<BindCommand> {
    let mut current = table_name.to_string();
    let last = tokens.len().saturating_sub(1);

    tokens
        .iter()
        .enumerate()
        .map(|(idx, key)| {
            let next = sub_table_name(&current, key);
            let action = if idx == last {
                BindAction::Run(command.to_string())
            } else {
                BindAction::SwitchTable(next.clone())
            };

            BindCommand {
                table: std::mem::replace(&mut current, next),
                key: key.clone(),
                action,
            }
        })
        .collect()
}

/// Name of the table entered after pressing `key` in `table`
pub fn sub_table_name(table: &str, key: &KeyToken) -> String {
    format!("{}_{}", table, key)
}
