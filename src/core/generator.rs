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

//! Table-wide command generation
//!
//! Walks every table and binding in declaration order, tokenizes each key
//! sequence and expands it into bind commands. Generation is all-or-nothing:
//! the first invalid key sequence aborts the run and nothing is returned.

use log::debug;
use thiserror::Error;

use crate::core::{
    expander::expand_binding,
    tokenizer::{tokenize, KeyError},
    types::{BindCommand, Table},
};

/// Generation errors with the offending table and key sequence
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum GenerateError {
    #[error("invalid keys \"{keys}\" in table '{table}': {source}")]
    InvalidKeys {
        table: String,
        keys: String,
        #[source]
        source: KeyError,
    },
}

impl GenerateError {
    /// The underlying key validation error
    pub fn key_error(&self) -> &KeyError {
        match self {
            GenerateError::InvalidKeys { source, .. } => source,
        }
    }
}

/// Generate the bind commands for every table
///
/// # Example
/// ```ignore
/// let tables = vec![Table::new("prefix", vec![Binding::new("f d", "new-window")])];
/// let cmds = generate(&tables)?;
/// assert_eq!(cmds[0].to_string(), "tmux bind-key -Tprefix f switch-client -Tprefix_f");
/// ```
pub fn generate(tables: &[Table]) -> Result<Vec<BindCommand>, GenerateError> {
    let mut commands = Vec::new();

    for table in tables {
        for binding in &table.bindings {
            let tokens = tokenize(&binding.keys).map_err(|source| GenerateError::InvalidKeys {
                table: table.name.clone(),
                keys: binding.keys.clone(),
                source,
            })?;

            debug!(
                "{}: '{}' → {} ({} key{})",
                table.name,
                binding.keys,
                binding.cmd,
                tokens.len(),
                if tokens.len() == 1 { "" } else { "s" }
            );

            commands.extend(expand_binding(&table.name, &tokens, &binding.cmd));
        }
    }

    Ok(commands)
}
