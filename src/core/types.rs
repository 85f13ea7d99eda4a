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

//! src/core/types.rs
//!
//! Core type definitions for key table generation
//!
//! This module defines the fundamental types used throughout the application:
//! - `Table`: A named tmux key table and its bindings
//! - `Binding`: A raw key sequence mapped to a tmux command
//! - `KeyToken`: One validated key out of a key sequence
//! - `SpecialKey`: The named keys tmux understands (Space, Enter, ...)
//! - `BindCommand`: A single `tmux bind-key` invocation
//!
//! Tables and bindings deserialize straight from the YAML config; tokens and
//! commands are only ever produced by the tokenizer and the expander.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named tmux key table
///
/// The name is used verbatim as the `-T` argument of every generated
/// command, and as the root of every sub-table name derived from it.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Table {
    /// Table name (e.g., "prefix", "root", "copy-mode")
    pub name: String,

    /// Bindings in declaration order
    #[serde(default)]
    pub bindings: Vec<Binding>,
}

impl Table {
    /// Create a table from a name and its bindings
    pub fn new(name: impl Into<String>, bindings: Vec<Binding>) -> Self {
        Self {
            name: name.into(),
            bindings,
        }
    }
}

/// A key sequence bound to a tmux command
///
/// # Example
/// ```ignore
/// let binding = Binding::new("f d", "new-window");
/// // prefix, then f, then d runs new-window
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Binding {
    /// Space-separated key sequence (e.g., "f d", "C-x Space")
    pub keys: String,

    /// Command passed through untouched to `tmux bind-key`
    #[serde(alias = "command")]
    pub cmd: String,
}

impl Binding {
    pub fn new(keys: impl Into<String>, cmd: impl Into<String>) -> Self {
        Self {
            keys: keys.into(),
            cmd: cmd.into(),
        }
    }
}

/// Named special keys accepted by `tmux bind-key`
///
/// Matching is case-insensitive, so `space`, `Space` and `SPACE` all
/// resolve to `SpecialKey::Space`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SpecialKey {
    Up,
    Down,
    Left,
    Right,
    BSpace,
    BTab,
    DC,
    Delete,
    End,
    Enter,
    Escape,
    Home,
    IC,
    Insert,
    NPage,
    PageDown,
    PgDn,
    PPage,
    PageUp,
    PgUp,
    Space,
    Tab,
}

impl SpecialKey {
    /// Every special key, in tmux manual order
    pub const ALL: [SpecialKey; 22] = [
        SpecialKey::Up,
        SpecialKey::Down,
        SpecialKey::Left,
        SpecialKey::Right,
        SpecialKey::BSpace,
        SpecialKey::BTab,
        SpecialKey::DC,
        SpecialKey::Delete,
        SpecialKey::End,
        SpecialKey::Enter,
        SpecialKey::Escape,
        SpecialKey::Home,
        SpecialKey::IC,
        SpecialKey::Insert,
        SpecialKey::NPage,
        SpecialKey::PageDown,
        SpecialKey::PgDn,
        SpecialKey::PPage,
        SpecialKey::PageUp,
        SpecialKey::PgUp,
        SpecialKey::Space,
        SpecialKey::Tab,
    ];

    /// Canonical tmux spelling of the key
    pub fn name(self) -> &'static str {
        match self {
            SpecialKey::Up => "Up",
            SpecialKey::Down => "Down",
            SpecialKey::Left => "Left",
            SpecialKey::Right => "Right",
            SpecialKey::BSpace => "BSpace",
            SpecialKey::BTab => "BTab",
            SpecialKey::DC => "DC",
            SpecialKey::Delete => "Delete",
            SpecialKey::End => "End",
            SpecialKey::Enter => "Enter",
            SpecialKey::Escape => "Escape",
            SpecialKey::Home => "Home",
            SpecialKey::IC => "IC",
            SpecialKey::Insert => "Insert",
            SpecialKey::NPage => "NPage",
            SpecialKey::PageDown => "PageDown",
            SpecialKey::PgDn => "PgDn",
            SpecialKey::PPage => "PPage",
            SpecialKey::PageUp => "PageUp",
            SpecialKey::PgUp => "PgUp",
            SpecialKey::Space => "Space",
            SpecialKey::Tab => "Tab",
        }
    }

    /// Look up a special key by name, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for SpecialKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One validated key out of a key sequence
///
/// Holds the key exactly as it will appear on the tmux command line:
/// original case is kept, and bare quote characters are already wrapped
/// in the opposite quote so the command survives `sh -c`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct KeyToken(String);

impl KeyToken {
    /// Wraps a key that has already passed validation and quoting
    pub(crate) fn from_validated(key: String) -> Self {
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for KeyToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// What a bound key does when pressed
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BindAction {
    /// Enter another key table (`switch-client -T<table>`)
    SwitchTable(String),
    /// Run the user's command
    Run(String),
}

impl fmt::Display for BindAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindAction::SwitchTable(table) => write!(f, "switch-client -T{}", table),
            BindAction::Run(cmd) => f.write_str(cmd),
        }
    }
}

/// A single `tmux bind-key` invocation
///
/// Renders as `tmux bind-key -T<table> <key> <action>`.
///
/// # Example
/// ```ignore
/// // tmux bind-key -Tprefix f switch-client -Tprefix_f
/// let cmd = BindCommand {
///     table: "prefix".to_string(),
///     key: token,
///     action: BindAction::SwitchTable("prefix_f".to_string()),
/// };
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BindCommand {
    /// Table the key is bound in
    pub table: String,

    /// Key being bound
    pub key: KeyToken,

    /// Table switch or user command
    pub action: BindAction,
}

impl BindCommand {
    /// True when this command leads into a sub-table rather than running
    /// the user's command
    pub fn is_switch(&self) -> bool {
        matches!(self.action, BindAction::SwitchTable(_))
    }
}

impl fmt::Display for BindCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tmux bind-key -T{} {} {}", self.table, self.key, self.action)
    }
}
