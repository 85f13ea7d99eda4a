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

//! tmux-keys
//!
//! Declarative multi-key tmux bindings. Key sequences such as `prefix f d`
//! are declared per key table in YAML and expanded into chains of
//! `tmux bind-key` commands that switch through generated sub-tables.
//!
//! # Features
//!
//! - **Key Validation:** Every key is checked against the tmux key grammar
//!   (single characters, `C-`/`M-`/`S-`/`^` modifiers, named keys, F1-F12)
//! - **Sequence Expansion:** `f d` in table `prefix` becomes a bind in
//!   `prefix` that switches to `prefix_f`, plus a bind in `prefix_f`
//! - **All-or-nothing:** One bad key sequence fails the whole config
//! - **Apply or Print:** Commands can be printed or run against tmux directly
//!
//! # Architecture
//!
//! - **`core`:** Business logic (types, tokenizer, expander, generator)
//! - **`config`:** YAML config loading
//! - **`tmux`:** Running generated commands through a shell
//!
//! # Examples
//!
//! ## Generating commands
//!
//! ```
//! use tmux_keys::{generate, Binding, Table};
//!
//! let tables = vec![Table::new("prefix", vec![Binding::new("f d", "new-window")])];
//! let commands = generate(&tables)?;
//!
//! assert_eq!(commands[0].to_string(), "tmux bind-key -Tprefix f switch-client -Tprefix_f");
//! assert_eq!(commands[1].to_string(), "tmux bind-key -Tprefix_f d new-window");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Loading a config file
//!
//! ```no_run
//! use tmux_keys::{config::Config, generate};
//!
//! let config = Config::load(&Config::default_path())?;
//! for command in generate(config.tables())? {
//!     println!("{}", command);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod config;
pub mod core;
pub mod tmux;

// Re-export commonly used types for convenience
pub use config::Config;
pub use core::{
    expand_binding, generate, tokenize, BindAction, BindCommand, Binding, GenerateError,
    KeyError, KeyToken, SpecialKey, Table,
};
