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

//! src/core/mod.rs
//!
//! Core business logic module
//!
//! This module contains the data structures and algorithms that turn key
//! tables into tmux commands:
//! - Type definitions for tables, bindings, key tokens and bind commands
//! - Key sequence tokenizing and validation
//! - Expansion of multi-key sequences into sub-table chains
//! - Table-wide generation
//!
//! Nothing in here touches the filesystem or spawns processes, so all of it
//! is unit-tested without tmux installed.

pub mod expander;
pub mod generator;
pub mod tokenizer;
pub mod types;

pub use expander::expand_binding;
pub use generator::{generate, GenerateError};
pub use tokenizer::{tokenize, validate_key, KeyError};
pub use types::*;

#[cfg(test)]
mod tests;
