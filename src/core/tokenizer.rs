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

//! src/core/tokenizer.rs
//!
//! Key sequence tokenizer
//!
//! Splits a key sequence such as `"C-x f Space"` into validated key tokens.
//! Every space-separated chunk must be one of:
//! - A function key `F1`..`F12` (either case)
//! - A caret modifier (`^C`)
//! - A dash modifier (`C-x`, `M-x`, `S-x`, either case)
//! - Any single character
//! - A named special key (`Space`, `PageUp`, ...), either case
//!
//! Rules are checked in that order, so `F13` is reported as a bad function
//! key rather than a bad special key.
//!
//! # Architecture
//! The fixed-shape forms (function keys, modifiers) are matched with nom
//! combinators wrapped in `all_consuming`, so a chunk either matches the whole
//! form or not at all.

use nom::{
    branch::alt,
    character::complete::{anychar, char, digit1, one_of},
    combinator::{all_consuming, map_res},
    sequence::preceded,
    IResult, Parser,
};
use thiserror::Error;

use crate::core::types::{KeyToken, SpecialKey};

/// Lowest and highest function key tmux accepts
const FUNCTION_KEYS: std::ops::RangeInclusive<u8> = 1..=12;

/// Key validation errors
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum KeyError {
    /// Binding has no keys at all
    #[error("keys is empty")]
    EmptyKeySequence,

    /// Looks like a function key but is outside F1-F12
    #[error("\"{0}\" is not a supported key function key, supported function keys are F1 to F12")]
    UnsupportedFunctionKey(String),

    /// Multi-character key that is neither a modifier form nor a named key
    #[error("\"{0}\" is not a supported special key, see tmux manual for reference")]
    UnsupportedSpecialKey(String),
}

/// Split a key sequence into validated tokens
///
/// The sequence is split on single spaces. The first invalid chunk fails the
/// whole call; no partial token list is ever returned.
///
/// # Example
/// ```ignore
/// let tokens = tokenize("C-x f")?;
/// assert_eq!(tokens.len(), 2);
/// ```
pub fn tokenize(keys: &str) -> Result<Vec<KeyToken>, KeyError> {
    if keys.is_empty() {
        return Err(KeyError::EmptyKeySequence);
    }

    keys.split(' ')
        .map(|key| {
            validate_key(key)?;
            Ok(KeyToken::from_validated(quote_key(key)))
        })
        .collect()
}

/// Validate a single key against the tmux key grammar
pub fn validate_key(key: &str) -> Result<(), KeyError> {
    let len = key.chars().count();

    if len > 1 && key.starts_with(['f', 'F']) {
        return match parse_function_key(key) {
            Ok((_, number)) if FUNCTION_KEYS.contains(&number) => Ok(()),
            _ => Err(KeyError::UnsupportedFunctionKey(key.to_string())),
        };
    }

    if parse_modifier_key(key).is_ok() || len == 1 {
        return Ok(());
    }

    match SpecialKey::from_name(key) {
        Some(_) => Ok(()),
        None => Err(KeyError::UnsupportedSpecialKey(key.to_string())),
    }
}

/// Parse the numeric suffix of a function key (`F7` → 7)
///
/// Suffixes too large for a `u8` fail to parse, which the caller reports
/// the same way as any other out-of-range key.
pub fn parse_function_key(input: &str) -> IResult<&str, u8> {
    all_consuming(map_res(preceded(one_of("fF"), digit1), |digits: &str| {
        digits.parse::<u8>()
    }))
    .parse(input)
}

/// Parse a modifier key (`^C`, `C-x`, `m-x`, `S-x`)
///
/// Returns the modifier character and the modified key.
pub fn parse_modifier_key(input: &str) -> IResult<&str, (char, char)> {
    all_consuming(alt((
        (char('^'), anychar),
        (one_of("cmsCMS"), preceded(char('-'), anychar)),
    )))
    .parse(input)
}

/// Wrap bare quote characters in the opposite quote
///
/// Generated commands are run through `sh -c`, where an unbalanced `'` or
/// `"` would swallow the rest of the line.
fn quote_key(key: &str) -> String {
    match key {
        "'" => "\"'\"".to_string(),
        "\"" => "'\"'".to_string(),
        _ => key.to_string(),
    }
}
