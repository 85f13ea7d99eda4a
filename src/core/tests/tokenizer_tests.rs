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

//! Tokenizer tests
//!
//! Tests for splitting and validating key sequences:
//! - Single characters, modifiers, special keys, function keys
//! - Quote rewriting
//! - Error reporting for each rejected form

use crate::core::{
    tokenizer::{tokenize, validate_key, KeyError},
    types::{KeyToken, SpecialKey},
};

/// Helper: tokenize and return the raw token strings
fn token_strings(keys: &str) -> Vec<String> {
    tokenize(keys)
        .unwrap()
        .iter()
        .map(KeyToken::to_string)
        .collect()
}

#[test]
fn test_tokenize_single_keys() {
    assert_eq!(token_strings("a"), vec!["a"]);
    assert_eq!(token_strings("A"), vec!["A"]);
    assert_eq!(token_strings("F"), vec!["F"]);
    assert_eq!(token_strings("^C"), vec!["^C"]);
    assert_eq!(token_strings("F1"), vec!["F1"]);
    assert_eq!(token_strings("F12"), vec!["F12"]);
}

#[test]
fn test_tokenize_modifier_keys() {
    assert_eq!(token_strings("C-x"), vec!["C-x"]);
    assert_eq!(token_strings("M-x"), vec!["M-x"]);
    assert_eq!(token_strings("S-x"), vec!["S-x"]);
}

#[test]
fn test_tokenize_sequences() {
    assert_eq!(token_strings("a b"), vec!["a", "b"]);
    assert_eq!(token_strings("Space"), vec!["Space"]);
    assert_eq!(token_strings("Space Right"), vec!["Space", "Right"]);
    assert_eq!(token_strings("C-x f F5 Enter"), vec!["C-x", "f", "F5", "Enter"]);
}

#[test]
fn test_tokenize_preserves_case() {
    assert_eq!(token_strings("a A"), vec!["a", "A"]);
    assert_eq!(token_strings("space SPACE"), vec!["space", "SPACE"]);
}

#[test]
fn test_tokenize_rewrites_quotes() {
    assert_eq!(token_strings("'"), vec![r#""'""#]);
    assert_eq!(token_strings("\""), vec![r#"'"'"#]);
    assert_eq!(token_strings("a ' b"), vec!["a", r#""'""#, "b"]);
}

#[test]
fn test_tokenize_empty() {
    assert_eq!(tokenize(""), Err(KeyError::EmptyKeySequence));
}

#[test]
fn test_tokenize_function_key_errors() {
    for keys in ["F0", "F13", "FF", "f99", "F1x"] {
        assert_eq!(
            tokenize(keys),
            Err(KeyError::UnsupportedFunctionKey(keys.to_string())),
            "keys = {}",
            keys
        );
    }
}

#[test]
fn test_tokenize_special_key_errors() {
    for keys in ["spacee", "meta", "shift", "upp"] {
        assert_eq!(
            tokenize(keys),
            Err(KeyError::UnsupportedSpecialKey(keys.to_string())),
            "keys = {}",
            keys
        );
    }
}

#[test]
fn test_tokenize_fails_on_first_bad_key() {
    // No partial results: valid keys before the bad one are discarded
    assert_eq!(
        tokenize("a b meta F13"),
        Err(KeyError::UnsupportedSpecialKey("meta".to_string()))
    );
}

#[test]
fn test_tokenize_rejects_doubled_spaces() {
    // Splitting on single spaces leaves an empty chunk between them
    assert_eq!(
        tokenize("a  b"),
        Err(KeyError::UnsupportedSpecialKey(String::new()))
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(KeyError::EmptyKeySequence.to_string(), "keys is empty");
    assert_eq!(
        KeyError::UnsupportedFunctionKey("F0".to_string()).to_string(),
        r#""F0" is not a supported key function key, supported function keys are F1 to F12"#
    );
    assert_eq!(
        KeyError::UnsupportedSpecialKey("spacee".to_string()).to_string(),
        r#""spacee" is not a supported special key, see tmux manual for reference"#
    );
}

#[test]
fn test_validate_letters_and_modifiers() {
    for c in ('a'..='z').chain('A'..='Z') {
        assert!(validate_key(&c.to_string()).is_ok(), "key = {}", c);

        for modifier in ["C", "c", "M", "m", "S", "s"] {
            let key = format!("{}-{}", modifier, c);
            assert!(validate_key(&key).is_ok(), "key = {}", key);
        }
    }
}

#[test]
fn test_validate_symbols() {
    for key in ["$", ";", "#", "~", "-", "^", "'", "\""] {
        assert!(validate_key(key).is_ok(), "key = {}", key);
    }
}

#[test]
fn test_validate_special_keys_any_case() {
    for special in SpecialKey::ALL {
        let name = special.name();
        assert!(validate_key(name).is_ok(), "key = {}", name);
        assert!(validate_key(&name.to_uppercase()).is_ok(), "key = {}", name);
        assert!(validate_key(&name.to_lowercase()).is_ok(), "key = {}", name);
    }
}

#[test]
fn test_validate_function_keys() {
    for n in 1..=12 {
        assert!(validate_key(&format!("F{}", n)).is_ok());
        assert!(validate_key(&format!("f{}", n)).is_ok());
    }
}

#[test]
fn test_validate_invalid_keys() {
    for key in ["aa", "c-aa", "m-aa", "s-aa", "-a", " a", "  a", " a ", "$a"] {
        assert!(validate_key(key).is_err(), "key = {:?}", key);
    }
}
