//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Key tokenizing and validation tests
//! - Binding expansion tests
//! - Table-wide generation tests

#[cfg(test)]
mod tokenizer_tests;
