//! Config module tests
//!
//! Contains test suites for config loading:
//! - YAML layouts (table list and name mapping)
//! - File loading and error reporting
