//! Key table configuration loading.
//!
//! Configs are YAML documents with a single `key_binds` entry. Two layouts
//! are accepted, and both keep tables in document order:
//!
//! ```yaml
//! # List of tables
//! key_binds:
//!   - name: prefix
//!     bindings:
//!       - keys: f d
//!         cmd: new-window
//!
//! # Mapping of table name to bindings
//! key_binds:
//!   prefix:
//!     - keys: f d
//!       command: new-window
//! ```
//!
//! # Example
//!
//! ```no_run
//! use tmux_keys::config::Config;
//!
//! let config = Config::load(&Config::default_path())?;
//! println!("{} tables", config.tables().len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;

pub use error::ConfigError;

use log::info;
use serde::{
    de::{self, MapAccess, SeqAccess, Visitor},
    Deserialize, Deserializer,
};
use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use crate::core::types::{Binding, Table};

/// Default config location, before tilde expansion.
pub const DEFAULT_CONFIG_PATH: &str = "~/.config/tmux-keys/tmux-keys.yml";

/// A parsed key table config.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct Config {
    /// Tables in declaration order.
    #[serde(default, deserialize_with = "deserialize_tables")]
    key_binds: Vec<Table>,
}

impl Config {
    /// Parses a config from YAML text.
    ///
    /// An empty document is an empty config.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Reads and parses the config file at `path`.
    ///
    /// A leading `~` is expanded to the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file doesn't exist,
    /// `ConfigError::Io` if it can't be read, and `ConfigError::Parse` if it
    /// isn't a valid key table config.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let path = expand_path(path)?;

        if !path.exists() {
            return Err(ConfigError::NotFound(path));
        }

        let content = fs::read_to_string(&path)?;
        let config = Self::parse(&content)?;

        info!(
            "Loaded {} table(s) from {}",
            config.key_binds.len(),
            path.display()
        );

        Ok(config)
    }

    /// The default config path with `~` expanded.
    pub fn default_path() -> PathBuf {
        PathBuf::from(shellexpand::tilde(DEFAULT_CONFIG_PATH).as_ref())
    }

    pub fn tables(&self) -> &[Table] {
        &self.key_binds
    }

    /// Total number of bindings across all tables.
    pub fn binding_count(&self) -> usize {
        self.key_binds.iter().map(|t| t.bindings.len()).sum()
    }
}

/// Expands a leading `~` in `path`.
pub fn expand_path(path: &Path) -> Result<PathBuf, ConfigError> {
    let raw = path
        .to_str()
        .ok_or_else(|| ConfigError::InvalidPath(path.to_path_buf()))?;
    Ok(PathBuf::from(shellexpand::tilde(raw).as_ref()))
}

/// Accepts `key_binds` as a list of tables or a name → bindings mapping.
fn deserialize_tables<'de, D>(deserializer: D) -> Result<Vec<Table>, D::Error>
where
    D: Deserializer<'de>,
{
    struct TablesVisitor;

    impl<'de> Visitor<'de> for TablesVisitor {
        type Value = Vec<Table>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a list of tables or a mapping of table name to bindings")
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut tables = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(table) = seq.next_element::<Table>()? {
                tables.push(table);
            }
            Ok(tables)
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut tables = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((name, bindings)) = map.next_entry::<String, Option<Vec<Binding>>>()? {
                tables.push(Table::new(name, bindings.unwrap_or_default()));
            }
            Ok(tables)
        }
    }

    deserializer.deserialize_any(TablesVisitor)
}

#[cfg(test)]
mod tests;
