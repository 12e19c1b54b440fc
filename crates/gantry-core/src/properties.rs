//! Java-style `.properties` file parsing
//!
//! Implements the subset of `java.util.Properties` semantics that keystore
//! property files actually use: `key=value` and `key: value` pairs, `#` and
//! `!` comment lines, blank lines, surrounding-whitespace trimming, and
//! trailing-backslash line continuations. Unicode escape sequences are not
//! processed; backslashes other than a line continuation pass through
//! verbatim.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use crate::error::PropertiesError;

/// An ordered set of string key/value pairs read from a `.properties` file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: BTreeMap<String, String>,
}

impl Properties {
    /// Load properties from a file.
    ///
    /// Returns [`PropertiesError::NotFound`] when the file does not exist;
    /// callers that treat absence as a normal state should check existence
    /// first.
    pub fn load(path: &Path) -> Result<Self, PropertiesError> {
        if !path.exists() {
            return Err(PropertiesError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path).map_err(|source| PropertiesError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let props = Self::parse(&content, path)?;
        debug!(path = %path.display(), entries = props.len(), "loaded properties");
        Ok(props)
    }

    /// Parse properties from a string. `origin` is only used in error messages.
    pub fn parse(content: &str, origin: &Path) -> Result<Self, PropertiesError> {
        let mut entries = BTreeMap::new();
        let mut lines = content.lines().enumerate();

        while let Some((idx, raw)) = lines.next() {
            let line_no = idx + 1;
            let line = raw.trim();

            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            // Join trailing-backslash continuations into one logical line.
            let mut logical = line.to_string();
            while logical.ends_with('\\') {
                logical.pop();
                match lines.next() {
                    Some((_, next)) => logical.push_str(next.trim_start()),
                    None => break,
                }
            }

            let sep = logical.find(|c: char| c == '=' || c == ':');
            let Some(pos) = sep else {
                return Err(PropertiesError::Malformed {
                    path: origin.to_path_buf(),
                    line: line_no,
                    message: format!("expected 'key=value' or 'key: value', got '{}'", logical),
                });
            };

            let key = logical[..pos].trim();
            let value = logical[pos + 1..].trim();

            if key.is_empty() {
                return Err(PropertiesError::Malformed {
                    path: origin.to_path_buf(),
                    line: line_no,
                    message: "property key is empty".to_string(),
                });
            }

            entries.insert(key.to_string(), value.to_string());
        }

        Ok(Self { entries })
    }

    /// Look up a value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether the file contained no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
