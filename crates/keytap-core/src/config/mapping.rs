//! Token-to-keys mapping, read line by line from the config file.
//!
//! This is a second, independent pass over the same file that
//! [`super::settings`] parses as INI.  Every line is treated as a candidate
//! `token=key1+key2+...` entry:
//!
//! 1. Split on `=`.  Anything other than exactly two parts is skipped with
//!    a warning (blank lines, `[section]` headers and `a=b=c` included).
//! 2. Trim both halves.  An empty token or value is skipped with a warning.
//! 3. Split the value on `+` into the ordered key list.  Individual key
//!    names are kept exactly as written.
//! 4. Insert; a later line for the same token replaces the earlier one.
//!
//! `baud=9600` and `port=COM3` pass these rules too and land in the mapping
//! as harmless entries: a device would have to send the literal token
//! `baud` to trigger them.

use std::collections::HashMap;
use std::path::Path;

use tracing::warn;

use super::error::ConfigError;

/// Immutable lookup from trigger token to the ordered key names to tap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyMapping {
    entries: HashMap<String, Vec<String>>,
}

impl KeyMapping {
    /// Returns the keys mapped to `token`.
    ///
    /// The match is exact: no trimming, prefix or case folding.
    pub fn get(&self, token: &str) -> Option<&[String]> {
        self.entries.get(token).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T, K> FromIterator<(T, K)> for KeyMapping
where
    T: Into<String>,
    K: IntoIterator,
    K::Item: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (T, K)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(token, keys)| (token.into(), keys.into_iter().map(Into::into).collect()))
            .collect();
        Self { entries }
    }
}

/// Reads `path` and parses it with [`parse_mapping`].
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] if the file has disappeared, or
/// [`ConfigError::Io`] for any other read failure.  Malformed lines are
/// never an error, and invalid UTF-8 is replaced rather than rejected.
pub fn load_mapping(path: &Path) -> Result<KeyMapping, ConfigError> {
    let bytes = std::fs::read(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    Ok(parse_mapping(&String::from_utf8_lossy(&bytes)))
}

/// Parses mapping entries from config text.  See the module docs for the
/// line rules.
pub fn parse_mapping(content: &str) -> KeyMapping {
    let mut entries = HashMap::new();

    for (index, line) in content.lines().enumerate() {
        let line_no = index + 1;
        let parts: Vec<&str> = line.split('=').collect();
        let [token, value] = parts.as_slice() else {
            warn!(line = line_no, "invalid format in config file; skipping line");
            continue;
        };

        let token = token.trim();
        let value = value.trim();
        if token.is_empty() || value.is_empty() {
            warn!(line = line_no, "empty key or value in config file; skipping line");
            continue;
        }

        let keys = value.split('+').map(str::to_string).collect();
        entries.insert(token.to_string(), keys);
    }

    KeyMapping { entries }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
