//! Listing configuration, loadable from TOML.

use std::str::FromStr;

use serde::Deserialize;

use crate::{Error, Indent, Result};

/// Layout options applied while rendering.
///
/// # Example
///
/// ```
/// use listing_core::{Config, Indent};
///
/// let config = Config::from_toml("indent = 4\nblank_line_between_members = false").unwrap();
/// assert_eq!(config.indent, Indent::FOUR);
/// assert_eq!(config.line_separator, "\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Indentation unit for each nesting level.
    pub indent: Indent,
    /// Separator emitted at the end of every line.
    pub line_separator: String,
    /// Emit a blank line before each method, constructor and nested type
    /// that does not open its body.
    pub blank_line_between_members: bool,
}

impl Config {
    /// Parse a configuration from TOML text. Missing keys keep their defaults.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|source| Error::Config { source })?;
        tracing::debug!(indent = ?config.indent, "loaded listing configuration");
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent: Indent::default(),
            line_separator: "\n".to_string(),
            blank_line_between_members: true,
        }
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_toml(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_tab_and_separator() {
        let config: Config = "indent = \"tab\"\nline_separator = \"\\r\\n\"".parse().unwrap();
        assert_eq!(config.indent, Indent::Tab);
        assert_eq!(config.line_separator, "\r\n");
        assert!(config.blank_line_between_members);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(
            Config::from_toml("indent = \"wide\""),
            Err(Error::Config { .. })
        ));
        assert!(matches!(
            Config::from_toml("colour = true"),
            Err(Error::Config { .. })
        ));
    }
}
