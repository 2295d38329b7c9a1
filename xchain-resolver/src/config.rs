//! Chain set configuration.
//!
//! Lists the chains a process works with. Loaded from a TOML file with
//! support for environment variable expansion in string values. Variables use
//! `$VAR` or `${VAR}` syntax.
//!
//! # Example Configuration
//!
//! ```toml
//! allow_mainnet = false
//! chains = ["bitcoin_regtest", "ethereum_localnet", "$EXTRA_CHAIN"]
//! ```
//!
//! # Environment Variables
//!
//! - `CONFIG` - Path to configuration file (default: `chains.toml`)
//! - Any variable referenced by `$VAR` in the config file

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default configuration file name.
pub const DEFAULT_CONFIG_PATH: &str = "chains.toml";

/// Top-level chain set configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainSetConfig {
    /// Chain names to resolve at startup.
    #[serde(default)]
    pub chains: Vec<String>,

    /// Whether mainnet chains may be configured (default: `false`).
    #[serde(default)]
    pub allow_mainnet: bool,
}

impl ChainSetConfig {
    /// Loads configuration from the path given by the `CONFIG` environment
    /// variable, falling back to `chains.toml` in the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_owned());
        Self::load_from(&path)
    }

    /// Loads configuration from a specific file path.
    ///
    /// A missing file yields the default (empty) configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        let content = if Path::new(path).exists() {
            std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_owned(),
                source,
            })?
        } else {
            tracing::debug!(path, "no chain config file, using defaults");
            String::new()
        };
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string, expanding `$VAR` references
    /// from the process environment first.
    ///
    /// # Errors
    ///
    /// Returns an error if the expanded string is not a valid configuration.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let expanded = expand_env_vars(content);
        Ok(toml::from_str(&expanded)?)
    }
}

/// Expands `$VAR` and `${VAR}` patterns in a string from environment variables.
///
/// Unresolved variables are left as-is.
fn expand_env_vars(input: &str) -> String {
    expand_with(input, |name| std::env::var(name).ok())
}

fn expand_with(input: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut expanded = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(dollar) = rest.find('$') {
        expanded.push_str(&rest[..dollar]);
        let (name, len) = variable_at(&rest[dollar + 1..]);
        let token = &rest[dollar..=dollar + len];
        match Some(name).filter(|n| !n.is_empty()).and_then(&lookup) {
            Some(value) => expanded.push_str(&value),
            None => expanded.push_str(token),
        }
        rest = &rest[dollar + 1 + len..];
    }

    expanded.push_str(rest);
    expanded
}

/// Splits the variable reference following a `$` into its name and the
/// number of bytes it spans. An unterminated `${` spans nothing.
fn variable_at(after: &str) -> (&str, usize) {
    after.strip_prefix('{').map_or_else(
        || {
            let end = after
                .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
                .unwrap_or(after.len());
            (&after[..end], end)
        },
        |braced| braced.find('}').map_or(("", 0), |end| (&braced[..end], end + 2)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(name: &str) -> Option<String> {
        match name {
            "CHAIN" => Some("bitcoin_regtest".to_owned()),
            "EVM_CHAIN" => Some("ethereum_localnet".to_owned()),
            _ => None,
        }
    }

    #[test]
    fn test_expand_plain_and_braced() {
        assert_eq!(expand_with("$CHAIN", lookup), "bitcoin_regtest");
        assert_eq!(expand_with("${EVM_CHAIN}!", lookup), "ethereum_localnet!");
        assert_eq!(
            expand_with("[\"$CHAIN\", \"${EVM_CHAIN}\"]", lookup),
            "[\"bitcoin_regtest\", \"ethereum_localnet\"]"
        );
    }

    #[test]
    fn test_expand_leaves_unresolved() {
        assert_eq!(expand_with("$MISSING", lookup), "$MISSING");
        assert_eq!(expand_with("${MISSING}", lookup), "${MISSING}");
        assert_eq!(expand_with("cost: $ 5", lookup), "cost: $ 5");
        assert_eq!(expand_with("${", lookup), "${");
        assert_eq!(expand_with("${CHAIN", lookup), "${CHAIN");
        assert_eq!(expand_with("${}", lookup), "${}");
        assert_eq!(expand_with("$CHAIN$", lookup), "bitcoin_regtest$");
    }

    #[test]
    fn test_parse_config() {
        let config = ChainSetConfig::parse(
            r#"
            allow_mainnet = true
            chains = ["bitcoin", "arbitrum"]
            "#,
        )
        .unwrap();
        assert!(config.allow_mainnet);
        assert_eq!(config.chains, vec!["bitcoin", "arbitrum"]);
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = ChainSetConfig::parse("").unwrap();
        assert_eq!(config, ChainSetConfig::default());
        assert!(!config.allow_mainnet);
    }

    #[test]
    fn test_parse_rejects_wrong_types() {
        let err = ChainSetConfig::parse("chains = \"bitcoin\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = ChainSetConfig::load_from("/nonexistent/xchain/chains.toml").unwrap();
        assert!(config.chains.is_empty());
    }
}
