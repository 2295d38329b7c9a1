//! Error types for chain resolution and configuration.

use xchain::{ContractViolation, UnsupportedChain};

/// Errors from resolving a chain name string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The name is not a supported chain.
    #[error(transparent)]
    Unsupported(#[from] UnsupportedChain),

    /// The name is supported but cannot be resolved into a descriptor.
    #[error(transparent)]
    Violation(#[from] ContractViolation),
}

impl ResolveError {
    /// Returns `true` if the caller must abort rather than recover.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Violation(_))
    }
}

/// Errors from loading a [`ChainSetConfig`](crate::ChainSetConfig) or
/// building a [`ChainSet`](crate::ChainSet) from it.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path of the configuration file.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for this schema.
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A configured chain name could not be resolved.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// A mainnet chain was configured without `allow_mainnet`.
    #[error("chain {0} is a mainnet; set allow_mainnet = true to enable it")]
    MainnetNotAllowed(xchain::ChainName),
}

impl From<UnsupportedChain> for ConfigError {
    fn from(err: UnsupportedChain) -> Self {
        Self::Resolve(err.into())
    }
}

impl From<ContractViolation> for ConfigError {
    fn from(err: ContractViolation) -> Self {
        Self::Resolve(err.into())
    }
}

impl ConfigError {
    /// Returns the contract violation behind this error, if any.
    #[must_use]
    pub const fn violation(&self) -> Option<&ContractViolation> {
        match self {
            Self::Resolve(ResolveError::Violation(violation)) => Some(violation),
            _ => None,
        }
    }
}
