//! Error types for chain classification and resolution.
//!
//! Three kinds of failure exist and each has its own type:
//!
//! - [`UnsupportedChain`] - the name is outside the known set. Recoverable.
//! - [`ContractViolation`] - a descriptor constructor was called with a name
//!   of the wrong family, or with a name missing from its resolution table.
//!   This is a bug in calling code; see [`ContractViolation::abort`].
//! - [`InvalidAddress`] - an address failed validation. Recoverable.

use crate::chain::{ChainFamily, ChainName};

/// A chain name outside the closed set of supported chains.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported chain: {name:?}")]
pub struct UnsupportedChain {
    name: String,
}

impl UnsupportedChain {
    /// Creates a new unsupported-chain error for the given input.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the rejected input as it was supplied.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A descriptor constructor was invoked outside its contract.
///
/// Resolution must never proceed with the wrong chain parameters: a
/// mismatched chain ID or address format upstream of fund-moving code can
/// lose funds. Callers that receive this error should not try to recover;
/// [`ContractViolation::abort`] exists for exactly that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContractViolation {
    /// The name belongs to another chain family.
    #[error("chain {name} is {actual}, not {expected}")]
    FamilyMismatch {
        /// The chain that was passed in.
        name: ChainName,
        /// The family the constructor resolves.
        expected: ChainFamily,
        /// The family the chain is classified as.
        actual: ChainFamily,
    },
    /// The name is of the right family but has no resolution entry.
    #[error("chain {name} is {family} but has no resolution entry")]
    Unmapped {
        /// The chain that was passed in.
        name: ChainName,
        /// The family of the chain.
        family: ChainFamily,
    },
}

impl ContractViolation {
    /// Returns the chain name that triggered the violation.
    #[must_use]
    pub const fn name(&self) -> ChainName {
        match self {
            Self::FamilyMismatch { name, .. } | Self::Unmapped { name, .. } => *name,
        }
    }

    /// Aborts the current operation.
    ///
    /// Emits an error event when `telemetry` is enabled, then panics. Under
    /// the release profile (`panic = "abort"`) this terminates the process.
    ///
    /// # Panics
    ///
    /// Always.
    #[allow(clippy::panic)]
    pub fn abort(self) -> ! {
        #[cfg(feature = "telemetry")]
        tracing::error!(chain = %self.name(), error = %self, "chain contract violation");
        panic!("chain contract violation: {self}")
    }
}

/// An address that does not decode under a chain's address rules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {chain} address {address:?}: {reason}")]
pub struct InvalidAddress {
    chain: ChainName,
    address: String,
    reason: String,
}

impl InvalidAddress {
    /// Creates a new invalid-address error.
    #[must_use]
    pub fn new(chain: ChainName, address: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            chain,
            address: address.into(),
            reason: reason.into(),
        }
    }

    /// Returns the chain the address was validated against.
    #[must_use]
    pub const fn chain(&self) -> ChainName {
        self.chain
    }

    /// Returns the rejected address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the decoder's reason for rejecting the address.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_chain_message() {
        let err = UnsupportedChain::new("dogecoin");
        assert_eq!(err.name(), "dogecoin");
        assert_eq!(err.to_string(), "unsupported chain: \"dogecoin\"");
    }

    #[test]
    fn test_contract_violation_messages() {
        let mismatch = ContractViolation::FamilyMismatch {
            name: ChainName::Ethereum,
            expected: ChainFamily::UtxoBased,
            actual: ChainFamily::AccountBased,
        };
        assert_eq!(mismatch.name(), ChainName::Ethereum);
        assert_eq!(
            mismatch.to_string(),
            "chain ethereum is account-based, not utxo-based"
        );

        let unmapped = ContractViolation::Unmapped {
            name: ChainName::ArbitrumLocalnet,
            family: ChainFamily::AccountBased,
        };
        assert_eq!(
            unmapped.to_string(),
            "chain arbitrum_localnet is account-based but has no resolution entry"
        );
    }

    #[test]
    fn test_contract_violation_is_copy() {
        let violation = ContractViolation::FamilyMismatch {
            name: ChainName::Bitcoin,
            expected: ChainFamily::AccountBased,
            actual: ChainFamily::UtxoBased,
        };
        let copied = violation;
        assert_eq!(violation.name(), copied.name());
        assert_eq!(violation, copied);
    }

    #[test]
    #[should_panic(expected = "chain contract violation")]
    fn test_contract_violation_abort_panics() {
        ContractViolation::Unmapped {
            name: ChainName::ArbitrumLocalnet,
            family: ChainFamily::AccountBased,
        }
        .abort();
    }

    #[test]
    fn test_invalid_address_accessors() {
        let err = InvalidAddress::new(ChainName::Bitcoin, "nope", "base58 error");
        assert_eq!(err.chain(), ChainName::Bitcoin);
        assert_eq!(err.address(), "nope");
        assert_eq!(err.reason(), "base58 error");
        assert_eq!(
            err.to_string(),
            "invalid bitcoin address \"nope\": base58 error"
        );
    }
}
