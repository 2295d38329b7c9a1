//! EVM chain descriptors.
//!
//! An [`AccountChain`] is resolved from an account-based [`ChainName`] and
//! carries the EIP-155 chain ID and layer-2 status from
//! [`EVM_NETWORKS`](crate::networks::EVM_NETWORKS). It is immutable and
//! `Copy`, so it can be shared across threads without synchronisation.

use std::fmt;
use std::str::FromStr;

use alloy_primitives::Address;
use serde::Serialize;
use xchain::chain::ChainId as Caip2Id;
use xchain::{ChainFamily, ChainName, ChainOps, ContractViolation, InvalidAddress, NetworkTier};

use crate::networks;

/// An EIP-155 chain ID (e.g., 1 for Ethereum, 42161 for Arbitrum).
pub type ChainId = u64;

/// Formats a chain ID as a CAIP-2 identifier.
///
/// Example: `caip2(42161)` returns `"eip155:42161"`.
#[must_use]
pub fn caip2(chain_id: ChainId) -> String {
    format!("eip155:{chain_id}")
}

/// Parses a CAIP-2 identifier into an EIP-155 chain ID.
///
/// Returns `None` if the input is not a valid `eip155:` prefixed string.
#[must_use]
pub fn parse_caip2(caip: &str) -> Option<ChainId> {
    caip.strip_prefix("eip155:").and_then(|s| s.parse().ok())
}

/// A resolved account-based chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountChain {
    name: ChainName,
    network_tier: NetworkTier,
    chain_id: ChainId,
    is_layer2: bool,
    #[serde(skip)]
    native_symbol: &'static str,
}

impl AccountChain {
    /// Resolves an account-based chain name into its descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::FamilyMismatch`] if `name` is a UTXO
    /// chain, and [`ContractViolation::Unmapped`] if it is account-based but
    /// has no EIP-155 resolution entry (`arbitrum_localnet`). Neither is a
    /// recoverable condition; see [`ContractViolation::abort`].
    pub fn resolve(name: ChainName) -> Result<Self, ContractViolation> {
        let family = name.family();
        if family != ChainFamily::AccountBased {
            return Err(violation(ContractViolation::FamilyMismatch {
                name,
                expected: ChainFamily::AccountBased,
                actual: family,
            }));
        }
        let info = networks::by_name(name)
            .ok_or_else(|| violation(ContractViolation::Unmapped { name, family }))?;
        Ok(Self {
            name,
            network_tier: name.network_tier(),
            chain_id: info.chain_id,
            is_layer2: info.is_layer2,
            native_symbol: info.native_symbol,
        })
    }

    /// Returns the EIP-155 chain ID used for signing domain separation.
    #[must_use]
    pub const fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    /// Returns `true` if the chain settles to another chain.
    #[must_use]
    pub const fn is_layer2(&self) -> bool {
        self.is_layer2
    }

    /// Returns the ticker of the chain's native gas coin.
    #[must_use]
    pub const fn native_symbol(&self) -> &'static str {
        self.native_symbol
    }

    /// Parses and validates an address on this chain.
    ///
    /// Accepts a `0x`- or `0X`-prefixed 40-digit hex string. All-lowercase and
    /// all-uppercase digits are taken as-is; mixed case must carry a valid
    /// EIP-55 checksum.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidAddress`] if the string is malformed or the checksum
    /// does not match.
    pub fn parse_address(&self, address: &str) -> Result<Address, InvalidAddress> {
        let invalid = |reason: &str| InvalidAddress::new(self.name, address, reason);

        let digits = address
            .strip_prefix("0x")
            .or_else(|| address.strip_prefix("0X"))
            .ok_or_else(|| invalid("missing 0x prefix"))?;
        if digits.len() != 40 {
            return Err(invalid("expected 20 bytes of hex"));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid("non-hex character"));
        }

        let has_lower = digits.bytes().any(|b| b.is_ascii_lowercase());
        let has_upper = digits.bytes().any(|b| b.is_ascii_uppercase());
        let normalized = format!("0x{digits}");
        if has_lower && has_upper {
            Address::parse_checksummed(&normalized, None).map_err(|e| invalid(&e.to_string()))
        } else {
            Address::from_str(&normalized).map_err(|e| invalid(&e.to_string()))
        }
    }

    /// Formats an address with its EIP-55 checksum.
    #[must_use]
    pub fn checksum(&self, address: &Address) -> String {
        address.to_checksum(None)
    }
}

fn violation(err: ContractViolation) -> ContractViolation {
    #[cfg(feature = "telemetry")]
    tracing::debug!(chain = %err.name(), error = %err, "account chain resolution refused");
    err
}

impl ChainOps for AccountChain {
    fn name(&self) -> ChainName {
        self.name
    }

    fn family(&self) -> ChainFamily {
        ChainFamily::AccountBased
    }

    fn network_tier(&self) -> NetworkTier {
        self.network_tier
    }

    fn caip2(&self) -> Caip2Id {
        Caip2Id::new("eip155", self.chain_id.to_string())
    }

    fn validate_address(&self, address: &str) -> Result<(), InvalidAddress> {
        self.parse_address(address).map(|_| ())
    }
}

impl fmt::Display for AccountChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, caip2(self.chain_id))
    }
}
