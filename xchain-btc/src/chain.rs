//! Bitcoin chain descriptors.
//!
//! A [`UtxoChain`] is resolved from a UTXO-based [`ChainName`] and holds the
//! [`UtxoParams`] its addresses are decoded under.

use std::fmt;

use bitcoin::address::NetworkUnchecked;
use bitcoin::{Address, Network};
use serde::Serialize;
use xchain::chain::ChainId;
use xchain::{ChainFamily, ChainName, ChainOps, ContractViolation, InvalidAddress, NetworkTier};

use crate::networks::{self, UtxoParams};

/// CAIP-2 namespace for Bitcoin-family chains.
pub const BIP122_NAMESPACE: &str = "bip122";

/// A resolved UTXO-based chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UtxoChain {
    name: ChainName,
    network_tier: NetworkTier,
    params: &'static UtxoParams,
}

impl UtxoChain {
    /// Resolves a UTXO-based chain name into its descriptor.
    ///
    /// | Chain | Tier | Parameters |
    /// |---|---|---|
    /// | `bitcoin` | mainnet | [`networks::MAINNET`] |
    /// | `bitcoin_testnet` | testnet | [`networks::TESTNET3`] |
    /// | `bitcoin_regtest` | localnet | [`networks::REGTEST`] |
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::FamilyMismatch`] if `name` is an
    /// account-based chain. See [`ContractViolation::abort`].
    pub fn resolve(name: ChainName) -> Result<Self, ContractViolation> {
        let family = name.family();
        if family != ChainFamily::UtxoBased {
            return Err(violation(ContractViolation::FamilyMismatch {
                name,
                expected: ChainFamily::UtxoBased,
                actual: family,
            }));
        }
        let params = networks::by_name(name)
            .ok_or_else(|| violation(ContractViolation::Unmapped { name, family }))?;
        Ok(Self {
            name,
            network_tier: name.network_tier(),
            params,
        })
    }

    /// Returns the address parameter set of this chain.
    #[must_use]
    pub const fn params(&self) -> &'static UtxoParams {
        self.params
    }

    /// Returns the `bitcoin` crate network of this chain.
    #[must_use]
    pub const fn network(&self) -> Network {
        self.params.network
    }

    /// Parses an address and checks it belongs to this chain's network.
    ///
    /// Legacy (base58) addresses must carry this network's version byte and
    /// segwit addresses its bech32 HRP. Testnet and regtest share version
    /// bytes, so a legacy testnet address is valid on regtest and vice versa.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidAddress`] if the address does not decode, or decodes
    /// for another network.
    pub fn parse_address(&self, address: &str) -> Result<Address, InvalidAddress> {
        let unchecked = address
            .parse::<Address<NetworkUnchecked>>()
            .map_err(|e| InvalidAddress::new(self.name, address, e.to_string()))?;
        unchecked
            .require_network(self.params.network)
            .map_err(|e| InvalidAddress::new(self.name, address, e.to_string()))
    }
}

fn violation(err: ContractViolation) -> ContractViolation {
    #[cfg(feature = "telemetry")]
    tracing::debug!(chain = %err.name(), error = %err, "utxo chain resolution refused");
    err
}

impl ChainOps for UtxoChain {
    fn name(&self) -> ChainName {
        self.name
    }

    fn family(&self) -> ChainFamily {
        ChainFamily::UtxoBased
    }

    fn network_tier(&self) -> NetworkTier {
        self.network_tier
    }

    fn caip2(&self) -> ChainId {
        ChainId::new(BIP122_NAMESPACE, self.params.genesis_prefix)
    }

    fn validate_address(&self, address: &str) -> Result<(), InvalidAddress> {
        self.parse_address(address).map(|_| ())
    }
}

impl fmt::Display for UtxoChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.caip2())
    }
}
