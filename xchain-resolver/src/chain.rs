//! The family-agnostic chain descriptor.
//!
//! [`Chain`] is a tagged union over the account-based and UTXO-based
//! descriptors. Dispatch is an exhaustive `match`, so adding a family is a
//! compile error everywhere it is not yet handled.

use std::fmt;

use serde::Serialize;
use xchain::chain::ChainId;
use xchain::{ChainFamily, ChainName, ChainOps, ContractViolation, InvalidAddress, NetworkTier};
use xchain_btc::UtxoChain;
use xchain_evm::AccountChain;

use crate::error::ResolveError;

/// A resolved chain of either family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chain {
    /// An account-based (EVM) chain.
    Account(AccountChain),
    /// A UTXO-based (Bitcoin family) chain.
    Utxo(UtxoChain),
}

impl Chain {
    /// Resolves a chain name with the constructor of its family.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation`] if the family constructor has no
    /// resolution entry for `name`.
    pub fn resolve(name: ChainName) -> Result<Self, ContractViolation> {
        match name.family() {
            ChainFamily::AccountBased => AccountChain::resolve(name).map(Self::Account),
            ChainFamily::UtxoBased => UtxoChain::resolve(name).map(Self::Utxo),
        }
    }

    /// Classifies and resolves a chain name string.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Unsupported`] for unknown names and
    /// [`ResolveError::Violation`] for names without a resolution entry.
    pub fn from_name(name: &str) -> Result<Self, ResolveError> {
        let name = name.parse::<ChainName>()?;
        Ok(Self::resolve(name)?)
    }

    /// Returns the account-based descriptor, if this is an EVM chain.
    #[must_use]
    pub const fn as_account(&self) -> Option<&AccountChain> {
        match self {
            Self::Account(chain) => Some(chain),
            Self::Utxo(_) => None,
        }
    }

    /// Returns the UTXO descriptor, if this is a Bitcoin-family chain.
    #[must_use]
    pub const fn as_utxo(&self) -> Option<&UtxoChain> {
        match self {
            Self::Utxo(chain) => Some(chain),
            Self::Account(_) => None,
        }
    }

    /// Returns a serializable summary of the chain.
    #[must_use]
    pub fn summary(&self) -> ChainSummary {
        let (chain_id, is_layer2, bech32_hrp) = match self {
            Self::Account(chain) => (Some(chain.chain_id()), Some(chain.is_layer2()), None),
            Self::Utxo(chain) => (None, None, Some(chain.params().bech32_hrp)),
        };
        ChainSummary {
            name: self.name(),
            family: self.family(),
            network_tier: self.network_tier(),
            is_testnet: self.is_testnet(),
            caip2: self.caip2(),
            chain_id,
            is_layer2,
            bech32_hrp,
        }
    }
}

impl ChainOps for Chain {
    fn name(&self) -> ChainName {
        match self {
            Self::Account(chain) => chain.name(),
            Self::Utxo(chain) => chain.name(),
        }
    }

    fn family(&self) -> ChainFamily {
        match self {
            Self::Account(_) => ChainFamily::AccountBased,
            Self::Utxo(_) => ChainFamily::UtxoBased,
        }
    }

    fn network_tier(&self) -> NetworkTier {
        match self {
            Self::Account(chain) => chain.network_tier(),
            Self::Utxo(chain) => chain.network_tier(),
        }
    }

    fn caip2(&self) -> ChainId {
        match self {
            Self::Account(chain) => chain.caip2(),
            Self::Utxo(chain) => chain.caip2(),
        }
    }

    fn validate_address(&self, address: &str) -> Result<(), InvalidAddress> {
        match self {
            Self::Account(chain) => chain.validate_address(address),
            Self::Utxo(chain) => chain.validate_address(address),
        }
    }
}

impl From<AccountChain> for Chain {
    fn from(chain: AccountChain) -> Self {
        Self::Account(chain)
    }
}

impl From<UtxoChain> for Chain {
    fn from(chain: UtxoChain) -> Self {
        Self::Utxo(chain)
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Account(chain) => fmt::Display::fmt(chain, f),
            Self::Utxo(chain) => fmt::Display::fmt(chain, f),
        }
    }
}

impl Serialize for Chain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.summary().serialize(serializer)
    }
}

/// Flat, family-agnostic view of a [`Chain`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainSummary {
    /// Chain name.
    pub name: ChainName,
    /// Chain family.
    pub family: ChainFamily,
    /// Network tier.
    pub network_tier: NetworkTier,
    /// Whether the tier is anything but mainnet.
    pub is_testnet: bool,
    /// CAIP-2 identifier.
    pub caip2: ChainId,
    /// EIP-155 chain ID (account-based chains only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
    /// Layer-2 status (account-based chains only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_layer2: Option<bool>,
    /// Segwit address prefix (UTXO chains only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bech32_hrp: Option<&'static str>,
}

impl fmt::Display for ChainSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "name:         {}", self.name)?;
        writeln!(f, "family:       {}", self.family)?;
        writeln!(f, "network tier: {}", self.network_tier)?;
        writeln!(f, "testnet:      {}", self.is_testnet)?;
        write!(f, "caip2:        {}", self.caip2)?;
        if let Some(chain_id) = self.chain_id {
            write!(f, "\nchain id:     {chain_id}")?;
        }
        if let Some(is_layer2) = self.is_layer2 {
            write!(f, "\nlayer 2:      {is_layer2}")?;
        }
        if let Some(hrp) = self.bech32_hrp {
            write!(f, "\nbech32 hrp:   {hrp}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xchain::classify;

    #[test]
    fn test_scenario_bitcoin_mainnet() {
        assert_eq!(classify("bitcoin").unwrap(), ChainFamily::UtxoBased);
        let chain = Chain::from_name("bitcoin").unwrap();
        assert_eq!(chain.network_tier(), NetworkTier::Mainnet);
        assert!(chain.as_utxo().is_some());
        assert!(chain.as_account().is_none());
    }

    #[test]
    fn test_scenario_ethereum_localnet() {
        assert_eq!(
            classify("ethereum_localnet").unwrap(),
            ChainFamily::AccountBased
        );
        let chain = Chain::from_name("ethereum_localnet").unwrap();
        let account = chain.as_account().unwrap();
        assert_eq!(account.chain_id(), 1337);
        assert!(!account.is_layer2());
    }

    #[test]
    fn test_scenario_unknown_chain() {
        let err = Chain::from_name("dogecoin").unwrap_err();
        assert!(matches!(err, ResolveError::Unsupported(_)));
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_scenario_invalid_bitcoin_address() {
        let chain = Chain::from_name("bitcoin_testnet").unwrap();
        let err = chain.validate_address("not-an-address").unwrap_err();
        assert_eq!(err.chain(), ChainName::BitcoinTestnet);
    }

    #[test]
    fn test_scenario_arbitrum() {
        let chain = Chain::from_name("arbitrum").unwrap();
        let account = chain.as_account().unwrap();
        assert_eq!(account.chain_id(), 42161);
        assert!(account.is_layer2());
    }

    #[test]
    fn test_arbitrum_localnet_is_fatal() {
        let err = Chain::from_name("arbitrum_localnet").unwrap_err();
        assert!(err.is_fatal());
        assert_eq!(
            err,
            ResolveError::Violation(ContractViolation::Unmapped {
                name: ChainName::ArbitrumLocalnet,
                family: ChainFamily::AccountBased,
            })
        );
    }

    #[test]
    fn test_name_round_trip_and_idempotence() {
        for name in ChainName::ALL {
            let Ok(first) = Chain::resolve(name) else {
                assert_eq!(name, ChainName::ArbitrumLocalnet);
                continue;
            };
            let second = Chain::resolve(name).unwrap();
            assert_eq!(first, second);
            assert_eq!(first.name(), name);
            assert_eq!(first.family(), name.family());
            assert_eq!(first.network_tier(), name.network_tier());
            assert_eq!(first.summary(), second.summary());
        }
    }

    #[test]
    fn test_dispatch_matches_family() {
        for name in ChainName::ALL {
            if let Ok(chain) = Chain::resolve(name) {
                match chain.family() {
                    ChainFamily::AccountBased => assert!(chain.as_account().is_some()),
                    ChainFamily::UtxoBased => assert!(chain.as_utxo().is_some()),
                }
            }
        }
    }

    #[test]
    fn test_summary_serialization() {
        let json = serde_json::to_value(Chain::from_name("polygonzk").unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "polygonzk",
                "family": "account_based",
                "networkTier": "testnet",
                "isTestnet": true,
                "caip2": "eip155:1101",
                "chainId": 1101,
                "isLayer2": true,
            })
        );

        let json = serde_json::to_value(Chain::from_name("bitcoin_regtest").unwrap()).unwrap();
        assert_eq!(json["bech32Hrp"], "bcrt");
        assert!(json.get("chainId").is_none());
    }

    #[test]
    fn test_summary_display() {
        let text = Chain::from_name("ethereum_sepolia")
            .unwrap()
            .summary()
            .to_string();
        assert!(text.contains("network tier: mainnet"));
        assert!(text.contains("chain id:     11155111"));
    }
}
