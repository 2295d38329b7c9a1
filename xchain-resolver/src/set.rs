//! The set of chains a process is configured for.

use std::collections::BTreeMap;

use xchain::{ChainFamily, ChainName, ChainOps, NetworkTier};

use crate::chain::Chain;
use crate::config::ChainSetConfig;
use crate::error::ConfigError;

/// Chains resolved once at startup, indexed by name.
///
/// Immutable after construction; share it behind an `Arc` if needed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainSet(BTreeMap<ChainName, Chain>);

impl ChainSet {
    /// Resolves every chain listed in `config`.
    ///
    /// Duplicate names collapse into one entry.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Resolve`] if a name is unsupported or has no
    ///   resolution entry. The latter wraps a contract violation, see
    ///   [`ConfigError::violation`].
    /// - [`ConfigError::MainnetNotAllowed`] if a mainnet chain is listed
    ///   without `allow_mainnet`.
    pub fn from_config(config: &ChainSetConfig) -> Result<Self, ConfigError> {
        let mut chains = BTreeMap::new();
        for raw in &config.chains {
            let name = raw.trim().parse::<ChainName>()?;
            let chain = Chain::resolve(name)?;
            if chain.network_tier() == NetworkTier::Mainnet && !config.allow_mainnet {
                return Err(ConfigError::MainnetNotAllowed(name));
            }
            tracing::debug!(
                chain = %name,
                family = %chain.family(),
                tier = %chain.network_tier(),
                caip2 = %chain.caip2(),
                "resolved chain"
            );
            chains.insert(name, chain);
        }
        Ok(Self(chains))
    }

    /// Resolves the given chain names, allowing mainnets.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Resolve`] if a name cannot be resolved.
    pub fn from_names<I, S>(names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_config(&ChainSetConfig {
            chains: names.into_iter().map(Into::into).collect(),
            allow_mainnet: true,
        })
    }

    /// Looks up a configured chain by name.
    #[must_use]
    pub fn get(&self, name: ChainName) -> Option<&Chain> {
        self.0.get(&name)
    }

    /// Iterates over the configured chains in [`ChainName`] order.
    pub fn iter(&self) -> impl Iterator<Item = &Chain> {
        self.0.values()
    }

    /// Returns the configured chains of the given family.
    pub fn by_family(&self, family: ChainFamily) -> impl Iterator<Item = &Chain> {
        self.iter().filter(move |chain| chain.family() == family)
    }

    /// Returns the configured chains on the given network tier.
    pub fn by_tier(&self, tier: NetworkTier) -> impl Iterator<Item = &Chain> {
        self.iter().filter(move |chain| chain.network_tier() == tier)
    }

    /// Returns `true` if any configured chain is a mainnet.
    #[must_use]
    pub fn has_mainnet(&self) -> bool {
        self.by_tier(NetworkTier::Mainnet).next().is_some()
    }

    /// Returns the number of configured chains.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no chains are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a ChainSet {
    type Item = &'a Chain;
    type IntoIter = std::collections::btree_map::Values<'a, ChainName, Chain>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResolveError;

    fn config(chains: &[&str], allow_mainnet: bool) -> ChainSetConfig {
        ChainSetConfig {
            chains: chains.iter().map(|s| (*s).to_owned()).collect(),
            allow_mainnet,
        }
    }

    #[test]
    fn test_from_config_resolves_chains() {
        let set = ChainSet::from_config(&config(
            &["ethereum_localnet", "bitcoin_regtest", "ethereum_localnet"],
            false,
        ))
        .unwrap();
        assert_eq!(set.len(), 2);
        assert!(!set.has_mainnet());
        let names: Vec<_> = set.iter().map(ChainOps::name).collect();
        assert_eq!(
            names,
            vec![ChainName::BitcoinRegtest, ChainName::EthereumLocalnet]
        );
        let evm = set.get(ChainName::EthereumLocalnet).unwrap();
        assert_eq!(evm.as_account().unwrap().chain_id(), 1337);
    }

    #[test]
    fn test_from_config_rejects_unsupported() {
        let err = ChainSet::from_config(&config(&["dogecoin"], true)).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Resolve(ResolveError::Unsupported(_))
        ));
        assert!(err.violation().is_none());
    }

    #[test]
    fn test_from_config_surfaces_violation() {
        let err = ChainSet::from_config(&config(&["arbitrum_localnet"], true)).unwrap_err();
        assert_eq!(err.violation().unwrap().name(), ChainName::ArbitrumLocalnet);
    }

    #[test]
    fn test_mainnet_guard() {
        let err = ChainSet::from_config(&config(&["bitcoin"], false)).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MainnetNotAllowed(ChainName::Bitcoin)
        ));

        let set = ChainSet::from_config(&config(&["bitcoin"], true)).unwrap();
        assert!(set.has_mainnet());
    }

    #[test]
    fn test_filters() {
        let set = ChainSet::from_names(["bitcoin", "bitcoin_testnet", "arbitrum", "polygonzk"])
            .unwrap();
        assert_eq!(set.by_family(ChainFamily::UtxoBased).count(), 2);
        assert_eq!(set.by_family(ChainFamily::AccountBased).count(), 2);
        assert_eq!(set.by_tier(NetworkTier::Testnet).count(), 3);
        assert_eq!((&set).into_iter().count(), 4);
    }

    #[test]
    fn test_names_are_trimmed() {
        let set = ChainSet::from_names([" bitcoin_regtest "]).unwrap();
        assert!(set.get(ChainName::BitcoinRegtest).is_some());
        assert!(ChainSet::default().is_empty());
    }
}
