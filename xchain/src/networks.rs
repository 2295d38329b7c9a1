//! Static classification table for every supported chain.
//!
//! [`CHAINS`] is the single source of truth mapping a [`ChainName`] to its
//! [`ChainFamily`] and [`NetworkTier`]. The table is fixed at build time;
//! chain-specific parameters (EIP-155 chain IDs, Bitcoin address prefixes)
//! live in `xchain-evm` and `xchain-btc`.
//!
//! The tiers of `ethereum` and `ethereum_sepolia` are reproduced exactly as
//! the settlement engine has always reported them, which is the reverse of
//! the usual convention. Do not "fix" them here without changing the engine.

use serde::Serialize;

use crate::chain::{ChainFamily, ChainName, NetworkTier};

/// Classification of a single chain name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ChainInfo {
    /// The chain name.
    pub name: ChainName,
    /// UTXO or account-based.
    pub family: ChainFamily,
    /// Mainnet, testnet or localnet.
    pub tier: NetworkTier,
}

impl ChainInfo {
    const fn new(name: ChainName, family: ChainFamily, tier: NetworkTier) -> Self {
        Self { name, family, tier }
    }
}

/// Every supported chain, in [`ChainName::ALL`] order.
pub static CHAINS: [ChainInfo; ChainName::ALL.len()] = [
    ChainInfo::new(ChainName::Bitcoin, ChainFamily::UtxoBased, NetworkTier::Mainnet),
    ChainInfo::new(
        ChainName::BitcoinTestnet,
        ChainFamily::UtxoBased,
        NetworkTier::Testnet,
    ),
    ChainInfo::new(
        ChainName::BitcoinRegtest,
        ChainFamily::UtxoBased,
        NetworkTier::Localnet,
    ),
    ChainInfo::new(
        ChainName::Ethereum,
        ChainFamily::AccountBased,
        NetworkTier::Testnet,
    ),
    ChainInfo::new(
        ChainName::EthereumSepolia,
        ChainFamily::AccountBased,
        NetworkTier::Mainnet,
    ),
    ChainInfo::new(
        ChainName::EthereumLocalnet,
        ChainFamily::AccountBased,
        NetworkTier::Localnet,
    ),
    ChainInfo::new(
        ChainName::Arbitrum,
        ChainFamily::AccountBased,
        NetworkTier::Testnet,
    ),
    ChainInfo::new(
        ChainName::ArbitrumLocalnet,
        ChainFamily::AccountBased,
        NetworkTier::Localnet,
    ),
    ChainInfo::new(
        ChainName::PolygonZk,
        ChainFamily::AccountBased,
        NetworkTier::Testnet,
    ),
    ChainInfo::new(
        ChainName::PolygonZkTestnet,
        ChainFamily::AccountBased,
        NetworkTier::Mainnet,
    ),
];

/// Returns the classification of a chain name.
///
/// Total over [`ChainName`]: the table is sized by [`ChainName::ALL`] and
/// holds each variant at its own index.
#[must_use]
pub fn chain_info(name: ChainName) -> &'static ChainInfo {
    &CHAINS[name.index()]
}

/// Returns all chains of the given family.
pub fn by_family(family: ChainFamily) -> impl Iterator<Item = &'static ChainInfo> {
    CHAINS.iter().filter(move |info| info.family == family)
}

/// Returns all chains on the given network tier.
pub fn by_tier(tier: NetworkTier) -> impl Iterator<Item = &'static ChainInfo> {
    CHAINS.iter().filter(move |info| info.tier == tier)
}
