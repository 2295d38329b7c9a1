//! Known EIP-155 networks and their resolution parameters.
//!
//! Only account-based chains with a known chain ID appear here.
//! `arbitrum_localnet` is classified as account-based but has no entry, so
//! resolving it is a contract violation.

use serde::Serialize;
use xchain::ChainName;

use crate::chain::ChainId;

/// Ethereum chain ID.
pub const ETHEREUM: ChainId = 1;

/// Ethereum Sepolia chain ID.
pub const ETHEREUM_SEPOLIA: ChainId = 11_155_111;

/// Chain ID used by local Ethereum development nodes.
pub const ETHEREUM_LOCALNET: ChainId = 1337;

/// Arbitrum One chain ID.
pub const ARBITRUM: ChainId = 42161;

/// Polygon zkEVM chain ID.
pub const POLYGON_ZK: ChainId = 1101;

/// Polygon zkEVM testnet (Cardona) chain ID.
pub const POLYGON_ZK_TESTNET: ChainId = 2442;

/// Resolution parameters for a single EVM chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvmNetworkInfo {
    /// Chain name this entry resolves.
    pub name: ChainName,
    /// EIP-155 chain ID.
    pub chain_id: ChainId,
    /// Whether the chain settles to another chain.
    pub is_layer2: bool,
    /// Ticker of the native gas coin.
    pub native_symbol: &'static str,
}

/// Every EVM chain with a resolution entry.
pub static EVM_NETWORKS: &[EvmNetworkInfo] = &[
    EvmNetworkInfo {
        name: ChainName::Ethereum,
        chain_id: ETHEREUM,
        is_layer2: false,
        native_symbol: "ETH",
    },
    EvmNetworkInfo {
        name: ChainName::EthereumSepolia,
        chain_id: ETHEREUM_SEPOLIA,
        is_layer2: false,
        native_symbol: "ETH",
    },
    EvmNetworkInfo {
        name: ChainName::EthereumLocalnet,
        chain_id: ETHEREUM_LOCALNET,
        is_layer2: false,
        native_symbol: "ETH",
    },
    EvmNetworkInfo {
        name: ChainName::Arbitrum,
        chain_id: ARBITRUM,
        is_layer2: true,
        native_symbol: "ETH",
    },
    EvmNetworkInfo {
        name: ChainName::PolygonZk,
        chain_id: POLYGON_ZK,
        is_layer2: true,
        native_symbol: "ETH",
    },
    EvmNetworkInfo {
        name: ChainName::PolygonZkTestnet,
        chain_id: POLYGON_ZK_TESTNET,
        is_layer2: true,
        native_symbol: "ETH",
    },
];

/// Looks up the resolution entry for a chain name.
#[must_use]
pub fn by_name(name: ChainName) -> Option<&'static EvmNetworkInfo> {
    EVM_NETWORKS.iter().find(|n| n.name == name)
}

/// Looks up the resolution entry for an EIP-155 chain ID.
#[must_use]
pub fn by_chain_id(chain_id: ChainId) -> Option<&'static EvmNetworkInfo> {
    EVM_NETWORKS.iter().find(|n| n.chain_id == chain_id)
}

/// Returns the CAIP-2 identifiers of every resolvable EVM chain.
#[must_use]
pub fn known_network_ids() -> Vec<String> {
    EVM_NETWORKS
        .iter()
        .map(|n| crate::chain::caip2(n.chain_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_entry_is_account_based() {
        for network in EVM_NETWORKS {
            assert!(network.name.is_evm(), "{} is not EVM", network.name);
        }
    }

    #[test]
    fn test_chain_ids_are_unique() {
        for network in EVM_NETWORKS {
            assert_eq!(by_chain_id(network.chain_id), Some(network));
        }
    }

    #[test]
    fn test_arbitrum_localnet_is_unmapped() {
        assert!(by_name(ChainName::ArbitrumLocalnet).is_none());
    }

    #[test]
    fn test_lookup_by_chain_id() {
        assert_eq!(by_chain_id(42161).unwrap().name, ChainName::Arbitrum);
        assert_eq!(by_chain_id(1337).unwrap().name, ChainName::EthereumLocalnet);
        assert!(by_chain_id(8453).is_none());
    }

    #[test]
    fn test_known_network_ids() {
        let ids = known_network_ids();
        assert_eq!(ids.len(), EVM_NETWORKS.len());
        assert!(ids.contains(&"eip155:11155111".to_owned()));
        assert!(ids.contains(&"eip155:2442".to_owned()));
    }
}
