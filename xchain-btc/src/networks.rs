//! Known Bitcoin networks and their address parameters.

use bitcoin::Network;
use serde::Serialize;
use xchain::ChainName;

/// Address and serialization parameters of a Bitcoin network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UtxoParams {
    /// Chain name this parameter set belongs to.
    pub name: ChainName,
    /// Network used by the `bitcoin` crate when decoding addresses.
    #[serde(skip)]
    pub network: Network,
    /// Base58 version byte of pay-to-pubkey-hash addresses.
    pub p2pkh_prefix: u8,
    /// Base58 version byte of pay-to-script-hash addresses.
    pub p2sh_prefix: u8,
    /// Human-readable part of segwit addresses.
    pub bech32_hrp: &'static str,
    /// Version byte of WIF-encoded private keys.
    pub wif_prefix: u8,
    /// First 32 hex characters of the genesis block hash (CAIP-2 `bip122` reference).
    pub genesis_prefix: &'static str,
}

/// Bitcoin mainnet parameters.
pub const MAINNET: UtxoParams = UtxoParams {
    name: ChainName::Bitcoin,
    network: Network::Bitcoin,
    p2pkh_prefix: 0x00,
    p2sh_prefix: 0x05,
    bech32_hrp: "bc",
    wif_prefix: 0x80,
    genesis_prefix: "000000000019d6689c085ae165831e93",
};

/// Bitcoin testnet3 parameters.
pub const TESTNET3: UtxoParams = UtxoParams {
    name: ChainName::BitcoinTestnet,
    network: Network::Testnet,
    p2pkh_prefix: 0x6f,
    p2sh_prefix: 0xc4,
    bech32_hrp: "tb",
    wif_prefix: 0xef,
    genesis_prefix: "000000000933ea01ad0ee984209779ba",
};

/// Bitcoin regression test parameters.
pub const REGTEST: UtxoParams = UtxoParams {
    name: ChainName::BitcoinRegtest,
    network: Network::Regtest,
    p2pkh_prefix: 0x6f,
    p2sh_prefix: 0xc4,
    bech32_hrp: "bcrt",
    wif_prefix: 0xef,
    genesis_prefix: "0f9188f13cb7b2c71f2a335e3a4fc328",
};

/// Every UTXO chain with a parameter set.
pub static UTXO_NETWORKS: &[UtxoParams] = &[MAINNET, TESTNET3, REGTEST];

/// Looks up the parameter set for a chain name.
#[must_use]
pub fn by_name(name: ChainName) -> Option<&'static UtxoParams> {
    UTXO_NETWORKS.iter().find(|p| p.name == name)
}

/// Looks up the parameter set for a `bitcoin` crate network.
#[must_use]
pub fn by_network(network: Network) -> Option<&'static UtxoParams> {
    UTXO_NETWORKS.iter().find(|p| p.network == network)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_utxo_chain_has_params() {
        for name in ChainName::ALL.into_iter().filter(|n| n.is_utxo()) {
            assert_eq!(by_name(name).unwrap().name, name);
        }
        for params in UTXO_NETWORKS {
            assert!(params.name.is_utxo());
        }
    }

    #[test]
    fn test_by_network() {
        assert_eq!(by_network(Network::Bitcoin), Some(&MAINNET));
        assert_eq!(by_network(Network::Testnet), Some(&TESTNET3));
        assert_eq!(by_network(Network::Regtest), Some(&REGTEST));
        assert_eq!(by_network(Network::Signet), None);
    }

    #[test]
    fn test_evm_chains_have_no_params() {
        assert!(by_name(ChainName::Ethereum).is_none());
        assert!(by_name(ChainName::ArbitrumLocalnet).is_none());
    }
}
