//! Family-agnostic assets.

use std::fmt;

use serde::Serialize;
use xchain::{AssetOps, InvalidAddress};
use xchain_btc::BtcAsset;
use xchain_evm::EvmAsset;

use crate::chain::Chain;

/// The family-specific asset behind an [`Asset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetKind {
    /// A native coin or ERC-20 token on an account-based chain.
    Evm(EvmAsset),
    /// The native coin of a UTXO-based chain.
    Btc(BtcAsset),
}

/// A unit of value on some chain, whichever its family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Asset {
    chain: Chain,
    kind: AssetKind,
}

impl Asset {
    /// The native coin of `chain`.
    #[must_use]
    pub fn native(chain: Chain) -> Self {
        match chain {
            Chain::Account(account) => Self::from_evm(EvmAsset::native(account)),
            Chain::Utxo(utxo) => Self::from_btc(BtcAsset::native(utxo)),
        }
    }

    /// Parses an asset identifier on `chain`.
    ///
    /// `"primary"` always selects the native coin. On account-based chains
    /// any valid contract address selects that ERC-20 token.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidAddress`] if the identifier names no asset on `chain`.
    pub fn parse(chain: Chain, asset: &str) -> Result<Self, InvalidAddress> {
        match chain {
            Chain::Account(account) => EvmAsset::parse(account, asset).map(Self::from_evm),
            Chain::Utxo(utxo) => BtcAsset::parse(utxo, asset).map(Self::from_btc),
        }
    }

    fn from_evm(asset: EvmAsset) -> Self {
        Self {
            chain: Chain::Account(*asset.chain()),
            kind: AssetKind::Evm(asset),
        }
    }

    fn from_btc(asset: BtcAsset) -> Self {
        Self {
            chain: Chain::Utxo(*asset.chain()),
            kind: AssetKind::Btc(asset),
        }
    }

    /// Returns the family-specific asset.
    #[must_use]
    pub const fn kind(&self) -> &AssetKind {
        &self.kind
    }
}

impl AssetOps for Asset {
    type Chain = Chain;

    fn display_form(&self) -> String {
        match &self.kind {
            AssetKind::Evm(asset) => asset.display_form(),
            AssetKind::Btc(asset) => asset.display_form(),
        }
    }

    fn chain(&self) -> &Chain {
        &self.chain
    }
}

impl From<EvmAsset> for Asset {
    fn from(asset: EvmAsset) -> Self {
        Self::from_evm(asset)
    }
}

impl From<BtcAsset> for Asset {
    fn from(asset: BtcAsset) -> Self {
        Self::from_btc(asset)
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}", self.display_form(), self.chain)
    }
}

impl Serialize for Asset {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Asset", 2)?;
        state.serialize_field("chain", &self.chain)?;
        state.serialize_field("asset", &self.display_form())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xchain::{ChainName, ChainOps};

    fn chain(name: &str) -> Chain {
        Chain::from_name(name).unwrap()
    }

    #[test]
    fn test_native_assets() {
        let btc = Asset::native(chain("bitcoin"));
        assert_eq!(btc.display_form(), "BTC");
        assert_eq!(btc.chain().name(), ChainName::Bitcoin);
        assert!(matches!(btc.kind(), AssetKind::Btc(_)));

        let eth = Asset::native(chain("ethereum_localnet"));
        assert_eq!(eth.display_form(), "ETH");
        assert_eq!(eth.chain().name(), ChainName::EthereumLocalnet);
        assert!(matches!(eth.kind(), AssetKind::Evm(_)));
    }

    #[test]
    fn test_parse_erc20() {
        let asset = Asset::parse(
            chain("arbitrum"),
            "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed",
        )
        .unwrap();
        assert_eq!(
            asset.display_form(),
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
        );
        assert_eq!(
            asset.to_string(),
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed on arbitrum (eip155:42161)"
        );
    }

    #[test]
    fn test_parse_rejects_tokens_on_utxo_chains() {
        let err = Asset::parse(
            chain("bitcoin_regtest"),
            "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed",
        )
        .unwrap_err();
        assert_eq!(err.chain(), ChainName::BitcoinRegtest);
        assert!(Asset::parse(chain("bitcoin_regtest"), "primary").is_ok());
    }

    #[test]
    fn test_asset_chain_matches_inner_chain() {
        for name in ["bitcoin", "ethereum", "polygonzk_testnet"] {
            let asset = Asset::native(chain(name));
            assert_eq!(asset.chain(), &chain(name));
        }
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_value(Asset::native(chain("bitcoin_testnet"))).unwrap();
        assert_eq!(json["asset"], "BTC");
        assert_eq!(json["chain"]["name"], "bitcoin_testnet");
    }
}
