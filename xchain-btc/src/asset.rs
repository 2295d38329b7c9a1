//! Assets on UTXO-based chains.

use serde::Serialize;
use xchain::{AssetOps, ChainOps, InvalidAddress};

use crate::chain::UtxoChain;

/// Identifier used by the settlement engine for a chain's native coin.
pub const PRIMARY: &str = "primary";

/// Ticker of the native coin on every Bitcoin network.
pub const BTC: &str = "BTC";

/// The native coin of a [`UtxoChain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BtcAsset {
    chain: UtxoChain,
}

impl BtcAsset {
    /// The native coin of `chain`.
    #[must_use]
    pub const fn native(chain: UtxoChain) -> Self {
        Self { chain }
    }

    /// Parses an asset identifier on `chain`.
    ///
    /// Only the native coin exists: `"primary"` or `"BTC"` (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidAddress`] for any other identifier.
    pub fn parse(chain: UtxoChain, asset: &str) -> Result<Self, InvalidAddress> {
        if asset == PRIMARY || asset.eq_ignore_ascii_case(BTC) {
            Ok(Self::native(chain))
        } else {
            Err(InvalidAddress::new(
                chain.name(),
                asset,
                "only the native coin exists on utxo chains",
            ))
        }
    }
}

impl AssetOps for BtcAsset {
    type Chain = UtxoChain;

    fn display_form(&self) -> String {
        BTC.to_owned()
    }

    fn chain(&self) -> &UtxoChain {
        &self.chain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xchain::ChainName;

    #[test]
    fn test_native_asset() {
        let chain = UtxoChain::resolve(ChainName::BitcoinTestnet).unwrap();
        let asset = BtcAsset::native(chain);
        assert_eq!(asset.display_form(), "BTC");
        assert_eq!(asset.chain().name(), ChainName::BitcoinTestnet);
    }

    #[test]
    fn test_parse() {
        let chain = UtxoChain::resolve(ChainName::Bitcoin).unwrap();
        assert_eq!(BtcAsset::parse(chain, "primary").unwrap().chain(), &chain);
        assert!(BtcAsset::parse(chain, "btc").is_ok());
        let err = BtcAsset::parse(chain, "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed").unwrap_err();
        assert_eq!(err.chain(), ChainName::Bitcoin);
    }
}
