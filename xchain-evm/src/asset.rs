//! Assets on account-based chains.

use alloy_primitives::Address;
use serde::Serialize;
use xchain::{AssetOps, InvalidAddress};

use crate::chain::AccountChain;

/// Identifier used by the settlement engine for a chain's native coin.
pub const PRIMARY: &str = "primary";

/// What an [`EvmAsset`] refers to on its chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "address")]
pub enum EvmToken {
    /// The chain's native gas coin.
    Native,
    /// An ERC-20 token contract.
    Erc20(Address),
}

/// A native coin or ERC-20 token on an [`AccountChain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EvmAsset {
    chain: AccountChain,
    token: EvmToken,
}

impl EvmAsset {
    /// The native coin of `chain`.
    #[must_use]
    pub const fn native(chain: AccountChain) -> Self {
        Self {
            chain,
            token: EvmToken::Native,
        }
    }

    /// An ERC-20 token deployed at `address` on `chain`.
    #[must_use]
    pub const fn erc20(chain: AccountChain, address: Address) -> Self {
        Self {
            chain,
            token: EvmToken::Erc20(address),
        }
    }

    /// Parses an asset identifier on `chain`.
    ///
    /// `"primary"` and the native ticker (case-insensitive) select the native
    /// coin; anything else must be a valid token contract address.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidAddress`] if the identifier is neither native nor a
    /// valid address on `chain`.
    pub fn parse(chain: AccountChain, asset: &str) -> Result<Self, InvalidAddress> {
        if asset == PRIMARY || asset.eq_ignore_ascii_case(chain.native_symbol()) {
            return Ok(Self::native(chain));
        }
        chain
            .parse_address(asset)
            .map(|address| Self::erc20(chain, address))
    }

    /// Returns what this asset refers to.
    #[must_use]
    pub const fn token(&self) -> EvmToken {
        self.token
    }

    /// Returns the token contract address, or `None` for the native coin.
    #[must_use]
    pub const fn contract_address(&self) -> Option<Address> {
        match self.token {
            EvmToken::Native => None,
            EvmToken::Erc20(address) => Some(address),
        }
    }

    /// Returns `true` for the chain's native coin.
    #[must_use]
    pub const fn is_native(&self) -> bool {
        matches!(self.token, EvmToken::Native)
    }
}

impl AssetOps for EvmAsset {
    type Chain = AccountChain;

    fn display_form(&self) -> String {
        match self.token {
            EvmToken::Native => self.chain.native_symbol().to_owned(),
            EvmToken::Erc20(address) => self.chain.checksum(&address),
        }
    }

    fn chain(&self) -> &AccountChain {
        &self.chain
    }
}
