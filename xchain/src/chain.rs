//! Chain identity types and the capability traits shared by every chain.
//!
//! - [`ChainName`] - The closed set of symbolic chain names
//! - [`ChainFamily`] - UTXO-based or account-based architecture
//! - [`NetworkTier`] - Mainnet, testnet or localnet
//! - [`ChainId`] - A CAIP-2 chain identifier (e.g., `eip155:1`)
//! - [`ChainOps`] - Operations every resolved chain descriptor supports
//! - [`AssetOps`] - Operations every asset bound to a chain supports

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::{InvalidAddress, UnsupportedChain};
use crate::networks;

/// A supported blockchain and network combination.
///
/// The set is closed: a string outside it cannot become a `ChainName`, so
/// every value has exactly one family and one network tier.
///
/// # Serialization
///
/// Serializes to/from its literal name: `"bitcoin_testnet"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChainName {
    /// Bitcoin mainnet.
    Bitcoin,
    /// Bitcoin testnet3.
    BitcoinTestnet,
    /// Bitcoin regression test network.
    BitcoinRegtest,
    /// Ethereum (chain ID 1).
    Ethereum,
    /// Ethereum Sepolia.
    EthereumSepolia,
    /// Local Ethereum development node.
    EthereumLocalnet,
    /// Arbitrum One.
    Arbitrum,
    /// Local Arbitrum development node.
    ArbitrumLocalnet,
    /// Polygon zkEVM.
    PolygonZk,
    /// Polygon zkEVM testnet.
    PolygonZkTestnet,
}

impl ChainName {
    /// Every supported chain name.
    pub const ALL: [Self; 10] = [
        Self::Bitcoin,
        Self::BitcoinTestnet,
        Self::BitcoinRegtest,
        Self::Ethereum,
        Self::EthereumSepolia,
        Self::EthereumLocalnet,
        Self::Arbitrum,
        Self::ArbitrumLocalnet,
        Self::PolygonZk,
        Self::PolygonZkTestnet,
    ];

    /// Returns the literal name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bitcoin => "bitcoin",
            Self::BitcoinTestnet => "bitcoin_testnet",
            Self::BitcoinRegtest => "bitcoin_regtest",
            Self::Ethereum => "ethereum",
            Self::EthereumSepolia => "ethereum_sepolia",
            Self::EthereumLocalnet => "ethereum_localnet",
            Self::Arbitrum => "arbitrum",
            Self::ArbitrumLocalnet => "arbitrum_localnet",
            Self::PolygonZk => "polygonzk",
            Self::PolygonZkTestnet => "polygonzk_testnet",
        }
    }

    /// Position of this name in [`ChainName::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the chain family this name belongs to.
    #[must_use]
    pub fn family(self) -> ChainFamily {
        networks::chain_info(self).family
    }

    /// Returns the network tier this name belongs to.
    #[must_use]
    pub fn network_tier(self) -> NetworkTier {
        networks::chain_info(self).tier
    }

    /// Returns `true` for account-based (EVM) chains.
    #[must_use]
    pub fn is_evm(self) -> bool {
        self.family() == ChainFamily::AccountBased
    }

    /// Returns `true` for UTXO-based (Bitcoin family) chains.
    #[must_use]
    pub fn is_utxo(self) -> bool {
        self.family() == ChainFamily::UtxoBased
    }
}

impl fmt::Display for ChainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ChainName {
    type Err = UnsupportedChain;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnsupportedChain::new(s))
    }
}

impl TryFrom<&str> for ChainName {
    type Error = UnsupportedChain;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ChainName> for String {
    fn from(value: ChainName) -> Self {
        value.as_str().to_owned()
    }
}

impl Serialize for ChainName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ChainName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(de::Error::custom)
    }
}

/// The architecture a chain belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ChainFamily {
    /// Account-based chains (Ethereum and its L2s).
    AccountBased,
    /// UTXO-based chains (Bitcoin family).
    UtxoBased,
}

impl fmt::Display for ChainFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AccountBased => f.pad("account-based"),
            Self::UtxoBased => f.pad("utxo-based"),
        }
    }
}

/// How much value a chain carries.
///
/// - **Mainnet** carries real value.
/// - **Testnet** mirrors mainnet behaviour with free test value.
/// - **Localnet** is a throwaway sandbox with unlimited minting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum NetworkTier {
    /// Production network.
    Mainnet,
    /// Public test network.
    Testnet,
    /// Local development network.
    Localnet,
}

impl NetworkTier {
    /// Returns `true` for every tier other than [`NetworkTier::Mainnet`].
    #[must_use]
    pub const fn is_testnet(self) -> bool {
        matches!(self, Self::Testnet | Self::Localnet)
    }
}

impl fmt::Display for NetworkTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mainnet => f.pad("mainnet"),
            Self::Testnet => f.pad("testnet"),
            Self::Localnet => f.pad("localnet"),
        }
    }
}

/// Classifies a chain name into its family.
///
/// Never falls back to a default family: anything outside the closed set of
/// [`ChainName`]s is rejected.
///
/// # Errors
///
/// Returns [`UnsupportedChain`] if `name` is not a supported chain.
pub fn classify(name: &str) -> Result<ChainFamily, UnsupportedChain> {
    let parsed = name.parse::<ChainName>();
    #[cfg(feature = "telemetry")]
    if let Err(err) = &parsed {
        tracing::debug!(chain = err.name(), "rejected unsupported chain name");
    }
    parsed.map(ChainName::family)
}

/// A CAIP-2 compliant blockchain identifier.
///
/// The format is `namespace:reference` where:
///
/// - `namespace` identifies the blockchain family (e.g., `eip155`, `bip122`)
/// - `reference` identifies the specific chain within that family
///
/// # Serialization
///
/// Serializes to/from a colon-separated string: `"eip155:42161"`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChainId {
    namespace: String,
    reference: String,
}

impl ChainId {
    /// Creates a new chain ID from namespace and reference components.
    pub fn new<N: Into<String>, R: Into<String>>(namespace: N, reference: R) -> Self {
        Self {
            namespace: namespace.into(),
            reference: reference.into(),
        }
    }

    /// Returns the namespace component of the chain ID.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the reference component of the chain ID.
    #[must_use]
    pub fn reference(&self) -> &str {
        &self.reference
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.reference)
    }
}

/// Error returned when parsing an invalid chain ID string.
///
/// A valid chain ID must be in the format `namespace:reference` where both
/// components are non-empty strings.
#[derive(Debug, thiserror::Error)]
#[error("Invalid chain id format {0}")]
pub struct ChainIdFormatError(String);

impl FromStr for ChainId {
    type Err = ChainIdFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((namespace, reference)) if !namespace.is_empty() && !reference.is_empty() => {
                Ok(Self::new(namespace, reference))
            }
            _ => Err(ChainIdFormatError(s.into())),
        }
    }
}

impl Serialize for ChainId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ChainId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(de::Error::custom)
    }
}

/// Common operations available on every resolved chain descriptor.
///
/// Code that only needs family-agnostic behaviour (logging, routing by
/// network tier, address checks) should depend on this trait rather than
/// on a concrete descriptor.
pub trait ChainOps {
    /// Returns the chain name the descriptor was resolved from.
    fn name(&self) -> ChainName;

    /// Returns the chain family.
    fn family(&self) -> ChainFamily {
        self.name().family()
    }

    /// Returns the network tier.
    fn network_tier(&self) -> NetworkTier;

    /// Returns the CAIP-2 identifier of the chain.
    fn caip2(&self) -> ChainId;

    /// Checks that `address` is valid on this chain.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidAddress`] if the address does not decode under the
    /// chain's address rules.
    fn validate_address(&self, address: &str) -> Result<(), InvalidAddress>;

    /// Returns `true` unless the chain is a mainnet.
    fn is_testnet(&self) -> bool {
        self.network_tier().is_testnet()
    }
}

impl<T: ChainOps + ?Sized> ChainOps for Arc<T> {
    fn name(&self) -> ChainName {
        (**self).name()
    }
    fn family(&self) -> ChainFamily {
        (**self).family()
    }
    fn network_tier(&self) -> NetworkTier {
        (**self).network_tier()
    }
    fn caip2(&self) -> ChainId {
        (**self).caip2()
    }
    fn validate_address(&self, address: &str) -> Result<(), InvalidAddress> {
        (**self).validate_address(address)
    }
}

/// A transferable unit of value on a specific chain.
///
/// An asset owns exactly one chain descriptor. Construction and transfer
/// belong to wallet and client code; this trait only exposes identity.
pub trait AssetOps {
    /// The descriptor type of the owning chain.
    type Chain: ChainOps;

    /// Returns the human-readable form of the asset (e.g., `"BTC"` or a
    /// token contract address).
    fn display_form(&self) -> String;

    /// Returns the chain this asset lives on.
    fn chain(&self) -> &Self::Chain;
}
