#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! UTXO-based (Bitcoin family) chain support for cross-chain settlement.
//!
//! This crate resolves Bitcoin chain names into immutable [`UtxoChain`]
//! descriptors. Each descriptor carries the [`UtxoParams`] of its network:
//! the base58 version bytes, the bech32 human-readable part and the
//! `bitcoin` crate network used to decode addresses.
//!
//! # Architecture
//!
//! - [`chain`] - The [`UtxoChain`] descriptor and address validation
//! - [`asset`] - The native coin bound to a [`UtxoChain`]
//! - [`networks`] - The static per-network parameter table
//!
//! # Feature Flags
//!
//! - `telemetry` - Tracing events on contract violations
//!
//! # Example
//!
//! ```
//! use xchain::{ChainName, ChainOps, NetworkTier};
//! use xchain_btc::UtxoChain;
//!
//! let bitcoin = UtxoChain::resolve(ChainName::Bitcoin).unwrap();
//! assert_eq!(bitcoin.network_tier(), NetworkTier::Mainnet);
//! assert!(bitcoin.validate_address("not-an-address").is_err());
//! ```

pub mod asset;
pub mod chain;
pub mod networks;

pub use asset::BtcAsset;
pub use chain::UtxoChain;
pub use networks::UtxoParams;
