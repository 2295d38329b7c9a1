#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Core chain identity types for cross-chain settlement.
//!
//! This crate classifies symbolic chain names into a chain family and a
//! network tier, and defines the capability traits every concrete chain
//! descriptor and asset implements. It is chain-agnostic: the account-based
//! (EVM) and UTXO-based (Bitcoin) descriptors live in `xchain-evm` and
//! `xchain-btc`.
//!
//! # Overview
//!
//! A caller supplies a chain name, [`classify`] maps it to a
//! [`ChainFamily`], and the matching family crate resolves it into an
//! immutable descriptor. From then on callers only talk to the descriptor
//! through [`ChainOps`] and [`AssetOps`].
//!
//! # Modules
//!
//! - [`chain`] - Chain names, families, tiers, CAIP-2 ids and capability traits
//! - [`error`] - Unsupported chain, contract violation and address errors
//! - [`networks`] - The static classification table
//!
//! # Feature Flags
//!
//! - `cli` - `clap::ValueEnum` for [`ChainFamily`] and [`NetworkTier`]
//! - `telemetry` - Enables tracing events on rejected input and aborts

pub mod chain;
pub mod error;
pub mod networks;

pub use chain::{AssetOps, ChainFamily, ChainId, ChainName, ChainOps, NetworkTier, classify};
pub use error::{ContractViolation, InvalidAddress, UnsupportedChain};
