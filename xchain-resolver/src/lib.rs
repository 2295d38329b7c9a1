//! Chain resolution for cross-chain settlement.
//!
//! Ties the family crates together: a chain name is classified, resolved by
//! `xchain-evm` or `xchain-btc`, and handed back as a [`Chain`] that callers
//! use through [`xchain::ChainOps`] without caring which family it is.
//!
//! # Modules
//!
//! - [`chain`] - The [`Chain`] sum type over both descriptor families
//! - [`asset`] - The [`Asset`] type pairing a unit of value with its chain
//! - [`config`] - Chain set configuration loaded from TOML
//! - [`set`] - The [`ChainSet`] of chains resolved at startup
//! - [`error`] - Resolution and configuration errors

pub mod asset;
pub mod chain;
pub mod config;
pub mod error;
pub mod set;

pub use asset::{Asset, AssetKind};
pub use chain::{Chain, ChainSummary};
pub use config::ChainSetConfig;
pub use error::{ConfigError, ResolveError};
pub use set::ChainSet;
