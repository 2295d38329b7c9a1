#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Account-based (EIP-155) chain support for cross-chain settlement.
//!
//! This crate resolves EVM chain names (Ethereum, Arbitrum, Polygon zkEVM and
//! their test and local networks) into immutable [`AccountChain`]
//! descriptors carrying the EIP-155 chain ID used for transaction signing
//! domain separation and the chain's layer-2 status.
//!
//! # Architecture
//!
//! - [`chain`] - The [`AccountChain`] descriptor and address validation
//! - [`asset`] - Native coins and ERC-20 tokens bound to an [`AccountChain`]
//! - [`networks`] - The static EIP-155 resolution table
//!
//! # Feature Flags
//!
//! - `telemetry` - Tracing events on contract violations
//!
//! # Example
//!
//! ```
//! use xchain::{ChainName, ChainOps};
//! use xchain_evm::AccountChain;
//!
//! let arbitrum = AccountChain::resolve(ChainName::Arbitrum).unwrap();
//! assert_eq!(arbitrum.chain_id(), 42161);
//! assert!(arbitrum.is_layer2());
//! assert_eq!(arbitrum.caip2().to_string(), "eip155:42161");
//! ```

pub mod asset;
pub mod chain;
pub mod networks;

pub use asset::{EvmAsset, EvmToken};
pub use chain::AccountChain;
