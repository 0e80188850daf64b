// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/dropshop-rs/blob/main/licenses/COPYRIGHT.md

//! Tools for working with ERC-1155 drop contracts: enumerating the minted
//! series, resolving and fetching token metadata, listing a holder's tokens
//! and submitting claim transactions.

#[macro_use]
mod macros;

pub mod core;
pub(crate) mod error;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{decode_contract_error, ContractDecodeError, Error, Result};
