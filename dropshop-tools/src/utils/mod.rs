// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/dropshop-rs/blob/main/licenses/COPYRIGHT.md

//! General purpose utilities.

use alloy::primitives::{utils::format_ether, U256};
use color::Color;

pub mod color;

/// Pretty-prints a price denominated in the chain's native asset.
pub fn format_native_price(wei: U256) -> String {
    let text = format!("{} ETH", format_ether(wei));
    if wei.is_zero() {
        text.mint()
    } else {
        text.yellow()
    }
}

/// Pretty-prints gas used by a transaction.
pub fn format_gas(gas: u128) -> String {
    let text = format!("{gas} gas");
    if gas <= 3_000_000 {
        text.mint()
    } else if gas <= 7_000_000 {
        text.yellow()
    } else {
        text.pink()
    }
}
