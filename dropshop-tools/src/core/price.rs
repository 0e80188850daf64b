// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/dropshop-rs/blob/main/licenses/COPYRIGHT.md

//! Pricing and supply information from the active claim condition.

use alloy::primitives::{utils::format_ether, Address, U256};

use crate::core::contract::{is_native_currency, DropReader, ReadError};

/// The active claim condition of a token, shaped for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceInfo {
    /// Price per token in the condition's currency base units.
    pub raw_price: U256,
    pub currency: Address,
    /// Whether the price is denominated in the chain's native asset.
    pub is_native: bool,
    pub start_timestamp: U256,
    pub max_claimable_supply: U256,
    pub supply_claimed: U256,
    pub quantity_limit_per_wallet: U256,
}

impl PriceInfo {
    /// Human-readable price assuming 18 decimals.
    ///
    /// ERC-20 currencies with other decimals would need a `decimals()` read;
    /// the storefront assumes 18 across the board.
    pub fn display_price(&self) -> String {
        format_ether(self.raw_price)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PriceError {
    #[error("failed to read claim condition: {0}")]
    Read(#[from] ReadError),
}

/// Reads the active claim condition for `token_id`.
pub async fn price_info(reader: &impl DropReader, token_id: u64) -> Result<PriceInfo, PriceError> {
    let condition_id = reader.active_condition_id(token_id).await?;
    let condition = reader.claim_condition(token_id, condition_id).await?;
    debug!(@grey, "token {token_id} active condition {condition_id}");
    Ok(PriceInfo {
        raw_price: condition.price_per_token,
        currency: condition.currency,
        is_native: is_native_currency(condition.currency),
        start_timestamp: condition.start_timestamp,
        max_claimable_supply: condition.max_claimable_supply,
        supply_claimed: condition.supply_claimed,
        quantity_limit_per_wallet: condition.quantity_limit_per_wallet,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::contract::ClaimConditionInfo, testing::MockReader};

    #[tokio::test]
    async fn reads_the_active_condition() {
        let mut reader = MockReader::with_uris(1);
        reader.condition = Some(ClaimConditionInfo {
            start_timestamp: U256::from(1_700_000_000u64),
            max_claimable_supply: U256::from(100),
            supply_claimed: U256::from(40),
            quantity_limit_per_wallet: U256::from(2),
            price_per_token: U256::from(10).pow(U256::from(18)),
            currency: Address::ZERO,
        });
        let info = price_info(&reader, 0).await.unwrap();
        assert!(info.is_native);
        assert_eq!(info.display_price(), "1.000000000000000000");
        assert_eq!(info.supply_claimed, U256::from(40));
    }

    #[tokio::test]
    async fn missing_condition_is_an_error() {
        let reader = MockReader::with_uris(1);
        assert!(price_info(&reader, 0).await.is_err());
    }
}
