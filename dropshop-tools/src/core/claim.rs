// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/dropshop-rs/blob/main/licenses/COPYRIGHT.md

//! Claiming tokens from the drop contract.
//!
//! A claim is simulated before anything is submitted; a failing simulation
//! surfaces the revert reason and costs no gas. Known drop-contract reverts
//! are decoded into specific errors, with substring matching on the raw
//! revert text as a fallback for nodes that strip typed error data.

use alloy::{
    primitives::{Address, Bytes, TxHash, U256},
    providers::{Provider, WalletProvider},
};

use crate::{
    core::contract::{drop_contract, is_native_currency, DropErc1155},
    error::decode_contract_error,
    utils::{color::DebugColor, format_gas, format_native_price},
};

#[derive(Debug, Clone)]
pub struct ClaimConfig {
    /// Number of tokens to claim.
    pub quantity: U256,
    /// Recipient of the claimed tokens; defaults to the signer address.
    pub receiver: Option<Address>,
}

impl Default for ClaimConfig {
    fn default() -> Self {
        Self {
            quantity: U256::ONE,
            receiver: None,
        }
    }
}

#[derive(Debug)]
pub struct ClaimOutcome {
    pub tx_hash: TxHash,
    pub gas_used: u64,
    /// Native value sent with the transaction.
    pub value_paid: U256,
}

#[derive(Debug, thiserror::Error)]
pub enum ClaimError {
    #[error("contract error: {0}")]
    Contract(#[from] alloy::contract::Error),
    #[error("pending transaction error: {0}")]
    PendingTransaction(#[from] alloy::providers::PendingTransactionError),
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),

    #[error("quantity must be greater than zero")]
    ZeroQuantity,
    #[error("no receiver address available; pass one explicitly or use a wallet provider")]
    NoReceiver,
    #[error("no active claim condition for this token")]
    NoActiveCondition,
    #[error("price or currency mismatch with the active claim condition; refresh and verify the drop settings")]
    PriceMismatch,
    #[error("claim phase has not started yet; check the condition start time")]
    NotStarted,
    #[error("quantity exceeds the per-wallet claim limit")]
    ExceedsWalletLimit,
    #[error("quantity exceeds the remaining claimable supply")]
    ExceedsMaxSupply,
    #[error("claim simulation failed: {0}")]
    Simulation(String),
    #[error("claim tx reverted {}", .tx_hash.debug_red())]
    Reverted { tx_hash: TxHash },
}

impl From<DropErc1155::DropErc1155Errors> for ClaimError {
    fn from(err: DropErc1155::DropErc1155Errors) -> Self {
        use DropErc1155::DropErc1155Errors::*;
        match err {
            DropNoActiveCondition(_) => Self::NoActiveCondition,
            DropClaimInvalidTokenPrice(_) => Self::PriceMismatch,
            DropClaimNotStarted(_) => Self::NotStarted,
            DropClaimExceedLimit(_) => Self::ExceedsWalletLimit,
            DropClaimExceedMaxSupply(_) => Self::ExceedsMaxSupply,
        }
    }
}

/// Native value to attach to a claim transaction.
///
/// Only native-currency conditions are paid through `value`; ERC-20 pricing
/// settles inside the contract and the transaction carries zero.
pub fn claim_value(price_per_token: U256, quantity: U256, currency: Address) -> U256 {
    if is_native_currency(currency) {
        price_per_token * quantity
    } else {
        U256::ZERO
    }
}

/// Classifies a failed contract call into a user-facing claim error.
///
/// Typed error data is preferred; the substring table below is the closed
/// fallback set for nodes that return only a revert string.
pub fn classify_claim_error(err: alloy::contract::Error) -> ClaimError {
    let raw = err.to_string();
    match decode_contract_error::<DropErc1155::DropErc1155Errors>(err) {
        Ok(decoded) => decoded.into(),
        Err(_) => classify_revert_text(&raw),
    }
}

fn classify_revert_text(message: &str) -> ClaimError {
    if message.contains("DropClaimInvalidTokenPrice") {
        ClaimError::PriceMismatch
    } else if message.contains("DropClaimNotStarted") {
        ClaimError::NotStarted
    } else if message.contains("DropClaimExceedLimit") {
        ClaimError::ExceedsWalletLimit
    } else if message.contains("DropClaimExceedMaxSupply") {
        ClaimError::ExceedsMaxSupply
    } else if message.contains("DropNoActiveCondition") {
        ClaimError::NoActiveCondition
    } else {
        ClaimError::Simulation(message.to_string())
    }
}

/// Claims `config.quantity` of token `token_id`, paying the active
/// condition's price when it is denominated in the native asset.
pub async fn claim(
    contract_address: Address,
    token_id: u64,
    config: &ClaimConfig,
    provider: &(impl Provider + WalletProvider),
) -> Result<ClaimOutcome, ClaimError> {
    if config.quantity.is_zero() {
        return Err(ClaimError::ZeroQuantity);
    }
    let from_address = provider.default_signer_address();
    let receiver = config.receiver.unwrap_or(from_address);
    if receiver.is_zero() {
        return Err(ClaimError::NoReceiver);
    }

    let contract = drop_contract(contract_address, provider);
    let token = U256::from(token_id);
    let condition_id = contract
        .getActiveClaimConditionId(token)
        .call()
        .await
        .map_err(classify_claim_error)?;
    let condition = contract
        .getClaimConditionById(token, condition_id)
        .call()
        .await
        .map_err(classify_claim_error)?;

    let value = claim_value(condition.pricePerToken, config.quantity, condition.currency);
    debug!(
        @grey,
        "claim condition {condition_id}: price {} currency {}",
        format_native_price(condition.pricePerToken),
        condition.currency.debug_lavender()
    );

    // Neutral override values for the public claim path; mirroring the
    // condition here can mismatch the contract's allowlist logic.
    let allowlist_proof = DropErc1155::AllowlistProof {
        proof: Vec::new(),
        quantityLimitPerWallet: U256::ZERO,
        pricePerToken: U256::ZERO,
        currency: Address::ZERO,
    };

    let claim_call = contract
        .claim(
            receiver,
            token,
            config.quantity,
            condition.currency,
            condition.pricePerToken,
            allowlist_proof,
            Bytes::new(),
        )
        .value(value);

    info!(@grey, "simulating claim of token {token_id}...");
    claim_call
        .clone()
        .from(from_address)
        .call()
        .await
        .map_err(classify_claim_error)?;

    info!(@grey, "sending claim tx...");
    let pending_tx = claim_call.send().await?;
    let tx_hash = *pending_tx.tx_hash();
    debug!(@grey, "sent claim tx: {}", tx_hash.debug_lavender());

    let receipt = pending_tx.get_receipt().await?;
    if !receipt.status() {
        return Err(ClaimError::Reverted { tx_hash });
    }
    info!(
        @grey,
        "claimed token {token_id} to {}: {}",
        receiver.debug_lavender(),
        format_gas(receipt.gas_used.into())
    );

    Ok(ClaimOutcome {
        tx_hash: receipt.transaction_hash,
        gas_used: receipt.gas_used,
        value_paid: value,
    })
}
