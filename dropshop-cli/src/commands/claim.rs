// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/dropshop-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::{Address, U256};
use dropshop_tools::{
    core::claim::{claim, ClaimConfig},
    utils::{color::DebugColor, format_gas, format_native_price},
};

use crate::{
    common_args::{AuthArgs, ContractArgs, ProviderArgs},
    error::DropshopResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Token ID to claim.
    token_id: u64,
    /// Number of tokens to claim.
    #[arg(long, default_value = "1")]
    quantity: U256,
    /// Recipient of the claimed tokens (defaults to the signer address).
    #[arg(long)]
    receiver: Option<Address>,

    /// Wallet source to use.
    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    contract: ContractArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> DropshopResult {
    let provider = args.provider.build_provider_with_wallet(&args.auth).await?;
    let config = ClaimConfig {
        quantity: args.quantity,
        receiver: args.receiver,
    };
    let outcome = claim(args.contract.address, args.token_id, &config, &provider).await?;

    println!("claimed in tx {}", outcome.tx_hash.debug_lavender());
    println!("paid {}", format_native_price(outcome.value_paid));
    println!("used {}", format_gas(outcome.gas_used.into()));
    Ok(())
}
