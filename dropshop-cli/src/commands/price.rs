// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/dropshop-rs/blob/main/licenses/COPYRIGHT.md

use dropshop_tools::{
    core::{contract::OnchainReader, price::price_info},
    utils::{color::Color, format_native_price},
};

use crate::{
    common_args::{ContractArgs, ProviderArgs},
    error::DropshopResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Token ID to price.
    token_id: u64,

    #[command(flatten)]
    contract: ContractArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> DropshopResult {
    let provider = args.provider.build_provider().await?;
    let reader = OnchainReader::new(args.contract.address, provider);
    let info = price_info(&reader, args.token_id).await?;

    if info.is_native {
        println!("price: {} per token", format_native_price(info.raw_price));
    } else {
        println!(
            "price: {} per token in currency {}",
            info.display_price().yellow(),
            info.currency.to_string().lavender(),
        );
    }
    println!("starts at unix time {}", info.start_timestamp.to_string().grey());
    println!(
        "claimed {}",
        format!("{} / {}", info.supply_claimed, info.max_claimable_supply).grey(),
    );
    println!(
        "per-wallet limit {}",
        info.quantity_limit_per_wallet.to_string().grey(),
    );
    Ok(())
}
