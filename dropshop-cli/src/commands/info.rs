// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/dropshop-rs/blob/main/licenses/COPYRIGHT.md

use dropshop_tools::{
    core::{
        contract::{DropReader, OnchainReader},
        metadata::contract_metadata,
    },
    utils::color::Color,
};

use crate::{
    common_args::{ContractArgs, ProviderArgs},
    error::DropshopResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Print the raw collection document as JSON.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    contract: ContractArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> DropshopResult {
    let provider = args.provider.build_provider().await?;
    let reader = OnchainReader::new(args.contract.address, provider);
    let http = reqwest::Client::new();
    let meta = contract_metadata(&reader, &http).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&meta)?);
        return Ok(());
    }

    if let Some(name) = &meta.name {
        println!("{}", name.mint());
    }
    if let Some(description) = &meta.description {
        println!("{description}");
    }
    if let Some(link) = &meta.external_link {
        println!("link: {}", link.grey());
    }
    if let Some(fee) = meta.seller_fee_basis_points {
        println!("seller fee: {} bps", fee.to_string().grey());
    }
    match reader.minted_count().await {
        Ok(minted) => println!("minted tokens: {}", minted.to_string().mint()),
        Err(err) => println!("minted tokens: {}", err.to_string().red()),
    }
    Ok(())
}
