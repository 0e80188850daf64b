// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/dropshop-rs/blob/main/licenses/COPYRIGHT.md

use dropshop_tools::core::{contract::OnchainReader, metadata::token_metadata};

use crate::{
    common_args::{ContractArgs, ProviderArgs},
    error::DropshopResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Token ID whose metadata to fetch.
    token_id: u64,

    #[command(flatten)]
    contract: ContractArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> DropshopResult {
    let provider = args.provider.build_provider().await?;
    let reader = OnchainReader::new(args.contract.address, provider);
    let http = reqwest::Client::new();
    let meta = token_metadata(&reader, &http, args.token_id).await?;
    println!("{}", serde_json::to_string_pretty(&meta)?);
    Ok(())
}
