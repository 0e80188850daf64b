// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/dropshop-rs/blob/main/licenses/COPYRIGHT.md

use std::{sync::Arc, time::Duration};

use alloy::primitives::Address;
use dropshop_tools::{
    core::{
        contract::OnchainReader,
        holdings::{load_holdings, HoldingsConfig},
    },
    utils::color::Color,
};

use crate::{
    common_args::{ContractArgs, ProviderArgs},
    error::DropshopResult,
};

use super::series::print_token;

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Address whose tokens to list.
    holder: Address,
    /// Skip fetching metadata documents.
    #[arg(long)]
    no_metadata: bool,
    /// Concurrent metadata workers.
    #[arg(long, default_value = "5")]
    concurrency: usize,
    /// Keep polling, re-listing every SECONDS.
    #[arg(long, value_name = "SECONDS")]
    watch: Option<u64>,

    #[command(flatten)]
    contract: ContractArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> DropshopResult {
    let provider = args.provider.build_provider().await?;
    let reader = Arc::new(OnchainReader::new(args.contract.address, provider));
    let http = reqwest::Client::new();
    let config = HoldingsConfig {
        fetch_metadata: !args.no_metadata,
        concurrency: args.concurrency,
    };

    loop {
        let tokens = load_holdings(Arc::clone(&reader), &http, args.holder, &config).await?;
        if tokens.is_empty() {
            println!("{} owns no tokens from this drop", args.holder.grey());
        } else {
            println!(
                "{} owns {} token kinds",
                args.holder.grey(),
                tokens.len().to_string().mint(),
            );
            for token in &tokens {
                print_token(&token.summary);
                println!("  balance: {}", token.balance.to_string().mint());
            }
        }

        let Some(seconds) = args.watch else {
            break;
        };
        tokio::time::sleep(Duration::from_secs(seconds)).await;
    }
    Ok(())
}
