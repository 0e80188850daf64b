// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/dropshop-rs/blob/main/licenses/COPYRIGHT.md

use dropshop_tools::{
    core::{
        contract::OnchainReader,
        series::{Series, SeriesConfig, TokenSummary},
    },
    utils::color::Color,
};

use crate::{
    common_args::{ContractArgs, ProviderArgs},
    error::DropshopResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Tokens fetched per page.
    #[arg(long, default_value = "24")]
    page_size: usize,
    /// Number of pages to load (all of them when omitted).
    #[arg(long)]
    pages: Option<usize>,
    /// Skip fetching metadata documents.
    #[arg(long)]
    no_metadata: bool,
    /// Also read per-token supply counters.
    #[arg(long)]
    supply: bool,
    /// Concurrent workers per page.
    #[arg(long, default_value = "6")]
    concurrency: usize,

    #[command(flatten)]
    contract: ContractArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> DropshopResult {
    let provider = args.provider.build_provider().await?;
    let reader = OnchainReader::new(args.contract.address, provider);
    let config = SeriesConfig {
        page_size: args.page_size,
        fetch_metadata: !args.no_metadata,
        include_supply: args.supply,
        concurrency: args.concurrency,
    };
    let mut series = Series::new(reader, config);

    let mut pages_loaded = 0;
    loop {
        series.load_more().await?;
        pages_loaded += 1;
        if !series.has_more() || args.pages.is_some_and(|limit| pages_loaded >= limit) {
            break;
        }
    }

    println!(
        "{} of {} minted tokens",
        series.items().len().to_string().mint(),
        series.minted_count().to_string().mint(),
    );
    for item in series.items() {
        print_token(item);
    }
    Ok(())
}

pub fn print_token(item: &TokenSummary) {
    let name = item.name.as_deref().unwrap_or("<unnamed>");
    println!("#{} {}", item.id.to_string().lavender(), name);
    if let Some(uri) = &item.uri {
        println!("  uri: {}", uri.grey());
    }
    if let Some(image) = &item.image {
        println!("  image: {}", image.grey());
    }
    if let (Some(supply), Some(max)) = (item.total_supply, item.max_total_supply) {
        println!("  supply: {}", format!("{supply} / {max}").grey());
    }
    if let Some(error) = &item.error {
        println!("  error: {}", error.red());
    }
}
