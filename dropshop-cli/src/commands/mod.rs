// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/dropshop-rs/blob/main/licenses/COPYRIGHT.md

use crate::error::DropshopResult;

mod claim;
mod info;
mod metadata;
mod owned;
mod price;
mod series;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Claim tokens from the drop
    #[clap(visible_alias = "c")]
    Claim(claim::Args),
    /// Show collection-level metadata
    #[clap(visible_alias = "i")]
    Info(info::Args),
    /// Print one token's metadata document as JSON
    #[clap(visible_alias = "m")]
    Metadata(metadata::Args),
    /// List the tokens a holder owns
    #[clap(visible_alias = "o")]
    Owned(owned::Args),
    /// Show the active claim condition and price of a token
    #[clap(visible_alias = "p")]
    Price(price::Args),
    /// Enumerate the minted token series
    #[clap(visible_alias = "s")]
    Series(series::Args),
}

pub async fn exec(cmd: Command) -> DropshopResult {
    match cmd {
        Command::Claim(args) => claim::exec(args).await,
        Command::Info(args) => info::exec(args).await,
        Command::Metadata(args) => metadata::exec(args).await,
        Command::Owned(args) => owned::exec(args).await,
        Command::Price(args) => price::exec(args).await,
        Command::Series(args) => series::exec(args).await,
    }
}
