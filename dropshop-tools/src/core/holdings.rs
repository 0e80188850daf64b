// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/dropshop-rs/blob/main/licenses/COPYRIGHT.md

//! Enumeration of the tokens a holder owns.
//!
//! Ownership is resolved with a single batched balance lookup over the full
//! minted range; only strictly-positive balances make it into the result.
//! Metadata failures never hide ownership: the row is kept with an error
//! note instead.

use std::sync::Arc;

use alloy::primitives::{Address, U256};

use crate::core::{
    contract::{DropReader, ReadError},
    metadata::fetch_token_metadata,
    pool,
    series::TokenSummary,
    uri::resolve_uri,
};

/// A token the holder owns, with its balance.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnedToken {
    pub summary: TokenSummary,
    /// Strictly positive; zero-balance tokens are never reported.
    pub balance: U256,
}

#[derive(Debug, Clone)]
pub struct HoldingsConfig {
    /// Fetch and parse each owned token's JSON metadata document.
    pub fetch_metadata: bool,
    /// Concurrent metadata workers.
    pub concurrency: usize,
}

impl Default for HoldingsConfig {
    fn default() -> Self {
        Self {
            fetch_metadata: true,
            concurrency: 5,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum HoldingsError {
    #[error("failed to read minted count: {0}")]
    MintedCount(#[source] ReadError),
    #[error("failed to read balances: {0}")]
    Balances(#[source] ReadError),
    #[error("balance lookup returned {actual} balances for {expected} ids")]
    BalanceShape { expected: usize, actual: usize },
}

/// Lists the tokens `holder` owns, sorted by ID.
pub async fn load_holdings<R: DropReader + 'static>(
    reader: Arc<R>,
    http: &reqwest::Client,
    holder: Address,
    config: &HoldingsConfig,
) -> Result<Vec<OwnedToken>, HoldingsError> {
    let minted = reader
        .minted_count()
        .await
        .map_err(HoldingsError::MintedCount)?;
    if minted == 0 {
        return Ok(Vec::new());
    }

    let ids: Vec<u64> = (0..minted).collect();
    let balances = reader
        .batch_balances(holder, &ids)
        .await
        .map_err(HoldingsError::Balances)?;
    if balances.len() != ids.len() {
        return Err(HoldingsError::BalanceShape {
            expected: ids.len(),
            actual: balances.len(),
        });
    }

    let owned: Vec<(u64, U256)> = ids
        .into_iter()
        .zip(balances)
        .filter(|(_, balance)| !balance.is_zero())
        .collect();
    debug!(@grey, "{holder} owns {} of {minted} tokens", owned.len());

    if !config.fetch_metadata {
        return Ok(owned
            .into_iter()
            .map(|(id, balance)| OwnedToken {
                summary: TokenSummary::new(id),
                balance,
            })
            .collect());
    }

    let http = http.clone();
    let worker_reader = Arc::clone(&reader);
    let mut results = pool::drain(owned, config.concurrency, move |(id, balance)| {
        let reader = Arc::clone(&worker_reader);
        let http = http.clone();
        async move {
            let mut summary = TokenSummary::new(id);
            match reader.token_uri(id).await {
                Ok(raw) => summary.uri = Some(resolve_uri(&raw)),
                Err(err) => summary.record_error(format!("uri: {err}")),
            }
            if let Some(uri) = summary.uri.clone() {
                match fetch_token_metadata(&http, &uri).await {
                    Ok(meta) => {
                        summary.name = meta.name.clone();
                        summary.description = meta.description.clone();
                        summary.image = meta.image.clone();
                        summary.metadata = Some(meta);
                    }
                    Err(err) => summary.record_error(format!("metadata: {err}")),
                }
            }
            (id, OwnedToken { summary, balance })
        }
    })
    .await;

    let mut tokens: Vec<OwnedToken> = results.drain().map(|(_, token)| token).collect();
    tokens.sort_by_key(|token| token.summary.id);
    Ok(tokens)
}
