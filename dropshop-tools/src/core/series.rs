// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/dropshop-rs/blob/main/licenses/COPYRIGHT.md

//! Paginated enumeration of the full minted token series.
//!
//! A [`Series`] pages through `[0, minted_count)` in fixed-size chunks,
//! fanning each page's token IDs out through the worker pool. Per-token
//! failures are recorded on the affected row; only a failure to read the
//! minted count aborts a page load.

use std::{collections::BTreeMap, sync::Arc};

use alloy::primitives::U256;

use crate::core::{
    contract::{DropReader, ReadError},
    metadata::{fetch_token_metadata, TokenMetadata},
    pool,
    uri::resolve_uri,
};

/// One row in the enumerated series.
///
/// A row is always kept, even when some of its reads failed; `error` carries
/// the failure notes in that case.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenSummary {
    pub id: u64,
    /// Resolved metadata URL, absent before resolution or on read failure.
    pub uri: Option<String>,
    pub metadata: Option<TokenMetadata>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub total_supply: Option<U256>,
    pub max_total_supply: Option<U256>,
    pub error: Option<String>,
}

impl TokenSummary {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    /// Appends a failure note without discarding the row.
    pub fn record_error(&mut self, note: impl AsRef<str>) {
        let note = note.as_ref();
        self.error = Some(match self.error.take() {
            Some(existing) => format!("{existing}; {note}"),
            None => note.to_string(),
        });
    }
}

#[derive(Debug, Clone)]
pub struct SeriesConfig {
    /// Tokens fetched per page.
    pub page_size: usize,
    /// Fetch and parse each token's JSON metadata document.
    pub fetch_metadata: bool,
    /// Also read `totalSupply` and `maxTotalSupply` per token (extra RPCs).
    pub include_supply: bool,
    /// Concurrent workers per page load.
    pub concurrency: usize,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            page_size: 24,
            fetch_metadata: true,
            include_supply: false,
            concurrency: 6,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SeriesError {
    #[error("failed to read minted count: {0}")]
    MintedCount(#[source] ReadError),
}

/// Paginated view over the minted series of a drop contract.
///
/// Every load operation takes `&mut self`, so loads are serialized by the
/// exclusive borrow; there is no concurrent page load to guard against.
pub struct Series<R> {
    reader: Arc<R>,
    http: reqwest::Client,
    config: SeriesConfig,
    items: Vec<TokenSummary>,
    /// Minted-count snapshot; `None` until fetched, reset by [`refresh`](Self::refresh).
    minted: Option<u64>,
    page: usize,
    has_more: bool,
}

impl<R: DropReader + 'static> Series<R> {
    pub fn new(reader: R, config: SeriesConfig) -> Self {
        let config = SeriesConfig {
            page_size: config.page_size.max(1),
            ..config
        };
        Self {
            reader: Arc::new(reader),
            http: reqwest::Client::new(),
            config,
            items: Vec::new(),
            minted: None,
            page: 0,
            has_more: false,
        }
    }

    /// Accumulated rows, sorted by ID, each ID present at most once.
    pub fn items(&self) -> &[TokenSummary] {
        &self.items
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Zero-based index of the last loaded page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Minted-count snapshot, or 0 if not fetched yet.
    pub fn minted_count(&self) -> u64 {
        self.minted.unwrap_or(0)
    }

    /// Loads the next page; no-op once exhausted.
    ///
    /// On a fresh (or just-refreshed) series this loads the first page, so
    /// calling it repeatedly walks the entire minted range.
    pub async fn load_more(&mut self) -> Result<(), SeriesError> {
        match self.minted {
            None => self.load_page(0, true).await,
            Some(_) if !self.has_more => Ok(()),
            Some(_) => self.load_page(self.page + 1, false).await,
        }
    }

    /// Discards all accumulated state and reloads the first page.
    pub async fn refresh(&mut self) -> Result<(), SeriesError> {
        self.items.clear();
        self.minted = None;
        self.page = 0;
        self.has_more = false;
        self.load_page(0, true).await
    }

    /// Loads one page of the series.
    ///
    /// A page entirely beyond the minted range is a no-op, not an error. A
    /// minted count of zero yields an empty, terminal result.
    pub async fn load_page(&mut self, page: usize, replace: bool) -> Result<(), SeriesError> {
        let minted = match self.minted {
            Some(count) => count,
            None => {
                let count = self
                    .reader
                    .minted_count()
                    .await
                    .map_err(SeriesError::MintedCount)?;
                debug!(@grey, "minted count: {count}");
                self.minted = Some(count);
                count
            }
        };
        if minted == 0 {
            if replace {
                self.items.clear();
            }
            self.has_more = false;
            return Ok(());
        }

        let page_size = self.config.page_size as u64;
        let start = page as u64 * page_size;
        if start >= minted {
            self.has_more = false;
            return Ok(());
        }
        let end = (start + page_size).min(minted);
        debug!(@grey, "loading page {page}: tokens {start}..{end}");

        let ids: Vec<u64> = (start..end).collect();
        let reader = Arc::clone(&self.reader);
        let http = self.http.clone();
        let fetch_metadata = self.config.fetch_metadata;
        let include_supply = self.config.include_supply;
        let mut results = pool::drain(ids.clone(), self.config.concurrency, move |id| {
            let reader = Arc::clone(&reader);
            let http = http.clone();
            async move {
                let item = load_token(&*reader, &http, id, fetch_metadata, include_supply).await;
                (id, item)
            }
        })
        .await;

        let rows = ids
            .into_iter()
            .map(|id| {
                results.remove(&id).unwrap_or_else(|| {
                    let mut item = TokenSummary::new(id);
                    item.record_error("missing result");
                    item
                })
            })
            .collect();
        self.merge(rows, replace);
        self.has_more = end < minted;
        self.page = page;
        Ok(())
    }

    fn merge(&mut self, rows: Vec<TokenSummary>, replace: bool) {
        let mut merged: BTreeMap<u64, TokenSummary> = if replace {
            BTreeMap::new()
        } else {
            self.items.drain(..).map(|item| (item.id, item)).collect()
        };
        for row in rows {
            // earlier pages win; an ID is never duplicated or overwritten
            merged.entry(row.id).or_insert(row);
        }
        self.items = merged.into_values().collect();
    }
}

/// Builds the summary row for one token, recording failures on the row.
async fn load_token(
    reader: &impl DropReader,
    http: &reqwest::Client,
    id: u64,
    fetch_metadata: bool,
    include_supply: bool,
) -> TokenSummary {
    let mut item = TokenSummary::new(id);
    match reader.token_uri(id).await {
        Ok(raw) => item.uri = Some(resolve_uri(&raw)),
        Err(err) => item.record_error(format!("uri: {err}")),
    }

    if fetch_metadata {
        if let Some(uri) = item.uri.clone() {
            match fetch_token_metadata(http, &uri).await {
                Ok(meta) => {
                    item.name = meta.name.clone();
                    item.description = meta.description.clone();
                    item.image = meta.image.clone();
                    item.metadata = Some(meta);
                }
                Err(err) => item.record_error(format!("metadata: {err}")),
            }
        }
    }

    if include_supply {
        let (supply, max_supply) = tokio::join!(reader.total_supply(id), reader.max_total_supply(id));
        match supply {
            Ok(value) => item.total_supply = Some(value),
            Err(err) => item.record_error(format!("supply: {err}")),
        }
        match max_supply {
            Ok(value) => item.max_total_supply = Some(value),
            Err(err) => item.record_error(format!("max supply: {err}")),
        }
    }

    item
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{spawn_metadata_server, MockReader};

    fn ids(series: &Series<MockReader>) -> Vec<u64> {
        series.items().iter().map(|item| item.id).collect()
    }

    fn plain_config() -> SeriesConfig {
        SeriesConfig {
            page_size: 12,
            fetch_metadata: false,
            include_supply: false,
            concurrency: 4,
        }
    }

    #[tokio::test]
    async fn pages_through_thirty_tokens_by_twelve() {
        let mut series = Series::new(MockReader::with_uris(30), plain_config());

        series.load_page(0, true).await.unwrap();
        assert_eq!(ids(&series), (0..12).collect::<Vec<_>>());
        assert!(series.has_more());

        series.load_more().await.unwrap();
        assert_eq!(ids(&series), (0..24).collect::<Vec<_>>());
        assert!(series.has_more());

        series.load_more().await.unwrap();
        assert_eq!(ids(&series), (0..30).collect::<Vec<_>>());
        assert!(!series.has_more());
        assert_eq!(series.page(), 2);

        // exhausted: a further call changes nothing
        series.load_more().await.unwrap();
        assert_eq!(ids(&series), (0..30).collect::<Vec<_>>());
        assert_eq!(series.page(), 2);
    }

    #[tokio::test]
    async fn load_more_walks_everything_from_fresh() {
        let mut series = Series::new(MockReader::with_uris(30), plain_config());
        let mut loads = 0;
        loop {
            series.load_more().await.unwrap();
            loads += 1;
            if !series.has_more() {
                break;
            }
            assert!(loads < 10, "did not terminate");
        }
        assert_eq!(loads, 3); // ceil(30 / 12)
        assert_eq!(ids(&series), (0..30).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn empty_drop_is_terminal_not_an_error() {
        let mut series = Series::new(MockReader::with_uris(0), plain_config());
        series.load_page(0, true).await.unwrap();
        assert!(series.items().is_empty());
        assert!(!series.has_more());
        series.load_more().await.unwrap();
        assert!(series.items().is_empty());
    }

    #[tokio::test]
    async fn out_of_range_page_is_a_noop() {
        let mut series = Series::new(MockReader::with_uris(30), plain_config());
        series.load_page(0, true).await.unwrap();
        let before = series.items().to_vec();

        series.load_page(7, false).await.unwrap();
        assert_eq!(series.items(), &before[..]);
        assert!(!series.has_more());
    }

    #[tokio::test]
    async fn repeated_page_load_never_duplicates() {
        let mut series = Series::new(MockReader::with_uris(30), plain_config());
        series.load_page(0, true).await.unwrap();
        series.load_page(1, false).await.unwrap();
        series.load_page(1, false).await.unwrap();
        assert_eq!(ids(&series), (0..24).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn refresh_matches_a_fresh_first_page() {
        let mut series = Series::new(MockReader::with_uris(30), plain_config());
        series.load_page(0, true).await.unwrap();
        series.load_more().await.unwrap();
        series.refresh().await.unwrap();

        let mut fresh = Series::new(MockReader::with_uris(30), plain_config());
        fresh.load_page(0, true).await.unwrap();

        assert_eq!(series.items(), fresh.items());
        assert_eq!(series.page(), 0);
        assert!(series.has_more());
    }

    #[tokio::test]
    async fn uri_failure_is_recorded_on_the_row_only() {
        let mut reader = MockReader::with_uris(5);
        reader.uris.remove(&3);
        let mut series = Series::new(reader, plain_config());
        series.load_page(0, true).await.unwrap();

        assert_eq!(series.items().len(), 5);
        let failed = &series.items()[3];
        assert_eq!(failed.id, 3);
        assert!(failed.uri.is_none());
        assert!(failed.error.as_deref().unwrap().contains("uri"));
        assert!(series.items()[0].uri.is_some());
        assert!(series.items()[4].uri.is_some());
    }

    #[tokio::test]
    async fn one_bad_metadata_document_keeps_the_other_rows() {
        let server = spawn_metadata_server(vec![
            ("/0.json", r#"{"name": "Zero", "image": "ipfs://img0"}"#),
            ("/1.json", "<html>gateway error</html>"),
            ("/2.json", r#"{"name": "Two"}"#),
        ])
        .await;
        let reader = MockReader::with_uri_base(3, &server);
        let mut series = Series::new(
            reader,
            SeriesConfig {
                page_size: 12,
                fetch_metadata: true,
                include_supply: false,
                concurrency: 2,
            },
        );
        series.load_page(0, true).await.unwrap();

        assert_eq!(series.items().len(), 3);
        assert_eq!(series.items()[0].name.as_deref(), Some("Zero"));
        assert_eq!(series.items()[2].name.as_deref(), Some("Two"));

        let failed = &series.items()[1];
        assert!(failed.error.as_deref().unwrap().contains("metadata"));
        assert!(failed.name.is_none());
        assert!(failed.description.is_none());
        assert!(failed.image.is_none());
        assert!(failed.uri.is_some());
    }

    #[tokio::test]
    async fn supply_reads_are_optional_and_per_row() {
        let mut reader = MockReader::with_uris(3);
        reader.supplies.insert(0, (U256::from(5), U256::from(10)));
        reader.supplies.insert(2, (U256::from(1), U256::from(1)));
        let mut series = Series::new(
            reader,
            SeriesConfig {
                page_size: 12,
                fetch_metadata: false,
                include_supply: true,
                concurrency: 2,
            },
        );
        series.load_page(0, true).await.unwrap();

        assert_eq!(series.items()[0].total_supply, Some(U256::from(5)));
        assert_eq!(series.items()[0].max_total_supply, Some(U256::from(10)));
        assert!(series.items()[1].total_supply.is_none());
        assert!(series.items()[1].error.is_some());
        assert_eq!(series.items()[2].total_supply, Some(U256::from(1)));
    }

    #[tokio::test]
    async fn minted_count_failure_leaves_accumulated_items() {
        let mut series = Series::new(MockReader::with_uris(30), plain_config());
        series.load_page(0, true).await.unwrap();
        let before = series.items().to_vec();

        // force a refetch of the minted count, and make it fail
        series.minted = None;
        Arc::get_mut(&mut series.reader).unwrap().fail_minted = true;
        assert!(series.load_page(1, false).await.is_err());
        assert_eq!(series.items(), &before[..]);

        // a failed load leaves the series usable
        Arc::get_mut(&mut series.reader).unwrap().fail_minted = false;
        series.load_page(1, false).await.unwrap();
        assert_eq!(ids(&series), (0..24).collect::<Vec<_>>());
    }
}
