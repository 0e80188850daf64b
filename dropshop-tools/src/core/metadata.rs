// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/dropshop-rs/blob/main/licenses/COPYRIGHT.md

//! Fetching and parsing of token and collection metadata documents.
//!
//! Every fetch is a single GET with no retry and no caching. Fields are all
//! optional; documents found in the wild omit most of them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::{
    contract::{DropReader, ReadError},
    uri::resolve_uri,
};

/// Metadata document for one token (standard ERC-1155 metadata fields).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Value>,
    /// Any non-standard fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Collection-level metadata served from `contractURI()`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller_fee_basis_points: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_recipient: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("metadata fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("metadata parse failed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{0}")]
    Read(#[from] ReadError),
}

/// Fetches and parses the metadata document at an already-resolved URL.
pub async fn fetch_token_metadata(
    http: &reqwest::Client,
    uri: &str,
) -> Result<TokenMetadata, MetadataError> {
    fetch_json(http, uri).await
}

/// Reads `uri(id)` from the contract, resolves it and fetches the document.
pub async fn token_metadata(
    reader: &impl DropReader,
    http: &reqwest::Client,
    id: u64,
) -> Result<TokenMetadata, MetadataError> {
    let raw = reader.token_uri(id).await?;
    let url = resolve_uri(&raw);
    debug!(@grey, "fetching token {id} metadata from {url}");
    fetch_json(http, &url).await
}

/// Reads `contractURI()`, resolves it and fetches the collection document.
pub async fn contract_metadata(
    reader: &impl DropReader,
    http: &reqwest::Client,
) -> Result<ContractMetadata, MetadataError> {
    let raw = reader.contract_uri().await?;
    let url = resolve_uri(&raw);
    debug!(@grey, "fetching collection metadata from {url}");
    fetch_json(http, &url).await
}

async fn fetch_json<T: serde::de::DeserializeOwned>(
    http: &reqwest::Client,
    uri: &str,
) -> Result<T, MetadataError> {
    let response = http.get(uri).send().await?.error_for_status()?;
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sparse_document() {
        let meta: TokenMetadata = serde_json::from_str(r#"{"name": "Token #0"}"#).unwrap();
        assert_eq!(meta.name.as_deref(), Some("Token #0"));
        assert!(meta.description.is_none());
        assert!(meta.image.is_none());
        assert!(meta.extra.is_empty());
    }

    #[test]
    fn preserves_unknown_fields() {
        let meta: TokenMetadata = serde_json::from_str(
            r#"{"name": "T", "image": "ipfs://QmImg", "price_hint": "100", "supply": 7}"#,
        )
        .unwrap();
        assert_eq!(meta.image.as_deref(), Some("ipfs://QmImg"));
        assert_eq!(meta.extra["price_hint"], "100");
        assert_eq!(meta.extra["supply"], 7);
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(serde_json::from_str::<TokenMetadata>("<html>not json</html>").is_err());
    }

    #[test]
    fn parses_collection_document() {
        let meta: ContractMetadata = serde_json::from_str(
            r#"{
                "name": "The Drop",
                "seller_fee_basis_points": 250,
                "fee_recipient": "0x0000000000000000000000000000000000000001"
            }"#,
        )
        .unwrap();
        assert_eq!(meta.name.as_deref(), Some("The Drop"));
        assert_eq!(meta.seller_fee_basis_points, Some(250));
    }
}
