// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/dropshop-rs/blob/main/licenses/COPYRIGHT.md

//! Helper types for tests: an in-memory [`DropReader`] and a minimal HTTP
//! server for metadata documents.

use std::collections::HashMap;

use alloy::primitives::{Address, U256};
use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use crate::core::contract::{ClaimConditionInfo, DropReader, ReadError};

/// In-memory drop contract state.
///
/// A token with no entry in `uris` fails its `uri()` read; a token with no
/// entry in `supplies` fails its supply reads. Balances default to zero.
#[derive(Debug, Default)]
pub struct MockReader {
    pub minted: u64,
    pub uris: HashMap<u64, String>,
    pub balances: HashMap<u64, U256>,
    pub supplies: HashMap<u64, (U256, U256)>,
    pub condition: Option<ClaimConditionInfo>,
    pub collection_uri: Option<String>,
    pub fail_minted: bool,
    /// Return one balance fewer than requested, to exercise shape checks.
    pub truncate_balances: bool,
}

impl MockReader {
    /// A drop of `minted` tokens, each with an `ipfs://` metadata URI.
    pub fn with_uris(minted: u64) -> Self {
        let uris = (0..minted)
            .map(|id| (id, format!("ipfs://QmSeries/{id}.json")))
            .collect();
        Self {
            minted,
            uris,
            ..Default::default()
        }
    }

    /// A drop whose metadata URIs point at `base` (a test HTTP server).
    pub fn with_uri_base(minted: u64, base: &str) -> Self {
        let uris = (0..minted)
            .map(|id| (id, format!("{base}/{id}.json")))
            .collect();
        Self {
            minted,
            uris,
            ..Default::default()
        }
    }
}

#[async_trait]
impl DropReader for MockReader {
    async fn minted_count(&self) -> Result<u64, ReadError> {
        if self.fail_minted {
            return Err(ReadError("nextTokenIdToMint reverted".to_string()));
        }
        Ok(self.minted)
    }

    async fn token_uri(&self, id: u64) -> Result<String, ReadError> {
        self.uris
            .get(&id)
            .cloned()
            .ok_or_else(|| ReadError(format!("uri({id}) reverted")))
    }

    async fn contract_uri(&self) -> Result<String, ReadError> {
        self.collection_uri
            .clone()
            .ok_or_else(|| ReadError("contractURI reverted".to_string()))
    }

    async fn batch_balances(&self, _holder: Address, ids: &[u64]) -> Result<Vec<U256>, ReadError> {
        let mut balances: Vec<U256> = ids
            .iter()
            .map(|id| self.balances.get(id).copied().unwrap_or(U256::ZERO))
            .collect();
        if self.truncate_balances {
            balances.pop();
        }
        Ok(balances)
    }

    async fn total_supply(&self, id: u64) -> Result<U256, ReadError> {
        self.supplies
            .get(&id)
            .map(|(supply, _)| *supply)
            .ok_or_else(|| ReadError(format!("totalSupply({id}) reverted")))
    }

    async fn max_total_supply(&self, id: u64) -> Result<U256, ReadError> {
        self.supplies
            .get(&id)
            .map(|(_, max)| *max)
            .ok_or_else(|| ReadError(format!("maxTotalSupply({id}) reverted")))
    }

    async fn active_condition_id(&self, id: u64) -> Result<U256, ReadError> {
        self.condition
            .as_ref()
            .map(|_| U256::ZERO)
            .ok_or_else(|| ReadError(format!("getActiveClaimConditionId({id}): DropNoActiveCondition")))
    }

    async fn claim_condition(
        &self,
        id: u64,
        _condition_id: U256,
    ) -> Result<ClaimConditionInfo, ReadError> {
        self.condition
            .clone()
            .ok_or_else(|| ReadError(format!("getClaimConditionById({id}) reverted")))
    }
}

/// Serves fixed bodies by path on a random local port; returns the base URL.
///
/// Unknown paths get a 404. The server lives until the test process exits.
pub async fn spawn_metadata_server(routes: Vec<(&str, &str)>) -> String {
    let routes: HashMap<String, String> = routes
        .into_iter()
        .map(|(path, body)| (path.to_string(), body.to_string()))
        .collect();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("binding test server");
    let addr = listener.local_addr().expect("test server address");

    tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                break;
            };
            let routes = routes.clone();
            tokio::spawn(async move {
                let mut buf = vec![0u8; 4096];
                let mut read = 0;
                while read < buf.len() {
                    match stream.read(&mut buf[read..]).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => {
                            read += n;
                            if buf[..read].windows(4).any(|window| window == b"\r\n\r\n") {
                                break;
                            }
                        }
                    }
                }
                let request = String::from_utf8_lossy(&buf[..read]);
                let path = request.split_whitespace().nth(1).unwrap_or("/");
                let response = match routes.get(path) {
                    Some(body) => format!(
                        "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                        body.len(),
                    ),
                    None => {
                        "HTTP/1.1 404 Not Found\r\ncontent-length: 0\r\nconnection: close\r\n\r\n"
                            .to_string()
                    }
                };
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            });
        }
    });

    format!("http://{addr}")
}
