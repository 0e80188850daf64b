// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/dropshop-rs/blob/main/licenses/COPYRIGHT.md

//! Rewriting of content-addressed locators into fetchable URLs.

const IPFS_SCHEME: &str = "ipfs://";

/// Default public IPFS gateway used when none is configured.
pub const DEFAULT_IPFS_GATEWAY: &str = "https://ipfs.io/ipfs/";

/// Resolves an `ipfs://` locator to an HTTP URL on the default gateway.
///
/// Anything else, including malformed input, is returned unchanged.
pub fn resolve_uri(locator: &str) -> String {
    resolve_uri_with(DEFAULT_IPFS_GATEWAY, locator)
}

/// Resolves an `ipfs://` locator against a specific gateway.
pub fn resolve_uri_with(gateway: &str, locator: &str) -> String {
    match locator.strip_prefix(IPFS_SCHEME) {
        Some(path) => format!("{gateway}{path}"),
        None => locator.to_string(),
    }
}
