// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/dropshop-rs/blob/main/licenses/COPYRIGHT.md

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8545";
