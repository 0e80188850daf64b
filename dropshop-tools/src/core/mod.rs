// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/dropshop-rs/blob/main/licenses/COPYRIGHT.md

pub mod claim;
pub mod contract;
pub mod holdings;
pub mod metadata;
pub mod pool;
pub mod price;
pub mod series;
pub mod uri;
