// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/dropshop-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;
use std::process::ExitCode;

pub type DropshopResult = Result<(), DropshopError>;

#[derive(Debug)]
pub struct DropshopError {
    error: eyre::Error,
    exit_code: ExitCode,
}

impl DropshopError {
    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

impl fmt::Display for DropshopError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl From<std::io::Error> for DropshopError {
    fn from(err: std::io::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<eyre::Error> for DropshopError {
    fn from(error: eyre::Error) -> Self {
        Self {
            error,
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<serde_json::Error> for DropshopError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<dropshop_tools::Error> for DropshopError {
    fn from(err: dropshop_tools::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<dropshop_tools::core::series::SeriesError> for DropshopError {
    fn from(err: dropshop_tools::core::series::SeriesError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<dropshop_tools::core::holdings::HoldingsError> for DropshopError {
    fn from(err: dropshop_tools::core::holdings::HoldingsError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<dropshop_tools::core::claim::ClaimError> for DropshopError {
    fn from(err: dropshop_tools::core::claim::ClaimError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<dropshop_tools::core::metadata::MetadataError> for DropshopError {
    fn from(err: dropshop_tools::core::metadata::MetadataError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<dropshop_tools::core::price::PriceError> for DropshopError {
    fn from(err: dropshop_tools::core::price::PriceError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}
