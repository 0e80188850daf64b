// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/dropshop-rs/blob/main/licenses/COPYRIGHT.md

use alloy::sol_types::SolInterface;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Any failure from the library's operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Series(#[from] crate::core::series::SeriesError),
    #[error("{0}")]
    Holdings(#[from] crate::core::holdings::HoldingsError),
    #[error("{0}")]
    Claim(#[from] crate::core::claim::ClaimError),
    #[error("{0}")]
    Metadata(#[from] crate::core::metadata::MetadataError),
    #[error("{0}")]
    Price(#[from] crate::core::price::PriceError),
}

#[derive(Debug, thiserror::Error)]
pub enum ContractDecodeError {
    #[error("failed to send tx: {0:?}")]
    FailedToSendTx(alloy::contract::Error),
    #[error("no error payload found in response: {0:?}")]
    NoErrorPayload(alloy::transports::RpcError<alloy::transports::TransportErrorKind>),
    #[error("failed to decode error: {0:?}")]
    FailedToDecode(alloy::rpc::json_rpc::ErrorPayload),
}

pub fn decode_contract_error<E: SolInterface>(
    e: alloy::contract::Error,
) -> Result<E, ContractDecodeError> {
    let alloy::contract::Error::TransportError(tperr) = e else {
        return Err(ContractDecodeError::FailedToSendTx(e));
    };
    let Some(err_resp) = tperr.as_error_resp() else {
        return Err(ContractDecodeError::NoErrorPayload(tperr));
    };
    let Some(errs) = err_resp.as_decoded_interface_error::<E>() else {
        return Err(ContractDecodeError::FailedToDecode(err_resp.clone()));
    };
    Ok(errs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{contract::ReadError, series::SeriesError};

    #[test]
    fn module_errors_convert_into_the_aggregate() {
        let err: Error = SeriesError::MintedCount(ReadError("call reverted".to_string())).into();
        assert!(matches!(err, Error::Series(_)));
        assert!(err.to_string().contains("minted count"));
    }
}
