// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/dropshop-rs/blob/main/licenses/COPYRIGHT.md

//! Read access to the on-chain drop contract.
//!
//! The [`DropReader`] trait is the seam between the enumerators and the
//! chain: production code wraps the `sol!`-generated contract instance,
//! tests substitute an in-memory reader.

use alloy::{
    primitives::{address, Address, U256},
    providers::Provider,
    sol,
};
use async_trait::async_trait;

sol! {
    #[sol(rpc)]
    interface DropErc1155 {
        struct AllowlistProof {
            bytes32[] proof;
            uint256 quantityLimitPerWallet;
            uint256 pricePerToken;
            address currency;
        }

        struct ClaimCondition {
            uint256 startTimestamp;
            uint256 maxClaimableSupply;
            uint256 supplyClaimed;
            uint256 quantityLimitPerWallet;
            bytes32 merkleRoot;
            uint256 pricePerToken;
            address currency;
            string metadata;
        }

        function nextTokenIdToMint() external view returns (uint256);
        function uri(uint256 tokenId) external view returns (string memory);
        function contractURI() external view returns (string memory);
        function balanceOfBatch(address[] calldata accounts, uint256[] calldata ids) external view returns (uint256[] memory);
        function totalSupply(uint256 id) external view returns (uint256);
        function maxTotalSupply(uint256 id) external view returns (uint256);
        function getActiveClaimConditionId(uint256 tokenId) external view returns (uint256);
        function getClaimConditionById(uint256 tokenId, uint256 conditionId) external view returns (ClaimCondition memory condition);
        function claim(
            address receiver,
            uint256 tokenId,
            uint256 quantity,
            address currency,
            uint256 pricePerToken,
            AllowlistProof calldata allowlistProof,
            bytes calldata data
        ) external payable;

        error DropNoActiveCondition();
        error DropClaimExceedLimit(uint256 expected, uint256 actual);
        error DropClaimExceedMaxSupply(uint256 expected, uint256 actual);
        error DropClaimNotStarted(uint256 expected, uint256 actual);
        error DropClaimInvalidTokenPrice(
            address expectedCurrency,
            uint256 expectedPricePerToken,
            address actualCurrency,
            uint256 actualPricePerToken
        );
    }
}

/// Sentinel address denoting the chain's native asset in claim conditions.
pub const NATIVE_TOKEN: Address = address!("0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE");

/// Whether a claim-condition currency denotes the native asset.
///
/// The zero address and the `0xeeee..` sentinel are both in use onchain.
pub fn is_native_currency(currency: Address) -> bool {
    currency == Address::ZERO || currency == NATIVE_TOKEN
}

pub fn drop_contract<P: Provider>(
    address: Address,
    provider: P,
) -> DropErc1155::DropErc1155Instance<P> {
    DropErc1155::new(address, provider)
}

/// A single read against the contract failed.
///
/// Kept as a plain message so enumerators can attach it to the affected row
/// without aborting the rest of the pass.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct ReadError(pub String);

impl From<alloy::contract::Error> for ReadError {
    fn from(err: alloy::contract::Error) -> Self {
        Self(err.to_string())
    }
}

/// The active claim condition for a token, as read from the contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimConditionInfo {
    pub start_timestamp: U256,
    pub max_claimable_supply: U256,
    pub supply_claimed: U256,
    pub quantity_limit_per_wallet: U256,
    pub price_per_token: U256,
    pub currency: Address,
}

impl From<DropErc1155::ClaimCondition> for ClaimConditionInfo {
    fn from(condition: DropErc1155::ClaimCondition) -> Self {
        Self {
            start_timestamp: condition.startTimestamp,
            max_claimable_supply: condition.maxClaimableSupply,
            supply_claimed: condition.supplyClaimed,
            quantity_limit_per_wallet: condition.quantityLimitPerWallet,
            price_per_token: condition.pricePerToken,
            currency: condition.currency,
        }
    }
}

/// Read operations the enumerators need from the drop contract.
#[async_trait]
pub trait DropReader: Send + Sync {
    /// Number of token IDs ever issued; valid IDs are `[0, minted_count)`.
    async fn minted_count(&self) -> Result<u64, ReadError>;

    /// Raw (unresolved) metadata URI for one token.
    async fn token_uri(&self, id: u64) -> Result<String, ReadError>;

    /// Raw (unresolved) collection-level metadata URI.
    async fn contract_uri(&self) -> Result<String, ReadError>;

    /// Balances of `holder` at each of `ids`, positionally.
    async fn batch_balances(&self, holder: Address, ids: &[u64]) -> Result<Vec<U256>, ReadError>;

    async fn total_supply(&self, id: u64) -> Result<U256, ReadError>;

    async fn max_total_supply(&self, id: u64) -> Result<U256, ReadError>;

    async fn active_condition_id(&self, id: u64) -> Result<U256, ReadError>;

    async fn claim_condition(
        &self,
        id: u64,
        condition_id: U256,
    ) -> Result<ClaimConditionInfo, ReadError>;
}

/// [`DropReader`] backed by a live contract over an alloy provider.
pub struct OnchainReader<P: Provider> {
    contract: DropErc1155::DropErc1155Instance<P>,
}

impl<P: Provider> OnchainReader<P> {
    pub fn new(address: Address, provider: P) -> Self {
        Self {
            contract: drop_contract(address, provider),
        }
    }

    pub fn address(&self) -> Address {
        *self.contract.address()
    }
}

#[async_trait]
impl<P: Provider + 'static> DropReader for OnchainReader<P> {
    async fn minted_count(&self) -> Result<u64, ReadError> {
        let next_id = self.contract.nextTokenIdToMint().call().await?;
        u64::try_from(next_id).map_err(|_| ReadError("minted count overflows u64".to_string()))
    }

    async fn token_uri(&self, id: u64) -> Result<String, ReadError> {
        Ok(self.contract.uri(U256::from(id)).call().await?)
    }

    async fn contract_uri(&self) -> Result<String, ReadError> {
        Ok(self.contract.contractURI().call().await?)
    }

    async fn batch_balances(&self, holder: Address, ids: &[u64]) -> Result<Vec<U256>, ReadError> {
        let accounts = vec![holder; ids.len()];
        let ids = ids.iter().map(|id| U256::from(*id)).collect();
        Ok(self.contract.balanceOfBatch(accounts, ids).call().await?)
    }

    async fn total_supply(&self, id: u64) -> Result<U256, ReadError> {
        Ok(self.contract.totalSupply(U256::from(id)).call().await?)
    }

    async fn max_total_supply(&self, id: u64) -> Result<U256, ReadError> {
        Ok(self.contract.maxTotalSupply(U256::from(id)).call().await?)
    }

    async fn active_condition_id(&self, id: u64) -> Result<U256, ReadError> {
        Ok(self
            .contract
            .getActiveClaimConditionId(U256::from(id))
            .call()
            .await?)
    }

    async fn claim_condition(
        &self,
        id: u64,
        condition_id: U256,
    ) -> Result<ClaimConditionInfo, ReadError> {
        let condition = self
            .contract
            .getClaimConditionById(U256::from(id), condition_id)
            .call()
            .await?;
        Ok(condition.into())
    }
}
