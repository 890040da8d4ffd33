use async_trait::async_trait;
use solana_sdk::pubkey::Pubkey;

use crate::{errors::QueryResult, TokenInfo};

/// Resolves the current balance that an account holds of a token.
/// Every call is one query against the chain (or whatever backs the
/// provider); implementations neither cache nor retry.
#[async_trait]
pub trait BalanceProvider {
    /// Returns the balance in the smallest unit of the token.
    async fn get_balance(
        &self,
        token: &Pubkey,
        account: &Pubkey,
    ) -> QueryResult<u64>;
}

#[async_trait]
pub trait TokenInfoProvider {
    async fn get_token_info(&self, token: &Pubkey) -> QueryResult<TokenInfo>;
}

/// Anything that knows its own address, i.e. a keypair or a token handle
/// provided by the test environment.
pub trait AddressHandle {
    fn pubkey(&self) -> Pubkey;
}
