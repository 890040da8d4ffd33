use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

pub type QueryResult<T> = std::result::Result<T, QueryError>;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("RpcClientError")]
    RpcClientError(#[from] solana_rpc_client_api::client_error::Error),
    #[error("Token {0} does not exist on chain")]
    TokenNotFound(Pubkey),
    #[error("Account {0} does not exist on chain")]
    AccountNotFound(Pubkey),
    #[error("Query was rejected: {0}")]
    QueryRejected(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("Address is empty")]
    Empty,
    #[error("'{0}' is not a valid base58 address")]
    InvalidAddress(String),
}
