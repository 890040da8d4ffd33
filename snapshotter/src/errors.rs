use balsnap_core::errors::{AddressError, QueryError};
use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

pub type SnapshotterResult<T> = std::result::Result<T, SnapshotterError>;

#[derive(Error, Debug)]
pub enum SnapshotterError {
    #[error("ConfigurationError: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error(
        "SnapshotError: reading balance of token {token} for account {account} failed"
    )]
    Snapshot {
        token: Pubkey,
        account: Pubkey,
        #[source]
        source: QueryError,
    },
    #[error("DiffError: {0}")]
    Diff(#[from] DiffError),
    #[error(
        "InsufficientSnapshotsError: need 2 snapshots to compare, {len} taken"
    )]
    InsufficientSnapshots { len: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("No tokens were configured")]
    NoTokens,
    #[error("No accounts were configured")]
    NoAccounts,
    #[error("Token #{position} cannot be resolved: {source}")]
    UnresolvableToken {
        position: usize,
        #[source]
        source: AddressError,
    },
    #[error("Account #{position} cannot be resolved: {source}")]
    UnresolvableAccount {
        position: usize,
        #[source]
        source: AddressError,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    #[error("No snapshot at index {index}, {len} snapshot(s) taken")]
    SnapshotNotFound { index: usize, len: usize },
    #[error("No snapshot labeled '{0}'")]
    LabelNotFound(String),
    #[error("Snapshot #{index} was taken by a different snapshotter")]
    ForeignSnapshot { index: usize },
}
