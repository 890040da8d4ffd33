pub mod balance_reader;
pub mod diff_report;
pub mod errors;
pub mod render;
pub mod snapshot;
pub mod snapshotter;
pub mod token_info_cache;

pub use balsnap_core::{AccountRef, AddressRef, TokenInfo, TokenRef};
pub use balsnap_providers::{
    rpc_provider_config::RpcProviderConfig, RpcCluster,
};
pub use diff_report::DiffReport;
pub use snapshot::Snapshot;
pub use snapshotter::{SnapshotRef, Snapshotter};
