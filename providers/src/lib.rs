pub mod rpc_balance_provider;
pub mod rpc_errors;
pub mod rpc_provider_config;
pub mod rpc_token_info_provider;

pub use balsnap_addresses::cluster::RpcCluster;
