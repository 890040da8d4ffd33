pub mod cluster;
pub mod mints;

pub use cluster::RpcCluster;
