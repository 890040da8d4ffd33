use balsnap_addresses::cluster::RpcCluster;
use solana_rpc_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::{CommitmentConfig, CommitmentLevel};

#[derive(Debug, Default, Clone)]
pub struct RpcProviderConfig {
    cluster: RpcCluster,
    commitment: Option<CommitmentLevel>,
}

impl RpcProviderConfig {
    pub fn new(
        cluster: RpcCluster,
        commitment: Option<CommitmentLevel>,
    ) -> Self {
        Self {
            cluster,
            commitment,
        }
    }

    pub fn devnet() -> Self {
        Self::new(RpcCluster::Devnet, None)
    }

    pub fn cluster(&self) -> &RpcCluster {
        &self.cluster
    }

    pub fn url(&self) -> &str {
        self.cluster.url()
    }

    pub fn commitment(&self) -> Option<CommitmentLevel> {
        self.commitment
    }

    pub(crate) fn rpc_client(&self) -> RpcClient {
        RpcClient::new_with_commitment(
            self.url().to_string(),
            CommitmentConfig {
                commitment: self.commitment().unwrap_or_default(),
            },
        )
    }
}
