use std::{fmt, str::FromStr};

pub const MAINNET: &str = "https://api.mainnet-beta.solana.com";
pub const TESTNET: &str = "https://api.testnet.solana.com";
pub const DEVNET: &str = "https://api.devnet.solana.com";
pub const DEVELOPMENT: &str = "http://localhost:8899";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum RpcCluster {
    Mainnet,
    Testnet,
    #[default]
    Devnet,
    Development,
    Custom(String),
}

impl RpcCluster {
    pub fn url(&self) -> &str {
        match self {
            RpcCluster::Mainnet => MAINNET,
            RpcCluster::Testnet => TESTNET,
            RpcCluster::Devnet => DEVNET,
            RpcCluster::Development => DEVELOPMENT,
            RpcCluster::Custom(url) => url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRpcClusterError(String);

impl fmt::Display for ParseRpcClusterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown cluster '{}', expected mainnet, testnet, devnet, \
             development or an http(s) url",
            self.0
        )
    }
}

impl std::error::Error for ParseRpcClusterError {}

impl FromStr for RpcCluster {
    type Err = ParseRpcClusterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "mainnet" | "mainnet-beta" | "m" => Ok(RpcCluster::Mainnet),
            "testnet" | "t" => Ok(RpcCluster::Testnet),
            "devnet" | "d" => Ok(RpcCluster::Devnet),
            "development" | "localhost" | "l" => Ok(RpcCluster::Development),
            lower
                if lower.starts_with("http://")
                    || lower.starts_with("https://") =>
            {
                Ok(RpcCluster::Custom(s.to_string()))
            }
            _ => Err(ParseRpcClusterError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_clusters() {
        assert_eq!("devnet".parse(), Ok(RpcCluster::Devnet));
        assert_eq!("Mainnet-Beta".parse(), Ok(RpcCluster::Mainnet));
        assert_eq!(" localhost ".parse(), Ok(RpcCluster::Development));
        assert_eq!(RpcCluster::default().url(), DEVNET);
    }

    #[test]
    fn test_parse_custom_url() {
        let cluster: RpcCluster = "http://127.0.0.1:8899".parse().unwrap();
        assert_eq!(cluster.url(), "http://127.0.0.1:8899");
    }

    #[test]
    fn test_parse_unknown_cluster() {
        assert!("moonnet".parse::<RpcCluster>().is_err());
    }
}
