use std::str::FromStr;

use balsnap_addresses::{cluster::RpcCluster, mints::well_known_mint};
use balsnap_core::AddressRef;
use clap::Parser;
use solana_sdk::{commitment_config::CommitmentLevel, pubkey::Pubkey};

/// Takes snapshots of SPL token balances and shows how they changed
#[derive(Parser, Debug)]
#[command(name = "balsnap", version)]
pub struct Args {
    /// mainnet, testnet, devnet, development or an RPC url
    #[arg(long, env = "BALSNAP_CLUSTER", default_value = "devnet")]
    pub cluster: RpcCluster,

    /// processed, confirmed or finalized
    #[arg(long, env = "BALSNAP_COMMITMENT")]
    pub commitment: Option<CommitmentLevel>,

    /// Mint address or a well known name (wsol, usdc, usdc-dev)
    #[arg(long = "token", required = true, value_delimiter = ',')]
    pub tokens: Vec<TokenArg>,

    /// Wallet address, optionally aliased as ALIAS=ADDRESS
    #[arg(long = "account", required = true, value_delimiter = ',')]
    pub accounts: Vec<AccountArg>,

    /// Number of snapshots to take
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..))]
    pub snaps: u32,

    /// Seconds to wait between two snapshots
    #[arg(long, env = "BALSNAP_INTERVAL_SECS", default_value_t = 10)]
    pub interval_secs: u64,

    /// Print the diff of the last two snapshots as json
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone)]
pub struct TokenArg {
    pub token: AddressRef,
    pub symbol: Option<&'static str>,
}

impl FromStr for TokenArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((mint, symbol)) = well_known_mint(s) {
            return Ok(Self {
                token: AddressRef::from(mint),
                symbol: Some(symbol),
            });
        }
        Ok(Self {
            token: AddressRef::from(s),
            symbol: None,
        })
    }
}

#[derive(Debug, Clone)]
pub struct AccountArg {
    pub account: Pubkey,
    pub alias: Option<String>,
}

impl FromStr for AccountArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (alias, address) = match s.split_once('=') {
            Some((alias, address)) => (Some(alias.trim().to_string()), address),
            None => (None, s),
        };
        let account = AddressRef::from(address)
            .resolve()
            .map_err(|err| err.to_string())?;
        Ok(Self { account, alias })
    }
}
