use std::collections::HashMap;

use async_trait::async_trait;
use balsnap_core::{errors::QueryResult, TokenInfo, TokenInfoProvider};
use solana_rpc_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::pubkey::Pubkey;

use crate::{
    rpc_errors::classify_client_error, rpc_provider_config::RpcProviderConfig,
};

/// Looks up the decimals of a mint on chain. Symbols are not stored on the
/// mint itself and thus need to be registered up front.
pub struct RpcTokenInfoProvider {
    rpc_client: RpcClient,
    symbols: HashMap<Pubkey, String>,
}

impl RpcTokenInfoProvider {
    pub fn new(config: RpcProviderConfig) -> Self {
        Self {
            rpc_client: config.rpc_client(),
            symbols: HashMap::new(),
        }
    }

    pub fn devnet() -> Self {
        Self::new(RpcProviderConfig::devnet())
    }

    pub fn with_symbol(
        mut self,
        mint: Pubkey,
        symbol: impl Into<String>,
    ) -> Self {
        self.symbols.insert(mint, symbol.into());
        self
    }
}

#[async_trait]
impl TokenInfoProvider for RpcTokenInfoProvider {
    async fn get_token_info(&self, token: &Pubkey) -> QueryResult<TokenInfo> {
        let supply = self
            .rpc_client
            .get_token_supply(token)
            .await
            .map_err(|err| classify_client_error(err, token))?;
        Ok(TokenInfo {
            symbol: self.symbols.get(token).cloned(),
            decimals: Some(supply.decimals),
        })
    }
}
