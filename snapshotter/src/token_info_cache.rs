use std::collections::HashMap;

use balsnap_core::{errors::QueryResult, TokenInfo, TokenInfoProvider};
use log::*;
use solana_sdk::pubkey::Pubkey;

/// Remembers token metadata once it was successfully looked up. Failed
/// lookups are not cached and will be retried on the next request.
pub struct TokenInfoCache<U: TokenInfoProvider> {
    token_info_provider: U,
    token_infos: HashMap<Pubkey, TokenInfo>,
}

impl<U: TokenInfoProvider> TokenInfoCache<U> {
    pub fn new(token_info_provider: U) -> Self {
        Self {
            token_info_provider,
            token_infos: HashMap::new(),
        }
    }

    pub async fn get(&mut self, token: &Pubkey) -> QueryResult<TokenInfo> {
        if let Some(token_info) = self.token_infos.get(token) {
            return Ok(token_info.clone());
        }
        let token_info =
            self.token_info_provider.get_token_info(token).await?;
        debug!("Caching token info of {}: {:?}", token, token_info);
        self.token_infos.insert(*token, token_info.clone());
        Ok(token_info)
    }

    /// Same as [Self::get] but falls back to an empty [TokenInfo], which
    /// renders the token by address with raw amounts.
    pub async fn get_or_default(&mut self, token: &Pubkey) -> TokenInfo {
        match self.get(token).await {
            Ok(token_info) => token_info,
            Err(err) => {
                warn!("Failed to resolve token info of {}: {}", token, err);
                TokenInfo::default()
            }
        }
    }
}
