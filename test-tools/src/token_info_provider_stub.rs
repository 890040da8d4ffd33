use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use async_trait::async_trait;
use balsnap_core::{
    errors::{QueryError, QueryResult},
    TokenInfo, TokenInfoProvider,
};
use solana_sdk::pubkey::Pubkey;

#[derive(Default)]
pub struct TokenInfoProviderStub {
    pub token_infos: HashMap<Pubkey, TokenInfo>,
    lookups: Arc<AtomicUsize>,
}

impl TokenInfoProviderStub {
    pub fn add(&mut self, token: Pubkey, token_info: TokenInfo) {
        self.token_infos.insert(token, token_info);
    }

    /// Shared counter of lookups, stays readable after the stub was moved
    pub fn lookups(&self) -> Arc<AtomicUsize> {
        self.lookups.clone()
    }
}

#[async_trait]
impl TokenInfoProvider for TokenInfoProviderStub {
    async fn get_token_info(&self, token: &Pubkey) -> QueryResult<TokenInfo> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.token_infos
            .get(token)
            .cloned()
            .ok_or(QueryError::TokenNotFound(*token))
    }
}
