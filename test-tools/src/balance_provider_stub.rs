use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use async_trait::async_trait;
use balsnap_core::{
    errors::{QueryError, QueryResult},
    BalanceProvider,
};
use solana_sdk::pubkey::Pubkey;

/// The kind of failure the stub raises once the configured read is reached
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StubFailure {
    TokenNotFound,
    AccountNotFound,
    Rejected(String),
}

/// Balances keyed by (token, account). Clones share the same state so a test
/// can keep one clone around to change balances between snapshots while
/// the other is owned by the snapshotter.
/// Reading a pair that was never set fails with [QueryError::AccountNotFound].
#[derive(Default, Clone)]
pub struct BalanceProviderStub {
    balances: Arc<Mutex<HashMap<(Pubkey, Pubkey), u64>>>,
    reads: Arc<AtomicUsize>,
    fail_at_read: Arc<Mutex<Option<(usize, StubFailure)>>>,
}

impl BalanceProviderStub {
    pub fn set(&self, token: Pubkey, account: Pubkey, balance: u64) {
        self.balances
            .lock()
            .unwrap()
            .insert((token, account), balance);
    }

    /// Makes the `nth` read (1-based, counted over the lifetime of the stub)
    /// fail with the given failure.
    pub fn fail_at_read(&self, nth: usize, failure: StubFailure) {
        *self.fail_at_read.lock().unwrap() = Some((nth, failure));
    }

    pub fn clear_failure(&self) {
        *self.fail_at_read.lock().unwrap() = None;
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BalanceProvider for BalanceProviderStub {
    async fn get_balance(
        &self,
        token: &Pubkey,
        account: &Pubkey,
    ) -> QueryResult<u64> {
        let nth = self.reads.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some((fail_at, failure)) = &*self.fail_at_read.lock().unwrap() {
            if *fail_at == nth {
                return Err(match failure {
                    StubFailure::TokenNotFound => {
                        QueryError::TokenNotFound(*token)
                    }
                    StubFailure::AccountNotFound => {
                        QueryError::AccountNotFound(*account)
                    }
                    StubFailure::Rejected(msg) => {
                        QueryError::QueryRejected(msg.clone())
                    }
                });
            }
        }
        self.balances
            .lock()
            .unwrap()
            .get(&(*token, *account))
            .copied()
            .ok_or(QueryError::AccountNotFound(*account))
    }
}
