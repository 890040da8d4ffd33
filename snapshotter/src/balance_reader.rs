use balsnap_core::{errors::QueryResult, BalanceProvider};
use log::*;
use solana_sdk::pubkey::Pubkey;

/// Thin layer over the injected [BalanceProvider], every read is forwarded
/// as exactly one query and failures are passed on untouched.
pub struct BalanceReader<T: BalanceProvider> {
    balance_provider: T,
}

impl<T: BalanceProvider> BalanceReader<T> {
    pub fn new(balance_provider: T) -> Self {
        Self { balance_provider }
    }

    pub fn balance_provider(&self) -> &T {
        &self.balance_provider
    }

    pub async fn read(
        &self,
        token: &Pubkey,
        account: &Pubkey,
    ) -> QueryResult<u64> {
        let res = self.balance_provider.get_balance(token, account).await;
        match &res {
            Ok(balance) => {
                trace!("Balance of {} for {}: {}", token, account, balance)
            }
            Err(err) => {
                debug!("Reading {} for {} failed: {:?}", token, account, err)
            }
        }
        res
    }
}
