use async_trait::async_trait;
use balsnap_core::{
    errors::{QueryError, QueryResult},
    BalanceProvider,
};
use log::*;
use solana_account_decoder::UiAccountData;
use solana_rpc_client::nonblocking::rpc_client::RpcClient;
use solana_rpc_client_api::{
    request::TokenAccountsFilter, response::RpcKeyedAccount,
};
use solana_sdk::pubkey::Pubkey;

use crate::{
    rpc_errors::classify_client_error, rpc_provider_config::RpcProviderConfig,
};

/// Reads SPL token balances of wallets. The balance of a wallet is the sum
/// over all token accounts it owns for the given mint, a wallet without any
/// token accounts for the mint holds 0.
pub struct RpcBalanceProvider {
    rpc_client: RpcClient,
}

impl RpcBalanceProvider {
    pub fn new(config: RpcProviderConfig) -> Self {
        Self {
            rpc_client: config.rpc_client(),
        }
    }

    pub fn devnet() -> Self {
        Self::new(RpcProviderConfig::devnet())
    }
}

#[async_trait]
impl BalanceProvider for RpcBalanceProvider {
    async fn get_balance(
        &self,
        token: &Pubkey,
        account: &Pubkey,
    ) -> QueryResult<u64> {
        let token_accounts = self
            .rpc_client
            .get_token_accounts_by_owner(
                account,
                TokenAccountsFilter::Mint(*token),
            )
            .await
            .map_err(|err| classify_client_error(err, token))?;
        trace!(
            "Owner {} holds {} token account(s) of mint {}",
            account,
            token_accounts.len(),
            token
        );
        sum_token_account_amounts(&token_accounts)
    }
}

pub(crate) fn sum_token_account_amounts(
    token_accounts: &[RpcKeyedAccount],
) -> QueryResult<u64> {
    token_accounts.iter().try_fold(0u64, |total, keyed_account| {
        let amount = token_account_amount(keyed_account)?;
        total.checked_add(amount).ok_or_else(|| {
            QueryError::QueryRejected(format!(
                "Token account amounts overflow at {}",
                keyed_account.pubkey
            ))
        })
    })
}

/// Extracts the raw amount out of a jsonParsed token account
fn token_account_amount(keyed_account: &RpcKeyedAccount) -> QueryResult<u64> {
    let parsed = match &keyed_account.account.data {
        UiAccountData::Json(parsed_account) => &parsed_account.parsed,
        _ => {
            return Err(QueryError::QueryRejected(format!(
                "Token account {} was not returned as parsed json",
                keyed_account.pubkey
            )))
        }
    };
    parsed["info"]["tokenAmount"]["amount"]
        .as_str()
        .and_then(|amount| amount.parse::<u64>().ok())
        .ok_or_else(|| {
            QueryError::QueryRejected(format!(
                "Token account {} has no readable amount",
                keyed_account.pubkey
            ))
        })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn keyed_token_account(amount: &str) -> RpcKeyedAccount {
        serde_json::from_value(json!({
            "pubkey": Pubkey::new_unique().to_string(),
            "account": {
                "lamports": 2_039_280,
                "data": {
                    "program": "spl-token",
                    "parsed": {
                        "type": "account",
                        "info": {
                            "isNative": false,
                            "mint": Pubkey::new_unique().to_string(),
                            "owner": Pubkey::new_unique().to_string(),
                            "state": "initialized",
                            "tokenAmount": {
                                "amount": amount,
                                "decimals": 6,
                                "uiAmount": null,
                                "uiAmountString": "0"
                            }
                        }
                    },
                    "space": 165
                },
                "owner": "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA",
                "executable": false,
                "rentEpoch": 0,
                "space": 165
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_sum_of_no_token_accounts_is_zero() {
        assert_eq!(sum_token_account_amounts(&[]).unwrap(), 0);
    }

    #[test]
    fn test_sum_of_token_accounts() {
        let accounts = vec![
            keyed_token_account("1000000"),
            keyed_token_account("2500000"),
        ];
        assert_eq!(sum_token_account_amounts(&accounts).unwrap(), 3_500_000);
    }

    #[test]
    fn test_unreadable_amount_is_rejected() {
        let accounts = vec![keyed_token_account("lots")];
        assert!(matches!(
            sum_token_account_amounts(&accounts),
            Err(QueryError::QueryRejected(_))
        ));
    }

    #[test]
    fn test_overflowing_amounts_are_rejected() {
        let max = u64::MAX.to_string();
        let accounts = vec![keyed_token_account(&max), keyed_token_account("1")];
        assert!(matches!(
            sum_token_account_amounts(&accounts),
            Err(QueryError::QueryRejected(_))
        ));
    }
}
