use balsnap_addresses::mints::USDC_DEVNET_MINT;
use balsnap_core::{errors::QueryError, BalanceProvider, TokenInfoProvider};
use balsnap_providers::{
    rpc_balance_provider::RpcBalanceProvider,
    rpc_token_info_provider::RpcTokenInfoProvider,
};
use solana_sdk::pubkey::Pubkey;

// Note: the tests in this file rely on devnet

#[tokio::test]
#[ignore = "relies on devnet"]
async fn test_balance_of_wallet_without_token_accounts() {
    let provider = RpcBalanceProvider::devnet();
    let balance = provider
        .get_balance(&USDC_DEVNET_MINT, &Pubkey::new_unique())
        .await
        .unwrap();
    assert_eq!(balance, 0);
}

#[tokio::test]
#[ignore = "relies on devnet"]
async fn test_balance_of_missing_mint() {
    let provider = RpcBalanceProvider::devnet();
    let token = Pubkey::new_unique();
    let res = provider.get_balance(&token, &Pubkey::new_unique()).await;
    assert!(matches!(res, Err(QueryError::TokenNotFound(pubkey)) if pubkey == token));
}

#[tokio::test]
#[ignore = "relies on devnet"]
async fn test_token_info_of_usdc() {
    let provider =
        RpcTokenInfoProvider::devnet().with_symbol(USDC_DEVNET_MINT, "USDC");
    let info = provider.get_token_info(&USDC_DEVNET_MINT).await.unwrap();
    assert_eq!(info.symbol.as_deref(), Some("USDC"));
    assert_eq!(info.decimals, Some(6));
}
