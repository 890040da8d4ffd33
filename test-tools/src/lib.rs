pub mod accounts;
pub mod balance_provider_stub;
pub mod token_info_provider_stub;
