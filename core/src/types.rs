use std::str::FromStr;

use serde::{Deserialize, Serialize};
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};

use crate::{errors::AddressError, AddressHandle};

// -----------------
// AddressRef
// -----------------
/// Reference to a token or an account as handed to us by the caller, either
/// an already resolved address or a raw string that still needs parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressRef {
    Pubkey(Pubkey),
    Raw(String),
}

pub type TokenRef = AddressRef;
pub type AccountRef = AddressRef;

impl AddressRef {
    pub fn from_handle<H: AddressHandle + ?Sized>(handle: &H) -> Self {
        Self::Pubkey(handle.pubkey())
    }

    /// Normalizes the reference into the canonical address.
    pub fn resolve(&self) -> Result<Pubkey, AddressError> {
        match self {
            AddressRef::Pubkey(pubkey) => Ok(*pubkey),
            AddressRef::Raw(raw) => {
                let raw = raw.trim();
                if raw.is_empty() {
                    return Err(AddressError::Empty);
                }
                Pubkey::from_str(raw)
                    .map_err(|_| AddressError::InvalidAddress(raw.to_string()))
            }
        }
    }
}

impl From<Pubkey> for AddressRef {
    fn from(pubkey: Pubkey) -> Self {
        Self::Pubkey(pubkey)
    }
}

impl From<&Pubkey> for AddressRef {
    fn from(pubkey: &Pubkey) -> Self {
        Self::Pubkey(*pubkey)
    }
}

impl From<&str> for AddressRef {
    fn from(raw: &str) -> Self {
        Self::Raw(raw.to_string())
    }
}

impl From<String> for AddressRef {
    fn from(raw: String) -> Self {
        Self::Raw(raw)
    }
}

impl From<&Keypair> for AddressRef {
    fn from(keypair: &Keypair) -> Self {
        Self::from_handle(keypair)
    }
}

impl AddressHandle for Pubkey {
    fn pubkey(&self) -> Pubkey {
        *self
    }
}

impl AddressHandle for Keypair {
    fn pubkey(&self) -> Pubkey {
        Signer::pubkey(self)
    }
}

// -----------------
// TokenInfo
// -----------------
/// Display metadata of a token. Neither field is guaranteed to be known,
/// SPL mints carry decimals on chain but symbols live in separate metadata.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TokenInfo {
    pub symbol: Option<String>,
    pub decimals: Option<u8>,
}

impl TokenInfo {
    pub fn new(symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            symbol: Some(symbol.into()),
            decimals: Some(decimals),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_raw_address() {
        let pubkey = Pubkey::new_unique();
        let raw = format!("  {}\n", pubkey);
        assert_eq!(AddressRef::from(raw).resolve(), Ok(pubkey));
    }

    #[test]
    fn test_resolve_handles() {
        let pubkey = Pubkey::new_unique();
        assert_eq!(AddressRef::from(pubkey).resolve(), Ok(pubkey));
        assert_eq!(AddressRef::from_handle(&pubkey).resolve(), Ok(pubkey));

        let keypair = Keypair::new();
        assert_eq!(
            AddressRef::from(&keypair).resolve(),
            Ok(Signer::pubkey(&keypair))
        );
    }

    #[test]
    fn test_resolve_invalid_address() {
        assert_eq!(AddressRef::from("   ").resolve(), Err(AddressError::Empty));
        assert_eq!(
            AddressRef::from("0xdeadbeef").resolve(),
            Err(AddressError::InvalidAddress("0xdeadbeef".to_string()))
        );
        // valid base58 but not 32 bytes
        assert!(AddressRef::from("abc").resolve().is_err());
    }
}
