use solana_sdk::{pubkey, pubkey::Pubkey};

/// The mint of wrapped SOL
pub const NATIVE_MINT: Pubkey =
    pubkey!("So11111111111111111111111111111111111111112");
pub const NATIVE_MINT_ADDR: &str =
    "So11111111111111111111111111111111111111112";

/// The mint of Circle's USDC on mainnet
pub const USDC_MAINNET_MINT: Pubkey =
    pubkey!("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v");
pub const USDC_MAINNET_MINT_ADDR: &str =
    "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";

/// The mint of Circle's USDC on devnet
pub const USDC_DEVNET_MINT: Pubkey =
    pubkey!("4zMMC9srt5Ri5X14GAgXhaHii3GnPAEERYPJgZJDncDU");
pub const USDC_DEVNET_MINT_ADDR: &str =
    "4zMMC9srt5Ri5X14GAgXhaHii3GnPAEERYPJgZJDncDU";

/// Resolves a short mint name (as accepted on the command line) to its
/// mint address together with the symbol to display for it.
pub fn well_known_mint(name: &str) -> Option<(Pubkey, &'static str)> {
    match name.trim().to_ascii_lowercase().as_str() {
        "sol" | "wsol" => Some((NATIVE_MINT, "wSOL")),
        "usdc" => Some((USDC_MAINNET_MINT, "USDC")),
        "usdc-dev" | "usdc-devnet" => Some((USDC_DEVNET_MINT, "USDC")),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mint_addresses() {
        assert_eq!(NATIVE_MINT_ADDR, NATIVE_MINT.to_string());
        assert_eq!(USDC_MAINNET_MINT_ADDR, USDC_MAINNET_MINT.to_string());
        assert_eq!(USDC_DEVNET_MINT_ADDR, USDC_DEVNET_MINT.to_string());
    }

    #[test]
    fn test_well_known_mint() {
        assert_eq!(well_known_mint("WSOL"), Some((NATIVE_MINT, "wSOL")));
        assert_eq!(well_known_mint("usdc").map(|(_, sym)| sym), Some("USDC"));
        assert_eq!(well_known_mint("bonk"), None);
    }
}
