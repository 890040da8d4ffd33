use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

/// Balances of every configured token for every configured account captured
/// at one instant.
/// Cells are stored token-major, i.e. for each token the balances of all
/// accounts in configuration order. Duplicate tokens or accounts show up as
/// duplicate columns/rows.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Snapshot {
    /// Identifies the snapshotter that took this snapshot, 0 when unknown
    #[serde(skip)]
    pub(crate) snapshotter_id: usize,
    /// Position in the store of the snapshotter, i.e. capture order
    pub index: usize,
    pub label: Option<String>,
    pub tokens: Vec<Pubkey>,
    pub accounts: Vec<Pubkey>,
    balances: Vec<u64>,
}

impl Snapshot {
    pub(crate) fn new(
        snapshotter_id: usize,
        index: usize,
        label: Option<String>,
        tokens: Vec<Pubkey>,
        accounts: Vec<Pubkey>,
        balances: Vec<u64>,
    ) -> Self {
        debug_assert_eq!(balances.len(), tokens.len() * accounts.len());
        Self {
            snapshotter_id,
            index,
            label,
            tokens,
            accounts,
            balances,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.balances.len()
    }

    pub fn balances(&self) -> &[u64] {
        &self.balances
    }

    /// Balance at the given token column and account row
    pub fn balance(&self, token_idx: usize, account_idx: usize) -> Option<u64> {
        if token_idx >= self.tokens.len() || account_idx >= self.accounts.len()
        {
            return None;
        }
        self.balances
            .get(token_idx * self.accounts.len() + account_idx)
            .copied()
    }

    /// Balance of the first occurrence of the token/account pair
    pub fn balance_of(&self, token: &Pubkey, account: &Pubkey) -> Option<u64> {
        let token_idx = self.tokens.iter().position(|x| x == token)?;
        let account_idx = self.accounts.iter().position(|x| x == account)?;
        self.balance(token_idx, account_idx)
    }

    /// All cells in capture order as (token, account, balance)
    pub fn cells(&self) -> impl Iterator<Item = (&Pubkey, &Pubkey, u64)> {
        self.tokens
            .iter()
            .flat_map(move |token| {
                self.accounts.iter().map(move |account| (token, account))
            })
            .zip(self.balances.iter().copied())
            .map(|((token, account), balance)| (token, account, balance))
    }

    pub(crate) fn same_shape(&self, other: &Snapshot) -> bool {
        self.tokens == other.tokens && self.accounts == other.accounts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_three() -> Snapshot {
        let tokens = vec![Pubkey::new_unique(), Pubkey::new_unique()];
        let accounts = vec![
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
        ];
        Snapshot::new(1, 0, None, tokens, accounts, vec![1, 2, 3, 4, 5, 6])
    }

    #[test]
    fn test_cells_are_token_major() {
        let snapshot = two_by_three();
        assert_eq!(snapshot.cell_count(), 6);
        assert_eq!(snapshot.balance(0, 2), Some(3));
        assert_eq!(snapshot.balance(1, 0), Some(4));
        assert_eq!(snapshot.balance(2, 0), None);
        assert_eq!(snapshot.balance(0, 3), None);

        let (token, account, balance) = snapshot.cells().nth(4).unwrap();
        assert_eq!(token, &snapshot.tokens[1]);
        assert_eq!(account, &snapshot.accounts[1]);
        assert_eq!(balance, 5);
    }

    #[test]
    fn test_balance_of() {
        let snapshot = two_by_three();
        let token = snapshot.tokens[1];
        let account = snapshot.accounts[2];
        assert_eq!(snapshot.balance_of(&token, &account), Some(6));
        assert_eq!(snapshot.balance_of(&account, &token), None);
    }
}
