use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

use crate::snapshot::Snapshot;

/// Cell-wise `after - before` of two snapshots of the same shape, laid out
/// like the snapshots themselves (token-major).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DiffReport {
    pub before_index: usize,
    pub before_label: Option<String>,
    pub after_index: usize,
    pub after_label: Option<String>,
    pub tokens: Vec<Pubkey>,
    pub accounts: Vec<Pubkey>,
    deltas: Vec<i128>,
}

impl DiffReport {
    /// Callers need to ensure that both snapshots have the same shape.
    pub(crate) fn between(before: &Snapshot, after: &Snapshot) -> Self {
        debug_assert!(before.same_shape(after));
        let deltas = before
            .balances()
            .iter()
            .zip(after.balances())
            .map(|(before, after)| *after as i128 - *before as i128)
            .collect();
        Self {
            before_index: before.index,
            before_label: before.label.clone(),
            after_index: after.index,
            after_label: after.label.clone(),
            tokens: before.tokens.clone(),
            accounts: before.accounts.clone(),
            deltas,
        }
    }

    pub fn deltas(&self) -> &[i128] {
        &self.deltas
    }

    pub fn delta(&self, token_idx: usize, account_idx: usize) -> Option<i128> {
        if token_idx >= self.tokens.len() || account_idx >= self.accounts.len()
        {
            return None;
        }
        self.deltas
            .get(token_idx * self.accounts.len() + account_idx)
            .copied()
    }

    /// Delta of the first occurrence of the token/account pair
    pub fn delta_of(&self, token: &Pubkey, account: &Pubkey) -> Option<i128> {
        let token_idx = self.tokens.iter().position(|x| x == token)?;
        let account_idx = self.accounts.iter().position(|x| x == account)?;
        self.delta(token_idx, account_idx)
    }

    pub fn cells(&self) -> impl Iterator<Item = (&Pubkey, &Pubkey, i128)> {
        self.tokens
            .iter()
            .flat_map(move |token| {
                self.accounts.iter().map(move |account| (token, account))
            })
            .zip(self.deltas.iter().copied())
            .map(|((token, account), delta)| (token, account, delta))
    }

    /// Only the cells whose balance moved
    pub fn changes(&self) -> impl Iterator<Item = (&Pubkey, &Pubkey, i128)> {
        self.cells().filter(|(_, _, delta)| *delta != 0)
    }

    pub fn is_zero(&self) -> bool {
        self.deltas.iter().all(|delta| *delta == 0)
    }
}
