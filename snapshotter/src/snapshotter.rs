use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use balsnap_core::{
    errors::AddressError, AccountRef, AddressRef, BalanceProvider,
    TokenInfoProvider, TokenRef,
};
use balsnap_providers::{
    rpc_balance_provider::RpcBalanceProvider,
    rpc_provider_config::RpcProviderConfig,
    rpc_token_info_provider::RpcTokenInfoProvider,
};
use log::*;
use solana_sdk::pubkey::Pubkey;

use crate::{
    balance_reader::BalanceReader,
    diff_report::DiffReport,
    errors::{
        ConfigurationError, DiffError, SnapshotterError, SnapshotterResult,
    },
    render::{self, TableLabels},
    snapshot::Snapshot,
    token_info_cache::TokenInfoCache,
};

// Starts at 1 since 0 marks snapshots whose snapshotter is unknown
static NEXT_SNAPSHOTTER_ID: AtomicUsize = AtomicUsize::new(1);

// -----------------
// SnapshotRef
// -----------------
/// Identifies a snapshot in the store of a [Snapshotter]
#[derive(Debug, Clone, Copy)]
pub enum SnapshotRef<'a> {
    /// Position in capture order
    Index(usize),
    /// The most recent snapshot carrying this label
    Label(&'a str),
    /// A snapshot previously returned by the same snapshotter
    Snapshot(&'a Snapshot),
}

impl From<usize> for SnapshotRef<'_> {
    fn from(index: usize) -> Self {
        SnapshotRef::Index(index)
    }
}

impl<'a> From<&'a str> for SnapshotRef<'a> {
    fn from(label: &'a str) -> Self {
        SnapshotRef::Label(label)
    }
}

impl<'a> From<&'a Snapshot> for SnapshotRef<'a> {
    fn from(snapshot: &'a Snapshot) -> Self {
        SnapshotRef::Snapshot(snapshot)
    }
}

impl<'a> From<&'a Arc<Snapshot>> for SnapshotRef<'a> {
    fn from(snapshot: &'a Arc<Snapshot>) -> Self {
        SnapshotRef::Snapshot(&**snapshot)
    }
}

// -----------------
// Snapshotter
// -----------------
/// Takes snapshots of the balances of a fixed set of tokens for a fixed set
/// of accounts and compares them.
/// Snapshots are kept in capture order and never change once taken.
pub struct Snapshotter<T: BalanceProvider, U: TokenInfoProvider> {
    id: usize,
    tokens: Vec<Pubkey>,
    accounts: Vec<Pubkey>,
    balance_reader: BalanceReader<T>,
    token_info_cache: TokenInfoCache<U>,
    account_aliases: HashMap<Pubkey, String>,
    /// Shared with the callers that took them, snapshots are immutable
    snapshots: Vec<Arc<Snapshot>>,
}

impl Snapshotter<RpcBalanceProvider, RpcTokenInfoProvider> {
    pub fn new<I, J>(
        config: RpcProviderConfig,
        tokens: I,
        accounts: J,
    ) -> SnapshotterResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<TokenRef>,
        J: IntoIterator,
        J::Item: Into<AccountRef>,
    {
        Self::with_providers(
            RpcBalanceProvider::new(config.clone()),
            RpcTokenInfoProvider::new(config),
            tokens,
            accounts,
        )
    }
}

impl<T: BalanceProvider, U: TokenInfoProvider> Snapshotter<T, U> {
    /// Resolves all tokens and accounts right away, fails if either list is
    /// empty or any entry is not an address.
    /// Duplicate entries are kept and show up as duplicate columns/rows.
    pub fn with_providers<I, J>(
        balance_provider: T,
        token_info_provider: U,
        tokens: I,
        accounts: J,
    ) -> SnapshotterResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<TokenRef>,
        J: IntoIterator,
        J::Item: Into<AccountRef>,
    {
        let tokens = resolve_all(tokens).map_err(|(position, source)| {
            ConfigurationError::UnresolvableToken { position, source }
        })?;
        if tokens.is_empty() {
            return Err(ConfigurationError::NoTokens.into());
        }
        let accounts = resolve_all(accounts).map_err(|(position, source)| {
            ConfigurationError::UnresolvableAccount { position, source }
        })?;
        if accounts.is_empty() {
            return Err(ConfigurationError::NoAccounts.into());
        }

        let id = NEXT_SNAPSHOTTER_ID.fetch_add(1, Ordering::Relaxed);
        debug!(
            "Snapshotter {} tracks {} token(s) for {} account(s)",
            id,
            tokens.len(),
            accounts.len()
        );
        Ok(Self {
            id,
            tokens,
            accounts,
            balance_reader: BalanceReader::new(balance_provider),
            token_info_cache: TokenInfoCache::new(token_info_provider),
            account_aliases: HashMap::new(),
            snapshots: Vec::new(),
        })
    }

    pub fn tokens(&self) -> &[Pubkey] {
        &self.tokens
    }

    pub fn accounts(&self) -> &[Pubkey] {
        &self.accounts
    }

    pub fn balance_provider(&self) -> &T {
        self.balance_reader.balance_provider()
    }

    /// Shows `alias` instead of the address of `account` in rendered tables
    pub fn set_account_alias(
        &mut self,
        account: Pubkey,
        alias: impl Into<String>,
    ) {
        self.account_aliases.insert(account, alias.into());
    }

    // -----------------
    // Store
    // -----------------
    pub fn snapshots(&self) -> &[Arc<Snapshot>] {
        &self.snapshots
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Arc<Snapshot>> {
        self.snapshots.get(index)
    }

    pub fn latest(&self) -> Option<&Arc<Snapshot>> {
        self.snapshots.last()
    }

    // -----------------
    // Capture
    // -----------------
    /// Reads the balance of every token for every account, one read at a
    /// time with tokens in the outer and accounts in the inner loop.
    /// The snapshot is only stored once all reads succeeded, if any read
    /// fails the store is left untouched.
    pub async fn snap(
        &mut self,
        label: Option<&str>,
        print_snap: bool,
    ) -> SnapshotterResult<Arc<Snapshot>> {
        let mut balances =
            Vec::with_capacity(self.tokens.len() * self.accounts.len());
        for token in &self.tokens {
            for account in &self.accounts {
                let balance = self
                    .balance_reader
                    .read(token, account)
                    .await
                    .map_err(|source| SnapshotterError::Snapshot {
                        token: *token,
                        account: *account,
                        source,
                    })?;
                balances.push(balance);
            }
        }

        let snapshot = Arc::new(Snapshot::new(
            self.id,
            self.snapshots.len(),
            label.map(str::to_string),
            self.tokens.clone(),
            self.accounts.clone(),
            balances,
        ));
        self.snapshots.push(snapshot.clone());
        debug!(
            "Snapshotter {} took snapshot #{} ({:?})",
            self.id, snapshot.index, snapshot.label
        );

        if print_snap {
            println!("{}", self.render_snapshot(&snapshot).await);
        }
        Ok(snapshot)
    }

    // -----------------
    // Diff
    // -----------------
    /// Computes `after - before` for every token/account cell
    pub fn diff<'a>(
        &self,
        before: impl Into<SnapshotRef<'a>>,
        after: impl Into<SnapshotRef<'a>>,
    ) -> SnapshotterResult<DiffReport> {
        let before = self.lookup(before.into())?;
        let after = self.lookup(after.into())?;
        Ok(DiffReport::between(before, after))
    }

    /// Compares the two most recently taken snapshots
    pub fn diff_last_two(&self) -> SnapshotterResult<DiffReport> {
        let len = self.snapshots.len();
        if len < 2 {
            return Err(SnapshotterError::InsufficientSnapshots { len });
        }
        self.diff(len - 2, len - 1)
    }

    fn lookup(
        &self,
        snapshot_ref: SnapshotRef<'_>,
    ) -> Result<&Arc<Snapshot>, DiffError> {
        let len = self.snapshots.len();
        match snapshot_ref {
            SnapshotRef::Index(index) => self
                .snapshots
                .get(index)
                .ok_or(DiffError::SnapshotNotFound { index, len }),
            SnapshotRef::Label(label) => self
                .snapshots
                .iter()
                .rev()
                .find(|snapshot| snapshot.label.as_deref() == Some(label))
                .ok_or_else(|| DiffError::LabelNotFound(label.to_string())),
            SnapshotRef::Snapshot(snapshot) => {
                if snapshot.snapshotter_id != self.id {
                    return Err(DiffError::ForeignSnapshot {
                        index: snapshot.index,
                    });
                }
                self.snapshots.get(snapshot.index).ok_or(
                    DiffError::SnapshotNotFound {
                        index: snapshot.index,
                        len,
                    },
                )
            }
        }
    }

    // -----------------
    // Rendering
    // -----------------
    /// Symbols and decimals of all tokens (as far as they can be resolved)
    /// together with the account aliases.
    pub async fn table_labels(&mut self) -> TableLabels {
        let mut token_infos = HashMap::new();
        for token in &self.tokens {
            if !token_infos.contains_key(token) {
                let token_info =
                    self.token_info_cache.get_or_default(token).await;
                token_infos.insert(*token, token_info);
            }
        }
        TableLabels {
            token_infos,
            account_aliases: self.account_aliases.clone(),
        }
    }

    pub async fn render_snapshot(&mut self, snapshot: &Snapshot) -> String {
        let labels = self.table_labels().await;
        let table = render::render_snapshot(snapshot, &labels);
        match render::snapshot_heading(snapshot) {
            Some(heading) => format!("{}\n{}", heading, table),
            None => table,
        }
    }

    pub async fn render_diff(&mut self, report: &DiffReport) -> String {
        let labels = self.table_labels().await;
        format!(
            "{}\n{}",
            render::diff_heading(report, self.snapshots.len()),
            render::render_diff(report, &labels)
        )
    }

    pub async fn print_diff(&mut self, report: &DiffReport) {
        println!("{}", self.render_diff(report).await);
    }
}

/// Resolves every reference, on failure returns the position of the first
/// reference that is not an address.
fn resolve_all<I>(refs: I) -> Result<Vec<Pubkey>, (usize, AddressError)>
where
    I: IntoIterator,
    I::Item: Into<AddressRef>,
{
    refs.into_iter()
        .enumerate()
        .map(|(position, address_ref)| {
            Into::<AddressRef>::into(address_ref)
                .resolve()
                .map_err(|source| (position, source))
        })
        .collect()
}
