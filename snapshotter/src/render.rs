use std::collections::HashMap;

use balsnap_core::TokenInfo;
use solana_sdk::pubkey::Pubkey;

use crate::{diff_report::DiffReport, snapshot::Snapshot};

/// What to show instead of raw addresses and how to scale amounts.
/// Tokens without known symbol are shown by address, tokens without known
/// decimals with their raw integer amounts.
#[derive(Debug, Default, Clone)]
pub struct TableLabels {
    pub token_infos: HashMap<Pubkey, TokenInfo>,
    pub account_aliases: HashMap<Pubkey, String>,
}

impl TableLabels {
    fn token_label(&self, token: &Pubkey) -> String {
        self.token_infos
            .get(token)
            .and_then(|info| info.symbol.clone())
            .unwrap_or_else(|| token.to_string())
    }

    fn token_decimals(&self, token: &Pubkey) -> Option<u8> {
        self.token_infos.get(token).and_then(|info| info.decimals)
    }

    fn account_label(&self, account: &Pubkey) -> String {
        self.account_aliases
            .get(account)
            .cloned()
            .unwrap_or_else(|| account.to_string())
    }
}

/// Moves the decimal point of `amount` by `decimals` places and groups the
/// integer part by thousands, i.e. `123456789` with 6 decimals becomes
/// `123.456789`. Without decimals the raw amount is returned.
pub fn format_units(amount: i128, decimals: Option<u8>) -> String {
    let Some(decimals) = decimals else {
        return amount.to_string();
    };
    let decimals = decimals as usize;
    let sign = if amount < 0 { "-" } else { "" };
    let digits = amount.unsigned_abs().to_string();
    if decimals == 0 {
        return format!("{}{}", sign, group_thousands(&digits));
    }
    let padded = format!("{:0>width$}", digits, width = decimals + 1);
    let (integer, fraction) = padded.split_at(padded.len() - decimals);
    format!("{}{}.{}", sign, group_thousands(integer), fraction)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, digit) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

pub fn snapshot_heading(snapshot: &Snapshot) -> Option<String> {
    snapshot
        .label
        .as_deref()
        .filter(|label| !label.is_empty())
        .map(|label| format!("== Balances: {} ==", label))
}

/// Uses the labels when both snapshots carry one. Unlabelled diffs of the
/// two most recent snapshots in a store of `store_len` are called the latest
/// two, any other pair is named by index.
pub fn diff_heading(report: &DiffReport, store_len: usize) -> String {
    match (report.before_label.as_deref(), report.after_label.as_deref()) {
        (Some(before), Some(after))
            if !before.is_empty() && !after.is_empty() =>
        {
            format!("== Comparing Balances: {} and {} ==", before, after)
        }
        _ if report.before_index + 1 == report.after_index
            && report.after_index + 1 == store_len =>
        {
            "== Comparing Balances: Latest two snapshots ==".to_string()
        }
        _ => format!(
            "== Comparing Balances: snapshot #{} and snapshot #{} ==",
            report.before_index, report.after_index
        ),
    }
}

/// Renders accounts as rows and tokens as columns.
pub fn render_snapshot(snapshot: &Snapshot, labels: &TableLabels) -> String {
    render_grid(&snapshot.tokens, &snapshot.accounts, labels, |t, a| {
        snapshot.balance(t, a).map(i128::from)
    })
}

/// Renders accounts as rows and tokens as columns, each cell holding how
/// much the balance changed.
pub fn render_diff(report: &DiffReport, labels: &TableLabels) -> String {
    render_grid(&report.tokens, &report.accounts, labels, |t, a| {
        report.delta(t, a)
    })
}

fn render_grid(
    tokens: &[Pubkey],
    accounts: &[Pubkey],
    labels: &TableLabels,
    cell: impl Fn(usize, usize) -> Option<i128>,
) -> String {
    let mut header = vec!["account".to_string()];
    header.extend(tokens.iter().map(|token| labels.token_label(token)));

    let rows = accounts
        .iter()
        .enumerate()
        .map(|(account_idx, account)| {
            let mut row = vec![labels.account_label(account)];
            row.extend(tokens.iter().enumerate().map(|(token_idx, token)| {
                cell(token_idx, account_idx)
                    .map(|amount| {
                        format_units(amount, labels.token_decimals(token))
                    })
                    .unwrap_or_default()
            }));
            row
        })
        .collect::<Vec<_>>();

    render_table(&header, &rows)
}

/// Plain text table, first column left aligned, all others right aligned.
fn render_table(header: &[String], rows: &[Vec<String>]) -> String {
    let widths = (0..header.len())
        .map(|col| {
            rows.iter()
                .map(|row| row[col].chars().count())
                .chain(std::iter::once(header[col].chars().count()))
                .max()
                .unwrap_or_default()
        })
        .collect::<Vec<_>>();

    let format_row = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(col, (cell, width))| {
                if col == 0 {
                    format!("{:<width$}", cell, width = *width)
                } else {
                    format!("{:>width$}", cell, width = *width)
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let separator = widths
        .iter()
        .map(|width| "-".repeat(*width))
        .collect::<Vec<_>>()
        .join("  ");

    let mut lines = vec![format_row(header), separator];
    lines.extend(rows.iter().map(|row| format_row(row.as_slice())));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_units() {
        assert_eq!(format_units(1_000_000_000, Some(8)), "10.00000000");
        assert_eq!(format_units(-500_000_000, Some(8)), "-5.00000000");
        assert_eq!(format_units(123_456_789_012, Some(6)), "123,456.789012");
        assert_eq!(format_units(5, Some(3)), "0.005");
        assert_eq!(format_units(0, Some(2)), "0.00");
        assert_eq!(format_units(-1_234_567, Some(0)), "-1,234,567");
        assert_eq!(format_units(1_234_567, None), "1234567");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("123456"), "123,456");
    }

    #[test]
    fn test_render_table_alignment() {
        let header = vec!["account".to_string(), "USDC".to_string()];
        let rows = vec![
            vec!["alice".to_string(), "1.50".to_string()],
            vec!["bob".to_string(), "-10.25".to_string()],
        ];
        assert_eq!(
            render_table(&header, &rows),
            "account    USDC\n\
             -------  ------\n\
             alice      1.50\n\
             bob      -10.25"
        );
    }

    fn snapshot(index: usize, label: Option<&str>) -> Snapshot {
        Snapshot::new(
            1,
            index,
            label.map(str::to_string),
            vec![Pubkey::new_unique()],
            vec![Pubkey::new_unique()],
            vec![0],
        )
    }

    fn report(before: &Snapshot, after: &Snapshot) -> DiffReport {
        let mut after = after.clone();
        after.tokens = before.tokens.clone();
        after.accounts = before.accounts.clone();
        DiffReport::between(before, &after)
    }

    #[test]
    fn test_diff_heading_of_labelled_snapshots() {
        let before = snapshot(0, Some("deposit"));
        let after = snapshot(3, Some("withdraw"));
        assert_eq!(
            diff_heading(&report(&before, &after), 4),
            "== Comparing Balances: deposit and withdraw =="
        );
    }

    #[test]
    fn test_diff_heading_of_unlabelled_snapshots() {
        let first = snapshot(0, None);
        let second = snapshot(1, Some("second"));
        let third = snapshot(2, None);

        assert_eq!(
            diff_heading(&report(&first, &second), 2),
            "== Comparing Balances: Latest two snapshots =="
        );
        // no longer the latest two once a third snapshot was taken
        assert_eq!(
            diff_heading(&report(&first, &second), 3),
            "== Comparing Balances: snapshot #0 and snapshot #1 =="
        );
        assert_eq!(
            diff_heading(&report(&first, &third), 3),
            "== Comparing Balances: snapshot #0 and snapshot #2 =="
        );
    }

    #[test]
    fn test_render_snapshot_with_labels() {
        let usdc = Pubkey::new_unique();
        let unknown = Pubkey::new_unique();
        let alice = Pubkey::new_unique();
        let snapshot = Snapshot::new(
            1,
            0,
            Some("start".to_string()),
            vec![usdc, unknown],
            vec![alice],
            vec![2_500_000, 42],
        );
        let mut labels = TableLabels::default();
        labels.token_infos.insert(usdc, TokenInfo::new("USDC", 6));
        labels.account_aliases.insert(alice, "alice".to_string());

        let table = render_snapshot(&snapshot, &labels);
        let lines = table.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("USDC"));
        assert!(lines[0].contains(&unknown.to_string()));
        assert!(lines[2].starts_with("alice"));
        assert!(lines[2].contains("2.500000"));
        assert!(lines[2].ends_with("42"));
        assert_eq!(
            snapshot_heading(&snapshot).as_deref(),
            Some("== Balances: start ==")
        );
    }
}
