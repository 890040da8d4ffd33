use std::time::Duration;

use anyhow::Context;
use balsnap_providers::{
    rpc_balance_provider::RpcBalanceProvider,
    rpc_provider_config::RpcProviderConfig,
    rpc_token_info_provider::RpcTokenInfoProvider,
};
use balsnap_snapshotter::{DiffReport, Snapshotter};
use clap::Parser;
use log::*;
use serde_json::json;

mod args;

use args::Args;

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(err) = run(Args::parse()).await {
        debug!("Error: {:?}", err);
        eprintln!("error: {:#}", err);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let config = RpcProviderConfig::new(args.cluster, args.commitment);
    info!("Reading balances from {}", config.url());

    let token_info_provider = args.tokens.iter().fold(
        RpcTokenInfoProvider::new(config.clone()),
        |provider, arg| match (arg.token.resolve(), arg.symbol) {
            (Ok(mint), Some(symbol)) => provider.with_symbol(mint, symbol),
            _ => provider,
        },
    );
    let mut snapshotter = Snapshotter::with_providers(
        RpcBalanceProvider::new(config),
        token_info_provider,
        args.tokens.iter().map(|arg| arg.token.clone()),
        args.accounts.iter().map(|arg| arg.account),
    )
    .context("Invalid tokens or accounts")?;
    for arg in &args.accounts {
        if let Some(alias) = &arg.alias {
            snapshotter.set_account_alias(arg.account, alias.clone());
        }
    }

    for idx in 0..args.snaps {
        if idx > 0 {
            tokio::time::sleep(Duration::from_secs(args.interval_secs)).await;
        }
        let label = format!("snap {}", idx + 1);
        snapshotter
            .snap(Some(&label), !args.json)
            .await
            .with_context(|| format!("Failed to take {}", label))?;
    }

    if snapshotter.len() < 2 {
        return Ok(());
    }
    let report = snapshotter.diff_last_two()?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report_json(&report))?);
    } else {
        snapshotter.print_diff(&report).await;
    }
    Ok(())
}

fn report_json(report: &DiffReport) -> serde_json::Value {
    let changes = report
        .changes()
        .map(|(token, account, delta)| {
            json!({
                "token": token.to_string(),
                "account": account.to_string(),
                "delta": delta.to_string(),
            })
        })
        .collect::<Vec<_>>();
    json!({
        "before": report.before_label,
        "after": report.after_label,
        "changes": changes,
    })
}
