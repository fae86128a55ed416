use std::path::PathBuf;

use anyhow::bail;
use banka_accounts::Account;
use banka_core::AggregateRoot;

fn main() -> anyhow::Result<()> {
    banka_observability::init();

    let mut args = std::env::args().skip(1);
    let Some(config_path) = args.next().map(PathBuf::from) else {
        bail!("usage: banka-cli <config.json> [lock | unlock | deposit=<amount> | withdraw=<amount>]...");
    };

    let config = banka_cli::load_config(&config_path)?;
    let ops = banka_cli::parse_ops(args)?;

    let mut account = Account::open(config);
    tracing::info!(account_id = %account.id(), ops = ops.len(), "account opened");

    banka_cli::run(&mut account, &ops)?;

    let stdout = std::io::stdout();
    account.write_summary(&mut stdout.lock())?;
    Ok(())
}
