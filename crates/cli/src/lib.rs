//! Command-line driver: open an account from a JSON config, run operations in
//! order, print the summary.

pub mod op;

pub use op::{Op, OpParseError};

use std::path::Path;

use anyhow::Context;
use banka_accounts::{Account, AccountConfig};
use banka_core::AggregateRoot;

pub fn load_config(path: &Path) -> anyhow::Result<AccountConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading account config {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing account config {}", path.display()))
}

pub fn parse_ops<I, S>(tokens: I) -> anyhow::Result<Vec<Op>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|t| t.as_ref().parse::<Op>().map_err(anyhow::Error::from))
        .collect()
}

/// Run `ops` in order. Stops at the first refused operation.
pub fn run(account: &mut Account, ops: &[Op]) -> anyhow::Result<()> {
    for (i, op) in ops.iter().enumerate() {
        op.apply_to(account)
            .with_context(|| format!("operation #{} ({op}) refused", i + 1))?;
        tracing::info!(account_id = %account.id(), op = %op, balance = %account.balance(), "operation applied");
    }
    Ok(())
}
