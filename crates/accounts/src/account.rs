use chrono::{DateTime, Local, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use banka_core::{Aggregate, AggregateId, AggregateRoot};
use banka_events::Event;

use crate::amount::{Amount, RawAmount};
use crate::config::AccountConfig;
use crate::error::{AccountError, AccountResult};
use crate::summary::AccountSummary;

/// Account identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub AggregateId);

impl AccountId {
    pub fn generate() -> Self {
        Self(AggregateId::new())
    }
}

impl core::fmt::Display for AccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Lock state. Deposits and withdrawals require `Active`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    #[default]
    Active,
    Inactive,
}

impl core::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AccountStatus::Active => f.write_str("active"),
            AccountStatus::Inactive => f.write_str("inactive"),
        }
    }
}

/// Aggregate root: a single savings account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    owner_name: String,
    balance: Decimal,
    annual_rate: Decimal,
    created_on: NaiveDate,
    status: AccountStatus,
    version: u64,
}

impl Account {
    /// Open an active account with zero balance and rate, created today.
    pub fn new(owner_name: impl Into<String>) -> Self {
        Self::open(AccountConfig::new(owner_name))
    }

    /// Open an account from explicit parameters. Nothing is validated.
    pub fn open(config: AccountConfig) -> Self {
        Self {
            id: config.id.unwrap_or_else(AccountId::generate),
            owner_name: config.owner_name,
            balance: config.balance,
            annual_rate: config.annual_rate,
            // Captured per call so every account gets the date it was opened on.
            created_on: config.created_on.unwrap_or_else(|| Local::now().date_naive()),
            status: config.status,
            version: 0,
        }
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn annual_rate(&self) -> Decimal {
        self.annual_rate
    }

    pub fn created_on(&self) -> NaiveDate {
        self.created_on
    }

    pub fn status(&self) -> AccountStatus {
        self.status
    }

    pub fn is_locked(&self) -> bool {
        self.status == AccountStatus::Inactive
    }

    /// Human-readable five-line summary.
    pub fn summary(&self) -> AccountSummary<'_> {
        AccountSummary::new(self)
    }

    pub fn write_summary<W: std::io::Write>(&self, out: &mut W) -> std::io::Result<()> {
        write!(out, "{}", self.summary())
    }

    /// Deactivate the account. Fails if it is already inactive.
    pub fn lock(&mut self) -> AccountResult<()> {
        let cmd = AccountCommand::Lock(Lock {
            account_id: self.id,
            occurred_at: Utc::now(),
        });
        self.execute(&cmd).map(drop)
    }

    /// Reactivate the account. Fails if it is already active.
    pub fn unlock(&mut self) -> AccountResult<()> {
        let cmd = AccountCommand::Unlock(Unlock {
            account_id: self.id,
            occurred_at: Utc::now(),
        });
        self.execute(&cmd).map(drop)
    }

    pub fn deposit(&mut self, amount: impl Into<RawAmount>) -> AccountResult<()> {
        let cmd = AccountCommand::Deposit(Deposit {
            account_id: self.id,
            amount: amount.into(),
            occurred_at: Utc::now(),
        });
        self.execute(&cmd).map(drop)
    }

    pub fn withdraw(&mut self, amount: impl Into<RawAmount>) -> AccountResult<()> {
        let cmd = AccountCommand::Withdraw(Withdraw {
            account_id: self.id,
            amount: amount.into(),
            occurred_at: Utc::now(),
        });
        self.execute(&cmd).map(drop)
    }
}

impl AggregateRoot for Account {
    type Id = AccountId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: Lock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lock {
    pub account_id: AccountId,
    pub occurred_at: DateTime<Utc>,
}

/// Command: Unlock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unlock {
    pub account_id: AccountId,
    pub occurred_at: DateTime<Utc>,
}

/// Command: Deposit. The amount is validated by the aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deposit {
    pub account_id: AccountId,
    pub amount: RawAmount,
    pub occurred_at: DateTime<Utc>,
}

/// Command: Withdraw. The amount is validated by the aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Withdraw {
    pub account_id: AccountId,
    pub amount: RawAmount,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AccountCommand {
    Lock(Lock),
    Unlock(Unlock),
    Deposit(Deposit),
    Withdraw(Withdraw),
}

impl AccountCommand {
    pub fn account_id(&self) -> AccountId {
        match self {
            AccountCommand::Lock(c) => c.account_id,
            AccountCommand::Unlock(c) => c.account_id,
            AccountCommand::Deposit(c) => c.account_id,
            AccountCommand::Withdraw(c) => c.account_id,
        }
    }
}

/// Event: AccountLocked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountLocked {
    pub account_id: AccountId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: AccountUnlocked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountUnlocked {
    pub account_id: AccountId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: FundsDeposited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundsDeposited {
    pub account_id: AccountId,
    pub amount: Amount,
    pub balance_after: Decimal,
    pub occurred_at: DateTime<Utc>,
}

/// Event: FundsWithdrawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundsWithdrawn {
    pub account_id: AccountId,
    pub amount: Amount,
    pub balance_after: Decimal,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountEvent {
    AccountLocked(AccountLocked),
    AccountUnlocked(AccountUnlocked),
    FundsDeposited(FundsDeposited),
    FundsWithdrawn(FundsWithdrawn),
}

impl Event for AccountEvent {
    fn event_type(&self) -> &'static str {
        match self {
            AccountEvent::AccountLocked(_) => "accounts.account.locked",
            AccountEvent::AccountUnlocked(_) => "accounts.account.unlocked",
            AccountEvent::FundsDeposited(_) => "accounts.account.deposited",
            AccountEvent::FundsWithdrawn(_) => "accounts.account.withdrawn",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            AccountEvent::AccountLocked(e) => e.occurred_at,
            AccountEvent::AccountUnlocked(e) => e.occurred_at,
            AccountEvent::FundsDeposited(e) => e.occurred_at,
            AccountEvent::FundsWithdrawn(e) => e.occurred_at,
        }
    }
}

impl Aggregate for Account {
    type Command = AccountCommand;
    type Event = AccountEvent;
    type Error = AccountError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            AccountEvent::AccountLocked(_) => {
                self.status = AccountStatus::Inactive;
            }
            AccountEvent::AccountUnlocked(_) => {
                self.status = AccountStatus::Active;
            }
            AccountEvent::FundsDeposited(e) => {
                self.balance = e.balance_after;
            }
            AccountEvent::FundsWithdrawn(e) => {
                self.balance = e.balance_after;
            }
        }

        self.version += 1;
        tracing::debug!(
            account_id = %self.id,
            event_type = %event.qualified_type(),
            balance = %self.balance,
            status = %self.status,
            "account event applied"
        );
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        let decided = self.ensure_account_id(command.account_id()).and_then(|()| match command {
            AccountCommand::Lock(cmd) => self.handle_lock(cmd),
            AccountCommand::Unlock(cmd) => self.handle_unlock(cmd),
            AccountCommand::Deposit(cmd) => self.handle_deposit(cmd),
            AccountCommand::Withdraw(cmd) => self.handle_withdraw(cmd),
        });

        if let Err(err) = &decided {
            tracing::debug!(account_id = %self.id, error = %err, "account command rejected");
        }
        decided
    }
}

impl Account {
    fn ensure_account_id(&self, account_id: AccountId) -> AccountResult<()> {
        if self.id != account_id {
            return Err(AccountError::AccountMismatch {
                expected: self.id.to_string(),
                actual: account_id.to_string(),
            });
        }
        Ok(())
    }

    fn ensure_active(&self, operation: &'static str) -> AccountResult<()> {
        if self.is_locked() {
            return Err(AccountError::InvalidAccountState { operation });
        }
        Ok(())
    }

    fn handle_lock(&self, cmd: &Lock) -> AccountResult<Vec<AccountEvent>> {
        if self.is_locked() {
            return Err(AccountError::AlreadyInactive);
        }

        Ok(vec![AccountEvent::AccountLocked(AccountLocked {
            account_id: cmd.account_id,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_unlock(&self, cmd: &Unlock) -> AccountResult<Vec<AccountEvent>> {
        if !self.is_locked() {
            return Err(AccountError::AlreadyActive);
        }

        Ok(vec![AccountEvent::AccountUnlocked(AccountUnlocked {
            account_id: cmd.account_id,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_deposit(&self, cmd: &Deposit) -> AccountResult<Vec<AccountEvent>> {
        self.ensure_active("deposits")?;
        let amount = Amount::parse(&cmd.amount)?;

        let balance_after = self
            .balance
            .checked_add(amount.value())
            .ok_or(AccountError::BalanceOverflow { operation: "deposit" })?;

        Ok(vec![AccountEvent::FundsDeposited(FundsDeposited {
            account_id: cmd.account_id,
            amount,
            balance_after,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_withdraw(&self, cmd: &Withdraw) -> AccountResult<Vec<AccountEvent>> {
        self.ensure_active("withdrawals")?;
        let amount = Amount::parse(&cmd.amount)?;

        if amount.value() > self.balance {
            return Err(AccountError::InsufficientFunds {
                requested: amount.to_string(),
                available: self.balance.to_string(),
            });
        }

        // Covered withdrawals of a positive amount from a non-negative balance
        // cannot leave the decimal range.
        let balance_after = self
            .balance
            .checked_sub(amount.value())
            .ok_or(AccountError::BalanceOverflow { operation: "withdrawal" })?;

        Ok(vec![AccountEvent::FundsWithdrawn(FundsWithdrawn {
            account_id: cmd.account_id,
            amount,
            balance_after,
            occurred_at: cmd.occurred_at,
        })])
    }
}
