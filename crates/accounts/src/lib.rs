//! Savings account domain module (event-sourced).
//!
//! A single account aggregate with deposit, withdrawal and lock/unlock
//! operations. Pure domain logic: no IO beyond rendering a summary into a
//! caller-supplied writer.

pub mod account;
pub mod amount;
pub mod config;
pub mod error;
pub mod summary;

pub use account::{
    Account, AccountCommand, AccountEvent, AccountId, AccountLocked, AccountStatus,
    AccountUnlocked, Deposit, FundsDeposited, FundsWithdrawn, Lock, Unlock, Withdraw,
};
pub use amount::{Amount, RawAmount};
pub use config::AccountConfig;
pub use error::{AccountError, AccountResult};
pub use summary::AccountSummary;
