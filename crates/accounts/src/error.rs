//! Account error taxonomy.

use banka_core::DomainError;
use thiserror::Error;

pub type AccountResult<T> = Result<T, AccountError>;

/// Why an account operation was refused.
///
/// Every variant is terminal for the attempted operation and leaves the
/// account exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccountError {
    /// Deposit or withdrawal attempted on an inactive account.
    #[error("only active accounts accept {operation}")]
    InvalidAccountState { operation: &'static str },

    /// The supplied amount is not an integer or a finite floating-point number.
    #[error("bad amount format {input:?}: use digits without spaces or leading zeros and a dot as decimal separator")]
    InvalidAmountFormat { input: String },

    /// The supplied amount is numeric but not strictly positive.
    #[error("amount must be positive, got {amount}")]
    NonPositiveAmount { amount: String },

    /// Withdrawal larger than the current balance.
    #[error("withdrawal of {requested} exceeds available balance {available}")]
    InsufficientFunds { requested: String, available: String },

    /// Unlock requested on an account that is already active.
    #[error("only inactive accounts can be activated")]
    AlreadyActive,

    /// Lock requested on an account that is already inactive.
    #[error("only active accounts can be deactivated")]
    AlreadyInactive,

    /// The resulting balance does not fit the decimal range.
    #[error("balance overflow while applying {operation}")]
    BalanceOverflow { operation: &'static str },

    /// A command addressed to another account.
    #[error("command addressed to account {expected}, not {actual}")]
    AccountMismatch { expected: String, actual: String },
}

impl From<AccountError> for DomainError {
    fn from(err: AccountError) -> Self {
        let msg = err.to_string();
        match err {
            AccountError::InvalidAmountFormat { .. } | AccountError::NonPositiveAmount { .. } => {
                DomainError::validation(msg)
            }
            AccountError::InvalidAccountState { .. }
            | AccountError::AlreadyActive
            | AccountError::AlreadyInactive => DomainError::conflict(msg),
            AccountError::InsufficientFunds { .. }
            | AccountError::BalanceOverflow { .. }
            | AccountError::AccountMismatch { .. } => DomainError::invariant(msg),
        }
    }
}
