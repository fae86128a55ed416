//! Operation tokens accepted on the command line.

use core::str::FromStr;

use banka_accounts::{Account, AccountResult, RawAmount};
use thiserror::Error;

/// One account operation: `lock`, `unlock`, `deposit=<amount>` or `withdraw=<amount>`.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Lock,
    Unlock,
    Deposit(RawAmount),
    Withdraw(RawAmount),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OpParseError {
    #[error("unknown operation {0:?} (expected lock, unlock, deposit=<amount> or withdraw=<amount>)")]
    Unknown(String),

    #[error("operation {0:?} needs an amount, e.g. {0}=100")]
    MissingAmount(String),

    #[error("operation {0:?} takes no amount")]
    UnexpectedAmount(String),
}

impl FromStr for Op {
    type Err = OpParseError;

    /// Amounts are not validated here; malformed ones are refused by the account.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, amount) = match s.split_once('=') {
            Some((name, amount)) => (name, Some(amount)),
            None => (s, None),
        };

        match (name, amount) {
            ("lock", None) => Ok(Op::Lock),
            ("unlock", None) => Ok(Op::Unlock),
            ("lock" | "unlock", Some(_)) => Err(OpParseError::UnexpectedAmount(name.to_string())),
            ("deposit", Some(a)) => Ok(Op::Deposit(RawAmount::from_token(a))),
            ("withdraw", Some(a)) => Ok(Op::Withdraw(RawAmount::from_token(a))),
            ("deposit" | "withdraw", None) => Err(OpParseError::MissingAmount(name.to_string())),
            _ => Err(OpParseError::Unknown(s.to_string())),
        }
    }
}

impl core::fmt::Display for Op {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Op::Lock => f.write_str("lock"),
            Op::Unlock => f.write_str("unlock"),
            Op::Deposit(a) => write!(f, "deposit={a}"),
            Op::Withdraw(a) => write!(f, "withdraw={a}"),
        }
    }
}

impl Op {
    pub fn apply_to(&self, account: &mut Account) -> AccountResult<()> {
        match self {
            Op::Lock => account.lock(),
            Op::Unlock => account.unlock(),
            Op::Deposit(a) => account.deposit(a.clone()),
            Op::Withdraw(a) => account.withdraw(a.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_operation() {
        assert_eq!("lock".parse::<Op>().unwrap(), Op::Lock);
        assert_eq!("unlock".parse::<Op>().unwrap(), Op::Unlock);
        assert_eq!(
            "deposit=5000".parse::<Op>().unwrap(),
            Op::Deposit(RawAmount::Integer(5000))
        );
        assert_eq!(
            "withdraw=12.5".parse::<Op>().unwrap(),
            Op::Withdraw(RawAmount::Float(12.5))
        );
    }

    #[test]
    fn malformed_amounts_are_kept_for_the_account_to_refuse() {
        assert_eq!(
            "deposit=3,50".parse::<Op>().unwrap(),
            Op::Deposit(RawAmount::Text("3,50".into()))
        );
    }

    #[test]
    fn rejects_bad_tokens() {
        assert_eq!(
            "close".parse::<Op>().unwrap_err(),
            OpParseError::Unknown("close".into())
        );
        assert_eq!(
            "deposit".parse::<Op>().unwrap_err(),
            OpParseError::MissingAmount("deposit".into())
        );
        assert_eq!(
            "lock=1".parse::<Op>().unwrap_err(),
            OpParseError::UnexpectedAmount("lock".into())
        );
    }

    #[test]
    fn applies_to_account() {
        let mut account = Account::new("Jmeno");
        Op::Deposit(RawAmount::Integer(10)).apply_to(&mut account).unwrap();
        Op::Lock.apply_to(&mut account).unwrap();
        assert!(Op::Withdraw(RawAmount::Integer(1)).apply_to(&mut account).is_err());
        assert!(account.is_locked());
    }
}
