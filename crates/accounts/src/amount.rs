//! Money amounts: unvalidated caller input and the validated value object.

use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use banka_core::ValueObject;

use crate::error::{AccountError, AccountResult};

/// An amount exactly as the caller supplied it.
///
/// Only `Integer` and `Float` are ever accepted by deposits and withdrawals.
/// `Text` exists so that malformed input reaches the account and is refused
/// there, after the lock-state check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl RawAmount {
    /// Read a command-line token using JSON number grammar.
    ///
    /// `"0008"`, `"3,50"`, `"2h"` and `" 12"` are not numbers in that grammar
    /// and stay text.
    pub fn from_token(token: &str) -> Self {
        if token.trim() != token {
            return Self::Text(token.to_string());
        }
        match serde_json::from_str::<serde_json::Value>(token) {
            Ok(serde_json::Value::Number(n)) => match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => Self::Integer(i),
                (None, Some(f)) => Self::Float(f),
                (None, None) => Self::Text(token.to_string()),
            },
            _ => Self::Text(token.to_string()),
        }
    }
}

impl core::fmt::Display for RawAmount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RawAmount::Integer(i) => write!(f, "{i}"),
            RawAmount::Float(x) => write!(f, "{x}"),
            RawAmount::Text(s) => f.write_str(s),
        }
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for RawAmount {
                fn from(value: $t) -> Self {
                    Self::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for RawAmount {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for RawAmount {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<&str> for RawAmount {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawAmount {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A validated, strictly positive amount of money.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl ValueObject for Amount {}

impl Amount {
    /// Validate caller input: format first, then sign.
    pub fn parse(raw: &RawAmount) -> AccountResult<Self> {
        let value = match raw {
            RawAmount::Integer(i) => Decimal::from(*i),
            RawAmount::Float(x) => decimal_from_float(*x).ok_or_else(|| {
                AccountError::InvalidAmountFormat {
                    input: raw.to_string(),
                }
            })?,
            RawAmount::Text(s) => {
                return Err(AccountError::InvalidAmountFormat { input: s.clone() });
            }
        };

        if value <= Decimal::ZERO {
            return Err(AccountError::NonPositiveAmount {
                amount: value.to_string(),
            });
        }

        Ok(Self(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

/// Exact decimal value of the float's shortest round-trip text.
///
/// `None` for NaN, infinities, magnitudes beyond the decimal range, and
/// positive floats too small to survive the 28-digit scale.
fn decimal_from_float(x: f64) -> Option<Decimal> {
    let value = Decimal::from_str(&x.to_string()).ok()?;
    if x > 0.0 && value.is_zero() {
        return None;
    }
    Some(value)
}

impl core::fmt::Display for Amount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
