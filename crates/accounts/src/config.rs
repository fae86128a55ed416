//! Construction parameters for an account.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::account::{AccountId, AccountStatus};

/// Everything needed to open an account.
///
/// Only `owner_name` is required; nothing here is validated. A negative
/// opening balance or rate is taken as given.
///
/// ```json
/// { "owner_name": "Bohaty", "balance": 100000000, "status": "inactive" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountConfig {
    pub owner_name: String,
    #[serde(default)]
    pub balance: Decimal,
    #[serde(default)]
    pub annual_rate: Decimal,
    /// Defaults to the local date at the moment the account is opened.
    #[serde(default)]
    pub created_on: Option<NaiveDate>,
    #[serde(default)]
    pub status: AccountStatus,
    /// Defaults to a freshly generated id.
    #[serde(default)]
    pub id: Option<AccountId>,
}

impl AccountConfig {
    pub fn new(owner_name: impl Into<String>) -> Self {
        Self {
            owner_name: owner_name.into(),
            balance: Decimal::ZERO,
            annual_rate: Decimal::ZERO,
            created_on: None,
            status: AccountStatus::Active,
            id: None,
        }
    }

    pub fn with_balance(mut self, balance: impl Into<Decimal>) -> Self {
        self.balance = balance.into();
        self
    }

    pub fn with_annual_rate(mut self, annual_rate: impl Into<Decimal>) -> Self {
        self.annual_rate = annual_rate.into();
        self
    }

    pub fn with_created_on(mut self, created_on: NaiveDate) -> Self {
        self.created_on = Some(created_on);
        self
    }

    pub fn with_status(mut self, status: AccountStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_id(mut self, id: AccountId) -> Self {
        self.id = Some(id);
        self
    }
}
