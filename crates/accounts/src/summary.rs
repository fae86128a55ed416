//! Human-readable account statement.

use crate::account::Account;

/// Five labeled lines: owner, balance, annual rate, creation date, status.
#[derive(Debug, Clone, Copy)]
pub struct AccountSummary<'a> {
    account: &'a Account,
}

impl<'a> AccountSummary<'a> {
    pub fn new(account: &'a Account) -> Self {
        Self { account }
    }
}

impl core::fmt::Display for AccountSummary<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let a = self.account;
        writeln!(f, "Owner: {}", a.owner_name())?;
        writeln!(f, "Balance: {}", a.balance().normalize())?;
        writeln!(f, "Annual rate: {}", a.annual_rate().normalize())?;
        writeln!(f, "Created on: {}", a.created_on())?;
        writeln!(f, "Status: {}", a.status())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::{Account, AccountConfig, AccountStatus};

    #[test]
    fn renders_every_field_in_order() {
        let account = Account::open(
            AccountConfig::new("Bohaty")
                .with_balance(1500)
                .with_created_on(NaiveDate::from_ymd_opt(2014, 3, 1).unwrap())
                .with_status(AccountStatus::Inactive),
        );

        assert_eq!(
            account.summary().to_string(),
            "Owner: Bohaty\nBalance: 1500\nAnnual rate: 0\nCreated on: 2014-03-01\nStatus: inactive\n"
        );
    }

    #[test]
    fn balance_drops_trailing_zeros_left_by_fractional_movements() {
        let mut account = Account::new("Jmeno");
        account.deposit(0.5).unwrap();
        account.withdraw(0.5).unwrap();

        let summary = account.summary().to_string();
        assert!(summary.contains("\nBalance: 0\n"), "{summary}");
    }

    #[test]
    fn write_summary_matches_display() {
        let mut account = Account::new("Jmeno");
        account.deposit(12.5).unwrap();

        let mut out = Vec::new();
        account.write_summary(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), account.summary().to_string());
    }
}
