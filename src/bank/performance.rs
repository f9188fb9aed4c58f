use super::Bank;
use crate::ledger::Amount;

use rust_decimal_macros::dec;

/// Registered balances grouped by account variant.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountPerformance {
    pub kind: &'static str,
    pub accounts: usize,
    pub total_balance: Amount,
}

impl Bank {
    /// Variants are listed in the order their first account was registered,
    /// and only variants with a registered account show up.
    pub fn account_performance_analysis(&self) -> Vec<AccountPerformance> {
        let mut performance: Vec<AccountPerformance> = Vec::new();

        for account in self
            .accounts
            .iter()
            .filter_map(|id| self.ledger.account(*id).ok())
        {
            let kind = account.variant().name();
            match performance.iter_mut().find(|p| p.kind == kind) {
                Some(entry) => {
                    entry.accounts += 1;
                    entry.total_balance += account.get_balance();
                }
                None => performance.push(AccountPerformance {
                    kind,
                    accounts: 1,
                    total_balance: account.get_balance(),
                }),
            }
        }

        performance
    }
}

#[cfg(test)]
mod performance_tests {
    use super::AccountPerformance;
    use crate::bank::bank_tests::bank;
    use crate::ledger::account::Account;

    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty() {
        assert!(bank().account_performance_analysis().is_empty());
    }

    #[test]
    fn test_grouped_by_variant() {
        let mut bank = bank();
        let opened = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        for account in vec![
            Account::savings("Charlie", dec!(5000), dec!(0.02)),
            Account::standard("Alice", dec!(1000)),
            Account::standard("Bob", dec!(1500)),
            Account::fixed_deposit("Eve", dec!(3000), 3, dec!(0.04), opened).unwrap(),
            Account::checking("Dave", dec!(2000), dec!(500)),
        ] {
            let id = bank.open_account(account);
            bank.add_account(id).unwrap();
        }

        assert_eq!(
            vec![
                AccountPerformance {
                    kind: "Savings",
                    accounts: 1,
                    total_balance: dec!(5000),
                },
                AccountPerformance {
                    kind: "Standard",
                    accounts: 2,
                    total_balance: dec!(2500),
                },
                AccountPerformance {
                    kind: "FixedDeposit",
                    accounts: 1,
                    total_balance: dec!(3000),
                },
                AccountPerformance {
                    kind: "Checking",
                    accounts: 1,
                    total_balance: dec!(2000),
                },
            ],
            bank.account_performance_analysis()
        );
    }

    #[test]
    fn test_double_registration_counts_twice() {
        let mut bank = bank();
        let alice = bank.open_account(Account::standard("Alice", dec!(1000)));
        bank.add_account(alice).unwrap();
        bank.add_account(alice).unwrap();

        assert_eq!(
            vec![AccountPerformance {
                kind: "Standard",
                accounts: 2,
                total_balance: dec!(2000),
            }],
            bank.account_performance_analysis()
        );
    }
}
