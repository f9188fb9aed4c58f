use crate::ledger::{
    transaction::{self, Transaction},
    Amount, LedgerError,
};

use super::account::{positive, Account, Variant};
use chrono::{DateTime, Utc};

impl Account {
    /// Withdraw money. How far the balance may go depends on the variant:
    /// - standard, savings and fixed deposit accounts can't go below zero
    ///   (maturity doesn't block a fixed deposit withdrawal);
    /// - checking accounts can dip into their overdraft;
    /// - credit cards treat it as a cash advance, which adds to the amount
    ///   owed as long as it stays within the credit limit.
    pub fn withdraw(&mut self, amount: Amount, now: DateTime<Utc>) -> Result<(), LedgerError> {
        let amount = positive(amount)?;
        let current = self.balance.amount();

        let balance = match self.variant {
            Variant::Standard | Variant::Savings { .. } | Variant::FixedDeposit { .. } => {
                if amount > current {
                    return Err(LedgerError::InsufficientFunds);
                }
                self.balance.debited(amount)?
            }
            Variant::Checking { overdraft_limit } => {
                let available = current
                    .checked_add(overdraft_limit)
                    .ok_or(LedgerError::Overflow)?;
                if amount > available {
                    return Err(LedgerError::InsufficientFunds);
                }
                self.balance.debited(amount)?
            }
            Variant::CreditCard { credit_limit } => {
                let owed = current.checked_add(amount).ok_or(LedgerError::Overflow)?;
                if owed > credit_limit {
                    return Err(LedgerError::InsufficientFunds);
                }
                self.balance.credited(amount)?
            }
        };

        self.record(
            balance,
            Transaction::new(transaction::Kind::Withdrawal, amount, now),
        );

        Ok(())
    }
}
