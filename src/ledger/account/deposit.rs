use crate::ledger::{
    transaction::{self, Transaction},
    Amount, LedgerError,
};

use super::account::{positive, Account, Variant};
use chrono::{DateTime, Utc};

impl Account {
    pub fn deposit(&mut self, amount: Amount, now: DateTime<Utc>) -> Result<(), LedgerError> {
        let amount = positive(amount)?;

        let balance = match self.variant {
            // A deposit on a credit card pays down what is owed, so the
            // balance goes down. Nothing stops it from going below zero.
            Variant::CreditCard { .. } => self.balance.debited(amount)?,
            _ => self.balance.credited(amount)?,
        };

        self.record(
            balance,
            Transaction::new(transaction::Kind::Deposit, amount, now),
        );

        Ok(())
    }
}
