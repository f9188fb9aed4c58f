use crate::ledger::{
    transaction::{self, Transaction},
    Amount, LedgerError,
};

use super::account::{positive, Account};
use chrono::{DateTime, Utc};

impl Account {
    /// Move money to another account.
    ///
    /// Unlike withdrawals, the guard is the same for every variant: the
    /// source balance must cover the amount. Overdrafts don't extend to
    /// transfers. The target is credited on its raw balance, whatever its
    /// variant.
    pub fn transfer(
        &mut self,
        amount: Amount,
        target: &mut Account,
        now: DateTime<Utc>,
    ) -> Result<(), LedgerError> {
        let amount = self.check_transfer(amount)?;

        // Both balances are computed before either is committed, so a
        // failure on the target side leaves the source untouched.
        let source_balance = self.balance.debited(amount)?;
        let target_balance = target.balance.credited(amount)?;

        self.record(
            source_balance,
            Transaction::new(transaction::Kind::TransferOut, amount, now),
        );
        target.record(
            target_balance,
            Transaction::new(transaction::Kind::TransferIn, amount, now),
        );

        Ok(())
    }

    /// A transfer whose target is the source itself. It passes the same
    /// guard as any transfer and records both sides, but the balance ends
    /// where it started.
    pub fn transfer_to_self(&mut self, amount: Amount, now: DateTime<Utc>) -> Result<(), LedgerError> {
        let amount = self.check_transfer(amount)?;
        let balance = self.balance.debited(amount)?.credited(amount)?;

        self.record(
            balance,
            Transaction::new(transaction::Kind::TransferOut, amount, now),
        );
        self.record(
            balance,
            Transaction::new(transaction::Kind::TransferIn, amount, now),
        );

        Ok(())
    }

    fn check_transfer(&self, amount: Amount) -> Result<Amount, LedgerError> {
        let amount = positive(amount)?;
        if amount > self.balance.amount() {
            return Err(LedgerError::InsufficientFunds);
        }

        Ok(amount)
    }
}
