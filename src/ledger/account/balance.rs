use crate::ledger::{Amount, LedgerError};

use rust_decimal_macros::dec;

/// A balance is a sum of credits (adds money to the balance)
/// and debits (remove money from the balance).
///
/// In this simple implementation, we only keep the running credit and
/// debit totals; the history itself lives in the account's transactions.
///
/// Operations return the updated balance instead of mutating in place, so an
/// operation touching two balances can check both before committing either.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Balance {
    credit: Amount,
    debit: Amount,
}

impl Balance {
    pub const fn new(credit: Amount, debit: Amount) -> Self {
        Self { credit, debit }
    }

    /// A balance that starts at `amount`, which may be negative.
    pub fn opening(amount: Amount) -> Self {
        if amount.is_sign_negative() {
            Self::new(dec!(0), -amount)
        } else {
            Self::new(amount, dec!(0))
        }
    }

    pub fn amount(&self) -> Amount {
        self.credit - self.debit
    }

    pub fn credited(&self, amount: Amount) -> Result<Self, LedgerError> {
        let credit = self
            .credit
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;

        Ok(Self { credit, ..*self })
    }

    pub fn debited(&self, amount: Amount) -> Result<Self, LedgerError> {
        let debit = self
            .debit
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;

        Ok(Self { debit, ..*self })
    }
}
