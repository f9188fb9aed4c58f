use crate::ledger::{round, Amount, LedgerError};

use super::account::{Account, Variant};
use chrono::{DateTime, Utc};

impl Account {
    /// Pay interest on the current balance, as a regular deposit.
    ///
    /// Savings accounts are paid whenever asked. Fixed deposits are only paid
    /// once they have matured. Returns the interest paid.
    pub fn apply_interest(&mut self, now: DateTime<Utc>) -> Result<Amount, LedgerError> {
        let interest_rate = match self.variant {
            Variant::Savings { interest_rate } => interest_rate,
            Variant::FixedDeposit {
                interest_rate,
                maturity_date,
                ..
            } => {
                if now < maturity_date {
                    return Err(LedgerError::NotMatured { maturity_date });
                }
                interest_rate
            }
            _ => return Err(self.unsupported("interest")),
        };

        let interest = self
            .balance
            .amount()
            .checked_mul(interest_rate)
            .map(round)
            .ok_or(LedgerError::Overflow)?;
        self.deposit(interest, now)?;

        Ok(interest)
    }
}
