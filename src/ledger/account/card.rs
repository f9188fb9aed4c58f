use crate::ledger::{
    transaction::{self, Transaction},
    Amount, LedgerError,
};

use super::account::{positive, Account, Variant};
use chrono::{DateTime, Utc};

// Operations only credit cards support. On a card, the balance is the amount
// owed: purchases raise it, payments lower it.
impl Account {
    pub fn make_purchase(&mut self, amount: Amount, now: DateTime<Utc>) -> Result<(), LedgerError> {
        let credit_limit = self.credit_limit("purchases")?;
        let amount = positive(amount)?;

        let owed = self
            .balance
            .amount()
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        if owed > credit_limit {
            return Err(LedgerError::InsufficientFunds);
        }

        let balance = self.balance.credited(amount)?;
        self.record(
            balance,
            Transaction::new(transaction::Kind::Purchase, amount, now),
        );

        Ok(())
    }

    /// Pay down the card. Paying more than is owed is rejected.
    pub fn make_payment(&mut self, amount: Amount, now: DateTime<Utc>) -> Result<(), LedgerError> {
        self.credit_limit("payments")?;
        let amount = positive(amount)?;

        if amount > self.balance.amount() {
            return Err(LedgerError::InsufficientFunds);
        }

        let balance = self.balance.debited(amount)?;
        self.record(
            balance,
            Transaction::new(transaction::Kind::Payment, amount, now),
        );

        Ok(())
    }

    fn credit_limit(&self, operation: &'static str) -> Result<Amount, LedgerError> {
        match self.variant {
            Variant::CreditCard { credit_limit } => Ok(credit_limit),
            _ => Err(self.unsupported(operation)),
        }
    }
}

#[cfg(test)]
mod card_tests {
    use crate::ledger::{account::account::Account, transaction, LedgerError};

    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    #[test]
    fn test_purchase_then_deposit() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut card = Account::credit_card("Frank", dec!(5000));

        card.make_purchase(dec!(100), now).unwrap();
        assert_eq!(dec!(100), card.get_balance());

        card.deposit(dec!(40), now).unwrap();
        assert_eq!(dec!(60), card.get_balance());

        let kinds: Vec<transaction::Kind> =
            card.list_transactions().iter().map(|tx| tx.kind()).collect();
        assert_eq!(
            vec![transaction::Kind::Purchase, transaction::Kind::Deposit],
            kinds
        );
    }

    #[test]
    fn test_purchase_over_limit() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut card = Account::credit_card("Frank", dec!(5000));

        card.make_purchase(dec!(4999), now).unwrap();
        assert_eq!(
            Err(LedgerError::InsufficientFunds),
            card.make_purchase(dec!(2), now)
        );
        card.make_purchase(dec!(1), now).unwrap();
        assert_eq!(dec!(5000), card.get_balance());
        assert_eq!(2, card.list_transactions().len());
    }

    #[test]
    fn test_payment() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut card = Account::credit_card("Frank", dec!(5000));
        card.make_purchase(dec!(300), now).unwrap();

        assert_eq!(Ok(()), card.make_payment(dec!(300), now));
        assert_eq!(dec!(0), card.get_balance());
        assert_eq!(
            transaction::Kind::Payment,
            card.list_transactions()[1].kind()
        );
    }

    #[test]
    fn test_payment_exceeds_balance() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut card = Account::credit_card("Frank", dec!(5000));
        card.make_purchase(dec!(300), now).unwrap();

        assert_eq!(
            Err(LedgerError::InsufficientFunds),
            card.make_payment(dec!(300.01), now)
        );
        assert_eq!(dec!(300), card.get_balance());
        assert_eq!(1, card.list_transactions().len());
    }

    #[test]
    fn test_card_rejects_non_positive() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut card = Account::credit_card("Frank", dec!(5000));

        assert_eq!(Err(LedgerError::InvalidAmount), card.make_purchase(dec!(-5), now));
        assert_eq!(Err(LedgerError::InvalidAmount), card.make_payment(dec!(0), now));
        assert!(card.list_transactions().is_empty());
    }

    #[test]
    fn test_card_operations_unsupported_elsewhere() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut acc = Account::checking("Dave", dec!(2000), dec!(500));

        assert_eq!(
            Err(LedgerError::UnsupportedOperation {
                kind: "Checking",
                operation: "purchases"
            }),
            acc.make_purchase(dec!(10), now)
        );
        assert_eq!(
            Err(LedgerError::UnsupportedOperation {
                kind: "Checking",
                operation: "payments"
            }),
            acc.make_payment(dec!(10), now)
        );
        assert_eq!(dec!(2000), acc.get_balance());
    }
}
