use super::Amount;

use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Deposit,     // Credit to the account (a payment, on a credit card).
    Withdrawal,  // Debit from the account (a cash advance, on a credit card).
    TransferOut, // Source side of a transfer.
    TransferIn,  // Target side of a transfer.
    Purchase,    // Credit card only: adds to the amount owed.
    Payment,     // Credit card only: pays down the amount owed.
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Deposit => "Deposit",
            Kind::Withdrawal => "Withdrawal",
            Kind::TransferOut => "Transfer Out",
            Kind::TransferIn => "Transfer In",
            Kind::Purchase => "Purchase",
            Kind::Payment => "Payment",
        };
        f.write_str(name)
    }
}

/// One entry of an account's history. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    kind: Kind,
    amount: Amount,
    timestamp: DateTime<Utc>,
}

impl Transaction {
    // The new() function ensures we can only create amounts with a decimal precision of 4.
    pub fn new(kind: Kind, amount: Amount, timestamp: DateTime<Utc>) -> Self {
        debug_assert!(!amount.is_sign_negative(), "negative transaction amount");

        Self {
            kind,
            amount: super::round(amount),
            timestamp,
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} of {}", self.timestamp, self.kind, self.amount)
    }
}

#[cfg(test)]
mod transaction_tests {
    use super::{Kind, Transaction};

    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    #[test]
    // Decimal precision is 4 places. We should be unable to have more precise amounts.
    fn test_transaction_decimal_precision() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

        for (raw_amount, want_amount) in vec![
            (dec!(1.0), dec!(1.0)),
            (dec!(0.999999), dec!(1.0)),
            (dec!(1.0000001), dec!(1.0)),
            (dec!(1.2345), dec!(1.2345)),
            (dec!(1.23459), dec!(1.2346)),
        ] {
            let tx = Transaction::new(Kind::Withdrawal, raw_amount, at);
            assert_eq!(want_amount, tx.amount());
        }
    }

    #[test]
    fn test_transaction_display() {
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 10, 30, 0).unwrap();

        for (kind, want) in vec![
            (Kind::Deposit, "2024-03-05 10:30:00 UTC: Deposit of 50"),
            (Kind::TransferOut, "2024-03-05 10:30:00 UTC: Transfer Out of 50"),
            (Kind::TransferIn, "2024-03-05 10:30:00 UTC: Transfer In of 50"),
            (Kind::Purchase, "2024-03-05 10:30:00 UTC: Purchase of 50"),
        ] {
            assert_eq!(want, Transaction::new(kind, dec!(50), at).to_string());
        }
    }
}
