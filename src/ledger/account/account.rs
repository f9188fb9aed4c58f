use crate::ledger::{round, transaction::Transaction, Amount, LedgerError};

use super::balance::Balance;
use chrono::{DateTime, Duration, Utc};
use rust_decimal_macros::dec;

pub const DEFAULT_SAVINGS_RATE: Amount = dec!(0.02);
pub const DEFAULT_OVERDRAFT_LIMIT: Amount = dec!(500);
pub const DEFAULT_FIXED_DEPOSIT_TERM: u32 = 5;
pub const DEFAULT_FIXED_DEPOSIT_RATE: Amount = dec!(0.04);
pub const DEFAULT_CREDIT_LIMIT: Amount = dec!(5000);

/// The kind of an account, along with the parameters of that kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Variant {
    Standard,
    Savings {
        interest_rate: Amount,
    },
    Checking {
        overdraft_limit: Amount,
    },
    FixedDeposit {
        term_years: u32,
        interest_rate: Amount,
        maturity_date: DateTime<Utc>,
    },
    /// The balance of a credit card is the amount owed, not the amount held.
    CreditCard {
        credit_limit: Amount,
    },
}

impl Variant {
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Standard => "Standard",
            Variant::Savings { .. } => "Savings",
            Variant::Checking { .. } => "Checking",
            Variant::FixedDeposit { .. } => "FixedDeposit",
            Variant::CreditCard { .. } => "CreditCard",
        }
    }
}

/// An account holds a balance and the history of every operation that
/// changed it.
///
/// The history is append-only: a transaction is recorded for each successful
/// operation, and a rejected operation records nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub(super) holder: String,
    pub(super) variant: Variant,
    pub(super) balance: Balance,
    pub(super) transactions: Vec<Transaction>,
}

impl Account {
    fn new(holder: impl Into<String>, variant: Variant, opening_balance: Amount) -> Self {
        Self {
            holder: holder.into(),
            variant,
            balance: Balance::opening(opening_balance),
            transactions: Vec::new(),
        }
    }

    pub fn standard(holder: impl Into<String>, opening_balance: Amount) -> Self {
        Self::new(holder, Variant::Standard, opening_balance)
    }

    pub fn savings(holder: impl Into<String>, opening_balance: Amount, interest_rate: Amount) -> Self {
        Self::new(holder, Variant::Savings { interest_rate }, opening_balance)
    }

    pub fn checking(
        holder: impl Into<String>,
        opening_balance: Amount,
        overdraft_limit: Amount,
    ) -> Self {
        Self::new(holder, Variant::Checking { overdraft_limit }, opening_balance)
    }

    /// A fixed deposit matures `term_years` years of 365 days after it was
    /// opened. A term whose maturity date can't be represented is rejected.
    pub fn fixed_deposit(
        holder: impl Into<String>,
        opening_balance: Amount,
        term_years: u32,
        interest_rate: Amount,
        opened_at: DateTime<Utc>,
    ) -> Result<Self, LedgerError> {
        let maturity_date = opened_at
            .checked_add_signed(Duration::days(365 * i64::from(term_years)))
            .ok_or(LedgerError::InvalidTerm)?;

        Ok(Self::new(
            holder,
            Variant::FixedDeposit {
                term_years,
                interest_rate,
                maturity_date,
            },
            opening_balance,
        ))
    }

    /// Credit cards always start with nothing owed.
    pub fn credit_card(holder: impl Into<String>, credit_limit: Amount) -> Self {
        Self::new(holder, Variant::CreditCard { credit_limit }, dec!(0))
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    pub fn get_balance(&self) -> Amount {
        self.balance.amount()
    }

    pub fn list_transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The history, one rendered line per transaction.
    pub fn statement(&self) -> Vec<String> {
        self.transactions.iter().map(ToString::to_string).collect()
    }

    // Commit a new balance along with the transaction that explains it.
    pub(super) fn record(&mut self, balance: Balance, transaction: Transaction) {
        self.balance = balance;
        self.transactions.push(transaction);
    }

    pub(super) fn unsupported(&self, operation: &'static str) -> LedgerError {
        LedgerError::UnsupportedOperation {
            kind: self.variant.name(),
            operation,
        }
    }
}

/// Round the amount to the ledger precision, and make sure there is
/// something left to move.
pub(super) fn positive(amount: Amount) -> Result<Amount, LedgerError> {
    let amount = round(amount);
    if amount <= dec!(0) {
        return Err(LedgerError::InvalidAmount);
    }

    Ok(amount)
}
