use super::{AccountId, Amount, CustomerId, LoanId};

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Every way a ledger operation can be rejected.
///
/// None of these abort a run: a rejected operation leaves the ledger exactly
/// as it was, and the caller decides whether to report it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// The amount must be strictly positive.
    #[error("amount must be positive")]
    InvalidAmount,

    /// Funds, overdraft or credit line are insufficient for the operation.
    #[error("insufficient funds")]
    InsufficientFunds,

    /// A loan payment below the fixed monthly payment.
    #[error("payment is less than the required {required}")]
    PaymentTooSmall { required: Amount },

    /// The customer has no loan to pay.
    #[error("no loan account")]
    NoLoanBound,

    /// A ratio was requested against a zero denominator.
    #[error("division by zero")]
    DivisionByZero,

    /// Loans must run for at least one year, and a fixed deposit must
    /// mature on a date that can be represented.
    #[error("invalid term")]
    InvalidTerm,

    /// Interest on a fixed deposit is only paid once it matures.
    #[error("account will mature on {maturity_date}, interest cannot be applied yet")]
    NotMatured { maturity_date: DateTime<Utc> },

    /// The account variant doesn't support this operation.
    #[error("{kind} accounts do not support {operation}")]
    UnsupportedOperation {
        kind: &'static str,
        operation: &'static str,
    },

    #[error("unknown account {0}")]
    UnknownAccount(AccountId),

    #[error("unknown loan {0}")]
    UnknownLoan(LoanId),

    #[error("unknown customer {0}")]
    UnknownCustomer(CustomerId),

    /// The bank has no registered account to pick from.
    #[error("no accounts registered")]
    NoAccounts,

    /// Adding more money to a balance would overflow.
    #[error("amount overflow")]
    Overflow,
}
