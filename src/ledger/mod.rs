pub mod account;
pub mod customer;
pub mod error;
pub mod ledger;
pub mod loan;
pub mod transaction;

pub use error::LedgerError;
pub use ledger::Ledger;

// Using named types doesn't provide any compiler help, but it helps a lot with
// readability.
// Consider the following, when looking up a loan's payer:
// (1) payer: usize
// (2) payer: AccountId
// Implementation (1) would most likely need comments, and could be confusing.
// Implementation (2) is self-explanatory.
pub type AccountId = usize;
pub type LoanId = usize;
pub type CustomerId = usize;

// I decided to use a decimal library instead of the built-in f64 type, to be
// safer when dealing with money, and making the decimal precision easier to
// deal with.
pub type Amount = rust_decimal::Decimal;
pub const DECIMAL_PRECISION: u32 = 4;

/// Round an amount to the precision used everywhere in the ledger.
pub fn round(amount: Amount) -> Amount {
    amount.round_dp(DECIMAL_PRECISION)
}
