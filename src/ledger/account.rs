//! Accounts and the operations that can be applied to them.
//!
//! Every variant shares the same storage (holder, balance, history) and the
//! operations dispatch on the variant where their rules differ. Each
//! operation lives in its own file.

pub mod account;
pub mod balance;
pub mod card;
pub mod deposit;
pub mod interest;
pub mod transfer;
pub mod withdrawal;

pub use account::{
    Account, Variant, DEFAULT_CREDIT_LIMIT, DEFAULT_FIXED_DEPOSIT_RATE, DEFAULT_FIXED_DEPOSIT_TERM,
    DEFAULT_OVERDRAFT_LIMIT, DEFAULT_SAVINGS_RATE,
};
pub use balance::Balance;
