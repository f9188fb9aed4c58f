use super::{round, AccountId, Amount, LedgerError};

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

/// One payment made towards a loan.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub timestamp: DateTime<Utc>,
    pub amount: Amount,
}

/// A fixed-rate amortized loan.
///
/// The loan refers to the account paying it back, but doesn't own it. Only
/// the loan itself changes its remaining balance, and it is never clamped:
/// overpaying near the end of the loan leaves a negative balance, and nothing
/// ever marks a loan as closed.
#[derive(Debug, Clone, PartialEq)]
pub struct Loan {
    payer: AccountId,
    principal: Amount,
    interest_rate: Amount,
    term_years: u32,
    monthly_payment: Amount,
    remaining_balance: Amount,
    payment_history: Vec<Payment>,
}

impl Loan {
    /// The monthly payment is computed here once, and never again.
    pub fn new(
        payer: AccountId,
        principal: Amount,
        interest_rate: Amount,
        term_years: u32,
    ) -> Result<Self, LedgerError> {
        let principal = round(principal);
        if principal <= dec!(0) {
            return Err(LedgerError::InvalidAmount);
        }
        let monthly_payment = calculate_monthly_payment(principal, interest_rate, term_years)?;

        Ok(Self {
            payer,
            principal,
            interest_rate,
            term_years,
            monthly_payment,
            remaining_balance: principal,
            payment_history: Vec::new(),
        })
    }

    /// Pay at least the monthly payment. Anything above it goes straight to
    /// the remaining balance.
    pub fn make_payment(&mut self, amount: Amount, now: DateTime<Utc>) -> Result<(), LedgerError> {
        let amount = round(amount);
        if amount < self.monthly_payment {
            return Err(LedgerError::PaymentTooSmall {
                required: self.monthly_payment,
            });
        }

        self.remaining_balance = self
            .remaining_balance
            .checked_sub(amount)
            .ok_or(LedgerError::Overflow)?;
        self.payment_history.push(Payment {
            timestamp: now,
            amount,
        });

        Ok(())
    }

    pub fn get_balance(&self) -> Amount {
        self.remaining_balance
    }

    pub fn payer(&self) -> AccountId {
        self.payer
    }

    pub fn principal(&self) -> Amount {
        self.principal
    }

    pub fn interest_rate(&self) -> Amount {
        self.interest_rate
    }

    pub fn term_years(&self) -> u32 {
        self.term_years
    }

    pub fn monthly_payment(&self) -> Amount {
        self.monthly_payment
    }

    pub fn payment_history(&self) -> &[Payment] {
        &self.payment_history
    }
}

/// Standard fixed-rate amortization:
/// `payment = principal * r / (1 - (1 + r)^-n)`, with `r` the monthly rate
/// and `n` the number of monthly payments.
///
/// The formula is undefined for a zero monthly rate, in which case the
/// principal is simply spread evenly over the months. That includes annual
/// rates too small for their twelfth to show up in a `Decimal`.
pub fn calculate_monthly_payment(
    principal: Amount,
    annual_rate: Amount,
    term_years: u32,
) -> Result<Amount, LedgerError> {
    if term_years == 0 {
        return Err(LedgerError::InvalidTerm);
    }
    let months = u64::from(term_years) * 12;
    let monthly_rate = annual_rate / dec!(12);

    if monthly_rate.is_zero() {
        let payment = principal
            .checked_div(Decimal::from(months))
            .ok_or(LedgerError::Overflow)?;
        return Ok(round(payment));
    }

    let growth = (Decimal::ONE + monthly_rate)
        .checked_powu(months)
        .ok_or(LedgerError::Overflow)?;

    // Multiplying through by (1 + r)^n avoids a negative exponent:
    // principal * r * (1 + r)^n / ((1 + r)^n - 1)
    let payment = principal
        .checked_mul(monthly_rate)
        .and_then(|p| p.checked_mul(growth))
        .and_then(|p| p.checked_div(growth - Decimal::ONE))
        .ok_or(LedgerError::Overflow)?;

    Ok(round(payment))
}
