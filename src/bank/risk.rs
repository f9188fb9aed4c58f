use super::Bank;
use crate::ledger::{Amount, LedgerError, LoanId};

use rust_decimal_macros::dec;

/// A loan is high risk when what's left to pay is more than this share of
/// the payer's balance.
pub const HIGH_RISK_THRESHOLD: Amount = dec!(0.75);

/// The risk of one registered loan.
///
/// The ratio is an error when the payer's balance is zero. Such a loan is
/// never flagged.
#[derive(Debug, Clone, PartialEq)]
pub struct LoanRisk {
    pub loan: LoanId,
    pub holder: String,
    pub loan_balance: Amount,
    pub payer_balance: Amount,
    pub risk: Result<Amount, LedgerError>,
}

impl LoanRisk {
    pub fn is_high_risk(&self) -> bool {
        matches!(self.risk, Ok(risk) if risk > HIGH_RISK_THRESHOLD)
    }
}

/// Remaining loan balance over the payer's balance. Neither is clamped, so
/// an overpaid loan or an overdrawn payer give a negative ratio.
pub fn risk_ratio(loan_balance: Amount, payer_balance: Amount) -> Result<Amount, LedgerError> {
    if payer_balance.is_zero() {
        return Err(LedgerError::DivisionByZero);
    }

    loan_balance
        .checked_div(payer_balance)
        .ok_or(LedgerError::Overflow)
}

impl Bank {
    /// Every registered loan in registration order, high risk or not. Use
    /// `LoanRisk::is_high_risk` to pick out the flagged ones.
    pub fn loan_risk_assessment(&self) -> Result<Vec<LoanRisk>, LedgerError> {
        self.loans
            .iter()
            .map(|&id| -> Result<LoanRisk, LedgerError> {
                let loan = self.ledger.loan(id)?;
                let payer = self.ledger.account(loan.payer())?;
                let risk = risk_ratio(loan.get_balance(), payer.get_balance());
                if let Err(err) = &risk {
                    tracing::debug!(loan = id, error = %err, "risk undefined");
                }

                Ok(LoanRisk {
                    loan: id,
                    holder: payer.holder().to_string(),
                    loan_balance: loan.get_balance(),
                    payer_balance: payer.get_balance(),
                    risk,
                })
            })
            .collect()
    }
}
