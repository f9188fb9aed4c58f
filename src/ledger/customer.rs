use super::loan::Payment;
use super::{AccountId, Amount, CustomerId, Ledger, LedgerError, LoanId};
use crate::error_handler::report;

/// A customer binds a name to an account, and at most one active loan.
///
/// The account and the loan live in the ledger; the customer only holds
/// their ids.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    name: String,
    account: AccountId,
    loan: Option<LoanId>,
}

/// What a customer looks like at a point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerSummary {
    pub name: String,
    pub balance: Amount,
    pub loan_balance: Option<Amount>,
    pub payments: Vec<Payment>,
}

impl Customer {
    pub fn new(name: impl Into<String>, account: AccountId) -> Self {
        Self {
            name: name.into(),
            account,
            loan: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn account(&self) -> AccountId {
        self.account
    }

    pub fn loan(&self) -> Option<LoanId> {
        self.loan
    }

    /// Take out a loan paid back by the customer's account.
    ///
    /// A new loan replaces the current one, if any. The old loan stays in
    /// the ledger; the customer just stops pointing at it.
    pub fn apply_for_loan(
        &mut self,
        ledger: &mut Ledger,
        amount: Amount,
        interest_rate: Amount,
        term_years: u32,
    ) -> Result<LoanId, LedgerError> {
        let loan = ledger.issue_loan(self.account, amount, interest_rate, term_years)?;
        self.loan = Some(loan);

        Ok(loan)
    }

    pub fn make_loan_payment(&self, ledger: &mut Ledger, amount: Amount) -> Result<(), LedgerError> {
        match self.loan {
            Some(loan) => ledger.pay_loan(loan, amount),
            None => report("loan payment", self.account, Err(LedgerError::NoLoanBound)),
        }
    }

    pub fn show_account_info(&self, ledger: &Ledger) -> Result<CustomerSummary, LedgerError> {
        let balance = ledger.get_balance(self.account)?;
        let (loan_balance, payments) = match self.loan {
            Some(id) => {
                let loan = ledger.loan(id)?;
                (Some(loan.get_balance()), loan.payment_history().to_vec())
            }
            None => (None, Vec::new()),
        };

        Ok(CustomerSummary {
            name: self.name.clone(),
            balance,
            loan_balance,
            payments,
        })
    }
}

/// Look up a customer by id.
pub fn find(customers: &[Customer], id: CustomerId) -> Result<&Customer, LedgerError> {
    customers.get(id).ok_or(LedgerError::UnknownCustomer(id))
}
