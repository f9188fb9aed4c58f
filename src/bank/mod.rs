//! The bank: a registry of accounts, loans and customers on top of the
//! ledger, and the analytics that run over that registry.
//!
//! Registration only ever adds. The registry is a multiset: registering the
//! same account twice counts it twice in every total, and it's up to the
//! caller not to do that if it isn't wanted.

pub mod performance;
pub mod report;
pub mod risk;
pub mod workload;

use crate::clock::Clock;
use crate::ledger::{
    account::Account,
    customer::{self, Customer},
    AccountId, Amount, CustomerId, Ledger, LedgerError, LoanId,
};

use rust_decimal_macros::dec;

pub struct Bank {
    name: String,
    ledger: Ledger,
    accounts: Vec<AccountId>,
    loans: Vec<LoanId>,
    customers: Vec<Customer>,
}

impl Bank {
    pub fn new(name: impl Into<String>, clock: impl Clock + 'static) -> Self {
        Self {
            name: name.into(),
            ledger: Ledger::new(clock),
            accounts: Vec::new(),
            loans: Vec::new(),
            customers: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Direct access to the ledger, to operate on accounts and loans.
    pub fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    /// Open an account in the ledger. It isn't registered with the bank
    /// until it's added, directly or through a customer.
    pub fn open_account(&mut self, account: Account) -> AccountId {
        self.ledger.open(account)
    }

    pub fn add_account(&mut self, id: AccountId) -> Result<(), LedgerError> {
        self.ledger.account(id)?;
        self.accounts.push(id);

        Ok(())
    }

    /// Register a customer, along with their account and loan, if any.
    pub fn add_customer(&mut self, customer: Customer) -> Result<CustomerId, LedgerError> {
        self.ledger.account(customer.account())?;
        if let Some(loan) = customer.loan() {
            self.ledger.loan(loan)?;
            self.loans.push(loan);
        }
        self.accounts.push(customer.account());
        self.customers.push(customer);

        Ok(self.customers.len() - 1)
    }

    /// Apply for a loan on behalf of a registered customer. The new loan is
    /// registered with the bank; a loan it replaces stays registered.
    pub fn apply_for_loan(
        &mut self,
        customer: CustomerId,
        amount: Amount,
        interest_rate: Amount,
        term_years: u32,
    ) -> Result<LoanId, LedgerError> {
        let customer = self
            .customers
            .get_mut(customer)
            .ok_or(LedgerError::UnknownCustomer(customer))?;
        let loan = customer.apply_for_loan(&mut self.ledger, amount, interest_rate, term_years)?;
        self.loans.push(loan);

        Ok(loan)
    }

    pub fn make_loan_payment(&mut self, customer: CustomerId, amount: Amount) -> Result<(), LedgerError> {
        let customer = customer::find(&self.customers, customer)?;
        customer.make_loan_payment(&mut self.ledger, amount)
    }

    pub fn customer(&self, id: CustomerId) -> Result<&Customer, LedgerError> {
        customer::find(&self.customers, id)
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn registered_accounts(&self) -> &[AccountId] {
        &self.accounts
    }

    pub fn registered_loans(&self) -> &[LoanId] {
        &self.loans
    }

    /// Sum of the balances of every registered account.
    pub fn get_total_balance(&self) -> Amount {
        self.accounts
            .iter()
            .filter_map(|id| self.ledger.get_balance(*id).ok())
            .fold(dec!(0), |total, balance| total + balance)
    }

    /// Sum of the remaining balances of every registered loan.
    pub fn get_total_loan_balance(&self) -> Amount {
        self.loans
            .iter()
            .filter_map(|id| self.ledger.loan(*id).ok())
            .fold(dec!(0), |total, loan| total + loan.get_balance())
    }
}
