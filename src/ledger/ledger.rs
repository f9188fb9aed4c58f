use super::account::Account;
use super::loan::Loan;
use super::{AccountId, Amount, LedgerError, LoanId};
use crate::clock::Clock;
use crate::error_handler::report;

use chrono::{DateTime, Utc};

/// The ledger stores every account and loan, and is the only way to change
/// them once they're opened.
///
/// Accounts and loans are never removed, so their ids (positions in the
/// ledger) stay valid for the life of the ledger.
///
/// Every mutating operation takes `&mut self`: a transfer touches two
/// accounts, and holding the whole ledger exclusively for the duration of
/// the call is what keeps the amount conserved across it.
pub struct Ledger {
    accounts: Vec<Account>,
    loans: Vec<Loan>,
    clock: Box<dyn Clock>,
}

impl Ledger {
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self {
            accounts: Vec::new(),
            loans: Vec::new(),
            clock: Box::new(clock),
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn open(&mut self, account: Account) -> AccountId {
        self.accounts.push(account);
        self.accounts.len() - 1
    }

    pub fn account(&self, id: AccountId) -> Result<&Account, LedgerError> {
        self.accounts.get(id).ok_or(LedgerError::UnknownAccount(id))
    }

    fn account_mut(&mut self, id: AccountId) -> Result<&mut Account, LedgerError> {
        self.accounts
            .get_mut(id)
            .ok_or(LedgerError::UnknownAccount(id))
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn get_balance(&self, id: AccountId) -> Result<Amount, LedgerError> {
        Ok(self.account(id)?.get_balance())
    }

    pub fn deposit(&mut self, id: AccountId, amount: Amount) -> Result<(), LedgerError> {
        let now = self.now();
        let result = self
            .account_mut(id)
            .and_then(|account| account.deposit(amount, now));

        report("deposit", id, result)
    }

    pub fn withdraw(&mut self, id: AccountId, amount: Amount) -> Result<(), LedgerError> {
        let now = self.now();
        let result = self
            .account_mut(id)
            .and_then(|account| account.withdraw(amount, now));

        report("withdraw", id, result)
    }

    /// Transfer between two accounts. The source and the target may be the
    /// same account, in which case both sides are recorded on it.
    pub fn transfer(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let now = self.now();
        let result = if from == to {
            self.account_mut(from)
                .and_then(|account| account.transfer_to_self(amount, now))
        } else {
            self.pair_mut(from, to)
                .and_then(|(source, target)| source.transfer(amount, target, now))
        };

        report("transfer", from, result)
    }

    pub fn make_purchase(&mut self, id: AccountId, amount: Amount) -> Result<(), LedgerError> {
        let now = self.now();
        let result = self
            .account_mut(id)
            .and_then(|account| account.make_purchase(amount, now));

        report("purchase", id, result)
    }

    pub fn make_payment(&mut self, id: AccountId, amount: Amount) -> Result<(), LedgerError> {
        let now = self.now();
        let result = self
            .account_mut(id)
            .and_then(|account| account.make_payment(amount, now));

        report("card payment", id, result)
    }

    pub fn apply_interest(&mut self, id: AccountId) -> Result<Amount, LedgerError> {
        let now = self.now();
        let result = self
            .account_mut(id)
            .and_then(|account| account.apply_interest(now));

        if let Ok(interest) = &result {
            tracing::info!(id, %interest, "interest applied");
        }
        report("interest", id, result)
    }

    /// Issue a loan paid back by the given account.
    pub fn issue_loan(
        &mut self,
        payer: AccountId,
        principal: Amount,
        interest_rate: Amount,
        term_years: u32,
    ) -> Result<LoanId, LedgerError> {
        let result = if payer < self.accounts.len() {
            Loan::new(payer, principal, interest_rate, term_years).map(|loan| {
                self.loans.push(loan);
                self.loans.len() - 1
            })
        } else {
            Err(LedgerError::UnknownAccount(payer))
        };

        if let Ok(loan) = &result {
            tracing::info!(
                payer,
                loan,
                %principal,
                %interest_rate,
                term_years,
                "loan issued"
            );
        }
        report("loan application", payer, result)
    }

    pub fn loan(&self, id: LoanId) -> Result<&Loan, LedgerError> {
        self.loans.get(id).ok_or(LedgerError::UnknownLoan(id))
    }

    pub fn pay_loan(&mut self, id: LoanId, amount: Amount) -> Result<(), LedgerError> {
        let now = self.now();
        let result = self
            .loans
            .get_mut(id)
            .ok_or(LedgerError::UnknownLoan(id))
            .and_then(|loan| loan.make_payment(amount, now));

        report("loan payment", id, result)
    }

    // Borrow two distinct accounts mutably at the same time.
    fn pair_mut(
        &mut self,
        first: AccountId,
        second: AccountId,
    ) -> Result<(&mut Account, &mut Account), LedgerError> {
        debug_assert_ne!(first, second);
        for id in [first, second] {
            if id >= self.accounts.len() {
                return Err(LedgerError::UnknownAccount(id));
            }
        }

        if first < second {
            let (left, right) = self.accounts.split_at_mut(second);
            Ok((&mut left[first], &mut right[0]))
        } else {
            let (left, right) = self.accounts.split_at_mut(first);
            Ok((&mut right[0], &mut left[second]))
        }
    }
}
