use super::{performance::AccountPerformance, risk::LoanRisk, Bank};
use crate::ledger::{
    customer::CustomerSummary, loan::Payment, AccountId, Amount, LedgerError, LoanId,
};

use rust_decimal_macros::dec;

/// The bank-wide totals.
#[derive(Debug, Clone, PartialEq)]
pub struct BankSummary {
    pub bank_name: String,
    pub total_balance: Amount,
    pub total_loan_balance: Amount,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BankReport {
    pub summary: BankSummary,
    pub customers: Vec<CustomerSummary>,
}

/// Where one registered loan stands.
#[derive(Debug, Clone, PartialEq)]
pub struct LoanSummary {
    pub loan: LoanId,
    pub holder: String,
    pub principal: Amount,
    pub monthly_payment: Amount,
    pub remaining_balance: Amount,
    pub payments: Vec<Payment>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoanReport {
    pub total_outstanding: Amount,
    pub loans: Vec<LoanSummary>,
}

/// The rendered history of one registered account.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub account: AccountId,
    pub holder: String,
    pub lines: Vec<String>,
}

/// Everything the analytics produce, in one place for the reporting sink.
#[derive(Debug, Clone, PartialEq)]
pub struct Analytics {
    pub report: BankReport,
    pub loans: LoanReport,
    pub performance: Vec<AccountPerformance>,
    pub risk: Vec<LoanRisk>,
    pub statements: Vec<Statement>,
}

impl Bank {
    pub fn analytics(&self) -> Result<Analytics, LedgerError> {
        Ok(Analytics {
            report: self.generate_report()?,
            loans: self.loan_report()?,
            performance: self.account_performance_analysis(),
            risk: self.loan_risk_assessment()?,
            statements: self.statements()?,
        })
    }

    pub fn summary(&self) -> BankSummary {
        BankSummary {
            bank_name: self.name.clone(),
            total_balance: self.get_total_balance(),
            total_loan_balance: self.get_total_loan_balance(),
        }
    }

    /// The totals, and every customer in the order they were added.
    pub fn generate_report(&self) -> Result<BankReport, LedgerError> {
        let customers = self
            .customers
            .iter()
            .map(|customer| customer.show_account_info(&self.ledger))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(BankReport {
            summary: self.summary(),
            customers,
        })
    }

    /// Every registered loan, in registration order, with its payments.
    pub fn loan_report(&self) -> Result<LoanReport, LedgerError> {
        let mut total_outstanding = dec!(0);
        let mut loans = Vec::with_capacity(self.loans.len());

        for &id in &self.loans {
            let loan = self.ledger.loan(id)?;
            let holder = self.ledger.account(loan.payer())?.holder();
            total_outstanding += loan.get_balance();

            loans.push(LoanSummary {
                loan: id,
                holder: holder.to_string(),
                principal: loan.principal(),
                monthly_payment: loan.monthly_payment(),
                remaining_balance: loan.get_balance(),
                payments: loan.payment_history().to_vec(),
            });
        }

        Ok(LoanReport {
            total_outstanding,
            loans,
        })
    }

    /// One statement per registered account, in registration order. An
    /// account registered twice still gets a single statement.
    pub fn statements(&self) -> Result<Vec<Statement>, LedgerError> {
        let mut seen = Vec::with_capacity(self.accounts.len());
        let mut statements = Vec::new();

        for &id in &self.accounts {
            if seen.contains(&id) {
                continue;
            }
            seen.push(id);

            let account = self.ledger.account(id)?;
            statements.push(Statement {
                account: id,
                holder: account.holder().to_string(),
                lines: account.statement(),
            });
        }

        Ok(statements)
    }
}

#[cfg(test)]
mod report_tests {
    use super::{BankSummary, LoanSummary, Statement};
    use crate::bank::bank_tests::bank;
    use crate::ledger::{account::Account, customer::Customer, customer::CustomerSummary};

    use rust_decimal_macros::dec;

    #[test]
    fn test_generate_report() {
        let mut bank = bank();
        let alice = bank.open_account(Account::standard("Alice", dec!(1000)));
        let charlie = bank.open_account(Account::savings("Charlie", dec!(5000), dec!(0.02)));
        let frank = bank.open_account(Account::credit_card("Frank", dec!(5000)));
        bank.add_account(frank).unwrap();

        let alice = bank.add_customer(Customer::new("Alice", alice)).unwrap();
        bank.add_customer(Customer::new("Charlie", charlie)).unwrap();
        bank.apply_for_loan(alice, dec!(5000), dec!(0.05), 5).unwrap();

        let report = bank.generate_report().unwrap();
        assert_eq!(
            BankSummary {
                bank_name: "Greatest Bank".to_string(),
                total_balance: dec!(6000),
                total_loan_balance: dec!(5000),
            },
            report.summary
        );
        assert_eq!(
            vec![
                CustomerSummary {
                    name: "Alice".to_string(),
                    balance: dec!(1000),
                    loan_balance: Some(dec!(5000)),
                    payments: vec![],
                },
                CustomerSummary {
                    name: "Charlie".to_string(),
                    balance: dec!(5000),
                    loan_balance: None,
                    payments: vec![],
                },
            ],
            report.customers
        );
    }

    #[test]
    fn test_loan_report() {
        let mut bank = bank();
        let alice = bank.open_account(Account::standard("Alice", dec!(1000)));
        let bob = bank.open_account(Account::standard("Bob", dec!(1500)));
        let alice = bank.add_customer(Customer::new("Alice", alice)).unwrap();
        let bob = bank.add_customer(Customer::new("Bob", bob)).unwrap();

        let first = bank.apply_for_loan(alice, dec!(1000), dec!(0), 1).unwrap();
        let second = bank.apply_for_loan(bob, dec!(2400), dec!(0), 2).unwrap();
        bank.make_loan_payment(bob, dec!(400)).unwrap();

        let report = bank.loan_report().unwrap();
        assert_eq!(dec!(3000), report.total_outstanding);
        assert_eq!(2, report.loans.len());

        let LoanSummary {
            loan,
            holder,
            monthly_payment,
            remaining_balance,
            ..
        } = &report.loans[0];
        assert_eq!(first, *loan);
        assert_eq!("Alice", holder.as_str());
        assert_eq!(dec!(83.3333), *monthly_payment);
        assert_eq!(dec!(1000), *remaining_balance);

        assert_eq!(second, report.loans[1].loan);
        assert_eq!("Bob", report.loans[1].holder);
        assert_eq!(dec!(100), report.loans[1].monthly_payment);
        assert_eq!(dec!(2000), report.loans[1].remaining_balance);
        assert_eq!(1, report.loans[1].payments.len());
    }

    #[test]
    // Alice is a customer as well, so her account is registered twice.
    fn test_statements() {
        let mut bank = bank();
        let alice = bank.open_account(Account::standard("Alice", dec!(1000)));
        let bob = bank.open_account(Account::standard("Bob", dec!(1500)));
        bank.add_account(alice).unwrap();
        bank.add_account(bob).unwrap();
        bank.add_customer(Customer::new("Alice", alice)).unwrap();

        bank.ledger_mut().deposit(alice, dec!(50)).unwrap();
        bank.ledger_mut().transfer(alice, bob, dec!(25)).unwrap();

        assert_eq!(
            vec![
                Statement {
                    account: alice,
                    holder: "Alice".to_string(),
                    lines: vec![
                        "2024-01-01 00:00:00 UTC: Deposit of 50".to_string(),
                        "2024-01-01 00:00:00 UTC: Transfer Out of 25".to_string(),
                    ],
                },
                Statement {
                    account: bob,
                    holder: "Bob".to_string(),
                    lines: vec!["2024-01-01 00:00:00 UTC: Transfer In of 25".to_string()],
                },
            ],
            bank.statements().unwrap()
        );
    }

    #[test]
    fn test_empty_reports() {
        let bank = bank();
        let report = bank.generate_report().unwrap();
        assert!(report.customers.is_empty());
        assert_eq!(dec!(0), report.summary.total_balance);

        let loans = bank.loan_report().unwrap();
        assert!(loans.loans.is_empty());
        assert_eq!(dec!(0), loans.total_outstanding);

        assert!(bank.statements().unwrap().is_empty());
    }
}
