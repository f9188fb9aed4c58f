use crate::{
    bank::Bank,
    clock::{Clock, SystemClock},
    config::Config,
    error_handler::report_input,
    input::{self, Opening},
    ledger::{
        account::{self, Account},
        customer::Customer,
        LedgerError,
    },
    output,
};

use rand::{rngs::StdRng, Rng, SeedableRng};
use rust_decimal_macros::dec;
use std::io::{Read, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to write the report: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to set up the bank: {0}")]
    Ledger(#[from] LedgerError),
}

/// Open the population read from `input_stream`, run the workload over it,
/// and write the analytics to `output_stream`.
pub fn run(
    input_stream: impl Read,
    output_stream: impl Write,
    config: &Config,
) -> Result<(), Error> {
    let mut bank = load(input_stream, &config.bank_name, SystemClock)?;
    simulate(&mut bank, output_stream, config)
}

/// Same as `run`, over the built-in demo population.
pub fn run_demo(output_stream: impl Write, config: &Config) -> Result<(), Error> {
    let mut bank = demo(&config.bank_name, SystemClock)?;
    simulate(&mut bank, output_stream, config)
}

/// Open every account of the population. Bad records are reported and
/// skipped, and so are accounts that can't be opened and rejected loan
/// applications.
pub fn load(
    input_stream: impl Read,
    bank_name: &str,
    clock: impl Clock + 'static,
) -> Result<Bank, LedgerError> {
    let (openings, errors) = input::parse(input_stream);
    report_input(&errors);

    let mut bank = Bank::new(bank_name, clock);
    for opening in &openings {
        open(&mut bank, opening)?;
    }
    tracing::info!(
        accounts = bank.registered_accounts().len(),
        customers = bank.customers().len(),
        loans = bank.registered_loans().len(),
        skipped = errors.len(),
        "population opened"
    );

    Ok(bank)
}

fn open(bank: &mut Bank, opening: &Opening) -> Result<(), LedgerError> {
    let now = bank.ledger().now();
    let account = match opening.open(now) {
        Ok(account) => account,
        Err(err) => {
            tracing::warn!(holder = %opening.holder, error = %err, "account not opened");
            return Ok(());
        }
    };
    let id = bank.open_account(account);
    if !opening.customer {
        return bank.add_account(id);
    }

    let customer = bank.add_customer(Customer::new(opening.holder.clone(), id))?;
    if let Some(loan) = opening.loan {
        bank.apply_for_loan(customer, loan.amount, loan.interest_rate, loan.term_years)
            .ok();
    }

    Ok(())
}

/// Six accounts, one of each variant and two standard ones. Alice, Bob and
/// Charlie are customers as well, so their accounts are registered twice.
pub fn demo(bank_name: &str, clock: impl Clock + 'static) -> Result<Bank, LedgerError> {
    let mut bank = Bank::new(bank_name, clock);
    let now = bank.ledger().now();

    let alice = bank.open_account(Account::standard("Alice", dec!(1000)));
    let bob = bank.open_account(Account::standard("Bob", dec!(1500)));
    let charlie = bank.open_account(Account::savings(
        "Charlie",
        dec!(5000),
        account::DEFAULT_SAVINGS_RATE,
    ));
    let dave = bank.open_account(Account::checking(
        "Dave",
        dec!(2000),
        account::DEFAULT_OVERDRAFT_LIMIT,
    ));
    let eve = bank.open_account(Account::fixed_deposit(
        "Eve",
        dec!(3000),
        3,
        account::DEFAULT_FIXED_DEPOSIT_RATE,
        now,
    )?);
    let frank = bank.open_account(Account::credit_card(
        "Frank",
        account::DEFAULT_CREDIT_LIMIT,
    ));
    for id in [alice, bob, charlie, dave, eve, frank] {
        bank.add_account(id)?;
    }

    for (name, id) in [("Alice", alice), ("Bob", bob), ("Charlie", charlie)] {
        bank.add_customer(Customer::new(name, id))?;
    }

    Ok(bank)
}

/// Run the workload over the bank, then write its analytics. A bank with
/// no account skips the workload and still gets its report.
pub fn simulate(bank: &mut Bank, output_stream: impl Write, config: &Config) -> Result<(), Error> {
    let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    tracing::info!(seed, transactions = config.transactions, "running workload");

    let mut rng = StdRng::seed_from_u64(seed);
    if let Err(err) = bank.generate_random_transactions(config.transactions, &mut rng) {
        tracing::warn!(error = %err, "workload skipped");
    }

    output::write(output_stream, &bank.analytics()?)?;

    Ok(())
}
