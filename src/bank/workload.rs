use super::Bank;
use crate::ledger::{AccountId, Amount, LedgerError};

use rand::Rng;

/// Generated amounts are whole numbers in this inclusive range.
pub const MIN_AMOUNT: i64 = 50;
pub const MAX_AMOUNT: i64 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Deposit,
    Withdraw,
    /// The target is drawn independently, and may be the source itself.
    Transfer { target: AccountId },
}

/// One generated operation, and whether the ledger accepted it.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedTransaction {
    pub account: AccountId,
    pub operation: Operation,
    pub amount: Amount,
    pub outcome: Result<(), LedgerError>,
}

impl GeneratedTransaction {
    pub fn is_applied(&self) -> bool {
        self.outcome.is_ok()
    }
}

impl Bank {
    /// Apply `count` random deposits, withdrawals and transfers to the
    /// registered accounts.
    ///
    /// Rejected operations are part of the workload: they are returned with
    /// their error and the run goes on. The only failure of the whole call is
    /// having no registered account to pick from when `count` isn't zero.
    ///
    /// Given the same random stream and the same clock, the workload is the
    /// same.
    pub fn generate_random_transactions<R: Rng>(
        &mut self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<GeneratedTransaction>, LedgerError> {
        if count == 0 {
            return Ok(Vec::new());
        }
        if self.accounts.is_empty() {
            return Err(LedgerError::NoAccounts);
        }

        let mut generated = Vec::with_capacity(count);
        for _ in 0..count {
            let account = self.accounts[rng.gen_range(0..self.accounts.len())];
            let choice = rng.gen_range(0..3);
            let amount = Amount::from(rng.gen_range(MIN_AMOUNT..=MAX_AMOUNT));

            let (operation, outcome) = match choice {
                0 => (Operation::Deposit, self.ledger.deposit(account, amount)),
                1 => (Operation::Withdraw, self.ledger.withdraw(account, amount)),
                _ => {
                    let target = self.accounts[rng.gen_range(0..self.accounts.len())];
                    (
                        Operation::Transfer { target },
                        self.ledger.transfer(account, target, amount),
                    )
                }
            };

            generated.push(GeneratedTransaction {
                account,
                operation,
                amount,
                outcome,
            });
        }

        tracing::debug!(
            generated = generated.len(),
            rejected = generated.iter().filter(|tx| !tx.is_applied()).count(),
            "workload applied"
        );

        Ok(generated)
    }
}

#[cfg(test)]
mod workload_tests {
    use super::{GeneratedTransaction, Operation, MAX_AMOUNT, MIN_AMOUNT};
    use crate::bank::{bank_tests::bank, Bank};
    use crate::ledger::{account::Account, Amount, LedgerError};

    use rand::{rngs::mock::StepRng, rngs::StdRng, SeedableRng};
    use rust_decimal_macros::dec;

    fn populated() -> Bank {
        let mut bank = bank();
        for account in vec![
            Account::standard("Alice", dec!(1000)),
            Account::standard("Bob", dec!(1500)),
            Account::savings("Charlie", dec!(5000), dec!(0.02)),
            Account::checking("Dave", dec!(2000), dec!(500)),
            Account::credit_card("Frank", dec!(5000)),
        ] {
            let id = bank.open_account(account);
            bank.add_account(id).unwrap();
        }
        bank
    }

    #[test]
    fn test_no_accounts() {
        let mut bank = bank();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            Err(LedgerError::NoAccounts),
            bank.generate_random_transactions(5, &mut rng)
        );
    }

    #[test]
    fn test_zero_transactions() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(Ok(vec![]), populated().generate_random_transactions(0, &mut rng));

        // Nothing is picked, so an empty bank is fine too.
        assert_eq!(Ok(vec![]), bank().generate_random_transactions(0, &mut rng));
    }

    #[test]
    // A random stream stuck at zero always picks the lowest option.
    fn test_selection_follows_the_stream() {
        let mut bank = populated();
        let mut rng = StepRng::new(0, 0);

        let generated = bank.generate_random_transactions(3, &mut rng).unwrap();
        let want = GeneratedTransaction {
            account: 0,
            operation: Operation::Deposit,
            amount: Amount::from(MIN_AMOUNT),
            outcome: Ok(()),
        };
        assert_eq!(vec![want.clone(), want.clone(), want], generated);
        assert_eq!(Ok(dec!(1150)), bank.ledger().get_balance(0));
    }

    #[test]
    fn test_same_seed_same_workload() {
        let mut first = populated();
        let mut second = populated();

        let a = first
            .generate_random_transactions(50, &mut StdRng::seed_from_u64(42))
            .unwrap();
        let b = second
            .generate_random_transactions(50, &mut StdRng::seed_from_u64(42))
            .unwrap();

        assert_eq!(a, b);
        assert_eq!(first.get_total_balance(), second.get_total_balance());
    }

    #[test]
    fn test_amounts_and_accounts_in_range() {
        let mut bank = populated();
        let mut rng = StdRng::seed_from_u64(1);
        let registered = bank.registered_accounts().to_vec();

        for tx in bank.generate_random_transactions(200, &mut rng).unwrap() {
            assert!(tx.amount >= Amount::from(MIN_AMOUNT));
            assert!(tx.amount <= Amount::from(MAX_AMOUNT));
            assert!(tx.amount.fract().is_zero());
            assert!(registered.contains(&tx.account));
            if let Operation::Transfer { target } = tx.operation {
                assert!(registered.contains(&target));
            }
        }
    }

    #[test]
    // Transfers move money between registered accounts, so only accepted
    // deposits and withdrawals change the total.
    fn test_net_change() {
        let mut bank = bank();
        for account in vec![
            Account::standard("Alice", dec!(1000)),
            Account::standard("Bob", dec!(1500)),
            Account::savings("Charlie", dec!(5000), dec!(0.02)),
            Account::checking("Dave", dec!(2000), dec!(500)),
        ] {
            let id = bank.open_account(account);
            bank.add_account(id).unwrap();
        }
        let before = bank.get_total_balance();

        let generated = bank
            .generate_random_transactions(100, &mut StdRng::seed_from_u64(3))
            .unwrap();

        let net = generated
            .iter()
            .filter(|tx| tx.is_applied())
            .fold(dec!(0), |net, tx| match tx.operation {
                Operation::Deposit => net + tx.amount,
                Operation::Withdraw => net - tx.amount,
                Operation::Transfer { .. } => net,
            });
        assert_eq!(before + net, bank.get_total_balance());
    }
}
