use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_BANK_NAME: &str = "Greatest Bank";
pub const DEFAULT_TRANSACTIONS: usize = 5;

/// Simulate a retail bank: open the accounts, run a random workload over
/// them, and report on the result as CSV.
#[derive(Parser, Debug, Clone, PartialEq)]
#[clap(author, version, about, long_about = None)]
pub struct Config {
    /// Opening population. The built-in demo population is used when absent.
    #[clap(long, value_parser, value_name = "ACCOUNTS_FILE", value_hint = clap::ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Number of random transactions to generate
    #[clap(long, value_parser, default_value_t = DEFAULT_TRANSACTIONS)]
    pub transactions: usize,

    /// Seed of the workload. A random seed is picked (and logged) when absent.
    #[clap(long, value_parser)]
    pub seed: Option<u64>,

    #[clap(long, value_parser, default_value = DEFAULT_BANK_NAME)]
    pub bank_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: None,
            transactions: DEFAULT_TRANSACTIONS,
            seed: None,
            bank_name: DEFAULT_BANK_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod config_tests {
    use super::Config;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["retail_ledger"]).unwrap();
        assert_eq!(Config::default(), config);
    }

    #[test]
    fn test_all_flags() {
        let config = Config::try_parse_from([
            "retail_ledger",
            "--input",
            "accounts.csv",
            "--transactions",
            "100",
            "--seed",
            "42",
            "--bank-name",
            "Smallest Bank",
        ])
        .unwrap();

        assert_eq!(
            Config {
                input: Some(PathBuf::from("accounts.csv")),
                transactions: 100,
                seed: Some(42),
                bank_name: "Smallest Bank".to_string(),
            },
            config
        );
    }

    #[test]
    fn test_invalid_transactions() {
        assert!(Config::try_parse_from(["retail_ledger", "--transactions", "-1"]).is_err());
    }
}
