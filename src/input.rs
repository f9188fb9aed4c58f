use crate::ledger::{
    account::{self, Account},
    Amount, LedgerError,
};

use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, PartialEq)]
pub enum Error {
    Csv(String),    // CSV is malformed
    Format(String), // Data format is incorrect
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<<AccountRecord as TryInto<Opening>>::Error> for Error {
    fn from(err: <AccountRecord as TryInto<Opening>>::Error) -> Self {
        Self::Format(err.to_string())
    }
}

/// The kind of account to open, with its parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Product {
    Standard,
    Savings { interest_rate: Amount },
    Checking { overdraft_limit: Amount },
    FixedDeposit { term_years: u32, interest_rate: Amount },
    CreditCard { credit_limit: Amount },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanTerms {
    pub amount: Amount,
    pub interest_rate: Amount,
    pub term_years: u32,
}

/// One account of the opening population, and what the bank should do with
/// it: register it on its own, or as a customer's account, possibly with a
/// loan.
#[derive(Debug, Clone, PartialEq)]
pub struct Opening {
    pub holder: String,
    pub balance: Amount,
    pub product: Product,
    pub customer: bool,
    pub loan: Option<LoanTerms>,
}

impl Opening {
    /// Open the account. A fixed deposit starts its term now.
    pub fn open(&self, now: DateTime<Utc>) -> Result<Account, LedgerError> {
        let holder = self.holder.as_str();
        let account = match self.product {
            Product::Standard => Account::standard(holder, self.balance),
            Product::Savings { interest_rate } => {
                Account::savings(holder, self.balance, interest_rate)
            }
            Product::Checking { overdraft_limit } => {
                Account::checking(holder, self.balance, overdraft_limit)
            }
            Product::FixedDeposit {
                term_years,
                interest_rate,
            } => Account::fixed_deposit(holder, self.balance, term_years, interest_rate, now)?,
            Product::CreditCard { credit_limit } => Account::credit_card(holder, credit_limit),
        };

        Ok(account)
    }
}

// Bad records don't stop the parsing: every good record is returned, and
// every bad one comes back as an error the caller can report.
// An opening population is small, so everything is read up front.
pub fn parse(input_stream: impl std::io::Read) -> (Vec<Opening>, Vec<Error>) {
    let buffered = std::io::BufReader::new(input_stream);
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(buffered);

    let mut openings = Vec::new();
    let mut errors = Vec::new();
    for record in reader.deserialize::<AccountRecord>() {
        match convert(record) {
            Ok(opening) => openings.push(opening),
            Err(err) => errors.push(err),
        }
    }

    (openings, errors)
}

// Convert from a csv deserialise result into an opening result.
fn convert(record: Result<AccountRecord, csv::Error>) -> Result<Opening, Error> {
    Ok(record?.try_into()?)
}

#[test]
// Parsing well-formed data should return every opening.
fn test_parse_ok() {
    let data = r#"type,holder,balance,rate,limit,term,customer,loan_amount,loan_rate,loan_term
standard,Alice,1000,,,,true,10000,0.05,5
standard,Bob,1500,,,,true,,,
savings,Charlie,5000,0.03,,,,,,
checking,Dave,2000,,750,,false,,,
fixed_deposit,Eve,3000,,,3,,,,
credit_card,Frank,,,2500,,,,,"#;
    let reader = std::io::Cursor::new(data);
    let (openings, errors) = parse(reader);

    assert_eq!(Vec::<Error>::new(), errors);
    assert_eq!(6, openings.len());
    assert_eq!(
        Some(LoanTerms {
            amount: rust_decimal_macros::dec!(10000),
            interest_rate: rust_decimal_macros::dec!(0.05),
            term_years: 5,
        }),
        openings[0].loan
    );
    assert!(openings[1].customer);
    assert!(!openings[2].customer);
}

#[test]
fn test_parse_ok_with_whitespace() {
    let data = r#"type,   holder,  balance,rate,limit,term,customer,loan_amount,loan_rate,loan_term
standard ,  Alice , 1000 ,,,, true ,,,
    checking,Dave,2000,  , 750 ,,,,,"#;
    let reader = std::io::Cursor::new(data);
    let (openings, errors) = parse(reader);

    assert_eq!(0, errors.len());
    assert_eq!("Alice", openings[0].holder);
    assert_eq!(
        Product::Checking {
            overdraft_limit: rust_decimal_macros::dec!(750)
        },
        openings[1].product
    );
}

#[test]
// Bad records are reported, and don't stop the good ones from being read.
fn test_parse_invalid_format() {
    for (data, err_contains) in vec![
        (
            r#"type,holder,balance,rate,limit,term,customer,loan_amount,loan_rate,loan_term
some_unknown_account,Alice,1000,,,,,,,
standard,Bob,1500,,,,,,,"#,
            "unknown variant `some_unknown_account`",
        ),
        (
            r#"type,holder,balance,rate,limit,term,customer,loan_amount,loan_rate,loan_term
standard,Alice,lots,,,,,,,
standard,Bob,1500,,,,,,,"#,
            "lots",
        ),
        (
            r#"type,holder,balance,rate,limit,term,customer,loan_amount,loan_rate,loan_term
fixed_deposit,Alice,1000,,,-3,,,,
standard,Bob,1500,,,,,,,"#,
            "invalid digit",
        ),
        (
            r#"type,holder,balance,rate,limit,term,customer,loan_amount,loan_rate,loan_term
standard,Alice,1000
standard,Bob,1500,,,,,,,"#,
            "found record with 3 fields, but the previous record has 10 fields",
        ),
    ] {
        let reader = std::io::Cursor::new(data);
        let (openings, errors) = parse(reader);

        assert_eq!(1, openings.len());
        assert_eq!("Bob", openings[0].holder);

        assert_eq!(1, errors.len());
        match &errors[0] {
            Error::Csv(msg) => assert!(msg.contains(err_contains), "{:?}", msg),
            _ => panic!("unexpected error"),
        }
    }
}

#[test]
// Records that are well formed but make no sense should fail to convert.
fn test_parse_invalid_data() {
    for (data, want_err) in vec![
        (
            r#"type,holder,balance,rate,limit,term,customer,loan_amount,loan_rate,loan_term
credit_card,Frank,100,,,,,,,"#,
            Error::Format("credit cards open with nothing owed".to_string()),
        ),
        (
            r#"type,holder,balance,rate,limit,term,customer,loan_amount,loan_rate,loan_term
standard,Alice,1000,,,,true,10000,,5"#,
            Error::Format("incomplete loan terms".to_string()),
        ),
        (
            r#"type,holder,balance,rate,limit,term,customer,loan_amount,loan_rate,loan_term
standard,Alice,1000,,,,false,10000,0.05,5"#,
            Error::Format("only customers can take a loan".to_string()),
        ),
    ] {
        let reader = std::io::Cursor::new(data);
        let (openings, errors) = parse(reader);

        assert_eq!(0, openings.len());
        assert_eq!(vec![want_err], errors);
    }
}

// The record mirrors the CSV columns; the Opening is what the rest of the
// crate works with. Every column but the type and the holder is optional,
// and empty columns take the defaults of the account type.
#[derive(Debug, Deserialize)]
pub struct AccountRecord {
    #[serde(rename = "type")]
    account_type: AccountRecordType,

    holder: String,

    balance: Option<Amount>,

    rate: Option<Amount>,

    limit: Option<Amount>,

    #[serde(rename = "term")]
    term_years: Option<u32>,

    customer: Option<bool>,

    loan_amount: Option<Amount>,

    loan_rate: Option<Amount>,

    #[serde(rename = "loan_term")]
    loan_term_years: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountRecordType {
    Standard,
    Savings,
    Checking,
    FixedDeposit,
    CreditCard,
}

impl TryFrom<AccountRecord> for Opening {
    type Error = &'static str;
    fn try_from(record: AccountRecord) -> Result<Self, Self::Error> {
        let balance = record.balance.unwrap_or_default();
        let product = match record.account_type {
            AccountRecordType::Standard => Product::Standard,
            AccountRecordType::Savings => Product::Savings {
                interest_rate: record.rate.unwrap_or(account::DEFAULT_SAVINGS_RATE),
            },
            AccountRecordType::Checking => Product::Checking {
                overdraft_limit: record.limit.unwrap_or(account::DEFAULT_OVERDRAFT_LIMIT),
            },
            AccountRecordType::FixedDeposit => Product::FixedDeposit {
                term_years: record
                    .term_years
                    .unwrap_or(account::DEFAULT_FIXED_DEPOSIT_TERM),
                interest_rate: record.rate.unwrap_or(account::DEFAULT_FIXED_DEPOSIT_RATE),
            },
            AccountRecordType::CreditCard => {
                if !balance.is_zero() {
                    return Err("credit cards open with nothing owed");
                }
                Product::CreditCard {
                    credit_limit: record.limit.unwrap_or(account::DEFAULT_CREDIT_LIMIT),
                }
            }
        };

        let customer = record.customer.unwrap_or(false);
        let loan = match (record.loan_amount, record.loan_rate, record.loan_term_years) {
            (None, None, None) => None,
            (Some(amount), Some(interest_rate), Some(term_years)) => Some(LoanTerms {
                amount,
                interest_rate,
                term_years,
            }),
            _ => return Err("incomplete loan terms"),
        };
        if loan.is_some() && !customer {
            return Err("only customers can take a loan");
        }

        Ok(Self {
            holder: record.holder,
            balance,
            product,
            customer,
            loan,
        })
    }
}

#[test]
// When the records are well formed, empty columns should take the defaults.
fn test_account_record_into_opening_defaults() {
    use rust_decimal_macros::dec;

    let test_cases: Vec<(AccountRecordType, Product)> = vec![
        (AccountRecordType::Standard, Product::Standard),
        (
            AccountRecordType::Savings,
            Product::Savings {
                interest_rate: dec!(0.02),
            },
        ),
        (
            AccountRecordType::Checking,
            Product::Checking {
                overdraft_limit: dec!(500),
            },
        ),
        (
            AccountRecordType::FixedDeposit,
            Product::FixedDeposit {
                term_years: 5,
                interest_rate: dec!(0.04),
            },
        ),
        (
            AccountRecordType::CreditCard,
            Product::CreditCard {
                credit_limit: dec!(5000),
            },
        ),
    ];

    for (account_type, product) in test_cases {
        let record = AccountRecord {
            account_type,
            holder: "Alice".to_string(),
            balance: None,
            rate: None,
            limit: None,
            term_years: None,
            customer: None,
            loan_amount: None,
            loan_rate: None,
            loan_term_years: None,
        };

        assert_eq!(
            Ok(Opening {
                holder: "Alice".to_string(),
                balance: dec!(0),
                product,
                customer: false,
                loan: None,
            }),
            record.try_into()
        );
    }
}

#[test]
fn test_opening_open() {
    use chrono::{Duration, TimeZone};
    use rust_decimal_macros::dec;

    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let opening = Opening {
        holder: "Eve".to_string(),
        balance: dec!(3000),
        product: Product::FixedDeposit {
            term_years: 3,
            interest_rate: dec!(0.04),
        },
        customer: false,
        loan: None,
    };

    let account = opening.open(now).unwrap();
    assert_eq!("Eve", account.holder());
    assert_eq!(dec!(3000), account.get_balance());
    assert_eq!(
        &account::Variant::FixedDeposit {
            term_years: 3,
            interest_rate: dec!(0.04),
            maturity_date: now + Duration::days(365 * 3),
        },
        account.variant()
    );
}
