use crate::bank::{
    performance::AccountPerformance,
    report::{Analytics, LoanSummary, Statement},
    risk::LoanRisk,
};
use crate::ledger::{customer::CustomerSummary, AccountId, Amount, LoanId};

use serde::Serialize;
use std::io::{self, Write};

#[derive(Serialize)]
struct SummaryRecord<'a> {
    #[serde(rename = "bank")]
    bank_name: &'a str,

    total_balance: Amount,

    total_loan_balance: Amount,
}

#[derive(Serialize)]
struct CustomerRecord<'a> {
    #[serde(rename = "customer")]
    name: &'a str,

    balance: Amount,

    loan_balance: Option<Amount>,

    #[serde(rename = "payments")]
    payment_count: usize,
}

impl<'a> From<&'a CustomerSummary> for CustomerRecord<'a> {
    fn from(customer: &'a CustomerSummary) -> Self {
        Self {
            name: &customer.name,
            balance: customer.balance,
            loan_balance: customer.loan_balance,
            payment_count: customer.payments.len(),
        }
    }
}

#[derive(Serialize)]
struct LoanRecord<'a> {
    loan: LoanId,

    holder: &'a str,

    principal: Amount,

    monthly_payment: Amount,

    remaining_balance: Amount,

    #[serde(rename = "payments")]
    payment_count: usize,
}

impl<'a> From<&'a LoanSummary> for LoanRecord<'a> {
    fn from(loan: &'a LoanSummary) -> Self {
        Self {
            loan: loan.loan,
            holder: &loan.holder,
            principal: loan.principal,
            monthly_payment: loan.monthly_payment,
            remaining_balance: loan.remaining_balance,
            payment_count: loan.payments.len(),
        }
    }
}

#[derive(Serialize)]
struct PaymentRecord {
    loan: LoanId,

    timestamp: String,

    amount: Amount,
}

#[derive(Serialize)]
struct PerformanceRecord {
    #[serde(rename = "type")]
    kind: &'static str,

    accounts: usize,

    total_balance: Amount,
}

#[derive(Serialize)]
struct RiskRecord<'a> {
    loan: LoanId,

    holder: &'a str,

    loan_balance: Amount,

    payer_balance: Amount,

    // Two decimals, or "undefined" when the payer's balance is zero.
    risk: String,

    high_risk: bool,
}

#[derive(Serialize)]
struct StatementRecord<'a> {
    account: AccountId,

    holder: &'a str,

    entry: &'a str,
}

impl<'a> From<&'a LoanRisk> for RiskRecord<'a> {
    fn from(risk: &'a LoanRisk) -> Self {
        Self {
            loan: risk.loan,
            holder: &risk.holder,
            loan_balance: risk.loan_balance,
            payer_balance: risk.payer_balance,
            risk: match risk.risk {
                Ok(ratio) => format!("{:.2}", ratio),
                Err(_) => "undefined".to_string(),
            },
            high_risk: risk.is_high_risk(),
        }
    }
}

// Writes the analytics to the given stream, one CSV table per section.
// Each section starts with a `# <section>` line, then a header row (unless
// the section is empty).
pub fn write(mut output_stream: impl Write, analytics: &Analytics) -> Result<(), io::Error> {
    let summary = &analytics.report.summary;
    write_section(
        &mut output_stream,
        "summary",
        [SummaryRecord {
            bank_name: &summary.bank_name,
            total_balance: summary.total_balance,
            total_loan_balance: summary.total_loan_balance,
        }],
    )?;
    write_section(
        &mut output_stream,
        "customers",
        analytics.report.customers.iter().map(CustomerRecord::from),
    )?;
    write_section(
        &mut output_stream,
        "loans",
        analytics.loans.loans.iter().map(LoanRecord::from),
    )?;
    write_section(
        &mut output_stream,
        "payments",
        analytics.loans.loans.iter().flat_map(|loan| {
            loan.payments.iter().map(move |payment| PaymentRecord {
                loan: loan.loan,
                timestamp: payment.timestamp.to_rfc3339(),
                amount: payment.amount,
            })
        }),
    )?;
    write_section(
        &mut output_stream,
        "performance",
        analytics.performance.iter().map(|p: &AccountPerformance| PerformanceRecord {
            kind: p.kind,
            accounts: p.accounts,
            total_balance: p.total_balance,
        }),
    )?;
    write_section(
        &mut output_stream,
        "risk",
        analytics.risk.iter().map(RiskRecord::from),
    )?;
    write_section(
        &mut output_stream,
        "statements",
        analytics.statements.iter().flat_map(|statement: &Statement| {
            statement.lines.iter().map(move |line| StatementRecord {
                account: statement.account,
                holder: &statement.holder,
                entry: line,
            })
        }),
    )?;

    output_stream.flush()
}

fn write_section<R: Serialize>(
    output_stream: &mut impl Write,
    title: &str,
    records: impl IntoIterator<Item = R>,
) -> Result<(), io::Error> {
    writeln!(output_stream, "# {}", title)?;

    let mut writer = csv::Writer::from_writer(&mut *output_stream);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()
}
