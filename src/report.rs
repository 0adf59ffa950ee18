use crate::calculator::AllocationResult;
use crate::config::TargetAllocation;
use crate::input::AllocationInput;
use crate::money::{format_currency, format_percentage, round_to};

use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

pub const INSUFFICIENT_WARNING: &str =
    "DEPOSIT INSUFFICIENT TO REBALANCE ACCOUNT. REBALANCE MANUALLY.";

/// Human-readable report: the summary, then either the per-fund deposit
/// amounts or the manual-rebalance targets.
pub fn render_text(
    input: &AllocationInput,
    result: &AllocationResult,
    target: &TargetAllocation,
) -> String {
    let mut report = summary(input, target);

    if result.insufficient_to_rebalance {
        report.push_str(&insufficient_section(result, target));
    } else {
        report.push_str(&deposit_section(result, target));
    }

    report
}

fn summary(input: &AllocationInput, target: &TargetAllocation) -> String {
    format!(
        "\n-----\
         \nDeposit: {deposit}\
         \n-----\
         \nCurrent Balance: {account}\
         \n{a} Balance: {fund_a}\
         \n{b} Balance: {fund_b}\
         \n-----\
         \nTarget Percentages:\
         \n\t{a}: {pct_a}\
         \n\t{b}: {pct_b}\
         \n-----",
        deposit = format_currency(input.deposit_amount),
        account = format_currency(input.account_balance),
        fund_a = format_currency(input.fund_a_balance),
        fund_b = format_currency(input.fund_b_balance),
        pct_a = format_percentage(target.fund_a_percentage()),
        pct_b = format_percentage(target.fund_b_percentage()),
        a = target.fund_a_name,
        b = target.fund_b_name,
    )
}

fn deposit_section(result: &AllocationResult, target: &TargetAllocation) -> String {
    format!(
        "\nDeposit Amounts:\
         \n\t{} -> {}\
         \n\t{} -> {}",
        format_currency(result.amount_to_deposit_a),
        target.fund_a_name,
        format_currency(result.amount_to_deposit_b),
        target.fund_b_name,
    )
}

fn insufficient_section(result: &AllocationResult, target: &TargetAllocation) -> String {
    format!(
        "\n{}\
         \nTargets:\
         \nAccount Balance after Deposit: {}\
         \n{} Balance after Deposit: {}\
         \n{} Balance after Deposit: {}",
        INSUFFICIENT_WARNING,
        format_currency(result.balance_after_deposit),
        target.fund_a_name,
        format_currency(result.target_amount_a),
        target.fund_b_name,
        format_currency(result.target_amount_b),
    )
}

/// One CSV row per run. Money is rounded to cents, percentages to whole numbers.
#[derive(Debug, Serialize, PartialEq)]
pub struct ReportRecord {
    pub fund_a: String,
    pub fund_b: String,
    pub account_balance: Decimal,
    pub deposit_amount: Decimal,
    pub fund_a_balance: Decimal,
    pub fund_b_balance: Decimal,
    pub fund_a_percentage: Decimal,
    pub fund_b_percentage: Decimal,
    pub balance_after_deposit: Decimal,
    pub target_amount_a: Decimal,
    pub target_amount_b: Decimal,
    pub amount_to_deposit_a: Decimal,
    pub amount_to_deposit_b: Decimal,
    pub insufficient_to_rebalance: bool,
}

impl ReportRecord {
    pub fn new(
        input: &AllocationInput,
        result: &AllocationResult,
        target: &TargetAllocation,
    ) -> Self {
        Self {
            fund_a: target.fund_a_name.clone(),
            fund_b: target.fund_b_name.clone(),
            account_balance: cents(input.account_balance),
            deposit_amount: cents(input.deposit_amount),
            fund_a_balance: cents(input.fund_a_balance),
            fund_b_balance: cents(input.fund_b_balance),
            fund_a_percentage: round_to(target.fund_a_percentage(), 0),
            fund_b_percentage: round_to(target.fund_b_percentage(), 0),
            balance_after_deposit: cents(result.balance_after_deposit),
            target_amount_a: cents(result.target_amount_a),
            target_amount_b: cents(result.target_amount_b),
            amount_to_deposit_a: cents(result.amount_to_deposit_a),
            amount_to_deposit_b: cents(result.amount_to_deposit_b),
            insufficient_to_rebalance: result.insufficient_to_rebalance,
        }
    }
}

fn cents(amount: Decimal) -> Decimal {
    let mut rounded = round_to(amount, 2);
    rounded.rescale(2);
    rounded
}

/// Writes a header and a single record.
pub fn write_csv<W: Write>(
    writer: W,
    input: &AllocationInput,
    result: &AllocationResult,
    target: &TargetAllocation,
) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.serialize(ReportRecord::new(input, result, target))?;
    wtr.flush()?;
    Ok(())
}
