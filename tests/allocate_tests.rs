use rebalance::allocate;
use rebalance::config::TargetAllocation;
use rebalance::error::AllocationError;
use rebalance::input::RawArgs;
use rebalance::report::{render_text, INSUFFICIENT_WARNING};
use rust_decimal::Decimal;
use std::str::FromStr;

fn raw(a: &str, d: &str, fa: &str, fb: &str) -> RawArgs {
    RawArgs {
        account_balance: a.to_string(),
        deposit_amount: d.to_string(),
        fund_a_amount: fa.to_string(),
        fund_b_amount: fb.to_string(),
    }
}

#[test]
fn test_allocate_balanced_deposit() {
    let target = TargetAllocation::default();
    let (input, result) = allocate(raw("1000.00", "100.00", "950.00", "50.00"), &target).unwrap();

    assert_eq!(input.deposit_amount, Decimal::from(100));
    assert_eq!(result.amount_to_deposit_a, Decimal::from(95));
    assert_eq!(result.amount_to_deposit_b, Decimal::from(5));
    assert!(!result.insufficient_to_rebalance);

    let report = render_text(&input, &result, &target);
    assert!(report.contains("Deposit Amounts:"));
    assert!(!report.contains(INSUFFICIENT_WARNING));
}

#[test]
fn test_allocate_insufficient_deposit_report() {
    let target = TargetAllocation::default();
    let (input, result) = allocate(raw("1000", "10", "900", "100"), &target).unwrap();

    assert!(result.insufficient_to_rebalance);

    let report = render_text(&input, &result, &target);
    assert!(report.contains(INSUFFICIENT_WARNING));
    assert!(report.contains("Account Balance after Deposit: $1010.00"));
    assert!(report.contains("FZROX Balance after Deposit: $959.50"));
    assert!(report.contains("FXNAX Balance after Deposit: $50.50"));
}

#[test]
fn test_allocate_float_prone_values_balance() {
    let target = TargetAllocation::default();
    let result = allocate(raw("0.3", "0", "0.1", "0.2"), &target);

    assert!(result.is_ok());
}

#[test]
fn test_allocate_parse_error_before_balance_check() {
    let target = TargetAllocation::default();
    let result = allocate(raw("1000", "50", "nine hundred", "50"), &target);

    match result {
        Err(AllocationError::Parse { field, value }) => {
            assert_eq!(field, "fund_a_amount");
            assert_eq!(value, "nine hundred");
        }
        _ => panic!("Expected Parse error"),
    }
}

#[test]
fn test_allocate_imbalanced() {
    let target = TargetAllocation::default();
    let err = allocate(raw("1000.00", "50.00", "900.00", "50.00"), &target).unwrap_err();

    assert_eq!(
        err.to_string(),
        "The FZROX and FXNAX balances must sum to the account balance: $900.00 + $50.00 != $1000.00"
    );
}

#[test]
fn test_allocate_custom_target() {
    let target =
        TargetAllocation::from_fund_a_percentage("VTI", "BND", Decimal::from_str("80").unwrap())
            .unwrap();
    let (_, result) = allocate(raw("500", "500", "400", "100"), &target).unwrap();

    assert_eq!(result.target_amount_a, Decimal::from(800));
    assert_eq!(result.target_amount_b, Decimal::from(200));
    assert_eq!(result.amount_to_deposit_a, Decimal::from(400));
    assert_eq!(result.amount_to_deposit_b, Decimal::from(100));
}

#[test]
fn test_allocate_rejects_digits_beyond_decimal_precision() {
    let target = TargetAllocation::default();
    let result = allocate(
        raw(
            "0.12345678901234567890123456789012",
            "0",
            "0.12345678901234567890123456789",
            "0",
        ),
        &target,
    );

    match result {
        Err(AllocationError::Parse { field, .. }) => assert_eq!(field, "account_balance"),
        _ => panic!("Expected Parse error"),
    }
}

#[test]
fn test_allocate_full_precision_difference_is_imbalanced() {
    let target = TargetAllocation::default();
    let result = allocate(
        raw(
            "0.1234567890123456789012345678",
            "0",
            "0.1234567890123456789012345677",
            "0",
        ),
        &target,
    );

    assert!(matches!(result, Err(AllocationError::Imbalanced { .. })));
}
