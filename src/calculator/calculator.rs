use crate::config::TargetAllocation;
use crate::error::AllocationError;
use crate::input::AllocationInput;
use crate::money::{checked_add, checked_mul, checked_sub, format_currency};

use rust_decimal::Decimal;
use tracing::{debug, info};

/// Everything derived from one input under one target allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationResult {
    pub balance_after_deposit: Decimal,
    pub target_amount_a: Decimal,
    pub target_amount_b: Decimal,
    /// Negative when fund A is already above its target.
    pub amount_to_deposit_a: Decimal,
    pub amount_to_deposit_b: Decimal,
    pub insufficient_to_rebalance: bool,
}

pub struct Calculator<'a> {
    target: &'a TargetAllocation,
}

impl<'a> Calculator<'a> {
    pub fn new(target: &'a TargetAllocation) -> Self {
        Self { target }
    }

    pub fn calculate(&self, input: &AllocationInput) -> Result<AllocationResult, AllocationError> {
        check_balances(input, self.target)?;

        let balance_after_deposit = checked_add(
            input.account_balance,
            input.deposit_amount,
            "balance after deposit",
        )?;
        let target_amount_a = checked_mul(
            balance_after_deposit,
            self.target.fund_a_fraction(),
            "fund A target",
        )?;
        let target_amount_b = checked_mul(
            balance_after_deposit,
            self.target.fund_b_fraction(),
            "fund B target",
        )?;

        // Each fund is checked on its own; either one can raise the flag.
        let mut insufficient_to_rebalance = false;
        let amount_to_deposit_a = amount_to_deposit(
            target_amount_a,
            input.fund_a_balance,
            input.deposit_amount,
            &mut insufficient_to_rebalance,
        )?;
        let amount_to_deposit_b = amount_to_deposit(
            target_amount_b,
            input.fund_b_balance,
            input.deposit_amount,
            &mut insufficient_to_rebalance,
        )?;

        let result = AllocationResult {
            balance_after_deposit,
            target_amount_a,
            target_amount_b,
            amount_to_deposit_a,
            amount_to_deposit_b,
            insufficient_to_rebalance,
        };

        debug!(?input, ?result, "computed allocation");
        if insufficient_to_rebalance {
            info!(
                deposit = %input.deposit_amount,
                to_fund_a = %amount_to_deposit_a,
                to_fund_b = %amount_to_deposit_b,
                "deposit is too small to reach the target allocation"
            );
        }

        Ok(result)
    }
}

/// Fails unless the two fund balances add up to the account balance exactly.
pub fn check_balances(
    input: &AllocationInput,
    target: &TargetAllocation,
) -> Result<(), AllocationError> {
    let funds_total = checked_add(input.fund_a_balance, input.fund_b_balance, "fund total")?;

    if funds_total != input.account_balance {
        return Err(AllocationError::Imbalanced {
            fund_a_name: target.fund_a_name.clone(),
            fund_b_name: target.fund_b_name.clone(),
            fund_a: format_currency(input.fund_a_balance),
            fund_b: format_currency(input.fund_b_balance),
            account: format_currency(input.account_balance),
        });
    }

    Ok(())
}

/// Amount that lands `current` on `target`. Sets `insufficient` when the
/// deposit alone can't cover it; never clears it.
pub fn amount_to_deposit(
    target: Decimal,
    current: Decimal,
    deposit: Decimal,
    insufficient: &mut bool,
) -> Result<Decimal, AllocationError> {
    let diff = checked_sub(target, current, "amount to deposit")?;

    if deposit < diff {
        *insufficient = true;
    }

    Ok(diff)
}
