use crate::error::AllocationError;
use crate::money::parse_decimal;

use rust_decimal::Decimal;

/// Balances for one run, as exact decimals. Immutable once collected.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationInput {
    pub account_balance: Decimal,
    pub deposit_amount: Decimal,
    pub fund_a_balance: Decimal,
    pub fund_b_balance: Decimal,
}

/// The four positional values exactly as they arrived at the boundary.
#[derive(Debug, Clone)]
pub struct RawArgs {
    pub account_balance: String,
    pub deposit_amount: String,
    pub fund_a_amount: String,
    pub fund_b_amount: String,
}

impl TryFrom<RawArgs> for AllocationInput {
    type Error = AllocationError;

    // Only checks that each value is a number; balance consistency is the
    // calculator's job.
    fn try_from(raw: RawArgs) -> Result<Self, Self::Error> {
        Ok(AllocationInput {
            account_balance: parse_decimal("account_balance", &raw.account_balance)?,
            deposit_amount: parse_decimal("deposit_amount", &raw.deposit_amount)?,
            fund_a_balance: parse_decimal("fund_a_amount", &raw.fund_a_amount)?,
            fund_b_balance: parse_decimal("fund_b_amount", &raw.fund_b_amount)?,
        })
    }
}

impl AllocationInput {
    pub fn new(
        account_balance: Decimal,
        deposit_amount: Decimal,
        fund_a_balance: Decimal,
        fund_b_balance: Decimal,
    ) -> Self {
        Self {
            account_balance,
            deposit_amount,
            fund_a_balance,
            fund_b_balance,
        }
    }
}
