use crate::error::AllocationError;

use rust_decimal::Decimal;

pub const DEFAULT_FUND_A_PERCENTAGE: u32 = 95;
pub const DEFAULT_FUND_A_NAME: &str = "FZROX";
pub const DEFAULT_FUND_B_NAME: &str = "FXNAX";

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Desired split of the account across its two holdings, in whole percents.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetAllocation {
    pub fund_a_name: String,
    pub fund_b_name: String,
    fund_a_percentage: Decimal,
    fund_b_percentage: Decimal,
}

impl TargetAllocation {
    pub fn new(
        fund_a_name: impl Into<String>,
        fund_b_name: impl Into<String>,
        fund_a_percentage: Decimal,
        fund_b_percentage: Decimal,
    ) -> Result<Self, AllocationError> {
        for pct in [fund_a_percentage, fund_b_percentage] {
            if pct < Decimal::ZERO || pct > HUNDRED {
                return Err(AllocationError::InvalidTarget {
                    message: format!("percentage {} is outside 0..=100", pct),
                });
            }
            if !pct.fract().is_zero() {
                return Err(AllocationError::InvalidTarget {
                    message: format!("percentage {} is not a whole number", pct),
                });
            }
        }

        if fund_a_percentage + fund_b_percentage != HUNDRED {
            return Err(AllocationError::InvalidTarget {
                message: format!(
                    "percentages must sum to 100, got {} + {}",
                    fund_a_percentage, fund_b_percentage
                ),
            });
        }

        Ok(Self {
            fund_a_name: fund_a_name.into(),
            fund_b_name: fund_b_name.into(),
            fund_a_percentage,
            fund_b_percentage,
        })
    }

    /// Fund B receives whatever fund A leaves of 100%.
    pub fn from_fund_a_percentage(
        fund_a_name: impl Into<String>,
        fund_b_name: impl Into<String>,
        fund_a_percentage: Decimal,
    ) -> Result<Self, AllocationError> {
        Self::new(
            fund_a_name,
            fund_b_name,
            fund_a_percentage,
            HUNDRED - fund_a_percentage,
        )
    }

    pub fn fund_a_percentage(&self) -> Decimal {
        self.fund_a_percentage
    }

    pub fn fund_b_percentage(&self) -> Decimal {
        self.fund_b_percentage
    }

    pub fn fund_a_fraction(&self) -> Decimal {
        self.fund_a_percentage / HUNDRED
    }

    pub fn fund_b_fraction(&self) -> Decimal {
        self.fund_b_percentage / HUNDRED
    }
}

impl Default for TargetAllocation {
    fn default() -> Self {
        let fund_a_percentage = Decimal::from(DEFAULT_FUND_A_PERCENTAGE);
        Self {
            fund_a_name: DEFAULT_FUND_A_NAME.to_string(),
            fund_b_name: DEFAULT_FUND_B_NAME.to_string(),
            fund_a_percentage,
            fund_b_percentage: HUNDRED - fund_a_percentage,
        }
    }
}
