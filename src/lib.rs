pub mod calculator;
pub mod config;
pub mod error;
pub mod input;
pub mod money;
pub mod report;

use crate::calculator::{AllocationResult, Calculator};
use crate::config::TargetAllocation;
use crate::error::AllocationError;
use crate::input::{AllocationInput, RawArgs};

/// Parse the raw arguments and run them through the calculator.
pub fn allocate(
    raw: RawArgs,
    target: &TargetAllocation,
) -> Result<(AllocationInput, AllocationResult), AllocationError> {
    let input = AllocationInput::try_from(raw)?;
    let result = Calculator::new(target).calculate(&input)?;

    Ok((input, result))
}
