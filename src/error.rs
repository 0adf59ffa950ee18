use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AllocationError {
    #[error("invalid decimal for {field}: '{value}'")]
    Parse { field: &'static str, value: String },

    #[error(
        "The {fund_a_name} and {fund_b_name} balances must sum to the account balance: \
         {fund_a} + {fund_b} != {account}"
    )]
    Imbalanced {
        fund_a_name: String,
        fund_b_name: String,
        fund_a: String,
        fund_b: String,
        account: String,
    },

    #[error("Invalid target allocation: {message}")]
    InvalidTarget { message: String },

    #[error("Arithmetic overflow while computing {operation}")]
    Overflow { operation: &'static str },
}
