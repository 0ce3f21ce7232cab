use thiserror::Error;

use crate::domain::ParseAmountError;

/// Reasons raw user input is turned away before it reaches the ledger.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Description must not be empty")]
    EmptyDescription,

    #[error("Invalid amount '{text}': {source}")]
    InvalidAmount {
        text: String,
        source: ParseAmountError,
    },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),
}
