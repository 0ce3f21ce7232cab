use crate::domain::{parse_amount, Transaction};

use super::InputError;

/// Turn raw form text into a transaction, or say why it cannot be recorded.
/// The description is checked before the amount. Only the empty string counts
/// as a missing description; surrounding whitespace is kept as entered.
pub fn validate_transaction(
    description: &str,
    amount_text: &str,
) -> Result<Transaction, InputError> {
    if description.is_empty() {
        return Err(InputError::EmptyDescription);
    }

    let amount = parse_amount(amount_text).map_err(|source| InputError::InvalidAmount {
        text: amount_text.to_string(),
        source,
    })?;

    Ok(Transaction::new(description, amount))
}
