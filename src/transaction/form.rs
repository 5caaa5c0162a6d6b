//! The JSON body accepted when creating or updating a transaction.

use serde::Deserialize;

use crate::{Error, transaction::NewTransaction};

/// The request body for creating or replacing a transaction.
///
/// Every field is optional at the JSON level so that a missing field can be
/// reported as a validation error naming the field, rather than a generic
/// parse error.
#[derive(Debug, Default, Deserialize)]
pub struct TransactionForm {
    /// "income" or "expense".
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// The category name.
    pub category: Option<String>,
    /// The value of the transaction.
    pub amount: Option<f64>,
    /// The date when the transaction ocurred.
    pub date: Option<String>,
    /// Text detailing the transaction.
    pub description: Option<String>,
}

impl TransactionForm {
    /// Check that the required fields are present.
    ///
    /// # Errors
    /// Returns [Error::MissingField] naming the first of `type`, `category`,
    /// `amount` or `date` that is absent. Empty strings count as absent.
    pub fn validate(self) -> Result<NewTransaction, Error> {
        let kind = required_text(self.kind, "type")?;
        let category = required_text(self.category, "category")?;
        let amount = self.amount.ok_or(Error::MissingField("amount"))?;
        let date = required_text(self.date, "date")?;

        Ok(NewTransaction {
            kind,
            category,
            amount,
            date,
            description: self.description,
        })
    }
}

fn required_text(value: Option<String>, field: &'static str) -> Result<String, Error> {
    match value {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(Error::MissingField(field)),
    }
}
