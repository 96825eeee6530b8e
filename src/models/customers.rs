//! Customer wire types.

use serde::{Deserialize, Serialize};

use crate::validation::ValidationErrors;

/// A customer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Backend identifier.
    pub id: i64,
    /// Display name, unique per shop.
    pub name: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Contact e-mail.
    #[serde(default)]
    pub email: Option<String>,
    /// Postal address.
    #[serde(default)]
    pub address: Option<String>,
}

/// Form payload for creating or updating a customer.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDraft {
    /// Display name.
    pub name: String,
    /// Contact phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Contact e-mail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Postal address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl CustomerDraft {
    /// Pre-submit validation.
    ///
    /// # Errors
    ///
    /// Returns per-field messages when the draft is not submittable.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.name.trim().is_empty() {
            errors.push("name", "name is required");
        }

        errors.into_result()
    }
}

/// A supplier record, referenced by outsourced print jobs and expenses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    /// Backend identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Contact e-mail.
    #[serde(default)]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_blank_name_is_rejected() {
        let draft = CustomerDraft {
            name: "  ".to_owned(),
            ..CustomerDraft::default()
        };

        assert!(draft.validate().is_err());
    }

    #[test]
    fn a_named_customer_is_submittable() {
        let draft = CustomerDraft {
            name: "Acme Signs".to_owned(),
            ..CustomerDraft::default()
        };

        assert!(draft.validate().is_ok());
    }
}
