//! Loan and loan-payment wire types.

use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    pricing,
    validation::{MAX_PAYMENT_NUMBER, ValidationErrors},
};

/// Lifecycle state of a loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoanStatus {
    /// Repayments in progress.
    Active,
    /// Fully repaid.
    Completed,
    /// Repayment has stopped.
    Defaulted,
    /// Temporarily paused by agreement.
    Suspended,
}

impl LoanStatus {
    /// Path segment used by status-filtered endpoints.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Completed => "COMPLETED",
            Self::Defaulted => "DEFAULTED",
            Self::Suspended => "SUSPENDED",
        }
    }
}

/// Payment state of a single installment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    /// Settled in full.
    Paid,
    /// Not yet settled.
    Unpaid,
    /// Past its due date and unsettled.
    Overdue,
    /// Partially settled.
    PartiallyPaid,
}

/// A loan record.
///
/// The monthly installment is always derived from the stored terms via
/// [`Loan::monthly_payment`]; it is never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    /// Backend identifier.
    pub id: i64,
    /// Borrowed amount; always positive.
    pub principal_amount: Decimal,
    /// Annual interest rate as a percentage; zero or more.
    pub interest_rate: Decimal,
    /// Repayment term in months; at least one.
    pub loan_term_months: u32,
    /// Date the loan was taken out.
    #[serde(default)]
    pub start_date: Option<Date>,
    /// Lifecycle state.
    pub status: LoanStatus,
    /// Who lent the money.
    #[serde(default)]
    pub lender: Option<String>,
    /// Loan category as the backend reports it.
    #[serde(default)]
    pub loan_type: Option<String>,
}

impl Loan {
    /// Derived monthly installment for this loan's terms.
    #[must_use]
    pub fn monthly_payment(&self) -> Decimal {
        pricing::monthly_payment(
            self.principal_amount,
            self.interest_rate,
            self.loan_term_months,
        )
    }
}

/// Form payload for creating or updating a loan.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanDraft {
    /// Borrowed amount.
    pub principal_amount: Decimal,
    /// Annual interest rate as a percentage.
    pub interest_rate: Decimal,
    /// Repayment term in months.
    pub loan_term_months: u32,
    /// Date the loan was taken out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Date>,
    /// Lifecycle state.
    pub status: LoanStatus,
    /// Who lent the money.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lender: Option<String>,
    /// Loan category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loan_type: Option<String>,
}

impl LoanDraft {
    /// Pre-submit validation of the loan invariants.
    ///
    /// # Errors
    ///
    /// Returns per-field messages when the draft is not submittable.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.principal_amount <= Decimal::ZERO {
            errors.push("principalAmount", "principal must be greater than 0");
        }
        if self.interest_rate < Decimal::ZERO {
            errors.push("interestRate", "interest rate cannot be negative");
        }
        if self.loan_term_months == 0 {
            errors.push("loanTermMonths", "term must be at least 1 month");
        }

        errors.into_result()
    }
}

/// A single installment against a loan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanPayment {
    /// Backend identifier.
    pub id: i64,
    /// Owning loan.
    pub loan_id: i64,
    /// Ordinal of this installment within the loan.
    pub payment_number: i32,
    /// Installment amount.
    pub amount: Decimal,
    /// When the installment falls due.
    #[serde(default)]
    pub due_date: Option<Date>,
    /// Payment state.
    pub payment_status: PaymentStatus,
    /// How it was paid, when known.
    #[serde(default)]
    pub payment_method: Option<String>,
    /// External transaction reference.
    #[serde(default)]
    pub transaction_reference: Option<String>,
    /// When it was actually paid.
    #[serde(default)]
    pub payment_date: Option<Date>,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Form payload for creating or updating a loan payment.
///
/// The payment number is held as `i64` so an oversized entry can be caught by
/// [`LoanPaymentDraft::validate`] instead of wrapping; the backend column is
/// a signed 32-bit integer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanPaymentDraft {
    /// Owning loan.
    pub loan_id: i64,
    /// Ordinal of this installment; must lie in `[1, 2147483647]`.
    pub payment_number: i64,
    /// Installment amount.
    pub amount: Decimal,
    /// When the installment falls due.
    pub due_date: Date,
    /// Payment state.
    pub payment_status: PaymentStatus,
    /// How it was paid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    /// External transaction reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_reference: Option<String>,
    /// Free-form notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl LoanPaymentDraft {
    /// Pre-submit validation; out-of-range payment numbers are rejected here
    /// rather than truncated on the wire.
    ///
    /// # Errors
    ///
    /// Returns per-field messages when the draft is not submittable.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.payment_number < 1 || self.payment_number > MAX_PAYMENT_NUMBER {
            errors.push(
                "paymentNumber",
                format!("payment number must be between 1 and {MAX_PAYMENT_NUMBER}"),
            );
        }
        if self.amount <= Decimal::ZERO {
            errors.push("amount", "amount must be greater than 0");
        }

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use testresult::TestResult;

    use super::*;

    fn loan_draft() -> LoanDraft {
        LoanDraft {
            principal_amount: dec!(120000),
            interest_rate: dec!(12),
            loan_term_months: 12,
            start_date: None,
            status: LoanStatus::Active,
            lender: Some("People's Bank".to_owned()),
            loan_type: None,
        }
    }

    fn payment_draft() -> LoanPaymentDraft {
        LoanPaymentDraft {
            loan_id: 7,
            payment_number: 1,
            amount: dec!(10661.85),
            due_date: Date::constant(2026, 9, 1),
            payment_status: PaymentStatus::Unpaid,
            payment_method: None,
            transaction_reference: None,
            notes: None,
        }
    }

    #[test]
    fn a_valid_loan_draft_passes() {
        assert!(loan_draft().validate().is_ok());
    }

    #[test]
    fn non_positive_principal_is_rejected() {
        let mut draft = loan_draft();
        draft.principal_amount = Decimal::ZERO;

        assert!(draft.validate().is_err());
    }

    #[test]
    fn zero_term_is_rejected() {
        let mut draft = loan_draft();
        draft.loan_term_months = 0;

        assert!(draft.validate().is_err());
    }

    #[test]
    fn monthly_payment_is_derived_from_the_terms() -> TestResult {
        let loan: Loan = serde_json::from_value(serde_json::json!({
            "id": 1,
            "principalAmount": 120000.0,
            "interestRate": 12.0,
            "loanTermMonths": 12,
            "status": "ACTIVE"
        }))?;

        assert_eq!(loan.monthly_payment().round_dp(2), dec!(10661.85));

        Ok(())
    }

    #[test]
    fn payment_number_must_fit_the_backend_column() {
        let mut draft = payment_draft();
        draft.payment_number = MAX_PAYMENT_NUMBER + 1;

        assert!(draft.validate().is_err());

        draft.payment_number = MAX_PAYMENT_NUMBER;
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn zeroth_payment_is_rejected() {
        let mut draft = payment_draft();
        draft.payment_number = 0;

        assert!(draft.validate().is_err());
    }
}
