//! Loan-payment endpoints.

use jiff::civil::Date;

use crate::{
    error::ApiError,
    models::loans::{LoanPayment, LoanPaymentDraft},
};

use super::ApiClient;

impl ApiClient {
    /// List every loan payment.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn list_loan_payments(&self) -> Result<Vec<LoanPayment>, ApiError> {
        self.get("/loan-payments").await
    }

    /// Fetch one payment by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn get_loan_payment(&self, id: i64) -> Result<LoanPayment, ApiError> {
        self.get(&format!("/loan-payments/{id}")).await
    }

    /// List the payments belonging to one loan.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn payments_by_loan(&self, loan_id: i64) -> Result<Vec<LoanPayment>, ApiError> {
        self.get(&format!("/loan-payments/loan/{loan_id}")).await
    }

    /// List the payments across one user's loans.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn payments_by_user(&self, user_id: i64) -> Result<Vec<LoanPayment>, ApiError> {
        self.get(&format!("/loan-payments/user/{user_id}")).await
    }

    /// Payment methods known to the backend.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn payment_methods(&self) -> Result<Vec<String>, ApiError> {
        self.get("/loan-payments/payment-methods").await
    }

    /// Create a payment.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self, draft))]
    pub async fn create_loan_payment(
        &self,
        draft: &LoanPaymentDraft,
    ) -> Result<LoanPayment, ApiError> {
        self.post("/loan-payments", draft).await
    }

    /// Update a payment.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self, draft))]
    pub async fn update_loan_payment(
        &self,
        id: i64,
        draft: &LoanPaymentDraft,
    ) -> Result<LoanPayment, ApiError> {
        self.put(&format!("/loan-payments/{id}"), draft).await
    }

    /// Delete a payment.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call fails.
    #[tracing::instrument(skip(self))]
    pub async fn delete_loan_payment(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/loan-payments/{id}")).await
    }

    /// Mark a payment paid. The backend takes these as query parameters, not
    /// a body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn mark_payment_paid(
        &self,
        id: i64,
        payment_date: Option<Date>,
        payment_method: Option<&str>,
        transaction_reference: Option<&str>,
    ) -> Result<LoanPayment, ApiError> {
        let mut query = Vec::new();

        if let Some(payment_date) = payment_date {
            query.push(("paymentDate".to_owned(), payment_date.to_string()));
        }
        if let Some(payment_method) = payment_method {
            query.push(("paymentMethod".to_owned(), payment_method.to_owned()));
        }
        if let Some(transaction_reference) = transaction_reference {
            query.push((
                "transactionReference".to_owned(),
                transaction_reference.to_owned(),
            ));
        }

        self.put_query(&format!("/loan-payments/{id}/mark-paid"), query)
            .await
    }
}
