//! Loan endpoints.

use crate::{
    error::ApiError,
    models::loans::{Loan, LoanDraft, LoanStatus},
};

use super::ApiClient;

impl ApiClient {
    /// List every loan.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn list_loans(&self) -> Result<Vec<Loan>, ApiError> {
        self.get("/loans").await
    }

    /// Fetch one loan by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn get_loan(&self, id: i64) -> Result<Loan, ApiError> {
        self.get(&format!("/loans/{id}")).await
    }

    /// List the loans taken out by one user.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn loans_by_user(&self, user_id: i64) -> Result<Vec<Loan>, ApiError> {
        self.get(&format!("/loans/user/{user_id}")).await
    }

    /// List the loans in one lifecycle state.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn loans_by_status(&self, status: LoanStatus) -> Result<Vec<Loan>, ApiError> {
        self.get(&format!("/loans/status/{}", status.as_str())).await
    }

    /// Loan categories known to the backend.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn loan_types(&self) -> Result<Vec<String>, ApiError> {
        self.get("/loans/types").await
    }

    /// Create a loan.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self, draft))]
    pub async fn create_loan(&self, draft: &LoanDraft) -> Result<Loan, ApiError> {
        self.post("/loans", draft).await
    }

    /// Update a loan.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self, draft))]
    pub async fn update_loan(&self, id: i64, draft: &LoanDraft) -> Result<Loan, ApiError> {
        self.put(&format!("/loans/{id}"), draft).await
    }

    /// Delete a loan.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call fails.
    #[tracing::instrument(skip(self))]
    pub async fn delete_loan(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/loans/{id}")).await
    }
}
