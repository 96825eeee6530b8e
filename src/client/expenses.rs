//! Ledger expense endpoints.

use jiff::civil::Date;

use crate::{
    error::ApiError,
    models::expenses::{Expense, ExpenseDraft, ExpensePaymentStatus, ExpenseSearch},
};

use super::ApiClient;

impl ApiClient {
    /// List every ledger expense.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn list_expenses(&self) -> Result<Vec<Expense>, ApiError> {
        self.get("/expenses").await
    }

    /// Fetch one expense by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn get_expense(&self, id: i64) -> Result<Expense, ApiError> {
        self.get(&format!("/expenses/{id}")).await
    }

    /// Create an expense.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self, draft))]
    pub async fn create_expense(&self, draft: &ExpenseDraft) -> Result<Expense, ApiError> {
        self.post("/expenses", draft).await
    }

    /// Update an expense.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self, draft))]
    pub async fn update_expense(&self, id: i64, draft: &ExpenseDraft) -> Result<Expense, ApiError> {
        self.put(&format!("/expenses/{id}"), draft).await
    }

    /// Delete an expense.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call fails.
    #[tracing::instrument(skip(self))]
    pub async fn delete_expense(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/expenses/{id}")).await
    }

    /// Search expenses with the given filter set.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self, search))]
    pub async fn search_expenses(&self, search: &ExpenseSearch) -> Result<Vec<Expense>, ApiError> {
        self.get_query("/expenses/search", search.to_query()).await
    }

    /// List the expenses paid to one supplier.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn expenses_by_supplier(&self, supplier_id: i64) -> Result<Vec<Expense>, ApiError> {
        self.get(&format!("/expenses/supplier/{supplier_id}")).await
    }

    /// List the expenses in one payment state.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn expenses_by_status(
        &self,
        status: ExpensePaymentStatus,
    ) -> Result<Vec<Expense>, ApiError> {
        self.get(&format!("/expenses/status/{}", status.as_str()))
            .await
    }

    /// List the expenses in one category.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn expenses_by_type(&self, expense_type: &str) -> Result<Vec<Expense>, ApiError> {
        self.get(&format!("/expenses/type/{expense_type}")).await
    }

    /// List the expenses incurred between two dates, inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn expenses_by_date_range(
        &self,
        start_date: Date,
        end_date: Date,
    ) -> Result<Vec<Expense>, ApiError> {
        self.get_query(
            "/expenses/date-range",
            vec![
                ("startDate".to_owned(), start_date.to_string()),
                ("endDate".to_owned(), end_date.to_string()),
            ],
        )
        .await
    }

    /// List the expenses filed under one goods-received note.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn expenses_by_grn(&self, grn_number: &str) -> Result<Vec<Expense>, ApiError> {
        self.get(&format!("/expenses/grn/{grn_number}")).await
    }

    /// Expense categories known to the backend.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn expense_types(&self) -> Result<Vec<String>, ApiError> {
        self.get("/expenses/expense-types").await
    }
}
