//! Recurring-expense template and monthly-entry endpoints.

use jiff::civil::Date;
use rust_decimal::Decimal;

use crate::{
    error::ApiError,
    models::expenses::{
        MonthlyExpenseEntry, MonthlyExpenseEntryDraft, MonthlySummary, RecurringExpense,
        RecurringExpenseDraft,
    },
};

use super::ApiClient;

impl ApiClient {
    /// List every recurring-expense template.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn list_recurring_expenses(&self) -> Result<Vec<RecurringExpense>, ApiError> {
        self.get("/recurring-expenses").await
    }

    /// List the templates currently spawning entries.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn active_recurring_expenses(&self) -> Result<Vec<RecurringExpense>, ApiError> {
        self.get("/recurring-expenses/active").await
    }

    /// Fetch one template by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn get_recurring_expense(&self, id: i64) -> Result<RecurringExpense, ApiError> {
        self.get(&format!("/recurring-expenses/{id}")).await
    }

    /// List the templates in one category.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn recurring_expenses_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<RecurringExpense>, ApiError> {
        self.get(&format!("/recurring-expenses/category/{category}"))
            .await
    }

    /// Create a template.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self, draft))]
    pub async fn create_recurring_expense(
        &self,
        draft: &RecurringExpenseDraft,
    ) -> Result<RecurringExpense, ApiError> {
        self.post("/recurring-expenses", draft).await
    }

    /// Update a template.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self, draft))]
    pub async fn update_recurring_expense(
        &self,
        id: i64,
        draft: &RecurringExpenseDraft,
    ) -> Result<RecurringExpense, ApiError> {
        self.put(&format!("/recurring-expenses/{id}"), draft).await
    }

    /// Delete a template.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call fails.
    #[tracing::instrument(skip(self))]
    pub async fn delete_recurring_expense(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/recurring-expenses/{id}")).await
    }

    /// Flip a template between active and inactive.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn toggle_recurring_expense(&self, id: i64) -> Result<RecurringExpense, ApiError> {
        self.put_query(&format!("/recurring-expenses/{id}/toggle-active"), Vec::new())
            .await
    }

    /// Materialize entries for every active template in the given period.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn generate_monthly_entries(
        &self,
        year: i16,
        month: i8,
    ) -> Result<Vec<MonthlyExpenseEntry>, ApiError> {
        self.post_empty(&format!("/recurring-expenses/generate/{year}/{month}"))
            .await
    }

    /// Materialize the current month's entries for auto-generating templates.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn auto_generate_current_month(&self) -> Result<Vec<MonthlyExpenseEntry>, ApiError> {
        self.post_empty("/recurring-expenses/auto-generate").await
    }

    /// Templates with an entry falling due within `days` days.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn recurring_expenses_due_soon(
        &self,
        days: u32,
    ) -> Result<Vec<RecurringExpense>, ApiError> {
        self.get_query(
            "/recurring-expenses/due-soon",
            vec![("days".to_owned(), days.to_string())],
        )
        .await
    }

    /// Combined monthly commitment across every active template.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn monthly_budget(&self) -> Result<Decimal, ApiError> {
        self.get("/recurring-expenses/monthly-budget").await
    }

    /// List every monthly entry.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn list_monthly_entries(&self) -> Result<Vec<MonthlyExpenseEntry>, ApiError> {
        self.get("/monthly-expense-entries").await
    }

    /// Fetch one monthly entry by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn get_monthly_entry(&self, id: i64) -> Result<MonthlyExpenseEntry, ApiError> {
        self.get(&format!("/monthly-expense-entries/{id}")).await
    }

    /// List one period's entries.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn monthly_entries_for_month(
        &self,
        year: i16,
        month: i8,
    ) -> Result<Vec<MonthlyExpenseEntry>, ApiError> {
        self.get(&format!("/monthly-expense-entries/month/{year}/{month}"))
            .await
    }

    /// List every outstanding entry.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn unpaid_monthly_entries(&self) -> Result<Vec<MonthlyExpenseEntry>, ApiError> {
        self.get("/monthly-expense-entries/unpaid").await
    }

    /// List every entry past its due date.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn overdue_monthly_entries(&self) -> Result<Vec<MonthlyExpenseEntry>, ApiError> {
        self.get("/monthly-expense-entries/overdue").await
    }

    /// Sum of one period's entries.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn total_monthly_expenses(&self, year: i16, month: i8) -> Result<Decimal, ApiError> {
        self.get(&format!("/monthly-expense-entries/total/{year}/{month}"))
            .await
    }

    /// Sum of one period's settled entries.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn paid_monthly_expenses(&self, year: i16, month: i8) -> Result<Decimal, ApiError> {
        self.get(&format!("/monthly-expense-entries/paid-total/{year}/{month}"))
            .await
    }

    /// Sum of one period's outstanding entries.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn unpaid_monthly_expenses(&self, year: i16, month: i8) -> Result<Decimal, ApiError> {
        self.get(&format!(
            "/monthly-expense-entries/unpaid-total/{year}/{month}"
        ))
        .await
    }

    /// Paid/unpaid rollup for one period.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn monthly_summary(&self, year: i16, month: i8) -> Result<MonthlySummary, ApiError> {
        self.get(&format!("/monthly-expense-entries/summary/{year}/{month}"))
            .await
    }

    /// Create a monthly entry by hand.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self, draft))]
    pub async fn create_monthly_entry(
        &self,
        draft: &MonthlyExpenseEntryDraft,
    ) -> Result<MonthlyExpenseEntry, ApiError> {
        self.post("/monthly-expense-entries", draft).await
    }

    /// Update a monthly entry.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self, draft))]
    pub async fn update_monthly_entry(
        &self,
        id: i64,
        draft: &MonthlyExpenseEntryDraft,
    ) -> Result<MonthlyExpenseEntry, ApiError> {
        self.put(&format!("/monthly-expense-entries/{id}"), draft).await
    }

    /// Delete a monthly entry.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call fails.
    #[tracing::instrument(skip(self))]
    pub async fn delete_monthly_entry(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/monthly-expense-entries/{id}")).await
    }

    /// Mark one entry paid, optionally recording the payment date.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn mark_monthly_entry_paid(
        &self,
        id: i64,
        payment_date: Option<Date>,
    ) -> Result<MonthlyExpenseEntry, ApiError> {
        let mut query = Vec::new();
        if let Some(payment_date) = payment_date {
            query.push(("paymentDate".to_owned(), payment_date.to_string()));
        }

        self.put_query(&format!("/monthly-expense-entries/{id}/mark-paid"), query)
            .await
    }

    /// Mark one entry unpaid again.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call or decode fails.
    #[tracing::instrument(skip(self))]
    pub async fn mark_monthly_entry_unpaid(&self, id: i64) -> Result<MonthlyExpenseEntry, ApiError> {
        self.put_query(
            &format!("/monthly-expense-entries/{id}/mark-unpaid"),
            Vec::new(),
        )
        .await
    }
}
