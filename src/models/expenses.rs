//! Standalone expenses, recurring-expense templates and their monthly entries.

use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::validation::ValidationErrors;

/// Payment state of an expense or monthly entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpensePaymentStatus {
    /// Settled.
    Paid,
    /// Outstanding.
    Unpaid,
    /// Outstanding and past due.
    Overdue,
}

impl ExpensePaymentStatus {
    /// Path segment used by status-filtered endpoints.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "PAID",
            Self::Unpaid => "UNPAID",
            Self::Overdue => "OVERDUE",
        }
    }
}

/// A ledger expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Backend identifier.
    pub id: i64,
    /// What the expense was for.
    pub description: String,
    /// Expense amount.
    pub amount: Decimal,
    /// Category as the backend reports it.
    #[serde(default)]
    pub expense_type: Option<String>,
    /// Supplier the expense was paid to.
    #[serde(default)]
    pub supplier_id: Option<i64>,
    /// Goods-received-note number.
    #[serde(default)]
    pub grn_number: Option<String>,
    /// Payment state.
    pub payment_status: ExpensePaymentStatus,
    /// Date the expense was incurred.
    #[serde(default)]
    pub expense_date: Option<Date>,
    /// Date it was settled.
    #[serde(default)]
    pub payment_date: Option<Date>,
}

/// Form payload for creating or updating a ledger expense.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDraft {
    /// What the expense is for.
    pub description: String,
    /// Expense amount.
    pub amount: Decimal,
    /// Category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expense_type: Option<String>,
    /// Supplier the expense is paid to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<i64>,
    /// Goods-received-note number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grn_number: Option<String>,
    /// Payment state.
    pub payment_status: ExpensePaymentStatus,
    /// Date the expense was incurred.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expense_date: Option<Date>,
}

impl ExpenseDraft {
    /// Pre-submit validation.
    ///
    /// # Errors
    ///
    /// Returns per-field messages when the draft is not submittable.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.description.trim().is_empty() {
            errors.push("description", "description is required");
        }
        if self.amount <= Decimal::ZERO {
            errors.push("amount", "amount must be greater than 0");
        }

        errors.into_result()
    }
}

/// Filter set for the expense search endpoint.
#[derive(Debug, Clone, Default)]
pub struct ExpenseSearch {
    /// Substring match on the description.
    pub description: Option<String>,
    /// Category filter.
    pub expense_type: Option<String>,
    /// Supplier filter.
    pub supplier_id: Option<i64>,
    /// Payment-state filter.
    pub status: Option<ExpensePaymentStatus>,
    /// Earliest expense date, inclusive.
    pub start_date: Option<Date>,
    /// Latest expense date, inclusive.
    pub end_date: Option<Date>,
}

impl ExpenseSearch {
    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();

        if let Some(description) = &self.description {
            query.push(("description".to_owned(), description.clone()));
        }
        if let Some(expense_type) = &self.expense_type {
            query.push(("expenseType".to_owned(), expense_type.clone()));
        }
        if let Some(supplier_id) = self.supplier_id {
            query.push(("supplierId".to_owned(), supplier_id.to_string()));
        }
        if let Some(status) = self.status {
            query.push(("status".to_owned(), status.as_str().to_owned()));
        }
        if let Some(start_date) = self.start_date {
            query.push(("startDate".to_owned(), start_date.to_string()));
        }
        if let Some(end_date) = self.end_date {
            query.push(("endDate".to_owned(), end_date.to_string()));
        }

        query
    }
}

/// How often a recurring expense falls due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Frequency {
    /// Every month.
    Monthly,
    /// Every three months.
    Quarterly,
    /// Once a year.
    Annually,
}

/// A recurring-expense template.
///
/// The template is created once and spawns one [`MonthlyExpenseEntry`] per
/// period, either explicitly or through the auto-generate trigger.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringExpense {
    /// Backend identifier.
    pub id: i64,
    /// Template name (e.g. "shop rent").
    pub name: String,
    /// Category as the backend reports it.
    #[serde(default)]
    pub category: Option<String>,
    /// Amount each generated entry carries.
    pub amount: Decimal,
    /// How often an entry falls due.
    pub frequency: Frequency,
    /// First period the template applies to.
    pub start_date: Date,
    /// Last period the template applies to, when bounded.
    #[serde(default)]
    pub end_date: Option<Date>,
    /// Whether the template currently spawns entries.
    pub is_active: bool,
    /// Whether the backend generates the current month's entry on its own.
    pub auto_generate: bool,
}

impl RecurringExpense {
    /// Materialize the entry this template would produce for `year`/`month`.
    ///
    /// The due day is the template's start day, clamped to the month's length.
    ///
    /// # Errors
    ///
    /// Returns an error when `year`/`month` do not name a real period.
    pub fn entry_for(&self, year: i16, month: i8) -> Result<MonthlyExpenseEntryDraft, jiff::Error> {
        let first = Date::new(year, month, 1)?;
        let day = self.start_date.day().min(first.days_in_month());
        let due_date = first.with().day(day).build()?;

        Ok(MonthlyExpenseEntryDraft {
            recurring_expense_id: self.id,
            year,
            month,
            amount: self.amount,
            payment_status: ExpensePaymentStatus::Unpaid,
            due_date,
        })
    }
}

/// Form payload for creating or updating a recurring-expense template.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringExpenseDraft {
    /// Template name.
    pub name: String,
    /// Category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Amount each generated entry carries.
    pub amount: Decimal,
    /// How often an entry falls due.
    pub frequency: Frequency,
    /// First period the template applies to.
    pub start_date: Date,
    /// Last period the template applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Date>,
    /// Whether the template spawns entries.
    pub is_active: bool,
    /// Whether the backend generates the current month's entry on its own.
    pub auto_generate: bool,
}

impl RecurringExpenseDraft {
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
        if self.amount <= Decimal::ZERO {
            errors.push("amount", "amount must be greater than 0");
        }
        if let Some(end_date) = self.end_date {
            if end_date < self.start_date {
                errors.push("endDate", "end date cannot precede the start date");
            }
        }

        errors.into_result()
    }
}

/// One period's materialized instance of a recurring expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyExpenseEntry {
    /// Backend identifier.
    pub id: i64,
    /// Template that spawned this entry.
    #[serde(default)]
    pub recurring_expense_id: Option<i64>,
    /// Period year.
    pub year: i16,
    /// Period month, 1 through 12.
    pub month: i8,
    /// Amount due this period.
    pub amount: Decimal,
    /// Payment state, independent of every other period.
    pub payment_status: ExpensePaymentStatus,
    /// When the entry falls due.
    #[serde(default)]
    pub due_date: Option<Date>,
    /// When it was settled.
    #[serde(default)]
    pub payment_date: Option<Date>,
}

/// Form payload for creating a monthly entry by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyExpenseEntryDraft {
    /// Template the entry belongs to.
    pub recurring_expense_id: i64,
    /// Period year.
    pub year: i16,
    /// Period month, 1 through 12.
    pub month: i8,
    /// Amount due this period.
    pub amount: Decimal,
    /// Payment state.
    pub payment_status: ExpensePaymentStatus,
    /// When the entry falls due.
    pub due_date: Date,
}

/// Paid/unpaid rollup for one month.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    /// Sum of every entry in the month.
    pub total: Decimal,
    /// Sum of the settled entries.
    pub paid: Decimal,
    /// Sum of the outstanding entries.
    pub unpaid: Decimal,
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use testresult::TestResult;

    use super::*;

    fn rent_template() -> RecurringExpense {
        RecurringExpense {
            id: 4,
            name: "shop rent".to_owned(),
            category: Some("PREMISES".to_owned()),
            amount: dec!(85000),
            frequency: Frequency::Monthly,
            start_date: Date::constant(2025, 1, 31),
            end_date: None,
            is_active: true,
            auto_generate: true,
        }
    }

    #[test]
    fn entry_carries_the_template_amount() -> TestResult {
        let entry = rent_template().entry_for(2026, 3)?;

        assert_eq!(entry.amount, dec!(85000));
        assert_eq!(entry.payment_status, ExpensePaymentStatus::Unpaid);
        assert_eq!(entry.recurring_expense_id, 4);

        Ok(())
    }

    #[test]
    fn due_day_clamps_to_short_months() -> TestResult {
        let entry = rent_template().entry_for(2026, 2)?;

        assert_eq!(entry.due_date, Date::constant(2026, 2, 28));

        Ok(())
    }

    #[test]
    fn an_invalid_period_is_rejected() {
        assert!(rent_template().entry_for(2026, 13).is_err());
    }

    #[test]
    fn draft_end_date_cannot_precede_start() {
        let draft = RecurringExpenseDraft {
            name: "insurance".to_owned(),
            category: None,
            amount: dec!(12000),
            frequency: Frequency::Annually,
            start_date: Date::constant(2026, 6, 1),
            end_date: Some(Date::constant(2026, 1, 1)),
            is_active: true,
            auto_generate: false,
        };

        assert!(draft.validate().is_err());
    }

    #[test]
    fn search_filters_map_to_query_parameters() {
        let search = ExpenseSearch {
            description: Some("ink".to_owned()),
            status: Some(ExpensePaymentStatus::Unpaid),
            start_date: Some(Date::constant(2026, 1, 1)),
            ..ExpenseSearch::default()
        };

        let query = search.to_query();

        assert!(query.contains(&("description".to_owned(), "ink".to_owned())));
        assert!(query.contains(&("status".to_owned(), "UNPAID".to_owned())));
        assert!(query.contains(&("startDate".to_owned(), "2026-01-01".to_owned())));
    }
}
