//! Print-job wire types, one family per production process.
//!
//! Offset, duplo and sublimation jobs price with the cost-plus-markup policy;
//! digital jobs carry a customer-entered total that derived figures only ever
//! suggest. The `estimate`/`suggested_total` methods here are thin bindings
//! onto [`crate::pricing`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    pricing::{self, JobEstimate, Material, Quality},
    validation::ValidationErrors,
};

/// Payment state of a print job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrintPaymentStatus {
    /// Settled in full.
    Paid,
    /// Not yet settled.
    Unpaid,
    /// Partially settled.
    PartiallyPaid,
}

/// Reference to an existing customer record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRef {
    /// Customer identifier.
    pub id: i64,
}

/// Reference to an existing supplier record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierRef {
    /// Supplier identifier.
    pub id: i64,
}

/// Itemized expense line owned by a single print job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseLine {
    /// Backend identifier; absent on unsaved lines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// What the expense was for.
    pub description: String,
    /// Expense amount.
    pub amount: Decimal,
}

impl ExpenseLine {
    /// A new, unsaved line.
    #[must_use]
    pub fn new(description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            id: None,
            description: description.into(),
            amount,
        }
    }
}

/// A persisted digital print job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DigitalPrint {
    /// Backend identifier.
    pub id: i64,
    /// Job name.
    pub job_name: String,
    /// Longer description.
    #[serde(default)]
    pub job_description: Option<String>,
    /// Shop-assigned job number.
    #[serde(default)]
    pub job_number: Option<String>,
    /// Owning customer.
    pub customer: CustomerRef,
    /// Print substrate.
    pub material: Material,
    /// Print-pass tier.
    pub quality: Quality,
    /// Unit cost at the time the job was priced.
    pub cost_per_sq_ft: Decimal,
    /// Printed area.
    pub square_feet: Decimal,
    /// Derived material cost at the time the job was priced.
    pub total_material_cost: Decimal,
    /// Customer-facing total; entered, not derived.
    pub total_amount: Decimal,
    /// Payment state.
    #[serde(default)]
    pub payment_status: Option<PrintPaymentStatus>,
    /// Itemized expenses.
    #[serde(default)]
    pub expenses: Vec<ExpenseLine>,
}

/// Form payload for creating or updating a digital print job.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DigitalPrintDraft {
    /// Job name.
    pub job_name: String,
    /// Longer description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_description: Option<String>,
    /// Shop-assigned job number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_number: Option<String>,
    /// Owning customer.
    pub customer: CustomerRef,
    /// Print substrate.
    pub material: Material,
    /// Print-pass tier.
    pub quality: Quality,
    /// Printed area.
    pub square_feet: Decimal,
    /// Customer-facing total; `None` while the field is still empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<Decimal>,
    /// Itemized expenses.
    pub expenses: Vec<ExpenseLine>,
}

impl DigitalPrintDraft {
    /// Unit cost for the selected material and quality.
    #[must_use]
    pub fn cost_per_sq_ft(&self) -> Decimal {
        pricing::unit_cost(self.material, self.quality)
    }

    /// Derived material cost for the entered area.
    #[must_use]
    pub fn material_cost(&self) -> Decimal {
        pricing::material_cost(self.material, self.quality, self.square_feet)
    }

    /// Suggested customer total; fills the field only while it is empty.
    #[must_use]
    pub fn suggested_total(&self) -> Option<Decimal> {
        pricing::suggested_total(self.total_amount, self.material_cost(), &self.expenses)
    }

    /// Pre-submit validation.
    ///
    /// # Errors
    ///
    /// Returns per-field messages when the draft is not submittable.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.job_name.trim().is_empty() {
            errors.push("jobName", "job name is required");
        }
        if self.square_feet <= Decimal::ZERO {
            errors.push("squareFeet", "square feet must be greater than 0");
        }
        match self.total_amount {
            None => errors.push("totalAmount", "total amount is required"),
            Some(total) if total < Decimal::ZERO => {
                errors.push("totalAmount", "total amount cannot be negative");
            }
            Some(_) => {}
        }
        for line in &self.expenses {
            if line.amount <= Decimal::ZERO {
                errors.push("expenses", "expense amounts must be greater than 0");
                break;
            }
        }

        errors.into_result()
    }
}

/// A persisted offset print job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OffsetPrint {
    /// Backend identifier.
    pub id: i64,
    /// Job name.
    pub job_name: String,
    /// Longer description.
    #[serde(default)]
    pub job_description: Option<String>,
    /// Owning customer.
    pub customer: CustomerRef,
    /// Outsourcing supplier.
    pub supplier: SupplierRef,
    /// Kind of offset work, as the backend reports it.
    pub job_type: String,
    /// Number of units.
    pub quantity: u32,
    /// What the supplier charges for the job.
    pub supplier_job_amount: Decimal,
    /// Markup percentage applied on top of cost.
    pub profit_percentage: Decimal,
    /// Payment state.
    #[serde(default)]
    pub payment_status: Option<PrintPaymentStatus>,
    /// Itemized expenses.
    #[serde(default)]
    pub expenses: Vec<ExpenseLine>,
}

/// Form payload for creating or updating an offset print job.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OffsetPrintDraft {
    /// Job name.
    pub job_name: String,
    /// Longer description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_description: Option<String>,
    /// Owning customer.
    pub customer: CustomerRef,
    /// Outsourcing supplier.
    pub supplier: SupplierRef,
    /// Kind of offset work.
    pub job_type: String,
    /// Number of units.
    pub quantity: u32,
    /// What the supplier charges for the job.
    pub supplier_job_amount: Decimal,
    /// Markup percentage applied on top of cost.
    pub profit_percentage: Decimal,
    /// Itemized expenses.
    pub expenses: Vec<ExpenseLine>,
}

impl OffsetPrintDraft {
    /// Cost-plus-markup estimate over the supplier amount and expenses.
    #[must_use]
    pub fn estimate(&self) -> JobEstimate {
        pricing::estimate(
            self.supplier_job_amount,
            &self.expenses,
            self.profit_percentage,
        )
    }

    /// Pre-submit validation.
    ///
    /// # Errors
    ///
    /// Returns per-field messages when the draft is not submittable.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.job_name.trim().is_empty() {
            errors.push("jobName", "job name is required");
        }
        if self.job_type.trim().is_empty() {
            errors.push("jobType", "job type is required");
        }
        if self.quantity == 0 {
            errors.push("quantity", "quantity must be at least 1");
        }
        if self.supplier_job_amount <= Decimal::ZERO {
            errors.push(
                "supplierJobAmount",
                "supplier job amount must be greater than 0",
            );
        }
        if self.profit_percentage < Decimal::ZERO {
            errors.push("profitPercentage", "profit percentage cannot be negative");
        }

        errors.into_result()
    }
}

/// A persisted duplo (risograph) print job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuploPrint {
    /// Backend identifier.
    pub id: i64,
    /// Job name.
    pub job_name: String,
    /// Longer description.
    #[serde(default)]
    pub job_description: Option<String>,
    /// Owning customer.
    pub customer: CustomerRef,
    /// Number of copies.
    pub quantity: u32,
    /// Paper size label.
    #[serde(default)]
    pub paper_size: Option<String>,
    /// Production cost before extras.
    pub base_cost: Decimal,
    /// Additional costs as a single figure.
    pub other_expenses: Decimal,
    /// What the extra costs were for.
    #[serde(default)]
    pub other_expenses_description: Option<String>,
    /// Markup percentage applied on top of cost.
    pub profit_percentage: Decimal,
    /// Payment state.
    #[serde(default)]
    pub payment_status: Option<PrintPaymentStatus>,
}

/// Form payload for creating or updating a duplo print job.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DuploPrintDraft {
    /// Job name.
    pub job_name: String,
    /// Longer description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_description: Option<String>,
    /// Owning customer.
    pub customer: CustomerRef,
    /// Number of copies.
    pub quantity: u32,
    /// Paper size label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_size: Option<String>,
    /// Production cost before extras.
    pub base_cost: Decimal,
    /// Additional costs as a single figure.
    pub other_expenses: Decimal,
    /// What the extra costs were for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_expenses_description: Option<String>,
    /// Markup percentage applied on top of cost.
    pub profit_percentage: Decimal,
}

impl DuploPrintDraft {
    /// Cost-plus-markup estimate over the base cost and extras.
    #[must_use]
    pub fn estimate(&self) -> JobEstimate {
        pricing::estimate_with_expenses_total(
            self.base_cost,
            self.other_expenses,
            self.profit_percentage,
        )
    }

    /// Pre-submit validation.
    ///
    /// # Errors
    ///
    /// Returns per-field messages when the draft is not submittable.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.job_name.trim().is_empty() {
            errors.push("jobName", "job name is required");
        }
        if self.quantity == 0 {
            errors.push("quantity", "quantity must be at least 1");
        }
        if self.base_cost <= Decimal::ZERO {
            errors.push("baseCost", "base cost must be greater than 0");
        }
        if self.other_expenses < Decimal::ZERO {
            errors.push("otherExpenses", "other expenses cannot be negative");
        }
        if self.profit_percentage < Decimal::ZERO {
            errors.push("profitPercentage", "profit percentage cannot be negative");
        }

        errors.into_result()
    }
}

/// A persisted sublimation print job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SublimationPrint {
    /// Backend identifier.
    pub id: i64,
    /// Job name.
    pub job_name: String,
    /// Longer description.
    #[serde(default)]
    pub job_description: Option<String>,
    /// Owning customer.
    pub customer: CustomerRef,
    /// Product kind, as the backend reports it (mugs, jerseys, ...).
    pub sublimation_type: String,
    /// Number of units.
    pub quantity: u32,
    /// Price per unit at the time the job was priced.
    pub unit_price: Decimal,
    /// Additional costs as a single figure.
    pub other_expenses: Decimal,
    /// What the extra costs were for.
    #[serde(default)]
    pub other_expenses_description: Option<String>,
    /// Markup percentage applied on top of cost.
    pub profit_percentage: Decimal,
    /// Payment state.
    #[serde(default)]
    pub payment_status: Option<PrintPaymentStatus>,
}

/// Form payload for creating or updating a sublimation print job.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SublimationPrintDraft {
    /// Job name.
    pub job_name: String,
    /// Longer description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_description: Option<String>,
    /// Owning customer.
    pub customer: CustomerRef,
    /// Product kind.
    pub sublimation_type: String,
    /// Number of units.
    pub quantity: u32,
    /// Price per unit, usually looked up from the active price list.
    pub unit_price: Decimal,
    /// Additional costs as a single figure.
    pub other_expenses: Decimal,
    /// What the extra costs were for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_expenses_description: Option<String>,
    /// Markup percentage applied on top of cost.
    pub profit_percentage: Decimal,
}

impl SublimationPrintDraft {
    /// Cost-plus-markup estimate; the base cost is quantity times unit price.
    #[must_use]
    pub fn estimate(&self) -> JobEstimate {
        let base_cost = Decimal::from(self.quantity) * self.unit_price;

        pricing::estimate_with_expenses_total(
            base_cost,
            self.other_expenses,
            self.profit_percentage,
        )
    }

    /// Pre-submit validation.
    ///
    /// # Errors
    ///
    /// Returns per-field messages when the draft is not submittable.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.job_name.trim().is_empty() {
            errors.push("jobName", "job name is required");
        }
        if self.sublimation_type.trim().is_empty() {
            errors.push("sublimationType", "sublimation type is required");
        }
        if self.quantity == 0 {
            errors.push("quantity", "quantity must be at least 1");
        }
        if self.unit_price <= Decimal::ZERO {
            errors.push("unitPrice", "unit price must be greater than 0");
        }
        if self.other_expenses < Decimal::ZERO {
            errors.push("otherExpenses", "other expenses cannot be negative");
        }
        if self.profit_percentage < Decimal::ZERO {
            errors.push("profitPercentage", "profit percentage cannot be negative");
        }

        errors.into_result()
    }
}

/// Price-list entry for a sublimation product kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SublimationPrice {
    /// Backend identifier.
    pub id: i64,
    /// Product kind this price applies to.
    pub sublimation_type: String,
    /// Price per unit.
    pub unit_price: Decimal,
    /// Whether this entry is the one currently in force for its kind.
    pub is_active: bool,
}

/// Form payload for creating or updating a sublimation price entry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SublimationPriceDraft {
    /// Product kind this price applies to.
    pub sublimation_type: String,
    /// Price per unit.
    pub unit_price: Decimal,
    /// Whether the entry should be in force immediately.
    pub is_active: bool,
}

/// A generic print job from the catch-all `Other` family.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintJob {
    /// Backend identifier.
    pub id: i64,
    /// Job name.
    pub job_name: String,
    /// Longer description.
    #[serde(default)]
    pub job_description: Option<String>,
    /// Owning customer.
    pub customer: CustomerRef,
    /// Customer-facing total.
    pub total_amount: Decimal,
    /// Payment state.
    #[serde(default)]
    pub payment_status: Option<PrintPaymentStatus>,
    /// Itemized expenses.
    #[serde(default)]
    pub expenses: Vec<ExpenseLine>,
}

/// Payment recorded against a generic print job.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecordDraft {
    /// Amount received.
    pub amount: Decimal,
    /// When it was received.
    pub payment_date: jiff::civil::Date,
    /// How it was paid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
}
