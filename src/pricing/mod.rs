//! Derived pricing and loan amortization.
//!
//! Everything in this module is synchronous, pure and side-effect free. No
//! rounding is applied internally; callers round with
//! [`rust_decimal::Decimal::round_dp`] at presentation time only, never
//! between aggregation steps.

pub mod amortization;
pub mod estimate;
pub mod materials;

pub use amortization::monthly_payment;
pub use estimate::{JobEstimate, estimate, estimate_with_expenses_total, suggested_total, sum_expenses};
pub use materials::{Material, Quality, material_cost, unit_cost};
