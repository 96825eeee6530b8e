//! Equated monthly installment calculation.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

/// Fixed monthly payment amortizing `principal` over `term_months` at
/// `annual_rate_percent` (e.g. `12` for 12% a year).
///
/// Returns zero when the principal or term is missing, mirroring a form that
/// is not yet fully filled in. A zero rate yields a straight-line split of the
/// principal. Otherwise the standard amortizing-loan formula applies with the
/// monthly rate `r = rate / 100 / 12`:
///
/// `payment = principal * (r * (1 + r)^term) / ((1 + r)^term - 1)`
#[must_use]
pub fn monthly_payment(
    principal: Decimal,
    annual_rate_percent: Decimal,
    term_months: u32,
) -> Decimal {
    if principal <= Decimal::ZERO || term_months == 0 {
        return Decimal::ZERO;
    }

    let term = Decimal::from(term_months);
    let monthly_rate = annual_rate_percent / dec!(100) / dec!(12);
    if monthly_rate <= Decimal::ZERO {
        return principal / term;
    }

    let growth = (Decimal::ONE + monthly_rate).powi(i64::from(term_months));

    principal * (monthly_rate * growth) / (growth - Decimal::ONE)
}
