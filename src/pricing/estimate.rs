//! Job cost aggregation.
//!
//! Two pricing policies coexist across the print-job families: cost-plus-markup
//! (offset, duplo, sublimation) and expense-plus-customer-entered-total
//! (digital), where the computed figure only ever *suggests* a total.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::prints::ExpenseLine;

/// Cost breakdown for a cost-plus-markup job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobEstimate {
    /// Cost before itemized expenses.
    pub base_cost: Decimal,
    /// Base cost plus itemized expenses.
    pub subtotal: Decimal,
    /// Markup derived from the profit percentage.
    pub profit: Decimal,
    /// Customer-facing total: subtotal plus profit.
    pub total: Decimal,
}

/// Sum the itemized expense amounts.
#[must_use]
pub fn sum_expenses(lines: &[ExpenseLine]) -> Decimal {
    lines.iter().map(|line| line.amount).sum()
}

/// Cost-plus-markup aggregation over itemized expense lines.
#[must_use]
pub fn estimate(base_cost: Decimal, lines: &[ExpenseLine], profit_percent: Decimal) -> JobEstimate {
    estimate_with_expenses_total(base_cost, sum_expenses(lines), profit_percent)
}

/// Cost-plus-markup aggregation when the expense total is already a single
/// figure rather than itemized lines.
#[must_use]
pub fn estimate_with_expenses_total(
    base_cost: Decimal,
    expenses_total: Decimal,
    profit_percent: Decimal,
) -> JobEstimate {
    let subtotal = base_cost + expenses_total;
    let profit = subtotal * profit_percent / dec!(100);

    JobEstimate {
        base_cost,
        subtotal,
        profit,
        total: subtotal + profit,
    }
}

/// Suggested customer total for a digital job.
///
/// Populates the field only while it is still empty: an entered value — even
/// an explicit zero — is returned untouched, and a computed suggestion of
/// zero is withheld so an untouched form stays empty.
#[must_use]
pub fn suggested_total(
    current: Option<Decimal>,
    material_cost: Decimal,
    lines: &[ExpenseLine],
) -> Option<Decimal> {
    match current {
        Some(value) => Some(value),
        None => {
            let computed = material_cost + sum_expenses(lines);
            (computed > Decimal::ZERO).then_some(computed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(amount: Decimal) -> ExpenseLine {
        ExpenseLine::new("materials", amount)
    }

    #[test]
    fn empty_lines_and_zero_base_yield_zero_total() {
        let result = estimate(Decimal::ZERO, &[], dec!(20));

        assert_eq!(result.total, Decimal::ZERO);
    }

    #[test]
    fn single_line_with_markup() {
        let result = estimate(Decimal::ZERO, &[line(dec!(100))], dec!(20));

        assert_eq!(result.subtotal, dec!(100));
        assert_eq!(result.profit, dec!(20));
        assert_eq!(result.total, dec!(120));
    }

    #[test]
    fn empty_lines_mark_up_the_base_cost_alone() {
        let result = estimate(dec!(250), &[], dec!(20));

        assert_eq!(result.subtotal, dec!(250));
        assert_eq!(result.profit, dec!(50));
        assert_eq!(result.total, dec!(300));
    }

    #[test]
    fn is_idempotent() {
        let lines = [line(dec!(100)), line(dec!(35.50))];

        let first = estimate(dec!(500), &lines, dec!(25));
        let second = estimate(dec!(500), &lines, dec!(25));

        assert_eq!(first, second);
    }

    #[test]
    fn suggestion_fills_an_empty_total() {
        let suggested = suggested_total(None, dec!(1400), &[line(dec!(200))]);

        assert_eq!(suggested, Some(dec!(1600)));
    }

    #[test]
    fn suggestion_never_overwrites_an_entered_total() {
        let suggested = suggested_total(Some(dec!(1500)), dec!(1400), &[line(dec!(200))]);

        assert_eq!(suggested, Some(dec!(1500)));
    }

    #[test]
    fn an_explicit_zero_total_is_kept() {
        let suggested = suggested_total(Some(Decimal::ZERO), dec!(1400), &[]);

        assert_eq!(suggested, Some(Decimal::ZERO));
    }

    #[test]
    fn a_zero_suggestion_is_withheld() {
        assert_eq!(suggested_total(None, Decimal::ZERO, &[]), None);
    }
}
