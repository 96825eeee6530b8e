//! Cross-module pricing scenarios: a job form's derived figures and a loan's
//! derived installment, exercised the way the console uses them.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use testresult::TestResult;

use printdesk::{
    models::prints::{CustomerRef, DigitalPrintDraft, ExpenseLine},
    pricing::{self, Material, Quality},
};

#[test]
fn digital_job_derives_material_cost_and_suggests_a_total() {
    let mut draft = DigitalPrintDraft {
        job_name: "shopfront flex banner".to_owned(),
        job_description: None,
        job_number: Some("DJ-1042".to_owned()),
        customer: CustomerRef { id: 12 },
        material: Material::Flex,
        quality: Quality::Pass6,
        square_feet: dec!(10),
        total_amount: None,
        expenses: Vec::new(),
    };

    // 140 per square foot at six passes, over ten square feet.
    assert_eq!(draft.material_cost(), dec!(1400));

    draft
        .expenses
        .push(ExpenseLine::new("eyelets and rope", dec!(200)));

    // The empty total field picks up material cost plus expenses once.
    assert_eq!(draft.suggested_total(), Some(dec!(1600)));

    // After the clerk enters a figure, recomputation leaves it alone.
    draft.total_amount = Some(dec!(1750));
    assert_eq!(draft.suggested_total(), Some(dec!(1750)));

    assert!(draft.validate().is_ok());
}

#[test]
fn loan_installment_matches_the_standard_amortization_table() -> TestResult {
    let loan: printdesk::models::loans::Loan = serde_json::from_value(serde_json::json!({
        "id": 3,
        "principalAmount": 120000.0,
        "interestRate": 12.0,
        "loanTermMonths": 12,
        "status": "ACTIVE",
        "lender": "People's Bank"
    }))?;

    let payment = loan.monthly_payment();

    assert_eq!(payment.round_dp(2), dec!(10661.85));

    // Over the full term, strictly more than the principal is repaid.
    assert!(payment * dec!(12) > loan.principal_amount);

    Ok(())
}

#[test]
fn interest_free_loans_split_straight_line() {
    let payment = pricing::monthly_payment(dec!(100000), Decimal::ZERO, 12);

    assert_eq!(payment, dec!(100000) / dec!(12));
}

#[test]
fn rate_card_is_total_over_materials_and_qualities() {
    for material in Material::ALL {
        for quality in Quality::ALL {
            assert!(
                pricing::unit_cost(material, quality) > Decimal::ZERO,
                "{material:?}/{quality:?} must be priced"
            );
        }
    }
}

#[test]
fn aggregation_rounds_only_at_presentation() {
    let lines = [
        ExpenseLine::new("plates", dec!(0.10)),
        ExpenseLine::new("ink", dec!(0.20)),
    ];

    let estimate = pricing::estimate(dec!(0.70), &lines, dec!(10));

    // Decimal accumulation keeps the cent exact; a float pipeline would not.
    assert_eq!(estimate.subtotal, dec!(1.00));
    assert_eq!(estimate.profit, dec!(0.10));
    assert_eq!(estimate.total, dec!(1.10));
}
