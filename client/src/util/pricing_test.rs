use super::*;

fn creator() -> SubscriptionPlan {
    SubscriptionPlan {
        id: 2,
        name: "Creator".to_owned(),
        slug: "creator".to_owned(),
        description: "Most popular".to_owned(),
        categories_count: 2,
        items_per_month: 7,
        monthly_price: 23.90,
        quarterly_price: 64.50,
        semiannual_price: 114.70,
        annual_price: 200.80,
        features: Vec::new(),
        is_popular: true,
        is_active: true,
    }
}

#[test]
fn price_for_picks_matching_field() {
    let plan = creator();
    assert!((price_for(&plan, BillingPeriod::Monthly) - 23.90).abs() < f64::EPSILON);
    assert!((price_for(&plan, BillingPeriod::Annual) - 200.80).abs() < f64::EPSILON);
}

#[test]
fn monthly_equivalent_divides_by_months() {
    let plan = creator();
    assert!((monthly_equivalent(&plan, BillingPeriod::Quarterly) - 21.50).abs() < 1e-9);
}

#[test]
fn monthly_billing_has_no_discount() {
    assert_eq!(discount_percent(&creator(), BillingPeriod::Monthly), 0);
}

#[test]
fn longer_periods_round_to_whole_percent() {
    let plan = creator();
    // 1 - 21.50/23.90 = 10.04%
    assert_eq!(discount_percent(&plan, BillingPeriod::Quarterly), 10);
    // 1 - 16.733/23.90 = 29.99%
    assert_eq!(discount_percent(&plan, BillingPeriod::Annual), 30);
}

#[test]
fn discount_never_negative() {
    let mut plan = creator();
    plan.annual_price = 400.0;
    assert_eq!(discount_percent(&plan, BillingPeriod::Annual), 0);
    plan.monthly_price = 0.0;
    assert_eq!(discount_percent(&plan, BillingPeriod::Annual), 0);
}

#[test]
fn format_price_keeps_two_decimals() {
    assert_eq!(format_price(23.9), "€23.90");
    assert_eq!(format_price(0.0), "€0.00");
}
