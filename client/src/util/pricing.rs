//! Plan price lookups for the plan picker and checkout summary.
//!
//! Prices are authoritative on the backend; these helpers only choose which
//! published figure to show and derive the per-month equivalent.

#[cfg(test)]
#[path = "pricing_test.rs"]
mod pricing_test;

use crate::net::types::{BillingPeriod, SubscriptionPlan};

/// Total charged per billing cycle.
pub fn price_for(plan: &SubscriptionPlan, period: BillingPeriod) -> f64 {
    match period {
        BillingPeriod::Monthly => plan.monthly_price,
        BillingPeriod::Quarterly => plan.quarterly_price,
        BillingPeriod::Semiannual => plan.semiannual_price,
        BillingPeriod::Annual => plan.annual_price,
    }
}

/// Cycle price spread over the months it covers.
pub fn monthly_equivalent(plan: &SubscriptionPlan, period: BillingPeriod) -> f64 {
    price_for(plan, period) / f64::from(period.months())
}

/// Whole-percent saving against paying monthly. Never negative.
pub fn discount_percent(plan: &SubscriptionPlan, period: BillingPeriod) -> u32 {
    if plan.monthly_price <= 0.0 {
        return 0;
    }
    let saving = (plan.monthly_price - monthly_equivalent(plan, period)) / plan.monthly_price * 100.0;
    if saving <= 0.0 {
        0
    } else {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let rounded = saving.round() as u32;
        rounded
    }
}

/// Euro amount with two decimals, e.g. `€23.90`.
pub fn format_price(amount: f64) -> String {
    format!("€{amount:.2}")
}
