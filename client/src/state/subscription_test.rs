use super::*;
use crate::net::types::{BillingPeriod, SubscriptionPlan};

fn subscription(items_per_month: u32, is_active: bool) -> ActiveSubscription {
    ActiveSubscription {
        id: 1,
        user_id: 1,
        plan_id: 1,
        billing_period: BillingPeriod::Monthly,
        start_date: "2025-01-15T00:00:00".to_owned(),
        end_date: None,
        is_active,
        next_billing_date: None,
        plan: SubscriptionPlan {
            id: 1,
            name: "Starter".to_owned(),
            slug: "starter".to_owned(),
            description: String::new(),
            categories_count: 1,
            items_per_month,
            monthly_price: 15.9,
            quarterly_price: 42.9,
            semiannual_price: 76.3,
            annual_price: 133.5,
            features: Vec::new(),
            is_popular: false,
            is_active: true,
        },
    }
}

fn design(id: i64, votes: Option<u32>) -> Design {
    Design {
        id,
        name: format!("d{id}"),
        description: String::new(),
        category_id: 1,
        image_url: String::new(),
        model_url: None,
        created_at: "2025-01-01T00:00:00".to_owned(),
        is_active: true,
        votes_count: votes,
    }
}

// =============================================================
// Plan choice
// =============================================================

#[test]
fn plan_action_requires_login_first() {
    assert_eq!(plan_action(false, Some(&subscription(4, true))), PlanAction::RequireLogin);
}

#[test]
fn plan_action_confirms_over_active_subscription() {
    assert_eq!(plan_action(true, Some(&subscription(4, true))), PlanAction::Confirm);
}

#[test]
fn plan_action_checks_out_without_active_subscription() {
    assert_eq!(plan_action(true, None), PlanAction::Checkout);
    assert_eq!(plan_action(true, Some(&subscription(4, false))), PlanAction::Checkout);
}

// =============================================================
// Category selection
// =============================================================

#[test]
fn toggle_adds_and_removes() {
    let mut selection = CategorySelection::new(2, Vec::new());
    selection.toggle(3).unwrap();
    selection.toggle(5).unwrap();
    assert_eq!(selection.selected, vec![3, 5]);
    selection.toggle(3).unwrap();
    assert_eq!(selection.selected, vec![5]);
}

#[test]
fn toggle_refuses_past_limit() {
    let mut selection = CategorySelection::new(1, vec![3]);
    let err = selection.toggle(4).unwrap_err();
    assert_eq!(err, "Your plan lets you select at most 1 categories");
    assert_eq!(selection.selected, vec![3]);
    // Removing still works at the limit.
    selection.toggle(3).unwrap();
    assert!(selection.selected.is_empty());
}

#[test]
fn zero_limit_refuses_everything() {
    let mut selection = CategorySelection::default();
    assert!(selection.toggle(1).is_err());
}

#[test]
fn submission_requires_one_category() {
    let selection = CategorySelection::new(2, Vec::new());
    assert_eq!(selection.submission(), Err("Select at least one category".to_owned()));
    let selection = CategorySelection::new(2, vec![7]);
    assert_eq!(selection.submission(), Ok(vec![7]));
    assert!(selection.contains(7));
}

// =============================================================
// Checkout verification
// =============================================================

#[test]
fn verified_success_uses_backend_message() {
    let result = CheckoutVerification { status: VerificationStatus::Success, message: Some("Welcome!".to_owned()) };
    assert_eq!(CheckoutOutcome::from_verification(result, true), CheckoutOutcome::Success("Welcome!".to_owned()));
}

#[test]
fn verified_success_without_session_requires_login() {
    let result = CheckoutVerification { status: VerificationStatus::Success, message: None };
    assert!(matches!(CheckoutOutcome::from_verification(result, false), CheckoutOutcome::RequiresLogin(_)));
}

#[test]
fn pending_and_error_fall_back_to_defaults() {
    let pending = CheckoutVerification { status: VerificationStatus::Pending, message: None };
    assert!(matches!(
        CheckoutOutcome::from_verification(pending, true),
        CheckoutOutcome::Pending(msg) if msg.starts_with("Your payment is being processed")
    ));
    let error = CheckoutVerification { status: VerificationStatus::Error, message: Some("Card declined".to_owned()) };
    assert_eq!(CheckoutOutcome::from_verification(error, true), CheckoutOutcome::Failed("Card declined".to_owned()));
}

#[test]
fn missing_session_is_a_failure() {
    assert!(matches!(CheckoutOutcome::missing_session(), CheckoutOutcome::Failed(_)));
}

// =============================================================
// Monthly picks
// =============================================================

#[test]
fn monthly_picks_empty_without_subscription() {
    assert!(monthly_picks(&[design(1, Some(3))], None).is_empty());
}

#[test]
fn monthly_picks_takes_most_voted_up_to_allowance() {
    let designs = vec![design(1, Some(3)), design(2, None), design(3, Some(10)), design(4, Some(7))];
    let picks = monthly_picks(&designs, Some(&subscription(2, true)));
    let ids: Vec<i64> = picks.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![3, 4]);
}

#[test]
fn monthly_picks_default_allowance_when_plan_says_zero() {
    let designs: Vec<Design> = (1..=6).map(|i| design(i, Some(0))).collect();
    assert_eq!(monthly_picks(&designs, Some(&subscription(0, true))).len(), DEFAULT_ITEMS_PER_MONTH);
}

#[test]
fn recent_votes_keeps_first_three_in_order() {
    let votes: Vec<Design> = (1..=5).map(|id| design(id, Some(1))).collect();
    let ids: Vec<i64> = recent_votes(votes).iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert!(recent_votes(Vec::new()).is_empty());
}
