//! Subscription-flow decisions: plan choice, category preferences, checkout
//! verification and the dashboard's monthly picks.
//!
//! DESIGN
//! ======
//! Pages own their signals; the rules they apply live here as plain
//! functions and small structs so they can be tested without a browser.

#[cfg(test)]
#[path = "subscription_test.rs"]
mod subscription_test;

use crate::config::{DEFAULT_ITEMS_PER_MONTH, RECENT_VOTES_SHOWN};
use crate::net::types::{ActiveSubscription, CheckoutVerification, Design, VerificationStatus};

/// What choosing a plan should do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlanAction {
    /// Visitor must sign in first.
    RequireLogin,
    /// An active subscription exists; ask before replacing it.
    Confirm,
    /// Go straight to the payment processor.
    Checkout,
}

pub fn plan_action(authenticated: bool, current: Option<&ActiveSubscription>) -> PlanAction {
    if !authenticated {
        PlanAction::RequireLogin
    } else if current.is_some_and(|sub| sub.is_active) {
        PlanAction::Confirm
    } else {
        PlanAction::Checkout
    }
}

/// Preferred-category picker bounded by the plan's allowance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategorySelection {
    pub selected: Vec<i64>,
    pub limit: u32,
}

impl CategorySelection {
    pub fn new(limit: u32, selected: Vec<i64>) -> Self {
        Self { selected, limit }
    }

    pub fn contains(&self, id: i64) -> bool {
        self.selected.contains(&id)
    }

    /// Select or deselect a category.
    ///
    /// # Errors
    ///
    /// Refuses to add past the plan limit; the selection is left unchanged.
    pub fn toggle(&mut self, id: i64) -> Result<(), String> {
        if let Some(pos) = self.selected.iter().position(|&s| s == id) {
            self.selected.remove(pos);
            return Ok(());
        }
        if self.selected.len() >= self.limit as usize {
            return Err(format!("Your plan lets you select at most {} categories", self.limit));
        }
        self.selected.push(id);
        Ok(())
    }

    /// Ids to submit.
    ///
    /// # Errors
    ///
    /// Requires at least one selected category.
    pub fn submission(&self) -> Result<Vec<i64>, String> {
        if self.selected.is_empty() {
            return Err("Select at least one category".to_owned());
        }
        Ok(self.selected.clone())
    }
}

/// Checkout-success page state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckoutOutcome {
    Verifying,
    Success(String),
    /// Paid, but the browser has no session to show it in.
    RequiresLogin(String),
    Pending(String),
    Failed(String),
}

impl CheckoutOutcome {
    /// The `session_id` query parameter was absent.
    pub fn missing_session() -> Self {
        Self::Failed("Missing session_id parameter. Unable to verify the payment.".to_owned())
    }

    pub fn from_verification(result: CheckoutVerification, authenticated: bool) -> Self {
        match result.status {
            VerificationStatus::Success if authenticated => Self::Success(
                result.message.unwrap_or_else(|| "Subscription activated successfully!".to_owned()),
            ),
            VerificationStatus::Success => {
                Self::RequiresLogin("Subscription activated! Sign in to view it.".to_owned())
            }
            VerificationStatus::Error => Self::Failed(
                result
                    .message
                    .unwrap_or_else(|| "Something went wrong while verifying the payment".to_owned()),
            ),
            VerificationStatus::Pending => Self::Pending(result.message.unwrap_or_else(|| {
                "Your payment is being processed. You will receive a confirmation shortly.".to_owned()
            })),
        }
    }

    pub fn request_failed() -> Self {
        Self::Failed(
            "Something went wrong while verifying the payment. Please contact support.".to_owned(),
        )
    }
}

/// The dashboard's "this month" list: the most-voted designs, as many as the
/// plan ships per month. Empty without a subscription.
pub fn monthly_picks(designs: &[Design], subscription: Option<&ActiveSubscription>) -> Vec<Design> {
    let Some(subscription) = subscription else {
        return Vec::new();
    };
    let limit = match subscription.plan.items_per_month {
        0 => DEFAULT_ITEMS_PER_MONTH,
        n => n as usize,
    };
    let mut sorted = designs.to_vec();
    sorted.sort_by(|a, b| b.votes().cmp(&a.votes()));
    sorted.truncate(limit);
    sorted
}

/// The dashboard's "your votes" list: the first few votes as returned.
pub fn recent_votes(mut votes: Vec<Design>) -> Vec<Design> {
    votes.truncate(RECENT_VOTES_SHOWN);
    votes
}
