//! Shared REST DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON responses field-for-field. They carry
//! no behaviour beyond small lookups; ownership of the data stays with
//! whichever page state most recently fetched it.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in account as returned by `/auth/me` and `/users/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub referral_code: String,
    #[serde(default)]
    pub credit_balance: f64,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_true() -> bool {
    true
}

/// Billing cadence offered for every plan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Quarterly,
    Semiannual,
    Annual,
}

impl BillingPeriod {
    pub const ALL: [Self; 4] = [Self::Monthly, Self::Quarterly, Self::Semiannual, Self::Annual];

    /// Number of months one payment covers.
    pub fn months(self) -> u32 {
        match self {
            Self::Monthly => 1,
            Self::Quarterly => 3,
            Self::Semiannual => 6,
            Self::Annual => 12,
        }
    }

    /// Wire value, also used in `<select>` options.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Semiannual => "semiannual",
            Self::Annual => "annual",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::Quarterly => "Quarterly",
            Self::Semiannual => "Semiannual",
            Self::Annual => "Annual",
        }
    }

    /// Parse a wire value; unknown strings yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == raw)
    }
}

/// A purchasable subscription tier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionPlan {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub categories_count: u32,
    pub items_per_month: u32,
    pub monthly_price: f64,
    pub quarterly_price: f64,
    pub semiannual_price: f64,
    pub annual_price: f64,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// The user's current subscription with its plan embedded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActiveSubscription {
    pub id: i64,
    pub user_id: i64,
    pub plan_id: i64,
    pub billing_period: BillingPeriod,
    pub start_date: String,
    pub end_date: Option<String>,
    pub is_active: bool,
    pub next_billing_date: Option<String>,
    pub plan: SubscriptionPlan,
}

/// A thematic grouping of designs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    pub image_url: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// A votable catalog item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Design {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category_id: i64,
    #[serde(default)]
    pub image_url: String,
    pub model_url: Option<String>,
    pub created_at: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub votes_count: Option<u32>,
}

impl Design {
    /// Vote count with a missing value read as zero.
    pub fn votes(&self) -> u32 {
        self.votes_count.unwrap_or(0)
    }
}

/// One line of a shipment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShipmentItem {
    pub id: i64,
    pub shipment_id: i64,
    pub design_id: i64,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub design: Option<Design>,
}

fn default_quantity() -> u32 {
    1
}

/// A fulfilment record listing items sent to the user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    pub id: i64,
    pub user_id: i64,
    pub status: String,
    pub tracking_number: Option<String>,
    pub shipped_date: Option<String>,
    pub estimated_delivery_date: Option<String>,
    pub delivered_date: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub shipment_items: Vec<ShipmentItem>,
}

impl Shipment {
    /// Total units across all lines.
    pub fn item_count(&self) -> u32 {
        self.shipment_items.iter().map(|item| item.quantity).sum()
    }
}

/// `POST /auth/token` response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
}

/// `POST /auth/register` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub full_name: String,
    pub password: String,
    pub referred_by: Option<String>,
}

/// `PUT /users/me` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProfileUpdate {
    pub full_name: String,
}

/// `POST /subscriptions/checkout` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CheckoutRequest {
    pub plan_slug: String,
    pub billing_period: BillingPeriod,
}

/// Payment-processor URL to hand the browser off to.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CheckoutSession {
    pub checkout_url: String,
}

/// Outcome reported by `/subscriptions/verify-session/{id}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerificationStatus {
    Success,
    Error,
    Pending,
}

impl<'de> Deserialize<'de> for VerificationStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "success" => Self::Success,
            "error" => Self::Error,
            _ => Self::Pending,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CheckoutVerification {
    pub status: VerificationStatus,
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST /products/vote` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VoteRequest {
    pub design_id: i64,
}

/// `GET /users/referral-code` response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ReferralCode {
    pub referral_code: String,
}
