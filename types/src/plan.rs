//! Paywall pricing plans.
//!
//! Plans are display data only. Nothing here ties a plan to a billing product,
//! and the chosen plan never changes the outcome of the mock purchase.

use serde::{Deserialize, Serialize};

use crate::NonEmptyString;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanKind {
    #[default]
    Yearly,
    Monthly,
}

impl PlanKind {
    pub const ALL: [PlanKind; 2] = [PlanKind::Yearly, PlanKind::Monthly];

    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            PlanKind::Yearly => PlanKind::Monthly,
            PlanKind::Monthly => PlanKind::Yearly,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PlanKind::Yearly => "yearly",
            PlanKind::Monthly => "monthly",
        }
    }
}

impl std::fmt::Display for PlanKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanOption {
    pub title: NonEmptyString,
    /// Display price, e.g. "2 990 ₽".
    pub price: NonEmptyString,
    /// Billing period caption, e.g. "per year".
    pub period: NonEmptyString,
    #[serde(default)]
    pub price_per_month: Option<String>,
    /// Discount label, e.g. "Save 70%".
    #[serde(default)]
    pub savings: Option<String>,
    #[serde(default)]
    pub best_value: bool,
    /// Price as quoted in the terms line under the subscribe button.
    pub terms_price: NonEmptyString,
}

/// The two purchasable plans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanOptions {
    pub yearly: PlanOption,
    pub monthly: PlanOption,
}

impl PlanOptions {
    #[must_use]
    pub fn get(&self, kind: PlanKind) -> &PlanOption {
        match kind {
            PlanKind::Yearly => &self.yearly,
            PlanKind::Monthly => &self.monthly,
        }
    }
}
