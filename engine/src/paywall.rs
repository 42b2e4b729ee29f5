//! Paywall screen state.

use zenpulse_types::{PlanKind, PlanOption, PlanOptions};

use crate::prompt::Prompt;
use crate::subscription::SubscriptionStore;

#[derive(Debug, Clone, Default)]
pub struct PaywallScreen {
    selected: PlanKind,
}

impl PaywallScreen {
    #[must_use]
    pub fn selected(&self) -> PlanKind {
        self.selected
    }

    pub fn select(&mut self, plan: PlanKind) {
        if self.selected != plan {
            tracing::debug!(plan = plan.as_str(), "Plan selected");
        }
        self.selected = plan;
    }

    pub fn toggle(&mut self) {
        self.select(self.selected.other());
    }

    /// Back to the default plan. Called each time the paywall is entered.
    pub fn reset(&mut self) {
        self.selected = PlanKind::default();
    }

    #[must_use]
    pub fn selected_option<'a>(&self, plans: &'a PlanOptions) -> &'a PlanOption {
        plans.get(self.selected)
    }

    #[must_use]
    pub fn terms_line(&self, plans: &PlanOptions) -> String {
        format!(
            "Then {}. Cancel anytime.",
            self.selected_option(plans).terms_price
        )
    }

    /// Subscribe regardless of plan and return the welcome prompt.
    pub fn confirm(&self, store: &dyn SubscriptionStore) -> Prompt {
        tracing::info!(plan = self.selected.as_str(), "Starting free trial");
        store.subscribe();
        Prompt::welcome_premium()
    }
}
