//! The application state machine.
//!
//! [`App`] owns every screen's state and is driven from a single event loop:
//! key handlers call the methods below, [`App::tick`] runs once per frame, and
//! the renderer only reads. Nothing here touches the terminal.

use std::time::{Duration, Instant};

use chrono::Timelike;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use zenpulse_types::ui::{ModalEffect, UiOptions};
use zenpulse_types::{Catalog, Mood, PlanKind};

use crate::affirmation::{AffirmationReady, Completion, spawn_affirmation};
use crate::catalog::{
    AccessSummary, CardView, CatalogFocus, CatalogScreen, FocusMove, Greeting, ItemAction,
    access_summary, card_views, item_action,
};
use crate::navigation::{Navigator, Route};
use crate::paywall::PaywallScreen;
use crate::prompt::{Prompt, PromptAction};
use crate::subscription::{SubscriptionError, SubscriptionProvider};

const CATALOG_CONSUMER: &str = "CatalogScreen";
const PAYWALL_CONSUMER: &str = "PaywallScreen";

const PAYWALL_EFFECT: Duration = Duration::from_millis(350);
const PROMPT_EFFECT: Duration = Duration::from_millis(250);
const SPINNER_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug)]
struct ViewState {
    ui_options: UiOptions,
    modal_effect: Option<ModalEffect>,
    last_frame: Instant,
    last_ui_tick: Instant,
    tick: usize,
}

impl ViewState {
    fn new(ui_options: UiOptions) -> Self {
        let now = Instant::now();
        Self {
            ui_options,
            modal_effect: None,
            last_frame: now,
            last_ui_tick: now,
            tick: 0,
        }
    }
}

#[derive(Debug)]
struct AffirmationRuntime {
    delay: Duration,
    tx: mpsc::UnboundedSender<AffirmationReady>,
    rx: mpsc::UnboundedReceiver<AffirmationReady>,
    /// In-flight delay task for the latest request.
    task: Option<JoinHandle<()>>,
}

impl AffirmationRuntime {
    fn new(delay: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            delay,
            tx,
            rx,
            task: None,
        }
    }

    fn abort_in_flight(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[derive(Debug)]
pub struct App {
    catalog: Catalog,
    subscription: SubscriptionProvider,
    /// Change feed from the store; `None` outside a provided scope.
    subscription_rx: Option<watch::Receiver<bool>>,
    navigator: Navigator,
    catalog_screen: CatalogScreen,
    paywall: PaywallScreen,
    prompt: Option<Prompt>,
    affirmations: AffirmationRuntime,
    view: ViewState,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(
        catalog: Catalog,
        subscription: SubscriptionProvider,
        ui_options: UiOptions,
        affirmation_delay: Duration,
    ) -> Self {
        let subscription_rx = subscription
            .use_subscription("App")
            .ok()
            .map(|store| store.watch());
        tracing::info!(
            meditations = catalog.meditations().len(),
            provided = subscription.is_provided(),
            "App initialized"
        );
        Self {
            catalog,
            subscription,
            subscription_rx,
            navigator: Navigator::new(),
            catalog_screen: CatalogScreen::default(),
            paywall: PaywallScreen::default(),
            prompt: None,
            affirmations: AffirmationRuntime::new(affirmation_delay),
            view: ViewState::new(ui_options),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn ui_options(&self) -> UiOptions {
        self.view.ui_options
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn route(&self) -> Route {
        self.navigator.current()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn catalog_screen(&self) -> &CatalogScreen {
        &self.catalog_screen
    }

    pub fn paywall(&self) -> &PaywallScreen {
        &self.paywall
    }

    pub fn prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref()
    }

    pub fn affirmation_delay(&self) -> Duration {
        self.affirmations.delay
    }

    pub fn subscription(&self) -> &SubscriptionProvider {
        &self.subscription
    }

    // ========================================================================
    // Catalog
    // ========================================================================

    pub fn is_subscribed(&self) -> Result<bool, SubscriptionError> {
        Ok(self
            .subscription
            .use_subscription(CATALOG_CONSUMER)?
            .is_subscribed())
    }

    pub fn card_views(&self) -> Result<Vec<CardView<'_>>, SubscriptionError> {
        let subscribed = self.is_subscribed()?;
        Ok(card_views(&self.catalog, subscribed))
    }

    pub fn access_summary(&self) -> Result<AccessSummary, SubscriptionError> {
        let subscribed = self.is_subscribed()?;
        Ok(access_summary(&self.catalog, subscribed))
    }

    #[must_use]
    pub fn greeting(&self) -> Greeting {
        Greeting::from_hour(chrono::Local::now().hour())
    }

    pub fn focus(&self) -> CatalogFocus {
        self.catalog_screen.focus()
    }

    pub fn move_focus(&mut self, step: FocusMove) -> Result<(), SubscriptionError> {
        let subscribed = self.is_subscribed()?;
        let count = self.catalog.meditations().len();
        self.catalog_screen.move_focus(step, subscribed, count);
        Ok(())
    }

    pub fn set_focus(&mut self, focus: CatalogFocus) -> Result<(), SubscriptionError> {
        let subscribed = self.is_subscribed()?;
        let count = self.catalog.meditations().len();
        self.catalog_screen.set_focus(focus, subscribed, count);
        Ok(())
    }

    /// First visible card row for a viewport of `visible_rows` rows.
    pub fn card_scroll(&mut self, visible_rows: usize) -> usize {
        self.catalog_screen.scroll_to_focus(visible_rows)
    }

    /// Enter/Space on the focused element.
    pub fn activate_focused(&mut self) -> Result<(), SubscriptionError> {
        match self.catalog_screen.focus() {
            CatalogFocus::PremiumButton => {
                self.open_paywall();
                Ok(())
            }
            CatalogFocus::Mood(mood) => {
                self.select_mood(mood);
                Ok(())
            }
            CatalogFocus::Card(index) => self.activate_item(index),
        }
    }

    /// Locked items lead to the paywall; unlocked ones ask to start.
    pub fn activate_item(&mut self, index: usize) -> Result<(), SubscriptionError> {
        let subscribed = self.is_subscribed()?;
        let Some(item) = self.catalog.meditations().get(index) else {
            tracing::warn!(index, "No meditation at index");
            return Ok(());
        };
        let prompt = match item_action(item, subscribed) {
            ItemAction::OpenPaywall => {
                tracing::info!(id = %item.id, "Locked meditation selected");
                None
            }
            ItemAction::ConfirmStart => Some(Prompt::start_session(item)),
        };
        match prompt {
            Some(prompt) => self.open_prompt(prompt),
            None => self.open_paywall(),
        }
        Ok(())
    }

    /// Start a new affirmation request for `mood`, cancelling any request
    /// still in flight. Must be called within a tokio runtime.
    pub fn select_mood(&mut self, mood: Mood) {
        self.affirmations.abort_in_flight();
        let request = self.catalog_screen.affirmation_mut().select(mood);
        let choices = self.catalog.affirmations(mood).to_vec();
        self.affirmations.task = Some(spawn_affirmation(
            request,
            choices,
            self.affirmations.delay,
            self.affirmations.tx.clone(),
        ));
        if matches!(self.catalog_screen.focus(), CatalogFocus::Mood(_)) {
            self.catalog_screen.focus_mood(mood);
        }
    }

    /// Apply finished affirmation requests. Returns how many were applied.
    pub fn process_affirmation_events(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(ready) = self.affirmations.rx.try_recv() {
            if self.catalog_screen.affirmation_mut().complete(ready) == Completion::Applied {
                self.affirmations.task = None;
                applied += 1;
            }
        }
        applied
    }

    /// Flip the store back to unsubscribed.
    pub fn reset_premium(&mut self) -> Result<(), SubscriptionError> {
        tracing::info!("Resetting premium access");
        self.subscription
            .use_subscription(CATALOG_CONSUMER)?
            .unsubscribe();
        Ok(())
    }

    // ========================================================================
    // Paywall
    // ========================================================================

    pub fn open_paywall(&mut self) {
        self.paywall.reset();
        self.navigator.navigate(Route::Paywall);
        self.start_modal_effect(ModalEffect::slide_up(PAYWALL_EFFECT));
    }

    pub fn close_paywall(&mut self) {
        if self.navigator.current() == Route::Paywall {
            self.navigator.go_back();
            self.clear_modal_effect();
        }
    }

    pub fn paywall_select(&mut self, plan: PlanKind) {
        self.paywall.select(plan);
    }

    pub fn paywall_toggle(&mut self) {
        self.paywall.toggle();
    }

    pub fn terms_line(&self) -> String {
        self.paywall.terms_line(self.catalog.plans())
    }

    /// Subscribe and show the welcome prompt.
    pub fn paywall_confirm(&mut self) -> Result<(), SubscriptionError> {
        let store = self.subscription.use_subscription(PAYWALL_CONSUMER)?;
        let prompt = self.paywall.confirm(store);
        self.open_prompt(prompt);
        Ok(())
    }

    // ========================================================================
    // Prompt
    // ========================================================================

    fn open_prompt(&mut self, prompt: Prompt) {
        tracing::debug!(title = prompt.title(), "Prompt opened");
        self.prompt = Some(prompt);
        self.start_modal_effect(ModalEffect::pop_scale(PROMPT_EFFECT));
    }

    pub fn prompt_next(&mut self) {
        if let Some(prompt) = self.prompt.as_mut() {
            prompt.select_next();
        }
    }

    pub fn prompt_prev(&mut self) {
        if let Some(prompt) = self.prompt.as_mut() {
            prompt.select_prev();
        }
    }

    pub fn prompt_press(&mut self) {
        if let Some(action) = self.prompt.as_ref().map(Prompt::selected_action) {
            self.apply_prompt_action(action);
        }
    }

    pub fn prompt_cancel(&mut self) {
        if let Some(action) = self.prompt.as_ref().map(Prompt::cancel_action) {
            self.apply_prompt_action(action);
        }
    }

    fn apply_prompt_action(&mut self, action: PromptAction) {
        self.prompt = None;
        self.clear_modal_effect();
        match action {
            PromptAction::Dismiss => {}
            PromptAction::StartSession(id) => {
                tracing::info!(%id, "Starting meditation session");
            }
            PromptAction::ReturnToCatalog => {
                self.navigator.navigate(Route::Catalog);
                self.sync_subscription();
            }
        }
    }

    // ========================================================================
    // Frame
    // ========================================================================

    pub fn tick(&mut self) {
        self.process_affirmation_events();
        self.sync_subscription();

        let now = Instant::now();
        if now.duration_since(self.view.last_ui_tick) >= SPINNER_INTERVAL {
            self.view.last_ui_tick = now;
            self.view.tick = self.view.tick.wrapping_add(1);
        }
    }

    pub fn tick_count(&self) -> usize {
        self.view.tick
    }

    /// React to store changes made anywhere, e.g. the premium button
    /// disappearing out from under the focus.
    fn sync_subscription(&mut self) {
        let Some(rx) = self.subscription_rx.as_mut() else {
            return;
        };
        if !rx.has_changed().unwrap_or(false) {
            return;
        }
        let subscribed = *rx.borrow_and_update();
        tracing::debug!(subscribed, "Catalog observed subscription change");
        let count = self.catalog.meditations().len();
        self.catalog_screen.normalize_focus(subscribed, count);
    }

    pub fn frame_elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.view.last_frame);
        self.view.last_frame = now;
        elapsed
    }

    pub fn modal_effect_mut(&mut self) -> Option<&mut ModalEffect> {
        self.view.modal_effect.as_mut()
    }

    pub fn clear_modal_effect(&mut self) {
        self.view.modal_effect = None;
    }

    fn start_modal_effect(&mut self, effect: ModalEffect) {
        if self.view.ui_options.reduced_motion {
            self.view.modal_effect = None;
        } else {
            self.view.modal_effect = Some(effect);
            self.view.last_frame = Instant::now();
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.affirmations.abort_in_flight();
    }
}
