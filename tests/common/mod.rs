//! Shared fixtures for the integration suite.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::watch;

use zenpulse_engine::{App, SubscriptionProvider, SubscriptionStore, UiOptions};

pub const AFFIRMATION_DELAY: Duration = Duration::from_millis(1500);

/// Index of "Forest Walk", the first premium item in the built-in catalog.
pub const FOREST_WALK: usize = 2;

pub fn app() -> App {
    app_with(SubscriptionProvider::in_memory(), UiOptions::default())
}

pub fn app_with(provider: SubscriptionProvider, ui_options: UiOptions) -> App {
    let catalog = zenpulse_config::builtin_catalog().expect("built-in catalog parses");
    App::new(catalog, provider, ui_options, AFFIRMATION_DELAY)
}

/// App wired to a [`RecordingStore`] the test keeps a handle to.
pub fn recording_app() -> (App, Arc<RecordingStore>) {
    let store = Arc::new(RecordingStore::new());
    let app = app_with(SubscriptionProvider::new(store.clone()), UiOptions::default());
    (app, store)
}

pub fn press(app: &mut App, code: KeyCode) -> bool {
    let event = Event::Key(KeyEvent::new(code, KeyModifiers::NONE));
    zenpulse_tui::apply_event(app, &event).expect("event applies")
}

pub fn press_all(app: &mut App, codes: &[KeyCode]) {
    for code in codes {
        press(app, *code);
    }
}

/// Store that counts calls so tests can tell both plans apart from a
/// double subscribe.
#[derive(Debug)]
pub struct RecordingStore {
    state: watch::Sender<bool>,
    subscribe_calls: AtomicUsize,
    unsubscribe_calls: AtomicUsize,
}

impl RecordingStore {
    pub fn new() -> Self {
        let (state, _) = watch::channel(false);
        Self {
            state,
            subscribe_calls: AtomicUsize::new(0),
            unsubscribe_calls: AtomicUsize::new(0),
        }
    }

    pub fn subscribe_calls(&self) -> usize {
        self.subscribe_calls.load(Ordering::SeqCst)
    }

    pub fn unsubscribe_calls(&self) -> usize {
        self.unsubscribe_calls.load(Ordering::SeqCst)
    }
}

impl SubscriptionStore for RecordingStore {
    fn is_subscribed(&self) -> bool {
        *self.state.borrow()
    }

    fn subscribe(&self) {
        self.subscribe_calls.fetch_add(1, Ordering::SeqCst);
        self.state.send_replace(true);
    }

    fn unsubscribe(&self) {
        self.unsubscribe_calls.fetch_add(1, Ordering::SeqCst);
        self.state.send_replace(false);
    }

    fn watch(&self) -> watch::Receiver<bool> {
        self.state.subscribe()
    }
}

/// Minimal external catalog: one free and one premium item.
pub const SMALL_CATALOG: &str = r#"
features = ["Everything unlocked"]

[[meditations]]
id = "a"
title = "Quiet Start"
description = "A short reset."
duration = 5
image = "art:rain"
premium = false

[[meditations]]
id = "b"
title = "Long Night"
description = ""
duration = 45
image = "https://cdn.example.com/night.png"
premium = true

[plans.yearly]
title = "Yearly"
price = "40"
period = "per year"
price_per_month = "3.33 / month"
savings = "Save 33%"
best_value = true
terms_price = "40/year"

[plans.monthly]
title = "Monthly"
price = "5"
period = "per month"
terms_price = "5/month"

[affirmations]
happy = ["Keep shining."]
neutral = ["Steady is good."]
sad = ["This will pass."]
"#;
