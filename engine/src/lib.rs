//! Core engine for ZenPulse - state machine and screen logic.
//!
//! This crate contains the App state machine without TUI dependencies.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

mod affirmation;
mod app;
mod catalog;
mod navigation;
mod paywall;
mod prompt;
mod subscription;

pub use affirmation::{
    AffirmationPhase, AffirmationReady, AffirmationRequest, AffirmationWidget, Completion,
    RequestToken, pick_affirmation, spawn_affirmation,
};
pub use app::App;
pub use catalog::{
    AccessSummary, CARD_COLUMNS, CardView, CatalogFocus, CatalogScreen, FocusMove, Greeting,
    ItemAction, access_summary, card_views, focus_ring, item_action,
};
pub use navigation::{NavOutcome, Navigator, Route};
pub use paywall::PaywallScreen;
pub use prompt::{ButtonRole, Prompt, PromptAction, PromptButton};
pub use subscription::{
    InMemorySubscriptionStore, SubscriptionError, SubscriptionProvider, SubscriptionStore,
};

pub use zenpulse_types::ui::{ModalEffect, ModalEffectKind, UiOptions};
pub use zenpulse_types::{
    Artwork, Catalog, MeditationId, MeditationItem, Mood, NonEmptyString, PlanKind, PlanOption,
    PlanOptions,
};
