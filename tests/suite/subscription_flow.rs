//! Locked item -> paywall -> subscribe -> unlocked catalog.

use crossterm::event::KeyCode;

use zenpulse_engine::{AccessSummary, CatalogFocus, PlanKind, Route};

use crate::common::{FOREST_WALK, app, press, press_all, recording_app};

#[test]
fn subscribing_from_a_locked_item_unlocks_the_catalog() {
    let (mut app, store) = recording_app();
    app.set_focus(CatalogFocus::Card(FOREST_WALK)).unwrap();

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.route(), Route::Paywall);
    assert_eq!(app.paywall().selected(), PlanKind::Yearly);

    press(&mut app, KeyCode::Enter);
    assert_eq!(store.subscribe_calls(), 1);
    assert!(app.is_subscribed().unwrap());
    let welcome = app.prompt().expect("welcome prompt");
    assert_eq!(welcome.title(), "Welcome to Premium!");

    press(&mut app, KeyCode::Enter);
    assert!(app.prompt().is_none());
    assert_eq!(app.route(), Route::Catalog);
    assert!(app.card_views().unwrap().iter().all(|view| !view.locked));
    assert_eq!(app.access_summary().unwrap(), AccessSummary::Full);

    // The same item now asks to start instead of showing the paywall.
    app.set_focus(CatalogFocus::Card(FOREST_WALK)).unwrap();
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.route(), Route::Catalog);
    assert_eq!(app.prompt().expect("start prompt").title(), "Forest Walk");
}

#[test]
fn monthly_plan_subscribes_the_same_way() {
    let (mut app, store) = recording_app();
    press(&mut app, KeyCode::Char('p'));
    assert_eq!(app.route(), Route::Paywall);

    press(&mut app, KeyCode::Char('m'));
    assert_eq!(app.paywall().selected(), PlanKind::Monthly);
    assert_eq!(app.terms_line(), "Then 499 ₽/month. Cancel anytime.");

    press(&mut app, KeyCode::Enter);
    assert_eq!(store.subscribe_calls(), 1);
    assert!(app.is_subscribed().unwrap());
}

#[test]
fn toggling_plans_switches_the_terms_line() {
    let mut app = app();
    press(&mut app, KeyCode::Char('p'));
    assert_eq!(app.terms_line(), "Then 2 990 ₽/year. Cancel anytime.");
    press(&mut app, KeyCode::Down);
    assert_eq!(app.paywall().selected(), PlanKind::Monthly);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.paywall().selected(), PlanKind::Yearly);
}

#[test]
fn closing_the_paywall_leaves_items_locked() {
    let (mut app, store) = recording_app();
    app.set_focus(CatalogFocus::Card(FOREST_WALK)).unwrap();
    press_all(&mut app, &[KeyCode::Enter, KeyCode::Char('m'), KeyCode::Esc]);

    assert_eq!(app.route(), Route::Catalog);
    assert_eq!(store.subscribe_calls(), 0);
    assert!(app.card_views().unwrap()[FOREST_WALK].locked);

    // Reopening starts from the yearly plan again.
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.paywall().selected(), PlanKind::Yearly);
}

#[test]
fn free_item_prompt_can_be_cancelled() {
    let mut app = app();
    app.set_focus(CatalogFocus::Card(0)).unwrap();
    press(&mut app, KeyCode::Enter);

    let prompt = app.prompt().expect("start prompt");
    assert_eq!(prompt.title(), "Morning Awakening");
    assert!(prompt.body().starts_with("Ready to begin a 10-minute session?"));

    // Catalog keys are swallowed while the prompt is open.
    press(&mut app, KeyCode::Char('p'));
    assert_eq!(app.route(), Route::Catalog);

    press(&mut app, KeyCode::Esc);
    assert!(app.prompt().is_none());
}

#[test]
fn premium_shortcut_is_ignored_once_subscribed() {
    let (mut app, store) = recording_app();
    press_all(&mut app, &[KeyCode::Char('p'), KeyCode::Enter, KeyCode::Enter]);
    assert_eq!(store.subscribe_calls(), 1);

    press(&mut app, KeyCode::Char('p'));
    assert_eq!(app.route(), Route::Catalog);
}

#[test]
fn reset_premium_locks_items_again() {
    let (mut app, store) = recording_app();
    press_all(&mut app, &[KeyCode::Char('p'), KeyCode::Enter, KeyCode::Enter]);
    assert!(app.is_subscribed().unwrap());

    press(&mut app, KeyCode::Char('u'));
    assert_eq!(store.unsubscribe_calls(), 1);
    assert!(!app.is_subscribed().unwrap());
    assert!(app.card_views().unwrap()[FOREST_WALK].locked);
}

#[test]
fn quit_keys_end_the_session() {
    let mut app = app();
    assert!(press(&mut app, KeyCode::Char('q')));
    assert!(app.should_quit());
}
