//! Screens wired without a subscription store fail loudly.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use zenpulse_engine::{CatalogFocus, SubscriptionError, SubscriptionProvider, UiOptions};

use crate::common::{FOREST_WALK, app_with};

fn unprovided_app() -> zenpulse_engine::App {
    app_with(SubscriptionProvider::unprovided(), UiOptions::default())
}

#[test]
fn catalog_reports_the_missing_provider() {
    let app = unprovided_app();
    let err = app.is_subscribed().unwrap_err();
    assert_eq!(
        err,
        SubscriptionError::OutsideProvider {
            consumer: "CatalogScreen"
        }
    );
    assert_eq!(
        err.to_string(),
        "CatalogScreen must be used within a SubscriptionProvider"
    );
}

#[test]
fn paywall_confirm_reports_the_missing_provider() {
    let mut app = unprovided_app();
    app.open_paywall();
    let err = app.paywall_confirm().unwrap_err();
    assert_eq!(
        err.to_string(),
        "PaywallScreen must be used within a SubscriptionProvider"
    );
    assert!(app.prompt().is_none());
}

#[test]
fn key_that_needs_the_store_surfaces_the_error() {
    let mut app = unprovided_app();
    let event = Event::Key(KeyEvent::new(KeyCode::Char('p'), KeyModifiers::NONE));
    let err = zenpulse_tui::apply_event(&mut app, &event).unwrap_err();
    assert!(err.to_string().contains("must be used within a SubscriptionProvider"));
}

#[test]
fn activating_an_item_surfaces_the_error() {
    let mut app = unprovided_app();
    assert!(app.set_focus(CatalogFocus::Card(FOREST_WALK)).is_err());
    assert!(app.activate_item(FOREST_WALK).is_err());
}

#[test]
fn drawing_fails_instead_of_rendering_a_default() {
    let mut app = unprovided_app();
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).expect("terminal");
    let mut rendered = Ok(());
    terminal
        .draw(|frame| rendered = zenpulse_tui::draw(frame, &mut app))
        .expect("draw");
    assert!(matches!(
        rendered,
        Err(SubscriptionError::OutsideProvider { .. })
    ));
}
