//! Mood selection under tokio's paused clock.

use std::time::Duration;

use crossterm::event::KeyCode;

use zenpulse_engine::{AffirmationPhase, CatalogFocus, Mood};

use crate::common::{AFFIRMATION_DELAY, app, press};

#[tokio::test(start_paused = true)]
async fn digit_key_shows_an_affirmation_after_the_delay() {
    let mut app = app();
    press(&mut app, KeyCode::Char('2'));

    let widget = app.catalog_screen().affirmation();
    assert_eq!(widget.selected_mood(), Some(Mood::Neutral));
    assert!(widget.is_loading());
    assert_eq!(widget.text(), None);

    tokio::time::sleep(AFFIRMATION_DELAY - Duration::from_millis(1)).await;
    app.tick();
    assert!(app.catalog_screen().affirmation().is_loading());

    tokio::time::sleep(Duration::from_millis(5)).await;
    app.tick();
    let widget = app.catalog_screen().affirmation();
    let shown = widget.text().expect("affirmation shown");
    assert!(app.catalog().affirmation_table().contains(Mood::Neutral, shown));
}

#[tokio::test(start_paused = true)]
async fn enter_on_a_focused_mood_selects_it() {
    let mut app = app();
    assert_eq!(app.focus(), CatalogFocus::Mood(Mood::Happy));
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right);
    assert_eq!(app.focus(), CatalogFocus::Mood(Mood::Sad));

    press(&mut app, KeyCode::Enter);
    tokio::time::sleep(AFFIRMATION_DELAY + Duration::from_millis(10)).await;
    app.tick();

    let widget = app.catalog_screen().affirmation();
    assert_eq!(widget.selected_mood(), Some(Mood::Sad));
    let shown = widget.text().expect("affirmation shown");
    assert!(app.catalog().affirmation_table().contains(Mood::Sad, shown));
}

#[tokio::test(start_paused = true)]
async fn switching_mood_mid_request_keeps_only_the_latest() {
    let mut app = app();
    press(&mut app, KeyCode::Char('1'));
    tokio::time::sleep(Duration::from_millis(900)).await;
    press(&mut app, KeyCode::Char('3'));

    // Past the first request's deadline, short of the second's.
    tokio::time::sleep(Duration::from_millis(700)).await;
    app.tick();
    let widget = app.catalog_screen().affirmation();
    assert_eq!(widget.selected_mood(), Some(Mood::Sad));
    assert!(matches!(widget.phase(), AffirmationPhase::Loading { .. }));

    tokio::time::sleep(Duration::from_millis(900)).await;
    app.tick();
    let widget = app.catalog_screen().affirmation();
    let shown = widget.text().expect("affirmation shown");
    assert!(app.catalog().affirmation_table().contains(Mood::Sad, shown));
    assert!(!app.catalog().affirmation_table().contains(Mood::Happy, shown));
}

#[tokio::test(start_paused = true)]
async fn reselecting_the_same_mood_restarts_loading() {
    let mut app = app();
    press(&mut app, KeyCode::Char('1'));
    tokio::time::sleep(AFFIRMATION_DELAY + Duration::from_millis(10)).await;
    app.tick();
    assert!(app.catalog_screen().affirmation().text().is_some());

    press(&mut app, KeyCode::Char('1'));
    let widget = app.catalog_screen().affirmation();
    assert!(widget.is_loading());
    assert_eq!(widget.text(), None);
}
