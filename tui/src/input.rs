//! Input handling for ZenPulse TUI.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;

use zenpulse_engine::{App, FocusMove, Mood, PlanKind, Route};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 256; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(&stop2, &tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close first so a backpressured input thread unblocks.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: &AtomicBool, tx: &mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain pending terminal events into `app`. Returns `true` once the app
/// should quit.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => {
                tracing::error!(%msg, "Terminal input failed");
                return Err(anyhow!("input error: {msg}"));
            }
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        if apply_event(app, &ev)? {
            return Ok(true);
        }
        processed += 1;
    }
    Ok(app.should_quit())
}

/// Route one terminal event to the active surface: prompt first, then the
/// current screen.
pub fn apply_event(app: &mut App, event: &Event) -> Result<bool> {
    let Event::Key(key) = event else {
        return Ok(app.should_quit());
    };
    // Handle press + repeat events (ignore releases)
    if matches!(key.kind, KeyEventKind::Release) {
        return Ok(app.should_quit());
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.request_quit();
        return Ok(true);
    }

    if app.prompt().is_some() {
        handle_prompt(app, *key);
    } else {
        match app.route() {
            Route::Catalog => handle_catalog(app, *key)?,
            Route::Paywall => handle_paywall(app, *key)?,
        }
    }
    Ok(app.should_quit())
}

fn handle_prompt(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::BackTab => app.prompt_prev(),
        KeyCode::Right | KeyCode::Tab => app.prompt_next(),
        KeyCode::Enter | KeyCode::Char(' ') => app.prompt_press(),
        KeyCode::Esc => app.prompt_cancel(),
        _ => {}
    }
}

fn handle_catalog(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Up | KeyCode::Char('k') => app.move_focus(FocusMove::Up)?,
        KeyCode::Down | KeyCode::Char('j') => app.move_focus(FocusMove::Down)?,
        KeyCode::Left | KeyCode::Char('h') => app.move_focus(FocusMove::Left)?,
        KeyCode::Right | KeyCode::Char('l') => app.move_focus(FocusMove::Right)?,
        KeyCode::Tab => app.move_focus(FocusMove::Next)?,
        KeyCode::BackTab => app.move_focus(FocusMove::Prev)?,
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_focused()?,
        KeyCode::Char('p') => {
            if !app.is_subscribed()? {
                app.open_paywall();
            }
        }
        KeyCode::Char('u') => app.reset_premium()?,
        KeyCode::Char(digit @ '1'..='3') => {
            if let Some(mood) = Mood::from_digit(digit) {
                app.select_mood(mood);
            }
        }
        _ => {}
    }
    Ok(())
}

fn handle_paywall(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.close_paywall(),
        KeyCode::Up
        | KeyCode::Down
        | KeyCode::Left
        | KeyCode::Right
        | KeyCode::Tab
        | KeyCode::BackTab => app.paywall_toggle(),
        KeyCode::Char('y') => app.paywall_select(PlanKind::Yearly),
        KeyCode::Char('m') => app.paywall_select(PlanKind::Monthly),
        KeyCode::Enter => app.paywall_confirm()?,
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

    use super::apply_event;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn ctrl_c_quits_from_anywhere() {
        let mut app = crate::test_support::app();
        app.open_paywall();
        let quit = apply_event(
            &mut app,
            &Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        )
        .expect("handled");
        assert!(quit);
        assert!(app.should_quit());
    }

    #[test]
    fn escape_closes_paywall() {
        let mut app = crate::test_support::app();
        apply_event(&mut app, &key(KeyCode::Char('p'))).expect("handled");
        assert_eq!(app.route(), zenpulse_engine::Route::Paywall);
        apply_event(&mut app, &key(KeyCode::Esc)).expect("handled");
        assert_eq!(app.route(), zenpulse_engine::Route::Catalog);
    }

    #[test]
    fn prompt_captures_keys() {
        let mut app = crate::test_support::app();
        app.activate_item(0).expect("provided");
        assert!(app.prompt().is_some());
        // 'q' would quit on the catalog; the prompt swallows it.
        assert!(!apply_event(&mut app, &key(KeyCode::Char('q'))).expect("handled"));
        apply_event(&mut app, &key(KeyCode::Esc)).expect("handled");
        assert!(app.prompt().is_none());
    }

    #[test]
    fn paywall_keys_pick_plans() {
        let mut app = crate::test_support::app();
        app.open_paywall();
        apply_event(&mut app, &key(KeyCode::Char('m'))).expect("handled");
        assert_eq!(app.paywall().selected(), zenpulse_engine::PlanKind::Monthly);
        apply_event(&mut app, &key(KeyCode::Down)).expect("handled");
        assert_eq!(app.paywall().selected(), zenpulse_engine::PlanKind::Yearly);
    }

    #[test]
    fn unprovided_scope_surfaces_as_error() {
        let mut app = crate::test_support::app_unprovided();
        let err = apply_event(&mut app, &key(KeyCode::Down)).unwrap_err();
        assert!(
            err.to_string()
                .contains("must be used within a SubscriptionProvider")
        );
    }
}
