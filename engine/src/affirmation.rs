//! Mood → affirmation widget.
//!
//! Each mood selection issues a [`RequestToken`]. The widget only accepts a
//! completion carrying the latest token, so a slow request can never
//! overwrite a newer selection.
//!
//! ```text
//! Idle --select--> Loading{token} --complete(token)--> Shown{text}
//!                      ^                                   |
//!                      +-------------- select -------------+
//! ```

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use zenpulse_types::{Mood, NonEmptyString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AffirmationPhase {
    Idle,
    Loading { token: RequestToken },
    Shown { text: NonEmptyString },
}

/// Issued by [`AffirmationWidget::select`]; carried through the delay task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AffirmationRequest {
    pub token: RequestToken,
    pub mood: Mood,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffirmationReady {
    pub token: RequestToken,
    pub mood: Mood,
    pub text: NonEmptyString,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// Superseded by a newer selection; discarded.
    Stale,
}

#[derive(Debug, Clone)]
pub struct AffirmationWidget {
    selected: Option<Mood>,
    phase: AffirmationPhase,
    last_token: u64,
}

impl Default for AffirmationWidget {
    fn default() -> Self {
        Self {
            selected: None,
            phase: AffirmationPhase::Idle,
            last_token: 0,
        }
    }
}

impl AffirmationWidget {
    /// Record `mood`, clear any shown text, and enter loading.
    pub fn select(&mut self, mood: Mood) -> AffirmationRequest {
        self.last_token += 1;
        let token = RequestToken(self.last_token);
        self.selected = Some(mood);
        self.phase = AffirmationPhase::Loading { token };
        tracing::debug!(mood = %mood, token = token.get(), "Affirmation requested");
        AffirmationRequest { token, mood }
    }

    pub fn complete(&mut self, ready: AffirmationReady) -> Completion {
        match self.phase {
            AffirmationPhase::Loading { token } if token == ready.token => {
                tracing::debug!(mood = %ready.mood, token = token.get(), "Affirmation shown");
                self.phase = AffirmationPhase::Shown { text: ready.text };
                Completion::Applied
            }
            _ => {
                tracing::debug!(
                    mood = %ready.mood,
                    token = ready.token.get(),
                    latest = self.last_token,
                    "Discarding stale affirmation"
                );
                Completion::Stale
            }
        }
    }

    #[must_use]
    pub fn selected_mood(&self) -> Option<Mood> {
        self.selected
    }

    #[must_use]
    pub fn phase(&self) -> &AffirmationPhase {
        &self.phase
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, AffirmationPhase::Loading { .. })
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.phase {
            AffirmationPhase::Shown { text } => Some(text.as_str()),
            _ => None,
        }
    }
}

/// Map a roll in `[0, 1)` onto `choices`. `None` only for an empty slice.
#[must_use]
pub fn pick_affirmation(choices: &[NonEmptyString], roll: f64) -> Option<&NonEmptyString> {
    if choices.is_empty() {
        return None;
    }
    let index = (roll.clamp(0.0, 1.0) * choices.len() as f64) as usize;
    choices.get(index.min(choices.len() - 1))
}

/// Sleep for `delay`, pick uniformly from `choices`, and report on `tx`.
///
/// Must be called from within a tokio runtime. Aborting the returned handle
/// drops the request without sending anything.
pub fn spawn_affirmation(
    request: AffirmationRequest,
    choices: Vec<NonEmptyString>,
    delay: Duration,
    tx: mpsc::UnboundedSender<AffirmationReady>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let Some(text) = pick_affirmation(&choices, rand::random::<f64>()).cloned() else {
            tracing::warn!(mood = %request.mood, "No affirmations to choose from");
            return;
        };
        let _ = tx.send(AffirmationReady {
            token: request.token,
            mood: request.mood,
            text,
        });
    })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::sync::mpsc;
    use zenpulse_types::{Mood, NonEmptyString};

    use super::{
        AffirmationPhase, AffirmationReady, AffirmationWidget, Completion, pick_affirmation,
        spawn_affirmation,
    };

    fn texts(values: &[&str]) -> Vec<NonEmptyString> {
        values
            .iter()
            .map(|v| NonEmptyString::new(*v).expect("non-empty"))
            .collect()
    }

    fn ready(widget_token: super::RequestToken, mood: Mood, text: &str) -> AffirmationReady {
        AffirmationReady {
            token: widget_token,
            mood,
            text: NonEmptyString::new(text).expect("non-empty"),
        }
    }

    #[test]
    fn select_enters_loading_and_clears_text() {
        let mut widget = AffirmationWidget::default();
        let first = widget.select(Mood::Happy);
        assert_eq!(widget.complete(ready(first.token, Mood::Happy, "shine")), Completion::Applied);
        assert_eq!(widget.text(), Some("shine"));

        widget.select(Mood::Sad);
        assert!(widget.is_loading());
        assert_eq!(widget.text(), None);
        assert_eq!(widget.selected_mood(), Some(Mood::Sad));
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut widget = AffirmationWidget::default();
        let first = widget.select(Mood::Happy);
        let second = widget.select(Mood::Sad);
        assert!(second.token > first.token);

        assert_eq!(widget.complete(ready(first.token, Mood::Happy, "old")), Completion::Stale);
        assert!(widget.is_loading());

        assert_eq!(widget.complete(ready(second.token, Mood::Sad, "new")), Completion::Applied);
        assert_eq!(widget.text(), Some("new"));
    }

    #[test]
    fn late_duplicate_after_shown_is_stale() {
        let mut widget = AffirmationWidget::default();
        let request = widget.select(Mood::Neutral);
        widget.complete(ready(request.token, Mood::Neutral, "steady"));
        assert_eq!(
            widget.complete(ready(request.token, Mood::Neutral, "again")),
            Completion::Stale
        );
        assert_eq!(widget.text(), Some("steady"));
    }

    #[test]
    fn idle_widget_is_not_loading() {
        let widget = AffirmationWidget::default();
        assert_eq!(widget.phase(), &AffirmationPhase::Idle);
        assert!(!widget.is_loading());
        assert_eq!(widget.selected_mood(), None);
    }

    #[test]
    fn pick_covers_every_index() {
        let choices = texts(&["a", "b", "c", "d"]);
        assert_eq!(pick_affirmation(&choices, 0.0).map(|t| t.as_str()), Some("a"));
        assert_eq!(pick_affirmation(&choices, 0.26).map(|t| t.as_str()), Some("b"));
        assert_eq!(pick_affirmation(&choices, 0.74).map(|t| t.as_str()), Some("c"));
        assert_eq!(pick_affirmation(&choices, 0.999).map(|t| t.as_str()), Some("d"));
        assert_eq!(pick_affirmation(&choices, 1.0).map(|t| t.as_str()), Some("d"));
        assert!(pick_affirmation(&[], 0.5).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn spawned_request_reports_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut widget = AffirmationWidget::default();
        let request = widget.select(Mood::Happy);
        let choices = texts(&["one", "two"]);

        let _task = spawn_affirmation(request, choices.clone(), Duration::from_millis(1500), tx);

        tokio::time::sleep(Duration::from_millis(1499)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(10)).await;
        let done = rx.try_recv().expect("completion after delay");
        assert_eq!(done.token, request.token);
        assert!(choices.iter().any(|c| c == &done.text));
    }

    #[tokio::test(start_paused = true)]
    async fn aborted_request_never_reports() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut widget = AffirmationWidget::default();
        let request = widget.select(Mood::Sad);
        let task = spawn_affirmation(request, texts(&["x"]), Duration::from_millis(100), tx);
        task.abort();

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(rx.try_recv().is_err());
    }
}
