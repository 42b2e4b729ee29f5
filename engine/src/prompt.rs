//! Modal confirmation prompts.
//!
//! A prompt captures all input while open. Pressing a button yields its
//! [`PromptAction`]; the app decides what the action does.

use zenpulse_types::{MeditationId, MeditationItem};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAction {
    Dismiss,
    /// Starting a session is not implemented past this point.
    StartSession(MeditationId),
    ReturnToCatalog,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonRole {
    Cancel,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptButton {
    pub label: &'static str,
    pub role: ButtonRole,
    pub action: PromptAction,
}

#[derive(Debug, Clone)]
pub struct Prompt {
    title: String,
    body: String,
    buttons: Vec<PromptButton>,
    selected: usize,
}

impl Prompt {
    /// Initial selection is the first default-role button.
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>, buttons: Vec<PromptButton>) -> Self {
        let selected = buttons
            .iter()
            .position(|b| b.role == ButtonRole::Default)
            .unwrap_or(0);
        Self {
            title: title.into(),
            body: body.into(),
            buttons,
            selected,
        }
    }

    #[must_use]
    pub fn start_session(item: &MeditationItem) -> Self {
        let mut body = format!(
            "Ready to begin a {}-minute session?",
            item.duration_minutes
        );
        if !item.description.trim().is_empty() {
            body.push_str("\n\n");
            body.push_str(item.description.trim());
        }
        Self::new(
            item.title.as_str(),
            body,
            vec![
                PromptButton {
                    label: "Cancel",
                    role: ButtonRole::Cancel,
                    action: PromptAction::Dismiss,
                },
                PromptButton {
                    label: "Start",
                    role: ButtonRole::Default,
                    action: PromptAction::StartSession(item.id.clone()),
                },
            ],
        )
    }

    #[must_use]
    pub fn welcome_premium() -> Self {
        Self::new(
            "Welcome to Premium!",
            "Your free trial is active. Enjoy the full library.",
            vec![PromptButton {
                label: "Start meditating",
                role: ButtonRole::Default,
                action: PromptAction::ReturnToCatalog,
            }],
        )
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn buttons(&self) -> &[PromptButton] {
        &self.buttons
    }

    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self) {
        if !self.buttons.is_empty() {
            self.selected = (self.selected + 1) % self.buttons.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.buttons.is_empty() {
            self.selected = (self.selected + self.buttons.len() - 1) % self.buttons.len();
        }
    }

    #[must_use]
    pub fn selected_action(&self) -> PromptAction {
        self.buttons
            .get(self.selected)
            .map_or(PromptAction::Dismiss, |b| b.action.clone())
    }

    /// Action for Esc: the cancel button, or the only button when there is
    /// exactly one.
    #[must_use]
    pub fn cancel_action(&self) -> PromptAction {
        if let Some(cancel) = self.buttons.iter().find(|b| b.role == ButtonRole::Cancel) {
            return cancel.action.clone();
        }
        match self.buttons.as_slice() {
            [only] => only.action.clone(),
            _ => PromptAction::Dismiss,
        }
    }
}
