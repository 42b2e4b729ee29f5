//! Catalog screen state: focus ring, lock computation, and the affirmation
//! widget.
//!
//! The screen never caches the subscription flag. Every query takes the
//! current value so a store change is visible on the next frame.

use zenpulse_types::{Catalog, MeditationItem, Mood, is_locked};

use crate::affirmation::AffirmationWidget;

/// Cards per row in the catalog grid.
pub const CARD_COLUMNS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFocus {
    /// The "Premium" call-to-action in the header. Only exists while not
    /// subscribed.
    PremiumButton,
    Mood(Mood),
    Card(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMove {
    Next,
    Prev,
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
pub struct CardView<'a> {
    pub index: usize,
    pub item: &'a MeditationItem,
    pub locked: bool,
}

#[must_use]
pub fn card_views(catalog: &Catalog, subscribed: bool) -> Vec<CardView<'_>> {
    catalog
        .meditations()
        .iter()
        .enumerate()
        .map(|(index, item)| CardView {
            index,
            item,
            locked: is_locked(item.premium, subscribed),
        })
        .collect()
}

/// What selecting a card leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemAction {
    OpenPaywall,
    ConfirmStart,
}

#[must_use]
pub fn item_action(item: &MeditationItem, subscribed: bool) -> ItemAction {
    if is_locked(item.premium, subscribed) {
        ItemAction::OpenPaywall
    } else {
        ItemAction::ConfirmStart
    }
}

/// Section badge next to the "Meditations" heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessSummary {
    Full,
    Partial { free: usize, total: usize },
}

#[must_use]
pub fn access_summary(catalog: &Catalog, subscribed: bool) -> AccessSummary {
    if subscribed {
        AccessSummary::Full
    } else {
        AccessSummary::Partial {
            free: catalog.free_count(),
            total: catalog.meditations().len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Greeting {
    Morning,
    Afternoon,
    Evening,
}

impl Greeting {
    #[must_use]
    pub const fn from_hour(hour: u32) -> Self {
        if hour < 12 {
            Greeting::Morning
        } else if hour < 18 {
            Greeting::Afternoon
        } else {
            Greeting::Evening
        }
    }

    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Greeting::Morning => "Good morning",
            Greeting::Afternoon => "Good afternoon",
            Greeting::Evening => "Good evening",
        }
    }
}

#[derive(Debug, Clone)]
pub struct CatalogScreen {
    focus: CatalogFocus,
    affirmation: AffirmationWidget,
    /// First visible card row.
    scroll_row: usize,
}

impl Default for CatalogScreen {
    fn default() -> Self {
        Self {
            focus: CatalogFocus::Mood(Mood::Happy),
            affirmation: AffirmationWidget::default(),
            scroll_row: 0,
        }
    }
}

impl CatalogScreen {
    #[must_use]
    pub fn focus(&self) -> CatalogFocus {
        self.focus
    }

    #[must_use]
    pub fn affirmation(&self) -> &AffirmationWidget {
        &self.affirmation
    }

    pub fn affirmation_mut(&mut self) -> &mut AffirmationWidget {
        &mut self.affirmation
    }

    pub fn set_focus(&mut self, focus: CatalogFocus, subscribed: bool, card_count: usize) {
        self.focus = focus;
        self.normalize_focus(subscribed, card_count);
    }

    /// Mood buttons are always present, so no normalization is needed.
    pub fn focus_mood(&mut self, mood: Mood) {
        self.focus = CatalogFocus::Mood(mood);
    }

    /// Pull focus back onto something that exists, e.g. after subscribing
    /// removes the premium button.
    pub fn normalize_focus(&mut self, subscribed: bool, card_count: usize) {
        self.focus = match self.focus {
            CatalogFocus::PremiumButton if subscribed => CatalogFocus::Mood(Mood::Happy),
            CatalogFocus::Card(_) if card_count == 0 => CatalogFocus::Mood(Mood::Happy),
            CatalogFocus::Card(i) if i >= card_count => CatalogFocus::Card(card_count - 1),
            other => other,
        };
    }

    pub fn move_focus(&mut self, step: FocusMove, subscribed: bool, card_count: usize) {
        self.normalize_focus(subscribed, card_count);
        let ring = focus_ring(subscribed, card_count);
        let Some(pos) = ring.iter().position(|f| *f == self.focus) else {
            return;
        };

        self.focus = match step {
            FocusMove::Next => ring[(pos + 1) % ring.len()],
            FocusMove::Prev => ring[(pos + ring.len() - 1) % ring.len()],
            FocusMove::Left => {
                if pos == 0 {
                    self.focus
                } else {
                    ring[pos - 1]
                }
            }
            FocusMove::Right => ring.get(pos + 1).copied().unwrap_or(self.focus),
            FocusMove::Up => self.focus_above(subscribed),
            FocusMove::Down => self.focus_below(card_count),
        };
    }

    /// Adjust the scroll so the focused card row is within `visible_rows`,
    /// returning the first visible row.
    pub fn scroll_to_focus(&mut self, visible_rows: usize) -> usize {
        let visible_rows = visible_rows.max(1);
        match self.focus {
            CatalogFocus::Card(i) => {
                let row = i / CARD_COLUMNS;
                if row < self.scroll_row {
                    self.scroll_row = row;
                } else if row >= self.scroll_row + visible_rows {
                    self.scroll_row = row + 1 - visible_rows;
                }
            }
            CatalogFocus::PremiumButton | CatalogFocus::Mood(_) => self.scroll_row = 0,
        }
        self.scroll_row
    }

    fn focus_above(&self, subscribed: bool) -> CatalogFocus {
        match self.focus {
            CatalogFocus::PremiumButton => CatalogFocus::PremiumButton,
            CatalogFocus::Mood(mood) => {
                if subscribed {
                    CatalogFocus::Mood(mood)
                } else {
                    CatalogFocus::PremiumButton
                }
            }
            CatalogFocus::Card(i) if i < CARD_COLUMNS => CatalogFocus::Mood(Mood::Happy),
            CatalogFocus::Card(i) => CatalogFocus::Card(i - CARD_COLUMNS),
        }
    }

    fn focus_below(&self, card_count: usize) -> CatalogFocus {
        match self.focus {
            CatalogFocus::PremiumButton => CatalogFocus::Mood(Mood::Happy),
            CatalogFocus::Mood(mood) => {
                if card_count == 0 {
                    CatalogFocus::Mood(mood)
                } else {
                    CatalogFocus::Card(0)
                }
            }
            CatalogFocus::Card(i) => {
                let below = i + CARD_COLUMNS;
                if below < card_count {
                    CatalogFocus::Card(below)
                } else {
                    CatalogFocus::Card(i)
                }
            }
        }
    }
}

/// Linear tab order: premium button (when shown), moods, then cards.
#[must_use]
pub fn focus_ring(subscribed: bool, card_count: usize) -> Vec<CatalogFocus> {
    let mut ring = Vec::with_capacity(1 + Mood::ALL.len() + card_count);
    if !subscribed {
        ring.push(CatalogFocus::PremiumButton);
    }
    ring.extend(Mood::ALL.iter().copied().map(CatalogFocus::Mood));
    ring.extend((0..card_count).map(CatalogFocus::Card));
    ring
}
