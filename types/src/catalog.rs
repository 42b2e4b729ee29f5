//! Static content: meditation sessions, affirmations, and paywall copy.
//!
//! A [`Catalog`] is built once at startup and never mutated afterwards.
//! Construction validates the invariants the screens rely on, so the UI
//! layer can index affirmation lists without checking for emptiness.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Artwork, Mood, NonEmptyString, PlanOptions};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeditationId(String);

impl MeditationId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MeditationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeditationItem {
    pub id: MeditationId,
    pub title: NonEmptyString,
    #[serde(default)]
    pub description: String,
    /// Session length in minutes.
    #[serde(rename = "duration")]
    pub duration_minutes: u32,
    /// Artwork key, see [`Artwork::resolve`].
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub premium: bool,
}

impl MeditationItem {
    #[must_use]
    pub fn artwork(&self) -> Artwork {
        Artwork::resolve(&self.image)
    }
}

/// An item is locked iff it is premium and there is no active subscription.
#[must_use]
pub const fn is_locked(premium: bool, subscribed: bool) -> bool {
    premium && !subscribed
}

/// Affirmation lists keyed by mood. Every list is non-empty once validated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AffirmationTable {
    #[serde(default)]
    pub happy: Vec<NonEmptyString>,
    #[serde(default)]
    pub neutral: Vec<NonEmptyString>,
    #[serde(default)]
    pub sad: Vec<NonEmptyString>,
}

impl AffirmationTable {
    #[must_use]
    pub fn get(&self, mood: Mood) -> &[NonEmptyString] {
        match mood {
            Mood::Happy => &self.happy,
            Mood::Neutral => &self.neutral,
            Mood::Sad => &self.sad,
        }
    }

    #[must_use]
    pub fn contains(&self, mood: Mood, text: &str) -> bool {
        self.get(mood).iter().any(|entry| entry.as_str() == text)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog has no meditations")]
    Empty,
    #[error("duplicate meditation id `{id}`")]
    DuplicateId { id: MeditationId },
    #[error("meditation `{id}` has a zero duration")]
    ZeroDuration { id: MeditationId },
    #[error("no affirmations configured for mood `{mood}`")]
    NoAffirmations { mood: Mood },
}

#[derive(Debug, Clone)]
pub struct Catalog {
    meditations: Vec<MeditationItem>,
    plans: PlanOptions,
    affirmations: AffirmationTable,
    features: Vec<NonEmptyString>,
}

impl Catalog {
    pub fn new(
        meditations: Vec<MeditationItem>,
        plans: PlanOptions,
        affirmations: AffirmationTable,
        features: Vec<NonEmptyString>,
    ) -> Result<Self, CatalogError> {
        if meditations.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(meditations.len());
        for item in &meditations {
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: item.id.clone(),
                });
            }
            if item.duration_minutes == 0 {
                return Err(CatalogError::ZeroDuration {
                    id: item.id.clone(),
                });
            }
        }

        for mood in Mood::ALL {
            if affirmations.get(mood).is_empty() {
                return Err(CatalogError::NoAffirmations { mood });
            }
        }

        Ok(Self {
            meditations,
            plans,
            affirmations,
            features,
        })
    }

    #[must_use]
    pub fn meditations(&self) -> &[MeditationItem] {
        &self.meditations
    }

    #[must_use]
    pub fn meditation(&self, id: &MeditationId) -> Option<&MeditationItem> {
        self.meditations.iter().find(|item| &item.id == id)
    }

    #[must_use]
    pub fn plans(&self) -> &PlanOptions {
        &self.plans
    }

    /// Never empty for a validated catalog.
    #[must_use]
    pub fn affirmations(&self, mood: Mood) -> &[NonEmptyString] {
        self.affirmations.get(mood)
    }

    #[must_use]
    pub fn affirmation_table(&self) -> &AffirmationTable {
        &self.affirmations
    }

    #[must_use]
    pub fn features(&self) -> &[NonEmptyString] {
        &self.features
    }

    /// Number of items reachable without a subscription.
    #[must_use]
    pub fn free_count(&self) -> usize {
        self.meditations.iter().filter(|item| !item.premium).count()
    }
}
