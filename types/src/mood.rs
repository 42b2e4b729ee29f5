use serde::{Deserialize, Serialize};

/// How the user feels today. Keys the affirmation lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Neutral,
    Sad,
}

impl Mood {
    pub const ALL: [Mood; 3] = [Mood::Happy, Mood::Neutral, Mood::Sad];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Mood::Happy => "Joyful",
            Mood::Neutral => "Neutral",
            Mood::Sad => "Sad",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Neutral => "neutral",
            Mood::Sad => "sad",
        }
    }

    /// Position in [`Mood::ALL`], which is also the on-screen order.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Mood::Happy => 0,
            Mood::Neutral => 1,
            Mood::Sad => 2,
        }
    }

    /// Maps the `1`/`2`/`3` quick-pick keys.
    #[must_use]
    pub fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '1' => Some(Mood::Happy),
            '2' => Some(Mood::Neutral),
            '3' => Some(Mood::Sad),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
