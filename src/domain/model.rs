use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_DIAL_SIZE: i64 = 100;
pub const DEFAULT_START_POSITION: i64 = 50;
/// Largest accepted dial. Keeps `position + turn` inside `i64` for any `u32` turn.
pub const MAX_DIAL_SIZE: i64 = u32::MAX as i64;

/// One signed rotation instruction: positive turns right, negative turns left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Turn(i64);

impl Turn {
    pub fn right(amount: u32) -> Self {
        Turn(i64::from(amount))
    }

    pub fn left(amount: u32) -> Self {
        Turn(-i64::from(amount))
    }

    pub fn amount(self) -> i64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl From<i64> for Turn {
    fn from(amount: i64) -> Self {
        Turn(amount)
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            write!(f, "L{}", self.0.unsigned_abs())
        } else {
            write!(f, "R{}", self.0)
        }
    }
}

/// Ordered, parsed turns. There is no way to mutate them after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Instructions {
    turns: Vec<Turn>,
}

impl Instructions {
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

impl From<Vec<Turn>> for Instructions {
    fn from(turns: Vec<Turn>) -> Self {
        Self { turns }
    }
}

/// Rule used to decide when a rotation counts as hitting zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialVariant {
    /// Part 1: count only rotations that end exactly on zero.
    Landing,
    /// Part 2: also count zero passes during a rotation, one per full lap.
    Crossing,
}

impl DialVariant {
    pub fn part(self) -> u8 {
        match self {
            DialVariant::Landing => 1,
            DialVariant::Crossing => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum VariantSelection {
    Landing,
    Crossing,
    #[default]
    Both,
}

impl VariantSelection {
    pub fn variants(self) -> &'static [DialVariant] {
        match self {
            VariantSelection::Landing => &[DialVariant::Landing],
            VariantSelection::Crossing => &[DialVariant::Crossing],
            VariantSelection::Both => &[DialVariant::Landing, DialVariant::Crossing],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialSettings {
    pub size: i64,
    pub start: i64,
}

impl Default for DialSettings {
    fn default() -> Self {
        Self {
            size: DEFAULT_DIAL_SIZE,
            start: DEFAULT_START_POSITION,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VariantOutcome {
    pub zero_count: u64,
    pub final_position: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DialReport {
    pub turns: usize,
    pub settings: DialSettings,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landing: Option<VariantOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crossing: Option<VariantOutcome>,
}

impl DialReport {
    pub fn outcome(&self, variant: DialVariant) -> Option<&VariantOutcome> {
        match variant {
            DialVariant::Landing => self.landing.as_ref(),
            DialVariant::Crossing => self.crossing.as_ref(),
        }
    }

    pub fn render_text(&self) -> String {
        let mut lines = Vec::new();
        for variant in [DialVariant::Landing, DialVariant::Crossing] {
            if let Some(outcome) = self.outcome(variant) {
                lines.push(format!(
                    "Day 1 part {}: {}",
                    variant.part(),
                    outcome.zero_count
                ));
            }
        }
        lines.join("\n")
    }
}
