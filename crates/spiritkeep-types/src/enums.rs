//! Enumeration types for the Spiritkeep backend.
//!
//! All enums serialize as `snake_case` strings, matching both the JSON
//! wire format consumed by the frontend and the TEXT columns in
//! `PostgreSQL`. The `as_str` / `parse` pairs are the canonical mapping
//! used by the data layer.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// GrowthStage
// ---------------------------------------------------------------------------

/// Coarse life-phase classification of a spiritling.
///
/// Stages are strictly ordered; a spiritling's stage is derived from its
/// level and never regresses. The ordering of the variants matters: the
/// derived [`Ord`] implementation is what guarantees monotonicity when the
/// growth rules take the maximum of the current and recomputed stage.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum GrowthStage {
    /// Newly created, levels 1 through 4.
    Egg,
    /// Levels 5 through 14.
    Infant,
    /// Levels 15 through 24.
    Adolescent,
    /// Levels 25 through 39.
    Adult,
    /// Levels 40 through 49.
    Transcendent,
    /// Level 50 and above.
    Elder,
}

impl GrowthStage {
    /// The `snake_case` string stored in the database for this stage.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Egg => "egg",
            Self::Infant => "infant",
            Self::Adolescent => "adolescent",
            Self::Adult => "adult",
            Self::Transcendent => "transcendent",
            Self::Elder => "elder",
        }
    }

    /// Parse the database representation back into a stage.
    ///
    /// Returns `None` for unrecognized input.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "egg" => Some(Self::Egg),
            "infant" => Some(Self::Infant),
            "adolescent" => Some(Self::Adolescent),
            "adult" => Some(Self::Adult),
            "transcendent" => Some(Self::Transcendent),
            "elder" => Some(Self::Elder),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Element
// ---------------------------------------------------------------------------

/// Elemental affinity assigned at creation. Immutable for the spiritling's
/// lifetime.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum Element {
    /// Fire affinity.
    Fire,
    /// Water affinity.
    Water,
    /// Wind affinity.
    Wind,
    /// Earth affinity.
    Earth,
    /// Light affinity.
    Light,
    /// Shadow affinity.
    Shadow,
}

impl Element {
    /// The `snake_case` string stored in the database for this element.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fire => "fire",
            Self::Water => "water",
            Self::Wind => "wind",
            Self::Earth => "earth",
            Self::Light => "light",
            Self::Shadow => "shadow",
        }
    }

    /// Parse the database representation back into an element.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "fire" => Some(Self::Fire),
            "water" => Some(Self::Water),
            "wind" => Some(Self::Wind),
            "earth" => Some(Self::Earth),
            "light" => Some(Self::Light),
            "shadow" => Some(Self::Shadow),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Temperament
// ---------------------------------------------------------------------------

/// Personality assigned at creation. Influences manual-action outcomes in
/// the API layer; the background engine carries it but does not read it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum Temperament {
    /// No behavioural modifiers.
    Normal,
    /// Gains more from training, tires faster.
    HardWorker,
    /// Recovers faster while resting, trains slower.
    Lazy,
    /// Hunger drops faster, food brings more happiness.
    Glutton,
    /// Prefers solitude.
    Loner,
    /// Loves play above all else.
    Playful,
}

impl Temperament {
    /// The `snake_case` string stored in the database for this temperament.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::HardWorker => "hard_worker",
            Self::Lazy => "lazy",
            Self::Glutton => "glutton",
            Self::Loner => "loner",
            Self::Playful => "playful",
        }
    }

    /// Parse the database representation back into a temperament.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "normal" => Some(Self::Normal),
            "hard_worker" => Some(Self::HardWorker),
            "lazy" => Some(Self::Lazy),
            "glutton" => Some(Self::Glutton),
            "loner" => Some(Self::Loner),
            "playful" => Some(Self::Playful),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// ActionKind
// ---------------------------------------------------------------------------

/// Tag attached to an action-log entry.
///
/// The background engine only ever emits the four autonomous kinds; the
/// API layer writes additional kinds (feeding, play, training, ...) through
/// the same log table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum ActionKind {
    /// The spiritling found food for itself.
    AutoEat,
    /// The spiritling played by itself.
    AutoPlay,
    /// The spiritling burned off surplus energy.
    AutoActivity,
    /// The spiritling gained a level.
    LevelUp,
}

impl ActionKind {
    /// The `snake_case` string stored in the database for this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AutoEat => "auto_eat",
            Self::AutoPlay => "auto_play",
            Self::AutoActivity => "auto_activity",
            Self::LevelUp => "level_up",
        }
    }

    /// Parse the database representation back into a kind.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "auto_eat" => Some(Self::AutoEat),
            "auto_play" => Some(Self::AutoPlay),
            "auto_activity" => Some(Self::AutoActivity),
            "level_up" => Some(Self::LevelUp),
            _ => None,
        }
    }
}
