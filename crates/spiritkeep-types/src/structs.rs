//! Core entity structs for the Spiritkeep backend.
//!
//! [`Spiritling`] is the owned virtual-pet record; [`ActionLogEntry`] is the
//! append-only log row written whenever a spiritling does something worth
//! telling its owner about. Both types flow to the frontend via `ts-rs`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{ActionKind, Element, GrowthStage, Temperament};
use crate::ids::{ActionLogId, OwnerId, SpiritlingId};

/// Upper bound for every stat and condition value.
pub const STAT_CAP: u32 = 100;

/// Starting value for each of the six stats at creation.
pub const STARTING_STAT: u32 = 10;

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// The six slowly-earned capability attributes.
///
/// Each value is clamped to `[0, STAT_CAP]`. Within the background engine
/// stats only ever increase (level-ups award +1 across the board); training
/// and items in the API layer are the other sources of increase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Stats {
    /// Physical constitution.
    pub health: u32,
    /// Speed and reflexes.
    pub agility: u32,
    /// Problem solving and learning.
    pub intelligence: u32,
    /// Affinity with other spiritlings and people.
    pub friendliness: u32,
    /// Resistance to setbacks.
    pub resilience: u32,
    /// Plain luck.
    pub luck: u32,
}

impl Stats {
    /// Stats every freshly hatched spiritling starts with.
    pub const fn starting() -> Self {
        Self {
            health: STARTING_STAT,
            agility: STARTING_STAT,
            intelligence: STARTING_STAT,
            friendliness: STARTING_STAT,
            resilience: STARTING_STAT,
            luck: STARTING_STAT,
        }
    }

    /// True when every stat lies within `[0, STAT_CAP]`.
    pub const fn in_range(&self) -> bool {
        self.health <= STAT_CAP
            && self.agility <= STAT_CAP
            && self.intelligence <= STAT_CAP
            && self.friendliness <= STAT_CAP
            && self.resilience <= STAT_CAP
            && self.luck <= STAT_CAP
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::starting()
    }
}

// ---------------------------------------------------------------------------
// Conditions
// ---------------------------------------------------------------------------

/// The five freely fluctuating well-being attributes.
///
/// Each value is clamped to `[0, STAT_CAP]`. These decay and recover every
/// tick of the background engine, and are also moved by owner actions
/// (feeding, washing, play) in the API layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Conditions {
    /// Satiety; 0 means starving.
    pub hunger: u32,
    /// Mood; decays faster when hungry.
    pub happiness: u32,
    /// Stamina; regenerates passively over time.
    pub energy: u32,
    /// Physical wellness; suffers under poor hygiene.
    pub health_status: u32,
    /// Hygiene; slowly declines until washed.
    pub cleanliness: u32,
}

impl Conditions {
    /// Conditions every freshly hatched spiritling starts with.
    pub const fn starting() -> Self {
        Self {
            hunger: STAT_CAP,
            happiness: STAT_CAP,
            energy: STAT_CAP,
            health_status: STAT_CAP,
            cleanliness: STAT_CAP,
        }
    }

    /// True when every condition lies within `[0, STAT_CAP]`.
    pub const fn in_range(&self) -> bool {
        self.hunger <= STAT_CAP
            && self.happiness <= STAT_CAP
            && self.energy <= STAT_CAP
            && self.health_status <= STAT_CAP
            && self.cleanliness <= STAT_CAP
    }
}

impl Default for Conditions {
    fn default() -> Self {
        Self::starting()
    }
}

// ---------------------------------------------------------------------------
// Spiritling
// ---------------------------------------------------------------------------

/// The owned virtual-pet entity.
///
/// Created and destroyed by the API layer; the background engine only reads
/// and mutates the progression and condition fields and never touches
/// identity or the immutable traits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Spiritling {
    /// Unique identifier.
    pub id: SpiritlingId,
    /// The user who owns this spiritling.
    pub owner_id: OwnerId,
    /// Display name chosen by the owner.
    pub name: String,
    /// Elemental affinity, fixed at creation.
    pub element: Element,
    /// Personality, fixed at creation.
    pub temperament: Temperament,
    /// Current level, starting at 1.
    pub level: u32,
    /// Experience toward the next level. Resets to 0 on level-up.
    pub experience: u32,
    /// Life phase derived from `level`. Never regresses.
    pub growth_stage: GrowthStage,
    /// The six capability attributes.
    pub stats: Stats,
    /// The five well-being attributes.
    pub conditions: Conditions,
    /// The manual action currently in progress (`"idle"` when none).
    pub current_action: String,
    /// Free-form scratch data for the in-progress manual action.
    pub action_data: Option<serde_json::Value>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last written. Refreshed on every save.
    pub updated_at: DateTime<Utc>,
}

impl Spiritling {
    /// Create a freshly hatched spiritling with default progression.
    ///
    /// Level 1, zero experience, [`GrowthStage::Egg`], starting stats of
    /// 10 and every condition full. Used by the creation API and by tests.
    pub fn hatch(owner_id: OwnerId, name: &str, element: Element, temperament: Temperament) -> Self {
        let now = Utc::now();
        Self {
            id: SpiritlingId::new(),
            owner_id,
            name: name.to_owned(),
            element,
            temperament,
            level: 1,
            experience: 0,
            growth_stage: GrowthStage::Egg,
            stats: Stats::starting(),
            conditions: Conditions::starting(),
            current_action: String::from("idle"),
            action_data: None,
            created_at: now,
            updated_at: now,
        }
    }
}

// ---------------------------------------------------------------------------
// ActionLogEntry
// ---------------------------------------------------------------------------

/// One immutable, append-only action-log row.
///
/// Entries are created as a side effect of autonomous actions and level-ups
/// (and by owner actions in the API layer). They are never updated or
/// deleted by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ActionLogEntry {
    /// Unique identifier.
    pub id: ActionLogId,
    /// The spiritling this entry is about.
    pub spiritling_id: SpiritlingId,
    /// What happened.
    pub kind: ActionKind,
    /// Human-readable message shown to the owner.
    pub message: String,
    /// When the entry was written.
    pub created_at: DateTime<Utc>,
}
