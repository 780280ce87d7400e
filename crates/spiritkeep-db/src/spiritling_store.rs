//! Spiritling record persistence.
//!
//! [`PgSpiritlingStore`] is the production implementation of the engine's
//! `SpiritlingStore` seam. Rows use runtime types rather than compile-time
//! checked types to avoid requiring a live database during builds; the
//! row/domain conversion is explicit so a bad enum string surfaces as a
//! typed corrupt-row error instead of a panic.
//!
//! Saves are last-writer-wins: the engine and the API layer can both
//! write the same record, and the later save simply overwrites. The game
//! accepts the rare lost update this implies.

use spiritkeep_core::store::{SpiritlingStore, StoreError};
use spiritkeep_types::{
    Conditions, Element, GrowthStage, Spiritling, SpiritlingId, Stats, Temperament,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DbError;

/// Operations on the `spiritlings` table.
#[derive(Clone)]
pub struct PgSpiritlingStore {
    pool: PgPool,
}

impl PgSpiritlingStore {
    /// Create a store bound to a connection pool.
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_ids(&self) -> Result<Vec<SpiritlingId>, DbError> {
        let ids = sqlx::query_scalar::<_, Uuid>(r"SELECT id FROM spiritlings ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(ids.into_iter().map(SpiritlingId::from).collect())
    }

    async fn fetch(&self, id: SpiritlingId) -> Result<Option<Spiritling>, DbError> {
        let row = sqlx::query_as::<_, SpiritlingRow>(
            r"SELECT id, owner_id, name, element, temperament, level, experience,
                     growth_stage, health_stat, agility_stat, intelligence_stat,
                     friendliness_stat, resilience_stat, luck_stat,
                     hunger, happiness, energy, health_status, cleanliness,
                     current_action, action_data, created_at, updated_at
              FROM spiritlings
              WHERE id = $1",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await?;

        row.map(SpiritlingRow::into_domain).transpose()
    }

    async fn upsert(&self, spiritling: &Spiritling) -> Result<(), DbError> {
        sqlx::query(
            r"INSERT INTO spiritlings (
                  id, owner_id, name, element, temperament, level, experience,
                  growth_stage, health_stat, agility_stat, intelligence_stat,
                  friendliness_stat, resilience_stat, luck_stat,
                  hunger, happiness, energy, health_status, cleanliness,
                  current_action, action_data, created_at, updated_at
              ) VALUES (
                  $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                  $15, $16, $17, $18, $19, $20, $21, $22, $23
              )
              ON CONFLICT (id) DO UPDATE SET
                  name = EXCLUDED.name,
                  level = EXCLUDED.level,
                  experience = EXCLUDED.experience,
                  growth_stage = EXCLUDED.growth_stage,
                  health_stat = EXCLUDED.health_stat,
                  agility_stat = EXCLUDED.agility_stat,
                  intelligence_stat = EXCLUDED.intelligence_stat,
                  friendliness_stat = EXCLUDED.friendliness_stat,
                  resilience_stat = EXCLUDED.resilience_stat,
                  luck_stat = EXCLUDED.luck_stat,
                  hunger = EXCLUDED.hunger,
                  happiness = EXCLUDED.happiness,
                  energy = EXCLUDED.energy,
                  health_status = EXCLUDED.health_status,
                  cleanliness = EXCLUDED.cleanliness,
                  current_action = EXCLUDED.current_action,
                  action_data = EXCLUDED.action_data,
                  updated_at = EXCLUDED.updated_at",
        )
        .bind(spiritling.id.into_inner())
        .bind(spiritling.owner_id.into_inner())
        .bind(&spiritling.name)
        .bind(spiritling.element.as_str())
        .bind(spiritling.temperament.as_str())
        .bind(to_db_int(spiritling.level))
        .bind(to_db_int(spiritling.experience))
        .bind(spiritling.growth_stage.as_str())
        .bind(to_db_int(spiritling.stats.health))
        .bind(to_db_int(spiritling.stats.agility))
        .bind(to_db_int(spiritling.stats.intelligence))
        .bind(to_db_int(spiritling.stats.friendliness))
        .bind(to_db_int(spiritling.stats.resilience))
        .bind(to_db_int(spiritling.stats.luck))
        .bind(to_db_int(spiritling.conditions.hunger))
        .bind(to_db_int(spiritling.conditions.happiness))
        .bind(to_db_int(spiritling.conditions.energy))
        .bind(to_db_int(spiritling.conditions.health_status))
        .bind(to_db_int(spiritling.conditions.cleanliness))
        .bind(&spiritling.current_action)
        .bind(&spiritling.action_data)
        .bind(spiritling.created_at)
        .bind(spiritling.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

impl SpiritlingStore for PgSpiritlingStore {
    async fn list_ids(&self) -> Result<Vec<SpiritlingId>, StoreError> {
        Ok(self.fetch_ids().await?)
    }

    async fn load(&self, id: SpiritlingId) -> Result<Option<Spiritling>, StoreError> {
        Ok(self.fetch(id).await?)
    }

    async fn save(&self, spiritling: &Spiritling) -> Result<(), StoreError> {
        Ok(self.upsert(spiritling).await?)
    }
}

/// A row from the `spiritlings` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SpiritlingRow {
    /// Primary key.
    pub id: Uuid,
    /// Owning user.
    pub owner_id: Uuid,
    /// Display name.
    pub name: String,
    /// Element as its stored string.
    pub element: String,
    /// Temperament as its stored string.
    pub temperament: String,
    /// Current level.
    pub level: i32,
    /// Experience toward the next level.
    pub experience: i32,
    /// Growth stage as its stored string.
    pub growth_stage: String,
    /// Health stat.
    pub health_stat: i32,
    /// Agility stat.
    pub agility_stat: i32,
    /// Intelligence stat.
    pub intelligence_stat: i32,
    /// Friendliness stat.
    pub friendliness_stat: i32,
    /// Resilience stat.
    pub resilience_stat: i32,
    /// Luck stat.
    pub luck_stat: i32,
    /// Hunger condition.
    pub hunger: i32,
    /// Happiness condition.
    pub happiness: i32,
    /// Energy condition.
    pub energy: i32,
    /// Health-status condition.
    pub health_status: i32,
    /// Cleanliness condition.
    pub cleanliness: i32,
    /// In-progress manual action.
    pub current_action: String,
    /// Scratch data for the manual action.
    pub action_data: Option<serde_json::Value>,
    /// Creation timestamp.
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Last-write timestamp.
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl SpiritlingRow {
    /// Convert a stored row into the domain model.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Corrupt`] if an enum string is unrecognized or
    /// a numeric column is negative.
    pub fn into_domain(self) -> Result<Spiritling, DbError> {
        let element = Element::parse(&self.element).ok_or_else(|| DbError::Corrupt {
            message: format!("unknown element '{}' for spiritling {}", self.element, self.id),
        })?;
        let temperament =
            Temperament::parse(&self.temperament).ok_or_else(|| DbError::Corrupt {
                message: format!(
                    "unknown temperament '{}' for spiritling {}",
                    self.temperament, self.id
                ),
            })?;
        let growth_stage =
            GrowthStage::parse(&self.growth_stage).ok_or_else(|| DbError::Corrupt {
                message: format!(
                    "unknown growth stage '{}' for spiritling {}",
                    self.growth_stage, self.id
                ),
            })?;

        Ok(Spiritling {
            id: SpiritlingId::from(self.id),
            owner_id: self.owner_id.into(),
            name: self.name,
            element,
            temperament,
            level: from_db_int(self.level, "level", self.id)?,
            experience: from_db_int(self.experience, "experience", self.id)?,
            growth_stage,
            stats: Stats {
                health: from_db_int(self.health_stat, "health_stat", self.id)?,
                agility: from_db_int(self.agility_stat, "agility_stat", self.id)?,
                intelligence: from_db_int(self.intelligence_stat, "intelligence_stat", self.id)?,
                friendliness: from_db_int(self.friendliness_stat, "friendliness_stat", self.id)?,
                resilience: from_db_int(self.resilience_stat, "resilience_stat", self.id)?,
                luck: from_db_int(self.luck_stat, "luck_stat", self.id)?,
            },
            conditions: Conditions {
                hunger: from_db_int(self.hunger, "hunger", self.id)?,
                happiness: from_db_int(self.happiness, "happiness", self.id)?,
                energy: from_db_int(self.energy, "energy", self.id)?,
                health_status: from_db_int(self.health_status, "health_status", self.id)?,
                cleanliness: from_db_int(self.cleanliness, "cleanliness", self.id)?,
            },
            current_action: self.current_action,
            action_data: self.action_data,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Widen a domain value for an `INTEGER` column.
fn to_db_int(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Narrow an `INTEGER` column back to the domain type.
fn from_db_int(value: i32, column: &str, id: Uuid) -> Result<u32, DbError> {
    u32::try_from(value).map_err(|_| DbError::Corrupt {
        message: format!("negative {column} for spiritling {id}"),
    })
}
