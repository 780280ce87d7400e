//! Per-tick condition decay applied to every spiritling.
//!
//! One application of [`apply_decay`] advances a spiritling's conditions by
//! one tick of background time:
//!
//! - Hunger falls by a small random amount
//! - Happiness falls, faster while the spiritling is hungry
//! - Energy passively regenerates
//! - Health suffers while cleanliness is poor
//! - Cleanliness slowly declines
//!
//! All steps run within a single application, each behind its own guard.
//! The order is load-bearing in one place: the health check reads the
//! cleanliness value *before* this tick's cleanliness decay, so a
//! spiritling sitting exactly at the grime threshold is not damaged on the
//! tick that drops it below.
//!
//! All arithmetic saturates and clamps to `[0, STAT_CAP]`. No panics, no
//! silent overflow.

use rand::Rng;
use spiritkeep_types::{STAT_CAP, Spiritling};

use crate::config::CareConfig;
use crate::rolls;

/// Apply one tick of condition decay to a spiritling.
///
/// Mutates the record in place. Called once per tick per creature by the
/// tick processor; the happiness step reads the hunger value as already
/// reduced by this tick's hunger step.
pub fn apply_decay<R: Rng>(spiritling: &mut Spiritling, config: &CareConfig, rng: &mut R) {
    let conditions = &mut spiritling.conditions;

    // 1. Hunger falls.
    if conditions.hunger > 0 {
        conditions.hunger = conditions
            .hunger
            .saturating_sub(rolls::between(rng, config.hunger_decay));
    }

    // 2. Happiness falls, faster when hungry.
    let happiness_loss = if conditions.hunger < config.hungry_threshold {
        rolls::between(rng, config.happiness_decay_hungry)
    } else {
        rolls::between(rng, config.happiness_decay)
    };
    conditions.happiness = conditions.happiness.saturating_sub(happiness_loss);

    // 3. Energy passively regenerates.
    if conditions.energy < STAT_CAP {
        conditions.energy = conditions
            .energy
            .saturating_add(rolls::between(rng, config.energy_regen));
        if conditions.energy > STAT_CAP {
            conditions.energy = STAT_CAP;
        }
    }

    // 4. Poor hygiene risks health. Reads this tick's cleanliness, before
    //    step 5 reduces it.
    if conditions.cleanliness < config.grime_threshold {
        conditions.health_status = conditions
            .health_status
            .saturating_sub(rolls::between(rng, config.grime_damage));
    }

    // 5. Cleanliness declines.
    if conditions.cleanliness > 0 {
        conditions.cleanliness = conditions
            .cleanliness
            .saturating_sub(rolls::between(rng, config.cleanliness_decay));
    }
}
