//! Offline catch-up: condition drift for elapsed wall-clock time.
//!
//! The background engine only runs while the process is up, and owners can
//! be away for hours. When an owner returns, the API layer calls
//! [`apply_elapsed`] with the minutes since the record was last written so
//! the spiritling's conditions reflect the time away. Decline is linear in
//! whole minute-buckets (no randomness, so the result is reproducible from
//! the timestamps alone) and the window is capped at 24 hours: beyond a
//! day away, nothing further decays.

use spiritkeep_types::Spiritling;

use crate::error::CreatureError;
use crate::growth;

/// Maximum minutes of elapsed time applied in one catch-up (24 hours).
pub const MAX_CATCH_UP_MINUTES: u32 = 1440;

/// Minutes of absence per point of hunger lost.
pub const HUNGER_MINUTES: u32 = 10;

/// Minutes of absence per point of energy lost.
pub const ENERGY_MINUTES: u32 = 15;

/// Minutes of absence per point of happiness lost.
pub const HAPPINESS_MINUTES: u32 = 20;

/// Minutes of absence per point of cleanliness lost.
pub const CLEANLINESS_MINUTES: u32 = 30;

/// Apply elapsed-time condition drift to a spiritling.
///
/// `minutes` is the wall-clock time since the record was last updated,
/// capped at [`MAX_CATCH_UP_MINUTES`]. Ends with a single level-up check
/// (manual actions may have banked experience while the engine was down);
/// returns `true` when that check fired.
///
/// Zero elapsed minutes is a no-op.
///
/// # Errors
///
/// Returns [`CreatureError::ArithmeticOverflow`] if the level-up check
/// overflows.
pub fn apply_elapsed(spiritling: &mut Spiritling, minutes: u64) -> Result<bool, CreatureError> {
    if minutes == 0 {
        return Ok(false);
    }
    let capped =
        u32::try_from(minutes.min(u64::from(MAX_CATCH_UP_MINUTES))).unwrap_or(MAX_CATCH_UP_MINUTES);

    let conditions = &mut spiritling.conditions;
    conditions.hunger = conditions.hunger.saturating_sub(per(capped, HUNGER_MINUTES));
    conditions.energy = conditions.energy.saturating_sub(per(capped, ENERGY_MINUTES));
    conditions.happiness = conditions
        .happiness
        .saturating_sub(per(capped, HAPPINESS_MINUTES));
    conditions.cleanliness = conditions
        .cleanliness
        .saturating_sub(per(capped, CLEANLINESS_MINUTES));

    growth::try_level_up(spiritling)
}

/// Points lost for `minutes` of absence at one point per `window` minutes.
const fn per(minutes: u32, window: u32) -> u32 {
    match minutes.checked_div(window) {
        Some(points) => points,
        None => 0,
    }
}
