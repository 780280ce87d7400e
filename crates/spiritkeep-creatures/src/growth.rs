//! Level-up mechanics and growth-stage classification.
//!
//! # Level-Up Formula
//!
//! Experience required to advance from level N to N+1 is `N * 100`.
//! A level-up resets experience to 0 and awards +1 to every stat (capped
//! at [`STAT_CAP`]). At most one level is gained per check: surplus
//! experience beyond the threshold is discarded by the reset. This is the
//! live game's behaviour and owner-visible, so it is kept as-is rather
//! than carrying the surplus forward.
//!
//! # Growth Stages
//!
//! The stage is a pure function of level, checked high-to-low:
//! 50+ elder, 40+ transcendent, 25+ adult, 15+ adolescent, 5+ infant,
//! below 5 egg. Because level never decreases, neither does the stage;
//! [`try_level_up`] additionally takes the maximum with the current stage
//! so a stored record can never be regressed by a recomputation.

use spiritkeep_types::{GrowthStage, STAT_CAP, Spiritling};

use crate::error::CreatureError;

/// Experience multiplier: level N requires `N * XP_PER_LEVEL` to advance.
pub const XP_PER_LEVEL: u32 = 100;

/// Minimum level for [`GrowthStage::Infant`].
pub const INFANT_LEVEL: u32 = 5;

/// Minimum level for [`GrowthStage::Adolescent`].
pub const ADOLESCENT_LEVEL: u32 = 15;

/// Minimum level for [`GrowthStage::Adult`].
pub const ADULT_LEVEL: u32 = 25;

/// Minimum level for [`GrowthStage::Transcendent`].
pub const TRANSCENDENT_LEVEL: u32 = 40;

/// Minimum level for [`GrowthStage::Elder`].
pub const ELDER_LEVEL: u32 = 50;

/// Experience required to advance from the given level to the next.
///
/// # Errors
///
/// Returns [`CreatureError::ArithmeticOverflow`] if `level * 100` does not
/// fit in a `u32`.
pub fn required_experience(level: u32) -> Result<u32, CreatureError> {
    level
        .checked_mul(XP_PER_LEVEL)
        .ok_or_else(|| CreatureError::ArithmeticOverflow {
            context: format!("required experience for level {level}"),
        })
}

/// Classify a level into its growth stage. Thresholds are checked
/// high-to-low so the highest applicable stage wins.
pub const fn stage_for_level(level: u32) -> GrowthStage {
    if level >= ELDER_LEVEL {
        GrowthStage::Elder
    } else if level >= TRANSCENDENT_LEVEL {
        GrowthStage::Transcendent
    } else if level >= ADULT_LEVEL {
        GrowthStage::Adult
    } else if level >= ADOLESCENT_LEVEL {
        GrowthStage::Adolescent
    } else if level >= INFANT_LEVEL {
        GrowthStage::Infant
    } else {
        GrowthStage::Egg
    }
}

/// Check for and apply a single level-up.
///
/// If the spiritling's experience has reached the requirement for its
/// current level: the level increments by one, experience resets to 0,
/// every stat gains +1 (capped at [`STAT_CAP`]), and the growth stage is
/// recomputed from the new level (never regressing). Returns `true` when
/// a level was gained, `false` with no mutation otherwise.
///
/// At most one level is gained per call, even if the accumulated
/// experience would satisfy the next threshold too.
///
/// # Errors
///
/// Returns [`CreatureError::ArithmeticOverflow`] if the progression math
/// overflows.
pub fn try_level_up(spiritling: &mut Spiritling) -> Result<bool, CreatureError> {
    let required = required_experience(spiritling.level)?;
    if spiritling.experience < required {
        return Ok(false);
    }

    spiritling.level =
        spiritling
            .level
            .checked_add(1)
            .ok_or_else(|| CreatureError::ArithmeticOverflow {
                context: String::from("level increment overflow"),
            })?;
    spiritling.experience = 0;

    // Every stat grows a little with each level.
    raise(&mut spiritling.stats.health);
    raise(&mut spiritling.stats.agility);
    raise(&mut spiritling.stats.intelligence);
    raise(&mut spiritling.stats.friendliness);
    raise(&mut spiritling.stats.resilience);
    raise(&mut spiritling.stats.luck);

    let recomputed = stage_for_level(spiritling.level);
    if recomputed > spiritling.growth_stage {
        spiritling.growth_stage = recomputed;
    }

    Ok(true)
}

/// Award one point to a stat, capped at [`STAT_CAP`].
fn raise(stat: &mut u32) {
    *stat = stat.saturating_add(1);
    if *stat > STAT_CAP {
        *stat = STAT_CAP;
    }
}

#[cfg(test)]
mod tests {
    use spiritkeep_types::{Element, OwnerId, Temperament};

    use super::*;

    fn test_spiritling() -> Spiritling {
        Spiritling::hatch(OwnerId::new(), "Pip", Element::Wind, Temperament::Normal)
    }

    #[test]
    fn required_experience_scales_with_level() {
        assert_eq!(required_experience(1).ok(), Some(100));
        assert_eq!(required_experience(7).ok(), Some(700));
    }

    #[test]
    fn no_level_up_below_requirement() {
        let mut s = test_spiritling();
        s.experience = 99;
        let before = s.clone();
        assert_eq!(try_level_up(&mut s).ok(), Some(false));
        assert_eq!(s, before);
    }

    #[test]
    fn level_up_check_is_idempotent_after_no_op() {
        let mut s = test_spiritling();
        s.experience = 50;
        assert_eq!(try_level_up(&mut s).ok(), Some(false));
        let after_first = s.clone();
        assert_eq!(try_level_up(&mut s).ok(), Some(false));
        assert_eq!(s, after_first);
    }

    #[test]
    fn level_up_at_exact_threshold() {
        let mut s = test_spiritling();
        s.level = 3;
        s.experience = 300;
        assert_eq!(try_level_up(&mut s).ok(), Some(true));
        assert_eq!(s.level, 4);
        assert_eq!(s.experience, 0);
        assert_eq!(s.stats.health, 11);
        assert_eq!(s.stats.agility, 11);
        assert_eq!(s.stats.intelligence, 11);
        assert_eq!(s.stats.friendliness, 11);
        assert_eq!(s.stats.resilience, 11);
        assert_eq!(s.stats.luck, 11);
    }

    #[test]
    fn stat_gain_caps_at_100() {
        let mut s = test_spiritling();
        s.stats.luck = STAT_CAP;
        s.experience = 100;
        assert_eq!(try_level_up(&mut s).ok(), Some(true));
        assert_eq!(s.stats.luck, STAT_CAP);
        assert_eq!(s.stats.health, 11);
    }

    #[test]
    fn surplus_experience_is_discarded() {
        // 250 experience at level 1 covers the level-1 threshold twice
        // over, but a single check grants exactly one level and zeroes
        // the remainder.
        let mut s = test_spiritling();
        s.experience = 250;
        assert_eq!(try_level_up(&mut s).ok(), Some(true));
        assert_eq!(s.level, 2);
        assert_eq!(s.experience, 0);
        assert_eq!(try_level_up(&mut s).ok(), Some(false));
    }

    #[test]
    fn stage_thresholds() {
        assert_eq!(stage_for_level(1), GrowthStage::Egg);
        assert_eq!(stage_for_level(4), GrowthStage::Egg);
        assert_eq!(stage_for_level(5), GrowthStage::Infant);
        assert_eq!(stage_for_level(14), GrowthStage::Infant);
        assert_eq!(stage_for_level(15), GrowthStage::Adolescent);
        assert_eq!(stage_for_level(25), GrowthStage::Adult);
        assert_eq!(stage_for_level(40), GrowthStage::Transcendent);
        assert_eq!(stage_for_level(50), GrowthStage::Elder);
        assert_eq!(stage_for_level(99), GrowthStage::Elder);
    }

    #[test]
    fn stage_updates_on_crossing_threshold() {
        let mut s = test_spiritling();
        s.level = 4;
        s.growth_stage = GrowthStage::Egg;
        s.experience = 400;
        assert_eq!(try_level_up(&mut s).ok(), Some(true));
        assert_eq!(s.level, 5);
        assert_eq!(s.growth_stage, GrowthStage::Infant);
    }

    #[test]
    fn stage_never_regresses() {
        // A record whose stored stage is ahead of what its level implies
        // keeps the stored stage.
        let mut s = test_spiritling();
        s.level = 10;
        s.growth_stage = GrowthStage::Adult;
        s.experience = 1000;
        assert_eq!(try_level_up(&mut s).ok(), Some(true));
        assert_eq!(s.growth_stage, GrowthStage::Adult);
    }

    #[test]
    fn stage_is_monotone_across_level_up_sequences() {
        let mut s = test_spiritling();
        let mut previous = s.growth_stage;
        for _ in 0..60 {
            s.experience = u32::MAX / 200; // Always above the requirement.
            if try_level_up(&mut s).ok() != Some(true) {
                break;
            }
            assert!(s.growth_stage >= previous);
            previous = s.growth_stage;
        }
        assert_eq!(s.growth_stage, GrowthStage::Elder);
    }

    #[test]
    fn training_event_then_level_up() {
        // End-to-end: a +10 training award pushes a level-1 spiritling
        // with 95 experience over the threshold.
        let mut s = test_spiritling();
        s.experience = 95;
        s.experience = s.experience.saturating_add(10);
        assert_eq!(try_level_up(&mut s).ok(), Some(true));
        assert_eq!(s.level, 2);
        assert_eq!(s.experience, 0);
        assert_eq!(s.stats.health, 11);
        assert_eq!(s.stats.luck, 11);
        assert_eq!(s.growth_stage, GrowthStage::Egg);
    }
}
