//! Autonomous self-care behaviour evaluated once per tick.
//!
//! A spiritling left alone looks after itself, a little. Each tick it gets
//! three independent opportunities, each gated by a state threshold AND a
//! probability roll:
//!
//! - **Self-feed** -- hungry spiritlings sometimes forage (default 30%)
//! - **Self-play** -- bored spiritlings sometimes play alone (default 20%)
//! - **Idle activity** -- restless spiritlings sometimes burn energy
//!   (default 10%)
//!
//! The opportunities are not exclusive: all three may fire in one tick.
//! Every autonomous act earns a little experience, and the evaluation ends
//! with a level-up check. The returned [`ActionEvent`] list preserves
//! evaluation order (feed, play, activity, level-up) so callers can write
//! the action log in the order things happened.

use rand::Rng;
use spiritkeep_types::{ActionKind, STAT_CAP, Spiritling};

use crate::config::CareConfig;
use crate::error::CreatureError;
use crate::growth;
use crate::rolls;

/// Flavor lines for idle activities, chosen uniformly at random.
const ACTIVITY_FLAVORS: &[&str] = &[
    "went for a run around the island.",
    "practiced jumping over pebbles.",
    "rolled a ball around.",
    "is gazing at the clouds.",
];

/// One loggable thing a spiritling did on its own.
///
/// Produced by [`apply_autonomous_actions`]; the tick processor turns each
/// event into an action-log row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionEvent {
    /// The action-log tag for this event.
    pub kind: ActionKind,
    /// Human-readable message shown to the owner.
    pub message: String,
}

/// Evaluate one tick's worth of autonomous behaviour.
///
/// Mutates the spiritling in place and returns the events generated, in
/// evaluation order. Invoked at most once per tick per creature.
///
/// # Errors
///
/// Returns [`CreatureError::ArithmeticOverflow`] if the closing level-up
/// check overflows.
pub fn apply_autonomous_actions<R: Rng>(
    spiritling: &mut Spiritling,
    config: &CareConfig,
    rng: &mut R,
) -> Result<Vec<ActionEvent>, CreatureError> {
    let mut events = Vec::new();

    // Hungry spiritlings sometimes forage for themselves.
    if spiritling.conditions.hunger < config.hungry_threshold
        && rolls::percent(rng, config.self_feed_chance_pct)
    {
        let recovered = rolls::between(rng, config.self_feed_recovery);
        spiritling.conditions.hunger = spiritling.conditions.hunger.saturating_add(recovered);
        if spiritling.conditions.hunger > STAT_CAP {
            spiritling.conditions.hunger = STAT_CAP;
        }
        spiritling.experience = spiritling.experience.saturating_add(1);
        events.push(ActionEvent {
            kind: ActionKind::AutoEat,
            message: format!("{} foraged for a meal on its own.", spiritling.name),
        });
    }

    // Bored spiritlings sometimes play alone, at an energy cost.
    if spiritling.conditions.happiness < config.bored_threshold
        && rolls::percent(rng, config.self_play_chance_pct)
    {
        let recovered = rolls::between(rng, config.self_play_recovery);
        spiritling.conditions.happiness =
            spiritling.conditions.happiness.saturating_add(recovered);
        if spiritling.conditions.happiness > STAT_CAP {
            spiritling.conditions.happiness = STAT_CAP;
        }
        let cost = rolls::between(rng, config.self_play_energy_cost);
        spiritling.conditions.energy = spiritling.conditions.energy.saturating_sub(cost);
        spiritling.experience = spiritling.experience.saturating_add(1);
        events.push(ActionEvent {
            kind: ActionKind::AutoPlay,
            message: format!("{} is playing happily by itself.", spiritling.name),
        });
    }

    // Restless spiritlings sometimes burn off surplus energy.
    if spiritling.conditions.energy > config.restless_threshold
        && rolls::percent(rng, config.idle_activity_chance_pct)
    {
        let cost = rolls::between(rng, config.idle_activity_energy_cost);
        spiritling.conditions.energy = spiritling.conditions.energy.saturating_sub(cost);
        let earned = rolls::between(rng, config.idle_activity_experience);
        spiritling.experience = spiritling.experience.saturating_add(earned);
        let idx = rng.random_range(0..ACTIVITY_FLAVORS.len());
        let flavor = ACTIVITY_FLAVORS.get(idx).copied().unwrap_or("wandered about.");
        events.push(ActionEvent {
            kind: ActionKind::AutoActivity,
            message: format!("{} {flavor}", spiritling.name),
        });
    }

    // Autonomous experience may have crossed the level threshold.
    if growth::try_level_up(spiritling)? {
        events.push(ActionEvent {
            kind: ActionKind::LevelUp,
            message: format!("{} grew to level {}!", spiritling.name, spiritling.level),
        });
    }

    Ok(events)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use spiritkeep_types::{Element, OwnerId, Temperament};

    use super::*;

    fn test_spiritling() -> Spiritling {
        Spiritling::hatch(OwnerId::new(), "Moro", Element::Shadow, Temperament::Glutton)
    }

    /// Config with every chance forced off, so individual behaviours can
    /// be switched on one at a time.
    fn silent_config() -> CareConfig {
        CareConfig {
            self_feed_chance_pct: 0,
            self_play_chance_pct: 0,
            idle_activity_chance_pct: 0,
            ..CareConfig::default()
        }
    }

    fn kinds(events: &[ActionEvent]) -> Vec<ActionKind> {
        events.iter().map(|e| e.kind).collect()
    }

    #[test]
    fn self_feed_fires_when_hungry_and_roll_succeeds() {
        let cfg = CareConfig {
            self_feed_chance_pct: 100,
            ..silent_config()
        };
        let mut s = test_spiritling();
        s.conditions.hunger = 10;
        let mut rng = SmallRng::seed_from_u64(42);
        let events = apply_autonomous_actions(&mut s, &cfg, &mut rng).unwrap_or_default();
        assert_eq!(kinds(&events), vec![ActionKind::AutoEat]);
        assert!((20..=30).contains(&s.conditions.hunger));
        assert_eq!(s.experience, 1);
    }

    #[test]
    fn self_feed_needs_low_hunger() {
        let cfg = CareConfig {
            self_feed_chance_pct: 100,
            ..silent_config()
        };
        let mut s = test_spiritling();
        s.conditions.hunger = 30; // Not below the threshold.
        let mut rng = SmallRng::seed_from_u64(42);
        let events = apply_autonomous_actions(&mut s, &cfg, &mut rng).unwrap_or_default();
        assert!(events.is_empty());
        assert_eq!(s.conditions.hunger, 30);
        assert_eq!(s.experience, 0);
    }

    #[test]
    fn self_play_never_fires_when_content() {
        // Happiness at or above the bored threshold suppresses self-play
        // regardless of the probability roll.
        let cfg = CareConfig {
            self_play_chance_pct: 100,
            ..silent_config()
        };
        let mut s = test_spiritling();
        s.conditions.happiness = 40;
        let mut rng = SmallRng::seed_from_u64(42);
        let events = apply_autonomous_actions(&mut s, &cfg, &mut rng).unwrap_or_default();
        assert!(events.is_empty());
    }

    #[test]
    fn self_play_restores_happiness_at_energy_cost() {
        let cfg = CareConfig {
            self_play_chance_pct: 100,
            ..silent_config()
        };
        let mut s = test_spiritling();
        s.conditions.happiness = 20;
        s.conditions.energy = 50;
        let mut rng = SmallRng::seed_from_u64(42);
        let events = apply_autonomous_actions(&mut s, &cfg, &mut rng).unwrap_or_default();
        assert_eq!(kinds(&events), vec![ActionKind::AutoPlay]);
        assert!((25..=30).contains(&s.conditions.happiness));
        assert!((40..=45).contains(&s.conditions.energy));
        assert_eq!(s.experience, 1);
    }

    #[test]
    fn idle_activity_burns_energy_and_earns_experience() {
        let cfg = CareConfig {
            idle_activity_chance_pct: 100,
            ..silent_config()
        };
        let mut s = test_spiritling();
        s.conditions.energy = 90;
        let mut rng = SmallRng::seed_from_u64(42);
        let events = apply_autonomous_actions(&mut s, &cfg, &mut rng).unwrap_or_default();
        assert_eq!(kinds(&events), vec![ActionKind::AutoActivity]);
        assert!((75..=80).contains(&s.conditions.energy));
        assert!((1..=2).contains(&s.experience));
        let message = events.first().map(|e| e.message.clone()).unwrap_or_default();
        assert!(message.starts_with("Moro "));
    }

    #[test]
    fn all_three_opportunities_can_fire_in_one_tick() {
        let cfg = CareConfig {
            self_feed_chance_pct: 100,
            self_play_chance_pct: 100,
            idle_activity_chance_pct: 100,
            ..CareConfig::default()
        };
        let mut s = test_spiritling();
        s.conditions.hunger = 5;
        s.conditions.happiness = 10;
        s.conditions.energy = 100;
        let mut rng = SmallRng::seed_from_u64(42);
        let events = apply_autonomous_actions(&mut s, &cfg, &mut rng).unwrap_or_default();
        assert_eq!(
            kinds(&events),
            vec![ActionKind::AutoEat, ActionKind::AutoPlay, ActionKind::AutoActivity]
        );
        assert_eq!(s.experience, 3);
    }

    #[test]
    fn level_up_event_is_appended_last() {
        let cfg = CareConfig {
            self_feed_chance_pct: 100,
            ..silent_config()
        };
        let mut s = test_spiritling();
        s.conditions.hunger = 5;
        s.experience = 99; // The foraging point crosses the threshold.
        let mut rng = SmallRng::seed_from_u64(42);
        let events = apply_autonomous_actions(&mut s, &cfg, &mut rng).unwrap_or_default();
        assert_eq!(kinds(&events), vec![ActionKind::AutoEat, ActionKind::LevelUp]);
        assert_eq!(s.level, 2);
        assert_eq!(s.experience, 0);
        let message = events.last().map(|e| e.message.clone()).unwrap_or_default();
        assert_eq!(message, "Moro grew to level 2!");
    }

    #[test]
    fn hungry_but_tired_spiritling_feeds_without_playing() {
        // End-to-end scenario: forced feed roll, suppressed play roll.
        let cfg = CareConfig {
            self_feed_chance_pct: 100,
            self_play_chance_pct: 0,
            idle_activity_chance_pct: 0,
            ..CareConfig::default()
        };
        let mut s = test_spiritling();
        s.conditions.hunger = 5;
        s.conditions.happiness = 90;
        s.conditions.energy = 50;
        let mut rng = SmallRng::seed_from_u64(42);
        let events = apply_autonomous_actions(&mut s, &cfg, &mut rng).unwrap_or_default();
        assert_eq!(kinds(&events), vec![ActionKind::AutoEat]);
        assert!((15..=25).contains(&s.conditions.hunger));
        assert_eq!(s.conditions.happiness, 90);
    }

    #[test]
    fn nothing_happens_when_all_rolls_fail() {
        let cfg = silent_config();
        let mut s = test_spiritling();
        s.conditions.hunger = 5;
        s.conditions.happiness = 10;
        s.conditions.energy = 100;
        let before = s.clone();
        let mut rng = SmallRng::seed_from_u64(42);
        let events = apply_autonomous_actions(&mut s, &cfg, &mut rng).unwrap_or_default();
        assert!(events.is_empty());
        assert_eq!(s, before);
    }
}
