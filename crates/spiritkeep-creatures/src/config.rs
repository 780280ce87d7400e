//! Configuration constants and defaults for spiritling care mechanics.
//!
//! The [`CareConfig`] struct bundles every tunable used by the decay and
//! autonomous-action rules so that callers (tick processor, tests) can
//! override defaults. The defaults reproduce the live game balance; tests
//! force the probability fields to 0 or 100 to make individual behaviours
//! deterministic.
//!
//! All ranges are inclusive `[min, max]` pairs drawn with a uniform
//! integer roll. All probabilities are whole percentages in `[0, 100]`.

/// Tunables for per-tick decay and autonomous behaviour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CareConfig {
    /// Hunger lost per tick, `[min, max]` (default: 1..=3).
    pub hunger_decay: (u32, u32),

    /// Hunger value below which the spiritling counts as hungry
    /// (default: 30). Hungry spiritlings lose happiness faster and will
    /// try to feed themselves.
    pub hungry_threshold: u32,

    /// Happiness lost per tick while hungry, `[min, max]` (default: 2..=4).
    pub happiness_decay_hungry: (u32, u32),

    /// Happiness lost per tick otherwise, `[min, max]` (default: 0..=2).
    pub happiness_decay: (u32, u32),

    /// Energy passively recovered per tick, `[min, max]` (default: 1..=2).
    pub energy_regen: (u32, u32),

    /// Cleanliness value below which health starts to suffer (default: 30).
    pub grime_threshold: u32,

    /// Health lost per tick while below the grime threshold, `[min, max]`
    /// (default: 0..=1).
    pub grime_damage: (u32, u32),

    /// Cleanliness lost per tick, `[min, max]` (default: 0..=1).
    pub cleanliness_decay: (u32, u32),

    /// Percent chance a hungry spiritling feeds itself (default: 30).
    pub self_feed_chance_pct: u32,

    /// Hunger recovered by self-feeding, `[min, max]` (default: 10..=20).
    pub self_feed_recovery: (u32, u32),

    /// Happiness value below which the spiritling may play alone
    /// (default: 40).
    pub bored_threshold: u32,

    /// Percent chance a bored spiritling plays by itself (default: 20).
    pub self_play_chance_pct: u32,

    /// Happiness recovered by self-play, `[min, max]` (default: 5..=10).
    pub self_play_recovery: (u32, u32),

    /// Energy spent on self-play, `[min, max]` (default: 5..=10).
    pub self_play_energy_cost: (u32, u32),

    /// Energy value above which the spiritling may burn some off
    /// (default: 70).
    pub restless_threshold: u32,

    /// Percent chance a restless spiritling does an idle activity
    /// (default: 10).
    pub idle_activity_chance_pct: u32,

    /// Energy spent on an idle activity, `[min, max]` (default: 10..=15).
    pub idle_activity_energy_cost: (u32, u32),

    /// Experience gained from an idle activity, `[min, max]`
    /// (default: 1..=2).
    pub idle_activity_experience: (u32, u32),
}

impl Default for CareConfig {
    fn default() -> Self {
        Self {
            hunger_decay: (1, 3),
            hungry_threshold: 30,
            happiness_decay_hungry: (2, 4),
            happiness_decay: (0, 2),
            energy_regen: (1, 2),
            grime_threshold: 30,
            grime_damage: (0, 1),
            cleanliness_decay: (0, 1),
            self_feed_chance_pct: 30,
            self_feed_recovery: (10, 20),
            bored_threshold: 40,
            self_play_chance_pct: 20,
            self_play_recovery: (5, 10),
            self_play_energy_cost: (5, 10),
            restless_threshold: 70,
            idle_activity_chance_pct: 10,
            idle_activity_energy_cost: (10, 15),
            idle_activity_experience: (1, 2),
        }
    }
}
