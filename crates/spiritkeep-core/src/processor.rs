//! Per-spiritling tick processing.
//!
//! One call to [`TickProcessor::process_spiritling`] applies one tick of
//! background time to one creature: load the record, maybe decay it, maybe
//! let it act on its own, persist the result, and append any log entries
//! the actions produced.
//!
//! The two rule invocations are gated by independent probability rolls
//! (defaults 50% decay, 30% autonomy), so in any given tick a spiritling
//! may experience neither, decay only, actions only, or both. This
//! independent gating is deliberate live-game behaviour -- decay is not
//! guaranteed every pass.
//!
//! Failures are isolated per creature: a missing record is skipped
//! silently, and a store failure is logged and abandoned without
//! propagating, so one broken record cannot stall the rest of a pass.

use chrono::Utc;
use rand::Rng;
use spiritkeep_creatures::{ActionEvent, CareConfig, CreatureError, autonomy, decay};
use spiritkeep_types::SpiritlingId;
use tracing::{debug, warn};

use crate::hook::TickHook;
use crate::store::{ActionLogSink, SpiritlingStore, StoreError};

/// Probability gates for the two per-tick rule invocations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickTuning {
    /// Percent chance that decay runs for a spiritling in a pass
    /// (default: 50).
    pub decay_chance_pct: u32,
    /// Percent chance that autonomous actions run for a spiritling in a
    /// pass (default: 30). Rolled independently of decay.
    pub autonomy_chance_pct: u32,
}

impl Default for TickTuning {
    fn default() -> Self {
        Self {
            decay_chance_pct: 50,
            autonomy_chance_pct: 30,
        }
    }
}

/// Errors that can abort one spiritling's tick.
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    /// The store rejected a read or write.
    #[error("store error: {source}")]
    Store {
        /// The underlying store error.
        #[from]
        source: StoreError,
    },

    /// Rule evaluation failed.
    #[error("rule error: {source}")]
    Rules {
        /// The underlying rule error.
        #[from]
        source: CreatureError,
    },
}

/// What one processed tick did to one spiritling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickOutcome {
    /// Whether the decay rules ran this tick.
    pub decayed: bool,
    /// Whether the autonomy rules ran this tick (even if no action fired).
    pub acted: bool,
    /// Events generated by autonomous actions, in evaluation order.
    pub events: Vec<ActionEvent>,
}

/// Applies one tick of rule evaluation to single spiritlings and persists
/// the results.
///
/// Owns the store, the log sink, the care tunables, and an optional
/// post-tick hook. The random generator is threaded in per call so tests
/// can seed it.
pub struct TickProcessor<S, L> {
    store: S,
    log: L,
    care: CareConfig,
    tuning: TickTuning,
    hook: Option<Box<dyn TickHook>>,
}

impl<S: SpiritlingStore, L: ActionLogSink> TickProcessor<S, L> {
    /// Create a processor with default care tunables, default gating, and
    /// no hook.
    pub fn new(store: S, log: L) -> Self {
        Self {
            store,
            log,
            care: CareConfig::default(),
            tuning: TickTuning::default(),
            hook: None,
        }
    }

    /// Override the care tunables.
    #[must_use]
    pub fn with_care_config(mut self, care: CareConfig) -> Self {
        self.care = care;
        self
    }

    /// Override the probability gates.
    #[must_use]
    pub fn with_tuning(mut self, tuning: TickTuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// Attach a post-tick hook.
    #[must_use]
    pub fn with_hook(mut self, hook: Box<dyn TickHook>) -> Self {
        self.hook = Some(hook);
        self
    }

    /// The underlying spiritling store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Process one tick for one spiritling.
    ///
    /// Errors are handled here, not propagated: a failure is logged at
    /// warn level and the tick for this creature is abandoned so the
    /// caller can continue with the rest of the pass. Returns `None` when
    /// the record was missing or the tick was abandoned.
    pub async fn process_spiritling<R: Rng>(
        &mut self,
        id: SpiritlingId,
        rng: &mut R,
    ) -> Option<TickOutcome> {
        match self.process_inner(id, rng).await {
            Ok(outcome) => outcome,
            Err(error) => {
                warn!(spiritling_id = %id, error = %error, "tick abandoned for spiritling");
                None
            }
        }
    }

    async fn process_inner<R: Rng>(
        &mut self,
        id: SpiritlingId,
        rng: &mut R,
    ) -> Result<Option<TickOutcome>, ProcessError> {
        let Some(mut spiritling) = self.store.load(id).await? else {
            // Deleted between listing and loading; a normal outcome.
            debug!(spiritling_id = %id, "spiritling no longer exists, skipping");
            return Ok(None);
        };

        let decay_roll: u32 = rng.random_range(0..100);
        let decayed = decay_roll < self.tuning.decay_chance_pct;
        if decayed {
            decay::apply_decay(&mut spiritling, &self.care, rng);
        }

        let autonomy_roll: u32 = rng.random_range(0..100);
        let acted = autonomy_roll < self.tuning.autonomy_chance_pct;
        let events = if acted {
            autonomy::apply_autonomous_actions(&mut spiritling, &self.care, rng)?
        } else {
            Vec::new()
        };

        spiritling.updated_at = Utc::now();
        self.store.save(&spiritling).await?;

        for event in &events {
            // Fire-and-forget: a dropped log line is not worth failing
            // the already-persisted tick over.
            if let Err(error) = self.log.append(spiritling.id, event.kind, &event.message).await {
                warn!(
                    spiritling_id = %spiritling.id,
                    kind = event.kind.as_str(),
                    error = %error,
                    "failed to append action log entry"
                );
            }
        }

        if let Some(hook) = self.hook.as_mut() {
            hook.on_spiritling_processed(&spiritling, &events);
        }

        Ok(Some(TickOutcome {
            decayed,
            acted,
            events,
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use spiritkeep_types::{ActionKind, Conditions, Element, OwnerId, Spiritling, Temperament};

    use super::*;
    use crate::hook::NoOpHook;
    use crate::store::{MemoryActionLog, MemorySpiritlingStore};

    fn test_spiritling() -> Spiritling {
        Spiritling::hatch(OwnerId::new(), "Juniper", Element::Earth, Temperament::Normal)
    }

    /// Gating forced fully on or off so tests are deterministic.
    const fn forced(decay: u32, autonomy: u32) -> TickTuning {
        TickTuning {
            decay_chance_pct: decay,
            autonomy_chance_pct: autonomy,
        }
    }

    #[tokio::test]
    async fn missing_spiritling_is_skipped_silently() {
        let mut processor =
            TickProcessor::new(MemorySpiritlingStore::new(), MemoryActionLog::new());
        let mut rng = SmallRng::seed_from_u64(42);
        let outcome = processor.process_spiritling(SpiritlingId::new(), &mut rng).await;
        assert!(outcome.is_none());
    }

    #[tokio::test]
    async fn gated_off_tick_persists_without_mutation() {
        let store = MemorySpiritlingStore::new();
        let s = test_spiritling();
        let id = s.id;
        let conditions_before = s.conditions;
        store.insert(s).await;

        let mut processor = TickProcessor::new(store, MemoryActionLog::new())
            .with_tuning(forced(0, 0));
        let mut rng = SmallRng::seed_from_u64(42);
        let outcome = processor.process_spiritling(id, &mut rng).await;

        assert_eq!(
            outcome,
            Some(TickOutcome {
                decayed: false,
                acted: false,
                events: Vec::new(),
            })
        );
        let saved = processor.store().load(id).await.ok().flatten();
        assert_eq!(saved.map(|s| s.conditions), Some(conditions_before));
    }

    #[tokio::test]
    async fn decay_mutations_are_persisted() {
        let store = MemorySpiritlingStore::new();
        let mut s = test_spiritling();
        s.conditions = Conditions {
            hunger: 50,
            happiness: 50,
            energy: 50,
            health_status: 100,
            cleanliness: 50,
        };
        let id = s.id;
        store.insert(s).await;

        let mut processor = TickProcessor::new(store, MemoryActionLog::new())
            .with_tuning(forced(100, 0));
        let mut rng = SmallRng::seed_from_u64(42);
        let outcome = processor.process_spiritling(id, &mut rng).await;
        assert!(outcome.is_some_and(|o| o.decayed && !o.acted));

        let saved = processor.store().load(id).await.ok().flatten();
        let hunger = saved.map(|s| s.conditions.hunger).unwrap_or_default();
        assert!((47..=49).contains(&hunger));
    }

    #[tokio::test]
    async fn autonomous_events_reach_the_action_log() {
        let store = MemorySpiritlingStore::new();
        let mut s = test_spiritling();
        s.conditions.hunger = 5; // Guarantees the self-feed threshold.
        let id = s.id;
        store.insert(s).await;

        let care = CareConfig {
            self_feed_chance_pct: 100,
            self_play_chance_pct: 0,
            idle_activity_chance_pct: 0,
            ..CareConfig::default()
        };
        let log = MemoryActionLog::new();
        let mut processor = TickProcessor::new(store, log)
            .with_care_config(care)
            .with_tuning(forced(0, 100));
        let mut rng = SmallRng::seed_from_u64(42);
        let outcome = processor.process_spiritling(id, &mut rng).await;
        assert!(outcome.is_some_and(|o| o.acted && o.events.len() == 1));

        let saved = processor.store().load(id).await.ok().flatten();
        let hunger = saved.map(|s| s.conditions.hunger).unwrap_or_default();
        assert!((15..=25).contains(&hunger));
    }

    #[tokio::test]
    async fn log_entries_carry_kind_and_message() {
        let store = MemorySpiritlingStore::new();
        let mut s = test_spiritling();
        s.conditions.hunger = 5;
        let id = s.id;
        store.insert(s).await;

        let care = CareConfig {
            self_feed_chance_pct: 100,
            self_play_chance_pct: 0,
            idle_activity_chance_pct: 0,
            ..CareConfig::default()
        };
        // Keep a shared handle on the log so it can be inspected after.
        let log = Arc::new(MemoryActionLog::new());
        let mut processor = TickProcessor::new(store, Arc::clone(&log))
            .with_care_config(care)
            .with_tuning(forced(0, 100));
        let mut rng = SmallRng::seed_from_u64(42);
        let _ = processor.process_spiritling(id, &mut rng).await;

        let entries = log.entries().await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries.first().map(|e| e.kind), Some(ActionKind::AutoEat));
        assert_eq!(entries.first().map(|e| e.spiritling_id), Some(id));
        assert!(
            entries
                .first()
                .is_some_and(|e| e.message.contains("Juniper"))
        );
    }

    /// Hook that counts invocations through a shared counter.
    struct CountingHook {
        calls: Arc<AtomicUsize>,
    }

    impl TickHook for CountingHook {
        fn on_spiritling_processed(&mut self, _spiritling: &Spiritling, _events: &[ActionEvent]) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn hook_fires_after_every_persisted_tick() {
        let store = MemorySpiritlingStore::new();
        let s = test_spiritling();
        let id = s.id;
        store.insert(s).await;

        let calls = Arc::new(AtomicUsize::new(0));
        let mut processor = TickProcessor::new(store, MemoryActionLog::new())
            .with_tuning(forced(0, 0))
            .with_hook(Box::new(CountingHook {
                calls: Arc::clone(&calls),
            }));
        let mut rng = SmallRng::seed_from_u64(42);
        let _ = processor.process_spiritling(id, &mut rng).await;
        let _ = processor.process_spiritling(id, &mut rng).await;
        // A missing record never reaches the hook.
        let _ = processor.process_spiritling(SpiritlingId::new(), &mut rng).await;

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn no_op_hook_is_harmless() {
        let store = MemorySpiritlingStore::new();
        let s = test_spiritling();
        let id = s.id;
        store.insert(s).await;

        let mut processor = TickProcessor::new(store, MemoryActionLog::new())
            .with_hook(Box::new(NoOpHook::new()));
        let mut rng = SmallRng::seed_from_u64(42);
        assert!(processor.process_spiritling(id, &mut rng).await.is_some());
    }
}
