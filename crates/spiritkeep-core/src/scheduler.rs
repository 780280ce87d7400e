//! The background tick scheduler.
//!
//! A single long-lived task owns all autonomous mutation: every pass it
//! lists the full set of spiritling ids and processes each one
//! sequentially through the [`TickProcessor`], with a small inter-creature
//! pause to spread load. Between passes it sleeps the configured interval
//! (nominally five minutes); a pass-level failure is logged and followed
//! by a shorter backoff sleep before the loop retries.
//!
//! The scheduler never terminates and is started exactly once by the
//! engine binary. There is no per-creature parallelism and no locking:
//! processing is strictly sequential within a pass, and the inter-creature
//! pause is a cooperative yield, not a correctness requirement.

use std::time::Duration;

use rand::Rng;
use tracing::{error, info};

use crate::processor::{ProcessError, TickProcessor};
use crate::store::{ActionLogSink, SpiritlingStore};

/// Default sleep between full passes (five minutes).
const DEFAULT_PASS_INTERVAL: Duration = Duration::from_secs(300);

/// Default pause between creatures within a pass.
const DEFAULT_CREATURE_PAUSE: Duration = Duration::from_millis(100);

/// Default backoff sleep after a failed pass.
const DEFAULT_BACKOFF: Duration = Duration::from_secs(60);

/// Sleep intervals governing the scheduler loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulerConfig {
    /// Sleep between successful passes.
    pub pass_interval: Duration,
    /// Pause between creatures within a pass. Zero skips the sleep.
    pub creature_pause: Duration,
    /// Sleep before retrying after a failed pass.
    pub backoff: Duration,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            pass_interval: DEFAULT_PASS_INTERVAL,
            creature_pause: DEFAULT_CREATURE_PAUSE,
            backoff: DEFAULT_BACKOFF,
        }
    }
}

/// Summary of one completed pass over all spiritlings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassSummary {
    /// Number of ids the store listed at the start of the pass.
    pub listed: usize,
    /// Number of spiritlings actually processed (missing or abandoned
    /// records are listed but not processed).
    pub processed: usize,
    /// Total autonomous-action events generated across the pass.
    pub events: usize,
}

/// The long-running background scheduler.
///
/// Owns the [`TickProcessor`] and the random generator that drives every
/// probability roll, so a seeded generator makes a whole pass
/// reproducible in tests.
pub struct Scheduler<S, L, R> {
    processor: TickProcessor<S, L>,
    rng: R,
    config: SchedulerConfig,
}

impl<S: SpiritlingStore, L: ActionLogSink, R: Rng> Scheduler<S, L, R> {
    /// Create a scheduler with default intervals.
    pub fn new(processor: TickProcessor<S, L>, rng: R) -> Self {
        Self {
            processor,
            rng,
            config: SchedulerConfig::default(),
        }
    }

    /// Override the sleep intervals.
    #[must_use]
    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the scheduler for the lifetime of the process.
    ///
    /// Loops forever: one pass, then the pass-interval sleep; on a
    /// pass-level failure, the error is logged and the backoff sleep is
    /// applied before retrying. No failure escalates out of this loop.
    pub async fn run(mut self) {
        info!(
            pass_interval_secs = self.config.pass_interval.as_secs(),
            backoff_secs = self.config.backoff.as_secs(),
            "background scheduler starting"
        );

        loop {
            match self.run_pass().await {
                Ok(summary) => {
                    info!(
                        listed = summary.listed,
                        processed = summary.processed,
                        events = summary.events,
                        "pass complete"
                    );
                    tokio::time::sleep(self.config.pass_interval).await;
                }
                Err(pass_error) => {
                    error!(error = %pass_error, "pass failed, backing off");
                    tokio::time::sleep(self.config.backoff).await;
                }
            }
        }
    }

    /// Execute one full pass over every spiritling in the store.
    ///
    /// Public so tests can drive passes directly without the outer loop.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError`] only for pass-level failures (the initial
    /// id listing); per-creature failures are already handled inside the
    /// processor and merely reduce the processed count.
    pub async fn run_pass(&mut self) -> Result<PassSummary, ProcessError> {
        let ids = self.processor.store().list_ids().await?;
        let listed = ids.len();
        let mut processed: usize = 0;
        let mut events: usize = 0;

        for id in ids {
            if let Some(outcome) = self.processor.process_spiritling(id, &mut self.rng).await {
                processed = processed.saturating_add(1);
                events = events.saturating_add(outcome.events.len());
            }
            if !self.config.creature_pause.is_zero() {
                tokio::time::sleep(self.config.creature_pause).await;
            }
        }

        Ok(PassSummary {
            listed,
            processed,
            events,
        })
    }
}
