//! Grace-period deletion sweeper
//!
//! Periodically finalizes accounts whose deletion deadline has passed.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{error, info, instrument, warn};

use backoffice_common::LifecycleConfig;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::moderation::ModerationService;

/// Sweeper configuration
#[derive(Debug, Clone, Copy)]
pub struct SweeperConfig {
    /// Time between sweeps
    pub interval: Duration,
    /// Maximum accounts finalized per sweep
    pub batch_size: usize,
}

impl Default for SweeperConfig {
    fn default() -> Self {
        Self::from(&LifecycleConfig::default())
    }
}

impl From<&LifecycleConfig> for SweeperConfig {
    fn from(config: &LifecycleConfig) -> Self {
        Self {
            // tokio intervals panic on a zero period
            interval: Duration::from_secs(config.sweep_interval_secs.max(1)),
            batch_size: config.sweep_batch_size.max(1),
        }
    }
}

/// Counts from a single sweep
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SweepReport {
    pub finalized: usize,
    /// Returned by the repository but no longer due when reloaded
    pub skipped: usize,
    pub failed: usize,
}

/// Background task that finalizes due deletions as the system actor
pub struct DeletionSweeper {
    ctx: ServiceContext,
    config: SweeperConfig,
}

impl DeletionSweeper {
    pub fn new(ctx: ServiceContext, config: SweeperConfig) -> Self {
        Self { ctx, config }
    }

    /// Run a single sweep
    ///
    /// A failure on one account is logged and does not stop the sweep.
    #[instrument(skip(self))]
    pub async fn run_once(&self) -> ServiceResult<SweepReport> {
        let due = self
            .ctx
            .account_repo()
            .find_due_deletions(self.ctx.now(), self.config.batch_size)
            .await?;

        let service = ModerationService::new(&self.ctx);
        let mut report = SweepReport::default();

        for user_id in due {
            match service.finalize_deletion(&user_id).await {
                Ok(Some(_)) => report.finalized += 1,
                Ok(None) => report.skipped += 1,
                Err(e) => {
                    warn!(user_id = %user_id, error = %e, "Failed to finalize deletion");
                    report.failed += 1;
                }
            }
        }

        Ok(report)
    }

    /// Spawn the sweeper on the tokio runtime
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = interval(self.config.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            info!(
                interval_secs = self.config.interval.as_secs(),
                batch_size = self.config.batch_size,
                "Deletion sweeper started"
            );

            loop {
                ticker.tick().await;
                match self.run_once().await {
                    Ok(report) if report.finalized > 0 || report.failed > 0 => {
                        info!(
                            finalized = report.finalized,
                            skipped = report.skipped,
                            failed = report.failed,
                            "Deletion sweep finished"
                        );
                    }
                    Ok(_) => {}
                    Err(e) => error!(error = %e, "Deletion sweep failed"),
                }
            }
        })
    }
}
